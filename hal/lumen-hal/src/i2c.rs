//! I2C display interface
//!
//! SH1106/SSD1306 controllers on I2C expect every write to start with a
//! control byte selecting the command or data stream. This module wraps any
//! `embedded_hal::i2c::I2c` master into a [`DisplayBus`].

use embedded_hal::i2c::{Error as _, ErrorKind, I2c, NoAcknowledgeSource, Operation};

use crate::bus::{DisplayBus, Transfer};

/// Default 7-bit address of SH1106/SSD1306 modules (0x3D with SA0 high)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte announcing a command stream
pub const COMMAND_HEAD: u8 = 0x00;

/// Control byte announcing a display RAM stream
pub const DATA_HEAD: u8 = 0x40;

/// I2C display interface configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// 7-bit device address
    pub address: u8,
    /// Control byte sent before command transfers
    pub command_head: u8,
    /// Control byte sent before data transfers
    pub data_head: u8,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            command_head: COMMAND_HEAD,
            data_head: DATA_HEAD,
        }
    }
}

impl I2cConfig {
    /// Default configuration at a different address
    pub const fn with_address(address: u8) -> Self {
        Self {
            address,
            command_head: COMMAND_HEAD,
            data_head: DATA_HEAD,
        }
    }

    /// Control byte for a transfer kind
    pub const fn head(&self, kind: Transfer) -> u8 {
        match kind {
            Transfer::Command => self.command_head,
            Transfer::Data => self.data_head,
        }
    }
}

/// Error from I2C display transfers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Bus error
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// Device did not acknowledge (not connected or wrong address)
    Nack,
    /// Overrun
    Overrun,
    /// Other error
    Other,
}

impl From<ErrorKind> for BusError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::Bus => BusError::Bus,
            ErrorKind::ArbitrationLoss => BusError::ArbitrationLost,
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
            | ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data)
            | ErrorKind::NoAcknowledge(NoAcknowledgeSource::Unknown) => BusError::Nack,
            ErrorKind::Overrun => BusError::Overrun,
            _ => BusError::Other,
        }
    }
}

/// [`DisplayBus`] over an `embedded-hal` I2C master
///
/// The control byte and payload go out in one transaction, so the panel
/// sees a single START/STOP per transfer.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    config: I2cConfig,
}

impl<I2C: I2c> I2cInterface<I2C> {
    /// Create an interface with the given configuration
    pub fn new(i2c: I2C, config: I2cConfig) -> Self {
        Self { i2c, config }
    }

    /// Get the active configuration
    pub fn config(&self) -> &I2cConfig {
        &self.config
    }

    /// Release the underlying I2C master
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> DisplayBus for I2cInterface<I2C> {
    type Error = BusError;

    fn transfer(&mut self, kind: Transfer, bytes: &[u8]) -> Result<(), BusError> {
        let head = [self.config.head(kind)];
        self.i2c
            .transaction(
                self.config.address,
                &mut [Operation::Write(&head), Operation::Write(bytes)],
            )
            .map_err(|e| BusError::from(e.kind()))
    }
}
