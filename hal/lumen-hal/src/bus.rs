//! Display bus abstraction
//!
//! Display controllers such as the SH1106 and SSD1306 distinguish command
//! bytes from display RAM writes. The transport decides how that is framed
//! (an I2C control byte, a D/C pin on SPI, ...); the core only says which
//! kind of transfer it wants and whether it worked.

/// Kind of bytes being sent to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transfer {
    /// Controller command stream
    Command,
    /// Display RAM data for the current page/column
    Data,
}

/// Synchronous, non-cancellable byte transfer to a display controller
///
/// A transfer either fully succeeds or reports an error. Implementations
/// must not retry internally; retry policy belongs to the caller.
pub trait DisplayBus {
    /// Error type for bus operations
    type Error;

    /// Send `bytes` as a single transfer of the given kind
    fn transfer(&mut self, kind: Transfer, bytes: &[u8]) -> Result<(), Self::Error>;

    /// Send a single command byte
    fn command(&mut self, cmd: u8) -> Result<(), Self::Error> {
        self.transfer(Transfer::Command, &[cmd])
    }

    /// Send a run of display RAM bytes
    fn data(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.transfer(Transfer::Data, bytes)
    }
}

impl<B: DisplayBus + ?Sized> DisplayBus for &mut B {
    type Error = B::Error;

    fn transfer(&mut self, kind: Transfer, bytes: &[u8]) -> Result<(), Self::Error> {
        (**self).transfer(kind, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Default)]
    struct Log {
        kinds: Vec<Transfer, 8>,
        bytes: Vec<u8, 32>,
    }

    impl DisplayBus for Log {
        type Error = ();

        fn transfer(&mut self, kind: Transfer, bytes: &[u8]) -> Result<(), ()> {
            self.kinds.push(kind).map_err(|_| ())?;
            self.bytes.extend_from_slice(bytes).map_err(|_| ())
        }
    }

    #[test]
    fn test_command_and_data_helpers() {
        let mut log = Log::default();
        log.command(0xB0).unwrap();
        log.data(&[1, 2, 3]).unwrap();

        assert_eq!(log.kinds.as_slice(), &[Transfer::Command, Transfer::Data]);
        assert_eq!(log.bytes.as_slice(), &[0xB0, 1, 2, 3]);
    }

    fn send_on<B: DisplayBus>(mut bus: B) -> Result<(), B::Error> {
        bus.command(0xAF)
    }

    #[test]
    fn test_mut_reference_forwards() {
        let mut log = Log::default();
        send_on(&mut log).unwrap();
        assert_eq!(log.bytes.as_slice(), &[0xAF]);
    }
}
