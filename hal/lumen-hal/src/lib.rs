//! Lumen Hardware Abstraction Layer
//!
//! This crate defines the single seam between the rendering core and the
//! physical panel: a synchronous byte-transfer primitive that tells the
//! controller whether the bytes are a command or pixel data.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lumen-display (canvas, text, sync)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-hal (this crate - DisplayBus)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ I2cInterface  │       │ board-specific│
//! │ (embedded-hal)│       │   transport   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bus::DisplayBus`] - Command/data transfers to a display controller
//! - [`i2c::I2cInterface`] - `DisplayBus` over any `embedded_hal::i2c::I2c`

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod i2c;

// Re-export key types at crate root for convenience
pub use bus::{DisplayBus, Transfer};
pub use i2c::{BusError, I2cConfig, I2cInterface};
