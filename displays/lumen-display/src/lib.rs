//! Page-buffered rendering for monochrome OLED panels
//!
//! This crate provides:
//! - [`Canvas`]: pending and committed page buffers with clipped pixel writes
//! - [`shapes`]: line, rectangle, circle and XBM rasterizers
//! - [`text`]: glyph rasterization, string measurement and layout
//! - [`utf8`]: per-stream UTF-8 to Latin-1 transliteration
//! - [`Display`]: dirty-page diffing that only sends changed pages and
//!   commits on full success
//!
//! # Architecture
//!
//! Drawing never touches the bus. Callers mutate the pending buffer through
//! the rasterizers and the text engine, then call [`Display::refresh`]
//! whenever they want the panel to catch up:
//!
//! ```text
//!  shapes / text ──► Canvas.pending ──┐
//!                                     ├─ diff per page ─► DisplayBus
//!                    Canvas.committed ◄┘  (commit on success)
//! ```
//!
//! ## Features
//!
//! - `defmt` - `defmt::Format` derives and sync logging
//! - `serde` - serialization of [`Color`], [`Controller`] and [`FontSize`]
//! - `embedded-graphics` - `DrawTarget` implementation for [`Canvas`]

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod backend;
pub mod canvas;
pub mod config;
#[cfg(feature = "embedded-graphics")]
pub mod graphics;
pub mod shapes;
pub mod sync;
pub mod text;
pub mod utf8;

// Re-export key types
pub use backend::{Color, DisplayError, PixelTarget};
pub use canvas::{Canvas, DEFAULT_BUFFER_SIZE};
pub use config::{Controller, DisplayConfig};
pub use sync::{Display, Refresh, SyncState};
pub use text::{FontSet, FontSize};
pub use utf8::Latin1Decoder;

pub use lumen_font::{Font, Glyph};
pub use lumen_hal::{DisplayBus, Transfer};
