//! Compact bitmap font format
//!
//! Fonts are self-contained, read-only byte blobs compiled into the
//! firmware. A blob describes a small character set (typically the 96
//! printable ASCII codes) rendered as column-major 1-bit bitmaps.
//!
//! # Binary Layout
//!
//! All multi-byte fields are big-endian:
//! ```text
//! ┌───────────┬────────┬────────────┬─────────┐
//! │ MAX_WIDTH │ HEIGHT │ CHAR_COUNT │ SPACING │   header, 5 bytes
//! │ 1B        │ 1B     │ 2B         │ 1B      │
//! ├───────────┴────────┴────────────┴─────────┤
//! │ CHAR_TABLE: CHAR_COUNT character codes    │
//! ├───────────────────────────────────────────┤
//! │ GLYPH_TABLE: CHAR_COUNT × [OFFSET(2B),    │
//! │              SIZE(1B), WIDTH(1B)]         │
//! ├───────────────────────────────────────────┤
//! │ BITMAP_DATA: column-major glyph bitmaps   │
//! └───────────────────────────────────────────┘
//! ```
//!
//! A glyph table offset of `0xFFFF` marks a character that is present in
//! the table but has no bitmap; it still occupies its declared width.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod font;
pub mod fonts;

pub use font::{Font, FontHeader, Glyph, GLYPH_ENTRY_SIZE, HEADER_SIZE, UNDEFINED_OFFSET};
