//! UTF-8 to Latin-1 transliteration
//!
//! Fonts address glyphs by a single byte, so text is reduced to Latin-1
//! before layout. Only two-byte sequences for the Latin-1 supplement are
//! mapped, plus the Euro sign; every other non-ASCII byte is dropped.

use heapless::Vec;

/// Latin-1 code the Euro sign is mapped to
pub const EURO: u8 = 0x80;

/// Streaming UTF-8 to Latin-1 converter
///
/// Holds the last non-ASCII byte of one text stream. Keep one decoder per
/// independent stream; interleaving streams through a shared decoder mixes
/// their lead bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latin1Decoder {
    last: u8,
}

impl Latin1Decoder {
    /// Create a decoder with no pending lead byte
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Forget any pending lead byte
    pub fn reset(&mut self) {
        self.last = 0;
    }

    /// Feed one byte, returning the Latin-1 code it completes
    pub fn push(&mut self, byte: u8) -> Option<u8> {
        if byte < 0x80 {
            self.last = 0;
            return Some(byte);
        }

        let last = core::mem::replace(&mut self.last, byte);
        match last {
            0xC2 => Some(byte),
            0xC3 => Some(byte | 0xC0),
            // Tail of E2 82 AC
            0x82 if byte == 0xAC => Some(EURO),
            _ => None,
        }
    }

    /// Lazily convert a byte string, advancing the stream state per byte
    pub fn decode<'a>(&'a mut self, text: &'a [u8]) -> impl Iterator<Item = u8> + 'a {
        text.iter().filter_map(move |&byte| self.push(byte))
    }

    /// Convert a byte string, truncating at the output capacity
    pub fn transliterate<const N: usize>(&mut self, text: &[u8]) -> Vec<u8, N> {
        let mut out = Vec::new();
        for &byte in text {
            if let Some(code) = self.push(byte) {
                if out.push(code).is_err() {
                    break;
                }
            }
        }
        out
    }
}
