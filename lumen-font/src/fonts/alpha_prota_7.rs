//! AlphaProta 7 px bitmap font
//!
//! 5 px maximum advance, 8 px line, 96 glyphs from `' '` to DEL, 1 px spacing.
//! Converted from AlphaProta.ttf; the glyph data is distributed under the
//! GNU LGPL v3.

/// AlphaProta 7 font blob
#[rustfmt::skip]
pub static ALPHA_PROTA_7: [u8; 870] = [
    // Header: max width, height, char count (MSB, LSB), spacing
    0x05, 0x08, 0x00, 0x60, 0x01,
    // Character table
    0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, 0x28, 0x29, 0x2A, 0x2B,
    0x2C, 0x2D, 0x2E, 0x2F, 0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37,
    0x38, 0x39, 0x3A, 0x3B, 0x3C, 0x3D, 0x3E, 0x3F, 0x40, 0x41, 0x42, 0x43,
    0x44, 0x45, 0x46, 0x47, 0x48, 0x49, 0x4A, 0x4B, 0x4C, 0x4D, 0x4E, 0x4F,
    0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x5A, 0x5B,
    0x5C, 0x5D, 0x5E, 0x5F, 0x60, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67,
    0x68, 0x69, 0x6A, 0x6B, 0x6C, 0x6D, 0x6E, 0x6F, 0x70, 0x71, 0x72, 0x73,
    0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7A, 0x7B, 0x7C, 0x7D, 0x7E, 0x7F,
    // Glyph table: offset MSB, offset LSB, size, width
    0x00, 0x00, 0x00, 0x03, // ' '
    0x00, 0x00, 0x04, 0x05, // '!'
    0x00, 0x04, 0x02, 0x03, // '"'
    0x00, 0x06, 0x04, 0x05, // '#'
    0x00, 0x0A, 0x04, 0x05, // '$'
    0x00, 0x0E, 0x04, 0x05, // '%'
    0x00, 0x12, 0x04, 0x05, // '&'
    0x00, 0x16, 0x02, 0x03, // "'"
    0x00, 0x18, 0x05, 0x05, // '('
    0x00, 0x1D, 0x04, 0x05, // ')'
    0x00, 0x21, 0x02, 0x03, // '*'
    0x00, 0x23, 0x05, 0x05, // '+'
    0x00, 0x28, 0x02, 0x03, // ','
    0x00, 0x2A, 0x05, 0x05, // '-'
    0x00, 0x2F, 0x02, 0x03, // '.'
    0x00, 0x31, 0x05, 0x05, // '/'
    0x00, 0x36, 0x04, 0x04, // '0'
    0x00, 0x3A, 0x01, 0x02, // '1'
    0x00, 0x3B, 0x04, 0x04, // '2'
    0x00, 0x3F, 0x04, 0x05, // '3'
    0x00, 0x43, 0x04, 0x04, // '4'
    0x00, 0x47, 0x04, 0x04, // '5'
    0x00, 0x4B, 0x04, 0x04, // '6'
    0x00, 0x4F, 0x04, 0x05, // '7'
    0x00, 0x53, 0x04, 0x04, // '8'
    0x00, 0x57, 0x04, 0x04, // '9'
    0x00, 0x5B, 0x02, 0x03, // ':'
    0x00, 0x5D, 0x02, 0x03, // ';'
    0x00, 0x5F, 0x04, 0x05, // '<'
    0x00, 0x63, 0x05, 0x05, // '='
    0x00, 0x68, 0x04, 0x05, // '>'
    0x00, 0x6C, 0x04, 0x05, // '?'
    0x00, 0x70, 0x04, 0x05, // '@'
    0x00, 0x74, 0x04, 0x04, // 'A'
    0x00, 0x78, 0x04, 0x04, // 'B'
    0x00, 0x7C, 0x05, 0x05, // 'C'
    0x00, 0x81, 0x04, 0x04, // 'D'
    0x00, 0x85, 0x05, 0x05, // 'E'
    0x00, 0x8A, 0x05, 0x05, // 'F'
    0x00, 0x8F, 0x04, 0x04, // 'G'
    0x00, 0x93, 0x04, 0x04, // 'H'
    0x00, 0x97, 0x05, 0x05, // 'I'
    0x00, 0x9C, 0x04, 0x04, // 'J'
    0x00, 0xA0, 0x04, 0x05, // 'K'
    0x00, 0xA4, 0x05, 0x05, // 'L'
    0x00, 0xA9, 0x04, 0x04, // 'M'
    0x00, 0xAD, 0x04, 0x04, // 'N'
    0x00, 0xB1, 0x04, 0x04, // 'O'
    0x00, 0xB5, 0x04, 0x04, // 'P'
    0x00, 0xB9, 0x04, 0x04, // 'Q'
    0x00, 0xBD, 0x04, 0x04, // 'R'
    0x00, 0xC1, 0x04, 0x04, // 'S'
    0x00, 0xC5, 0x05, 0x05, // 'T'
    0x00, 0xCA, 0x04, 0x04, // 'U'
    0x00, 0xCE, 0x04, 0x04, // 'V'
    0x00, 0xD2, 0x04, 0x04, // 'W'
    0x00, 0xD6, 0x05, 0x05, // 'X'
    0x00, 0xDB, 0x05, 0x05, // 'Y'
    0x00, 0xE0, 0x04, 0x05, // 'Z'
    0x00, 0xE4, 0x05, 0x05, // '['
    0x00, 0xE9, 0x05, 0x05, // '\\'
    0x00, 0xEE, 0x04, 0x05, // ']'
    0x00, 0xF2, 0x04, 0x05, // '^'
    0x00, 0xF6, 0x05, 0x05, // '_'
    0x00, 0xFB, 0x04, 0x05, // '`'
    0x00, 0xFF, 0x04, 0x04, // 'a'
    0x01, 0x03, 0x04, 0x04, // 'b'
    0x01, 0x07, 0x05, 0x05, // 'c'
    0x01, 0x0C, 0x04, 0x04, // 'd'
    0x01, 0x10, 0x05, 0x05, // 'e'
    0x01, 0x15, 0x05, 0x05, // 'f'
    0x01, 0x1A, 0x04, 0x04, // 'g'
    0x01, 0x1E, 0x04, 0x04, // 'h'
    0x01, 0x22, 0x05, 0x05, // 'i'
    0x01, 0x27, 0x04, 0x04, // 'j'
    0x01, 0x2B, 0x04, 0x05, // 'k'
    0x01, 0x2F, 0x05, 0x05, // 'l'
    0x01, 0x34, 0x04, 0x04, // 'm'
    0x01, 0x38, 0x04, 0x04, // 'n'
    0x01, 0x3C, 0x04, 0x04, // 'o'
    0x01, 0x40, 0x04, 0x04, // 'p'
    0x01, 0x44, 0x04, 0x04, // 'q'
    0x01, 0x48, 0x04, 0x04, // 'r'
    0x01, 0x4C, 0x04, 0x04, // 's'
    0x01, 0x50, 0x05, 0x05, // 't'
    0x01, 0x55, 0x04, 0x04, // 'u'
    0x01, 0x59, 0x04, 0x04, // 'v'
    0x01, 0x5D, 0x04, 0x04, // 'w'
    0x01, 0x61, 0x05, 0x05, // 'x'
    0x01, 0x66, 0x05, 0x05, // 'y'
    0x01, 0x6B, 0x04, 0x05, // 'z'
    0x01, 0x6F, 0x05, 0x05, // '{'
    0x01, 0x74, 0x01, 0x05, // '|'
    0x01, 0x75, 0x04, 0x05, // '}'
    0x01, 0x79, 0x04, 0x05, // '~'
    0x01, 0x7D, 0x04, 0x05, // 0x7F
    // Bitmap data
    0x3E, 0x3E, 0x3E, 0x3E, 0x02, 0x00, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F,
    0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x02, 0x00,
    0x3E, 0x22, 0x22, 0x22, 0x00, 0x22, 0x22, 0x22, 0x3E, 0x02, 0x00, 0x08,
    0x08, 0x3E, 0x08, 0x08, 0x20, 0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x20,
    0x00, 0x20, 0x30, 0x1C, 0x0E, 0x02, 0x3E, 0x22, 0x22, 0x3E, 0x3E, 0x3A,
    0x2A, 0x2A, 0x2E, 0x2A, 0x2A, 0x2A, 0x3E, 0x0E, 0x08, 0x08, 0x3E, 0x2E,
    0x2A, 0x2A, 0x3A, 0x3E, 0x2A, 0x2A, 0x3A, 0x32, 0x1A, 0x0E, 0x02, 0x3E,
    0x2A, 0x2A, 0x3E, 0x2E, 0x2A, 0x2A, 0x3E, 0x28, 0x00, 0x28, 0x00, 0x3F,
    0x3F, 0x3F, 0x3F, 0x14, 0x14, 0x14, 0x14, 0x14, 0x3F, 0x3F, 0x3F, 0x3F,
    0x3E, 0x3E, 0x3E, 0x3E, 0x3F, 0x3F, 0x3F, 0x3F, 0x3E, 0x0A, 0x0A, 0x3E,
    0x3E, 0x2A, 0x3E, 0x3E, 0x3E, 0x22, 0x22, 0x22, 0x00, 0x3E, 0x22, 0x36,
    0x1C, 0x3E, 0x2A, 0x2A, 0x2A, 0x00, 0x3E, 0x0A, 0x0A, 0x0A, 0x00, 0x3E,
    0x22, 0x2A, 0x3A, 0x3E, 0x08, 0x08, 0x3E, 0x22, 0x22, 0x3E, 0x22, 0x22,
    0x30, 0x20, 0x20, 0x3E, 0x3E, 0x08, 0x1C, 0x36, 0x3E, 0x20, 0x20, 0x20,
    0x00, 0x3E, 0x3C, 0x3C, 0x3E, 0x3E, 0x0E, 0x38, 0x3E, 0x3E, 0x22, 0x22,
    0x3E, 0x3E, 0x0A, 0x0A, 0x0E, 0x3E, 0x22, 0x32, 0x3E, 0x3E, 0x0A, 0x3A,
    0x2E, 0x2E, 0x2A, 0x2A, 0x3A, 0x02, 0x02, 0x3E, 0x02, 0x02, 0x3E, 0x20,
    0x20, 0x3E, 0x1E, 0x30, 0x30, 0x1E, 0x3E, 0x1E, 0x1E, 0x3E, 0x22, 0x36,
    0x1C, 0x3E, 0x22, 0x02, 0x06, 0x3C, 0x06, 0x02, 0x32, 0x3A, 0x2E, 0x22,
    0x3E, 0x22, 0x22, 0x22, 0x00, 0x02, 0x06, 0x1C, 0x38, 0x20, 0x22, 0x22,
    0x22, 0x3E, 0x3F, 0x3F, 0x3F, 0x3F, 0x20, 0x20, 0x20, 0x20, 0x20, 0x3F,
    0x3F, 0x3F, 0x3F, 0x3E, 0x0A, 0x0A, 0x3E, 0x3E, 0x2A, 0x3E, 0x3E, 0x3E,
    0x22, 0x22, 0x22, 0x00, 0x3E, 0x22, 0x36, 0x1C, 0x3E, 0x2A, 0x2A, 0x2A,
    0x00, 0x3E, 0x0A, 0x0A, 0x0A, 0x00, 0x3E, 0x22, 0x2A, 0x3A, 0x3E, 0x08,
    0x08, 0x3E, 0x22, 0x22, 0x3E, 0x22, 0x22, 0x30, 0x20, 0x20, 0x3E, 0x3E,
    0x08, 0x1C, 0x36, 0x3E, 0x20, 0x20, 0x20, 0x00, 0x3E, 0x3C, 0x3C, 0x3E,
    0x3E, 0x0E, 0x38, 0x3E, 0x3E, 0x22, 0x22, 0x3E, 0x3E, 0x0A, 0x0A, 0x0E,
    0x3E, 0x22, 0x32, 0x3E, 0x3E, 0x0A, 0x3A, 0x2E, 0x2E, 0x2A, 0x2A, 0x3A,
    0x02, 0x02, 0x3E, 0x02, 0x02, 0x3E, 0x20, 0x20, 0x3E, 0x1E, 0x30, 0x30,
    0x1E, 0x3E, 0x1E, 0x1E, 0x3E, 0x22, 0x36, 0x1C, 0x3E, 0x22, 0x02, 0x06,
    0x3C, 0x06, 0x02, 0x32, 0x3A, 0x2E, 0x22, 0x3E, 0x22, 0x22, 0x22, 0x00,
    0x3E, 0x22, 0x22, 0x22, 0x3E, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F, 0x3F,
    0x3F,
];
