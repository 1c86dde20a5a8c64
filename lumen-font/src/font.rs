//! Font header and glyph lookup
//!
//! Every read is bounds-checked against the blob: a missing or truncated
//! font decodes as zeros instead of panicking, so a bad asset degrades to
//! blank text rather than a fault.

/// Size of the fixed font header in bytes
pub const HEADER_SIZE: usize = 5;

/// Size of one glyph table entry in bytes
pub const GLYPH_ENTRY_SIZE: usize = 4;

/// Glyph table offset marking a character without bitmap data
pub const UNDEFINED_OFFSET: u16 = 0xFFFF;

/// Fixed font header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontHeader {
    /// Widest glyph advance in pixels
    pub max_width: u8,
    /// Glyph height in pixels
    pub height: u8,
    /// Number of entries in the character and glyph tables
    pub char_count: u16,
    /// Recommended spacing between glyphs in pixels
    pub spacing: u8,
}

impl FontHeader {
    /// Bytes per bitmap column, `ceil(height / 8)`
    pub const fn bytes_per_column(&self) -> u8 {
        self.height.div_ceil(8)
    }

    /// Vertical advance for a new line
    pub const fn line_height(&self) -> u16 {
        self.height as u16 + self.spacing as u16
    }

    /// Offset of the glyph table within the blob
    pub const fn glyph_table_start(&self) -> usize {
        HEADER_SIZE + self.char_count as usize
    }

    /// Offset of the bitmap data within the blob
    pub const fn bitmap_start(&self) -> usize {
        HEADER_SIZE + self.char_count as usize * (1 + GLYPH_ENTRY_SIZE)
    }
}

/// Metrics and bitmap location of one character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// No pixels to draw; the character still advances by `width`
    Undefined {
        /// Advance in pixels (spacing excluded)
        width: u8,
    },
    /// Character with bitmap data
    Defined {
        /// Absolute offset of the bitmap within the font blob
        offset: usize,
        /// Bitmap size in bytes
        size: u8,
        /// Advance in pixels (spacing excluded)
        width: u8,
    },
}

impl Glyph {
    /// Advance in pixels, spacing excluded
    pub const fn width(&self) -> u8 {
        match *self {
            Glyph::Undefined { width } | Glyph::Defined { width, .. } => width,
        }
    }

    /// Bitmap size in bytes (0 when undefined)
    pub const fn size_bytes(&self) -> u8 {
        match *self {
            Glyph::Undefined { .. } => 0,
            Glyph::Defined { size, .. } => size,
        }
    }

    /// Absolute bitmap offset (0 when undefined)
    pub const fn bitmap_offset(&self) -> usize {
        match *self {
            Glyph::Undefined { .. } => 0,
            Glyph::Defined { offset, .. } => offset,
        }
    }

    /// Whether the glyph has bitmap data in the font
    pub const fn is_defined(&self) -> bool {
        matches!(self, Glyph::Defined { .. })
    }
}

/// Read-only view over a font blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font<'a> {
    data: &'a [u8],
}

impl Default for Font<'_> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<'a> Font<'a> {
    /// Absent font; every query returns zeros
    pub const EMPTY: Font<'static> = Font { data: &[] };

    /// Wrap a font blob
    ///
    /// The blob is not validated; malformed data only ever produces blank
    /// or truncated glyphs.
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Raw font blob
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Whether this font has no header at all
    pub const fn is_empty(&self) -> bool {
        self.data.len() < HEADER_SIZE
    }

    /// Read a byte, 0 if out of range
    fn byte(&self, index: usize) -> u8 {
        self.data.get(index).copied().unwrap_or(0)
    }

    /// Decode the fixed header
    pub fn header(&self) -> FontHeader {
        if self.is_empty() {
            return FontHeader::default();
        }
        FontHeader {
            max_width: self.byte(0),
            height: self.byte(1),
            char_count: u16::from_be_bytes([self.byte(2), self.byte(3)]),
            spacing: self.byte(4),
        }
    }

    /// Glyph height in pixels
    pub fn height(&self) -> u8 {
        self.header().height
    }

    /// Spacing between glyphs in pixels
    pub fn spacing(&self) -> u8 {
        self.header().spacing
    }

    /// Character codes in table order
    pub fn codes(&self) -> &'a [u8] {
        let count = self.header().char_count as usize;
        let end = (HEADER_SIZE + count).min(self.data.len());
        self.data.get(HEADER_SIZE..end).unwrap_or(&[])
    }

    /// Find the table index of a character code
    ///
    /// Linear scan, first match wins. This is O(char_count) per lookup,
    /// which is fine for the ~96 glyph fonts used on status panels.
    pub fn find(&self, code: u8) -> Option<usize> {
        self.codes().iter().position(|&c| c == code)
    }

    /// Glyph metrics for a table index
    pub fn glyph_at(&self, index: usize) -> Glyph {
        let header = self.header();
        let entry = header.glyph_table_start() + index * GLYPH_ENTRY_SIZE;
        let stored = u16::from_be_bytes([self.byte(entry), self.byte(entry + 1)]);
        let size = self.byte(entry + 2);
        let width = self.byte(entry + 3);

        if stored == UNDEFINED_OFFSET {
            return Glyph::Undefined { width };
        }
        Glyph::Defined {
            offset: header.bitmap_start() + stored as usize,
            size,
            width,
        }
    }

    /// Glyph metrics for a character code
    ///
    /// Codes missing from the table advance by half the maximum width.
    pub fn glyph(&self, code: u8) -> Glyph {
        match self.find(code) {
            Some(index) => self.glyph_at(index),
            None => Glyph::Undefined {
                width: self.header().max_width / 2,
            },
        }
    }

    /// Number of bitmap columns stored for a glyph
    pub fn columns(&self, glyph: &Glyph) -> u8 {
        match self.header().bytes_per_column() {
            0 => 0,
            per_column => glyph.size_bytes() / per_column,
        }
    }

    /// One bitmap byte of a glyph: `row` selects the 8-pixel band
    pub fn column_byte(&self, glyph: &Glyph, column: u8, row: u8) -> u8 {
        match *glyph {
            Glyph::Undefined { .. } => 0,
            Glyph::Defined { offset, .. } => {
                let per_column = self.header().bytes_per_column() as usize;
                self.byte(offset + column as usize * per_column + row as usize)
            }
        }
    }
}
