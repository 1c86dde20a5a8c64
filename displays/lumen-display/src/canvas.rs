//! Page-organized frame buffers
//!
//! The canvas keeps two equally sized buffers laid out the way SH1106 and
//! SSD1306 controllers address their RAM: one byte covers eight vertical
//! pixels of a page, `index = page * width + x`, `bit = y % 8`.
//!
//! - *pending* is what drawing calls mutate
//! - *committed* mirrors what the panel currently shows and is only
//!   updated by the sync protocol in [`crate::sync`]

use core::ops::Range;

use heapless::Vec;

use crate::backend::{Color, DisplayError, PixelTarget};
use crate::config::{DisplayConfig, PAGE_HEIGHT};

/// Buffer capacity for a 128x64 panel
pub const DEFAULT_BUFFER_SIZE: usize = 128 * 8;

/// Double-buffered monochrome canvas
///
/// `N` is the byte capacity of each buffer; a panel needs
/// `width * pages` bytes.
#[derive(Debug, Clone)]
pub struct Canvas<const N: usize = DEFAULT_BUFFER_SIZE> {
    width: u16,
    height: u16,
    pages: u8,
    pending: Vec<u8, N>,
    committed: Vec<u8, N>,
    color: Color,
}

impl<const N: usize> Canvas<N> {
    /// Create a zeroed canvas
    ///
    /// `pages = 0` derives the page count from the height. Fails when the
    /// geometry is empty or wider or taller than `i16::MAX`, has fewer
    /// pages than rows need, or does not fit in `N` bytes.
    pub fn new(width: u16, height: u16, pages: u8) -> Result<Self, DisplayError> {
        let needed = height.div_ceil(PAGE_HEIGHT);
        let pages = if pages == 0 {
            u8::try_from(needed).map_err(|_| DisplayError::InvalidGeometry)?
        } else {
            pages
        };
        let limit = i16::MAX as u16;
        if width == 0 || height == 0 || width > limit || height > limit {
            return Err(DisplayError::InvalidGeometry);
        }
        if u16::from(pages) < needed {
            return Err(DisplayError::InvalidGeometry);
        }

        let len = usize::from(width) * usize::from(pages);
        let mut pending = Vec::new();
        let mut committed = Vec::new();
        pending
            .resize(len, 0)
            .map_err(|_| DisplayError::BufferOverflow)?;
        committed
            .resize(len, 0)
            .map_err(|_| DisplayError::BufferOverflow)?;

        Ok(Self {
            width,
            height,
            pages,
            pending,
            committed,
            color: Color::White,
        })
    }

    /// Create a canvas matching a panel configuration
    pub fn from_config(config: &DisplayConfig) -> Result<Self, DisplayError> {
        Self::new(config.width, config.height, config.pages)
    }

    /// Number of pages
    pub fn pages(&self) -> u8 {
        self.pages
    }

    /// Byte range of a page in either buffer, `None` past the last page
    fn page_range(&self, page: u8) -> Option<Range<usize>> {
        if page >= self.pages {
            return None;
        }
        let start = usize::from(page) * usize::from(self.width);
        Some(start..start + usize::from(self.width))
    }

    /// Buffer index and bit mask of an on-canvas pixel
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if !self.contains(x, y) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let index = (y / PAGE_HEIGHT as usize) * usize::from(self.width) + x;
        Some((index, 1 << (y % PAGE_HEIGHT as usize)))
    }

    /// Write a pixel with an explicit color, ignoring the selection
    pub(crate) fn write_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        let Some((index, mask)) = self.locate(x, y) else {
            return false;
        };
        if color.is_on() {
            self.pending[index] |= mask;
        } else {
            self.pending[index] &= !mask;
        }
        true
    }

    /// Paint a pixel in the selected color, reporting whether it was on-canvas
    pub fn set_pixel_checked(&mut self, x: i32, y: i32) -> bool {
        self.write_pixel(x, y, self.color)
    }

    /// Read a pending pixel, `None` when off-canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        self.locate(x, y)
            .map(|(index, mask)| self.pending[index] & mask != 0)
    }

    /// Zero the pending buffer
    pub fn clear(&mut self) {
        self.pending.fill(0);
    }

    /// Pending buffer, page after page
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Committed buffer, page after page
    pub fn committed(&self) -> &[u8] {
        &self.committed
    }

    /// One page row of the pending buffer
    pub fn pending_page(&self, page: u8) -> Option<&[u8]> {
        self.page_range(page).and_then(|range| self.pending.get(range))
    }

    /// Whether a page differs between pending and committed
    ///
    /// Pages past the end are never dirty.
    pub fn is_page_dirty(&self, page: u8) -> bool {
        self.page_range(page)
            .is_some_and(|range| self.pending.get(range.clone()) != self.committed.get(range))
    }

    /// Number of pages that differ between pending and committed
    pub fn dirty_pages(&self) -> u8 {
        (0..self.pages).filter(|&page| self.is_page_dirty(page)).count() as u8
    }

    /// Copy pending into committed after a successful transfer
    pub(crate) fn commit(&mut self) {
        self.committed.copy_from_slice(&self.pending);
    }

    /// Zero the committed buffer after the panel has been blanked
    pub(crate) fn clear_committed(&mut self) {
        self.committed.fill(0);
    }
}

impl<const N: usize> PixelTarget for Canvas<N> {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        self.write_pixel(x, y, self.color);
    }

    fn color(&self) -> Color {
        self.color
    }

    fn select_color(&mut self, color: Color) {
        self.color = color;
    }
}
