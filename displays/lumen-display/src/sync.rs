//! Dirty-page synchronization with the panel
//!
//! [`Display`] owns the canvas and the bus. Drawing goes to the pending
//! buffer; [`Display::refresh`] sends only the pages that differ from the
//! committed mirror and commits pending only when every transfer of the
//! call succeeded. A failed refresh leaves committed untouched, so the
//! next call recomputes the same or a larger dirty set and retries.

use lumen_font::Font;
use lumen_hal::DisplayBus;

use crate::backend::{Color, DisplayError, PixelTarget};
use crate::canvas::{Canvas, DEFAULT_BUFFER_SIZE};
use crate::config::DisplayConfig;
use crate::shapes::{draw_rect, draw_xbm, Xbm};
use crate::text::{draw_string_erase, FontSet, FontSize};
use crate::utf8::Latin1Decoder;

/// Page addressing commands shared by SH1106 and SSD1306
mod cmd {
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
}

/// Relationship between the pending buffer and the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncState {
    /// Pending differs from the panel, or the panel contents are unknown
    Dirty,
    /// The panel shows exactly the pending buffer
    Synced,
}

/// Successful refresh outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Refresh {
    /// Nothing changed; no bus traffic
    Unchanged,
    /// This many pages were sent and committed
    Sent { pages: u8 },
}

/// Panel driver: canvas, bus and sync state
pub struct Display<'f, B, const N: usize = DEFAULT_BUFFER_SIZE> {
    bus: B,
    canvas: Canvas<N>,
    config: DisplayConfig,
    fonts: FontSet<'f>,
    decoder: Latin1Decoder,
    /// Panel RAM contents unknown; next refresh sends every page
    stale: bool,
}

impl<B: DisplayBus, const N: usize> Display<'static, B, N> {
    /// Create a display with the bundled font for every size
    ///
    /// The panel is assumed to hold unknown data, so the first refresh
    /// sends every page.
    pub fn new(bus: B, config: DisplayConfig) -> Result<Self, DisplayError> {
        Self::with_fonts(bus, config, FontSet::default())
    }
}

impl<'f, B: DisplayBus, const N: usize> Display<'f, B, N> {
    /// Create a display with a custom font set
    pub fn with_fonts(
        bus: B,
        config: DisplayConfig,
        fonts: FontSet<'f>,
    ) -> Result<Self, DisplayError> {
        let canvas = Canvas::from_config(&config).inspect_err(|_e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("display buffer init failed: {}", _e);
        })?;

        Ok(Self {
            bus,
            canvas,
            config,
            fonts,
            decoder: Latin1Decoder::new(),
            stale: true,
        })
    }

    /// Display name from the configuration
    pub fn name(&self) -> &'static str {
        self.config.name
    }

    /// Active configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The canvas being drawn into
    pub fn canvas(&self) -> &Canvas<N> {
        &self.canvas
    }

    /// Mutable access to the canvas
    pub fn canvas_mut(&mut self) -> &mut Canvas<N> {
        &mut self.canvas
    }

    /// Access the bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutable access to the bus
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Release the bus
    pub fn release(self) -> B {
        self.bus
    }

    /// Font for a size
    pub fn font(&self, size: FontSize) -> Font<'f> {
        self.fonts.get(size)
    }

    /// Height of the font for a size
    pub fn font_height(&self, size: FontSize) -> u8 {
        self.font(size).height()
    }

    /// Current synchronization state
    pub fn state(&self) -> SyncState {
        if self.stale || self.canvas.dirty_pages() > 0 {
            SyncState::Dirty
        } else {
            SyncState::Synced
        }
    }

    /// Forget what the panel shows; the next refresh resends every page
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Whether a page needs to go out on the next refresh
    fn needs_send(&self, page: u8) -> bool {
        self.stale || self.canvas.is_page_dirty(page)
    }

    /// Address a page and send its pending bytes
    ///
    /// All four transfers are attempted even if one fails.
    fn send_page(&mut self, page: u8) -> bool {
        let (low, high) = self.config.controller.column_address();
        let mut ok = self.bus.command(cmd::SET_PAGE_ADDR | page).is_ok();
        ok &= self.bus.command(cmd::SET_LOW_COLUMN | low).is_ok();
        ok &= self.bus.command(cmd::SET_HIGH_COLUMN | high).is_ok();
        ok &= match self.canvas.pending_page(page) {
            Some(bytes) => self.bus.data(bytes).is_ok(),
            None => false,
        };

        if !ok {
            #[cfg(feature = "defmt")]
            defmt::warn!("page {} transfer failed", page);
        }
        ok
    }

    /// Send dirty pages and commit on full success
    pub fn refresh(&mut self) -> Result<Refresh, DisplayError> {
        let pages = self.canvas.pages();
        let dirty = (0..pages).filter(|&page| self.needs_send(page)).count() as u8;
        if dirty == 0 {
            return Ok(Refresh::Unchanged);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("refresh: {} dirty pages", dirty);

        let mut ok = true;
        for page in 0..pages {
            if self.needs_send(page) {
                ok &= self.send_page(page);
            }
        }

        if !ok {
            return Err(DisplayError::Communication);
        }
        self.canvas.commit();
        self.stale = false;
        Ok(Refresh::Sent { pages: dirty })
    }

    /// Zero the pending buffer; the panel updates on the next refresh
    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Blank the panel now, regardless of the dirty state
    ///
    /// On success both buffers are zero and the display is synced.
    pub fn clear_immediate(&mut self) -> Result<(), DisplayError> {
        self.canvas.clear();

        let mut ok = true;
        for page in 0..self.canvas.pages() {
            ok &= self.send_page(page);
        }

        if !ok {
            return Err(DisplayError::Communication);
        }
        self.canvas.clear_committed();
        self.stale = false;
        Ok(())
    }

    /// Redraw a text field with the display's own UTF-8 stream state
    pub fn draw_text(&mut self, x: i16, y: i16, text: &str, size: FontSize) -> i32 {
        let font = self.fonts.get(size);
        draw_string_erase(&mut self.canvas, x, y, text, &font, &mut self.decoder)
    }

    /// Show the boot screen: a frame around the panel with a centered logo
    pub fn splash(&mut self, logo: Option<&Xbm<'_>>) -> Result<Refresh, DisplayError> {
        self.canvas.clear();
        let foreground = self.canvas.color();
        self.canvas.select_color(Color::White);

        // Canvas sides never exceed i16::MAX
        let width = i16::try_from(self.canvas.width()).unwrap_or(i16::MAX);
        let height = i16::try_from(self.canvas.height()).unwrap_or(i16::MAX);
        draw_rect(&mut self.canvas, 0, 0, width, height);
        if let Some(logo) = logo {
            let x = centered(width, logo.width);
            let y = centered(height, logo.height);
            draw_xbm(&mut self.canvas, x, y, logo);
        }

        self.canvas.select_color(foreground);
        self.refresh()
    }
}

/// Origin that centers `inner` pixels within `outer`
fn centered(outer: i16, inner: u16) -> i16 {
    let origin = (i32::from(outer) - i32::from(inner)) / 2;
    i16::try_from(origin).unwrap_or(i16::MIN)
}

impl<B: DisplayBus, const N: usize> PixelTarget for Display<'_, B, N> {
    fn width(&self) -> u16 {
        self.canvas.width()
    }

    fn height(&self) -> u16 {
        self.canvas.height()
    }

    fn set_pixel(&mut self, x: i32, y: i32) {
        self.canvas.set_pixel(x, y);
    }

    fn color(&self) -> Color {
        self.canvas.color()
    }

    fn select_color(&mut self, color: Color) {
        self.canvas.select_color(color);
    }
}
