//! Display configuration
//!
//! Geometry and controller flavor of the attached panel. The core needs
//! nothing else from the board: initialization sequences and bus setup
//! stay with the caller.

use crate::canvas::DEFAULT_BUFFER_SIZE;

/// Pixel rows per display page
pub const PAGE_HEIGHT: u16 = 8;

/// Display controller family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Controller {
    /// SH1106: 132-column RAM, visible area starts at column 2
    #[default]
    Sh1106,
    /// SSD1306: RAM columns map 1:1 to the panel
    Ssd1306,
}

impl Controller {
    /// First RAM column of the visible area
    pub const fn column_offset(&self) -> u8 {
        match self {
            Controller::Sh1106 => 2,
            Controller::Ssd1306 => 0,
        }
    }

    /// Low and high nibbles of the column address reset pair
    pub const fn column_address(&self) -> (u8, u8) {
        let column = self.column_offset();
        (column & 0x0F, column >> 4)
    }

    /// Human-readable controller name
    pub const fn name(&self) -> &'static str {
        match self {
            Controller::Sh1106 => "SH1106",
            Controller::Ssd1306 => "SSD1306",
        }
    }
}

/// Panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Display name reported to the host
    pub name: &'static str,
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Page count (0 = derive from height)
    pub pages: u8,
    /// Controller family
    pub controller: Controller,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::sh1106_128x64()
    }
}

impl DisplayConfig {
    /// Create a config with derived page count
    pub const fn new(controller: Controller, width: u16, height: u16) -> Self {
        Self {
            name: controller.name(),
            width,
            height,
            pages: 0,
            controller,
        }
    }

    /// 1.3" SH1106 128x64 module
    pub const fn sh1106_128x64() -> Self {
        Self::new(Controller::Sh1106, 128, 64)
    }

    /// 0.96" SSD1306 128x64 module
    pub const fn ssd1306_128x64() -> Self {
        Self::new(Controller::Ssd1306, 128, 64)
    }

    /// 0.91" SSD1306 128x32 module
    pub const fn ssd1306_128x32() -> Self {
        Self::new(Controller::Ssd1306, 128, 32)
    }

    /// Override the page count
    pub const fn with_pages(mut self, pages: u8) -> Self {
        self.pages = pages;
        self
    }

    /// Override the reported name
    pub const fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Page count with 0 replaced by `ceil(height / 8)`
    ///
    /// Saturates at 255 for heights no page-addressed controller has.
    pub const fn resolved_pages(&self) -> u8 {
        if self.pages != 0 {
            return self.pages;
        }
        let derived = self.height.div_ceil(PAGE_HEIGHT);
        if derived > u8::MAX as u16 {
            u8::MAX
        } else {
            derived as u8
        }
    }

    /// Bytes per frame buffer, `width * pages`
    pub const fn buffer_len(&self) -> usize {
        self.width as usize * self.resolved_pages() as usize
    }

    /// Whether the default canvas capacity can hold this panel
    pub const fn fits_default_buffer(&self) -> bool {
        self.buffer_len() <= DEFAULT_BUFFER_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_column_address() {
        assert_eq!(Controller::Sh1106.column_address(), (2, 0));
        assert_eq!(Controller::Ssd1306.column_address(), (0, 0));
    }

    #[test]
    fn test_page_derivation() {
        assert_eq!(DisplayConfig::sh1106_128x64().resolved_pages(), 8);
        assert_eq!(DisplayConfig::ssd1306_128x32().resolved_pages(), 4);
        assert_eq!(
            DisplayConfig::new(Controller::Ssd1306, 96, 20).resolved_pages(),
            3
        );
        assert_eq!(
            DisplayConfig::sh1106_128x64().with_pages(4).resolved_pages(),
            4
        );
    }

    #[test]
    fn test_buffer_len() {
        assert_eq!(DisplayConfig::sh1106_128x64().buffer_len(), 1024);
        assert_eq!(DisplayConfig::ssd1306_128x32().buffer_len(), 512);
        assert!(DisplayConfig::default().fits_default_buffer());
        assert!(!DisplayConfig::new(Controller::Ssd1306, 256, 64).fits_default_buffer());
    }

    #[test]
    fn test_names() {
        assert_eq!(DisplayConfig::default().name, "SH1106");
        assert_eq!(DisplayConfig::ssd1306_128x64().name, "SSD1306");
        assert_eq!(
            DisplayConfig::default().with_name("status").name,
            "status"
        );
    }
}
