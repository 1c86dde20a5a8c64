//! Drawing surface trait
//!
//! Defines the pixel primitive every rasterizer and the text engine are
//! written against, plus the error type shared by the display crate.

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// One or more bus transfers failed; nothing was committed
    Communication,
    /// Width, height or page count cannot describe a panel
    InvalidGeometry,
    /// Frame buffers do not fit the configured capacity
    BufferOverflow,
}

/// Two-level pixel color
///
/// Only two colors exist, so the background is always the complement of
/// the selected foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    /// Pixel lit (bit set)
    #[default]
    White,
    /// Pixel dark (bit cleared)
    Black,
}

impl Color {
    /// The other color
    pub const fn inverse(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Whether drawing in this color sets the buffer bit
    pub const fn is_on(self) -> bool {
        matches!(self, Color::White)
    }
}

/// Monochrome drawing surface
///
/// Coordinates are signed so shapes may start off-canvas; implementations
/// drop every write outside `0..width` × `0..height` without error.
pub trait PixelTarget {
    /// Width in pixels
    fn width(&self) -> u16;

    /// Height in pixels
    fn height(&self) -> u16;

    /// Paint one pixel in the selected color
    fn set_pixel(&mut self, x: i32, y: i32);

    /// Currently selected foreground color
    fn color(&self) -> Color;

    /// Select the foreground color
    fn select_color(&mut self, color: Color);

    /// Background color, the complement of the foreground
    fn background(&self) -> Color {
        self.color().inverse()
    }

    /// Whether a coordinate lies on the surface
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width()) && y < i32::from(self.height())
    }
}
