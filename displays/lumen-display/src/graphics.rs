//! `embedded-graphics` integration
//!
//! Lets the canvas act as a `DrawTarget` so styled primitives, images and
//! `embedded-graphics` fonts can share the page buffer with the native
//! rasterizers. Pixels carry their own color here; the canvas's selected
//! color is not consulted.

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Point, Size};
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::Pixel;

use crate::backend::{Color, PixelTarget};
use crate::canvas::Canvas;

impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => Color::White,
            BinaryColor::Off => Color::Black,
        }
    }
}

impl From<Color> for BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::White => BinaryColor::On,
            Color::Black => BinaryColor::Off,
        }
    }
}

impl<const N: usize> DrawTarget for Canvas<N> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.write_pixel(x, y, color.into());
        }
        Ok(())
    }
}

impl<const N: usize> OriginDimensions for Canvas<N> {
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_iter_uses_pixel_color() {
        let mut canvas: Canvas = Canvas::new(16, 16, 0).unwrap();
        canvas.select_color(Color::Black);
        canvas
            .draw_iter([
                Pixel(Point::new(1, 1), BinaryColor::On),
                Pixel(Point::new(2, 2), BinaryColor::On),
                Pixel(Point::new(2, 2), BinaryColor::Off),
                Pixel(Point::new(-1, 40), BinaryColor::On),
            ])
            .unwrap();

        assert_eq!(canvas.pixel(1, 1), Some(true));
        assert_eq!(canvas.pixel(2, 2), Some(false));
        assert_eq!(canvas.color(), Color::Black);
    }

    #[test]
    fn test_size() {
        let canvas: Canvas = Canvas::new(128, 32, 0).unwrap();
        assert_eq!(canvas.size(), Size::new(128, 32));
    }

    #[test]
    fn test_color_conversion() {
        assert_eq!(Color::from(BinaryColor::On), Color::White);
        assert_eq!(BinaryColor::from(Color::Black), BinaryColor::Off);
    }
}
