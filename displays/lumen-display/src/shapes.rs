//! Vector primitives
//!
//! Integer rasterizers expressed purely through [`PixelTarget::set_pixel`],
//! so clipping and color handling live in one place. None of them allocate.
//!
//! Coordinates and sizes are `i16` and are widened to `i32` before any
//! arithmetic, so no combination of arguments can overflow.

use crate::backend::PixelTarget;

/// Draw a line with Bresenham's algorithm, both endpoints included
pub fn draw_line<T: PixelTarget + ?Sized>(target: &mut T, x0: i16, y0: i16, x1: i16, y1: i16) {
    line(
        target,
        i32::from(x0),
        i32::from(y0),
        i32::from(x1),
        i32::from(y1),
    );
}

fn line<T: PixelTarget + ?Sized>(target: &mut T, x0: i32, y0: i32, x1: i32, y1: i32) {
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        target.set_pixel(x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw a horizontal line of `length` pixels starting at (x, y)
pub fn draw_hline<T: PixelTarget + ?Sized>(target: &mut T, x: i16, y: i16, length: i16) {
    if length > 0 {
        let (x, y) = (i32::from(x), i32::from(y));
        line(target, x, y, x + i32::from(length) - 1, y);
    }
}

/// Draw a vertical line of `length` pixels starting at (x, y)
pub fn draw_vline<T: PixelTarget + ?Sized>(target: &mut T, x: i16, y: i16, length: i16) {
    if length > 0 {
        let (x, y) = (i32::from(x), i32::from(y));
        line(target, x, y, x, y + i32::from(length) - 1);
    }
}

/// Draw a rectangle outline covering `[x, x+width-1] × [y, y+height-1]`
///
/// Sizes are not validated; callers guard against zero or negative sizes.
pub fn draw_rect<T: PixelTarget + ?Sized>(target: &mut T, x: i16, y: i16, width: i16, height: i16) {
    let (x, y) = (i32::from(x), i32::from(y));
    let right = x + i32::from(width) - 1;
    let bottom = y + i32::from(height) - 1;
    line(target, x, y, right, y);
    line(target, right, y, right, bottom);
    line(target, right, bottom, x, bottom);
    line(target, x, bottom, x, y);
}

/// Fill a rectangle, clipped to the target
pub fn fill_rect<T: PixelTarget + ?Sized>(target: &mut T, x: i16, y: i16, width: i16, height: i16) {
    fill(
        target,
        i32::from(x),
        i32::from(y),
        i32::from(width),
        i32::from(height),
    );
}

/// Clipped fill over widened coordinates
///
/// Arguments must stay within a few multiples of the `i16` range.
pub(crate) fn fill<T: PixelTarget + ?Sized>(
    target: &mut T,
    mut x: i32,
    mut y: i32,
    mut width: i32,
    mut height: i32,
) {
    let canvas_width = i32::from(target.width());
    let canvas_height = i32::from(target.height());
    if x >= canvas_width || y >= canvas_height || width <= 0 || height <= 0 {
        return;
    }

    if x < 0 {
        width += x;
        x = 0;
    }
    if y < 0 {
        height += y;
        y = 0;
    }
    width = width.min(canvas_width - x);
    height = height.min(canvas_height - y);

    for j in y..y + height {
        for i in x..x + width {
            target.set_pixel(i, j);
        }
    }
}

/// Draw a circle outline with the midpoint algorithm
pub fn draw_circle<T: PixelTarget + ?Sized>(target: &mut T, x0: i16, y0: i16, radius: i16) {
    let (x0, y0) = (i32::from(x0), i32::from(y0));
    let mut x = i32::from(radius);
    let mut y = 0;
    let mut err = 0;

    while x >= y {
        target.set_pixel(x0 + x, y0 + y);
        target.set_pixel(x0 + y, y0 + x);
        target.set_pixel(x0 - y, y0 + x);
        target.set_pixel(x0 - x, y0 + y);
        target.set_pixel(x0 - x, y0 - y);
        target.set_pixel(x0 - y, y0 - x);
        target.set_pixel(x0 + y, y0 - x);
        target.set_pixel(x0 + x, y0 - y);

        y += 1;
        if err <= 0 {
            err += 2 * y + 1;
        }
        if err > 0 {
            x -= 1;
            err -= 2 * x + 1;
        }
    }
}

/// Fill a circle with horizontal chords per octant pair
pub fn fill_circle<T: PixelTarget + ?Sized>(target: &mut T, x0: i16, y0: i16, radius: i16) {
    let (x0, y0) = (i32::from(x0), i32::from(y0));
    let mut x = i32::from(radius);
    let mut y = 0;
    let mut err = 0;

    while x >= y {
        line(target, x0 - x, y0 + y, x0 + x, y0 + y);
        line(target, x0 - y, y0 + x, x0 + y, y0 + x);
        line(target, x0 - x, y0 - y, x0 + x, y0 - y);
        line(target, x0 - y, y0 - x, x0 + y, y0 - x);

        y += 1;
        if err <= 0 {
            err += 2 * y + 1;
        }
        if err > 0 {
            x -= 1;
            err -= 2 * x + 1;
        }
    }
}

/// Raw monochrome image in XBM layout
///
/// Rows are `ceil(width / 8)` bytes; bit 0 of each byte is the leftmost
/// pixel of that byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Xbm<'a> {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Packed rows
    pub bits: &'a [u8],
}

impl<'a> Xbm<'a> {
    /// Wrap packed XBM rows
    pub const fn new(width: u16, height: u16, bits: &'a [u8]) -> Self {
        Self {
            width,
            height,
            bits,
        }
    }

    /// Bytes per row
    pub const fn byte_width(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }
}

/// Blit an XBM image; clear source bits are transparent
///
/// Drawing stops at the first row whose bytes are missing from `bits`.
pub fn draw_xbm<T: PixelTarget + ?Sized>(target: &mut T, x: i16, y: i16, image: &Xbm<'_>) {
    let (x, y) = (i32::from(x), i32::from(y));
    let byte_width = image.byte_width();
    let mut byte = 0u8;

    for j in 0..image.height {
        for i in 0..image.width {
            if i & 7 != 0 {
                byte >>= 1;
            } else {
                let index = usize::from(j) * byte_width + usize::from(i / 8);
                match image.bits.get(index) {
                    Some(&b) => byte = b,
                    None => return,
                }
            }

            if byte & 0x01 != 0 {
                target.set_pixel(x + i32::from(i), y + i32::from(j));
            }
        }
    }
}
