//! Text layout and glyph rasterization
//!
//! Text is a byte string of font codes (see [`crate::utf8`] for turning
//! UTF-8 into such codes). Every glyph advances by its width plus the
//! font's spacing; there is no kerning.

use lumen_font::Font;

use crate::backend::PixelTarget;
use crate::shapes::fill;
use crate::utf8::Latin1Decoder;

/// Font slot of a [`FontSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontSize {
    /// Status lines and labels
    #[default]
    Small,
    /// Menu entries
    Medium,
    /// Headline values
    Big,
}

/// The three fonts a panel layout picks from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSet<'a> {
    /// Font for [`FontSize::Small`]
    pub small: Font<'a>,
    /// Font for [`FontSize::Medium`]
    pub medium: Font<'a>,
    /// Font for [`FontSize::Big`]
    pub big: Font<'a>,
}

impl<'a> FontSet<'a> {
    /// Use one font for every size
    pub const fn uniform(font: Font<'a>) -> Self {
        Self {
            small: font,
            medium: font,
            big: font,
        }
    }

    /// Font for a size
    pub const fn get(&self, size: FontSize) -> Font<'a> {
        match size {
            FontSize::Small => self.small,
            FontSize::Medium => self.medium,
            FontSize::Big => self.big,
        }
    }
}

impl Default for FontSet<'static> {
    fn default() -> Self {
        Self::uniform(Font::new(&lumen_font::fonts::ALPHA_PROTA_7))
    }
}

/// Width of the first line of `text` in pixels
///
/// Sums `width + spacing` per glyph up to the first newline and drops the
/// trailing spacing.
pub fn measure(text: &[u8], font: &Font<'_>) -> u16 {
    measure_codes(text.iter().copied(), font)
}

fn measure_codes(codes: impl IntoIterator<Item = u8>, font: &Font<'_>) -> u16 {
    if font.is_empty() {
        return 0;
    }
    let spacing = u16::from(font.spacing());
    let mut total = 0u16;
    let mut counted = false;

    for code in codes.into_iter().take_while(|&c| c != b'\n') {
        total = total.saturating_add(u16::from(font.glyph(code).width()) + spacing);
        counted = true;
    }

    if counted {
        total.saturating_sub(spacing)
    } else {
        0
    }
}

/// Rasterize one glyph with its top-left corner at (x, y)
///
/// Returns the advance, `width + spacing`. Glyphs without bitmap data
/// only advance.
pub fn draw_char<T: PixelTarget + ?Sized>(
    target: &mut T,
    x: i16,
    y: i16,
    code: u8,
    font: &Font<'_>,
) -> i32 {
    if font.is_empty() {
        return 0;
    }
    render_glyph(target, i32::from(x), i32::from(y), code, font)
}

fn render_glyph<T: PixelTarget + ?Sized>(
    target: &mut T,
    x: i32,
    y: i32,
    code: u8,
    font: &Font<'_>,
) -> i32 {
    let header = font.header();
    let glyph = font.glyph(code);
    let advance = i32::from(glyph.width()) + i32::from(header.spacing);
    if !glyph.is_defined() || glyph.size_bytes() == 0 {
        return advance;
    }

    let height = i32::from(header.height);
    let canvas_height = i32::from(target.height());

    for column in 0..font.columns(&glyph) {
        for row in 0..header.bytes_per_column() {
            let bits = font.column_byte(&glyph, column, row);
            if bits == 0 {
                continue;
            }
            for bit in 0..8 {
                let offset = i32::from(row) * 8 + bit;
                if offset >= height || bits & (1 << bit) == 0 {
                    continue;
                }
                let py = y + offset;
                if (0..canvas_height).contains(&py) {
                    target.set_pixel(x + i32::from(column), py);
                }
            }
        }
    }

    advance
}

/// Lay out a string starting at (x, y)
///
/// `\n` returns to `x` on the next line. A glyph that would cross the
/// right edge wraps first; once a wrap would put the line below the last
/// full text row the rest of the string is dropped. Returns the distance
/// travelled on the final line.
pub fn draw_string<T: PixelTarget + ?Sized>(
    target: &mut T,
    x: i16,
    y: i16,
    text: &[u8],
    font: &Font<'_>,
) -> i32 {
    layout(target, x, y, text.iter().copied(), font)
}

fn layout<T: PixelTarget + ?Sized>(
    target: &mut T,
    x: i16,
    y: i16,
    codes: impl IntoIterator<Item = u8>,
    font: &Font<'_>,
) -> i32 {
    if font.is_empty() {
        return 0;
    }
    let header = font.header();
    let height = i32::from(header.height);
    let spacing = i32::from(header.spacing);
    let line_height = i32::from(header.line_height());
    let canvas_width = i32::from(target.width());
    let canvas_height = i32::from(target.height());

    // The cursor only grows past the right edge by one advance before it
    // wraps; lines only move down, so the row saturates.
    let (x, y) = (i32::from(x), i32::from(y));
    let mut cursor_x = x;
    let mut cursor_y = y;

    for code in codes {
        if code == b'\n' {
            cursor_x = x;
            cursor_y = cursor_y.saturating_add(line_height);
            continue;
        }

        let width = i32::from(font.glyph(code).width());
        if cursor_x + width > canvas_width {
            cursor_x = x;
            cursor_y = cursor_y.saturating_add(line_height);
            if cursor_y > canvas_height - height {
                break;
            }
        }

        // Off-canvas glyphs still take up room
        if cursor_y >= canvas_height || cursor_y + height < 0 || cursor_x + width < 0 {
            cursor_x += width + spacing;
            continue;
        }

        cursor_x += render_glyph(target, cursor_x, cursor_y, code, font);
    }

    cursor_x - x
}

/// Redraw a live text field
///
/// Transliterates `text` through `decoder`, blanks the measured area plus
/// a one pixel border in the background color, then draws the string in
/// the foreground color. The text is decoded on the fly, so its length is
/// not bounded, and `decoder` always consumes the whole string.
pub fn draw_string_erase<T: PixelTarget + ?Sized>(
    target: &mut T,
    x: i16,
    y: i16,
    text: &str,
    font: &Font<'_>,
    decoder: &mut Latin1Decoder,
) -> i32 {
    let mut lookahead = *decoder;
    let width = i32::from(measure_codes(lookahead.decode(text.as_bytes()), font));
    let height = i32::from(font.height());

    let foreground = target.color();
    target.select_color(target.background());
    fill(target, i32::from(x) - 1, i32::from(y) - 1, width + 2, height + 2);
    target.select_color(foreground);

    let mut codes = decoder.decode(text.as_bytes());
    let advance = layout(target, x, y, codes.by_ref(), font);
    codes.for_each(|_| ());
    advance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Color;
    use crate::canvas::Canvas;
    use lumen_font::fonts::ALPHA_PROTA_7;
    use proptest::prelude::*;

    /// 'A': one column 0x0F, width 4, height 8, spacing 1
    const SINGLE: [u8; 5 + 1 + 4 + 1] = [
        0x04, 0x08, 0x00, 0x01, 0x01, //
        b'A', //
        0x00, 0x00, 0x01, 0x04, //
        0x0F,
    ];

    /// 'W': six solid columns, 'u': undefined width 2; spacing 0
    const WIDE: [u8; 5 + 2 + 8 + 6] = [
        0x06, 0x08, 0x00, 0x02, 0x00, //
        b'W', b'u', //
        0x00, 0x00, 0x06, 0x06, //
        0xFF, 0xFF, 0x00, 0x02, //
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    ];

    /// 'T': 12 px tall, two bytes per column
    const TALL: [u8; 5 + 1 + 4 + 2] = [
        0x02, 0x0C, 0x00, 0x01, 0x00, //
        b'T', //
        0x00, 0x00, 0x02, 0x01, //
        0xFF, 0xFF,
    ];

    fn lit(canvas: &Canvas) -> usize {
        canvas.pending().iter().map(|b| b.count_ones() as usize).sum()
    }

    #[test]
    fn test_draw_char_single_column() {
        let font = Font::new(&SINGLE);
        let mut canvas: Canvas = Canvas::new(16, 16, 0).unwrap();
        let advance = draw_char(&mut canvas, 3, 0, b'A', &font);

        assert_eq!(advance, 5);
        for y in 0..4 {
            assert_eq!(canvas.pixel(3, y), Some(true));
        }
        assert_eq!(canvas.pixel(3, 4), Some(false));
        assert_eq!(lit(&canvas), 4);
    }

    #[test]
    fn test_draw_char_clamps_to_font_height() {
        let font = Font::new(&TALL);
        let mut canvas: Canvas = Canvas::new(8, 16, 0).unwrap();
        draw_char(&mut canvas, 0, 0, b'T', &font);
        // Bits 12..16 of the second byte are outside the glyph
        assert_eq!(lit(&canvas), 12);
        assert_eq!(canvas.pixel(0, 11), Some(true));
        assert_eq!(canvas.pixel(0, 12), Some(false));
    }

    #[test]
    fn test_draw_char_undefined_only_advances() {
        let font = Font::new(&WIDE);
        let mut canvas: Canvas = Canvas::new(16, 8, 0).unwrap();
        assert_eq!(draw_char(&mut canvas, 0, 0, b'u', &font), 2);
        // Missing code: half of max width
        assert_eq!(draw_char(&mut canvas, 0, 0, b'?', &font), 3);
        assert_eq!(lit(&canvas), 0);
    }

    #[test]
    fn test_draw_char_clips_vertically() {
        let font = Font::new(&SINGLE);
        let mut canvas: Canvas = Canvas::new(8, 8, 0).unwrap();
        draw_char(&mut canvas, 0, -2, b'A', &font);
        assert_eq!(lit(&canvas), 2);
        draw_char(&mut canvas, 4, 6, b'A', &font);
        assert_eq!(lit(&canvas), 4);
    }

    #[test]
    fn test_empty_font_draws_nothing() {
        let mut canvas: Canvas = Canvas::new(8, 8, 0).unwrap();
        assert_eq!(draw_char(&mut canvas, 0, 0, b'A', &Font::EMPTY), 0);
        assert_eq!(draw_string(&mut canvas, 0, 0, b"AB", &Font::EMPTY), 0);
        assert_eq!(measure(b"AB", &Font::EMPTY), 0);
    }

    #[test]
    fn test_measure() {
        let font = Font::new(&ALPHA_PROTA_7);
        assert_eq!(measure(b"", &font), 0);
        // 'H' is 4 wide, spacing 1
        assert_eq!(measure(b"H", &font), 4);
        assert_eq!(measure(b"HH", &font), 9);
        assert_eq!(measure(b"HH\nHHHH", &font), 9);
        assert_eq!(measure(b"\nHH", &font), 0);
    }

    #[test]
    fn test_wrap_to_initial_x() {
        let font = Font::new(&WIDE);
        let mut canvas: Canvas = Canvas::new(10, 24, 0).unwrap();
        let advance = draw_string(&mut canvas, 0, 0, b"WW", &font);

        assert_eq!(advance, 6);
        // First glyph on line 0, second wrapped to the next line
        assert_eq!(canvas.pixel(0, 0), Some(true));
        assert_eq!(canvas.pixel(6, 0), Some(false));
        assert_eq!(canvas.pixel(0, 8), Some(true));
        assert_eq!(canvas.pixel(5, 15), Some(true));
        assert_eq!(lit(&canvas), 96);
    }

    #[test]
    fn test_wrap_past_bottom_drops_rest() {
        let font = Font::new(&WIDE);
        let mut canvas: Canvas = Canvas::new(10, 12, 0).unwrap();
        draw_string(&mut canvas, 0, 0, b"WWW", &font);
        // Second line would start at y=8 > 12 - 8
        assert_eq!(lit(&canvas), 48);
    }

    #[test]
    fn test_newline_resets_x() {
        let font = Font::new(&SINGLE);
        let mut canvas: Canvas = Canvas::new(32, 32, 0).unwrap();
        let advance = draw_string(&mut canvas, 2, 0, b"AA\nA", &font);

        assert_eq!(advance, 5);
        assert_eq!(canvas.pixel(2, 9), Some(true));
        assert_eq!(canvas.pixel(7, 0), Some(true));
        assert_eq!(canvas.pixel(7, 9), Some(false));
    }

    #[test]
    fn test_offscreen_glyphs_advance() {
        let font = Font::new(&SINGLE);
        let mut canvas: Canvas = Canvas::new(32, 8, 0).unwrap();
        let advance = draw_string(&mut canvas, -10, 0, b"AAA", &font);

        assert_eq!(advance, 15);
        // Only the third glyph lands at x=0
        assert_eq!(canvas.pixel(0, 0), Some(true));
        assert_eq!(lit(&canvas), 4);
    }

    #[test]
    fn test_measure_matches_draw_without_spacing() {
        let font = Font::new(&WIDE);
        let mut canvas: Canvas = Canvas::new(64, 8, 0).unwrap();
        let text = b"WuW?";
        assert_eq!(
            draw_string(&mut canvas, 0, 0, text, &font),
            i32::from(measure(text, &font))
        );
    }

    #[test]
    fn test_erase_and_draw() {
        let font = Font::new(&ALPHA_PROTA_7);
        let mut canvas: Canvas = Canvas::new(64, 16, 0).unwrap();
        let mut decoder = Latin1Decoder::new();

        crate::shapes::fill_rect(&mut canvas, 0, 0, 64, 16);
        let advance = draw_string_erase(&mut canvas, 4, 4, "II", &font, &mut decoder);

        let width = i32::from(measure(b"II", &font));
        assert_eq!(advance, width + 1);
        assert_eq!(canvas.color(), Color::White);
        // Border row above the text was blanked, outside it untouched
        assert_eq!(canvas.pixel(3, 3), Some(false));
        assert_eq!(canvas.pixel(4 + width, 3), Some(false));
        assert_eq!(canvas.pixel(5 + width, 3), Some(true));
        assert_eq!(canvas.pixel(2, 3), Some(true));
    }

    #[test]
    fn test_erase_and_draw_black_on_white() {
        let font = Font::new(&ALPHA_PROTA_7);
        let mut canvas: Canvas = Canvas::new(64, 16, 0).unwrap();
        let mut decoder = Latin1Decoder::new();

        canvas.select_color(Color::Black);
        draw_string_erase(&mut canvas, 1, 1, "H", &font, &mut decoder);

        assert_eq!(canvas.color(), Color::Black);
        // Background box is lit, glyph pixels are dark
        assert_eq!(canvas.pixel(0, 0), Some(true));
        assert_eq!(canvas.pixel(1, 2), Some(false));
    }

    #[test]
    fn test_font_set() {
        let small = Font::new(&SINGLE);
        let big = Font::new(&TALL);
        let set = FontSet {
            small,
            medium: small,
            big,
        };
        assert_eq!(set.get(FontSize::default()), small);
        assert_eq!(set.get(FontSize::Big), big);
        assert_eq!(FontSet::default().get(FontSize::Medium).header().char_count, 96);
    }

    proptest! {
        #[test]
        fn prop_measure_matches_single_line_draw(text in "[ -~]{0,20}") {
            let font = Font::new(&ALPHA_PROTA_7);
            let mut canvas: Canvas = Canvas::new(128, 64, 0).unwrap();
            let drawn = draw_string(&mut canvas, 0, 0, text.as_bytes(), &font);
            let measured = i32::from(measure(text.as_bytes(), &font));
            let spacing = i32::from(font.spacing());

            if text.is_empty() {
                prop_assert_eq!(drawn, 0);
                prop_assert_eq!(measured, 0);
            } else {
                // Layout keeps the trailing spacing, measurement drops it
                prop_assert_eq!(drawn, measured + spacing);
            }
        }
    }

    #[test]
    fn test_erase_and_draw_keeps_long_text() {
        let font = Font::new(&ALPHA_PROTA_7);
        let mut text = std::string::String::new();
        for _ in 0..6 {
            text.push_str(&"H".repeat(25));
            text.push('\n');
        }
        assert!(text.len() > 128);

        let mut direct: Canvas = Canvas::new(128, 64, 0).unwrap();
        draw_string(&mut direct, 0, 0, text.as_bytes(), &font);
        let mut erased: Canvas = Canvas::new(128, 64, 0).unwrap();
        draw_string_erase(&mut erased, 0, 0, &text, &font, &mut Latin1Decoder::new());

        assert_eq!(erased.pending(), direct.pending());
        // Last line is present
        assert_eq!(erased.pixel(0, 41), Some(true));
    }

    #[test]
    fn test_erase_and_draw_consumes_whole_stream() {
        let font = Font::new(&WIDE);
        let mut canvas: Canvas = Canvas::new(10, 12, 0).unwrap();
        let text = "WWWWWW caf\u{e9}";
        let mut decoder = Latin1Decoder::new();
        draw_string_erase(&mut canvas, 0, 0, text, &font, &mut decoder);

        // Layout stopped at the bottom, the stream state did not
        let mut expected = Latin1Decoder::new();
        let _: heapless::Vec<u8, 32> = expected.transliterate(text.as_bytes());
        assert_eq!(decoder, expected);
    }

    #[test]
    fn test_text_at_extreme_coordinates() {
        let font = Font::new(&ALPHA_PROTA_7);
        let mut canvas: Canvas = Canvas::new(32, 16, 0).unwrap();
        let mut decoder = Latin1Decoder::new();

        assert_eq!(draw_string(&mut canvas, i16::MAX, i16::MAX, b"HH", &font), 0);
        draw_string(&mut canvas, i16::MIN, i16::MIN, b"HH\nHH", &font);
        draw_string(&mut canvas, i16::MIN, 0, b"HHHH", &font);
        draw_char(&mut canvas, i16::MAX, i16::MIN, b'H', &font);
        draw_string_erase(&mut canvas, i16::MIN, i16::MIN, "HH", &font, &mut decoder);
        draw_string_erase(&mut canvas, i16::MAX, i16::MAX, "HH", &font, &mut decoder);

        assert_eq!(lit(&canvas), 0);
    }
}
