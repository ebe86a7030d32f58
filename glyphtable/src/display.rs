//! Handing decoded glyphs to a pixel display.
//!
//! The display driver itself lives outside this crate. It implements
//! [`PixelSink`] and the helpers here do the column to pixel walk.

use core::fmt;

use crate::decode::{char_code, decode, decode_or_blank, Glyph, BLANK};
use crate::error::GlyphError;
use crate::font::{Font, CLOCK_COLON};
use crate::Coordinates;

/// Something glyph pixels can be written to.
pub trait PixelSink {
    /// Set a pixel on or off.
    ///
    /// _Indexing starts from 0, so (0, 0) is the top-left._ Positions off the
    /// display should be ignored.
    fn set_pixel(&mut self, pos: Coordinates, on: bool);
}

/// An in-memory monochrome display buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas<const W: usize, const H: usize> {
    /// The current display buffer, one row per entry.
    pub pixels: [[bool; W]; H],
}

impl<const W: usize, const H: usize> Canvas<W, H> {
    pub const fn new() -> Self {
        Self {
            pixels: [[false; W]; H],
        }
    }

    /// Clear the display buffer to make the canvas blank.
    pub fn clear(&mut self) {
        self.pixels = [[false; W]; H];
    }

    pub fn get(&self, pos: Coordinates) -> bool {
        self.pixels
            .get(pos.1)
            .and_then(|row| row.get(pos.0))
            .copied()
            .unwrap_or(false)
    }

    /// Number of lit pixels.
    pub fn lit(&self) -> usize {
        self.pixels.iter().flatten().filter(|&&on| on).count()
    }
}

impl<const W: usize, const H: usize> Default for Canvas<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> PixelSink for Canvas<W, H> {
    fn set_pixel(&mut self, pos: Coordinates, on: bool) {
        // if the coordinates are out of bounds, do nothing
        if let Some(pixel) = self.pixels.get_mut(pos.1).and_then(|row| row.get_mut(pos.0)) {
            *pixel = on;
        }
    }
}

impl<const W: usize, const H: usize> fmt::Display for Canvas<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.pixels {
            for &on in row {
                f.write_str(if on { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Text drawing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Blank columns between glyphs.
    pub spacing: usize,

    /// Drawn for characters the table does not have.
    pub substitute: Glyph,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            spacing: 1,
            substitute: BLANK,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw the lit pixels of a glyph with its top-left corner at `start_pos`.
///
/// Returns the number of columns drawn.
pub fn draw_glyph(sink: &mut impl PixelSink, glyph: &Glyph, start_pos: Coordinates) -> usize {
    for col in 0..glyph.width() {
        for row in 0..glyph.rows() {
            if glyph.pixel(col, row) {
                sink.set_pixel((start_pos.0 + col, start_pos.1 + usize::from(row)), true);
            }
        }
    }

    glyph.width()
}

fn text_glyphs<'a>(text: &'a str, style: &'a TextStyle) -> impl Iterator<Item = Glyph> + 'a {
    text.chars().map(move |ch| match char_code(ch) {
        Some((font, code)) => decode_or_blank(font, code),
        None => {
            log::warn!("no glyph for {:?}, drawing the substitute", ch);
            style.substitute
        }
    })
}

/// Width in columns that [`draw_text`] would use for `text`.
pub fn text_width(text: &str, style: &TextStyle) -> usize {
    let mut width = 0;
    for (i, glyph) in text_glyphs(text, style).enumerate() {
        if i > 0 {
            width += style.spacing;
        }
        width += glyph.width();
    }
    width
}

/// Draw a string from the ASCII and accented fonts.
///
/// Characters without a glyph are drawn as `style.substitute` and the rest of
/// the string is still drawn. Returns the width used.
///
/// ## Example
/// ```
/// use glyphtable::display::{draw_text, Canvas, TextStyle};
///
/// let mut canvas = Canvas::<32, 8>::new();
/// let width = draw_text(&mut canvas, "Hi", (0, 0), &TextStyle::new());
/// assert_eq!(width, 8);
/// ```
pub fn draw_text(
    sink: &mut impl PixelSink,
    text: &str,
    start_pos: Coordinates,
    style: &TextStyle,
) -> usize {
    let mut x = start_pos.0;
    for (i, glyph) in text_glyphs(text, style).enumerate() {
        if i > 0 {
            x += style.spacing;
        }
        x += draw_glyph(sink, &glyph, (x, start_pos.1));
    }

    x - start_pos.0
}

/// Code of a clock slot (digit 0-9 or [`CLOCK_COLON`]) in `font`.
fn clock_code(font: Font, slot: u32) -> u32 {
    match (font, slot) {
        (Font::Ascii, CLOCK_COLON) => u32::from(b':'),
        (Font::Ascii, digit) => u32::from(b'0') + digit,
        (_, slot) => slot,
    }
}

/// Draw `HH:MM` in a clock digit font, or with the ASCII digits.
///
/// Nothing is drawn if the font cannot show every slot.
pub fn draw_clock(
    sink: &mut impl PixelSink,
    font: Font,
    hours: u8,
    minutes: u8,
    start_pos: Coordinates,
    style: &TextStyle,
) -> Result<usize, GlyphError> {
    let slots = [
        u32::from(hours / 10 % 10),
        u32::from(hours % 10),
        CLOCK_COLON,
        u32::from(minutes / 10 % 10),
        u32::from(minutes % 10),
    ];

    let mut glyphs = [BLANK; 5];
    for (glyph, slot) in glyphs.iter_mut().zip(slots) {
        *glyph = decode(font, clock_code(font, slot))?;
    }

    let mut x = start_pos.0;
    for (i, glyph) in glyphs.iter().enumerate() {
        if i > 0 {
            x += style.spacing;
        }
        x += draw_glyph(sink, glyph, (x, start_pos.1));
    }

    Ok(x - start_pos.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column<const W: usize, const H: usize>(canvas: &Canvas<W, H>, x: usize) -> u8 {
        (0..H.min(8)).fold(0, |byte, y| byte | (u8::from(canvas.get((x, y))) << y))
    }

    #[test]
    fn glyph_lands_column_for_column() {
        let mut canvas = Canvas::<8, 8>::new();
        let a = decode(Font::Ascii, 'A' as u32).unwrap();

        assert_eq!(draw_glyph(&mut canvas, &a, (0, 0)), 4);
        for (x, &byte) in a.columns().iter().enumerate() {
            assert_eq!(column(&canvas, x), byte);
        }
        assert_eq!(column(&canvas, 4), 0);
    }

    #[test]
    fn offset_and_clipping() {
        let mut canvas = Canvas::<6, 4>::new();
        let block = decode(Font::Accented, 146).unwrap();

        draw_glyph(&mut canvas, &block, (5, 1));
        assert!(canvas.get((5, 1)) && canvas.get((5, 3)));
        assert!(!canvas.get((5, 0)));
        assert_eq!(canvas.lit(), 3);

        draw_glyph(&mut canvas, &block, (9, 9));
        assert_eq!(canvas.lit(), 3);
    }

    #[test]
    fn text_width_counts_spacing() {
        let style = TextStyle::new();
        assert_eq!(text_width("", &style), 0);
        assert_eq!(text_width("I", &style), 3);
        assert_eq!(text_width("AI", &style), 4 + 1 + 3);

        let tight = TextStyle {
            spacing: 0,
            ..TextStyle::new()
        };
        assert_eq!(text_width("AI", &tight), 7);
    }

    #[test]
    fn unknown_characters_are_substituted() {
        let style = TextStyle::new();
        let mut with_gap = Canvas::<32, 8>::new();
        let mut plain = Canvas::<32, 8>::new();

        let width = draw_text(&mut with_gap, "A\u{2603}B", (0, 0), &style);
        assert_eq!(width, 4 + 1 + 5 + 1 + 4);

        draw_text(&mut plain, "A B", (0, 0), &style);
        assert_eq!(with_gap, plain);
    }

    #[test]
    fn substitute_is_configurable() {
        let style = TextStyle {
            spacing: 1,
            substitute: decode(Font::Accented, 137).unwrap(),
        };
        let mut canvas = Canvas::<8, 8>::new();
        assert_eq!(draw_text(&mut canvas, "\u{2603}", (0, 0), &style), 5);
        assert!(canvas.lit() > 0);
    }

    #[test]
    fn umlauts_draw_from_accented_font() {
        let mut canvas = Canvas::<8, 8>::new();
        draw_text(&mut canvas, "Ü", (0, 0), &TextStyle::new());
        assert_eq!(column(&canvas, 0), 0x3e);
        assert_eq!(column(&canvas, 1), 0x41);
    }

    #[test]
    fn clock_in_each_face() {
        let style = TextStyle::new();
        let faces = [
            (Font::BoldDigit, 5 * 4 + 3 + 4),
            (Font::SmallDigit8Row, 3 * 4 + 1 + 4),
            (Font::SmallDigit7Row, 3 * 4 + 1 + 4),
            (Font::Ascii, 5 * 5 + 4),
        ];

        for (font, width) in faces {
            let mut canvas = Canvas::<40, 8>::new();
            assert_eq!(draw_clock(&mut canvas, font, 12, 34, (0, 0), &style), Ok(width));
            assert!(canvas.lit() > 0);
        }
    }

    #[test]
    fn clock_in_wrong_font_draws_nothing() {
        let mut canvas = Canvas::<40, 8>::new();
        let result = draw_clock(&mut canvas, Font::Icon, 1, 2, (0, 0), &TextStyle::new());
        assert!(matches!(result, Err(GlyphError::UnsupportedCode { .. })));
        assert_eq!(canvas.lit(), 0);
    }

    #[test]
    fn seven_row_clock_leaves_bottom_row_dark() {
        let mut canvas = Canvas::<40, 8>::new();
        draw_clock(&mut canvas, Font::SmallDigit7Row, 8, 8, (0, 0), &TextStyle::new()).unwrap();
        assert!((0..40).all(|x| !canvas.get((x, 7))));
    }

    #[test]
    fn canvas_prints_rows() {
        let mut canvas = Canvas::<3, 2>::new();
        canvas.set_pixel((1, 0), true);
        canvas.set_pixel((2, 1), true);
        assert_eq!(std::format!("{}", canvas), ".#.\n..#\n");

        canvas.clear();
        assert_eq!(canvas.lit(), 0);
    }
}
