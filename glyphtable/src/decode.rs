//! Turning a font and a code into a glyph.

use crate::error::GlyphError;
use crate::font::{BitOrder, CodeDomain, Font};
use crate::table::{GlyphTable, CHARSET};

/// A decoded glyph, borrowing its columns from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    font: Font,
    index: usize,
    columns: &'static [u8],
}

/// Drawn in place of glyphs that cannot be decoded. Same shape as the ASCII
/// space.
pub const BLANK: Glyph = Glyph {
    font: Font::Ascii,
    index: 32,
    columns: &[0; 5],
};

impl Glyph {
    pub fn font(&self) -> Font {
        self.font
    }

    /// Record index the glyph was read from.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &'static [u8] {
        self.columns
    }

    pub fn rows(&self) -> u8 {
        self.font.info().row_height
    }

    pub fn bit_order(&self) -> BitOrder {
        self.font.info().bit_order
    }

    /// Whether the pixel at `col`, `row` is lit. Row 0 is the top row.
    pub fn pixel(&self, col: usize, row: u8) -> bool {
        let rows = self.rows();
        if row >= rows {
            return false;
        }

        let bit = self.bit_order().bit_for_row(row, rows);

        self.columns
            .get(col)
            .map(|column| (column >> bit) & 1 == 1)
            .unwrap_or(false)
    }

    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(|&column| column == 0)
    }
}

/// Record index of `code` in `font`.
pub fn resolve_index(font: Font, code: u32) -> Result<usize, GlyphError> {
    let info = font.info();

    match &info.domain {
        CodeDomain::Offset { first, last } if (*first..=*last).contains(&code) => {
            Ok(info.base_index + (code - first) as usize)
        }
        CodeDomain::Direct(ranges) if ranges.iter().any(|range| range.contains(&code)) => {
            Ok(code as usize)
        }
        CodeDomain::Fixed => Ok(info.base_index),
        _ => Err(GlyphError::UnsupportedCode { font, code }),
    }
}

/// Decode `code` from `font` in the built-in table.
///
/// ```
/// use glyphtable::{decode, Font};
///
/// let a = decode(Font::Ascii, 'A' as u32).unwrap();
/// assert_eq!(a.columns(), &[0x7e, 0x11, 0x11, 0x7e]);
/// ```
pub fn decode(font: Font, code: u32) -> Result<Glyph, GlyphError> {
    decode_in(&CHARSET, font, code)
}

/// Decode `code` from `font` in any table laid out like the built-in one.
pub fn decode_in<const N: usize>(
    table: &GlyphTable<N>,
    font: Font,
    code: u32,
) -> Result<Glyph, GlyphError> {
    let index = resolve_index(font, code)?;
    if !font.info().owns(index) {
        return Err(GlyphError::UnsupportedCode { font, code });
    }

    let record = table.record(index)?;

    Ok(Glyph {
        font,
        index,
        columns: record.columns,
    })
}

/// Decode a glyph, falling back to [`BLANK`] so a display loop can keep going.
///
/// A code the font does not have is logged and replaced. A lookup past the end
/// of the table is a bug and asserts in debug builds.
pub fn decode_or_blank(font: Font, code: u32) -> Glyph {
    match decode(font, code) {
        Ok(glyph) => glyph,
        Err(err @ GlyphError::UnsupportedCode { .. }) => {
            log::warn!("{}, drawing a blank", err);
            BLANK
        }
        Err(err @ GlyphError::OutOfRange { .. }) => {
            debug_assert!(false, "{}", err);
            log::error!("{}, drawing a blank", err);
            BLANK
        }
    }
}

/// Font and code that draw `ch`, if the table has it.
pub fn char_code(ch: char) -> Option<(Font, u32)> {
    let code = match ch {
        ' '..='~' => return Some((Font::Ascii, ch as u32)),
        'ä' => 128,
        'ö' => 129,
        'ü' => 130,
        'Ä' => 131,
        'Ö' => 132,
        'Ü' => 133,
        'ß' => 134,
        '€' => 135,
        '£' => 136,
        _ => return None,
    };

    Some((Font::Accented, code))
}

/// Decode a character from the ASCII or accented font.
pub fn decode_char(ch: char) -> Result<Glyph, GlyphError> {
    let (font, code) = char_code(ch).ok_or(GlyphError::UnsupportedCode {
        font: Font::Ascii,
        code: ch as u32,
    })?;

    decode(font, code)
}
