//! Font selectors for the built-in table.
//!
//! Every font is a sub-range of the one glyph table. A selector knows where its
//! range starts, which codes it accepts, and how its column bytes map to pixel
//! rows.

use core::ops::RangeInclusive;

use crate::decode::resolve_index;
use crate::error::FontError;
use crate::table::GlyphTable;

/// How bits in a column byte map to pixel rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitOrder {
    /// Bit 0 is the top row.
    LsbTop,
    /// Bit 0 is the bottom row of the glyph.
    MsbTop,
}

impl BitOrder {
    /// Bit holding pixel `row` (0 = top) of a glyph `rows` pixels tall.
    pub fn bit_for_row(self, row: u8, rows: u8) -> u8 {
        match self {
            BitOrder::LsbTop => row,
            BitOrder::MsbTop => rows - 1 - row,
        }
    }
}

/// The codes a font accepts and how they become record indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeDomain {
    /// Codes `first..=last` map to `base_index + (code - first)`.
    Offset { first: u32, last: u32 },
    /// The code is the record index, accepted only inside these ranges.
    Direct(&'static [RangeInclusive<u32>]),
    /// One record; the code is ignored.
    Fixed,
}

/// Static description of a font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontInfo {
    pub name: &'static str,
    /// Record index of the font's first code.
    pub base_index: usize,
    pub domain: CodeDomain,
    /// Number of pixel rows a column byte covers.
    pub row_height: u8,
    pub bit_order: BitOrder,
}

impl FontInfo {
    /// Whether a record index belongs to this font's sub-range.
    pub fn owns(&self, index: usize) -> bool {
        match &self.domain {
            CodeDomain::Offset { first, last } => {
                let len = (last - first) as usize;
                (self.base_index..=self.base_index + len).contains(&index)
            }
            CodeDomain::Direct(ranges) => u32::try_from(index)
                .map(|index| ranges.iter().any(|range| range.contains(&index)))
                .unwrap_or(false),
            CodeDomain::Fixed => index == self.base_index,
        }
    }

    /// Every code the font accepts, in index order. Fixed fonts yield `0`.
    pub fn codes(&self) -> impl Iterator<Item = u32> + '_ {
        let (offset, direct, fixed) = match &self.domain {
            CodeDomain::Offset { first, last } => (Some(*first..=*last), None, None),
            CodeDomain::Direct(ranges) => (None, Some(ranges.iter().cloned().flatten()), None),
            CodeDomain::Fixed => (None, None, Some(0)),
        };

        offset
            .into_iter()
            .flatten()
            .chain(direct.into_iter().flatten())
            .chain(fixed)
    }
}

/// Slot of the colon in every clock digit font.
pub const CLOCK_COLON: u32 = 10;

/// Symbol font codes.
pub const ARROW_UP: u32 = 24;
pub const ARROW_DOWN: u32 = 25;

/// Icon font codes.
pub const COLON_2X8: u32 = 147;
pub const DOT_1X8: u32 = 171;
pub const DOT_1X7: u32 = 172;
pub const COLON_6X8: u32 = 173;
pub const HOURGLASS: u32 = 174;

/// Accented font code of a meter column filled `eighths` rows from the bottom.
pub fn partial_column(eighths: u8) -> Option<u32> {
    match eighths {
        1..=8 => Some(138 + u32::from(eighths)),
        _ => None,
    }
}

/// A font in the built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Smileys, card suits, arrows and other decorations at records 0..=31.
    Symbol,
    /// Printable ASCII, 32..=127.
    Ascii,
    /// Umlauts, sharp s, currency signs and meter columns at 128..=146.
    Accented,
    /// 5 column, 8 row clock digits.
    BoldDigit,
    /// 3 column, 8 row serif clock digits.
    SmallDigit8Row,
    /// 3 column, 7 row clock digits.
    SmallDigit7Row,
    /// Hourglass, small colons, dots and spaces that belong to no other font.
    Icon,
    Logo,
    Spacer4,
    Spacer10,
    Spacer22,
}

const SYMBOL_CODES: &[RangeInclusive<u32>] = &[0..=31];
const ACCENTED_CODES: &[RangeInclusive<u32>] = &[128..=146];
const ICON_CODES: &[RangeInclusive<u32>] = &[147..=147, 170..=174, 190..=192];

static SYMBOL: FontInfo = FontInfo {
    name: "symbol",
    base_index: 0,
    domain: CodeDomain::Direct(SYMBOL_CODES),
    row_height: 8,
    bit_order: BitOrder::LsbTop,
};

// Lowercase descenders use the eighth row.
static ASCII: FontInfo = FontInfo {
    name: "ascii",
    base_index: 32,
    domain: CodeDomain::Offset {
        first: 32,
        last: 127,
    },
    row_height: 8,
    bit_order: BitOrder::LsbTop,
};

static ACCENTED: FontInfo = FontInfo {
    name: "accented",
    base_index: 128,
    domain: CodeDomain::Direct(ACCENTED_CODES),
    row_height: 8,
    bit_order: BitOrder::LsbTop,
};

static BOLD_DIGIT: FontInfo = FontInfo {
    name: "bold digit",
    base_index: 148,
    domain: CodeDomain::Offset {
        first: 0,
        last: CLOCK_COLON,
    },
    row_height: 8,
    bit_order: BitOrder::LsbTop,
};

static SMALL_DIGIT_8_ROW: FontInfo = FontInfo {
    name: "small digit 8 row",
    base_index: 159,
    domain: CodeDomain::Offset {
        first: 0,
        last: CLOCK_COLON,
    },
    row_height: 8,
    bit_order: BitOrder::LsbTop,
};

static SMALL_DIGIT_7_ROW: FontInfo = FontInfo {
    name: "small digit 7 row",
    base_index: 179,
    domain: CodeDomain::Offset {
        first: 0,
        last: CLOCK_COLON,
    },
    row_height: 7,
    bit_order: BitOrder::LsbTop,
};

static ICON: FontInfo = FontInfo {
    name: "icon",
    base_index: 147,
    domain: CodeDomain::Direct(ICON_CODES),
    row_height: 8,
    bit_order: BitOrder::LsbTop,
};

static LOGO: FontInfo = FontInfo {
    name: "logo",
    base_index: 176,
    domain: CodeDomain::Fixed,
    row_height: 5,
    bit_order: BitOrder::LsbTop,
};

static SPACER_4: FontInfo = FontInfo {
    name: "spacer 4",
    base_index: 175,
    domain: CodeDomain::Fixed,
    row_height: 8,
    bit_order: BitOrder::LsbTop,
};

static SPACER_10: FontInfo = FontInfo {
    name: "spacer 10",
    base_index: 178,
    domain: CodeDomain::Fixed,
    row_height: 8,
    bit_order: BitOrder::LsbTop,
};

static SPACER_22: FontInfo = FontInfo {
    name: "spacer 22",
    base_index: 177,
    domain: CodeDomain::Fixed,
    row_height: 8,
    bit_order: BitOrder::LsbTop,
};

impl Font {
    pub const ALL: [Font; 11] = [
        Font::Symbol,
        Font::Ascii,
        Font::Accented,
        Font::BoldDigit,
        Font::SmallDigit8Row,
        Font::SmallDigit7Row,
        Font::Icon,
        Font::Logo,
        Font::Spacer4,
        Font::Spacer10,
        Font::Spacer22,
    ];

    /// The tall serif clock face. The table only holds one 8-row serif face,
    /// so this is the same font as [`Font::SmallDigit8Row`].
    pub const TALL_SERIF_DIGIT: Font = Font::SmallDigit8Row;

    pub fn info(self) -> &'static FontInfo {
        match self {
            Font::Symbol => &SYMBOL,
            Font::Ascii => &ASCII,
            Font::Accented => &ACCENTED,
            Font::BoldDigit => &BOLD_DIGIT,
            Font::SmallDigit8Row => &SMALL_DIGIT_8_ROW,
            Font::SmallDigit7Row => &SMALL_DIGIT_7_ROW,
            Font::Icon => &ICON,
            Font::Logo => &LOGO,
            Font::Spacer4 => &SPACER_4,
            Font::Spacer10 => &SPACER_10,
            Font::Spacer22 => &SPACER_22,
        }
    }

    pub fn is_clock(self) -> bool {
        matches!(
            self,
            Font::BoldDigit | Font::SmallDigit8Row | Font::SmallDigit7Row
        )
    }

    /// Widths a well-formed table must have for this font's records, as
    /// `(width, width of the colon slot)`.
    fn expected_widths(self) -> Option<(usize, usize)> {
        match self {
            Font::BoldDigit => Some((5, 3)),
            Font::SmallDigit8Row | Font::SmallDigit7Row => Some((3, 1)),
            Font::Logo => Some((19, 19)),
            Font::Spacer4 => Some((4, 4)),
            Font::Spacer10 => Some((10, 10)),
            Font::Spacer22 => Some((22, 22)),
            _ => None,
        }
    }
}

/// Check every font's base offset and geometry against the records actually
/// in `table`.
///
/// Catches a table edit that shifts records under a font.
pub fn validate<const N: usize>(table: &GlyphTable<N>) -> Result<(), FontError> {
    for font in Font::ALL {
        let info = font.info();
        let mut glyphs = 0;

        for code in info.codes() {
            let record = resolve_index(font, code)
                .and_then(|index| table.record(index))
                .map_err(|source| FontError::Glyph { font, source })?;

            if let Some((width, colon_width)) = font.expected_widths() {
                let expected = if font.is_clock() && code == CLOCK_COLON {
                    colon_width
                } else {
                    width
                };
                if record.width() != expected {
                    return Err(FontError::WidthMismatch {
                        font,
                        index: record.index,
                        expected,
                        found: record.width(),
                    });
                }
            }

            if info.row_height < 8 {
                if let Some(&column) = record
                    .columns
                    .iter()
                    .find(|&&column| column >> info.row_height != 0)
                {
                    return Err(FontError::RowOverflow {
                        font,
                        index: record.index,
                        rows: info.row_height,
                        column,
                    });
                }
            }

            glyphs += 1;
        }

        log::debug!(
            "font {} ok: {} glyphs from record {}",
            info.name,
            glyphs,
            info.base_index
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CHARSET, CHARSET_BYTES, RECORD_COUNT};

    #[test]
    fn builtin_table_validates() {
        assert_eq!(validate(&CHARSET), Ok(()));
    }

    #[test]
    fn shifted_table_is_caught() {
        // one extra empty record up front, last record dropped
        let mut bytes = vec![0u8];
        bytes.extend_from_slice(&CHARSET_BYTES[..CHARSET_BYTES.len() - 2]);
        let table = GlyphTable::<RECORD_COUNT>::try_new(Box::leak(bytes.into_boxed_slice()))
            .expect("still a well-formed stream");

        assert_eq!(
            validate(&table),
            Err(FontError::WidthMismatch {
                font: Font::BoldDigit,
                index: 148,
                expected: 5,
                found: 2,
            })
        );
    }

    #[test]
    fn tall_column_in_short_font_is_caught() {
        let mut bytes = CHARSET_BYTES.to_vec();
        let offset: usize = CHARSET.iter().take(179).map(|r| r.bytes_consumed()).sum();
        bytes[offset + 1] |= 0x80;
        let table = GlyphTable::<RECORD_COUNT>::try_new(Box::leak(bytes.into_boxed_slice()))
            .expect("still a well-formed stream");

        assert_eq!(
            validate(&table),
            Err(FontError::RowOverflow {
                font: Font::SmallDigit7Row,
                index: 179,
                rows: 7,
                column: 0xff,
            })
        );
    }

    #[test]
    fn owns_matches_domain() {
        assert!(Font::Ascii.info().owns(32));
        assert!(Font::Ascii.info().owns(127));
        assert!(!Font::Ascii.info().owns(128));
        assert!(Font::Icon.info().owns(173));
        assert!(!Font::Icon.info().owns(175));
        assert!(Font::Logo.info().owns(176));
        assert!(!Font::Logo.info().owns(177));
    }

    #[test]
    fn codes_enumerate_domain() {
        assert_eq!(Font::BoldDigit.info().codes().count(), 11);
        assert_eq!(Font::Ascii.info().codes().count(), 96);
        assert_eq!(Font::Icon.info().codes().count(), 9);
        assert!(Font::Spacer22.info().codes().eq([0]));
    }

    #[test]
    fn row_heights_are_per_font() {
        assert_eq!(Font::SmallDigit7Row.info().row_height, 7);
        assert_eq!(Font::SmallDigit8Row.info().row_height, 8);
        assert_eq!(Font::Logo.info().row_height, 5);
        assert_eq!(Font::TALL_SERIF_DIGIT, Font::SmallDigit8Row);
    }

    #[test]
    fn bit_order_maps_rows() {
        assert_eq!(BitOrder::LsbTop.bit_for_row(0, 8), 0);
        assert_eq!(BitOrder::LsbTop.bit_for_row(6, 7), 6);
        assert_eq!(BitOrder::MsbTop.bit_for_row(0, 8), 7);
        assert_eq!(BitOrder::MsbTop.bit_for_row(0, 7), 6);
        assert_eq!(BitOrder::MsbTop.bit_for_row(6, 7), 0);
    }

    #[test]
    fn meter_columns() {
        assert_eq!(partial_column(0), None);
        assert_eq!(partial_column(1), Some(139));
        assert_eq!(partial_column(8), Some(146));
        assert_eq!(partial_column(9), None);
    }
}
