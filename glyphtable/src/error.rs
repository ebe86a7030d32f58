use thiserror::Error;

use crate::font::Font;

/// Errors returned when looking up or decoding a glyph.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphError {
    /// The record index is past the end of the table. This only happens with a
    /// corrupt table or a resolver bug.
    #[error("record {index} is outside the glyph table ({count} records)")]
    OutOfRange { index: usize, count: usize },

    /// The font has no glyph for the requested code.
    #[error("{font:?} has no glyph for code {code}")]
    UnsupportedCode { font: Font, code: u32 },
}

/// Errors found while building the record offset index.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("table ends inside record {record} (byte {offset})")]
    Truncated { record: usize, offset: usize },

    #[error("{remaining} bytes left over after the last record (byte {offset})")]
    TrailingBytes { offset: usize, remaining: usize },

    #[error("record {record} starts at byte {offset}, past the 16-bit offset range")]
    Oversized { record: usize, offset: usize },
}

/// A font's declared layout does not match the records in the table.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontError {
    #[error("{font:?} expects record {index} to be {expected} columns wide, found {found}")]
    WidthMismatch {
        font: Font,
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("{font:?} record {index} has column {column:#010b}, taller than {rows} rows")]
    RowOverflow {
        font: Font,
        index: usize,
        rows: u8,
        column: u8,
    },

    #[error("{font:?} resolves outside the table")]
    Glyph {
        font: Font,
        #[source]
        source: GlyphError,
    },
}
