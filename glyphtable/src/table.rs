//! Packed glyph records and the offset index over them.
//!
//! The table is a flat run of records, each a width byte followed by that
//! many column bytes. There is no header and no terminator; the record count
//! is shared with callers through [`RECORD_COUNT`].

use crate::error::{GlyphError, TableError};

/// Number of records in the built-in table.
pub const RECORD_COUNT: usize = 193;

/// The built-in table, indexed once at compile time.
pub static CHARSET: GlyphTable<RECORD_COUNT> = GlyphTable::new(CHARSET_BYTES);

/// One record of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub index: usize,
    pub columns: &'static [u8],
}

impl Record {
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Bytes this record takes up in the packed stream.
    pub fn bytes_consumed(&self) -> usize {
        1 + self.columns.len()
    }
}

/// Read-only view of a packed record stream with O(1) access by index.
#[derive(Debug)]
pub struct GlyphTable<const N: usize> {
    data: &'static [u8],
    offsets: [u16; N],
}

impl<const N: usize> GlyphTable<N> {
    /// Walk `data` once and record where each of the `N` records starts.
    ///
    /// The whole stream must be consumed by exactly `N` records.
    pub const fn try_new(data: &'static [u8]) -> Result<Self, TableError> {
        let mut offsets = [0u16; N];
        let mut offset = 0;
        let mut record = 0;

        while record < N {
            if offset >= data.len() {
                return Err(TableError::Truncated { record, offset });
            }
            if offset > u16::MAX as usize {
                return Err(TableError::Oversized { record, offset });
            }

            let width = data[offset] as usize;
            if offset + 1 + width > data.len() {
                return Err(TableError::Truncated { record, offset });
            }

            offsets[record] = offset as u16;
            offset += 1 + width;
            record += 1;
        }

        if offset != data.len() {
            return Err(TableError::TrailingBytes {
                offset,
                remaining: data.len() - offset,
            });
        }

        Ok(Self { data, offsets })
    }

    /// Like [`try_new`](Self::try_new), but panics on a malformed table. Used
    /// in `static` initializers so a bad table fails the build.
    pub const fn new(data: &'static [u8]) -> Self {
        match Self::try_new(data) {
            Ok(table) => table,
            Err(TableError::Truncated { .. }) => panic!("glyph table ends inside a record"),
            Err(TableError::TrailingBytes { .. }) => {
                panic!("glyph table has bytes after the last record")
            }
            Err(TableError::Oversized { .. }) => panic!("glyph table is too large to index"),
        }
    }

    pub const fn record_count(&self) -> usize {
        N
    }

    /// Size of the packed stream in bytes.
    pub const fn byte_len(&self) -> usize {
        self.data.len()
    }

    pub fn record(&self, index: usize) -> Result<Record, GlyphError> {
        let offset = *self
            .offsets
            .get(index)
            .ok_or(GlyphError::OutOfRange { index, count: N })? as usize;
        let width = self.data[offset] as usize;

        Ok(Record {
            index,
            columns: &self.data[offset + 1..offset + 1 + width],
        })
    }

    pub fn width_at(&self, index: usize) -> Result<usize, GlyphError> {
        self.record(index).map(|record| record.width())
    }

    pub fn columns_at(&self, index: usize) -> Result<&'static [u8], GlyphError> {
        self.record(index).map(|record| record.columns)
    }

    pub fn bytes_consumed(&self, index: usize) -> Result<usize, GlyphError> {
        self.record(index).map(|record| record.bytes_consumed())
    }

    /// Iterate over every record in table order.
    pub fn iter(&self) -> impl Iterator<Item = Record> + '_ {
        (0..N).filter_map(move |index| self.record(index).ok())
    }
}

#[rustfmt::skip]
pub(crate) const CHARSET_BYTES: &[u8] = &[
    // Symbol font, addressed by raw index.
    0,                                                                  // 0 empty cell
    5, 0x3e, 0x5b, 0x4f, 0x5b, 0x3e,                                    // 1 sad smiley
    5, 0x3e, 0x6b, 0x4f, 0x6b, 0x3e,                                    // 2 happy smiley
    5, 0x1c, 0x3e, 0x7c, 0x3e, 0x1c,                                    // 3 heart
    5, 0x18, 0x3c, 0x7e, 0x3c, 0x18,                                    // 4 diamond
    5, 0x1c, 0x57, 0x7d, 0x57, 0x1c,                                    // 5 clubs
    5, 0x1c, 0x5e, 0x7f, 0x5e, 0x1c,                                    // 6 spades
    4, 0x00, 0x18, 0x3c, 0x18,                                          // 7 bullet
    5, 0xff, 0xe7, 0xc3, 0xe7, 0xff,                                    // 8 inverse bullet
    4, 0x00, 0x18, 0x24, 0x18,                                          // 9 hollow bullet
    5, 0xff, 0xe7, 0xdb, 0xe7, 0xff,                                    // 10 inverse hollow bullet
    5, 0x30, 0x48, 0x3a, 0x06, 0x0e,                                    // 11 male
    5, 0x26, 0x29, 0x79, 0x29, 0x26,                                    // 12 female
    5, 0x40, 0x7f, 0x05, 0x05, 0x07,                                    // 13 note
    5, 0x40, 0x7f, 0x05, 0x25, 0x3f,                                    // 14 double note
    5, 0x5a, 0x3c, 0xe7, 0x3c, 0x5a,                                    // 15 snowflake
    5, 0x7f, 0x3e, 0x1c, 0x1c, 0x08,                                    // 16 pointer right
    5, 0x08, 0x1c, 0x1c, 0x3e, 0x7f,                                    // 17 pointer left
    5, 0x14, 0x22, 0x7f, 0x22, 0x14,                                    // 18 arrows up/down
    5, 0x5f, 0x5f, 0x00, 0x5f, 0x5f,                                    // 19 double exclamation
    5, 0x22, 0x4d, 0x55, 0x59, 0x22,                                    // 20 pilcrow
    4, 0x66, 0x89, 0x95, 0x6a,                                          // 21 section
    5, 0x60, 0x60, 0x60, 0x60, 0x60,                                    // 22 double underline
    5, 0x94, 0xa2, 0xff, 0xa2, 0x94,                                    // 23 arrows up/down, underlined
    5, 0x08, 0x04, 0x7e, 0x04, 0x08,                                    // 24 arrow up
    5, 0x10, 0x20, 0x7e, 0x20, 0x10,                                    // 25 arrow down
    5, 0x08, 0x08, 0x2a, 0x1c, 0x08,                                    // 26 arrow right
    5, 0x08, 0x1c, 0x2a, 0x08, 0x08,                                    // 27 arrow left
    5, 0x1e, 0x10, 0x10, 0x10, 0x10,                                    // 28 angle
    5, 0x0c, 0x1e, 0x0c, 0x1e, 0x0c,                                    // 29 squashed hash
    5, 0x30, 0x38, 0x3e, 0x38, 0x30,                                    // 30 pointer up
    5, 0x06, 0x0e, 0x3e, 0x0e, 0x06,                                    // 31 pointer down

    // ASCII, 32..=127.
    5, 0x00, 0x00, 0x00, 0x00, 0x00,                                    // 32 space
    5, 0x00, 0x00, 0x5f, 0x00, 0x00,                                    // 33 '!'
    5, 0x00, 0x03, 0x00, 0x03, 0x00,                                    // 34 '"'
    5, 0x14, 0x3e, 0x14, 0x3e, 0x14,                                    // 35 '#'
    5, 0x24, 0x2a, 0x7f, 0x2a, 0x12,                                    // 36 '$'
    5, 0x43, 0x33, 0x08, 0x66, 0x61,                                    // 37 '%'
    5, 0x36, 0x49, 0x55, 0x22, 0x50,                                    // 38 '&'
    5, 0x00, 0x05, 0x03, 0x00, 0x00,                                    // 39 apostrophe
    5, 0x00, 0x1c, 0x22, 0x41, 0x00,                                    // 40 '('
    5, 0x00, 0x41, 0x22, 0x1c, 0x00,                                    // 41 ')'
    5, 0x14, 0x08, 0x3e, 0x08, 0x14,                                    // 42 '*'
    5, 0x08, 0x08, 0x3e, 0x08, 0x08,                                    // 43 '+'
    5, 0x00, 0x50, 0x30, 0x00, 0x00,                                    // 44 ','
    5, 0x08, 0x08, 0x08, 0x08, 0x08,                                    // 45 '-'
    5, 0x00, 0x00, 0x60, 0x60, 0x00,                                    // 46 '.'
    5, 0x20, 0x10, 0x08, 0x04, 0x02,                                    // 47 '/'
    5, 0x3e, 0x51, 0x49, 0x45, 0x3e,                                    // 48 '0'
    5, 0x04, 0x02, 0x7f, 0x00, 0x00,                                    // 49 '1'
    5, 0x42, 0x61, 0x51, 0x49, 0x46,                                    // 50 '2'
    5, 0x22, 0x41, 0x49, 0x49, 0x36,                                    // 51 '3'
    5, 0x18, 0x14, 0x12, 0x7f, 0x10,                                    // 52 '4'
    5, 0x27, 0x45, 0x45, 0x45, 0x39,                                    // 53 '5'
    5, 0x3e, 0x49, 0x49, 0x49, 0x32,                                    // 54 '6'
    5, 0x01, 0x01, 0x71, 0x09, 0x07,                                    // 55 '7'
    5, 0x36, 0x49, 0x49, 0x49, 0x36,                                    // 56 '8'
    5, 0x26, 0x49, 0x49, 0x49, 0x3e,                                    // 57 '9'
    5, 0x00, 0x00, 0x36, 0x36, 0x00,                                    // 58 ':'
    5, 0x00, 0x56, 0x36, 0x00, 0x00,                                    // 59 ';'
    5, 0x08, 0x14, 0x22, 0x41, 0x00,                                    // 60 '<'
    5, 0x14, 0x14, 0x14, 0x14, 0x14,                                    // 61 '='
    5, 0x00, 0x41, 0x22, 0x14, 0x08,                                    // 62 '>'
    5, 0x02, 0x01, 0x51, 0x09, 0x06,                                    // 63 '?'
    5, 0x3e, 0x41, 0x59, 0x55, 0x5e,                                    // 64 '@'
    4, 0b0111_1110, 0b0001_0001, 0b0001_0001, 0b0111_1110,              // 65 'A'
    4, 0b0111_1111, 0b0100_1001, 0b0100_1001, 0b0011_0110,              // 66 'B'
    4, 0b0011_1110, 0b0100_0001, 0b0100_0001, 0b0010_0010,              // 67 'C'
    4, 0b0111_1111, 0b0100_0001, 0b0100_0001, 0b0011_1110,              // 68 'D'
    4, 0b0111_1111, 0b0100_1001, 0b0100_1001, 0b0100_0001,              // 69 'E'
    4, 0b0111_1111, 0b0000_1001, 0b0000_1001, 0b0000_0001,              // 70 'F'
    4, 0b0011_1110, 0b0100_0001, 0b0100_1001, 0b0111_1010,              // 71 'G'
    4, 0b0111_1111, 0b0000_1000, 0b0000_1000, 0b0111_1111,              // 72 'H'
    3, 0b0100_0001, 0b0111_1111, 0b0100_0001,                           // 73 'I'
    4, 0b0011_0000, 0b0100_0000, 0b0100_0001, 0b0011_1111,              // 74 'J'
    4, 0b0111_1111, 0b0000_1000, 0b0001_0100, 0b0110_0011,              // 75 'K'
    4, 0b0111_1111, 0b0100_0000, 0b0100_0000, 0b0100_0000,              // 76 'L'
    5, 0b0111_1111, 0b0000_0010, 0b0000_1100, 0b0000_0010, 0b0111_1111, // 77 'M'
    5, 0b0111_1111, 0b0000_0100, 0b0000_1000, 0b0001_0000, 0b0111_1111, // 78 'N'
    4, 0b0011_1110, 0b0100_0001, 0b0100_0001, 0b0011_1110,              // 79 'O'
    4, 0b0111_1111, 0b0000_1001, 0b0000_1001, 0b0000_0110,              // 80 'P'
    4, 0b0011_1110, 0b0100_0001, 0b0100_0001, 0b1011_1110,              // 81 'Q'
    4, 0b0111_1111, 0b0000_1001, 0b0000_1001, 0b0111_0110,              // 82 'R'
    4, 0b0100_0110, 0b0100_1001, 0b0100_1001, 0b0011_0010,              // 83 'S'
    5, 0b0000_0001, 0b0000_0001, 0b0111_1111, 0b0000_0001, 0b0000_0001, // 84 'T'
    4, 0b0011_1111, 0b0100_0000, 0b0100_0000, 0b0011_1111,              // 85 'U'
    5, 0b0000_1111, 0b0011_0000, 0b0100_0000, 0b0011_0000, 0b0000_1111, // 86 'V'
    5, 0b0011_1111, 0b0100_0000, 0b0011_1000, 0b0100_0000, 0b0011_1111, // 87 'W'
    5, 0b0110_0011, 0b0001_0100, 0b0000_1000, 0b0001_0100, 0b0110_0011, // 88 'X'
    5, 0b0000_0111, 0b0000_1000, 0b0111_0000, 0b0000_1000, 0b0000_0111, // 89 'Y'
    4, 0b0110_0001, 0b0101_0001, 0b0100_1001, 0b0100_0111,              // 90 'Z'
    2, 0b0111_1111, 0b0100_0001,                                        // 91 '['
    4, 0b0000_0001, 0b0000_0110, 0b0001_1000, 0b0110_0000,              // 92 backslash
    2, 0b0100_0001, 0b0111_1111,                                        // 93 ']'
    3, 0b0000_0010, 0b0000_0001, 0b0000_0010,                           // 94 '^'
    4, 0b0100_0000, 0b0100_0000, 0b0100_0000, 0b0100_0000,              // 95 '_'
    2, 0b0000_0001, 0b0000_0010,                                        // 96 '`'
    4, 0b0010_0000, 0b0101_0100, 0b0101_0100, 0b0111_1000,              // 97 'a'
    4, 0b0111_1111, 0b0100_0100, 0b0100_0100, 0b0011_1000,              // 98 'b'
    4, 0b0011_1000, 0b0100_0100, 0b0100_0100, 0b0010_1000,              // 99 'c'
    4, 0b0011_1000, 0b0100_0100, 0b0100_0100, 0b0111_1111,              // 100 'd'
    4, 0b0011_1000, 0b0101_0100, 0b0101_0100, 0b0001_1000,              // 101 'e'
    3, 0b0000_0100, 0b0111_1110, 0b0000_0101,                           // 102 'f'
    4, 0b1001_1000, 0b1010_0100, 0b1010_0100, 0b0111_1000,              // 103 'g'
    4, 0b0111_1111, 0b0000_0100, 0b0000_0100, 0b0111_1000,              // 104 'h'
    3, 0b0100_0100, 0b0111_1101, 0b0100_0000,                           // 105 'i'
    4, 0b0100_0000, 0b1000_0000, 0b1000_0100, 0b0111_1101,              // 106 'j'
    4, 0b0111_1111, 0b0001_0000, 0b0010_1000, 0b0100_0100,              // 107 'k'
    3, 0b0100_0001, 0b0111_1111, 0b0100_0000,                           // 108 'l'
    5, 0b0111_1100, 0b0000_0100, 0b0111_1100, 0b0000_0100, 0b0111_1000, // 109 'm'
    4, 0b0111_1100, 0b0000_0100, 0b0000_0100, 0b0111_1000,              // 110 'n'
    4, 0b0011_1000, 0b0100_0100, 0b0100_0100, 0b0011_1000,              // 111 'o'
    4, 0b1111_1100, 0b0010_0100, 0b0010_0100, 0b0001_1000,              // 112 'p'
    4, 0b0001_1000, 0b0010_0100, 0b0010_0100, 0b1111_1100,              // 113 'q'
    4, 0b0111_1100, 0b0000_1000, 0b0000_0100, 0b0000_0100,              // 114 'r'
    4, 0b0100_1000, 0b0101_0100, 0b0101_0100, 0b0010_0100,              // 115 's'
    3, 0b0000_0100, 0b0011_1111, 0b0100_0100,                           // 116 't'
    4, 0b0011_1100, 0b0100_0000, 0b0100_0000, 0b0111_1100,              // 117 'u'
    5, 0b0001_1100, 0b0010_0000, 0b0100_0000, 0b0010_0000, 0b0001_1100, // 118 'v'
    5, 0b0011_1100, 0b0100_0000, 0b0011_1100, 0b0100_0000, 0b0011_1100, // 119 'w'
    5, 0b0100_0100, 0b0010_1000, 0b0001_0000, 0b0010_1000, 0b0100_0100, // 120 'x'
    4, 0b1001_1100, 0b1010_0000, 0b1010_0000, 0b0111_1100,              // 121 'y'
    3, 0b0110_0100, 0b0101_0100, 0b0100_1100,                           // 122 'z'
    3, 0b0000_1000, 0b0011_0110, 0b0100_0001,                           // 123 '{'
    1, 0b0111_1111,                                                     // 124 '|'
    3, 0b0100_0001, 0b0011_0110, 0b0000_1000,                           // 125 '}'
    4, 0b0000_1000, 0b0000_0100, 0b0000_1000, 0b0000_0100,              // 126 '~'
    5, 0b1010_1010, 0b0101_0101, 0b1010_1010, 0b0101_0101, 0b1010_1010, // 127 checker

    // Accented letters, currency, meter columns.
    5, 0b0010_0000, 0b0101_0101, 0b0101_0100, 0b0101_0101, 0b0011_1000, // 128 a umlaut
    5, 0b0011_1000, 0b0100_0101, 0b0100_0100, 0b0100_0101, 0b0011_1000, // 129 o umlaut
    4, 0b0011_1101, 0b0100_0000, 0b0100_0000, 0b0111_1101,              // 130 u umlaut
    4, 0x7d, 0x12, 0x12, 0x7d,                                          // 131 A umlaut
    4, 0x3d, 0x42, 0x42, 0x3d,                                          // 132 O umlaut
    5, 0x3e, 0x41, 0x40, 0x41, 0x3e,                                    // 133 U umlaut
    4, 0x7c, 0x2a, 0x2a, 0x14,                                          // 134 sharp s
    5, 0x1c, 0x2a, 0x49, 0x49, 0x22,                                    // 135 euro
    4, 0x48, 0x7e, 0x49, 0x4a,                                          // 136 pound
    5, 0b1010_1010, 0b0101_0101, 0b1010_1010, 0b0101_0101, 0b1010_1010, // 137 checker
    2, 0x60, 0x60,                                                      // 138 point
    1, 0b1000_0000,                                                     // 139 partial column 1/8
    1, 0b1100_0000,                                                     // 140 partial column 2/8
    1, 0b1110_0000,                                                     // 141 partial column 3/8
    1, 0b1111_0000,                                                     // 142 partial column 4/8
    1, 0b1111_1000,                                                     // 143 partial column 5/8
    1, 0b1111_1100,                                                     // 144 partial column 6/8
    1, 0b1111_1110,                                                     // 145 partial column 7/8
    1, 0b1111_1111,                                                     // 146 partial column 8/8
    2, 0x36, 0x36,                                                      // 147 colon 2x8

    // Bold clock digits, colon last.
    5, 0b1111_1111, 0b1111_1111, 0b1100_0011, 0b1111_1111, 0b1111_1111, // 148 0
    5, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b1111_1111, 0b1111_1111, // 149 1
    5, 0b1111_1011, 0b1111_1011, 0b1101_1011, 0b1101_1111, 0b1101_1111, // 150 2
    5, 0b1100_0011, 0b1101_1011, 0b1101_1011, 0b1111_1111, 0b1111_1111, // 151 3
    5, 0b0001_1111, 0b0001_1111, 0b0001_1000, 0b1111_1111, 0b1111_1111, // 152 4
    5, 0b1101_1111, 0b1101_1111, 0b1101_1011, 0b1111_1011, 0b1111_1011, // 153 5
    5, 0b1111_1111, 0b1111_1111, 0b1101_1011, 0b1111_1011, 0b1111_1011, // 154 6
    5, 0b0000_0011, 0b0000_0011, 0b0000_0011, 0b1111_1111, 0b1111_1111, // 155 7
    5, 0b1111_1111, 0b1111_1111, 0b1101_1011, 0b1111_1111, 0b1111_1111, // 156 8
    5, 0b1101_1111, 0b1101_1111, 0b1101_1011, 0b1111_1111, 0b1111_1111, // 157 9
    3, 0b1110_1110, 0b1110_1110, 0b1110_1110,                           // 158 colon

    // Small 8-row serif clock digits, colon last.
    3, 0b1111_1111, 0b1000_0001, 0b1111_1111,                           // 159 0
    3, 0b0000_0000, 0b1111_1111, 0b0000_0000,                           // 160 1
    3, 0b1111_1001, 0b1000_1001, 0b1100_1111,                           // 161 2
    3, 0b1100_0001, 0b1000_1001, 0b1111_1111,                           // 162 3
    3, 0b0000_1111, 0b0000_1000, 0b1111_1111,                           // 163 4
    3, 0b1100_1111, 0b1000_1001, 0b1111_1001,                           // 164 5
    3, 0b1111_1111, 0b1000_1001, 0b1111_1011,                           // 165 6
    3, 0b0000_0011, 0b0000_0001, 0b1111_1111,                           // 166 7
    3, 0b1111_1111, 0b1000_1001, 0b1111_1111,                           // 167 8
    3, 0b1100_1111, 0b1000_1001, 0b1111_1111,                           // 168 9
    1, 0b0010_0100,                                                     // 169 colon

    // Small-face extras.
    3, 0b0000_0000, 0b0000_0000, 0b0000_0000,                           // 170 space
    1, 0b1000_0000,                                                     // 171 dot 1x8
    1, 0b0100_0000,                                                     // 172 dot 1x7
    6, 0b0000_0000, 0b0000_0000, 0b0011_0110, 0b0011_0110, 0b0000_0000, 0b0000_0000, // 173 colon 6x8
    5, 0b1100_0011, 0b1110_0101, 0b1101_1101, 0b1110_0101, 0b1100_0011, // 174 hourglass

    // Spacers and the logo.
    4, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,              // 175 spacer 4
    19,                                                                 // 176 logo "TiMER"
    0b0000_0001, 0b0001_1111, 0b0000_0001, 0b0000_0000, 0b0001_1101,
    0b0000_0000, 0b0001_1111, 0b0000_0010, 0b0000_0100, 0b0000_0010,
    0b0001_1111, 0b0000_0000, 0b0001_1111, 0b0001_0101, 0b0001_0001,
    0b0000_0000, 0b0001_1111, 0b0000_0101, 0b0001_1010,
    22,                                                                 // 177 spacer 22
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0000_0000,
    10,                                                                 // 178 spacer 10
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,
    0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000, 0b0000_0000,

    // Small 7-row clock digits, colon last.
    3, 0b0111_1111, 0b0100_0001, 0b0111_1111,                           // 179 0
    3, 0b0000_0000, 0b0111_1111, 0b0000_0000,                           // 180 1
    3, 0b0111_1001, 0b0100_1001, 0b0100_1111,                           // 181 2
    3, 0b0100_0001, 0b0100_1001, 0b0111_1111,                           // 182 3
    3, 0b0000_1111, 0b0000_1000, 0b0111_1111,                           // 183 4
    3, 0b0100_1111, 0b0100_1001, 0b0111_1001,                           // 184 5
    3, 0b0111_1111, 0b0100_1001, 0b0111_1001,                           // 185 6
    3, 0b0000_0001, 0b0000_0001, 0b0111_1111,                           // 186 7
    3, 0b0111_1111, 0b0100_1001, 0b0111_1111,                           // 187 8
    3, 0b0100_1111, 0b0100_1001, 0b0111_1111,                           // 188 9
    1, 0b0010_0100,                                                     // 189 colon

    // Small 7-row extras.
    3, 0b0000_0000, 0b0000_0000, 0b0000_0000,                           // 190 space
    1, 0b0100_0000,                                                     // 191 dot
    1, 0b0100_0000,                                                     // 192 dot, alternative
];
