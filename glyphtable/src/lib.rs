//! Variable-width glyph table for small LED matrix displays.
//!
//! One packed table holds several fonts: ASCII text, accented letters,
//! symbols, three clock digit faces, icons, a logo and blank spacers. Pick a
//! [`Font`], pass a code, and get back the glyph's pixel columns:
//!
//! ```
//! use glyphtable::{decode, Font};
//!
//! let colon = decode(Font::BoldDigit, glyphtable::font::CLOCK_COLON).unwrap();
//! assert_eq!(colon.width(), 3);
//! assert_eq!(colon.rows(), 8);
//! ```
//!
//! The table is indexed at compile time and never changes, so it can be read
//! from any number of threads.

#![cfg_attr(not(test), no_std)]

pub mod decode;
pub mod display;
pub mod error;
pub mod font;
pub mod table;

pub use decode::{decode, decode_char, decode_or_blank, resolve_index, Glyph, BLANK};
pub use error::{FontError, GlyphError, TableError};
pub use font::{BitOrder, CodeDomain, Font, FontInfo};
pub use table::{GlyphTable, Record, CHARSET, RECORD_COUNT};

/// Display coordinates, `(x, y)`
pub type Coordinates = (usize, usize);
