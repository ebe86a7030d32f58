use std::collections::HashMap;

use glyphtable::font::{validate, COLON_2X8, COLON_6X8, DOT_1X7, DOT_1X8, HOURGLASS};
use glyphtable::{decode, resolve_index, Font, GlyphError, CHARSET, RECORD_COUNT};

#[test]
fn every_code_has_its_own_record() {
    let mut owners: HashMap<usize, (Font, u32)> = HashMap::new();

    for font in Font::ALL {
        for code in font.info().codes() {
            let index = resolve_index(font, code).unwrap();
            if let Some(previous) = owners.insert(index, (font, code)) {
                panic!("{:?} and {:?} both resolve to record {}", previous, (font, code), index);
            }
        }
    }

    // the fonts cover the whole table between them
    assert_eq!(owners.len(), RECORD_COUNT);
    assert!((0..RECORD_COUNT).all(|index| owners.contains_key(&index)));
}

#[test]
fn resolved_records_stay_in_their_font() {
    for font in Font::ALL {
        let info = font.info();
        for code in info.codes() {
            let glyph = decode(font, code).unwrap();
            assert!(info.owns(glyph.index()), "{:?} code {}", font, code);
            assert_eq!(glyph.rows(), info.row_height);
        }
    }
}

#[test]
fn fonts_match_table() {
    assert_eq!(validate(&CHARSET), Ok(()));
}

#[test]
fn clock_faces() {
    for font in [Font::BoldDigit, Font::SmallDigit8Row, Font::SmallDigit7Row] {
        assert!(font.is_clock());
        let widths: Vec<usize> = (0..=10).map(|code| decode(font, code).unwrap().width()).collect();
        assert!(widths[..10].iter().all(|&width| width == widths[0]));
        assert!(widths[10] < widths[0]);
        assert!(decode(font, 11).is_err());
    }

    // same digit shapes, one row shorter
    for digit in 0..10 {
        let tall = decode(Font::TALL_SERIF_DIGIT, digit).unwrap();
        let short = decode(Font::SmallDigit7Row, digit).unwrap();
        assert_eq!(tall.rows(), 8);
        assert_eq!(short.rows(), 7);
        assert_ne!(tall.columns(), short.columns());
    }
}

#[test]
fn icons() {
    let hourglass = decode(Font::Icon, HOURGLASS).unwrap();
    assert_eq!(hourglass.columns(), &[0xc3, 0xe5, 0xdd, 0xe5, 0xc3]);

    assert_eq!(decode(Font::Icon, COLON_2X8).unwrap().columns(), &[0x36, 0x36]);
    assert_eq!(decode(Font::Icon, COLON_6X8).unwrap().width(), 6);
    assert_eq!(decode(Font::Icon, DOT_1X8).unwrap().columns(), &[0x80]);
    assert_eq!(decode(Font::Icon, DOT_1X7).unwrap().columns(), &[0x40]);

    // icons are addressed by record index; the clock digits in between are not icons
    assert_eq!(
        decode(Font::Icon, 160),
        Err(GlyphError::UnsupportedCode {
            font: Font::Icon,
            code: 160
        })
    );
}

#[test]
fn symbol_font_decorations() {
    let heart = decode(Font::Symbol, 3).unwrap();
    assert_eq!(heart.columns(), &[0x1c, 0x3e, 0x7c, 0x3e, 0x1c]);

    let empty = decode(Font::Symbol, 0).unwrap();
    assert_eq!(empty.width(), 0);
    assert!(empty.is_blank());

    assert_eq!(
        decode(Font::Symbol, glyphtable::font::ARROW_UP).unwrap().columns(),
        &[0x08, 0x04, 0x7e, 0x04, 0x08]
    );
}

#[test]
fn errors_read_well() {
    let err = decode(Font::Ascii, 1).unwrap_err();
    assert_eq!(err.to_string(), "Ascii has no glyph for code 1");

    let err = CHARSET.record(RECORD_COUNT).unwrap_err();
    assert_eq!(
        err.to_string(),
        "record 193 is outside the glyph table (193 records)"
    );
}

#[test]
fn shared_between_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| decode(Font::Ascii, 'A' as u32).unwrap().columns()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), &[0x7e, 0x11, 0x11, 0x7e]);
    }
}
