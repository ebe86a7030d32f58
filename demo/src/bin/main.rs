//! Renders every font in the table to the terminal.
//!
//! ```text
//! RUST_LOG=debug cargo run -p demo -- "Grüße"
//! ```

use anyhow::Context;
use glyphtable::display::{draw_clock, draw_glyph, draw_text, text_width, Canvas, TextStyle};
use glyphtable::font::{self, partial_column, HOURGLASS};
use glyphtable::{decode, Font, CHARSET};
use log::info;

const WIDTH: usize = 64;
const HEIGHT: usize = 8;

type Matrix = Canvas<WIDTH, HEIGHT>;

fn show(title: &str, canvas: &Matrix) {
    println!("{}\n{}", title, canvas);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    font::validate(&CHARSET).context("glyph table does not match its fonts")?;
    info!(
        "{} glyph records in {} bytes",
        CHARSET.record_count(),
        CHARSET.byte_len()
    );

    let style = TextStyle::new();
    let mut canvas = Matrix::new();

    let text = std::env::args().nth(1).unwrap_or_else(|| "Grüße €5".to_string());
    let width = text_width(&text, &style);
    if width > WIDTH {
        log::warn!("{:?} is {} columns wide, clipping at {}", text, width, WIDTH);
    }
    draw_text(&mut canvas, &text, (WIDTH.saturating_sub(width) / 2, 0), &style);
    show(&text, &canvas);

    for face in [
        Font::BoldDigit,
        Font::TALL_SERIF_DIGIT,
        Font::SmallDigit7Row,
        Font::Ascii,
    ] {
        canvas.clear();
        let width = draw_clock(&mut canvas, face, 12, 34, (0, 0), &style)?;
        info!("{} clock is {} columns wide", face.info().name, width);
        show(face.info().name, &canvas);
    }

    canvas.clear();
    let mut x = 0;
    for glyph in [
        decode(Font::Logo, 0)?,
        decode(Font::Spacer4, 0)?,
        decode(Font::Icon, HOURGLASS)?,
    ] {
        x += draw_glyph(&mut canvas, &glyph, (x, 0));
    }
    show("logo", &canvas);

    canvas.clear();
    for (x, eighths) in (1..=8).enumerate() {
        let code = partial_column(eighths).context("meter column out of range")?;
        draw_glyph(&mut canvas, &decode(Font::Accented, code)?, (x * 2, 0));
    }
    show("meter", &canvas);

    canvas.clear();
    let mut x = 0;
    for code in 1..=31 {
        let glyph = decode(Font::Symbol, code)?;
        if x + glyph.width() > WIDTH {
            break;
        }
        x += draw_glyph(&mut canvas, &glyph, (x, 0)) + 1;
    }
    show("symbols", &canvas);

    Ok(())
}
