//! Three-row block font for the amount readout.
//!
//! `BigDigitMeasure` and `big_lines` share `glyph()`, so the width the
//! amount field is sized to is exactly the width that gets drawn.

use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

use crate::core::width::TextMeasure;

pub const GLYPH_HEIGHT: u16 = 3;
const GAP: &str = " ";

/// Rows of one glyph. Characters without a glyph are drawn as themselves on the middle row.
fn glyph(c: char) -> [String; 3] {
    let rows: [&str; 3] = match c {
        '0' => ["█▀█", "█ █", "▀▀▀"],
        '1' => ["▀█ ", " █ ", "▀▀▀"],
        '2' => ["▀▀█", "█▀▀", "▀▀▀"],
        '3' => ["▀▀█", " ▀█", "▀▀▀"],
        '4' => ["█ █", "▀▀█", "  ▀"],
        '5' => ["█▀▀", "▀▀█", "▀▀▀"],
        '6' => ["█▀▀", "█▀█", "▀▀▀"],
        '7' => ["▀▀█", "  █", "  ▀"],
        '8' => ["█▀█", "█▀█", "▀▀▀"],
        '9' => ["█▀█", "▀▀█", "▀▀▀"],
        '.' => [" ", " ", "▀"],
        '-' => ["  ", "▀▀", "  "],
        '+' => ["   ", "▀█▀", " ▀ "],
        'e' | 'E' => ["█▀▀", "█▀▀", "▀▀▀"],
        other => {
            let s = other.to_string();
            let pad = " ".repeat(s.width());
            return [pad.clone(), s, pad];
        }
    };
    rows.map(str::to_string)
}

/// The three rows of `text` in the block font.
pub fn big_lines(text: &str) -> [String; 3] {
    let mut rows: [String; 3] = Default::default();
    for (i, c) in text.chars().enumerate() {
        let g = glyph(c);
        for (row, part) in rows.iter_mut().zip(g) {
            if i > 0 {
                row.push_str(GAP);
            }
            row.push_str(&part);
        }
    }
    rows
}

pub fn big_text(text: &str) -> Vec<Line<'static>> {
    big_lines(text).into_iter().map(Line::from).collect()
}

/// Width of `text` in the block font, in cells.
#[derive(Debug, Default, Clone, Copy)]
pub struct BigDigitMeasure;

impl TextMeasure for BigDigitMeasure {
    fn measure(&self, text: &str) -> u16 {
        let widest = big_lines(text).iter().map(|row| row.width()).max().unwrap_or(0);
        u16::try_from(widest).unwrap_or(u16::MAX)
    }
}
