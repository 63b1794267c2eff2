//! Digital clock layout.
//!
//! The time is formatted as `HH:MM[:SS][ AM|PM]` and every character of
//! that string gets a glyph cell, left to right, with one blank column
//! between cells.

use crate::config::ClockConfig;
use crate::render::canvas::{Canvas, Point};
use crate::render::glyph::{GlyphKind, GLYPH_HEIGHT, GLYPH_WIDTH};
use crate::render::theme::Theme;
use crate::time::WallTime;

/// Blank columns between glyph cells.
pub const GLYPH_SPACING: usize = 1;

/// Horizontal distance from one glyph cell to the next.
pub const CELL_ADVANCE: usize = GLYPH_WIDTH + GLYPH_SPACING;

/// Rows needed by the digital clock.
pub const DIGITAL_HEIGHT: u16 = GLYPH_HEIGHT as u16;

/// Longest formatted time, `HH:MM:SS PM`.
pub const MAX_TIME_LEN: usize = 11;

/// Length of the formatted time for `config`.
pub fn formatted_len(config: &ClockConfig) -> usize {
    let mut len = "HH:MM".len();
    if !config.hours_minutes_only {
        len += ":SS".len();
    }
    if config.use_12_hour {
        len += " AM".len();
    }
    len
}

/// Columns needed by the digital clock for `config`.
///
/// `n` cells of [`GLYPH_WIDTH`] columns, `n + 1` spacings, minus one.
pub fn digital_width(config: &ClockConfig) -> u16 {
    let glyphs = formatted_len(config);
    let width = glyphs * GLYPH_WIDTH + (glyphs + 1) * GLYPH_SPACING - 1;
    width as u16
}

/// Format `time` for display according to `config`.
pub fn format_time(time: &WallTime, config: &ClockConfig) -> String {
    let mut text = String::with_capacity(MAX_TIME_LEN);

    let hour = if config.use_12_hour {
        time.hour12()
    } else {
        time.hour
    };
    text.push_str(&format!("{:02}:{:02}", hour, time.minute));

    if !config.hours_minutes_only {
        text.push_str(&format!(":{:02}", time.second));
    }

    if config.use_12_hour {
        text.push_str(if time.is_pm() { " PM" } else { " AM" });
    }

    text
}

/// Cell origin and glyph for every character of `text`.
pub fn layout(text: &str, origin: Point) -> Vec<(Point, GlyphKind)> {
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let x = origin.x + (i * CELL_ADVANCE) as i32;
            (Point::new(x, origin.y), GlyphKind::classify(ch))
        })
        .collect()
}

/// Draw `text` as glyphs with the first cell's top-left corner at `origin`.
///
/// Characters without a glyph leave their cell untouched.
pub fn draw_time(canvas: &mut Canvas, origin: Point, text: &str, theme: &Theme) {
    for (pos, kind) in layout(text, origin) {
        let Some(glyph) = kind.glyph() else {
            continue;
        };
        let style = match kind {
            GlyphKind::Colon => theme.colon,
            _ => theme.digit,
        };

        for (row, line) in glyph.iter().enumerate() {
            canvas.set_cursor(Point::new(pos.x, pos.y + row as i32));
            canvas.print(line, style);
        }
    }
}
