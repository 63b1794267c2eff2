//! Digital clock glyphs.
//!
//! Every symbol is a 3x3 block of box-drawing characters. Only digits, the
//! colon and the letters needed for AM/PM have glyphs.

/// Rows in a glyph.
pub const GLYPH_HEIGHT: usize = 3;

/// Columns in a glyph.
pub const GLYPH_WIDTH: usize = 3;

/// One glyph: three rows of three cells each.
pub type Glyph = [&'static str; GLYPH_HEIGHT];

/// Glyphs for the digits 0-9, indexed by value.
pub const DIGITS: [Glyph; 10] = [
    ["┌─┐", "│ │", "└─┘"],
    [" ╶┐", "  │", "  ╵"],
    ["╶─┐", "┌─┘", "└─╴"],
    ["╶─┐", " ─┤", "╶─┘"],
    ["╷ ╷", "└─┤", "  ╵"],
    ["┌─╴", "└─┐", "╶─┘"],
    ["┌─╴", "├─┐", "└─┘"],
    ["╶─┐", "  │", "  ╵"],
    ["┌─┐", "├─┤", "└─┘"],
    ["┌─┐", "└─┤", "╶─┘"],
];

/// Glyph for the `:` separator.
pub const COLON: Glyph = [" ▅ ", "   ", " ▀ "];

/// Letters that have a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Letter {
    A,
    M,
    P,
}

impl Letter {
    pub fn glyph(self) -> Glyph {
        match self {
            Letter::A => ["┌─┐", "├─┤", "╵ ╵"],
            Letter::M => ["┌┬┐", "│╵│", "╵ ╵"],
            Letter::P => ["┌─┐", "├─┘", "╵  "],
        }
    }
}

/// What a character of a formatted time turns into on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphKind {
    Digit(u8),
    Colon,
    Letter(Letter),
    /// Nothing is drawn; the cell is still consumed.
    Unsupported,
}

impl GlyphKind {
    /// Classify a character. Letters match case-insensitively.
    pub fn classify(ch: char) -> Self {
        if let Some(digit) = ch.to_digit(10) {
            return GlyphKind::Digit(digit as u8);
        }

        match ch.to_ascii_uppercase() {
            ':' => GlyphKind::Colon,
            'A' => GlyphKind::Letter(Letter::A),
            'M' => GlyphKind::Letter(Letter::M),
            'P' => GlyphKind::Letter(Letter::P),
            _ => GlyphKind::Unsupported,
        }
    }

    /// The glyph to draw, if any.
    pub fn glyph(self) -> Option<Glyph> {
        match self {
            GlyphKind::Digit(d) => DIGITS.get(usize::from(d)).copied(),
            GlyphKind::Colon => Some(COLON),
            GlyphKind::Letter(letter) => Some(letter.glyph()),
            GlyphKind::Unsupported => None,
        }
    }
}
