//! Clock styles.
//!
//! Centralizes every color and attribute the clock draws with. The renderer
//! treats these as opaque values and hands them to the canvas unchanged.

use ratatui::style::{Color, Modifier, Style};

/// Styles for every element of both clock modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Minute tick marks on the analog face
    pub minute_mark: Style,
    /// Hour numbers on the analog face
    pub hour_label: Style,
    /// Second hand
    pub second_hand: Style,
    /// Minute hand
    pub minute_hand: Style,
    /// Hour hand
    pub hour_hand: Style,
    /// Digital colon separator
    pub colon: Style,
    /// Digital digits and AM/PM letters
    pub digit: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// The stock palette: blue ticks, green numbers, red/blue/green hands,
    /// yellow digital readout.
    pub fn classic() -> Self {
        Self {
            minute_mark: Style::default().fg(Color::Blue),
            hour_label: Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
            second_hand: Style::default().fg(Color::LightRed),
            minute_hand: Style::default().fg(Color::LightBlue),
            hour_hand: Style::default().fg(Color::LightGreen),
            colon: Style::default().fg(Color::Yellow),
            digit: Style::default().fg(Color::LightYellow),
        }
    }
}

/// Global theme instance.
pub fn current_theme() -> Theme {
    Theme::default()
}
