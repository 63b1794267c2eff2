//! Clock configuration.
//!
//! Fixed once at startup from the command line and never mutated.

use ratatui::layout::Size;

use crate::cli::Cli;
use crate::render::analog::{ANALOG_HEIGHT, ANALOG_WIDTH};
use crate::render::digital::{digital_width, DIGITAL_HEIGHT};

/// Which clock to draw and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockConfig {
    /// Draw glyphs instead of a face with hands
    pub is_digital: bool,
    /// 12-hour time with AM/PM
    pub use_12_hour: bool,
    /// Hide seconds (no second hand, no `:SS`)
    pub hours_minutes_only: bool,
}

impl ClockConfig {
    /// Columns the configured clock occupies.
    pub fn width(&self) -> u16 {
        if self.is_digital {
            digital_width(self)
        } else {
            ANALOG_WIDTH
        }
    }

    /// Rows the configured clock occupies.
    pub fn height(&self) -> u16 {
        if self.is_digital {
            DIGITAL_HEIGHT
        } else {
            ANALOG_HEIGHT
        }
    }

    /// Minimum terminal size for this configuration.
    pub fn required_size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

impl From<&Cli> for ClockConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            is_digital: cli.digital,
            use_12_hour: cli.twelve_hour,
            hours_minutes_only: cli.hours_minutes_only,
        }
    }
}
