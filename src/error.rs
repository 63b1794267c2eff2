//! Clock errors.
//!
//! Every failure is fatal: the clock has no degraded mode, so callers
//! restore the terminal and exit once one of these surfaces.

/// Errors that can occur while starting or running the clock.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    #[error("Cannot initialize graphics. Possibly out of memory. ({source})")]
    Initialization {
        #[source]
        source: std::io::Error,
    },

    #[error(
        "The terminal window is too small. The minimum size is {required_cols} columns and {required_rows} lines."
    )]
    TerminalTooSmall {
        required_cols: u16,
        required_rows: u16,
        actual_cols: u16,
        actual_rows: u16,
    },

    #[error("Cannot retrieve current local time.")]
    ClockUnavailable,

    #[error("Failed to draw to the terminal: {source}")]
    Display {
        #[source]
        source: std::io::Error,
    },
}

impl ClockError {
    /// Wrap an I/O failure that happened while acquiring drawing surfaces.
    pub fn initialization(source: std::io::Error) -> Self {
        Self::Initialization { source }
    }

    /// Wrap an I/O failure that happened while flushing a frame.
    pub fn display(source: std::io::Error) -> Self {
        Self::Display { source }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
