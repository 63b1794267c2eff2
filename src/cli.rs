//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use clap::Parser;

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("TERMCLOCK_BUILD_DATE"),
    ")"
);

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TERMCLOCK_BUILD_DATE"),
    ")"
);

/// Analog and digital clock for the terminal.
///
/// Draws the current local time once per second until interrupted
/// with Ctrl+C.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "termclock", version, long_version = LONG_VERSION, about, long_about)]
pub struct Cli {
    /// Show digital clock
    #[arg(short = 'd', long)]
    pub digital: bool,

    /// Display only hours and minutes
    #[arg(long = "hm")]
    pub hours_minutes_only: bool,

    /// Use 12-hour time instead of 24
    #[arg(long = "12")]
    pub twelve_hour: bool,
}
