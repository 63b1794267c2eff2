//! termclock - analog and digital clock for the terminal
//!
//! The library holds the whole clock engine: pure geometry and layout in
//! [`render`], the frame loop in [`runtime`], and the terminal plumbing the
//! binary wires together.

pub mod cancel;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod runtime;
pub mod terminal;
pub mod time;

pub use cancel::CancelToken;
pub use cli::Cli;
pub use config::ClockConfig;
pub use error::ClockError;
pub use runtime::ClockRuntime;
pub use terminal::TerminalGuard;
pub use time::{FixedClock, SystemClock, TimeSource, WallTime};
