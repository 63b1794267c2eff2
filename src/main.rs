//! termclock binary entry point.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use ratatui::backend::CrosstermBackend;

use termclock::{
    CancelToken, Cli, ClockConfig, ClockError, ClockRuntime, SystemClock, TerminalGuard,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            let code = e
                .downcast_ref::<ClockError>()
                .map_or(1, ClockError::exit_code);
            ExitCode::from(code as u8)
        }
    }
}

/// Run the clock until interrupted.
///
/// The terminal is restored before this returns, on every path, so the
/// caller can print errors to a normal screen.
#[cfg(not(tarpaulin_include))]
fn run(cli: &Cli) -> Result<()> {
    let config = ClockConfig::from(cli);

    let cancel = CancelToken::new();
    cancel.register_signals()?;

    let mut guard = TerminalGuard::enter(io::stdout()).map_err(ClockError::initialization)?;

    let result = ClockRuntime::new(config, CrosstermBackend::new(io::stdout()), SystemClock)
        .and_then(|mut runtime| runtime.run(&cancel));

    let restored = guard.restore();
    finish(result, restored)
}

/// Combine the clock's outcome with the terminal restore outcome.
///
/// The clock's own error wins over a failed restore.
fn finish(result: Result<(), ClockError>, restored: io::Result<()>) -> Result<()> {
    result?;
    restored?;
    Ok(())
}
