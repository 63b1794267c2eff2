//! Terminal display mode.
//!
//! [`TerminalGuard`] switches to the alternate screen and hides the cursor,
//! and puts both back when restored or dropped, whichever happens first.

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;

/// Holds the terminal in full-screen clock mode.
pub struct TerminalGuard<W: Write> {
    out: W,
    active: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enter the alternate screen and hide the cursor.
    pub fn enter(mut out: W) -> io::Result<Self> {
        execute!(out, EnterAlternateScreen, Hide)?;
        debug!("entered alternate screen");
        Ok(Self { out, active: true })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Leave the alternate screen and show the cursor. Safe to call twice.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, LeaveAlternateScreen, Show)?;
        debug!("restored terminal");
        Ok(())
    }

    /// The wrapped writer.
    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
