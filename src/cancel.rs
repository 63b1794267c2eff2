//! Cooperative shutdown.
//!
//! Signal handlers only flip an atomic flag; the frame loop checks it and
//! unwinds normally so every resource is released by its owner.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGTERM};
use tracing::debug;

/// Shared "please stop" flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag on SIGINT or SIGTERM.
    ///
    /// A second signal while the flag is already set exits the process
    /// immediately with status 1, so a stuck loop can still be killed.
    pub fn register_signals(&self) -> io::Result<()> {
        for signal in [SIGINT, SIGTERM] {
            // Must be registered before the flag setter so the first signal
            // only sets the flag.
            signal_hook::flag::register_conditional_shutdown(
                signal,
                1,
                Arc::clone(&self.flag),
            )?;
            signal_hook::flag::register(signal, Arc::clone(&self.flag))?;
        }
        debug!("registered interrupt handlers");
        Ok(())
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
