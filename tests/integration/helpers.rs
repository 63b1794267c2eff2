//! Shared helpers for integration tests

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ratatui::backend::{Backend, ClearType, TestBackend, WindowSize};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};
use termclock::render::Canvas;
use termclock::{ClockConfig, ClockError, ClockRuntime, FixedClock, WallTime};

/// Build a time, panicking on invalid components.
pub fn at(hour: u8, minute: u8, second: u8) -> WallTime {
    WallTime::new(hour, minute, second).expect("valid time of day")
}

/// Build a config from its three flags.
pub fn config(is_digital: bool, use_12_hour: bool, hours_minutes_only: bool) -> ClockConfig {
    ClockConfig {
        is_digital,
        use_12_hour,
        hours_minutes_only,
    }
}

/// A runtime drawing to an in-memory terminal of `cols` x `rows`.
pub fn test_runtime(
    config: ClockConfig,
    cols: u16,
    rows: u16,
    time: WallTime,
) -> Result<ClockRuntime<TestBackend, FixedClock>, ClockError> {
    ClockRuntime::new(config, TestBackend::new(cols, rows), FixedClock(time))
}

/// Every row of the canvas, untrimmed, between `|` bars.
pub fn framed_rows(canvas: &Canvas) -> String {
    let buffer = canvas.buffer();
    (0..canvas.height())
        .map(|y| {
            let row: String = (0..canvas.width())
                .filter_map(|x| buffer.cell((x, y)).map(|c| c.symbol().to_string()))
                .collect();
            format!("|{}|", row)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A `TestBackend` that counts how often anything is written to it.
///
/// The counter is shared so it can still be read after the backend has been
/// moved into (and dropped by) a runtime.
pub struct RecordingBackend {
    inner: TestBackend,
    writes: Arc<AtomicUsize>,
}

impl RecordingBackend {
    pub fn new(cols: u16, rows: u16) -> (Self, Arc<AtomicUsize>) {
        let writes = Arc::new(AtomicUsize::new(0));
        let backend = Self {
            inner: TestBackend::new(cols, rows),
            writes: Arc::clone(&writes),
        };
        (backend, writes)
    }

    fn record(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

impl Backend for RecordingBackend {
    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        self.record();
        self.inner.draw(content)
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.inner.hide_cursor()
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.inner.show_cursor()
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        self.inner.get_cursor_position()
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        self.inner.set_cursor_position(position)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.record();
        self.inner.clear()
    }

    fn clear_region(&mut self, clear_type: ClearType) -> io::Result<()> {
        self.record();
        self.inner.clear_region(clear_type)
    }

    fn size(&self) -> io::Result<Size> {
        self.inner.size()
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        self.inner.window_size()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
