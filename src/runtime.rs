//! Clock runtime and frame composer.
//!
//! [`ClockRuntime`] owns everything that lives for the whole run: the
//! configuration, the terminal, the frame canvas and (in analog mode) the
//! cached face. It is generic over the `ratatui` backend and the time source
//! so frames can be composed against a `TestBackend` and a fixed clock.

use std::thread;
use std::time::{Duration, Instant};

use ratatui::{backend::Backend, Terminal};
use tracing::{debug, info, warn};

use crate::cancel::CancelToken;
use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::render::analog::{draw_hands, FACE_RADIUS};
use crate::render::digital::{draw_time, format_time};
use crate::render::{current_theme, Canvas, ClockFace, Point, Theme};
use crate::time::{TimeSource, WallTime};

/// Time between frames.
pub const FRAME_INTERVAL: Duration = Duration::from_secs(1);

/// How often the wait between frames checks for cancellation.
pub const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Mode-specific state fixed at startup.
#[derive(Debug, Clone)]
enum Layout {
    /// Face cached, hands drawn from the terminal centre.
    Analog { face: ClockFace, center: Point },
    /// Glyph string drawn from a pre-centred top-left corner.
    Digital { origin: Point },
}

/// Explicit context for a running clock.
pub struct ClockRuntime<B: Backend, T: TimeSource> {
    config: ClockConfig,
    theme: Theme,
    terminal: Terminal<B>,
    canvas: Canvas,
    layout: Layout,
    clock: T,
}

impl<B: Backend, T: TimeSource> ClockRuntime<B, T> {
    /// Size everything for the terminal behind `backend`.
    ///
    /// Fails with [`ClockError::TerminalTooSmall`] before anything is drawn
    /// when the terminal cannot fit the configured clock.
    pub fn new(config: ClockConfig, backend: B, clock: T) -> Result<Self, ClockError> {
        let terminal = Terminal::new(backend).map_err(ClockError::initialization)?;
        let size = terminal.size().map_err(ClockError::initialization)?;
        let required = config.required_size();

        if size.width < required.width || size.height < required.height {
            warn!(
                cols = size.width,
                rows = size.height,
                required_cols = required.width,
                required_rows = required.height,
                "terminal too small"
            );
            return Err(ClockError::TerminalTooSmall {
                required_cols: required.width,
                required_rows: required.height,
                actual_cols: size.width,
                actual_rows: size.height,
            });
        }

        let theme = current_theme();
        let center = Point::new(i32::from(size.width / 2), i32::from(size.height / 2));

        let layout = if config.is_digital {
            let origin = Point::new(
                center.x - i32::from(config.width() / 2),
                center.y - i32::from(config.height() / 2),
            );
            Layout::Digital { origin }
        } else {
            let face = ClockFace::build(size.width, size.height, center, FACE_RADIUS, &theme);
            Layout::Analog { face, center }
        };

        info!(
            digital = config.is_digital,
            twelve_hour = config.use_12_hour,
            hours_minutes_only = config.hours_minutes_only,
            cols = size.width,
            rows = size.height,
            "clock initialized"
        );

        Ok(Self {
            config,
            theme,
            terminal,
            canvas: Canvas::new(size.width, size.height),
            layout,
            clock,
        })
    }

    /// The most recently composed frame.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }

    /// Where the clock is anchored: the face centre in analog mode, the
    /// first glyph's top-left corner in digital mode.
    pub fn anchor(&self) -> Point {
        match &self.layout {
            Layout::Analog { center, .. } => *center,
            Layout::Digital { origin } => *origin,
        }
    }

    /// Draw one complete frame for `time` onto the frame canvas.
    pub fn compose_frame(&mut self, time: &WallTime) {
        match &self.layout {
            Layout::Analog { face, center } => {
                face.render(&mut self.canvas, Point::new(0, 0));
                draw_hands(
                    &mut self.canvas,
                    *center,
                    time,
                    self.config.hours_minutes_only,
                    &self.theme,
                );
            }
            Layout::Digital { origin } => {
                let text = format_time(time, &self.config);
                self.canvas.clear();
                draw_time(&mut self.canvas, *origin, &text, &self.theme);
            }
        }
    }

    /// Push the frame canvas to the terminal.
    pub fn flush(&mut self) -> Result<(), ClockError> {
        let canvas = &self.canvas;
        self.terminal
            .draw(|frame| canvas.render_into(frame.buffer_mut()))
            .map_err(ClockError::display)?;
        Ok(())
    }

    /// Read the time, compose a frame and display it.
    pub fn tick(&mut self) -> Result<WallTime, ClockError> {
        let time = self.clock.now()?;
        debug!(
            hour = time.hour,
            minute = time.minute,
            second = time.second,
            "composing frame"
        );
        self.compose_frame(&time);
        self.flush()?;
        Ok(time)
    }

    /// Draw a frame every second until `cancel` is set.
    pub fn run(&mut self, cancel: &CancelToken) -> Result<(), ClockError> {
        self.terminal.clear().map_err(ClockError::display)?;

        while !cancel.is_cancelled() {
            self.tick()?;
            wait_for_next_frame(cancel, FRAME_INTERVAL);
        }

        info!("clock interrupted, shutting down");
        Ok(())
    }
}

/// Sleep for `interval`, waking early once `cancel` is set.
///
/// Returns `true` if the wait was cut short.
pub fn wait_for_next_frame(cancel: &CancelToken, interval: Duration) -> bool {
    let deadline = Instant::now() + interval;

    loop {
        if cancel.is_cancelled() {
            return true;
        }
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        thread::sleep((deadline - now).min(CANCEL_POLL_INTERVAL));
    }
}
