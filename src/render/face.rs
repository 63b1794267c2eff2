//! Pre-rendered analog clock face.
//!
//! Tick marks and hour numbers never move, so they are drawn once onto a
//! scratch canvas and kept as a [`Snapshot`]. Each frame starts by blitting
//! that snapshot, which also wipes the previous frame's hands.

use tracing::debug;

use crate::render::analog::draw_face;
use crate::render::canvas::{Canvas, Point, Snapshot};
use crate::render::theme::Theme;

/// The static background of the analog clock.
#[derive(Debug, Clone)]
pub struct ClockFace {
    snapshot: Snapshot,
}

impl ClockFace {
    /// Draw the face on a `width` x `height` scratch canvas centred on
    /// `center`, then capture the whole canvas.
    pub fn build(width: u16, height: u16, center: Point, radius: i32, theme: &Theme) -> Self {
        let mut scratch = Canvas::new(width, height);
        draw_face(&mut scratch, center, radius, theme);

        debug!(width, height, radius, "built analog clock face");

        Self {
            snapshot: scratch.snapshot_all(),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Blit the face onto `canvas` at `origin`.
    pub fn render(&self, canvas: &mut Canvas, origin: Point) {
        canvas.blit(&self.snapshot, origin);
    }
}
