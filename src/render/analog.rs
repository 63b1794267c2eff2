//! Analog clock geometry.
//!
//! Angles are in degrees, measured clockwise from the positive x axis (screen
//! y grows downwards). Horizontal distances are stretched because terminal
//! cells are roughly twice as tall as they are wide.

use crate::render::canvas::{Canvas, Point, StyledChar};
use crate::render::theme::Theme;
use crate::time::WallTime;

/// Face radius in rows.
pub const FACE_RADIUS: i32 = 20;

/// Horizontal stretch applied to the face.
pub const X_RATIO: f64 = 2.0;

/// Horizontal stretch applied to the hands.
pub const HAND_X_RATIO: f64 = 1.8;

pub const SECOND_HAND_LEN: i32 = 18;
pub const MINUTE_HAND_LEN: i32 = 15;
pub const HOUR_HAND_LEN: i32 = 18;

/// Columns needed by the analog clock.
pub const ANALOG_WIDTH: u16 = (FACE_RADIUS as f64 * 2.0 * X_RATIO) as u16 + 4;

/// Rows needed by the analog clock.
pub const ANALOG_HEIGHT: u16 = FACE_RADIUS as u16 * 2 + 1;

/// Number of tick positions around the face.
pub const TICK_COUNT: u32 = 60;

// Rotates tick 0 so that tick 59 (the "12") sits at the top.
const TICK_OFFSET: u32 = 46;
// Rotates hand value 0 to the top.
const HAND_OFFSET: f64 = 45.0;

/// Character used for minute ticks.
pub const MINUTE_MARK: char = '*';

/// A position on the face rim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickMark {
    pub pos: Point,
    /// Hour number (1-12) for every fifth tick, `None` for minute ticks.
    pub hour: Option<u8>,
}

impl TickMark {
    pub fn is_hour_mark(&self) -> bool {
        self.hour.is_some()
    }
}

/// Point at `angle_deg` and `length` from `center`, with the horizontal
/// component stretched by `x_ratio`.
pub fn polar_point(center: Point, angle_deg: f64, length: f64, x_ratio: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(
        center.x + (rad.cos() * length * x_ratio).round() as i32,
        center.y + (rad.sin() * length).round() as i32,
    )
}

/// All 60 rim positions, hour ticks flagged with their number.
pub fn tick_marks(center: Point, radius: i32) -> Vec<TickMark> {
    (0..TICK_COUNT)
        .map(|i| {
            let angle = f64::from((i + TICK_OFFSET) * 6);
            let pos = polar_point(center, angle, f64::from(radius), X_RATIO);
            let hour = ((i + 1) % 5 == 0).then(|| ((i + 1) / 5) as u8);
            TickMark { pos, hour }
        })
        .collect()
}

/// End of a hand of `length` pointing at `angle_deg`.
pub fn hand_endpoint(center: Point, angle_deg: f64, length: i32) -> Point {
    polar_point(center, angle_deg, f64::from(length), HAND_X_RATIO)
}

/// The three clock hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Second,
    Minute,
    Hour,
}

impl Hand {
    pub fn length(self) -> i32 {
        match self {
            Hand::Second => SECOND_HAND_LEN,
            Hand::Minute => MINUTE_HAND_LEN,
            Hand::Hour => HOUR_HAND_LEN,
        }
    }

    /// Angle of this hand at `time`, in degrees (not reduced modulo 360).
    pub fn angle(self, time: &WallTime) -> f64 {
        match self {
            Hand::Second => (f64::from(time.second) + HAND_OFFSET) * 6.0,
            Hand::Minute => (f64::from(time.minute) + HAND_OFFSET) * 6.0,
            Hand::Hour => {
                let hours = f64::from(time.hour) + f64::from(time.minute) / 60.0;
                (hours + HAND_OFFSET) * 30.0
            }
        }
    }

    pub fn endpoint(self, center: Point, time: &WallTime) -> Point {
        hand_endpoint(center, self.angle(time), self.length())
    }

    /// The character the hand is drawn with.
    pub fn styled_char(self, theme: &Theme) -> StyledChar {
        match self {
            Hand::Second => StyledChar::new('s', theme.second_hand),
            Hand::Minute => StyledChar::new('m', theme.minute_hand),
            Hand::Hour => StyledChar::new('h', theme.hour_hand),
        }
    }
}

/// Hands to draw, in drawing order.
pub fn visible_hands(hours_minutes_only: bool) -> &'static [Hand] {
    if hours_minutes_only {
        &[Hand::Minute, Hand::Hour]
    } else {
        &[Hand::Minute, Hand::Hour, Hand::Second]
    }
}

/// Draw the tick marks and hour numbers of a face centred on `center`.
pub fn draw_face(canvas: &mut Canvas, center: Point, radius: i32, theme: &Theme) {
    let mark = StyledChar::new(MINUTE_MARK, theme.minute_mark);

    for tick in tick_marks(center, radius) {
        canvas.set_cursor(tick.pos);
        match tick.hour {
            Some(hour) => canvas.print(&hour.to_string(), theme.hour_label),
            None => canvas.put_char(mark),
        }
    }
}

/// Draw the hands for `time` as lines from `center`.
pub fn draw_hands(
    canvas: &mut Canvas,
    center: Point,
    time: &WallTime,
    hours_minutes_only: bool,
    theme: &Theme,
) {
    for &hand in visible_hands(hours_minutes_only) {
        canvas.draw_line(hand.styled_char(theme), center, hand.endpoint(center, time));
    }
}
