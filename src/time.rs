//! Wall-clock time acquisition.
//!
//! The frame loop reads the time through the [`TimeSource`] trait so the
//! composer can be driven by a fixed time in tests.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, TimeZone, Timelike};

use crate::error::ClockError;

/// Decomposed local time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    /// Hour, 0-23
    pub hour: u8,
    /// Minute, 0-59
    pub minute: u8,
    /// Second, 0-59
    pub second: u8,
}

impl WallTime {
    /// Create a time of day, rejecting out-of-range components.
    pub fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self {
            hour,
            minute,
            second,
        })
    }

    /// Build from any chrono value carrying a time of day.
    pub fn from_timelike<T: Timelike>(time: &T) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        }
    }

    /// Whether the time falls in the afternoon half of the day.
    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }

    /// Hour on a 12-hour dial (1-12).
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }
}

/// Something that can report the current local time.
pub trait TimeSource {
    /// Read the current local time.
    fn now(&self) -> Result<WallTime, ClockError>;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Result<WallTime, ClockError> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| ClockError::ClockUnavailable)?;
        let secs =
            i64::try_from(since_epoch.as_secs()).map_err(|_| ClockError::ClockUnavailable)?;

        let local = Local
            .timestamp_opt(secs, since_epoch.subsec_nanos())
            .single()
            .ok_or(ClockError::ClockUnavailable)?;

        Ok(WallTime::from_timelike(&local))
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub WallTime);

impl TimeSource for FixedClock {
    fn now(&self) -> Result<WallTime, ClockError> {
        Ok(self.0)
    }
}
