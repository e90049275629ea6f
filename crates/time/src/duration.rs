//! Microsecond-precision durations
//!
//! [`AseDuration`] is the common currency of the date/time encoders: every
//! timestamp is first turned into a duration since a fixed epoch (or since
//! midnight) and the wire fields are then carved out of it.
//!
//! Accessors truncate toward zero, like integer division.

use std::ops::{Add, Sub};

use crate::fractional::{micros_to_day_fractional_seconds, micros_to_fractional_seconds};

/// Signed duration in microseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AseDuration(i64);

/// One microsecond
pub const MICROSECOND: AseDuration = AseDuration(1);
/// One millisecond
pub const MILLISECOND: AseDuration = AseDuration(1_000);
/// One second
pub const SECOND: AseDuration = AseDuration(1_000_000);
/// One minute
pub const MINUTE: AseDuration = AseDuration(60 * SECOND.0);
/// One hour
pub const HOUR: AseDuration = AseDuration(60 * MINUTE.0);
/// One day
pub const DAY: AseDuration = AseDuration(24 * HOUR.0);

impl AseDuration {
    /// Create a duration from microseconds
    #[inline]
    pub const fn from_micros(micros: i64) -> Self {
        AseDuration(micros)
    }

    /// Create a duration from whole days
    #[inline]
    pub const fn from_days(days: i64) -> Self {
        AseDuration(days * DAY.0)
    }

    /// Total microseconds
    #[inline]
    pub const fn microseconds(&self) -> i64 {
        self.0
    }

    /// Whole minutes
    #[inline]
    pub const fn minutes(&self) -> i64 {
        self.0 / MINUTE.0
    }

    /// Whole days
    #[inline]
    pub const fn days(&self) -> i64 {
        self.0 / DAY.0
    }

    /// Part of the duration left after removing whole days
    #[inline]
    pub const fn sub_day(&self) -> AseDuration {
        AseDuration(self.0 - self.days() * DAY.0)
    }

    /// Total duration in 1/300 second ticks, rounded
    pub fn fractional_seconds(&self) -> i64 {
        micros_to_fractional_seconds(self.0)
    }

    /// Sub-day part in 1/300 second ticks, never reaching a full day
    pub fn sub_day_fractional_seconds(&self) -> i64 {
        micros_to_day_fractional_seconds(self.sub_day().0)
    }
}

impl Add for AseDuration {
    type Output = AseDuration;

    fn add(self, rhs: AseDuration) -> AseDuration {
        AseDuration(self.0 + rhs.0)
    }
}

impl Sub for AseDuration {
    type Output = AseDuration;

    fn sub(self, rhs: AseDuration) -> AseDuration {
        AseDuration(self.0 - rhs.0)
    }
}
