//! Date and time arithmetic for ASE wire values
//!
//! Timestamps are wall-clock `chrono::NaiveDateTime` values. The encoders
//! turn them into microsecond durations since one of two epochs and carve
//! the wire fields out of those:
//! - `duration`: AseDuration and unit constants
//! - `epoch`: datetime epoch (0000-01-01) and 1900 epoch arithmetic
//! - `fractional`: 1/300 second tick quantization

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod duration;
pub mod epoch;
pub mod fractional;

pub use duration::{AseDuration, DAY, HOUR, MICROSECOND, MILLISECOND, MINUTE, SECOND};
pub use epoch::{
    duration_from_date_time, duration_from_time, duration_since_epoch_1900, EPOCH_1900,
    EPOCH_1900_DAYS,
};
pub use fractional::{
    fractional_seconds_to_micros, micros_to_day_fractional_seconds, micros_to_fractional_seconds,
    FRACTIONAL_SECONDS_PER_DAY, FRACTIONAL_SECONDS_PER_SECOND, MICROSECONDS_PER_SECOND,
};
