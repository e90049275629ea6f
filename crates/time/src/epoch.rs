//! Epoch arithmetic
//!
//! ## Epochs
//!
//! - The datetime epoch is 0000-01-01 00:00 in the proleptic Gregorian
//!   calendar. BIGDATETIMEN counts microseconds from here.
//! - The 1900 epoch is 1900-01-01 00:00. DATE, SHORTDATE and DATETIME count
//!   days from here.
//!
//! Year 0 is a leap year, so 0000-01-01 lies 366 days before 0001-01-01 and
//! 693 961 days before 1900-01-01.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::duration::{AseDuration, DAY, SECOND};

/// Days from 0000-01-01 to 0001-01-01
const DAYS_BEFORE_COMMON_ERA: i64 = 366;

/// Days from the datetime epoch (0000-01-01) to 1900-01-01
pub const EPOCH_1900_DAYS: i64 = 693_961;

/// Duration from the datetime epoch (0000-01-01) to 1900-01-01
pub const EPOCH_1900: AseDuration = AseDuration::from_days(EPOCH_1900_DAYS);

/// Duration between the datetime epoch (0000-01-01) and `ts`
pub fn duration_from_date_time(ts: &NaiveDateTime) -> AseDuration {
    // num_days_from_ce() is 1 for 0001-01-01
    let days = i64::from(ts.date().num_days_from_ce()) - 1 + DAYS_BEFORE_COMMON_ERA;
    AseDuration::from_micros(days * DAY.microseconds()) + duration_from_time(ts)
}

/// Duration between midnight and `ts`
pub fn duration_from_time(ts: &NaiveDateTime) -> AseDuration {
    let time = ts.time();
    let micros = i64::from(time.num_seconds_from_midnight()) * SECOND.microseconds()
        + i64::from(time.nanosecond() / 1_000);
    AseDuration::from_micros(micros)
}

/// Duration between 1900-01-01 and `ts`
///
/// Negative for timestamps before 1900.
pub fn duration_since_epoch_1900(ts: &NaiveDateTime) -> AseDuration {
    duration_from_date_time(ts) - EPOCH_1900
}
