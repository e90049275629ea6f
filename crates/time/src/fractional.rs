//! Fractional-second quantization
//!
//! TIME and DATETIME carry their sub-day part in ticks of 1/300 second.
//! A tick is `1_000_000 / 300 = 3333.33...` microseconds, so conversions are
//! done on the exact ratio and rounded half away from zero.
//!
//! Rounding can push the last 1.67 ms of a day up to a full day of ticks.
//! [`micros_to_day_fractional_seconds`] keeps such values on the last tick.

/// Ticks per second of the TIME and DATETIME wire types
pub const FRACTIONAL_SECONDS_PER_SECOND: i64 = 300;

/// Microseconds per second
pub const MICROSECONDS_PER_SECOND: i64 = 1_000_000;

/// Convert microseconds to 1/300 second ticks, rounded
pub fn micros_to_fractional_seconds(micros: i64) -> i64 {
    scale_rounded(micros, FRACTIONAL_SECONDS_PER_SECOND, MICROSECONDS_PER_SECOND)
}

/// Ticks in one day
pub const FRACTIONAL_SECONDS_PER_DAY: i64 = 86_400 * FRACTIONAL_SECONDS_PER_SECOND;

/// Convert a sub-day microsecond count to ticks, rounded
///
/// The result stays strictly within one day: magnitudes that round up to
/// [`FRACTIONAL_SECONDS_PER_DAY`] are held at the last tick of the day.
pub fn micros_to_day_fractional_seconds(micros: i64) -> i64 {
    let last = FRACTIONAL_SECONDS_PER_DAY - 1;
    micros_to_fractional_seconds(micros).clamp(-last, last)
}

/// Convert 1/300 second ticks to microseconds, rounded
pub fn fractional_seconds_to_micros(ticks: i64) -> i64 {
    scale_rounded(ticks, MICROSECONDS_PER_SECOND, FRACTIONAL_SECONDS_PER_SECOND)
}

fn scale_rounded(value: i64, numerator: i64, denominator: i64) -> i64 {
    // i128 keeps multi-millennium microsecond counts from overflowing.
    let scaled = i128::from(value) * i128::from(numerator);
    let denominator = i128::from(denominator);
    let half = denominator / 2;
    let rounded = if scaled >= 0 {
        (scaled + half) / denominator
    } else {
        (scaled - half) / denominator
    };
    rounded as i64
}
