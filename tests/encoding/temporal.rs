//! DATE, TIME, SHORTDATE, DATETIME, BIGDATETIMEN and BIGTIMEN

use crate::common::*;
use asewire::time::{EPOCH_1900_DAYS, FRACTIONAL_SECONDS_PER_DAY, FRACTIONAL_SECONDS_PER_SECOND};
use asewire::{encode, DataType, Endian, Error, LogicalValue};

#[test]
fn date_day_after_epoch_big_endian() {
    let bytes = encode(DataType::Date, Endian::Big, &date(1900, 1, 2)).unwrap();
    assert_eq!(bytes, vec![0x00, 0x00, 0x00, 0x01]);
}

#[test]
fn date_counts_calendar_days() {
    let day = timestamp(2024, 2, 29, 18, 0, 0, 0);
    let expected = (day.date() - epoch_1900()).num_days() as u32;
    for endian in BOTH_ORDERS {
        for data_type in [DataType::Date, DataType::DateN] {
            let bytes = encode(data_type, endian, &day.into()).unwrap();
            assert_eq!(read_u32(&bytes, endian), expected);
        }
    }
}

#[test]
fn date_before_epoch_wraps() {
    let bytes = encode(DataType::Date, Endian::Little, &date(1899, 12, 31)).unwrap();
    assert_eq!(read_u32(&bytes, Endian::Little), u32::MAX);
}

#[test]
fn time_counts_ticks_since_midnight() {
    let noon = timestamp(1999, 12, 31, 12, 0, 0, 500_000);
    let expected = (12 * 3600) * FRACTIONAL_SECONDS_PER_SECOND + 150;
    for endian in BOTH_ORDERS {
        let bytes = encode(DataType::TimeN, endian, &noon.into()).unwrap();
        assert_eq!(read_u32(&bytes, endian) as i64, expected);
    }
}

#[test]
fn time_ignores_the_date() {
    let a = encode(DataType::Time, Endian::Little, &timestamp(1900, 1, 1, 8, 15, 0, 0).into());
    let b = encode(DataType::Time, Endian::Little, &timestamp(2077, 7, 4, 8, 15, 0, 0).into());
    assert_eq!(a.unwrap(), b.unwrap());
}

#[test]
fn short_date_is_little_endian_days_and_minutes() {
    let value: LogicalValue = timestamp(1900, 3, 1, 23, 59, 59, 999_999).into();
    // January (31) + February 1900 (28, not a leap year)
    for endian in BOTH_ORDERS {
        let bytes = encode(DataType::ShortDate, endian, &value).unwrap();
        assert_eq!(read_u16(&bytes[..2], Endian::Little), 59);
        assert_eq!(read_u16(&bytes[2..], Endian::Little), 23 * 60 + 59);
    }
}

#[test]
fn short_date_big_endian_request_still_little_endian() {
    let bytes = encode(DataType::ShortDate, Endian::Big, &date(1900, 1, 2)).unwrap();
    assert_eq!(read_u16(&bytes[..2], Endian::Little), 1);
    assert_ne!(read_u16(&bytes[..2], Endian::Big), 1);
}

#[test]
fn date_time_is_little_endian_days_and_ticks() {
    let value: LogicalValue = timestamp(1900, 1, 11, 0, 0, 2, 0).into();
    let bytes = encode(DataType::DateTime, Endian::Big, &value).unwrap();
    assert_eq!(bytes.len(), 8);
    assert_eq!(read_u32(&bytes[..4], Endian::Little), 10);
    assert_eq!(read_u32(&bytes[4..], Endian::Little), 600);
    assert_ne!(read_u32(&bytes[..4], Endian::Big), 10);
}

#[test]
fn date_time_rounds_to_nearest_tick() {
    // 10 ms = 3 ticks, 5 ms = 1.5 ticks rounds up to 2
    let bytes = encode(
        DataType::DateTime,
        Endian::Little,
        &timestamp(2000, 1, 1, 0, 0, 0, 5_000).into(),
    )
    .unwrap();
    assert_eq!(read_u32(&bytes[4..], Endian::Little), 2);

    let bytes = encode(
        DataType::DateTime,
        Endian::Little,
        &timestamp(2000, 1, 1, 0, 0, 0, 10_000).into(),
    )
    .unwrap();
    assert_eq!(read_u32(&bytes[4..], Endian::Little), 3);
}

#[test]
fn big_date_time_counts_micros_from_year_zero() {
    let value: LogicalValue = timestamp(1900, 1, 2, 0, 0, 0, 42).into();
    let expected = (EPOCH_1900_DAYS as u64 + 1) * 86_400_000_000 + 42;
    for endian in BOTH_ORDERS {
        let bytes = encode(DataType::BigDateTimeN, endian, &value).unwrap();
        assert_eq!(read_u64(&bytes, Endian::Little), expected);
    }
}

#[test]
fn big_time_counts_micros_since_midnight() {
    let value: LogicalValue = timestamp(2012, 6, 30, 23, 59, 59, 999_999).into();
    for endian in BOTH_ORDERS {
        let bytes = encode(DataType::BigTimeN, endian, &value).unwrap();
        assert_eq!(read_u64(&bytes, Endian::Little), 86_399_999_999);
    }
}

#[test]
fn temporal_types_require_timestamp() {
    for data_type in [
        DataType::Date,
        DataType::DateN,
        DataType::Time,
        DataType::TimeN,
        DataType::ShortDate,
        DataType::DateTime,
        DataType::BigDateTimeN,
        DataType::BigTimeN,
    ] {
        let err = encode(data_type, Endian::Little, &"2024-01-01".into()).unwrap_err();
        assert!(
            matches!(
                err,
                Error::TypeMismatch {
                    expected: "timestamp",
                    received: "text",
                    ..
                }
            ),
            "{data_type} accepted text"
        );
    }
}

#[test]
fn last_microsecond_of_day_stays_on_same_day() {
    let value: LogicalValue = timestamp(1900, 1, 1, 23, 59, 59, 999_999).into();
    let last_tick = (FRACTIONAL_SECONDS_PER_DAY - 1) as u32;

    let bytes = encode(DataType::DateTime, Endian::Little, &value).unwrap();
    assert_eq!(read_u32(&bytes[..4], Endian::Little), 0);
    assert_eq!(read_u32(&bytes[4..], Endian::Little), last_tick);

    for endian in BOTH_ORDERS {
        for data_type in [DataType::Time, DataType::TimeN] {
            let bytes = encode(data_type, endian, &value).unwrap();
            assert_eq!(read_u32(&bytes, endian), last_tick);
        }
    }
}
