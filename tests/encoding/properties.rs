//! Layout invariants over arbitrary inputs

use crate::common::*;
use asewire::time::FRACTIONAL_SECONDS_PER_DAY;
use asewire::{encode, DataType, Decimal, Endian, Error, LogicalValue, MAX_PRECISION};
use chrono::{Duration, NaiveDateTime};
use proptest::prelude::*;

fn any_endian() -> impl Strategy<Value = Endian> {
    prop_oneof![Just(Endian::Little), Just(Endian::Big)]
}

/// Timestamps between 1900-01-01 and roughly 2079, with microseconds.
fn any_timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (0i64..65_000, 0i64..86_400_000_000).prop_map(|(days, micros)| {
        epoch_1900().and_hms_opt(0, 0, 0).unwrap()
            + Duration::days(days)
            + Duration::microseconds(micros)
    })
}

fn any_decimal() -> impl Strategy<Value = Decimal> {
    (1u8..=MAX_PRECISION).prop_flat_map(|precision| {
        let max = 10i128.pow(precision as u32) - 1;
        (-max..=max).prop_map(move |value| Decimal::from_unscaled(value, precision, 0).unwrap())
    })
}

proptest! {
    #[test]
    fn money_halves_reassemble(value in any::<i64>(), endian in any_endian()) {
        let dec = Decimal::from_unscaled(value as i128, MAX_PRECISION, 4).unwrap();
        let bytes = encode(DataType::Money, endian, &dec.into()).unwrap();
        prop_assert_eq!(bytes.len(), 8);

        let high = read_u32(&bytes[..4], endian) as u64;
        let low = read_u32(&bytes[4..], endian) as u64;
        prop_assert_eq!(((high << 32) | low) as i64, value);
    }

    #[test]
    fn short_money_is_low_half(value in any::<i64>(), endian in any_endian()) {
        let dec = Decimal::from_unscaled(value as i128, MAX_PRECISION, 4).unwrap();
        let bytes = encode(DataType::ShortMoney, endian, &dec.into()).unwrap();
        prop_assert_eq!(read_u32(&bytes, endian), value as u32);
    }

    #[test]
    fn decimal_layout(dec in any_decimal(), endian in any_endian()) {
        let bytes = encode(DataType::DecN, endian, &dec.into()).unwrap();
        prop_assert_eq!(bytes.len(), dec.byte_size());
        prop_assert_eq!(bytes[0], dec.is_negative() as u8);

        let magnitude = bytes[1..]
            .iter()
            .fold(0u128, |acc, &b| (acc << 8) | b as u128);
        prop_assert_eq!(magnitude, dec.unscaled().unsigned_abs());

        let other = match endian {
            Endian::Little => Endian::Big,
            Endian::Big => Endian::Little,
        };
        prop_assert_eq!(encode(DataType::NumN, other, &dec.into()).unwrap(), bytes);
    }

    #[test]
    fn date_counts_days_since_1900(ts in any_timestamp(), endian in any_endian()) {
        let bytes = encode(DataType::Date, endian, &ts.into()).unwrap();
        let expected = (ts.date() - epoch_1900()).num_days();
        prop_assert_eq!(read_u32(&bytes, endian) as i64, expected);
    }

    #[test]
    fn fixed_little_endian_types_ignore_request(ts in any_timestamp()) {
        let value: LogicalValue = ts.into();
        for data_type in [
            DataType::ShortDate,
            DataType::DateTime,
            DataType::BigDateTimeN,
            DataType::BigTimeN,
        ] {
            prop_assert_eq!(
                encode(data_type, Endian::Big, &value).unwrap(),
                encode(data_type, Endian::Little, &value).unwrap()
            );
        }
    }

    #[test]
    fn date_time_ticks_stay_within_day(ts in any_timestamp()) {
        let bytes = encode(DataType::DateTime, Endian::Little, &ts.into()).unwrap();
        let days = read_u32(&bytes[..4], Endian::Little) as i64;
        let ticks = read_u32(&bytes[4..], Endian::Little);

        prop_assert_eq!(days, (ts.date() - epoch_1900()).num_days());
        prop_assert!(i64::from(ticks) < FRACTIONAL_SECONDS_PER_DAY);
    }

    #[test]
    fn unitext_round_trips(text in "\\PC{0,40}") {
        let bytes = encode(DataType::UniText, Endian::Big, &text.as_str().into()).unwrap();
        prop_assert_eq!(bytes.len(), 2 * text.encode_utf16().count());

        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        prop_assert_eq!(String::from_utf16(&units).unwrap(), text);
    }

    #[test]
    fn fixed_width_types_emit_exact_width(
        payload in proptest::collection::vec(any::<u8>(), 0..12),
        index in 0usize..DataType::ALL.len(),
        endian in any_endian(),
    ) {
        let data_type = DataType::ALL[index];
        prop_assume!(data_type.family() == asewire::TypeFamily::Generic);

        let len = payload.len();
        match (encode(data_type, endian, &payload.into()), data_type.byte_size()) {
            (Ok(bytes), Some(n)) => {
                prop_assert_eq!(bytes.len(), n);
                prop_assert_eq!(len, n);
            }
            (Ok(bytes), None) => prop_assert_eq!(bytes.len(), len),
            (Err(Error::LengthMismatch { expected, actual, .. }), Some(n)) => {
                prop_assert_eq!(expected, n);
                prop_assert_eq!(actual, len);
            }
            (other, _) => prop_assert!(false, "unexpected result: {:?}", other),
        }
    }
}
