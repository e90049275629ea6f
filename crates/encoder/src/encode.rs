//! Value to wire bytes
//!
//! ## Layouts
//!
//! ```text
//! MONEY        [high 32 bits][low 32 bits]            session order
//! SHORTMONEY   [low 32 bits]                          session order
//! DECN, NUMN   [sign][0 .. 0][magnitude]              big-endian magnitude
//! DATE(N)      [days since 1900: u32]                 session order
//! TIME(N)      [1/300 s ticks since midnight: u32]    session order
//! SHORTDATE    [days: u16][minutes: u16]              little-endian
//! DATETIME     [days: u32][1/300 s ticks: u32]        little-endian
//! BIGDATETIMEN [us since 0000-01-01: u64]             little-endian
//! BIGTIMEN     [us since midnight: u64]               little-endian
//! UNITEXT      [UTF-16 code unit: u16]*               little-endian
//! other        primitive representation               session order
//! ```
//!
//! The effective byte order of each row comes from
//! [`TypeFamily::order_policy`]. Integer fields are truncated to their wire
//! width with two's complement wrapping; no range checks are applied.

use asewire_core::{
    DataType, Decimal, Endian, Error, LogicalValue, Result, TypeFamily, WriteError,
};
use asewire_time::{duration_from_date_time, duration_from_time, duration_since_epoch_1900};
use chrono::NaiveDateTime;
use tracing::trace;

use crate::writer::{put_u16, put_u32, put_u64, write_scalar};

const MONEY_LEN: usize = 8;
const SHORTMONEY_LEN: usize = 4;

/// Encode `value` as `data_type` in the requested byte order
///
/// # Errors
///
/// - [`Error::TypeMismatch`] if the value's variant does not match the
///   data type's family
/// - [`Error::LengthMismatch`] if a generic-path type with a fixed width
///   received a value of another width
/// - [`Error::EncodingFailure`] if the value has no primitive representation
///
/// # Example
///
/// ```
/// use asewire_core::{DataType, Decimal, Endian, LogicalValue};
/// use asewire_encoder::encode;
///
/// let value = LogicalValue::from(Decimal::from_unscaled(12345, 10, 0).unwrap());
/// let bytes = encode(DataType::ShortMoney, Endian::Little, &value).unwrap();
/// assert_eq!(bytes, vec![0x39, 0x30, 0x00, 0x00]);
/// ```
pub fn encode(data_type: DataType, endian: Endian, value: &LogicalValue) -> Result<Vec<u8>> {
    let family = data_type.family();
    let endian = family.order_policy().resolve(endian);

    let bytes = match family {
        TypeFamily::Money => encode_money(data_type, endian, expect_decimal(data_type, value)?),
        TypeFamily::Decimal => encode_decimal(expect_decimal(data_type, value)?),
        TypeFamily::Date => encode_date(endian, expect_timestamp(data_type, value)?),
        TypeFamily::Time => encode_time(endian, expect_timestamp(data_type, value)?),
        TypeFamily::ShortDate => encode_short_date(endian, expect_timestamp(data_type, value)?),
        TypeFamily::DateTime => encode_date_time(endian, expect_timestamp(data_type, value)?),
        TypeFamily::BigDateTime => {
            let ts = expect_timestamp(data_type, value)?;
            encode_u64(endian, duration_from_date_time(ts).microseconds() as u64)
        }
        TypeFamily::BigTime => {
            let ts = expect_timestamp(data_type, value)?;
            encode_u64(endian, duration_from_time(ts).microseconds() as u64)
        }
        TypeFamily::UniText => encode_unitext(endian, expect_text(data_type, value)?),
        TypeFamily::Generic => encode_generic(data_type, endian, value)?,
    };

    trace!(
        target: "asewire::encode",
        data_type = %data_type,
        endian = %endian,
        len = bytes.len(),
        "Value encoded"
    );
    Ok(bytes)
}

fn expect_decimal(data_type: DataType, value: &LogicalValue) -> Result<&Decimal> {
    match value {
        LogicalValue::Decimal(d) => Ok(d),
        other => Err(mismatch(data_type, "decimal", other)),
    }
}

fn expect_timestamp(data_type: DataType, value: &LogicalValue) -> Result<&NaiveDateTime> {
    match value {
        LogicalValue::Timestamp(ts) => Ok(ts),
        other => Err(mismatch(data_type, "timestamp", other)),
    }
}

fn expect_text(data_type: DataType, value: &LogicalValue) -> Result<&str> {
    match value {
        LogicalValue::Text(s) => Ok(s),
        other => Err(mismatch(data_type, "text", other)),
    }
}

fn mismatch(data_type: DataType, expected: &'static str, received: &LogicalValue) -> Error {
    Error::TypeMismatch {
        data_type,
        expected,
        received: received.type_name(),
    }
}

fn encode_money(data_type: DataType, endian: Endian, dec: &Decimal) -> Vec<u8> {
    let scaled = dec.as_i64();
    if data_type == DataType::Money {
        let mut bs = vec![0u8; MONEY_LEN];
        put_u32(&mut bs[..4], endian, (scaled >> 32) as u32);
        put_u32(&mut bs[4..], endian, scaled as u32);
        bs
    } else {
        let mut bs = vec![0u8; SHORTMONEY_LEN];
        put_u32(&mut bs, endian, scaled as u32);
        bs
    }
}

fn encode_decimal(dec: &Decimal) -> Vec<u8> {
    let size = dec.byte_size();
    let magnitude = dec.magnitude_bytes();

    let mut bs = vec![0u8; size];
    bs[size - magnitude.len()..].copy_from_slice(&magnitude);
    if dec.is_negative() {
        bs[0] = 0x01;
    }
    bs
}

fn encode_date(endian: Endian, ts: &NaiveDateTime) -> Vec<u8> {
    let days = duration_since_epoch_1900(ts).days();
    encode_u32(endian, days as u32)
}

fn encode_time(endian: Endian, ts: &NaiveDateTime) -> Vec<u8> {
    let ticks = duration_from_time(ts).sub_day_fractional_seconds();
    encode_u32(endian, ticks as u32)
}

fn encode_short_date(endian: Endian, ts: &NaiveDateTime) -> Vec<u8> {
    let since = duration_since_epoch_1900(ts);

    let mut bs = vec![0u8; 4];
    put_u16(&mut bs[..2], endian, since.days() as u16);
    put_u16(&mut bs[2..], endian, since.sub_day().minutes() as u16);
    bs
}

fn encode_date_time(endian: Endian, ts: &NaiveDateTime) -> Vec<u8> {
    let since = duration_since_epoch_1900(ts);

    let mut bs = vec![0u8; 8];
    put_u32(&mut bs[..4], endian, since.days() as u32);
    put_u32(&mut bs[4..], endian, since.sub_day_fractional_seconds() as u32);
    bs
}

fn encode_unitext(endian: Endian, text: &str) -> Vec<u8> {
    let mut bs = Vec::with_capacity(text.len() * 2);
    let mut unit_bytes = [0u8; 2];
    for unit in text.encode_utf16() {
        put_u16(&mut unit_bytes, endian, unit);
        bs.extend_from_slice(&unit_bytes);
    }
    bs
}

fn encode_generic(data_type: DataType, endian: Endian, value: &LogicalValue) -> Result<Vec<u8>> {
    match value {
        LogicalValue::Text(s) => {
            check_width(data_type, s.len())?;
            Ok(s.as_bytes().to_vec())
        }
        LogicalValue::Scalar(scalar) => {
            let len = scalar.encoded_len();
            check_width(data_type, len)?;
            let mut bs = Vec::with_capacity(len);
            write_scalar(&mut bs, endian, scalar)
                .map_err(|source| Error::EncodingFailure { data_type, source })?;
            Ok(bs)
        }
        other => Err(Error::EncodingFailure {
            data_type,
            source: WriteError::Unsupported(other.type_name()),
        }),
    }
}

fn check_width(data_type: DataType, actual: usize) -> Result<()> {
    match data_type.byte_size() {
        Some(expected) if expected != actual => Err(Error::LengthMismatch {
            data_type,
            expected,
            actual,
        }),
        _ => Ok(()),
    }
}

fn encode_u32(endian: Endian, n: u32) -> Vec<u8> {
    let mut bs = vec![0u8; 4];
    put_u32(&mut bs, endian, n);
    bs
}

fn encode_u64(endian: Endian, n: u64) -> Vec<u8> {
    let mut bs = vec![0u8; 8];
    put_u64(&mut bs, endian, n);
    bs
}
