//! Logical values handed to the encoder
//!
//! This module defines:
//! - LogicalValue: the value of one column, before encoding
//! - Scalar: primitive values with a fixed in-memory binary representation
//!
//! Each data type family accepts exactly one LogicalValue variant. Presenting
//! another variant is a caller bug and is reported as a type mismatch rather
//! than coerced.

use chrono::{DateTime, NaiveDateTime, TimeZone};

use crate::decimal::Decimal;

/// Primitive value written verbatim in the session byte order
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Boolean, one byte (0 or 1)
    Bool(bool),
    /// Signed 8-bit integer
    Int8(i8),
    /// Signed 16-bit integer
    Int16(i16),
    /// Signed 32-bit integer
    Int32(i32),
    /// Signed 64-bit integer
    Int64(i64),
    /// Unsigned 8-bit integer
    UInt8(u8),
    /// Unsigned 16-bit integer
    UInt16(u16),
    /// Unsigned 32-bit integer
    UInt32(u32),
    /// Unsigned 64-bit integer
    UInt64(u64),
    /// 32-bit floating point (IEEE-754)
    Float32(f32),
    /// 64-bit floating point (IEEE-754)
    Float64(f64),
    /// Raw bytes
    Bytes(Vec<u8>),
}

impl Scalar {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Int8(_) => "i8",
            Scalar::Int16(_) => "i16",
            Scalar::Int32(_) => "i32",
            Scalar::Int64(_) => "i64",
            Scalar::UInt8(_) => "u8",
            Scalar::UInt16(_) => "u16",
            Scalar::UInt32(_) => "u32",
            Scalar::UInt64(_) => "u64",
            Scalar::Float32(_) => "f32",
            Scalar::Float64(_) => "f64",
            Scalar::Bytes(_) => "bytes",
        }
    }

    /// Width of the in-memory representation in bytes
    pub fn encoded_len(&self) -> usize {
        match self {
            Scalar::Bool(_) | Scalar::Int8(_) | Scalar::UInt8(_) => 1,
            Scalar::Int16(_) | Scalar::UInt16(_) => 2,
            Scalar::Int32(_) | Scalar::UInt32(_) | Scalar::Float32(_) => 4,
            Scalar::Int64(_) | Scalar::UInt64(_) | Scalar::Float64(_) => 8,
            Scalar::Bytes(b) => b.len(),
        }
    }
}

/// Value of a single column
#[derive(Debug, Clone, PartialEq)]
pub enum LogicalValue {
    /// Fixed-precision decimal (MONEY, SHORTMONEY, DECN, NUMN)
    Decimal(Decimal),
    /// Calendar timestamp, wall-clock (DATE, TIME and the datetime types)
    Timestamp(NaiveDateTime),
    /// UTF-8 text (UNITEXT, or raw bytes for character types)
    Text(String),
    /// Primitive scalar (generic fixed and variable width types)
    Scalar(Scalar),
}

impl LogicalValue {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            LogicalValue::Decimal(_) => "decimal",
            LogicalValue::Timestamp(_) => "timestamp",
            LogicalValue::Text(_) => "text",
            LogicalValue::Scalar(s) => s.type_name(),
        }
    }
}

impl From<Decimal> for LogicalValue {
    fn from(d: Decimal) -> Self {
        LogicalValue::Decimal(d)
    }
}

impl From<NaiveDateTime> for LogicalValue {
    fn from(ts: NaiveDateTime) -> Self {
        LogicalValue::Timestamp(ts)
    }
}

/// Zoned timestamps are encoded by their local wall-clock time
impl<Tz: TimeZone> From<DateTime<Tz>> for LogicalValue {
    fn from(ts: DateTime<Tz>) -> Self {
        LogicalValue::Timestamp(ts.naive_local())
    }
}

impl From<String> for LogicalValue {
    fn from(s: String) -> Self {
        LogicalValue::Text(s)
    }
}

impl From<&str> for LogicalValue {
    fn from(s: &str) -> Self {
        LogicalValue::Text(s.to_string())
    }
}

impl From<Scalar> for LogicalValue {
    fn from(s: Scalar) -> Self {
        LogicalValue::Scalar(s)
    }
}

impl From<bool> for LogicalValue {
    fn from(v: bool) -> Self {
        LogicalValue::Scalar(Scalar::Bool(v))
    }
}

impl From<i8> for LogicalValue {
    fn from(v: i8) -> Self {
        LogicalValue::Scalar(Scalar::Int8(v))
    }
}

impl From<i16> for LogicalValue {
    fn from(v: i16) -> Self {
        LogicalValue::Scalar(Scalar::Int16(v))
    }
}

impl From<i32> for LogicalValue {
    fn from(v: i32) -> Self {
        LogicalValue::Scalar(Scalar::Int32(v))
    }
}

impl From<i64> for LogicalValue {
    fn from(v: i64) -> Self {
        LogicalValue::Scalar(Scalar::Int64(v))
    }
}

impl From<u8> for LogicalValue {
    fn from(v: u8) -> Self {
        LogicalValue::Scalar(Scalar::UInt8(v))
    }
}

impl From<u16> for LogicalValue {
    fn from(v: u16) -> Self {
        LogicalValue::Scalar(Scalar::UInt16(v))
    }
}

impl From<u32> for LogicalValue {
    fn from(v: u32) -> Self {
        LogicalValue::Scalar(Scalar::UInt32(v))
    }
}

impl From<u64> for LogicalValue {
    fn from(v: u64) -> Self {
        LogicalValue::Scalar(Scalar::UInt64(v))
    }
}

impl From<f32> for LogicalValue {
    fn from(v: f32) -> Self {
        LogicalValue::Scalar(Scalar::Float32(v))
    }
}

impl From<f64> for LogicalValue {
    fn from(v: f64) -> Self {
        LogicalValue::Scalar(Scalar::Float64(v))
    }
}

impl From<Vec<u8>> for LogicalValue {
    fn from(v: Vec<u8>) -> Self {
        LogicalValue::Scalar(Scalar::Bytes(v))
    }
}

impl From<&[u8]> for LogicalValue {
    fn from(v: &[u8]) -> Self {
        LogicalValue::Scalar(Scalar::Bytes(v.to_vec()))
    }
}
