//! Wire data types for the ASE tabular data stream
//!
//! This module defines:
//! - DataType: protocol token identifying how a column value is laid out
//! - TypeFamily: the encoding algorithm a DataType dispatches to
//! - OrderPolicy: whether a family honors the caller's byte order
//! - Endian: byte order selected at runtime for a session

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::Error;

/// Wire data type token
///
/// Each variant carries its protocol token as the discriminant. These values
/// are part of the wire format and MUST NOT change.
///
/// The expected encoded width of a value is exposed by [`DataType::byte_size`];
/// `None` marks a variable-width type (the protocol's `-1` sentinel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum DataType {
    /// Boolean bit
    Bit = 0x32,
    /// Unsigned 8-bit integer (tinyint)
    Int1 = 0x30,
    /// Signed 16-bit integer
    Int2 = 0x34,
    /// Signed 32-bit integer
    Int4 = 0x38,
    /// Signed 64-bit integer
    Int8 = 0xbf,
    /// Nullable integer of variable width
    IntN = 0x26,
    /// Unsigned 16-bit integer
    UInt2 = 0x41,
    /// Unsigned 32-bit integer
    UInt4 = 0x42,
    /// Unsigned 64-bit integer
    UInt8 = 0x43,
    /// Nullable unsigned integer of variable width
    UIntN = 0x44,
    /// 32-bit IEEE-754 float
    Flt4 = 0x3b,
    /// 64-bit IEEE-754 float
    Flt8 = 0x3e,
    /// Nullable float of variable width
    FltN = 0x6d,
    /// 64-bit scaled integer currency
    Money = 0x3c,
    /// 32-bit scaled integer currency
    ShortMoney = 0x7a,
    /// Nullable currency of variable width
    MoneyN = 0x6e,
    /// Sign-and-magnitude decimal
    DecN = 0x6a,
    /// Sign-and-magnitude numeric
    NumN = 0x6c,
    /// Days since 1900-01-01
    Date = 0x31,
    /// Nullable date
    DateN = 0x7b,
    /// 1/300 second ticks since midnight
    Time = 0x33,
    /// Nullable time
    TimeN = 0x93,
    /// Days and minutes since 1900-01-01
    ShortDate = 0x3a,
    /// Days and 1/300 second ticks since 1900-01-01
    DateTime = 0x3d,
    /// Nullable datetime of variable width
    DateTimeN = 0x6f,
    /// Microseconds since 0000-01-01
    BigDateTimeN = 0xbb,
    /// Microseconds since midnight
    BigTimeN = 0xbc,
    /// Fixed-width character data
    Char = 0x2f,
    /// Variable-width character data
    VarChar = 0x27,
    /// Long character data
    LongChar = 0xaf,
    /// Fixed-width binary data
    Binary = 0x2d,
    /// Variable-width binary data
    VarBinary = 0x25,
    /// Long binary data
    LongBinary = 0xe1,
    /// Text column
    Text = 0x23,
    /// Image column
    Image = 0x22,
    /// UTF-16 text column
    UniText = 0xae,
    /// XML column
    Xml = 0xa3,
    /// Blob column
    Blob = 0x24,
    /// Interval
    Interval = 0x2e,
    /// No data
    Void = 0x1f,
    /// Sensitivity label
    Sensitivity = 0x67,
    /// Boundary label
    Boundary = 0x68,
}

impl DataType {
    /// Every data type known to the protocol
    pub const ALL: [DataType; 42] = [
        DataType::Bit,
        DataType::Int1,
        DataType::Int2,
        DataType::Int4,
        DataType::Int8,
        DataType::IntN,
        DataType::UInt2,
        DataType::UInt4,
        DataType::UInt8,
        DataType::UIntN,
        DataType::Flt4,
        DataType::Flt8,
        DataType::FltN,
        DataType::Money,
        DataType::ShortMoney,
        DataType::MoneyN,
        DataType::DecN,
        DataType::NumN,
        DataType::Date,
        DataType::DateN,
        DataType::Time,
        DataType::TimeN,
        DataType::ShortDate,
        DataType::DateTime,
        DataType::DateTimeN,
        DataType::BigDateTimeN,
        DataType::BigTimeN,
        DataType::Char,
        DataType::VarChar,
        DataType::LongChar,
        DataType::Binary,
        DataType::VarBinary,
        DataType::LongBinary,
        DataType::Text,
        DataType::Image,
        DataType::UniText,
        DataType::Xml,
        DataType::Blob,
        DataType::Interval,
        DataType::Void,
        DataType::Sensitivity,
        DataType::Boundary,
    ];

    /// Convert to the protocol token
    pub fn as_byte(&self) -> u8 {
        *self as u8
    }

    /// Try to create from a protocol token
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_byte() == byte)
    }

    /// Expected encoded width in bytes, `None` for variable-width types
    pub fn byte_size(&self) -> Option<usize> {
        match self {
            DataType::Bit | DataType::Int1 => Some(1),
            DataType::Int2 | DataType::UInt2 => Some(2),
            DataType::Int4
            | DataType::UInt4
            | DataType::Flt4
            | DataType::Date
            | DataType::DateN
            | DataType::Time
            | DataType::TimeN
            | DataType::ShortDate
            | DataType::ShortMoney => Some(4),
            DataType::Int8
            | DataType::UInt8
            | DataType::Flt8
            | DataType::DateTime
            | DataType::Money
            | DataType::BigDateTimeN
            | DataType::BigTimeN
            | DataType::Interval => Some(8),
            _ => None,
        }
    }

    /// Encoding family this type dispatches to
    pub fn family(&self) -> TypeFamily {
        match self {
            DataType::Money | DataType::ShortMoney => TypeFamily::Money,
            DataType::DecN | DataType::NumN => TypeFamily::Decimal,
            DataType::Date | DataType::DateN => TypeFamily::Date,
            DataType::Time | DataType::TimeN => TypeFamily::Time,
            DataType::ShortDate => TypeFamily::ShortDate,
            DataType::DateTime => TypeFamily::DateTime,
            DataType::BigDateTimeN => TypeFamily::BigDateTime,
            DataType::BigTimeN => TypeFamily::BigTime,
            DataType::UniText => TypeFamily::UniText,
            _ => TypeFamily::Generic,
        }
    }

    /// Protocol name of the type, as used in server messages
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Bit => "BIT",
            DataType::Int1 => "INT1",
            DataType::Int2 => "INT2",
            DataType::Int4 => "INT4",
            DataType::Int8 => "INT8",
            DataType::IntN => "INTN",
            DataType::UInt2 => "UINT2",
            DataType::UInt4 => "UINT4",
            DataType::UInt8 => "UINT8",
            DataType::UIntN => "UINTN",
            DataType::Flt4 => "FLT4",
            DataType::Flt8 => "FLT8",
            DataType::FltN => "FLTN",
            DataType::Money => "MONEY",
            DataType::ShortMoney => "SHORTMONEY",
            DataType::MoneyN => "MONEYN",
            DataType::DecN => "DECN",
            DataType::NumN => "NUMN",
            DataType::Date => "DATE",
            DataType::DateN => "DATEN",
            DataType::Time => "TIME",
            DataType::TimeN => "TIMEN",
            DataType::ShortDate => "SHORTDATE",
            DataType::DateTime => "DATETIME",
            DataType::DateTimeN => "DATETIMEN",
            DataType::BigDateTimeN => "BIGDATETIMEN",
            DataType::BigTimeN => "BIGTIMEN",
            DataType::Char => "CHAR",
            DataType::VarChar => "VARCHAR",
            DataType::LongChar => "LONGCHAR",
            DataType::Binary => "BINARY",
            DataType::VarBinary => "VARBINARY",
            DataType::LongBinary => "LONGBINARY",
            DataType::Text => "TEXT",
            DataType::Image => "IMAGE",
            DataType::UniText => "UNITEXT",
            DataType::Xml => "XML",
            DataType::Blob => "BLOB",
            DataType::Interval => "INTERVAL",
            DataType::Void => "VOID",
            DataType::Sensitivity => "SENSITIVITY",
            DataType::Boundary => "BOUNDARY",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for DataType {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte).ok_or(Error::UnknownDataType(byte))
    }
}

/// Encoding algorithm shared by a group of data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    /// MONEY, SHORTMONEY: scaled integer split into 32-bit halves
    Money,
    /// DECN, NUMN: sign byte followed by big-endian magnitude
    Decimal,
    /// DATE, DATEN: whole days since 1900-01-01
    Date,
    /// TIME, TIMEN: 1/300 second ticks since midnight
    Time,
    /// SHORTDATE: days and minutes since 1900-01-01
    ShortDate,
    /// DATETIME: days and 1/300 second ticks since 1900-01-01
    DateTime,
    /// BIGDATETIMEN: microseconds since 0000-01-01
    BigDateTime,
    /// BIGTIMEN: microseconds since midnight
    BigTime,
    /// UNITEXT: UTF-16 code units
    UniText,
    /// Everything else: primitive representation with width validation
    Generic,
}

impl TypeFamily {
    /// Byte order policy of this family
    ///
    /// MONEY, DATE, TIME and the generic path write in the session's byte
    /// order. SHORTDATE, DATETIME, the BIG* types and UNITEXT are always
    /// little-endian on the wire, whatever the session negotiated.
    pub fn order_policy(&self) -> OrderPolicy {
        match self {
            TypeFamily::Money | TypeFamily::Date | TypeFamily::Time | TypeFamily::Generic => {
                OrderPolicy::Caller
            }
            TypeFamily::Decimal => OrderPolicy::FixedBigEndian,
            TypeFamily::ShortDate
            | TypeFamily::DateTime
            | TypeFamily::BigDateTime
            | TypeFamily::BigTime
            | TypeFamily::UniText => OrderPolicy::FixedLittleEndian,
        }
    }
}

/// How a type family chooses its byte order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderPolicy {
    /// Use the byte order requested by the caller
    Caller,
    /// Always little-endian
    FixedLittleEndian,
    /// Always big-endian (sign-and-magnitude decimals)
    FixedBigEndian,
}

impl OrderPolicy {
    /// Resolve the byte order actually written for a requested one
    pub fn resolve(&self, requested: Endian) -> Endian {
        match self {
            OrderPolicy::Caller => requested,
            OrderPolicy::FixedLittleEndian => Endian::Little,
            OrderPolicy::FixedBigEndian => Endian::Big,
        }
    }
}

/// Byte order of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endian {
    /// Least significant byte first
    #[default]
    Little,
    /// Most significant byte first
    Big,
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endian::Little => f.write_str("little"),
            Endian::Big => f.write_str("big"),
        }
    }
}

/// Error returned when parsing an unknown byte order name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid byte order '{0}', expected \"little\" or \"big\"")]
pub struct ParseEndianError(pub String);

impl FromStr for Endian {
    type Err = ParseEndianError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "little" => Ok(Endian::Little),
            "big" => Ok(Endian::Big),
            other => Err(ParseEndianError(other.to_string())),
        }
    }
}
