//! Fixed-precision decimal values
//!
//! A [`Decimal`] is a scaled integer: the unscaled value `v` with scale `s`
//! represents `v * 10^-s`. Precision bounds the number of decimal digits of
//! `v` and determines how many bytes the value occupies on the wire.
//!
//! ## Invariants
//!
//! - `MIN_PRECISION <= precision <= MAX_PRECISION`
//! - `scale <= precision`
//! - `|unscaled| <= 10^precision - 1`

use std::fmt;
use thiserror::Error;

/// Smallest supported precision
pub const MIN_PRECISION: u8 = 1;

/// Largest supported precision
pub const MAX_PRECISION: u8 = 38;

/// Decimal construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// Precision outside `MIN_PRECISION..=MAX_PRECISION`
    #[error("precision {0} out of range {}..={}", MIN_PRECISION, MAX_PRECISION)]
    InvalidPrecision(u8),

    /// Scale larger than precision
    #[error("scale {scale} exceeds precision {precision}")]
    InvalidScale {
        /// Requested precision
        precision: u8,
        /// Requested scale
        scale: u8,
    },

    /// Value has more digits than the precision allows
    #[error("value {value} does not fit precision {precision}")]
    Overflow {
        /// Unscaled value
        value: i128,
        /// Requested precision
        precision: u8,
    },

    /// Literal could not be parsed
    #[error("invalid decimal literal {input:?}: {reason}")]
    Parse {
        /// Text that was parsed
        input: String,
        /// What was wrong with it
        reason: &'static str,
    },
}

/// Fixed-precision signed decimal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal {
    precision: u8,
    scale: u8,
    value: i128,
}

impl Decimal {
    /// Create a zero-valued decimal
    pub fn new(precision: u8, scale: u8) -> Result<Self, DecimalError> {
        Self::from_unscaled(0, precision, scale)
    }

    /// Create a decimal from its unscaled integer value
    ///
    /// `Decimal::from_unscaled(12345, 10, 2)` represents `123.45`.
    pub fn from_unscaled(value: i128, precision: u8, scale: u8) -> Result<Self, DecimalError> {
        validate(precision, scale)?;
        if value.unsigned_abs() > max_magnitude(precision) {
            return Err(DecimalError::Overflow { value, precision });
        }
        Ok(Self {
            precision,
            scale,
            value,
        })
    }

    /// Parse a literal of the form `[+-]digits[.digits]`
    ///
    /// The fractional part may have at most `scale` digits and is padded
    /// with zeros up to `scale`.
    pub fn parse(input: &str, precision: u8, scale: u8) -> Result<Self, DecimalError> {
        validate(precision, scale)?;
        let parse_err = |reason| DecimalError::Parse {
            input: input.to_string(),
            reason,
        };

        let trimmed = input.trim();
        let (negative, digits) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(parse_err("no digits"));
        }
        if !int_part
            .bytes()
            .chain(frac_part.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(parse_err("non-digit character"));
        }
        if frac_part.len() > usize::from(scale) {
            return Err(parse_err("more fractional digits than scale"));
        }

        let padding = usize::from(scale) - frac_part.len();
        let mut value: i128 = 0;
        for b in int_part
            .bytes()
            .chain(frac_part.bytes())
            .chain(std::iter::repeat(b'0').take(padding))
        {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i128::from(b - b'0')))
                .ok_or_else(|| parse_err("value exceeds 128 bits"))?;
        }
        if negative {
            value = -value;
        }

        Self::from_unscaled(value, precision, scale)
    }

    /// Number of decimal digits
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Number of fractional digits
    pub fn scale(&self) -> u8 {
        self.scale
    }

    /// The unscaled integer value
    pub fn unscaled(&self) -> i128 {
        self.value
    }

    /// The unscaled value as a 64-bit two's complement integer
    ///
    /// Values wider than 64 bits keep their low 64 bits.
    pub fn as_i64(&self) -> i64 {
        self.value as i64
    }

    /// Whether the value is below zero
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Big-endian magnitude without leading zero bytes, empty for zero
    pub fn magnitude_bytes(&self) -> Vec<u8> {
        let bytes = self.value.unsigned_abs().to_be_bytes();
        let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        bytes[first..].to_vec()
    }

    /// Wire width: one sign byte plus the magnitude bytes the precision needs
    pub fn byte_size(&self) -> usize {
        wire_width(self.precision)
    }
}

/// Wire width of a decimal with the given precision
///
/// One sign byte plus the fewest bytes that hold `10^precision - 1`.
///
/// # Errors
///
/// Returns [`DecimalError::InvalidPrecision`] outside
/// `MIN_PRECISION..=MAX_PRECISION`.
pub fn byte_size_for_precision(precision: u8) -> Result<usize, DecimalError> {
    validate_precision(precision)?;
    Ok(wire_width(precision))
}

// Precision must already be in range.
fn wire_width(precision: u8) -> usize {
    let bits = 128 - max_magnitude(precision).leading_zeros() as usize;
    1 + (bits + 7) / 8
}

fn max_magnitude(precision: u8) -> u128 {
    10u128.pow(u32::from(precision)) - 1
}

fn validate_precision(precision: u8) -> Result<(), DecimalError> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(DecimalError::InvalidPrecision(precision));
    }
    Ok(())
}

fn validate(precision: u8, scale: u8) -> Result<(), DecimalError> {
    validate_precision(precision)?;
    if scale > precision {
        return Err(DecimalError::InvalidScale { precision, scale });
    }
    Ok(())
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.value.unsigned_abs();
        if self.scale == 0 {
            return write!(f, "{}{}", sign, magnitude);
        }
        let divisor = 10u128.pow(u32::from(self.scale));
        write!(
            f,
            "{}{}.{:0width$}",
            sign,
            magnitude / divisor,
            magnitude % divisor,
            width = usize::from(self.scale)
        )
    }
}
