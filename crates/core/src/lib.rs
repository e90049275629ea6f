//! Core types for asewire
//!
//! This crate defines the foundational types used by the encoder:
//! - DataType: wire data type token with its fixed or variable width
//! - TypeFamily / OrderPolicy: encoding family and its byte order policy
//! - Endian: session byte order
//! - Decimal: fixed-precision scaled integer
//! - LogicalValue / Scalar: column values before encoding
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decimal;
pub mod error;
pub mod types;
pub mod value;

pub use decimal::{byte_size_for_precision, Decimal, DecimalError, MAX_PRECISION, MIN_PRECISION};
pub use error::{Error, Result, WriteError};
pub use types::{DataType, Endian, OrderPolicy, ParseEndianError, TypeFamily};
pub use value::{LogicalValue, Scalar};
