//! Error types for wire encoding
//!
//! Every error here is a contract violation by the caller, never a transient
//! condition: retrying the same call yields the same error.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::decimal::DecimalError;
use crate::types::DataType;
use std::io;
use thiserror::Error;

/// Result type alias for encoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for value encoding
#[derive(Debug, Error)]
pub enum Error {
    /// The value's variant does not match what the data type requires
    #[error("expected {expected} for {data_type}, received {received}")]
    TypeMismatch {
        /// Target data type
        data_type: DataType,
        /// Variant the data type requires
        expected: &'static str,
        /// Variant that was supplied
        received: &'static str,
    },

    /// Generic-path output width disagrees with the data type's fixed size
    #[error("encoded {actual} bytes, expected {expected} for data type {data_type}")]
    LengthMismatch {
        /// Target data type
        data_type: DataType,
        /// Fixed width declared by the data type
        expected: usize,
        /// Width actually produced
        actual: usize,
    },

    /// The primitive writer could not serialize the value
    #[error("error writing value for {data_type}: {source}")]
    EncodingFailure {
        /// Target data type
        data_type: DataType,
        /// Underlying cause
        #[source]
        source: WriteError,
    },

    /// Protocol token does not name a known data type
    #[error("unknown data type token: {0:#04x}")]
    UnknownDataType(u8),

    /// Decimal construction failed
    #[error("Decimal error: {0}")]
    Decimal(#[from] DecimalError),
}

/// Failure of the primitive binary writer
#[derive(Debug, Error)]
pub enum WriteError {
    /// The underlying sink rejected the bytes
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The value has no primitive binary representation
    #[error("unsupported representation: {0}")]
    Unsupported(&'static str),
}
