//! Session-bound encoder
//!
//! [`WireEncoder`] fixes the byte order negotiated for a session so row
//! writers only pass the data type and value. It holds no other state and is
//! `Copy`, so one instance can be shared freely across threads.

use asewire_core::{DataType, Endian, LogicalValue, Result};

use crate::config::{ConfigError, EncoderConfig};
use crate::encode::encode;

/// Encoder bound to a session byte order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WireEncoder {
    endian: Endian,
}

impl WireEncoder {
    /// Create an encoder for the given byte order
    pub fn new(endian: Endian) -> Self {
        Self { endian }
    }

    /// Create an encoder from a loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configured byte order is invalid.
    pub fn from_config(config: &EncoderConfig) -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(config.endian()?))
    }

    /// Byte order requested for caller-ordered types
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Encode one value
    pub fn encode(&self, data_type: DataType, value: &LogicalValue) -> Result<Vec<u8>> {
        encode(data_type, self.endian, value)
    }

    /// Encode one value and append it to `buf`
    ///
    /// On error `buf` is left untouched. Returns the number of bytes appended.
    pub fn encode_into(
        &self,
        data_type: DataType,
        value: &LogicalValue,
        buf: &mut Vec<u8>,
    ) -> Result<usize> {
        let bytes = self.encode(data_type, value)?;
        buf.extend_from_slice(&bytes);
        Ok(bytes.len())
    }
}
