//! asewire - value-to-wire encoder for the ASE tabular data stream
//!
//! Given a logical value and a wire data type, produces the exact bytes the
//! protocol expects: scaled-integer currency, sign-and-magnitude decimals,
//! epoch-relative dates and times quantized to 1/300 second, UTF-16 text, and
//! a width-checked fallback for primitive scalars.
//!
//! # Quick Start
//!
//! ```
//! use asewire::{DataType, Decimal, Endian, WireEncoder};
//!
//! let encoder = WireEncoder::new(Endian::Little);
//! let price = Decimal::parse("1.2345", 19, 4)?;
//! let bytes = encoder.encode(DataType::ShortMoney, &price.into())?;
//! assert_eq!(bytes, vec![0x39, 0x30, 0x00, 0x00]);
//! # Ok::<(), asewire::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `asewire-core`: data types, values, decimals, errors
//! - `asewire-time`: epoch and fractional-second arithmetic
//! - `asewire-encoder`: the encoder itself and its configuration
//!
//! Result-set decoding and connection handling live elsewhere; this crate only
//! produces bytes for the row writer to append.

pub use asewire_core::*;
pub use asewire_encoder::{encode, ConfigError, EncoderConfig, WireEncoder, CONFIG_FILE_NAME};
pub use asewire_time as time;
