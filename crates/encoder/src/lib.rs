//! Wire encoding for the ASE tabular data stream
//!
//! Turns a [`LogicalValue`](asewire_core::LogicalValue) into the exact bytes
//! a column of a given [`DataType`](asewire_core::DataType) occupies on the
//! wire. Encoding is a pure function: no state, no I/O, no locking.
//!
//! - `encode`: per-family layouts and the generic fallback
//! - `writer`: runtime byte order over `byteorder`
//! - `wire`: WireEncoder bound to a session byte order
//! - `config`: `asewire.toml` loading
//!
//! ```
//! use asewire_core::{DataType, Endian};
//! use asewire_encoder::WireEncoder;
//!
//! let encoder = WireEncoder::new(Endian::Little);
//! let bytes = encoder.encode(DataType::UniText, &"A€".into()).unwrap();
//! assert_eq!(bytes, vec![0x41, 0x00, 0xac, 0x20]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod encode;
pub mod wire;
pub mod writer;

pub use config::{ConfigError, EncoderConfig, CONFIG_FILE_NAME};
pub use encode::encode;
pub use wire::WireEncoder;
pub use writer::write_scalar;
