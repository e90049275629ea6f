//! Encoder configuration via `asewire.toml`
//!
//! The only session-level knob the encoder has is the byte order negotiated
//! with the server. Deployments that pin it keep it in a small TOML file next
//! to their connection settings.

use asewire_core::Endian;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "asewire.toml";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML for [`EncoderConfig`]
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The config could not be serialized
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The config file could not be written
    #[error("Failed to write config file '{}': {source}", .path.display())]
    Write {
        /// File that was written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// `byte_order` names an unknown byte order
    #[error("Invalid byte order '{0}' in asewire.toml. Expected \"little\" or \"big\".")]
    InvalidByteOrder(String),
}

/// Encoder configuration loaded from `asewire.toml`.
///
/// # Example
///
/// ```toml
/// # Byte order negotiated for the session: "little" (default) or "big"
/// byte_order = "little"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Byte order: `"little"` or `"big"`.
    #[serde(default = "default_byte_order_str")]
    pub byte_order: String,
}

fn default_byte_order_str() -> String {
    Endian::default().to_string()
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            byte_order: default_byte_order_str(),
        }
    }
}

impl EncoderConfig {
    /// Parse the byte order string into an [`Endian`].
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"little"` or `"big"`.
    pub fn endian(&self) -> Result<Endian, ConfigError> {
        self.byte_order
            .parse::<Endian>()
            .map_err(|_| ConfigError::InvalidByteOrder(self.byte_order.clone()))
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# asewire encoder configuration
#
# Byte order negotiated for the session: "little" (default) or "big".
# Applies to MONEY, SHORTMONEY, DATE, TIME and the fixed-width scalar types.
# SHORTDATE, DATETIME, BIGDATETIMEN, BIGTIMEN and UNITEXT are always
# little-endian on the wire.
byte_order = "little"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an
    /// unknown byte order.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: EncoderConfig =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        // Validate the byte order eagerly
        let endian = config.endian()?;
        debug!(target: "asewire::config", path = %path.display(), %endian, "Config loaded");
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(target: "asewire::config", path = %path.display(), "Default config written");
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
