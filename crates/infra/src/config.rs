//! Configuration loading and representation.
//!
//! Everything comes from the process environment; unset variables fall back
//! to defaults.

use std::path::PathBuf;

use thiserror::Error;

use stockroom_observability::LogFormat;

/// Path of the persisted inventory record.
pub const DATA_FILE_ENV: &str = "STOCKROOM_DATA_FILE";
/// `pretty` or `json`.
pub const LOG_FORMAT_ENV: &str = "STOCKROOM_LOG_FORMAT";

pub const DEFAULT_DATA_FILE: &str = "inventory.dat";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {var}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_FILE_ENV).filter(|path| !path.trim().is_empty()) {
            config.data_file = PathBuf::from(path);
        }

        if let Some(value) = lookup(LOG_FORMAT_ENV) {
            config.log_format = value.parse().map_err(|reason: String| ConfigError::InvalidValue {
                var: LOG_FORMAT_ENV,
                value,
                reason,
            })?;
        }

        Ok(config)
    }
}
