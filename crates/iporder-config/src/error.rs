//! Errors from reading and checking iporder configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A config file is not valid TOML.
    #[error("{} is not valid TOML: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A setting parsed fine but holds a value the commands cannot use.
    #[error("invalid {key}: {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    /// No home directory, so there is no per-user config location.
    #[error("no per-user config directory (is $HOME set?)")]
    NoUserConfigDir,
}

impl ConfigError {
    pub(crate) fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidSetting {
            key,
            reason: reason.into(),
        }
    }
}
