//! Configuration management for iporder
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. CLI arguments (highest precedence, applied by the CLI)
//! 2. Environment variables (IPORDER_* prefix, `__` between section and key)
//! 3. iporder.local.toml (gitignored, local overrides)
//! 4. iporder.toml (project config)
//! 5. ~/.config/iporder/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main iporder configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IporderConfig {
    pub database: DatabaseConfig,
    pub reorder: ReorderConfig,
    pub logging: LoggingConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub table: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("network_devices.db"),
            table: "devices".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReorderConfig {
    /// Case-insensitive substring identifying the IP column.
    pub ip_column_pattern: String,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            ip_column_pattern: "ipv4".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: PathBuf,
    pub debug: bool,
    /// Write a log file in addition to the console.
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("Logs"),
            debug: false,
            file: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub output_file: String,
    pub extensions: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_file: "exported_scripts.txt".to_string(),
            extensions: vec!["sh".to_string(), "py".to_string()],
        }
    }
}

impl IporderConfig {
    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Resolve relative paths to absolute
    pub fn resolve_paths(&mut self, base_dir: impl AsRef<Path>) {
        let base = base_dir.as_ref();

        if self.database.path.is_relative() {
            self.database.path = base.join(&self.database.path);
        }

        if self.logging.directory.is_relative() {
            self.logging.directory = base.join(&self.logging.directory);
        }
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.table.trim().is_empty() {
            return Err(ConfigError::invalid("database.table", "must not be empty"));
        }
        if self.reorder.ip_column_pattern.trim().is_empty() {
            return Err(ConfigError::invalid(
                "reorder.ip_column_pattern",
                "must not be empty",
            ));
        }
        if self.export.extensions.is_empty() {
            return Err(ConfigError::invalid(
                "export.extensions",
                "list at least one extension",
            ));
        }
        if self.export.output_file.trim().is_empty()
            || Path::new(&self.export.output_file).components().count() != 1
        {
            return Err(ConfigError::invalid(
                "export.output_file",
                format!("{:?} is not a plain file name", self.export.output_file),
            ));
        }
        Ok(())
    }
}
