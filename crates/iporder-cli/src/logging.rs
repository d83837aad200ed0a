//! Logging setup.
//!
//! Two sinks:
//! - a log file under the configured directory (plain text, appended), at
//!   `info`, or `debug` when debug mode is on;
//! - the console (stderr), only in debug mode, so normal runs show just the
//!   styled command output.
//!
//! `RUST_LOG` directives are applied to the file sink on top of the default.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Startup logging options.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Verbose logging on the console and in the file.
    pub debug: bool,
    /// Directory for the log file; `None` disables file logging.
    pub directory: Option<PathBuf>,
    /// Log file name inside `directory`.
    pub file_name: &'static str,
}

impl LogConfig {
    pub fn level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }

    pub fn file_path(&self) -> Option<PathBuf> {
        self.directory.as_ref().map(|d| d.join(self.file_name))
    }
}

/// Installs the global subscriber. Returns the log file path, if any.
pub fn init(config: &LogConfig) -> Result<Option<PathBuf>> {
    let file_layer = match config.file_path() {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory {}", parent.display())
                })?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            let filter = EnvFilter::builder()
                .with_default_directive(config.level().into())
                .from_env_lossy();

            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(filter),
            )
        }
        None => None,
    };

    let console_level = if config.debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    };
    let console_layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(console_level);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    if config.debug {
        tracing::debug!("debug mode is on");
    }
    tracing::info!("logger initialized");

    Ok(config.file_path())
}
