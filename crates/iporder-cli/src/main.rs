//! iporder CLI.
//!
//! Reorders SQLite device tables by IPv4 address and exports scripts.
//!
//! # Quick Start
//!
//! ```bash
//! # Write a default iporder.toml
//! iporder init .
//!
//! # Preview the new order without writing
//! iporder reorder network_devices.db --dry-run
//!
//! # Apply it
//! iporder reorder network_devices.db
//!
//! # Concatenate scripts in a directory
//! iporder export ./scripts
//! ```

mod commands;
mod logging;
mod style;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use iporder_config::{ConfigLoader, IporderConfig};

use crate::commands::reorder::ReorderArgs;
use crate::logging::LogConfig;

/// iporder - sort device tables by IPv4 address and renumber their IDs.
#[derive(Parser)]
#[command(name = "iporder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose logging (console and log file).
    #[arg(long, global = true)]
    debug: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Project directory holding iporder.toml.
    #[arg(short = 'C', long, global = true, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Write a default iporder.toml.
    Init {
        /// Directory to initialize.
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Sort a table by its IPv4 column and renumber IDs from 1.
    Reorder {
        /// SQLite database file (default: database.path from config).
        database: Option<PathBuf>,

        /// Table to reorder (default: database.table from config).
        #[arg(short, long)]
        table: Option<String>,

        /// Exact name of the IP column, instead of matching "ipv4".
        #[arg(short, long)]
        ip_column: Option<String>,

        /// Compute and show the new order without writing it.
        #[arg(long)]
        dry_run: bool,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Concatenate .sh and .py files in a directory into one text file.
    Export {
        /// Directory to export (prompted for when omitted).
        directory: Option<PathBuf>,
    },

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the merged configuration.
    Show {
        /// Output format (text, json, toml).
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check configuration files for errors.
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color || !console::colors_enabled() {
        style::colors::set_enabled(false);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            style::print_status(style::Status::Failed, &format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Init { path } => commands::init::run(&path),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { format } => commands::config::show(&cli.project, &format),
            ConfigCommands::Validate => commands::config::validate(&cli.project),
        },
        Commands::Reorder {
            database,
            table,
            ip_column,
            dry_run,
            json,
        } => {
            let config = prepare(&cli.project, cli.debug, "reorder.log")?;
            commands::reorder::run(
                &config,
                ReorderArgs {
                    database,
                    table,
                    ip_column,
                    dry_run,
                    json,
                },
            )
        }
        Commands::Export { directory } => {
            let config = prepare(&cli.project, cli.debug, "script_export.log")?;
            let directory = match directory {
                Some(dir) => dir,
                None => commands::export::prompt_directory()?,
            };
            commands::export::run(&config, &directory)
        }
    }
}

/// Loads the config and starts logging.
///
/// A config that fails to load is still logged, to the default log
/// directory under `project`.
fn prepare(project: &Path, debug: bool, file_name: &'static str) -> Result<IporderConfig> {
    match load_config(project) {
        Ok(config) => {
            init_logging(&config, debug, file_name)?;
            Ok(config)
        }
        Err(e) => {
            let mut fallback = IporderConfig::default();
            fallback.resolve_paths(project);
            init_logging(&fallback, debug, file_name)?;
            tracing::error!(error = %format!("{e:#}"), "failed to load configuration");
            Err(e)
        }
    }
}

fn load_config(project: &Path) -> Result<IporderConfig> {
    let config = ConfigLoader::new()
        .with_project_dir(project)
        .load()
        .context("Failed to load configuration")?;
    config.validate()?;
    Ok(config)
}

fn init_logging(config: &IporderConfig, debug: bool, file_name: &'static str) -> Result<()> {
    let log_config = LogConfig {
        debug: debug || config.logging.debug,
        directory: config
            .logging
            .file
            .then(|| config.logging.directory.clone()),
        file_name,
    };
    if let Some(path) = logging::init(&log_config)? {
        tracing::debug!(path = %path.display(), "writing log file");
    }
    Ok(())
}
