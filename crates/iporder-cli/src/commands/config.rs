//! Configuration management commands.

use anyhow::{Context, Result};
use iporder_config::{ConfigLoader, IporderConfig, Paths};
use std::path::Path;

use crate::style::colors::{Paint, Tone};
use crate::style::{Status, print_status};

/// Show the effective (merged) configuration.
pub fn show(project: &Path, format: &str) -> Result<()> {
    let config = IporderConfig::load_from_dir(project).context("Failed to load configuration")?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        "toml" => {
            let toml_str = toml::to_string_pretty(&config)?;
            println!("{toml_str}");
        }
        _ => {
            println!("{}", "iporder Configuration".paint(Tone::Title));
            println!("=====================\n");

            println!("Database:");
            println!("  Path: {}", config.database.path.display());
            println!("  Table: {}", config.database.table);
            println!();

            println!("Reorder:");
            println!("  IP column pattern: {}", config.reorder.ip_column_pattern);
            println!();

            println!("Logging:");
            println!("  Directory: {}", config.logging.directory.display());
            println!("  Debug: {}", config.logging.debug);
            println!("  File: {}", config.logging.file);
            println!();

            println!("Export:");
            println!("  Output file: {}", config.export.output_file);
            println!("  Extensions: {}", config.export.extensions.join(", "));
        }
    }

    Ok(())
}

/// Validate configuration files.
pub fn validate(project: &Path) -> Result<()> {
    println!("Validating configuration in {}...", project.display());

    if !Paths::is_initialized(project) {
        print_status(Status::Warn, "No iporder.toml found, checking defaults and environment only.");
    }

    // Parse each file on its own first so errors name the offending file.
    for file in [
        Paths::project_config_file(project),
        Paths::local_config_file(project),
    ] {
        if file.exists() {
            Paths::read_toml::<toml::Table>(&file)?;
        }
    }

    let config = ConfigLoader::new()
        .with_project_dir(project)
        .load()
        .context("Failed to load configuration")?;
    config.validate()?;

    print_status(Status::Ok, "Configuration is valid");
    Ok(())
}
