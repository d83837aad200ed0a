//! Export command - concatenates shell and Python scripts into one file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dialoguer::Input;
use iporder::ScriptExporter;
use iporder_config::IporderConfig;
use tracing::{error, info};

use crate::style::colors::{Paint, Tone};
use crate::style::{Status, print_field, print_status};

/// Asks for the directory when none was given on the command line.
pub fn prompt_directory() -> Result<PathBuf> {
    let answer: String = Input::new()
        .with_prompt("Enter the directory path")
        .interact_text()
        .context("Failed to read directory path (pass it as an argument instead)")?;
    Ok(PathBuf::from(answer.trim()))
}

pub fn run(config: &IporderConfig, directory: &Path) -> Result<()> {
    if !directory.is_dir() {
        error!(directory = %directory.display(), "invalid directory path provided");
        anyhow::bail!("Invalid directory path provided: {}", directory.display());
    }
    info!(directory = %directory.display(), "valid directory provided");

    println!(
        "Processing directory: {}",
        directory.display().to_string().paint(Tone::Path)
    );
    println!();

    let exporter = ScriptExporter::new()
        .with_output_file(config.export.output_file.clone())
        .with_extensions(config.export.extensions.iter().cloned());

    let report = exporter.export(directory).with_context(|| {
        format!("Failed to export scripts from {}", directory.display())
    })?;

    for name in &report.exported {
        print_field("Exported", name);
    }
    for name in &report.failed {
        print_status(Status::Skipped, &format!("Could not read {name}"));
    }

    if report.exported.is_empty() && report.failed.is_empty() {
        print_status(Status::Warn, "No scripts found.");
    }

    println!();
    print_status(
        Status::Ok,
        &format!("Scripts exported successfully to: {}", report.output.display()),
    );

    Ok(())
}
