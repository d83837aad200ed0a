//! Initialize command - writes a default iporder.toml.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use iporder_config::{IporderConfig, Paths};

use crate::style::colors::{Paint, Tone};
use crate::style::{Status, print_command, print_field, print_status};

pub fn run(path: &Path) -> Result<()> {
    if Paths::is_initialized(path) {
        anyhow::bail!(
            "Project already initialized in {}. iporder.toml already exists.",
            path.display()
        );
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))?;

    let config_path = Paths::project_config_file(path);
    let content = toml::to_string_pretty(&IporderConfig::default())
        .context("Failed to serialize configuration")?;
    fs::write(&config_path, content).context("Failed to write iporder.toml")?;

    print_status(
        Status::Ok,
        &format!("Wrote {}", config_path.display().to_string().paint(Tone::Path)),
    );
    print_field("Local overrides", "iporder.local.toml (optional, keep out of git)");
    println!();
    print_status(Status::Next, "Reorder the configured database with:");
    print_command("iporder reorder");

    Ok(())
}
