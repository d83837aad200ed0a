//! Script export: concatenates shell and Python scripts into one text file.
//!
//! Each script is written as
//!
//! ```text
//! ===== <filename> =====
//! <contents>
//!
//! ```
//!
//! Files are visited in filename order. A script that cannot be read is
//! logged and skipped; only a failure to write the output aborts the export.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Default output file name, created inside the exported directory.
pub const DEFAULT_OUTPUT_FILE: &str = "exported_scripts.txt";

/// Default script extensions.
pub const DEFAULT_EXTENSIONS: &[&str] = &["sh", "py"];

/// Summary of one export run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub output: PathBuf,
    pub exported: Vec<String>,
    pub failed: Vec<String>,
}

/// Concatenates scripts from a directory.
#[derive(Debug, Clone)]
pub struct ScriptExporter {
    output_file: String,
    extensions: Vec<String>,
}

impl Default for ScriptExporter {
    fn default() -> Self {
        Self {
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
        }
    }
}

impl ScriptExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output file name (relative to the exported directory).
    pub fn with_output_file(mut self, name: impl Into<String>) -> Self {
        self.output_file = name.into();
        self
    }

    /// Sets the extensions (without the dot) that mark a file as a script.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.into().trim_start_matches('.').to_string())
            .collect();
        self
    }

    fn is_script(&self, name: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| name.strip_suffix(ext.as_str()).is_some_and(|s| s.ends_with('.')))
    }

    /// Lists script file names in `dir`, sorted.
    pub fn discover(&self, dir: &Path) -> Result<Vec<String>> {
        let entries = fs::read_dir(dir).map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.is_script(&name) {
                names.push(name);
            }
        }
        names.sort();

        Ok(names)
    }

    /// Exports every script in `dir` into the output file inside `dir`.
    pub fn export(&self, dir: impl AsRef<Path>) -> Result<ExportReport> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::NotFound(format!("directory {}", dir.display())));
        }

        info!(directory = %dir.display(), "starting script export");
        let output = dir.join(&self.output_file);
        let scripts = self.discover(dir)?;

        let io_err = |source| Error::Io {
            path: output.clone(),
            source,
        };
        let file = fs::File::create(&output).map_err(io_err)?;
        let mut out = BufWriter::new(file);

        let mut report = ExportReport {
            output: output.clone(),
            ..Default::default()
        };

        for name in scripts {
            debug!(file = %name, "processing file");
            let contents = match fs::read_to_string(dir.join(&name)) {
                Ok(contents) => contents,
                Err(e) => {
                    error!(file = %name, error = %e, "error reading script");
                    report.failed.push(name);
                    continue;
                }
            };

            write!(out, "===== {name} =====\n{contents}\n\n").map_err(io_err)?;
            info!(file = %name, "exported");
            report.exported.push(name);
        }

        out.flush().map_err(io_err)?;
        info!(
            output = %output.display(),
            exported = report.exported.len(),
            failed = report.failed.len(),
            "scripts exported"
        );

        Ok(report)
    }
}
