//! Error types for reorder and export operations.

use std::path::PathBuf;
use thiserror::Error;

/// Reorder and export errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Database file, table, or export directory does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The table schema does not carry a usable IP column.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The table has no rows to reorder.
    #[error("Table '{0}' has no rows")]
    Empty(String),

    /// A record carries a value that is not a dotted-decimal IPv4 address.
    #[error("Invalid IPv4 address in row {row} (id {id}): {value:?}")]
    Validation { row: usize, id: String, value: String },

    /// Failure inside the backing SQLite store.
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Filesystem error while exporting scripts.
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Returns true for conditions that are reported but not treated as failures.
    pub fn is_benign(&self) -> bool {
        matches!(self, Error::Empty(_))
    }
}

/// Errors from locating the IP column in a schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// No column name matched.
    #[error("No column matching '{needle}' in table columns {columns:?}")]
    MissingColumn { needle: String, columns: Vec<String> },

    /// More than one column name matched.
    #[error("Column pattern '{needle}' is ambiguous, it matches {matches:?}")]
    AmbiguousColumn { needle: String, matches: Vec<String> },

    /// The table has no column after the ID to sort on.
    #[error("Table has {0} column(s), need an ID column and an IP column")]
    TooFewColumns(usize),

    /// The IP column is the ID column.
    #[error("IP column '{0}' is the primary key column")]
    IpIsPrimaryKey(String),
}

/// Result type for reorder and export operations.
pub type Result<T> = std::result::Result<T, Error>;
