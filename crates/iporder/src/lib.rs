//! Reorders SQLite device tables by IPv4 address.
//!
//! Provides:
//! - Dynamic discovery of the IP column (case-insensitive `ipv4` match)
//! - Numeric, stable sorting by address
//! - Dense primary-key renumbering (`1..=N`)
//! - Transactional replace, so a failed write leaves the table untouched
//! - A small script exporter that concatenates `.sh`/`.py` files
//!
//! # Example
//!
//! ```no_run
//! use iporder::{Reorderer, SqliteStore};
//!
//! let mut store = SqliteStore::open("network_devices.db")?;
//! let report = Reorderer::new().run(&mut store, "devices")?;
//! println!("reordered {} rows by {}", report.rows, report.ip_column);
//! # Ok::<(), iporder::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod ipv4;
pub mod record;
pub mod reorder;
pub mod schema;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{Error, Result, SchemaError};
pub use export::{ExportReport, ScriptExporter};
pub use ipv4::Ipv4Key;
pub use record::{Record, Table, Value};
pub use reorder::{ReorderedTable, reorder};
pub use schema::{ColumnSelector, DEFAULT_IP_PATTERN, find_ip_column};
pub use store::{SqliteStore, TableStore, sqlite_version};

use serde::Serialize;
use tracing::{debug, info, warn};

/// Outcome of a reorder run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReorderReport {
    pub table: String,
    pub ip_column: String,
    pub rows: usize,
    pub renumbered: usize,
    pub first: Option<Record>,
    /// True when nothing was written.
    pub dry_run: bool,
}

impl ReorderReport {
    /// Summarizes a computed reorder of `table`.
    pub fn from_plan(table: &str, plan: &ReorderedTable, dry_run: bool) -> Self {
        Self {
            table: table.to_string(),
            ip_column: plan.ip_column_name().to_string(),
            rows: plan.table.len(),
            renumbered: plan.renumbered,
            first: plan.first().cloned(),
            dry_run,
        }
    }
}

/// Loads a table, reorders it, and writes it back.
#[derive(Debug, Clone, Default)]
pub struct Reorderer {
    selector: ColumnSelector,
    dry_run: bool,
}

impl Reorderer {
    /// Creates a reorderer that matches the IP column by `ipv4`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selector(mut self, selector: ColumnSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Computes the new order without writing it.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Computes the reordered table without touching the store.
    pub fn plan<S: TableStore>(&self, store: &S, table: &str) -> Result<ReorderedTable> {
        info!(table, "starting reorder");

        let snapshot = store.load(table)?;
        info!(table, columns = ?snapshot.columns, "table structure retrieved");

        if snapshot.is_empty() {
            warn!(table, "no rows found");
            return Err(Error::Empty(table.to_string()));
        }
        info!(table, rows = snapshot.len(), "rows found, sorting");

        let reordered = reorder(table, &snapshot, &self.selector)?;
        debug!(column = reordered.ip_column_name(), "found IP column");
        if let Some(first) = reordered.first() {
            info!(row = %first, "first row after sorting");
        }

        Ok(reordered)
    }

    /// Reorders `table` in `store` and reports what changed.
    pub fn run<S: TableStore>(&self, store: &mut S, table: &str) -> Result<ReorderReport> {
        let reordered = self.plan(store, table)?;

        if self.dry_run {
            info!(table, "dry run, table left unchanged");
        } else {
            store.replace(table, &reordered.table)?;
            info!(table, rows = reordered.table.len(), "table reordered and updated");
        }

        Ok(ReorderReport::from_plan(table, &reordered, self.dry_run))
    }
}
