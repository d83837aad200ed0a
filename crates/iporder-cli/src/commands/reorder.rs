//! Reorder command - sorts a table by IPv4 address and renumbers its IDs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use iporder::{ColumnSelector, Error, ReorderReport, Reorderer, SqliteStore};
use iporder_config::IporderConfig;
use tracing::{error, warn};

use crate::style::colors::{Paint, Tone};
use crate::style::{
    Status, create_spinner, finish_and_clear, finish_error, info_table, print_rows_preview,
    print_status,
};

/// Arguments for `iporder reorder`.
#[derive(Debug, Clone, Default)]
pub struct ReorderArgs {
    pub database: Option<PathBuf>,
    pub table: Option<String>,
    pub ip_column: Option<String>,
    pub dry_run: bool,
    pub json: bool,
}

pub fn run(config: &IporderConfig, args: ReorderArgs) -> Result<()> {
    let database = args.database.unwrap_or_else(|| config.database.path.clone());
    let table = args.table.unwrap_or_else(|| config.database.table.clone());
    let selector = match args.ip_column {
        Some(name) => ColumnSelector::Named(name),
        None => ColumnSelector::Contains(config.reorder.ip_column_pattern.clone()),
    };

    if !args.json {
        println!(
            "Reordering {} in {}...",
            table.paint(Tone::Title),
            database.display().to_string().paint(Tone::Path)
        );
        println!();
    }

    let sp = create_spinner("Sorting rows by IPv4 address...");
    match execute(&database, &table, selector, args.dry_run) {
        Ok((report, preview)) => {
            finish_and_clear(&sp);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            if report.dry_run {
                print_status(Status::Ok, "Computed new order (dry run, nothing written)");
            } else {
                print_status(Status::Ok, "Database successfully reordered and updated");
            }
            println!();
            print_report(&report);

            if let Some((columns, rows, ip_index)) = preview {
                println!();
                print_rows_preview(&columns, &rows, Some(ip_index));
                print_status(Status::Next, "Run again without --dry-run to apply.");
            }
            Ok(())
        }
        Err(e) if e.is_benign() => {
            finish_and_clear(&sp);
            warn!(table = %table, "no rows found, nothing to reorder");
            if args.json {
                let status = serde_json::json!({ "table": table, "rows": 0, "status": "empty" });
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                print_status(
                    Status::Warn,
                    &format!("No rows found in table '{table}'. Nothing to do."),
                );
            }
            Ok(())
        }
        Err(e) => {
            finish_error(&sp, "Reorder failed");
            error!(error = %e, database = %database.display(), table = %table, "reorder failed");
            if matches!(e, Error::Schema(_)) {
                print_status(Status::Next, "Use --ip-column to name the IP column explicitly.");
            }
            Err(e).with_context(|| {
                format!("Failed to reorder table '{table}' in {}", database.display())
            })
        }
    }
}

type Preview = (Vec<String>, Vec<Vec<String>>, usize);

fn execute(
    database: &Path,
    table: &str,
    selector: ColumnSelector,
    dry_run: bool,
) -> iporder::Result<(ReorderReport, Option<Preview>)> {
    let mut store = SqliteStore::open(database)?;
    let reorderer = Reorderer::new().with_selector(selector).dry_run(dry_run);

    if dry_run {
        let plan = reorderer.plan(&store, table)?;
        let report = ReorderReport::from_plan(table, &plan, true);
        let preview = (
            plan.table.columns.clone(),
            plan.table.to_string_rows(),
            plan.ip_column,
        );
        Ok((report, Some(preview)))
    } else {
        Ok((reorderer.run(&mut store, table)?, None))
    }
}

fn print_report(report: &ReorderReport) {
    let first = report
        .first
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string);
    let entries = [
        ("Table", report.table.clone()),
        ("IP column", report.ip_column.clone()),
        ("Rows", report.rows.to_string()),
        ("IDs changed", report.renumbered.to_string()),
        ("First row", first),
    ];
    println!("{}", info_table(&entries));
}
