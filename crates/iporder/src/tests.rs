//! End-to-end tests for `Reorderer` against SQLite and in-memory stores.

#![allow(clippy::unwrap_used)] // Tests use unwrap for simplicity


use std::cell::Cell;
use std::collections::HashMap;

use crate::{
    ColumnSelector, Error, Record, Reorderer, Result, SchemaError, SqliteStore, Table,
    TableStore, Value,
};

// ============================================================================
// Mock Store
// ============================================================================

/// In-memory store that can be told to fail on replace.
#[derive(Debug, Default)]
struct MockStore {
    tables: HashMap<String, Table>,
    fail_replace: bool,
    replace_calls: usize,
    schema_calls: Cell<usize>,
}

impl MockStore {
    fn with_table(name: &str, table: Table) -> Self {
        let mut tables = HashMap::new();
        tables.insert(name.to_string(), table);
        Self {
            tables,
            ..Default::default()
        }
    }
}

impl TableStore for MockStore {
    fn schema(&self, table: &str) -> Result<Vec<String>> {
        self.schema_calls.set(self.schema_calls.get() + 1);
        self.tables
            .get(table)
            .map(|t| t.columns.clone())
            .ok_or_else(|| Error::NotFound(format!("table '{table}'")))
    }

    fn load(&self, table: &str) -> Result<Table> {
        self.tables
            .get(table)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("table '{table}'")))
    }

    fn replace(&mut self, table: &str, contents: &Table) -> Result<()> {
        self.replace_calls += 1;
        if self.fail_replace {
            return Err(Error::Storage(rusqlite::Error::InvalidQuery));
        }
        self.tables.insert(table.to_string(), contents.clone());
        Ok(())
    }
}

fn devices(rows: &[(i64, &str, &str)]) -> Table {
    Table::new(
        vec!["id".into(), "hostname".into(), "IPv4_Address".into()],
        rows.iter()
            .map(|(id, name, ip)| Record::new(vec![(*id).into(), (*name).into(), (*ip).into()]))
            .collect(),
    )
}

fn sqlite_devices(rows: &[(i64, &str, &str)]) -> SqliteStore {
    let store = SqliteStore::in_memory().unwrap();
    store
        .connection()
        .execute_batch(
            "CREATE TABLE devices (id INTEGER PRIMARY KEY, hostname TEXT, IPv4_Address TEXT)",
        )
        .unwrap();
    for (id, name, ip) in rows {
        store
            .connection()
            .execute(
                "INSERT INTO devices VALUES (?1, ?2, ?3)",
                rusqlite::params![id, name, ip],
            )
            .unwrap();
    }
    store
}

// ============================================================================
// SQLite
// ============================================================================

#[test]
fn reorders_sqlite_table_in_place() {
    let mut store = sqlite_devices(&[
        (7, "B", "10.0.0.5"),
        (3, "A", "10.0.0.1"),
        (9, "C", "10.0.0.5"),
    ]);

    let report = Reorderer::new().run(&mut store, "devices").unwrap();
    assert_eq!(report.rows, 3);
    assert_eq!(report.ip_column, "IPv4_Address");
    assert!(!report.dry_run);

    // Input was read in rowid order: 3 (A), 7 (B), 9 (C).
    let table = store.load("devices").unwrap();
    assert_eq!(
        table,
        devices(&[(1, "A", "10.0.0.1"), (2, "B", "10.0.0.5"), (3, "C", "10.0.0.5")])
    );
    assert_eq!(
        report.first,
        Some(Record::new(vec![1.into(), "A".into(), "10.0.0.1".into()]))
    );
}

#[test]
fn second_run_is_idempotent() {
    let mut store = sqlite_devices(&[(4, "x", "192.168.0.20"), (8, "y", "192.168.0.3")]);

    Reorderer::new().run(&mut store, "devices").unwrap();
    let once = store.load("devices").unwrap();

    let report = Reorderer::new().run(&mut store, "devices").unwrap();
    assert_eq!(report.renumbered, 0);
    assert_eq!(store.load("devices").unwrap(), once);
}

#[test]
fn empty_sqlite_table_is_untouched() {
    let mut store = sqlite_devices(&[]);
    let err = Reorderer::new().run(&mut store, "devices").unwrap_err();

    assert!(matches!(err, Error::Empty(_)));
    assert!(store.load("devices").unwrap().is_empty());
}

#[test]
fn malformed_ip_leaves_sqlite_table_unchanged() {
    let mut store = sqlite_devices(&[(5, "a", "10.0.0.2"), (6, "b", "999.999.1.1")]);
    let before = store.load("devices").unwrap();

    let err = Reorderer::new().run(&mut store, "devices").unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(store.load("devices").unwrap(), before);
}

#[test]
fn missing_table_is_not_found() {
    let mut store = sqlite_devices(&[]);
    let err = Reorderer::new().run(&mut store, "routers").unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn ambiguous_columns_need_an_explicit_name() {
    let mut store = SqliteStore::in_memory().unwrap();
    store
        .connection()
        .execute_batch(
            "CREATE TABLE devices (id INTEGER PRIMARY KEY, ipv4_lan TEXT, ipv4_mgmt TEXT);
             INSERT INTO devices VALUES (1, '10.0.0.9', '172.16.0.1');
             INSERT INTO devices VALUES (2, '10.0.0.10', '172.16.0.0');",
        )
        .unwrap();

    let err = Reorderer::new().run(&mut store, "devices").unwrap_err();
    assert!(matches!(
        err,
        Error::Schema(SchemaError::AmbiguousColumn { .. })
    ));

    let report = Reorderer::new()
        .with_selector(ColumnSelector::Named("ipv4_mgmt".into()))
        .run(&mut store, "devices")
        .unwrap();
    assert_eq!(report.ip_column, "ipv4_mgmt");

    let table = store.load("devices").unwrap();
    assert_eq!(table.records[0].values()[2], Value::from("172.16.0.0"));
    assert_eq!(table.records[0].id(), Some(&Value::Integer(1)));
}

// ============================================================================
// Dry run and failure handling
// ============================================================================

#[test]
fn dry_run_does_not_write() {
    let input = devices(&[(7, "b", "10.0.0.2"), (3, "a", "10.0.0.1")]);
    let mut store = MockStore::with_table("devices", input.clone());

    let report = Reorderer::new()
        .dry_run(true)
        .run(&mut store, "devices")
        .unwrap();

    assert!(report.dry_run);
    assert_eq!(report.renumbered, 2);
    assert_eq!(store.replace_calls, 0);
    assert_eq!(store.tables["devices"], input);
}

#[test]
fn storage_failure_is_surfaced() {
    let mut store = MockStore::with_table("devices", devices(&[(1, "a", "10.0.0.1")]));
    store.fail_replace = true;

    let err = Reorderer::new().run(&mut store, "devices").unwrap_err();
    assert!(matches!(err, Error::Storage(_)));
    assert_eq!(store.replace_calls, 1);
}

#[test]
fn validation_failure_never_reaches_replace() {
    let mut store = MockStore::with_table("devices", devices(&[(1, "a", "not-an-ip")]));

    let err = Reorderer::new().run(&mut store, "devices").unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert_eq!(store.replace_calls, 0);
}

#[test]
fn plan_reads_the_schema_from_the_snapshot() {
    let store = MockStore::with_table("devices", devices(&[(1, "a", "10.0.0.1")]));

    let plan = Reorderer::new().plan(&store, "devices").unwrap();
    assert_eq!(plan.ip_column_name(), "IPv4_Address");
    assert_eq!(store.schema_calls.get(), 0);
}

#[test]
fn already_ordered_ids_are_not_counted_as_renumbered() {
    let input = devices(&[(2, "b", "10.0.0.2"), (1, "a", "10.0.0.1")]);
    let mut store = MockStore::with_table("devices", input);

    let report = Reorderer::new()
        .dry_run(true)
        .run(&mut store, "devices")
        .unwrap();
    assert_eq!(report.renumbered, 0);
}
