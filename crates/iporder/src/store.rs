//! Table storage backends.

use crate::error::{Error, Result};
use crate::record::{Record, Table, Value};
use rusqlite::types::{ToSqlOutput, ValueRef};
use rusqlite::{Connection, OpenFlags, ToSql, params_from_iter};
use std::path::Path;
use tracing::debug;

/// Read and replace access to whole tables.
pub trait TableStore {
    /// Returns the ordered column names of `table`.
    fn schema(&self, table: &str) -> Result<Vec<String>>;

    /// Reads every row of `table`.
    fn load(&self, table: &str) -> Result<Table>;

    /// Replaces the contents of `table` with `contents`.
    ///
    /// Either every row is replaced or the table is left untouched.
    fn replace(&mut self, table: &str, contents: &Table) -> Result<()>;
}

/// [`TableStore`] over a single SQLite connection.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens an existing database file for reading and writing.
    ///
    /// A missing file is reported as [`Error::NotFound`] rather than
    /// silently creating an empty database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::NotFound(format!(
                "database file {}",
                path.display()
            )));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(path = %path.display(), "connected to database");

        Ok(Self { conn })
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl TableStore for SqliteStore {
    fn schema(&self, table: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare(&format!("PRAGMA table_info({})", quote_ident(table)))?;
        let columns = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        if columns.is_empty() {
            return Err(Error::NotFound(format!("table '{table}'")));
        }

        Ok(columns)
    }

    fn load(&self, table: &str) -> Result<Table> {
        // Select the schema columns by name: `SELECT *` would also return
        // generated columns, which `PRAGMA table_info` leaves out.
        let columns = self.schema(table)?;
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM {}",
            column_list(&columns),
            quote_ident(table)
        ))?;

        let width = columns.len();
        let records = stmt
            .query_map([], |row| {
                let mut values = Vec::with_capacity(width);
                for i in 0..width {
                    values.push(from_value_ref(row.get_ref(i)?));
                }
                Ok(Record::new(values))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(Table::new(columns, records))
    }

    fn replace(&mut self, table: &str, contents: &Table) -> Result<()> {
        let placeholders = vec!["?"; contents.columns.len()].join(", ");
        let insert = format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            quote_ident(table),
            column_list(&contents.columns)
        );

        // Dropping `tx` without commit rolls back the delete as well.
        let tx = self.conn.transaction()?;
        let deleted = tx.execute(&format!("DELETE FROM {}", quote_ident(table)), [])?;
        debug!(table, deleted, "cleared table");
        {
            let mut stmt = tx.prepare(&insert)?;
            for record in &contents.records {
                stmt.execute(params_from_iter(record.values()))?;
            }
        }
        tx.commit()?;
        debug!(table, inserted = contents.len(), "committed reordered rows");

        Ok(())
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Value::Null => ToSqlOutput::Borrowed(ValueRef::Null),
            Value::Integer(i) => ToSqlOutput::Borrowed(ValueRef::Integer(*i)),
            Value::Real(r) => ToSqlOutput::Borrowed(ValueRef::Real(*r)),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::RawText(b) => ToSqlOutput::Borrowed(ValueRef::Text(b)),
            Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
        })
    }
}

fn from_value_ref(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(t) => match std::str::from_utf8(t) {
            Ok(s) => Value::Text(s.to_string()),
            Err(_) => Value::RawText(t.to_vec()),
        },
        ValueRef::Blob(b) => Value::Blob(b.to_vec()),
    }
}

/// Version of the linked SQLite library.
pub fn sqlite_version() -> &'static str {
    rusqlite::version()
}

fn column_list(columns: &[String]) -> String {
    columns
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quotes an SQL identifier, doubling embedded quotes.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
