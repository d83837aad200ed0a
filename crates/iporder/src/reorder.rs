//! Sort-by-IPv4 and dense ID renumbering.
//!
//! The transform is pure: it takes a [`Table`] snapshot and returns a new
//! one. Every IP value is parsed before anything is sorted, so a single
//! malformed address rejects the whole table.

use crate::error::{Error, Result};
use crate::ipv4::Ipv4Key;
use crate::record::{Record, Table};
use crate::schema::ColumnSelector;

/// Output of [`reorder`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderedTable {
    /// The renumbered table, rows in ascending IP order.
    pub table: Table,
    /// Index of the IP column within the schema.
    pub ip_column: usize,
    /// Number of rows whose primary key changed.
    pub renumbered: usize,
}

impl ReorderedTable {
    pub fn ip_column_name(&self) -> &str {
        &self.table.columns[self.ip_column]
    }

    pub fn first(&self) -> Option<&Record> {
        self.table.records.first()
    }
}

/// Sorts `table` by its IP column and reassigns IDs as `1..=N`.
///
/// `name` is only used for error messages.
pub fn reorder(name: &str, table: &Table, selector: &ColumnSelector) -> Result<ReorderedTable> {
    if table.is_empty() {
        return Err(Error::Empty(name.to_string()));
    }

    let ip_column = selector.resolve(&table.columns)?;

    let mut keyed = Vec::with_capacity(table.len());
    for (row, record) in table.records.iter().enumerate() {
        let value = record.get(ip_column).ok_or_else(|| Error::Validation {
            row,
            id: display_id(record),
            value: String::new(),
        })?;
        let key = Ipv4Key::from_value(value).ok_or_else(|| Error::Validation {
            row,
            id: display_id(record),
            value: value.to_string(),
        })?;
        keyed.push((key, record));
    }

    // `sort_by_key` is stable: equal addresses keep their input order.
    keyed.sort_by_key(|(key, _)| *key);

    let mut renumbered = 0;
    let records = keyed
        .into_iter()
        .enumerate()
        .map(|(position, (_, record))| {
            let id = position as i64 + 1;
            let next = record.with_id(id);
            if next.id() != record.id() {
                renumbered += 1;
            }
            next
        })
        .collect();

    Ok(ReorderedTable {
        table: Table::new(table.columns.clone(), records),
        ip_column,
        renumbered,
    })
}

fn display_id(record: &Record) -> String {
    record.id().map_or_else(|| "?".to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;
    use crate::record::Value;

    fn devices(rows: &[(i64, &str, &str)]) -> Table {
        Table::new(
            vec!["id".into(), "name".into(), "ipv4".into()],
            rows.iter()
                .map(|(id, name, ip)| Record::new(vec![(*id).into(), (*name).into(), (*ip).into()]))
                .collect(),
        )
    }

    #[test]
    fn test_stable_tie_break_example() {
        let input = devices(&[(7, "B", "10.0.0.5"), (3, "A", "10.0.0.1"), (9, "C", "10.0.0.5")]);
        let out = reorder("devices", &input, &ColumnSelector::default()).unwrap();

        assert_eq!(
            out.table,
            devices(&[(1, "A", "10.0.0.1"), (2, "B", "10.0.0.5"), (3, "C", "10.0.0.5")])
        );
        assert_eq!(out.ip_column, 2);
        assert_eq!(out.ip_column_name(), "ipv4");
        assert_eq!(out.renumbered, 3);
    }

    #[test]
    fn test_numeric_ordering() {
        let input = devices(&[(1, "ten", "10.0.0.10"), (2, "nine", "10.0.0.9"), (3, "two", "2.0.0.0")]);
        let out = reorder("devices", &input, &ColumnSelector::default()).unwrap();

        let names: Vec<_> = out.table.records.iter().map(|r| r.values()[1].clone()).collect();
        assert_eq!(names, vec![Value::from("two"), "nine".into(), "ten".into()]);
    }

    #[test]
    fn test_already_ordered_table_is_unchanged() {
        let input = devices(&[(1, "a", "10.0.0.1"), (2, "b", "10.0.0.2")]);
        let out = reorder("devices", &input, &ColumnSelector::default()).unwrap();

        assert_eq!(out.table, input);
        assert_eq!(out.renumbered, 0);
    }

    #[test]
    fn test_empty_table() {
        let input = devices(&[]);
        let err = reorder("devices", &input, &ColumnSelector::default()).unwrap_err();
        assert!(matches!(err, Error::Empty(ref t) if t == "devices"));
        assert!(err.is_benign());
    }

    #[test]
    fn test_malformed_ip_rejects_table() {
        let input = devices(&[(1, "a", "10.0.0.1"), (2, "b", "999.999.1.1")]);
        let err = reorder("devices", &input, &ColumnSelector::default()).unwrap_err();

        match err {
            Error::Validation { row, id, value } => {
                assert_eq!(row, 1);
                assert_eq!(id, "2");
                assert_eq!(value, "999.999.1.1");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_null_ip_rejects_table() {
        let mut input = devices(&[(1, "a", "10.0.0.1")]);
        input.records[0].0[2] = Value::Null;
        let err = reorder("devices", &input, &ColumnSelector::default()).unwrap_err();
        assert!(matches!(err, Error::Validation { ref value, .. } if value == "NULL"));
    }

    #[test]
    fn test_missing_ip_column() {
        let input = Table::new(
            vec!["id".into(), "name".into()],
            vec![Record::new(vec![1.into(), "a".into()])],
        );
        let err = reorder("devices", &input, &ColumnSelector::default()).unwrap_err();
        assert!(matches!(err, Error::Schema(SchemaError::MissingColumn { .. })));
    }

    #[test]
    fn test_extra_columns_are_carried_through() {
        let input = Table::new(
            vec!["id".into(), "ipv4_address".into(), "mac".into(), "rack".into()],
            vec![
                Record::new(vec![10.into(), "10.1.0.2".into(), "aa:bb".into(), Value::Integer(4)]),
                Record::new(vec![20.into(), "10.1.0.1".into(), Value::Null, Value::Real(1.5)]),
            ],
        );
        let out = reorder("devices", &input, &ColumnSelector::default()).unwrap();

        assert_eq!(
            out.table.records,
            vec![
                Record::new(vec![1.into(), "10.1.0.1".into(), Value::Null, Value::Real(1.5)]),
                Record::new(vec![2.into(), "10.1.0.2".into(), "aa:bb".into(), Value::Integer(4)]),
            ]
        );
    }
}
