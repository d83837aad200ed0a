//! IP column discovery.

use crate::error::SchemaError;

/// Default case-insensitive substring that identifies the IP column.
pub const DEFAULT_IP_PATTERN: &str = "ipv4";

/// How the IP column is chosen from a table's columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    /// Case-insensitive substring match; exactly one column may match.
    Contains(String),
    /// Exact (case-insensitive) column name.
    Named(String),
}

impl Default for ColumnSelector {
    fn default() -> Self {
        ColumnSelector::Contains(DEFAULT_IP_PATTERN.to_string())
    }
}

impl ColumnSelector {
    fn needle(&self) -> &str {
        match self {
            ColumnSelector::Contains(s) | ColumnSelector::Named(s) => s,
        }
    }

    fn matches(&self, column: &str) -> bool {
        let column = column.to_lowercase();
        match self {
            ColumnSelector::Contains(needle) => column.contains(&needle.to_lowercase()),
            ColumnSelector::Named(name) => column == name.to_lowercase(),
        }
    }

    /// Returns the index of the single column this selector picks.
    ///
    /// Column 0 is the primary key and is never eligible.
    pub fn resolve(&self, columns: &[String]) -> Result<usize, SchemaError> {
        if columns.len() < 2 {
            return Err(SchemaError::TooFewColumns(columns.len()));
        }

        let matches: Vec<usize> = columns
            .iter()
            .enumerate()
            .filter(|(_, name)| self.matches(name))
            .map(|(i, _)| i)
            .collect();

        match matches.as_slice() {
            [] => Err(SchemaError::MissingColumn {
                needle: self.needle().to_string(),
                columns: columns.to_vec(),
            }),
            [0] => Err(SchemaError::IpIsPrimaryKey(columns[0].clone())),
            [index] => Ok(*index),
            many => Err(SchemaError::AmbiguousColumn {
                needle: self.needle().to_string(),
                matches: many.iter().map(|&i| columns[i].clone()).collect(),
            }),
        }
    }
}

/// Finds the single column whose name contains `needle`, ignoring case.
pub fn find_ip_column(columns: &[String], needle: &str) -> Result<usize, SchemaError> {
    ColumnSelector::Contains(needle.to_string()).resolve(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_finds_column_case_insensitively() {
        let columns = cols(&["id", "hostname", "IPv4_Address", "mac"]);
        assert_eq!(find_ip_column(&columns, "ipv4"), Ok(2));
    }

    #[test]
    fn test_missing_column() {
        let columns = cols(&["id", "hostname", "mac"]);
        let err = find_ip_column(&columns, "ipv4").unwrap_err();
        assert!(matches!(err, SchemaError::MissingColumn { .. }));
    }

    #[test]
    fn test_ambiguous_column() {
        let columns = cols(&["id", "ipv4_primary", "ipv4_secondary"]);
        let err = find_ip_column(&columns, "ipv4").unwrap_err();
        assert_eq!(
            err,
            SchemaError::AmbiguousColumn {
                needle: "ipv4".to_string(),
                matches: cols(&["ipv4_primary", "ipv4_secondary"]),
            }
        );
    }

    #[test]
    fn test_named_selector_disambiguates() {
        let columns = cols(&["id", "ipv4_primary", "ipv4_secondary"]);
        let selector = ColumnSelector::Named("IPV4_SECONDARY".to_string());
        assert_eq!(selector.resolve(&columns), Ok(2));
    }

    #[test]
    fn test_primary_key_is_not_eligible() {
        let columns = cols(&["ipv4_id", "name"]);
        let err = find_ip_column(&columns, "ipv4").unwrap_err();
        assert_eq!(err, SchemaError::IpIsPrimaryKey("ipv4_id".to_string()));
    }

    #[test]
    fn test_single_column_table() {
        let err = find_ip_column(&cols(&["ipv4"]), "ipv4").unwrap_err();
        assert_eq!(err, SchemaError::TooFewColumns(1));
    }
}
