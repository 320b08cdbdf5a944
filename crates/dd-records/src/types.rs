//! Record and table data types.

use serde::{Deserialize, Serialize};

/// Column order of a freshly created data file.
pub const RECORD_COLUMNS: [&str; 3] = ["timestamp", "category", "value"];

/// One survey submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub timestamp: String,
    pub category: String,
    pub value: String,
}

impl Record {
    /// Stamp a new submission with the current time. Both inputs are trimmed
    /// but otherwise stored as typed, empty strings included.
    pub fn new(category: &str, value: &str) -> Self {
        Self::with_timestamp(dd_core::now_iso8601(), category, value)
    }

    pub fn with_timestamp(timestamp: impl Into<String>, category: &str, value: &str) -> Self {
        Self {
            timestamp: timestamp.into(),
            category: category.trim().to_string(),
            value: value.trim().to_string(),
        }
    }

    /// Cell for a header name, `None` for columns a record does not carry.
    pub fn field(&self, column: &str) -> Option<&str> {
        match column {
            "timestamp" => Some(&self.timestamp),
            "category" => Some(&self.category),
            "value" => Some(&self.value),
            _ => None,
        }
    }
}

/// Verbatim contents of a CSV file: a header row and string cells.
///
/// Nothing here assumes the record columns exist; callers look them up by
/// name and must cope with `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// No data rows. A header-only table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index).map(String::as_str)
    }

    /// Every cell of one column in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }

    /// First `n` rows, headers unchanged.
    pub fn head(&self, n: usize) -> Table {
        Table {
            headers: self.headers.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Append a column, padding existing rows with empty cells.
    pub fn add_column(&mut self, name: &str) {
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(String::new());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table {
            headers: vec!["timestamp".into(), "category".into(), "value".into()],
            rows: vec![
                vec!["t1".into(), "A".into(), "1".into()],
                vec!["t2".into(), "B".into(), "x".into()],
            ],
        }
    }

    #[test]
    fn record_inputs_are_trimmed() {
        let record = Record::with_timestamp("t", "  fruit ", "\t10 ");
        assert_eq!(record.category, "fruit");
        assert_eq!(record.value, "10");
    }

    #[test]
    fn empty_inputs_are_kept() {
        let record = Record::new("   ", "");
        assert_eq!(record.category, "");
        assert_eq!(record.value, "");
        assert!(!record.timestamp.is_empty());
    }

    #[test]
    fn column_lookup_tolerates_missing_names() {
        let table = sample();
        assert_eq!(table.column("value"), Some(vec!["1", "x"]));
        assert_eq!(table.column("label"), None);
        assert_eq!(table.cell(1, "category"), Some("B"));
        assert_eq!(table.cell(5, "category"), None);
    }

    #[test]
    fn add_column_pads_rows() {
        let mut table = sample();
        table.add_column("note");
        assert_eq!(table.headers.len(), 4);
        assert!(table.rows.iter().all(|row| row.len() == 4 && row[3].is_empty()));
    }

    #[test]
    fn head_truncates_rows_only() {
        let table = sample();
        let head = table.head(1);
        assert_eq!(head.len(), 1);
        assert_eq!(head.headers, table.headers);
    }
}
