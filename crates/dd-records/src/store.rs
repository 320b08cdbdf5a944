//! Record storage API.
//!
//! Appends are a read-modify-write of the whole file. Two processes (or two
//! sessions) appending at the same moment race on that cycle and the later
//! write silently drops the earlier submission. There is no locking.
//!
//! The new contents go to a sibling `<file>.tmp` that is then renamed over
//! the data file, so a failed write leaves the previous file in place.

use crate::types::{RECORD_COLUMNS, Record, Table};
use crate::{StoreError, StoreResult};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for `file_name` inside `dir`, creating the directory if needed.
    pub fn in_dir(dir: &Path, file_name: &str) -> StoreResult<Self> {
        if file_name.is_empty() {
            return Err(StoreError::InvalidPath {
                message: "data file name is empty".to_string(),
            });
        }
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(Self::new(dir.join(file_name)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the file exists and holds at least one byte.
    pub fn exists(&self) -> bool {
        fs::metadata(&self.path)
            .map(|meta| meta.is_file() && meta.len() > 0)
            .unwrap_or(false)
    }

    /// Current file contents, or `None` when the file is missing or empty.
    pub fn read_table(&self) -> StoreResult<Option<Table>> {
        if !self.exists() {
            return Ok(None);
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let headers = reader.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for row in reader.records() {
            let row = row?;
            rows.push(row.iter().map(str::to_string).collect());
        }

        Ok(Some(Table { headers, rows }))
    }

    /// Stamp and persist a new submission.
    pub fn append(&self, category: &str, value: &str) -> StoreResult<Record> {
        let record = Record::new(category, value);
        self.append_record(&record)?;
        Ok(record)
    }

    /// Add one row at the end of the file, creating the file if needed.
    ///
    /// Existing cells are written back verbatim. Record columns missing from
    /// an existing header are appended to it, with empty cells for older
    /// rows. A file that fails to parse is left untouched.
    pub fn append_record(&self, record: &Record) -> StoreResult<()> {
        let mut table = match self.read_table()? {
            Some(table) => table,
            None => {
                tracing::info!(path = %self.path.display(), "creating data file");
                Table::with_headers(RECORD_COLUMNS)
            }
        };

        for column in RECORD_COLUMNS {
            if !table.has_column(column) {
                tracing::warn!(path = %self.path.display(), column, "adding missing column");
                table.add_column(column);
            }
        }

        let row = table
            .headers
            .iter()
            .map(|header| record.field(header).unwrap_or_default().to_string())
            .collect();
        table.rows.push(row);

        self.write_table(&table)?;
        tracing::debug!(
            path = %self.path.display(),
            rows = table.len(),
            category = %record.category,
            "appended record"
        );
        Ok(())
    }

    /// All rows mapped onto [`Record`]. Missing columns read as empty strings.
    pub fn load_records(&self) -> StoreResult<Vec<Record>> {
        let Some(table) = self.read_table()? else {
            return Ok(Vec::new());
        };

        let records = (0..table.len())
            .map(|row| Record {
                timestamp: table.cell(row, "timestamp").unwrap_or_default().to_string(),
                category: table.cell(row, "category").unwrap_or_default().to_string(),
                value: table.cell(row, "value").unwrap_or_default().to_string(),
            })
            .collect();
        Ok(records)
    }

    fn write_table(&self, table: &Table) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let staging = self.staging_path();
        let written = Self::write_rows(&staging, table).and_then(|()| {
            fs::rename(&staging, &self.path)?;
            Ok(())
        });
        if written.is_err() && staging.is_file() {
            let _ = fs::remove_file(&staging);
        }
        written
    }

    fn write_rows(path: &Path, table: &Table) -> StoreResult<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&table.headers)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
