//! Dataset loading for the survey CSV and the static JSON document.
//!
//! Loading never fails. A missing file or a parse failure yields an empty
//! structure together with a [`LoadStatus`] the caller renders as a notice.

use std::path::Path;

use dd_records::{RecordStore, Table};
use serde_json::{Map, Value};

use crate::charts::Notice;

/// Parsed JSON file. An empty document is an empty object.
pub type Document = Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Csv,
    Json,
}

impl SourceKind {
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Csv => "CSV",
            SourceKind::Json => "JSON",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    /// Missing, or a zero-byte CSV.
    NotFound,
    ParseError(String),
}

impl LoadStatus {
    /// User-facing message for a load attempt of `file_name`.
    pub fn notice(&self, file_name: &str, kind: SourceKind) -> Notice {
        match self {
            LoadStatus::Loaded => Notice::Success(format!("Loaded {file_name} successfully.")),
            LoadStatus::NotFound => Notice::Warning(format!("{file_name} not found.")),
            LoadStatus::ParseError(message) => {
                Notice::Error(format!("Error loading {}: {message}", kind.label()))
            }
        }
    }
}

/// Loaded data plus how the load went.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub data: T,
    pub status: LoadStatus,
}

impl<T> Loaded<T> {
    pub fn is_loaded(&self) -> bool {
        self.status == LoadStatus::Loaded
    }
}

/// Read the survey CSV. Cells are kept verbatim.
pub fn load_csv(path: &Path) -> Loaded<Table> {
    match RecordStore::new(path).read_table() {
        Ok(Some(table)) => {
            tracing::debug!(path = %path.display(), rows = table.len(), "loaded csv");
            Loaded {
                data: table,
                status: LoadStatus::Loaded,
            }
        }
        Ok(None) => {
            tracing::debug!(path = %path.display(), "csv missing or empty");
            Loaded {
                data: Table::empty(),
                status: LoadStatus::NotFound,
            }
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "csv failed to parse");
            Loaded {
                data: Table::empty(),
                status: LoadStatus::ParseError(err.to_string()),
            }
        }
    }
}

/// Read the static JSON document.
pub fn load_json(path: &Path) -> Loaded<Document> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "json missing");
        return Loaded {
            data: empty_document(),
            status: LoadStatus::NotFound,
        };
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(|err| err.to_string())
        .and_then(|content| {
            serde_json::from_str::<Value>(&content).map_err(|err| err.to_string())
        });

    match parsed {
        Ok(document) => Loaded {
            data: document,
            status: LoadStatus::Loaded,
        },
        Err(message) => {
            tracing::warn!(path = %path.display(), error = %message, "json failed to parse");
            Loaded {
                data: empty_document(),
                status: LoadStatus::ParseError(message),
            }
        }
    }
}

pub fn empty_document() -> Document {
    Value::Object(Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_match_status() {
        assert_eq!(
            LoadStatus::Loaded.notice("data.csv", SourceKind::Csv),
            Notice::Success("Loaded data.csv successfully.".to_string())
        );
        assert_eq!(
            LoadStatus::NotFound.notice("data.json", SourceKind::Json),
            Notice::Warning("data.json not found.".to_string())
        );
        assert_eq!(
            LoadStatus::ParseError("bad".into()).notice("data.json", SourceKind::Json),
            Notice::Error("Error loading JSON: bad".to_string())
        );
    }

    #[test]
    fn missing_files_are_not_found() {
        let csv = load_csv(Path::new("/nonexistent/dd/data.csv"));
        assert_eq!(csv.status, LoadStatus::NotFound);
        assert!(csv.data.is_empty());

        let json = load_json(Path::new("/nonexistent/dd/data.json"));
        assert_eq!(json.status, LoadStatus::NotFound);
        assert_eq!(json.data, empty_document());
    }
}
