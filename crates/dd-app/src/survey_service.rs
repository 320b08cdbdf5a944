//! Survey page operations: submitting a record and showing the current data.

use std::path::Path;

use dd_records::{Record, RecordStore, Table};

use crate::charts::Notice;
use crate::dataset::{LoadStatus, Loaded, SourceKind, load_csv};
use crate::error::AppResult;

pub const SAVED_MESSAGE: &str = "Your data has been saved successfully.";
pub const NO_CURRENT_DATA: &str = "The 'data.csv' file is empty or does not exist yet.";

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub record: Record,
    pub confirmation: String,
    /// Echo of the inputs as the user typed them.
    pub echo: String,
}

/// Append one survey answer to the store.
pub fn submit(store: &RecordStore, category: &str, value: &str) -> AppResult<Submission> {
    let record = store.append(category, value)?;
    tracing::info!(
        path = %store.path().display(),
        category = %record.category,
        value = %record.value,
        "survey submission saved"
    );
    Ok(Submission {
        record,
        confirmation: SAVED_MESSAGE.to_string(),
        echo: format!("Category: {category}, Value: {value}"),
    })
}

/// Snapshot for the "current data" table under the form.
pub fn current_data(path: &Path) -> Loaded<Table> {
    load_csv(path)
}

/// Notice to show in place of the table, if any.
pub fn current_data_notice(loaded: &Loaded<Table>) -> Option<Notice> {
    match &loaded.status {
        LoadStatus::Loaded => None,
        LoadStatus::NotFound => Some(Notice::Warning(NO_CURRENT_DATA.to_string())),
        status @ LoadStatus::ParseError(_) => Some(status.notice("data.csv", SourceKind::Csv)),
    }
}
