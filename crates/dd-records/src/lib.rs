//! dd-records: survey record persistence in a flat CSV file.

pub mod store;
pub mod types;

pub use store::RecordStore;
pub use types::*;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}
