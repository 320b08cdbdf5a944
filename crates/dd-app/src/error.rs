//! Error types for the dd-app service layer.

use std::path::PathBuf;

/// Application error shared by the CLI and GUI frontends.
///
/// Loading and charting never produce one of these; they degrade to a
/// [`crate::Notice`] instead. Only writes and configuration can fail.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Record store error: {0}")]
    Store(#[from] dd_records::StoreError),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
