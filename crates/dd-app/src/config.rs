//! Dashboard configuration: where the data files live.

use std::path::{Path, PathBuf};

use dd_records::RecordStore;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_CSV_FILE: &str = "data.csv";
pub const DEFAULT_JSON_FILE: &str = "data.json";

/// Locations of the survey CSV and the static JSON document.
///
/// Every field is optional in YAML:
///
/// ```yaml
/// data_dir: ./data
/// csv_file: data.csv
/// json_file: data.json
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_dir: PathBuf,
    pub csv_file: String,
    pub json_file: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            csv_file: DEFAULT_CSV_FILE.to_string(),
            json_file: DEFAULT_JSON_FILE.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn csv_path(&self) -> PathBuf {
        self.data_dir.join(&self.csv_file)
    }

    pub fn json_path(&self) -> PathBuf {
        self.data_dir.join(&self.json_file)
    }

    /// Store for the survey CSV. Creates `data_dir` if it is missing.
    pub fn record_store(&self) -> AppResult<RecordStore> {
        Ok(RecordStore::in_dir(&self.data_dir, &self.csv_file)?)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.csv_file.trim().is_empty() {
            return Err(AppError::Config("csv_file must not be empty".to_string()));
        }
        if self.json_file.trim().is_empty() {
            return Err(AppError::Config("json_file must not be empty".to_string()));
        }
        Ok(())
    }

    /// Load from YAML. A relative `data_dir` is taken relative to the
    /// directory holding the config file.
    pub fn load_yaml(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: DashboardConfig = serde_yaml::from_str(&content)?;
        if config.data_dir.is_relative()
            && let Some(base) = path.parent()
        {
            config.data_dir = base.join(&config.data_dir);
        }
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            data_dir = %config.data_dir.display(),
            "loaded config"
        );
        Ok(config)
    }

    pub fn save_yaml(&self, path: &Path) -> AppResult<()> {
        self.validate()?;
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The YAML at `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::load_yaml(path),
            None => Ok(Self::default()),
        }
    }
}
