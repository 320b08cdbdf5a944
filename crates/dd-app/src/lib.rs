//! Shared application service layer for datadash.
//!
//! Both the CLI and the desktop frontend go through this crate: it resolves
//! the data files, loads them tolerantly, keeps per-session selections and
//! turns a snapshot plus a selection into chart data.

pub mod charts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod selection;
pub mod survey_service;

// Re-export key types for convenience
pub use charts::{
    CategoryLineChart, ChartOutcome, Notice, RangeScatterChart, ScatterPoint, StaticPoint,
    category_line_chart, range_scatter_chart, static_bar_chart,
};
pub use config::DashboardConfig;
pub use dataset::{Document, LoadStatus, Loaded, SourceKind, load_csv, load_json};
pub use error::{AppError, AppResult};
pub use selection::{CategorySlot, RangeSlot, SelectionState, SessionId, SessionRegistry};
pub use survey_service::{Submission, current_data, current_data_notice, submit};

pub use dd_records::{Record, RecordStore, Table};
