//! ISO-8601 timestamps for submitted records.
//!
//! Records are stamped with the local wall clock and no offset, e.g.
//! `2025-10-16T14:03:27.512904`. Reading is more lenient so hand-edited
//! files still chart.

use chrono::{DateTime, Local, NaiveDateTime};

use crate::{CoreError, CoreResult};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

const FALLBACK_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn now_iso8601() -> String {
    format_timestamp(Local::now().naive_local())
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored timestamp. RFC 3339 values with an offset are converted
/// to their naive UTC time.
pub fn parse_timestamp(raw: &str) -> CoreResult<NaiveDateTime> {
    let trimmed = raw.trim();
    for format in FALLBACK_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(ts);
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|ts| ts.naive_utc())
        .map_err(|_| CoreError::Timestamp {
            raw: raw.to_string(),
        })
}

/// Seconds since the Unix epoch, with the sub-second part as a fraction.
pub fn epoch_seconds(ts: NaiveDateTime) -> f64 {
    let utc = ts.and_utc();
    utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_micros()) / 1_000_000.0
}
