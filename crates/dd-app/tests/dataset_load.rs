use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use dd_app::{LoadStatus, load_csv, load_json};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

#[test]
fn zero_byte_csv_is_not_found() {
    let dir = unique_temp_dir("dd_app_zero_csv");
    let path = dir.join("data.csv");
    fs::write(&path, "").unwrap();

    let loaded = load_csv(&path);
    assert_eq!(loaded.status, LoadStatus::NotFound);
    assert!(loaded.data.is_empty());
    assert!(loaded.data.headers.is_empty());
}

#[test]
fn header_only_csv_loads_empty() {
    let dir = unique_temp_dir("dd_app_header_csv");
    let path = dir.join("data.csv");
    fs::write(&path, "timestamp,category,value\n").unwrap();

    let loaded = load_csv(&path);
    assert!(loaded.is_loaded());
    assert!(loaded.data.is_empty());
    assert!(loaded.data.has_column("category"));
}

#[test]
fn ragged_csv_is_a_parse_error() {
    let dir = unique_temp_dir("dd_app_ragged_csv");
    let path = dir.join("data.csv");
    fs::write(&path, "timestamp,category,value\nt1,A\n").unwrap();

    let loaded = load_csv(&path);
    match &loaded.status {
        LoadStatus::ParseError(message) => assert!(!message.is_empty()),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(loaded.data.is_empty());
}

#[test]
fn csv_cells_are_kept_verbatim() {
    let dir = unique_temp_dir("dd_app_verbatim_csv");
    let path = dir.join("data.csv");
    fs::write(&path, "timestamp,category,value\nt1,A,1.50\nt2,B,007\n").unwrap();

    let loaded = load_csv(&path);
    assert_eq!(loaded.data.column("value"), Some(vec!["1.50", "007"]));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = unique_temp_dir("dd_app_bad_json");
    let path = dir.join("data.json");
    fs::write(&path, "{\"data_points\": [").unwrap();

    let loaded = load_json(&path);
    match &loaded.status {
        LoadStatus::ParseError(message) => assert!(!message.is_empty()),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert_eq!(loaded.data, serde_json::json!({}));
}

#[test]
fn valid_json_loads() {
    let dir = unique_temp_dir("dd_app_good_json");
    let path = dir.join("data.json");
    fs::write(&path, r#"{"data_points": [{"label": "x", "value": 2}]}"#).unwrap();

    let loaded = load_json(&path);
    assert!(loaded.is_loaded());
    assert_eq!(loaded.data["data_points"][0]["label"], "x");
}
