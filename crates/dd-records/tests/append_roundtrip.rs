use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use dd_records::{Record, RecordStore};
use proptest::prelude::*;

static CASE: AtomicUsize = AtomicUsize::new(0);

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let case = CASE.fetch_add(1, Ordering::Relaxed);
    dir.push(format!("{}_{}_{}", prefix, nanos, case));
    dir
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn each_append_adds_exactly_one_trailing_row(
        entries in prop::collection::vec(("[a-zA-Z ,\"]{0,8}", "[0-9x. ]{0,5}"), 1..8)
    ) {
        let dir = unique_temp_dir("dd_records_prop");
        let store = RecordStore::in_dir(&dir, "data.csv").unwrap();
        let mut expected: Vec<Record> = Vec::new();

        for (i, (category, value)) in entries.iter().enumerate() {
            let record = Record::with_timestamp(format!("t{i}"), category, value);
            store.append_record(&record).unwrap();
            expected.push(record);

            let stored = store.load_records().unwrap();
            prop_assert_eq!(&stored, &expected);
        }

        let _ = std::fs::remove_dir_all(&dir);
    }
}
