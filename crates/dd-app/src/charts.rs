//! Chart data for the visuals page.
//!
//! Each builder is a pure function of one loaded snapshot and the caller's
//! selection slot. Builders never mutate the snapshot and never fail: when
//! there is nothing to draw they return a [`Notice`] for the frontend to show
//! in place of the chart.

use dd_core::{
    checked_truncate, coerce_numeric, epoch_seconds, in_closed_range, parse_timestamp,
    truncate_to_int,
};
use dd_records::Table;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dataset::Document;
use crate::selection::{CategorySlot, RangeSlot};

pub const NO_DATA_POINTS: &str = "The JSON file does not contain a 'data_points' list.";
pub const NO_CATEGORIES: &str =
    "No categories found in data.csv. Please add data on the Survey page.";
pub const CSV_MISSING_OR_EMPTY: &str = "The 'data.csv' file is missing or empty.";
pub const NO_NUMERIC_VALUES: &str = "No numeric values available for visualization.";
pub const NO_DATA_IN_RANGE: &str = "No data within the selected range.";

pub const BAR_CAPTION: &str =
    "This static bar chart displays the data points defined in data.json.";
pub const LINE_CAPTION: &str =
    "This line chart updates automatically based on the selected category.";
pub const SCATTER_CAPTION: &str =
    "Each point represents one entry. Adjust the slider to filter results.";

/// Inline message shown instead of (or next to) a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Info(m) | Notice::Warning(m) | Notice::Error(m) => m,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome<T> {
    Ready(T),
    Notice(Notice),
}

impl<T> ChartOutcome<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            ChartOutcome::Ready(chart) => Some(chart),
            ChartOutcome::Notice(_) => None,
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        match self {
            ChartOutcome::Ready(_) => None,
            ChartOutcome::Notice(notice) => Some(notice),
        }
    }

    fn info(message: &str) -> Self {
        ChartOutcome::Notice(Notice::Info(message.to_string()))
    }

    fn warning(message: &str) -> Self {
        ChartOutcome::Notice(Notice::Warning(message.to_string()))
    }
}

/// One bar of the static chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticPoint {
    pub label: String,
    pub value: f64,
}

/// Bars for every entry of the document's `data_points`, in document order.
pub fn static_bar_chart(document: &Document) -> ChartOutcome<Vec<StaticPoint>> {
    let Some(raw) = document.get("data_points") else {
        return ChartOutcome::warning(NO_DATA_POINTS);
    };

    match parse_static_points(raw) {
        Ok(points) => ChartOutcome::Ready(points),
        Err(message) => ChartOutcome::Notice(Notice::Error(format!(
            "Error displaying static graph: {message}"
        ))),
    }
}

fn parse_static_points(raw: &Value) -> Result<Vec<StaticPoint>, String> {
    let Value::Array(entries) = raw else {
        return Err("'data_points' is not a list".to_string());
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let label = match entry.get("label") {
                Some(Value::String(label)) => label.clone(),
                Some(Value::Number(label)) => label.to_string(),
                Some(Value::Bool(label)) => label.to_string(),
                _ => return Err(format!("entry {index} has no 'label'")),
            };
            let value = match entry.get("value") {
                Some(Value::Number(value)) => value.as_f64(),
                Some(Value::String(value)) => coerce_numeric(value),
                _ => None,
            }
            .ok_or_else(|| format!("entry {index} has no numeric 'value'"))?;
            Ok(StaticPoint { label, value })
        })
        .collect()
}

/// Non-empty categories in first-seen order, without duplicates.
pub fn unique_categories(table: &Table) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for cell in table.column("category").unwrap_or_default() {
        if !cell.is_empty() && !categories.iter().any(|c| c == cell) {
            categories.push(cell.to_string());
        }
    }
    categories
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLineChart {
    /// Dropdown options.
    pub categories: Vec<String>,
    pub selected: String,
    /// `[row position in the file, value]`, in file order.
    pub points: Vec<[f64; 2]>,
}

/// Values of the selected category as a line, in insertion order.
///
/// Rows whose value does not parse as a number are dropped.
pub fn category_line_chart(
    table: &Table,
    slot: &mut CategorySlot,
) -> ChartOutcome<CategoryLineChart> {
    if table.is_empty() || !table.has_column("category") {
        return ChartOutcome::info(NO_CATEGORIES);
    }

    let categories = unique_categories(table);
    let Some(selected) = slot.get_or_init(&categories) else {
        return ChartOutcome::info(NO_CATEGORIES);
    };

    let points = (0..table.len())
        .filter(|&row| table.cell(row, "category") == Some(selected.as_str()))
        .filter_map(|row| {
            let value = coerce_numeric(table.cell(row, "value")?)?;
            Some([row as f64, value])
        })
        .collect();

    ChartOutcome::Ready(CategoryLineChart {
        categories,
        selected,
        points,
    })
}

/// One scatter marker with its tooltip fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub row: usize,
    pub timestamp: String,
    pub category: String,
    pub value: f64,
}

impl ScatterPoint {
    /// Horizontal position: epoch seconds of the timestamp, or the row
    /// position when the timestamp does not parse.
    pub fn x_position(&self) -> f64 {
        parse_timestamp(&self.timestamp)
            .map(epoch_seconds)
            .unwrap_or(self.row as f64)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RangeScatterChart {
    /// Slider limits: the observed minimum and maximum, truncated to integers.
    pub bounds: (i64, i64),
    pub selected: (i64, i64),
    pub points: Vec<ScatterPoint>,
}

/// Rows with a numeric value, as `(row, value)`.
///
/// Values whose integer part does not fit the `i64` slider are left out
/// along with text, blanks and non-finite numbers.
pub fn numeric_rows(table: &Table) -> Vec<(usize, f64)> {
    (0..table.len())
        .filter_map(|row| {
            let value = coerce_numeric(table.cell(row, "value")?)?;
            checked_truncate(value)?;
            Some((row, value))
        })
        .collect()
}

/// Truncated `(min, max)` of `values`, `None` when empty.
pub fn value_bounds(values: impl IntoIterator<Item = f64>) -> Option<(i64, i64)> {
    values
        .into_iter()
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .map(|(lo, hi)| (truncate_to_int(lo), truncate_to_int(hi)))
}

/// Rows whose value lies in the selected range, both ends inclusive.
pub fn range_scatter_chart(
    table: &Table,
    slot: &mut RangeSlot,
) -> ChartOutcome<RangeScatterChart> {
    if table.is_empty() || !table.has_column("value") {
        return ChartOutcome::warning(CSV_MISSING_OR_EMPTY);
    }

    let numeric = numeric_rows(table);
    let Some(bounds) = value_bounds(numeric.iter().map(|&(_, v)| v)) else {
        return ChartOutcome::warning(NO_NUMERIC_VALUES);
    };

    let selected = slot.get_or_init(bounds.0, bounds.1);
    let points: Vec<ScatterPoint> = numeric
        .into_iter()
        .filter(|&(_, value)| in_closed_range(value, selected.0, selected.1))
        .map(|(row, value)| ScatterPoint {
            row,
            timestamp: table.cell(row, "timestamp").unwrap_or_default().to_string(),
            category: table.cell(row, "category").unwrap_or_default().to_string(),
            value,
        })
        .collect();

    if points.is_empty() {
        return ChartOutcome::info(NO_DATA_IN_RANGE);
    }

    ChartOutcome::Ready(RangeScatterChart {
        bounds,
        selected,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(rows: &[(&str, &str)]) -> Table {
        let mut table = Table::with_headers(["timestamp", "category", "value"]);
        for (i, (category, value)) in rows.iter().enumerate() {
            table.rows.push(vec![
                format!("2025-10-01T08:00:0{i}.000000"),
                category.to_string(),
                value.to_string(),
            ]);
        }
        table
    }

    #[test]
    fn bar_chart_reads_points_in_order() {
        let doc = json!({
            "data_points": [{"label": "a", "value": 3}, {"label": "b", "value": 1.5}]
        });
        let bars = static_bar_chart(&doc);
        assert_eq!(
            bars.ready().unwrap(),
            &vec![
                StaticPoint { label: "a".into(), value: 3.0 },
                StaticPoint { label: "b".into(), value: 1.5 },
            ]
        );
    }

    #[test]
    fn bar_chart_without_data_points_warns() {
        let outcome = static_bar_chart(&json!({"other": []}));
        assert_eq!(outcome.notice(), Some(&Notice::Warning(NO_DATA_POINTS.to_string())));
        let outcome = static_bar_chart(&json!([1, 2]));
        assert_eq!(outcome.notice(), Some(&Notice::Warning(NO_DATA_POINTS.to_string())));
    }

    #[test]
    fn bar_chart_with_bad_entry_is_an_inline_error() {
        let outcome = static_bar_chart(&json!({"data_points": [{"label": "a"}]}));
        match outcome.notice() {
            Some(Notice::Error(message)) => {
                assert!(message.starts_with("Error displaying static graph:"));
                assert!(message.contains("entry 0"));
            }
            other => panic!("expected error notice, got {other:?}"),
        }

        let outcome = static_bar_chart(&json!({"data_points": "nope"}));
        assert!(matches!(outcome.notice(), Some(Notice::Error(_))));
    }

    #[test]
    fn categories_are_unique_and_skip_blanks() {
        let t = table(&[("B", "1"), ("", "2"), ("A", "3"), ("B", "4")]);
        assert_eq!(unique_categories(&t), vec!["B".to_string(), "A".to_string()]);
    }

    #[test]
    fn line_chart_drops_non_numeric_values() {
        let t = table(&[("A", "1"), ("A", "x"), ("B", "3")]);
        let mut slot = CategorySlot::default();
        slot.select("A");
        let chart = category_line_chart(&t, &mut slot);
        let chart = chart.ready().unwrap();
        assert_eq!(chart.selected, "A");
        assert_eq!(chart.points, vec![[0.0, 1.0]]);
    }

    #[test]
    fn line_chart_keeps_row_order() {
        let t = table(&[("A", "5"), ("B", "1"), ("A", "2"), ("A", "9")]);
        let mut slot = CategorySlot::default();
        let outcome = category_line_chart(&t, &mut slot);
        let chart = outcome.ready().unwrap();
        assert_eq!(chart.points, vec![[0.0, 5.0], [2.0, 2.0], [3.0, 9.0]]);
        assert_eq!(slot.selected(), Some("A"));
    }

    #[test]
    fn line_chart_without_category_column_is_info() {
        let mut t = Table::with_headers(["timestamp", "value"]);
        t.rows.push(vec!["t".into(), "1".into()]);
        let outcome = category_line_chart(&t, &mut CategorySlot::default());
        assert_eq!(outcome.notice(), Some(&Notice::Info(NO_CATEGORIES.to_string())));

        let outcome = category_line_chart(&Table::empty(), &mut CategorySlot::default());
        assert!(matches!(outcome.notice(), Some(Notice::Info(_))));
    }

    #[test]
    fn range_filter_is_inclusive() {
        let t = table(&[("A", "1"), ("A", "2"), ("B", "3"), ("B", "4"), ("C", "5")]);
        let mut slot = RangeSlot::default();
        slot.select(2, 4);
        let outcome = range_scatter_chart(&t, &mut slot);
        let chart = outcome.ready().unwrap();
        let values: Vec<f64> = chart.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
        assert_eq!(chart.bounds, (1, 5));
        assert_eq!(chart.points[1].category, "B");
    }

    #[test]
    fn range_defaults_to_truncated_bounds() {
        let t = table(&[("A", "1.7"), ("A", "oops"), ("A", "4.2")]);
        let mut slot = RangeSlot::default();
        let outcome = range_scatter_chart(&t, &mut slot);
        let chart = outcome.ready().unwrap();
        assert_eq!(chart.bounds, (1, 4));
        assert_eq!(chart.selected, (1, 4));
        // 4.2 lies above the truncated upper bound.
        assert_eq!(chart.points.len(), 1);
    }

    #[test]
    fn stale_range_yields_info() {
        let t = table(&[("A", "1"), ("A", "2")]);
        let mut slot = RangeSlot::default();
        slot.select(10, 20);
        let outcome = range_scatter_chart(&t, &mut slot);
        assert_eq!(outcome.notice(), Some(&Notice::Info(NO_DATA_IN_RANGE.to_string())));
        assert_eq!(slot.selected(), Some((10, 20)));
    }

    #[test]
    fn scatter_warnings() {
        let outcome = range_scatter_chart(&Table::empty(), &mut RangeSlot::default());
        assert_eq!(
            outcome.notice(),
            Some(&Notice::Warning(CSV_MISSING_OR_EMPTY.to_string()))
        );

        let t = table(&[("A", "x"), ("B", "")]);
        let outcome = range_scatter_chart(&t, &mut RangeSlot::default());
        assert_eq!(outcome.notice(), Some(&Notice::Warning(NO_NUMERIC_VALUES.to_string())));
    }

    #[test]
    fn scatter_skips_values_beyond_slider_range() {
        let t = table(&[("A", "1"), ("A", "1e20")]);
        let mut slot = RangeSlot::default();
        let outcome = range_scatter_chart(&t, &mut slot);
        let chart = outcome.ready().unwrap();
        assert_eq!(chart.bounds, (1, 1));
        assert_eq!(chart.points.len(), 1);

        let t = table(&[("A", "1e20")]);
        let outcome = range_scatter_chart(&t, &mut RangeSlot::default());
        assert_eq!(outcome.notice(), Some(&Notice::Warning(NO_NUMERIC_VALUES.to_string())));
    }

    #[test]
    fn scatter_x_falls_back_to_row() {
        let point = ScatterPoint {
            row: 7,
            timestamp: "not a time".into(),
            category: "A".into(),
            value: 1.0,
        };
        assert_eq!(point.x_position(), 7.0);
    }

    #[test]
    fn builders_leave_table_untouched() {
        let t = table(&[("A", "1"), ("B", "x")]);
        let before = t.clone();
        let mut selection = crate::SelectionState::default();
        let _ = category_line_chart(&t, &mut selection.category);
        let _ = range_scatter_chart(&t, &mut selection.range);
        assert_eq!(t, before);
    }
}
