use super::{show_notice, show_table};
use dd_app::charts::{BAR_CAPTION, LINE_CAPTION, SCATTER_CAPTION, numeric_rows, value_bounds};
use dd_app::dataset::SourceKind;
use dd_app::{
    ChartOutcome, DashboardConfig, Document, ScatterPoint, SelectionState, StaticPoint, Table,
    category_line_chart, load_csv, load_json, range_scatter_chart, static_bar_chart,
};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

const PREVIEW_ROWS: usize = 5;
const PLOT_HEIGHT: f32 = 260.0;

#[derive(Default)]
pub struct VisualsView {
    show_json: bool,
}

impl VisualsView {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        config: &DashboardConfig,
        selection: &mut SelectionState,
    ) {
        ui.heading("Data Visualizations 📈");
        ui.label("Graphs built from the survey entries and the sample JSON file.");

        ui.separator();
        ui.heading("Load Data");

        let csv = load_csv(&config.csv_path());
        show_notice(ui, &csv.status.notice(&config.csv_file, SourceKind::Csv));
        if csv.is_loaded() {
            show_table(ui, "csv_preview", &csv.data.head(PREVIEW_ROWS));
        }

        let json = load_json(&config.json_path());
        show_notice(ui, &json.status.notice(&config.json_file, SourceKind::Json));
        if json.is_loaded() {
            self.show_document(ui, &json.data);
        }

        ui.separator();
        ui.heading("Graphs");

        ui.add_space(6.0);
        ui.strong("Graph 1: Static - Data Points from JSON");
        match static_bar_chart(&json.data) {
            ChartOutcome::Ready(points) => {
                show_bar_chart(ui, &points);
                ui.small(BAR_CAPTION);
            }
            ChartOutcome::Notice(notice) => show_notice(ui, &notice),
        }

        ui.add_space(12.0);
        ui.strong("Graph 2: Dynamic - Values by Category (CSV data)");
        show_category_chart(ui, &csv.data, selection);

        ui.add_space(12.0);
        ui.strong("Graph 3: Dynamic - Filtered Scatter Plot");
        show_range_chart(ui, &csv.data, selection);
    }

    fn show_document(&mut self, ui: &mut egui::Ui, document: &Document) {
        ui.checkbox(&mut self.show_json, "Show data.json contents");
        if !self.show_json {
            return;
        }
        // Pretty-printing a parsed Value cannot fail.
        let mut pretty = serde_json::to_string_pretty(document).unwrap_or_default();
        ui.add(
            egui::TextEdit::multiline(&mut pretty)
                .code_editor()
                .interactive(false)
                .desired_width(f32::INFINITY),
        );
    }
}

fn show_bar_chart(ui: &mut egui::Ui, points: &[StaticPoint]) {
    let bars: Vec<Bar> = points
        .iter()
        .enumerate()
        .map(|(i, point)| Bar::new(i as f64, point.value).name(&point.label).width(0.6))
        .collect();
    let labels: Vec<String> = points.iter().map(|p| p.label.clone()).collect();

    Plot::new("static_bar_chart")
        .height(PLOT_HEIGHT)
        .allow_scroll(false)
        .x_axis_label("label")
        .y_axis_label("value")
        .label_formatter(move |_name, value| {
            let index = value.x.round();
            match labels.get(index.max(0.0) as usize) {
                Some(label) if index >= 0.0 => format!("{label}\n{:.2}", value.y),
                _ => String::new(),
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

fn show_category_chart(ui: &mut egui::Ui, table: &Table, selection: &mut SelectionState) {
    let outcome = category_line_chart(table, &mut selection.category);
    let chart = match outcome {
        ChartOutcome::Ready(chart) => chart,
        ChartOutcome::Notice(notice) => {
            show_notice(ui, &notice);
            return;
        }
    };

    let mut choice = chart.selected.clone();
    ui.horizontal(|ui| {
        ui.label("Select a category:");
        egui::ComboBox::from_id_salt("category_selector")
            .selected_text(&choice)
            .show_ui(ui, |ui| {
                for category in &chart.categories {
                    ui.selectable_value(&mut choice, category.clone(), category);
                }
            });
    });

    // Redraw against the new choice in the same frame.
    let chart = if choice != chart.selected {
        selection.category.select(choice);
        match category_line_chart(table, &mut selection.category) {
            ChartOutcome::Ready(chart) => chart,
            ChartOutcome::Notice(notice) => {
                show_notice(ui, &notice);
                return;
            }
        }
    } else {
        chart
    };

    let points: PlotPoints = chart.points.iter().copied().collect();
    Plot::new("category_line_chart")
        .height(PLOT_HEIGHT)
        .allow_scroll(false)
        .legend(Legend::default())
        .x_axis_label("entry")
        .y_axis_label("value")
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name(&chart.selected).width(2.0));
            let markers: PlotPoints = chart.points.iter().copied().collect();
            plot_ui.points(Points::new(markers).radius(3.0));
        });
    ui.small(LINE_CAPTION);
}

fn show_range_chart(ui: &mut egui::Ui, table: &Table, selection: &mut SelectionState) {
    // Sliders stay usable when the stored range no longer matches the data.
    if let Some((min, max)) = value_bounds(numeric_rows(table).into_iter().map(|(_, v)| v)) {
        let (mut low, mut high) = selection.range.get_or_init(min, max);
        ui.horizontal(|ui| {
            ui.label("Select a value range:");
            // A stored range outside the data is shown as is, not clamped.
            let low_changed = ui
                .add(egui::Slider::new(&mut low, min..=max).clamp_to_range(false).text("low"))
                .changed();
            let high_changed = ui
                .add(egui::Slider::new(&mut high, min..=max).clamp_to_range(false).text("high"))
                .changed();
            if low_changed {
                selection.range.move_low(low);
            } else if high_changed {
                selection.range.move_high(high);
            }
        });
    }

    match range_scatter_chart(table, &mut selection.range) {
        ChartOutcome::Ready(chart) => {
            show_scatter(ui, &chart.points);
            ui.small(SCATTER_CAPTION);
        }
        ChartOutcome::Notice(notice) => show_notice(ui, &notice),
    }
}

fn show_scatter(ui: &mut egui::Ui, points: &[ScatterPoint]) {
    let positions: Vec<[f64; 2]> = points.iter().map(|p| [p.x_position(), p.value]).collect();
    let tooltips: Vec<(f64, ScatterPoint)> = points
        .iter()
        .map(|p| (p.x_position(), p.clone()))
        .collect();

    Plot::new("range_scatter_chart")
        .height(PLOT_HEIGHT)
        .allow_scroll(false)
        .x_axis_label("timestamp")
        .y_axis_label("value")
        .label_formatter(move |_name, value| {
            let nearest = tooltips.iter().min_by(|a, b| {
                let da = (a.0 - value.x).abs() + (a.1.value - value.y).abs();
                let db = (b.0 - value.x).abs() + (b.1.value - value.y).abs();
                da.total_cmp(&db)
            });
            match nearest {
                Some((_, point)) => format!(
                    "{}\ncategory: {}\nvalue: {}",
                    point.timestamp, point.category, point.value
                ),
                None => String::new(),
            }
        })
        .show(ui, |plot_ui| {
            let markers: PlotPoints = positions.into_iter().collect();
            plot_ui.points(Points::new(markers).radius(4.0).name("entries"));
        });
}
