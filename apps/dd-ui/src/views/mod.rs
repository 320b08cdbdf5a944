pub mod home_view;
pub mod survey_view;
pub mod visuals_view;

pub use home_view::HomeView;
pub use survey_view::SurveyView;
pub use visuals_view::VisualsView;

use dd_app::{Notice, Table};

pub(crate) fn show_notice(ui: &mut egui::Ui, notice: &Notice) {
    let (color, icon) = match notice {
        Notice::Success(_) => (egui::Color32::from_rgb(0, 170, 0), "✔"),
        Notice::Info(_) => (egui::Color32::from_rgb(70, 130, 220), "ℹ"),
        Notice::Warning(_) => (egui::Color32::from_rgb(230, 160, 0), "⚠"),
        Notice::Error(_) => (egui::Color32::RED, "✖"),
    };
    ui.colored_label(color, format!("{} {}", icon, notice.message()));
}

/// Read-only grid of `table`, one column per header.
pub(crate) fn show_table(ui: &mut egui::Ui, id: &str, table: &Table) {
    use egui_extras::{Column, TableBuilder};

    ui.push_id(id, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(80.0), table.headers.len())
            .header(22.0, |mut header| {
                for name in &table.headers {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|mut body| {
                for row in &table.rows {
                    body.row(20.0, |mut table_row| {
                        for index in 0..table.headers.len() {
                            table_row.col(|ui| {
                                ui.label(row.get(index).map(String::as_str).unwrap_or_default());
                            });
                        }
                    });
                }
            });
    });
}
