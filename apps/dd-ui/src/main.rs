#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::DatadashApp;
use dd_app::DashboardConfig;
use std::path::PathBuf;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    // Optional first argument: dashboard config YAML.
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match DashboardConfig::load_or_default(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "falling back to default config");
            DashboardConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Data Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Data Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DatadashApp::new(cc, config)))),
    )
}
