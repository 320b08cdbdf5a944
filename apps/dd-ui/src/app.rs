use crate::views::{HomeView, SurveyView, VisualsView};
use dd_app::{DashboardConfig, SessionId, SessionRegistry};
use egui_file_dialog::FileDialog;
use std::path::PathBuf;

pub struct DatadashApp {
    config: DashboardConfig,
    sessions: SessionRegistry,
    session: SessionId,
    file_dialog: FileDialog,
    active_view: ViewTab,
    home_view: HomeView,
    survey_view: SurveyView,
    visuals_view: VisualsView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ViewTab {
    Home,
    Survey,
    Visuals,
}

impl DatadashApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let mut sessions = SessionRegistry::new();
        let session = sessions.open();

        Self {
            config,
            sessions,
            session,
            file_dialog: FileDialog::new(),
            active_view: ViewTab::Home,
            home_view: HomeView,
            survey_view: SurveyView::default(),
            visuals_view: VisualsView::default(),
        }
    }

    /// Point the dashboard at another folder. Selections made against the
    /// old files are discarded with the old session.
    fn change_data_dir(&mut self, data_dir: PathBuf) {
        tracing::info!(data_dir = %data_dir.display(), "data folder changed");
        self.config = self.config.clone().with_data_dir(data_dir);
        self.sessions.end(self.session);
        self.session = self.sessions.open();
        self.survey_view.reset();
    }
}

impl eframe::App for DatadashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Data folder…").clicked() {
                    self.file_dialog.select_directory();
                }
                ui.separator();
                ui.label(format!("Data: {}", self.config.data_dir.display()));
            });
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            self.change_data_dir(path.to_path_buf());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_view, ViewTab::Home, "Home");
                ui.selectable_value(&mut self.active_view, ViewTab::Survey, "Survey");
                ui.selectable_value(&mut self.active_view, ViewTab::Visuals, "Visuals");
            });

            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.active_view {
                    ViewTab::Home => self.home_view.show(ui),
                    ViewTab::Survey => self.survey_view.show(ui, &self.config),
                    ViewTab::Visuals => {
                        let selection = self.sessions.session(self.session);
                        self.visuals_view.show(ui, &self.config, selection);
                    }
                });
        });
    }
}
