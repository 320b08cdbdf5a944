use super::{show_notice, show_table};
use dd_app::{DashboardConfig, Notice, Submission, current_data, current_data_notice, submit};

#[derive(Default)]
pub struct SurveyView {
    category_input: String,
    value_input: String,
    last_submission: Option<Result<Submission, String>>,
}

impl SurveyView {
    /// Forget the form state, e.g. after the data folder changed.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn show(&mut self, ui: &mut egui::Ui, config: &DashboardConfig) {
        ui.heading("Data Collection Survey 📝");
        ui.label(
            "Fill out the form below to record an entry. It is added to the dataset \
             shown on the Visuals tab.",
        );
        ui.add_space(8.0);

        ui.group(|ui| {
            egui::Grid::new("survey_form")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Enter a category:");
                    ui.text_edit_singleline(&mut self.category_input);
                    ui.end_row();

                    ui.label("Enter a value:");
                    ui.text_edit_singleline(&mut self.value_input);
                    ui.end_row();
                });

            if ui.button("Submit Data").clicked() {
                let result = config
                    .record_store()
                    .and_then(|store| submit(&store, &self.category_input, &self.value_input));
                self.last_submission = Some(result.map_err(|e| e.to_string()));
            }

            match &self.last_submission {
                Some(Ok(submission)) => {
                    show_notice(ui, &Notice::Success(submission.confirmation.clone()));
                    ui.label(egui::RichText::new(&submission.echo).strong());
                }
                Some(Err(message)) => {
                    show_notice(ui, &Notice::Error(format!("Could not save entry: {message}")));
                }
                None => {}
            }
        });

        ui.separator();
        ui.heading("Current Data in CSV");

        let loaded = current_data(&config.csv_path());
        match current_data_notice(&loaded) {
            Some(notice) => show_notice(ui, &notice),
            None => show_table(ui, "current_data", &loaded.data),
        }
    }
}
