/// Landing page: what the dashboard is and how to move around it.
pub struct HomeView;

impl HomeView {
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Data Dashboard 📊");
        ui.label(
            "Collect small survey entries, store them in a CSV file, and explore them \
             next to a static JSON dataset.",
        );

        ui.add_space(12.0);
        ui.strong("How to use");
        ui.label("• Survey: enter a category and a value. It is saved as a new row in data.csv.");
        ui.label("• Visuals: see both data files and three charts built from them.");
        ui.label("• Data folder…: choose the directory holding data.csv and data.json.");

        ui.add_space(12.0);
        ui.strong("About");
        ui.label(
            "Entries are stored with a timestamp and kept exactly as typed. Values that \
             parse as numbers are charted; anything else is still listed in the tables.",
        );

        ui.add_space(12.0);
        ui.strong("What it shows");
        ui.label("• Taking user input and saving it to disk.");
        ui.label("• Loading CSV and JSON files and reporting problems inline.");
        ui.label("• Interactive charts driven by a dropdown and a range slider.");

        ui.separator();
        ui.small("The command-line twin, dd-cli, reads and writes the same files.");
    }
}
