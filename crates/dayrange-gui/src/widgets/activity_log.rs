//! Recent selection changes

use crate::ui_state::{ActivityLevel, UiState};

/// Render the activity log
pub fn render(ui: &mut egui::Ui, ui_state: &mut UiState) {
    ui.horizontal(|ui| {
        ui.label(format!("{} entries", ui_state.activity.len()));
        if ui.button("Clear").clicked() {
            ui_state.activity.clear();
        }
    });

    ui.separator();

    egui::ScrollArea::vertical()
        .max_height(160.0)
        .auto_shrink([false, true])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for entry in &ui_state.activity {
                ui.horizontal(|ui| {
                    ui.label(&entry.timestamp);
                    let (color, prefix) = match entry.level {
                        ActivityLevel::Info => (egui::Color32::GRAY, "INFO"),
                        ActivityLevel::Warning => (egui::Color32::YELLOW, "WARN"),
                    };
                    ui.colored_label(color, prefix);
                    ui.label(&entry.message);
                });
            }
        });
}
