//! Totals line and clear button

use dayrange_core::DayCounts;

/// Render the totals.
/// Returns true if "Clear all" was clicked
pub fn render(ui: &mut egui::Ui, counts: DayCounts) -> bool {
    ui.horizontal(|ui| {
        ui.label(summary_text(counts));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let empty = counts.full_days + counts.half_days == 0;
            ui.add_enabled(!empty, egui::Button::new("Clear all"))
                .on_hover_text("Deselect every day")
                .clicked()
        })
        .inner
    })
    .inner
}

pub fn summary_text(counts: DayCounts) -> String {
    format!(
        "{} full, {} half: {} days in total",
        counts.full_days,
        counts.half_days,
        counts.total_days()
    )
}
