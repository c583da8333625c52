//! Full/half day mode switch

use dayrange_core::DayType;

/// Render the day-type selector.
/// Returns true if the mode was changed
pub fn render(ui: &mut egui::Ui, day_type: &mut DayType) -> bool {
    ui.horizontal(|ui| {
        ui.label("New selections:");
        let before = *day_type;
        ui.selectable_value(day_type, DayType::Full, "Full day")
            .on_hover_text("Clicked days count as whole days");
        ui.selectable_value(day_type, DayType::Half, "Half day")
            .on_hover_text("Clicked days count as half days");
        before != *day_type
    })
    .inner
}
