//! Range list with per-row delete buttons

use dayrange_core::{DayType, RangeRow, SelectionId};

/// Render the range rows.
/// Returns the id of a range whose delete button was clicked
pub fn render(ui: &mut egui::Ui, rows: &[RangeRow]) -> Option<SelectionId> {
    if rows.is_empty() {
        ui.weak("No dates selected. Click days in the calendar to add them.");
        return None;
    }

    let mut deleted = None;
    egui::ScrollArea::vertical()
        .max_height(240.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("range_table")
                .num_columns(4)
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("Date");
                    ui.strong("Type");
                    ui.strong("Days");
                    ui.label("");
                    ui.end_row();

                    for row in rows {
                        ui.label(&row.label);
                        ui.label(row.day_type.label());
                        ui.label(days_text(row));
                        if ui.small_button("🗑").on_hover_text("Remove this range").clicked() {
                            deleted = Some(row.id);
                        }
                        ui.end_row();
                    }
                });
        });
    deleted
}

fn days_text(row: &RangeRow) -> String {
    match row.day_type {
        DayType::Full => row.days.to_string(),
        DayType::Half => format!("{} × ½", row.days),
    }
}
