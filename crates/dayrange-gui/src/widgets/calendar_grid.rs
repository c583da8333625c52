//! Month calendar with range highlighting

use chrono::{Datelike, NaiveDate};
use dayrange_core::{DateState, DayModifiers, WeekStart, month_grid};
use egui::Color32;

const CELL_SIZE: egui::Vec2 = egui::vec2(48.0, 36.0);

const FULL_EDGE: Color32 = Color32::from_rgb(46, 125, 50);
const FULL_INNER: Color32 = Color32::from_rgb(102, 170, 106);
const HALF_EDGE: Color32 = Color32::from_rgb(191, 130, 0);
const HALF_INNER: Color32 = Color32::from_rgb(222, 178, 80);

/// What the user did with the calendar this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    PreviousMonth,
    NextMonth,
    Today,
    Toggle(NaiveDate),
}

/// Background for a day cell, `None` when unselected.
pub fn cell_fill(modifiers: &DayModifiers) -> Option<Color32> {
    if !modifiers.selected {
        return None;
    }
    let inner = modifiers.middle_of_range;
    let fill = match (modifiers.half_day, inner) {
        (false, false) => FULL_EDGE,
        (false, true) => FULL_INNER,
        (true, false) => HALF_EDGE,
        (true, true) => HALF_INNER,
    };
    Some(fill)
}

/// Text shown in a day cell; half days carry a ½ mark.
pub fn cell_label(day: NaiveDate, modifiers: &DayModifiers) -> String {
    if modifiers.half_day {
        format!("{}½", day.day())
    } else {
        day.day().to_string()
    }
}

fn cell_tooltip(modifiers: &DayModifiers) -> &'static str {
    match (modifiers.selected, modifiers.half_day) {
        (false, _) => "Click to select",
        (true, false) if modifiers.is_single() => "Full day",
        (true, true) if modifiers.is_single() => "Half day",
        (true, false) => "Full day, part of a range",
        (true, true) => "Half day, part of a range",
    }
}

/// Render the month containing `month`
pub fn render(
    ui: &mut egui::Ui,
    state: &DateState,
    month: NaiveDate,
    week_start: WeekStart,
) -> Option<CalendarAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui.button("◀").on_hover_text("Previous month").clicked() {
            action = Some(CalendarAction::PreviousMonth);
        }
        ui.label(egui::RichText::new(month.format("%B %Y").to_string()).strong());
        if ui.button("▶").on_hover_text("Next month").clicked() {
            action = Some(CalendarAction::NextMonth);
        }
        if ui.button("Today").clicked() {
            action = Some(CalendarAction::Today);
        }
    });

    ui.add_space(4.0);

    egui::Grid::new("calendar_grid")
        .num_columns(7)
        .spacing([2.0, 2.0])
        .show(ui, |ui| {
            for header in week_start.header() {
                ui.vertical_centered(|ui| ui.weak(header));
            }
            ui.end_row();

            for week in month_grid(month, week_start) {
                for cell in week {
                    let Some(day) = cell else {
                        ui.allocate_space(CELL_SIZE);
                        continue;
                    };
                    let modifiers = state.day_modifiers(day);
                    let mut text = egui::RichText::new(cell_label(day, &modifiers));
                    if modifiers.selected {
                        text = text.color(Color32::WHITE).strong();
                    }
                    let mut button = egui::Button::new(text).min_size(CELL_SIZE);
                    if let Some(fill) = cell_fill(&modifiers) {
                        button = button.fill(fill);
                    }
                    if ui.add(button).on_hover_text(cell_tooltip(&modifiers)).clicked() {
                        action = Some(CalendarAction::Toggle(day));
                    }
                }
                ui.end_row();
            }
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use dayrange_core::DayType;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn unselected_days_have_no_fill() {
        let state = DateState::new();
        assert_eq!(cell_fill(&state.day_modifiers(jan(3))), None);
    }

    #[test]
    fn range_edges_are_darker_than_middle() {
        let mut state = DateState::new();
        state.add_dates([jan(1), jan(2), jan(3)]);
        assert_eq!(cell_fill(&state.day_modifiers(jan(1))), Some(FULL_EDGE));
        assert_eq!(cell_fill(&state.day_modifiers(jan(2))), Some(FULL_INNER));
        assert_eq!(cell_fill(&state.day_modifiers(jan(3))), Some(FULL_EDGE));
    }

    #[test]
    fn half_days_use_their_own_colour_and_mark() {
        let mut state = DateState::with_day_type(DayType::Half);
        state.toggle_date(Some(jan(9)));
        let modifiers = state.day_modifiers(jan(9));
        assert_eq!(cell_fill(&modifiers), Some(HALF_EDGE));
        assert_eq!(cell_label(jan(9), &modifiers), "9½");
        assert_eq!(cell_tooltip(&modifiers), "Half day");
    }
}
