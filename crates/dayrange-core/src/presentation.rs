//! Read-only views the rendering layer paints from.

use std::fmt::Write as _;

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::Serialize;
use thiserror::Error;

use crate::calendar::AsCalendarDay;
use crate::day_type::DayType;
use crate::selection::SelectionId;
use crate::state::DateState;

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Style flags for one calendar cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayModifiers {
    pub selected: bool,
    pub full_day: bool,
    pub half_day: bool,
    pub start_of_range: bool,
    pub end_of_range: bool,
    pub middle_of_range: bool,
}

impl DayModifiers {
    /// Selected day that is not part of any multi-day range.
    pub fn is_single(&self) -> bool {
        self.selected && !self.start_of_range && !self.end_of_range && !self.middle_of_range
    }
}

/// One line of the range table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeRow {
    pub id: SelectionId,
    pub label: String,
    pub day_type: DayType,
    pub days: usize,
}

/// Totals over the current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DayCounts {
    pub full_days: usize,
    pub half_days: usize,
}

impl DayCounts {
    /// Selected time in days, half days counting 0.5.
    pub fn total_days(&self) -> f32 {
        self.full_days as f32 * DayType::Full.weight()
            + self.half_days as f32 * DayType::Half.weight()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date format '{0}'")]
pub struct InvalidDateFormat(pub String);

/// A strftime pattern checked up front so rendering cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn new(pattern: &str) -> Result<Self, InvalidDateFormat> {
        if pattern.trim().is_empty()
            || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
        {
            return Err(InvalidDateFormat(pattern.to_string()));
        }
        Ok(Self(pattern.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn render(&self, day: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", day.format(&self.0)).is_err() {
            // Patterns needing a time or offset cannot print a bare date.
            return day.to_string();
        }
        out
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(DEFAULT_DATE_FORMAT.to_string())
    }
}

impl DateState {
    pub fn day_modifiers<D: AsCalendarDay>(&self, date: D) -> DayModifiers {
        let day = date.calendar_day();
        let Some(selection) = self.selection(day) else {
            return DayModifiers::default();
        };
        DayModifiers {
            selected: true,
            full_day: selection.is_full_day(),
            half_day: selection.is_half_day(),
            start_of_range: self.is_start_of_range(day),
            end_of_range: self.is_end_of_range(day),
            middle_of_range: self.is_middle_of_range(day),
        }
    }

    pub fn range_rows(&self, format: &DateFormat) -> Vec<RangeRow> {
        self.ranges()
            .iter()
            .map(|range| {
                let label = match range.end {
                    Some(end) => format!(
                        "{} - {}",
                        format.render(range.start.date),
                        format.render(end.date)
                    ),
                    None => format.render(range.start.date),
                };
                RangeRow {
                    id: range.id,
                    label,
                    day_type: range.day_type(),
                    days: range.len(),
                }
            })
            .collect()
    }

    pub fn counts(&self) -> DayCounts {
        self.selections()
            .iter()
            .fold(DayCounts::default(), |mut counts, selection| {
                match selection.day_type {
                    DayType::Full => counts.full_days += 1,
                    DayType::Half => counts.half_days += 1,
                }
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn modifiers_for_three_day_range() {
        let mut state = DateState::new();
        state.add_dates([ymd(2024, 1, 1), ymd(2024, 1, 2), ymd(2024, 1, 3)]);

        let start = state.day_modifiers(ymd(2024, 1, 1));
        assert!(start.selected && start.full_day && start.start_of_range);
        assert!(!start.middle_of_range && !start.end_of_range);

        let middle = state.day_modifiers(ymd(2024, 1, 2));
        assert!(middle.middle_of_range);
        assert!(!middle.start_of_range && !middle.end_of_range);

        let end = state.day_modifiers(ymd(2024, 1, 3));
        assert!(end.end_of_range && !end.middle_of_range);

        assert_eq!(state.day_modifiers(ymd(2024, 1, 4)), DayModifiers::default());
    }

    #[test]
    fn lone_day_is_single() {
        let mut state = DateState::with_day_type(DayType::Half);
        state.toggle_date(Some(ymd(2024, 2, 10)));
        let cell = state.day_modifiers(ymd(2024, 2, 10));
        assert!(cell.is_single());
        assert!(cell.half_day && !cell.full_day);
    }

    #[test]
    fn range_rows_use_format() {
        let mut state = DateState::new();
        state.add_dates([ymd(2024, 1, 1), ymd(2024, 1, 2)]);
        state.set_day_type(DayType::Half);
        state.add_dates([ymd(2024, 1, 9)]);

        let rows = state.range_rows(&DateFormat::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "01/01/2024 - 02/01/2024");
        assert_eq!(rows[0].day_type, DayType::Full);
        assert_eq!(rows[0].days, 2);
        assert_eq!(rows[1].label, "09/01/2024");
        assert_eq!(rows[1].day_type.label(), "Half");

        let iso = DateFormat::new("%Y-%m-%d").unwrap();
        assert_eq!(state.range_rows(&iso)[1].label, "2024-01-09");
    }

    #[test]
    fn invalid_format_is_rejected() {
        assert!(DateFormat::new("%Q").is_err());
        assert!(DateFormat::new("  ").is_err());
        assert!(DateFormat::new("%A %e %B").is_ok());
    }

    #[test]
    fn time_only_pattern_falls_back_to_iso() {
        let format = DateFormat::new("%H:%M").unwrap();
        assert_eq!(format.render(ymd(2024, 1, 9)), "2024-01-09");
    }

    #[test]
    fn counts_weigh_half_days() {
        let mut state = DateState::new();
        state.add_dates([ymd(2024, 1, 1), ymd(2024, 1, 2)]);
        state.set_day_type(DayType::Half);
        state.add_dates([ymd(2024, 1, 3)]);
        let counts = state.counts();
        assert_eq!(counts.full_days, 2);
        assert_eq!(counts.half_days, 1);
        assert_eq!(counts.total_days(), 2.5);
    }
}
