//! Plain-text and JSON views of a selection.

use chrono::{Datelike, NaiveDate};
use dayrange_core::{DateFormat, DateRange, DateState, DayCounts, DayType, WeekStart, month_grid};
use serde::Serialize;

/// Two-column range table, one row per range.
pub fn range_table(state: &DateState, format: &DateFormat) -> String {
    let rows = state.range_rows(format);
    if rows.is_empty() {
        return "No dates selected.\n".to_string();
    }

    let width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Date".len());

    let mut out = format!("{:<width$}  Type\n", "Date");
    for row in rows {
        out.push_str(&format!("{:<width$}  {}\n", row.label, row.day_type));
    }

    let counts = state.counts();
    out.push_str(&format!(
        "{} full, {} half ({} days)\n",
        counts.full_days,
        counts.half_days,
        counts.total_days()
    ));
    out
}

/// Month grid with range markers.
///
/// Each cell is `<open><day><type><close>`: `[`/`]` bracket a multi-day
/// range, `-` joins its inner days, `(`/`)` wrap a lone day, and the type
/// letter is `F` or `H`.
pub fn month_calendar(state: &DateState, month: NaiveDate, week_start: WeekStart) -> String {
    let mut out = format!("{}\n", month.format("%B %Y"));
    for header in week_start.header() {
        out.push_str(&format!(" {header}  "));
    }
    out.push('\n');

    for week in month_grid(month, week_start) {
        let line: String = week.iter().map(|cell| calendar_cell(state, *cell)).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn calendar_cell(state: &DateState, cell: Option<NaiveDate>) -> String {
    let Some(day) = cell else {
        return " ".repeat(5);
    };
    let modifiers = state.day_modifiers(day);
    let (open, close) = if !modifiers.selected {
        (' ', ' ')
    } else if modifiers.is_single() {
        ('(', ')')
    } else if modifiers.start_of_range {
        ('[', '-')
    } else if modifiers.end_of_range {
        ('-', ']')
    } else {
        ('-', '-')
    };
    let kind = if modifiers.full_day {
        'F'
    } else if modifiers.half_day {
        'H'
    } else {
        ' '
    };
    format!("{open}{:>2}{kind}{close}", day.day())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    ranges: &'a [DateRange],
    counts: DayCounts,
    total_days: f32,
}

/// Ranges and totals as pretty-printed JSON.
pub fn json_report(state: &DateState) -> serde_json::Result<String> {
    let counts = state.counts();
    serde_json::to_string_pretty(&JsonReport {
        ranges: state.ranges(),
        counts,
        total_days: counts.total_days(),
    })
}

/// Short summary of one range for status messages.
pub fn describe_range(range: &DateRange) -> String {
    let kind = match range.day_type() {
        DayType::Full => "full",
        DayType::Half => "half",
    };
    if range.is_single_day() {
        format!("{} ({kind})", range.first_day())
    } else {
        format!("{}..{} ({kind}, {} days)", range.first_day(), range.last_day(), range.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn table_lists_ranges_and_totals() {
        let mut state = DateState::new();
        state.add_dates([jan(1), jan(2), jan(3)]);
        state.set_day_type(DayType::Half);
        state.toggle_date(Some(jan(8)));

        let table = range_table(&state, &DateFormat::default());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Date                     Type");
        assert_eq!(lines[1], "01/01/2024 - 03/01/2024  Full");
        assert_eq!(lines[2], "08/01/2024               Half");
        assert_eq!(lines[3], "3 full, 1 half (3.5 days)");
    }

    #[test]
    fn table_pads_non_ascii_labels_by_character() {
        let mut state = DateState::new();
        state.add_dates([jan(1), jan(2), jan(3)]);
        state.set_day_type(DayType::Half);
        state.toggle_date(Some(jan(8)));

        let format = DateFormat::new("%d·%m·%Y").unwrap();
        let table = range_table(&state, &format);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Date                     Type");
        assert_eq!(lines[1], "01·01·2024 - 03·01·2024  Full");
        assert_eq!(lines[2], "08·01·2024               Half");
    }

    #[test]
    fn empty_table() {
        let state = DateState::new();
        assert_eq!(range_table(&state, &DateFormat::default()), "No dates selected.\n");
    }

    #[test]
    fn calendar_marks_range_cells() {
        let mut state = DateState::new();
        state.add_dates([jan(1), jan(2), jan(3)]);
        state.set_day_type(DayType::Half);
        state.toggle_date(Some(jan(5)));

        let calendar = month_calendar(&state, jan(1), WeekStart::Monday);
        let first_week = calendar.lines().nth(2).unwrap();
        assert!(first_week.starts_with("[ 1F-- 2F-- 3F]  4  ( 5H)"));
    }

    #[test]
    fn json_contains_members_for_multi_day_ranges() {
        let mut state = DateState::new();
        state.add_dates([jan(1), jan(2)]);
        let json: serde_json::Value = serde_json::from_str(&json_report(&state).unwrap()).unwrap();
        assert_eq!(json["ranges"][0]["members"].as_array().unwrap().len(), 2);
        assert_eq!(json["counts"]["full_days"], 2);
        assert_eq!(json["total_days"], 2.0);
    }

    #[test]
    fn describe_single_and_multi() {
        let mut state = DateState::new();
        state.add_dates([jan(1), jan(2), jan(9)]);
        let ranges = state.ranges();
        assert_eq!(describe_range(&ranges[0]), "2024-01-01..2024-01-02 (full, 2 days)");
        assert_eq!(describe_range(&ranges[1]), "2024-01-09 (full)");
    }
}
