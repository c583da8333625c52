//! Day-granularity date helpers.
//!
//! Everything in the selection engine works on [`NaiveDate`]. Callers holding
//! timestamps go through [`AsCalendarDay`], which drops the time of day so two
//! clicks on the same cell always compare equal.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

/// Values that can be reduced to a calendar day.
pub trait AsCalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl AsCalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl AsCalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

/// Uses the date as seen in the value's own offset.
impl<Tz: TimeZone> AsCalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

impl<T: AsCalendarDay + ?Sized> AsCalendarDay for &T {
    fn calendar_day(&self) -> NaiveDate {
        (**self).calendar_day()
    }
}

/// Signed number of calendar days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Returns true when `next` is the day right after `previous`.
pub fn is_next_day(previous: NaiveDate, next: NaiveDate) -> bool {
    days_between(previous, next) == 1
}

/// Every day from `a` to `b` inclusive, ascending regardless of argument order.
pub fn date_span(a: NaiveDate, b: NaiveDate) -> Vec<NaiveDate> {
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    start.iter_days().take_while(|day| *day <= end).collect()
}

/// First column of a rendered calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// Column headers in display order.
    pub fn header(self) -> [&'static str; 7] {
        match self {
            WeekStart::Monday => ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
            WeekStart::Sunday => ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
        }
    }
}

impl std::str::FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(WeekStart::Monday),
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            other => Err(format!("unknown week start '{other}' (expected 'monday' or 'sunday')")),
        }
    }
}

/// One calendar row; cells outside the month are `None`.
pub type Week = [Option<NaiveDate>; 7];

/// Lays out the month containing `day` as calendar rows.
pub fn month_grid(day: NaiveDate, week_start: WeekStart) -> Vec<Week> {
    let first = day - TimeDelta::days(i64::from(day.day0()));
    let lead = (first.weekday().num_days_from_monday() + 7
        - week_start.weekday().num_days_from_monday())
        % 7;

    let mut weeks = Vec::with_capacity(6);
    let mut week: Week = [None; 7];
    let mut column = lead as usize;

    for date in first.iter_days().take_while(|d| d.month() == first.month()) {
        week[column] = Some(date);
        column += 1;
        if column == 7 {
            weeks.push(week);
            week = [None; 7];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(week);
    }
    weeks
}

/// First day of the month before the one containing `day`.
pub fn previous_month(day: NaiveDate) -> NaiveDate {
    let first = day - TimeDelta::days(i64::from(day.day0()));
    let last_of_previous = first - TimeDelta::days(1);
    last_of_previous - TimeDelta::days(i64::from(last_of_previous.day0()))
}

/// First day of the month after the one containing `day`.
pub fn next_month(day: NaiveDate) -> NaiveDate {
    let first = day - TimeDelta::days(i64::from(day.day0()));
    let mut probe = first + TimeDelta::days(27);
    while probe.month() == first.month() {
        probe += TimeDelta::days(1);
    }
    probe
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn time_of_day_is_dropped() {
        let morning = ymd(2024, 3, 5).and_time(NaiveTime::from_hms_opt(0, 0, 1).unwrap());
        let evening = ymd(2024, 3, 5).and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap());
        assert_eq!(morning.calendar_day(), evening.calendar_day());

        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let aware = offset.from_local_datetime(&evening).unwrap();
        assert_eq!(aware.calendar_day(), ymd(2024, 3, 5));
    }

    #[test]
    fn days_between_crosses_year_end() {
        assert_eq!(days_between(ymd(2023, 12, 31), ymd(2024, 1, 1)), 1);
        assert!(is_next_day(ymd(2024, 2, 28), ymd(2024, 2, 29)));
        assert!(!is_next_day(ymd(2023, 2, 28), ymd(2023, 3, 2)));
        assert_eq!(days_between(ymd(2024, 1, 3), ymd(2024, 1, 1)), -2);
    }

    #[test]
    fn date_span_is_inclusive_and_ordered() {
        let span = date_span(ymd(2024, 1, 3), ymd(2024, 1, 1));
        assert_eq!(span, vec![ymd(2024, 1, 1), ymd(2024, 1, 2), ymd(2024, 1, 3)]);
        assert_eq!(date_span(ymd(2024, 1, 1), ymd(2024, 1, 1)).len(), 1);
    }

    #[test]
    fn month_grid_monday_start() {
        // 1 January 2024 is a Monday.
        let weeks = month_grid(ymd(2024, 1, 17), WeekStart::Monday);
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], Some(ymd(2024, 1, 1)));
        assert_eq!(weeks[4][2], Some(ymd(2024, 1, 31)));
        assert_eq!(weeks[4][3], None);
    }

    #[test]
    fn month_grid_sunday_start_pads_leading_cells() {
        let weeks = month_grid(ymd(2024, 1, 1), WeekStart::Sunday);
        assert_eq!(weeks[0][0], None);
        assert_eq!(weeks[0][1], Some(ymd(2024, 1, 1)));
        let cells: usize = weeks.iter().map(|w| w.iter().flatten().count()).sum();
        assert_eq!(cells, 31);
    }

    #[test]
    fn week_start_parses_names() {
        assert_eq!("Sunday".parse::<WeekStart>(), Ok(WeekStart::Sunday));
        assert_eq!("mon".parse::<WeekStart>(), Ok(WeekStart::Monday));
        assert!("friday".parse::<WeekStart>().is_err());
    }

    #[test]
    fn month_navigation() {
        assert_eq!(previous_month(ymd(2024, 3, 31)), ymd(2024, 2, 1));
        assert_eq!(previous_month(ymd(2024, 1, 15)), ymd(2023, 12, 1));
        assert_eq!(next_month(ymd(2024, 1, 31)), ymd(2024, 2, 1));
        assert_eq!(next_month(ymd(2024, 12, 1)), ymd(2025, 1, 1));
    }
}
