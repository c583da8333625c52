//! Collapses selected days into maximal same-type runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::is_next_day;
use crate::day_type::DayType;
use crate::selection::{DatedSelection, SelectionId};

/// A run of consecutive days sharing a day type.
///
/// Single-day runs carry neither `end` nor `members`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DatedSelection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DatedSelection>,
    pub id: SelectionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<DatedSelection>>,
}

impl DateRange {
    fn from_run(run: Vec<DatedSelection>) -> Option<Self> {
        let start = *run.first()?;
        if run.len() == 1 {
            return Some(Self {
                start,
                end: None,
                id: start.id,
                members: None,
            });
        }
        let end = run.last().copied();
        Some(Self {
            start,
            end,
            id: start.id,
            members: Some(run),
        })
    }

    pub fn day_type(&self) -> DayType {
        self.start.day_type
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.map_or(self.start.date, |end| end.date)
    }

    pub fn is_single_day(&self) -> bool {
        self.end.is_none()
    }

    /// Number of days covered.
    pub fn len(&self) -> usize {
        match (&self.members, self.end) {
            (Some(members), _) => members.len(),
            (None, Some(_)) => 2,
            (None, None) => 1,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day() <= date && date <= self.last_day()
    }

    /// Every date folded into the range, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        match (&self.members, self.end) {
            (Some(members), _) => members.iter().map(|member| member.date).collect(),
            (None, Some(end)) => vec![self.start.date, end.date],
            (None, None) => vec![self.start.date],
        }
    }
}

/// Builds the ordered list of maximal runs from an unordered selection.
///
/// Two neighbours join the same run only when they are exactly one day apart
/// and carry the same [`DayType`].
pub fn compute_ranges<'a, I>(selections: I) -> Vec<DateRange>
where
    I: IntoIterator<Item = &'a DatedSelection>,
{
    let mut sorted: Vec<DatedSelection> = selections.into_iter().copied().collect();
    sorted.sort_by_key(|selection| selection.date);

    let mut ranges = Vec::new();
    let mut run: Vec<DatedSelection> = Vec::new();

    for current in sorted {
        let extends = run.last().is_some_and(|previous| {
            is_next_day(previous.date, current.date) && previous.day_type == current.day_type
        });
        if !extends {
            ranges.extend(DateRange::from_run(std::mem::take(&mut run)));
        }
        run.push(current);
    }
    ranges.extend(DateRange::from_run(run));

    ranges
}
