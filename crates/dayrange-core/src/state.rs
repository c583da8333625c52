//! Selection state manager.
//!
//! [`DateState`] owns the selected days for one editing session. The calendar
//! calls the mutators from its click handlers and reads the range predicates
//! while painting cells. Ranges are derived from the selection on first read
//! and cached until the next mutation.

use std::cell::OnceCell;
use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::calendar::AsCalendarDay;
use crate::day_type::DayType;
use crate::ranges::{DateRange, compute_ranges};
use crate::selection::{DatedSelection, SelectionId, SelectionSet};

/// How the current click applies to a day that is already selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reselect {
    /// Same type again removes the day.
    Toggle,
    /// Same type again leaves the day alone.
    Keep,
}

#[derive(Debug, Clone, Default)]
pub struct DateState {
    selections: SelectionSet,
    day_type: DayType,
    next_id: u64,
    /// Set once the counter has passed `u64::MAX`; ids then fill gaps.
    ids_exhausted: bool,
    ranges: OnceCell<Vec<DateRange>>,
}

impl DateState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day_type(day_type: DayType) -> Self {
        Self {
            day_type,
            ..Self::default()
        }
    }

    /// Seeds the state with existing selections.
    ///
    /// The first entry for a date wins. A seed whose id is already taken gets
    /// a fresh one. New ids continue above the highest seeded id.
    pub fn from_selections<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = DatedSelection>,
    {
        let mut state = Self::new();
        let mut taken = BTreeSet::new();
        let mut reassign = Vec::new();
        for selection in initial {
            if state.selections.contains(selection.date) {
                warn!(date = %selection.date, id = %selection.id, "Dropping duplicate seeded selection");
                continue;
            }
            if !taken.insert(selection.id) {
                reassign.push(selection);
                continue;
            }
            state.advance_past(selection.id);
            state.selections.upsert(selection);
        }
        for selection in reassign {
            let id = state.allocate_id();
            warn!(date = %selection.date, old = %selection.id, new = %id, "Re-numbering seeded selection with a taken id");
            state.selections.upsert(DatedSelection { id, ..selection });
        }
        state
    }

    // ---- day type ----

    pub fn day_type(&self) -> DayType {
        self.day_type
    }

    /// Sets the type applied by subsequent clicks. Existing selections keep theirs.
    pub fn set_day_type(&mut self, day_type: DayType) {
        debug!(?day_type, "Day type changed");
        self.day_type = day_type;
    }

    pub fn is_full_day_mode(&self) -> bool {
        self.day_type == DayType::Full
    }

    pub fn is_half_day_mode(&self) -> bool {
        self.day_type == DayType::Half
    }

    // ---- mutators ----

    /// Click handler for a single calendar cell.
    ///
    /// `None` is the picker's "deselect all" signal and clears everything.
    pub fn toggle_date<D: AsCalendarDay>(&mut self, date: Option<D>) {
        match date {
            Some(date) => {
                let day = date.calendar_day();
                self.apply(day, Reselect::Toggle);
                self.invalidate();
            }
            None => self.clear(),
        }
    }

    /// Bulk selection from multi-select input modes.
    ///
    /// Days already selected with the current type stay selected. An empty
    /// input clears everything.
    pub fn add_dates<I>(&mut self, dates: I)
    where
        I: IntoIterator,
        I::Item: AsCalendarDay,
    {
        let mut dates = dates.into_iter().peekable();
        if dates.peek().is_none() {
            self.clear();
            return;
        }
        for date in dates {
            self.apply(date.calendar_day(), Reselect::Keep);
        }
        self.invalidate();
    }

    /// Removes every listed day that is selected; others are ignored.
    pub fn remove_dates<I>(&mut self, dates: I)
    where
        I: IntoIterator,
        I::Item: AsCalendarDay,
    {
        let mut removed = 0usize;
        for date in dates {
            if self.selections.remove(date.calendar_day()).is_some() {
                removed += 1;
            }
        }
        debug!(removed, "Removed dates");
        if removed > 0 {
            self.invalidate();
        }
    }

    /// Removes the days a range was built from.
    pub fn remove_range(&mut self, range: &DateRange) {
        match &range.members {
            Some(members) => self.remove_dates(members.iter().map(|member| member.date)),
            None => self.remove_dates(
                std::iter::once(range.start.date).chain(range.end.map(|end| end.date)),
            ),
        }
    }

    pub fn clear(&mut self) {
        if !self.selections.is_empty() {
            debug!(count = self.selections.len(), "Cleared selection");
        }
        self.selections.clear();
        self.invalidate();
    }

    fn apply(&mut self, day: NaiveDate, reselect: Reselect) {
        let day_type = self.day_type;
        match self.selections.get(day).copied() {
            None => {
                let id = self.allocate_id();
                self.selections.upsert(DatedSelection {
                    date: day,
                    day_type,
                    id,
                });
                debug!(date = %day, ?day_type, %id, "Selected day");
            }
            Some(existing) if existing.day_type == day_type => {
                if reselect == Reselect::Toggle {
                    self.selections.remove(day);
                    debug!(date = %day, id = %existing.id, "Deselected day");
                }
            }
            Some(existing) => {
                self.selections.upsert(DatedSelection {
                    day_type,
                    ..existing
                });
                debug!(date = %day, from = ?existing.day_type, to = ?day_type, "Changed day type");
            }
        }
    }

    fn allocate_id(&mut self) -> SelectionId {
        if self.ids_exhausted {
            return self.lowest_free_id();
        }
        let id = SelectionId::new(self.next_id);
        match self.next_id.checked_add(1) {
            Some(next) => self.next_id = next,
            None => self.ids_exhausted = true,
        }
        id
    }

    fn advance_past(&mut self, id: SelectionId) {
        match id.get().checked_add(1) {
            Some(next) => self.next_id = self.next_id.max(next),
            None => self.ids_exhausted = true,
        }
    }

    fn lowest_free_id(&self) -> SelectionId {
        let used: BTreeSet<SelectionId> = self.selections.iter().map(|s| s.id).collect();
        let mut candidate = 0;
        for id in used {
            if id.get() != candidate {
                break;
            }
            candidate += 1;
        }
        SelectionId::new(candidate)
    }

    fn invalidate(&mut self) {
        self.ranges.take();
    }

    // ---- queries ----

    pub fn selections(&self) -> &SelectionSet {
        &self.selections
    }

    pub fn selection<D: AsCalendarDay>(&self, date: D) -> Option<&DatedSelection> {
        self.selections.get(date.calendar_day())
    }

    /// Plain dates of the current selection, ascending.
    pub fn selected_dates(&self) -> Vec<NaiveDate> {
        self.selections.dates().collect()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Maximal same-type runs of the current selection, ascending.
    pub fn ranges(&self) -> &[DateRange] {
        self.ranges.get_or_init(|| compute_ranges(&self.selections))
    }

    pub fn range_containing<D: AsCalendarDay>(&self, date: D) -> Option<&DateRange> {
        let day = date.calendar_day();
        self.ranges().iter().find(|range| range.contains(day))
    }

    pub fn range_by_id(&self, id: SelectionId) -> Option<&DateRange> {
        self.ranges().iter().find(|range| range.id == id)
    }

    /// First day of a multi-day range.
    pub fn is_start_of_range<D: AsCalendarDay>(&self, date: D) -> bool {
        let day = date.calendar_day();
        self.ranges()
            .iter()
            .any(|range| range.end.is_some() && range.start.date == day)
    }

    /// Last day of a multi-day range.
    pub fn is_end_of_range<D: AsCalendarDay>(&self, date: D) -> bool {
        let day = date.calendar_day();
        self.ranges()
            .iter()
            .any(|range| range.end.is_some_and(|end| end.date == day))
    }

    /// Strictly inside a multi-day range, excluding both ends.
    pub fn is_middle_of_range<D: AsCalendarDay>(&self, date: D) -> bool {
        let day = date.calendar_day();
        self.ranges().iter().any(|range| {
            range
                .end
                .is_some_and(|end| range.start.date < day && day < end.date)
        })
    }

    pub fn is_day_type<D: AsCalendarDay>(&self, date: D, day_type: DayType) -> bool {
        self.selection(date)
            .is_some_and(|selection| selection.day_type == day_type)
    }

    pub fn is_date_selected<D: AsCalendarDay>(&self, date: D) -> bool {
        self.selections.contains(date.calendar_day())
    }
}
