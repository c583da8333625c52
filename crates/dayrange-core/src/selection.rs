//! Selected days and the set that holds them.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::day_type::{self, DayType};

/// Identity of a selection, stable across day-type changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionId(u64);

impl SelectionId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sel-{}", self.0)
    }
}

/// A single picked day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatedSelection {
    pub date: NaiveDate,
    pub day_type: DayType,
    pub id: SelectionId,
}

impl DatedSelection {
    pub fn is_full_day(&self) -> bool {
        day_type::is_full_day(self)
    }

    pub fn is_half_day(&self) -> bool {
        day_type::is_half_day(self)
    }
}

/// Selected days keyed by calendar date, at most one entry per day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    days: BTreeMap<NaiveDate, DatedSelection>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DatedSelection> {
        self.days.get(&date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    /// Selections in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = &DatedSelection> + '_ {
        self.days.values()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    /// Inserts or replaces the entry for `selection.date`, returning the previous one.
    pub(crate) fn upsert(&mut self, selection: DatedSelection) -> Option<DatedSelection> {
        self.days.insert(selection.date, selection)
    }

    pub(crate) fn remove(&mut self, date: NaiveDate) -> Option<DatedSelection> {
        self.days.remove(&date)
    }

    pub(crate) fn clear(&mut self) {
        self.days.clear();
    }

    pub fn to_vec(&self) -> Vec<DatedSelection> {
        self.days.values().copied().collect()
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a DatedSelection;
    type IntoIter = std::collections::btree_map::Values<'a, NaiveDate, DatedSelection>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.values()
    }
}
