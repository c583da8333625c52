//! UI-specific state (ephemeral)

use std::collections::VecDeque;

use chrono::NaiveDate;
use dayrange_core::calendar::{next_month, previous_month};

const MAX_ACTIVITY: usize = 100;

/// UI-specific state that doesn't need to be persisted
#[derive(Clone, Debug)]
pub struct UiState {
    /// Current theme (dark/light)
    pub theme: Theme,

    /// First day of the month shown in the calendar
    pub month: NaiveDate,

    /// Activity log visibility
    pub activity_expanded: bool,

    /// Recent selection changes, newest last
    pub activity: VecDeque<ActivityEntry>,
}

impl UiState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            theme: Theme::Dark,
            month: first_of_month(today),
            activity_expanded: false,
            activity: VecDeque::with_capacity(MAX_ACTIVITY),
        }
    }

    pub fn show_previous_month(&mut self) {
        self.month = previous_month(self.month);
    }

    pub fn show_next_month(&mut self) {
        self.month = next_month(self.month);
    }

    pub fn show_month_of(&mut self, day: NaiveDate) {
        self.month = first_of_month(day);
    }

    /// Add an entry, keeping at most `MAX_ACTIVITY`
    pub fn push_activity(&mut self, entry: ActivityEntry) {
        if self.activity.len() >= MAX_ACTIVITY {
            self.activity.pop_front();
        }
        self.activity.push_back(entry);
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    next_month(previous_month(day))
}

/// Theme selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// One line of the activity log
#[derive(Clone, Debug)]
pub struct ActivityEntry {
    pub timestamp: String,
    pub level: ActivityLevel,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityLevel {
    Info,
    Warning,
}
