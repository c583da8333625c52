//! UI widgets for the calendar window

pub mod activity_log;
pub mod calendar_grid;
pub mod day_type_toggle;
pub mod range_table;
pub mod summary;
