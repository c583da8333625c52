//! Core library for dayrange: full/half day selection and range merging.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `day_type` | Full/half tags and classifier predicates |
//! | `calendar` | Day-granularity helpers and month grids |
//! | `selection` | Selected days and the set holding them |
//! | `ranges` | Merging selections into maximal runs |
//! | `state` | The selection state manager driven by a calendar UI |
//! | `presentation` | Cell modifiers and range table rows |
//! | `config` | Persisted preferences |
//! | `logging` | Structured logging setup |

pub mod calendar;
pub mod config;
pub mod day_type;
pub mod logging;
pub mod presentation;
pub mod ranges;
pub mod selection;
pub mod state;

pub use calendar::{AsCalendarDay, WeekStart, date_span, days_between, month_grid};
pub use config::{
    ConfigError, ConfigLoadResult, ConfigSource, DisplayPreferences, FileConfig,
    SelectionPreferences, config_directory, config_path, load_config, load_config_from,
    save_config, save_config_to,
};
pub use day_type::{DayType, ParseDayTypeError, is_full_day, is_half_day};
pub use logging::{LoggingDestination, LoggingError, current_log_path, init_logging};
pub use presentation::{DateFormat, DayCounts, DayModifiers, InvalidDateFormat, RangeRow};
pub use ranges::{DateRange, compute_ranges};
pub use selection::{DatedSelection, SelectionId, SelectionSet};
pub use state::DateState;
