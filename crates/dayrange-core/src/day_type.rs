//! Full/half day tags and the predicates over tagged selections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::DatedSelection;

/// The two mutually exclusive tags a selected day may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DayType {
    #[default]
    Full,
    Half,
}

impl DayType {
    /// Badge text used by range tables.
    pub fn label(self) -> &'static str {
        match self {
            DayType::Full => "Full",
            DayType::Half => "Half",
        }
    }

    /// Amount of working time the tag stands for, in days.
    pub fn weight(self) -> f32 {
        match self {
            DayType::Full => 1.0,
            DayType::Half => 0.5,
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day type '{0}' (expected 'full' or 'half')")]
pub struct ParseDayTypeError(pub String);

impl FromStr for DayType {
    type Err = ParseDayTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "f" => Ok(DayType::Full),
            "half" | "h" => Ok(DayType::Half),
            _ => Err(ParseDayTypeError(s.to_string())),
        }
    }
}

/// Returns true when the selection is tagged as a full day.
pub fn is_full_day(selection: &DatedSelection) -> bool {
    selection.day_type == DayType::Full
}

/// Returns true when the selection is tagged as a half day.
pub fn is_half_day(selection: &DatedSelection) -> bool {
    selection.day_type == DayType::Half
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionId;
    use chrono::NaiveDate;

    fn selection(day_type: DayType) -> DatedSelection {
        DatedSelection {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            day_type,
            id: SelectionId::new(1),
        }
    }

    #[test]
    fn classifier_follows_tag() {
        let full = selection(DayType::Full);
        let half = selection(DayType::Half);
        assert!(is_full_day(&full));
        assert!(!is_half_day(&full));
        assert!(is_half_day(&half));
        assert!(!is_full_day(&half));
    }

    #[test]
    fn parse_accepts_short_and_mixed_case() {
        assert_eq!("Full".parse::<DayType>().unwrap(), DayType::Full);
        assert_eq!(" half ".parse::<DayType>().unwrap(), DayType::Half);
        assert_eq!("h".parse::<DayType>().unwrap(), DayType::Half);
        assert_eq!(
            "quarter".parse::<DayType>().unwrap_err(),
            ParseDayTypeError("quarter".to_string())
        );
    }

    #[test]
    fn default_is_full() {
        assert_eq!(DayType::default(), DayType::Full);
    }

    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_string(&DayType::Half).unwrap();
        assert_eq!(json, "\"Half\"");
        let parsed: DayType = serde_json::from_str("\"Full\"").unwrap();
        assert_eq!(parsed, DayType::Full);
    }
}
