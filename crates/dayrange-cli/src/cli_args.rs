use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use dayrange_core::{DayType, WeekStart, date_span};
use thiserror::Error;

/// Top-level CLI entrypoint.
#[derive(Parser, Debug, Clone)]
#[command(name = "dayrange", version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the per-user one.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub select: SelectArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Replay a script of selection commands (from a file or stdin).
    Session(SessionArgs),
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Configuration subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML.
    Show,
    /// Print the config file location.
    Path,
    /// Set the day type new sessions start with.
    SetDayType { day_type: DayType },
    /// Set the strftime pattern used for range labels.
    SetDateFormat { format: String },
    /// Set the first column of rendered calendars.
    SetWeekStart { week_start: WeekStart },
    /// Restore defaults.
    Reset,
}

/// Arguments for the session subcommand.
#[derive(Debug, Clone, Args, Default)]
pub struct SessionArgs {
    /// Script file; stdin when omitted.
    #[arg(long, short, value_hint = ValueHint::FilePath)]
    pub script: Option<PathBuf>,

    /// Print the final ranges as JSON.
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,
}

/// Arguments for the default one-shot selection.
#[derive(Debug, Clone, Args, Default)]
pub struct SelectArgs {
    /// Select full days (YYYY-MM-DD or YYYY-MM-DD..YYYY-MM-DD).
    #[arg(long = "full", value_name = "DATE|SPAN", value_parser = parse_date_arg)]
    pub full: Vec<DateArg>,

    /// Select half days (YYYY-MM-DD or YYYY-MM-DD..YYYY-MM-DD).
    #[arg(long = "half", value_name = "DATE|SPAN", value_parser = parse_date_arg)]
    pub half: Vec<DateArg>,

    /// Print ranges as JSON instead of a table.
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Also draw the given month (YYYY-MM) with range markers.
    #[arg(long = "calendar", value_name = "YYYY-MM", value_parser = parse_month)]
    pub calendar: Vec<NaiveDate>,
}

/// Days resolved from the selection flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPlan {
    pub full: Vec<NaiveDate>,
    pub half: Vec<NaiveDate>,
}

impl SelectArgs {
    /// Returns true when no days were requested.
    pub fn is_empty(&self) -> bool {
        self.full.is_empty() && self.half.is_empty()
    }

    /// Expand spans into days plus any advisory warnings.
    ///
    /// A day given as both full and half ends up half, since half days are
    /// applied second.
    pub fn to_plan(&self) -> (SelectionPlan, Vec<String>) {
        let mut warnings = Vec::new();
        let full: BTreeSet<NaiveDate> = self.full.iter().flat_map(DateArg::days).collect();
        let half: BTreeSet<NaiveDate> = self.half.iter().flat_map(DateArg::days).collect();

        let overlap: Vec<String> = full.intersection(&half).map(|d| d.to_string()).collect();
        if !overlap.is_empty() {
            warnings.push(format!(
                "Dates given as both --full and --half are kept as half days: {}",
                overlap.join(", ")
            ));
        }

        (
            SelectionPlan {
                full: full.into_iter().collect(),
                half: half.into_iter().collect(),
            },
            warnings,
        )
    }
}

/// A single day or an inclusive span of days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateArg {
    Day(NaiveDate),
    Span(NaiveDate, NaiveDate),
}

impl DateArg {
    pub fn days(&self) -> Vec<NaiveDate> {
        match *self {
            DateArg::Day(day) => vec![day],
            DateArg::Span(start, end) => date_span(start, end),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    Date(String),
    #[error("invalid span '{0}': start is after end")]
    ReversedSpan(String),
    #[error("invalid month '{0}' (expected YYYY-MM)")]
    Month(String),
}

pub fn parse_date(value: &str) -> Result<NaiveDate, ArgError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ArgError::Date(value.trim().to_string()))
}

pub fn parse_date_arg(value: &str) -> Result<DateArg, ArgError> {
    match value.split_once("..") {
        Some((start, end)) => {
            let start = parse_date(start)?;
            let end = parse_date(end)?;
            if start > end {
                return Err(ArgError::ReversedSpan(value.to_string()));
            }
            Ok(DateArg::Span(start, end))
        }
        None => parse_date(value).map(DateArg::Day),
    }
}

/// Parses `YYYY-MM` into the first day of that month.
pub fn parse_month(value: &str) -> Result<NaiveDate, ArgError> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
        .map_err(|_| ArgError::Month(value.trim().to_string()))
}
