//! Line-oriented selection scripts.
//!
//! ```text
//! type half
//! toggle 2024-01-02
//! add 2024-01-08..2024-01-12
//! remove-range 2024-01-10
//! calendar 2024-01
//! ```

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use dayrange_core::{DateFormat, DateState, DayType, FileConfig, WeekStart};
use thiserror::Error;
use tracing::{debug, info};

use crate::cli_args::{DateArg, parse_date, parse_date_arg, parse_month};
use crate::render;

/// One parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    SetType(DayType),
    Toggle(NaiveDate),
    Add(Vec<DateArg>),
    Remove(Vec<DateArg>),
    RemoveRange(NaiveDate),
    Clear,
    Ranges,
    Calendar(NaiveDate),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("failed to read session script: {0}")]
    Io(#[from] io::Error),
}

/// Parses one line; blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>, String> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let single = |what: &'static str| match args.as_slice() {
        [value] => Ok(*value),
        _ => Err(format!("'{verb}' takes exactly one {what}")),
    };
    let many = || -> Result<Vec<DateArg>, String> {
        if args.is_empty() {
            return Err(format!("'{verb}' needs at least one date"));
        }
        args.iter()
            .map(|arg| parse_date_arg(arg).map_err(|err| err.to_string()))
            .collect()
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "type" => SessionCommand::SetType(
            single("day type")?
                .parse::<DayType>()
                .map_err(|err| err.to_string())?,
        ),
        "toggle" => SessionCommand::Toggle(parse_date(single("date")?).map_err(|e| e.to_string())?),
        "add" => SessionCommand::Add(many()?),
        "remove" => SessionCommand::Remove(many()?),
        "remove-range" => {
            SessionCommand::RemoveRange(parse_date(single("date")?).map_err(|e| e.to_string())?)
        }
        "clear" => SessionCommand::Clear,
        "ranges" => SessionCommand::Ranges,
        "calendar" => {
            SessionCommand::Calendar(parse_month(single("month")?).map_err(|e| e.to_string())?)
        }
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(Some(command))
}

/// Parses a whole script, stopping at the first bad line.
pub fn parse_script(text: &str) -> Result<Vec<SessionCommand>, SessionError> {
    let mut commands = Vec::new();
    for (index, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(command)) => commands.push(command),
            Ok(None) => {}
            Err(message) => {
                return Err(SessionError::Parse {
                    line: index + 1,
                    message,
                });
            }
        }
    }
    Ok(commands)
}

/// Reads and parses a script from `path`, or from stdin when `None`.
pub fn read_script(path: Option<&Path>) -> Result<Vec<SessionCommand>, SessionError> {
    let text = match path {
        Some(file) => fs::read_to_string(file)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    parse_script(&text)
}

/// A selection being edited by a script.
#[derive(Debug, Clone)]
pub struct Session {
    state: DateState,
    format: DateFormat,
    week_start: WeekStart,
}

impl Session {
    pub fn new(config: &FileConfig) -> Self {
        Self {
            state: DateState::with_day_type(config.selection.default_day_type),
            format: config.date_format(),
            week_start: config.display.week_start,
        }
    }

    pub fn state(&self) -> &DateState {
        &self.state
    }

    /// Applies one command, writing any output it produces.
    pub fn apply<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> io::Result<()> {
        debug!(?command, "Applying session command");
        match command {
            SessionCommand::SetType(day_type) => self.state.set_day_type(day_type),
            SessionCommand::Toggle(day) => self.state.toggle_date(Some(day)),
            SessionCommand::Add(args) => {
                self.state.add_dates(args.iter().flat_map(DateArg::days));
            }
            SessionCommand::Remove(args) => {
                self.state.remove_dates(args.iter().flat_map(DateArg::days));
            }
            SessionCommand::RemoveRange(day) => match self.state.range_containing(day).cloned() {
                Some(range) => {
                    writeln!(out, "Removed {}", render::describe_range(&range))?;
                    self.state.remove_range(&range);
                }
                None => writeln!(out, "No range contains {day}")?,
            },
            SessionCommand::Clear => self.state.clear(),
            SessionCommand::Ranges => {
                write!(out, "{}", render::range_table(&self.state, &self.format))?;
            }
            SessionCommand::Calendar(month) => {
                write!(
                    out,
                    "{}",
                    render::month_calendar(&self.state, month, self.week_start)
                )?;
            }
        }
        Ok(())
    }

    /// Applies every command in order.
    pub fn run<W: Write>(&mut self, commands: Vec<SessionCommand>, out: &mut W) -> io::Result<()> {
        let total = commands.len();
        for command in commands {
            self.apply(command, out)?;
        }
        info!(commands = total, selected = self.state.len(), "Session finished");
        Ok(())
    }
}
