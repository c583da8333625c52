//! Command-line front-end for dayrange.

pub mod cli_args;
pub mod render;
pub mod session;

use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use cli_args::{Cli, Command, ConfigCommand, SelectArgs, SessionArgs};
use dayrange_core::{
    ConfigLoadResult, DateState, DayType, FileConfig, LoggingDestination, config_path,
    init_logging, load_config_from, save_config_to,
};
use session::{Session, read_script};
use tracing::info;

/// Returns true when the process was started with any arguments.
pub fn should_run_cli_mode() -> bool {
    std::env::args_os().len() > 1
}

/// Parse the process arguments and run the requested command.
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();
    if let Err(err) = init_logging(LoggingDestination::FileAndStderr) {
        eprintln!("Warning: logging disabled: {err}");
    }
    let stdout = io::stdout();
    dispatch(cli, &mut stdout.lock())
}

/// Run a parsed command line, writing results to `out`.
pub fn dispatch<W: Write>(cli: Cli, out: &mut W) -> Result<(), String> {
    let path = cli.config.clone().unwrap_or_else(config_path);
    match cli.command {
        Some(Command::Session(args)) => {
            if !cli.select.is_empty() {
                return Err("Selection flags cannot be combined with the session command.".into());
            }
            run_session(&path, args, out)
        }
        Some(Command::Config(cmd)) => {
            if !cli.select.is_empty() {
                return Err("Selection flags cannot be combined with config commands.".into());
            }
            handle_config_command(&path, cmd, out)
        }
        None => run_select(&path, cli.select, out),
    }
}

fn load_with_warnings(path: &Path) -> FileConfig {
    let ConfigLoadResult {
        config, warnings, ..
    } = load_config_from(path);
    for warning in warnings {
        eprintln!("Warning: {warning}");
    }
    config
}

fn run_select<W: Write>(path: &Path, args: SelectArgs, out: &mut W) -> Result<(), String> {
    let config = load_with_warnings(path);
    let (plan, warnings) = args.to_plan();
    for warning in warnings {
        eprintln!("Warning: {warning}");
    }

    let mut state = DateState::with_day_type(DayType::Full);
    if !plan.full.is_empty() {
        state.add_dates(&plan.full);
    }
    state.set_day_type(DayType::Half);
    if !plan.half.is_empty() {
        state.add_dates(&plan.half);
    }
    info!(selected = state.len(), ranges = state.ranges().len(), "Computed ranges");

    write_report(&state, &config, args.json, &args.calendar, out)
}

fn write_report<W: Write>(
    state: &DateState,
    config: &FileConfig,
    json: bool,
    months: &[chrono::NaiveDate],
    out: &mut W,
) -> Result<(), String> {
    let io_err = |err: io::Error| format!("Failed to write output: {err}");
    if json {
        let report = render::json_report(state).map_err(|err| err.to_string())?;
        writeln!(out, "{report}").map_err(io_err)?;
    } else {
        write!(out, "{}", render::range_table(state, &config.date_format())).map_err(io_err)?;
    }
    for month in months {
        writeln!(out).map_err(io_err)?;
        write!(
            out,
            "{}",
            render::month_calendar(state, *month, config.display.week_start)
        )
        .map_err(io_err)?;
    }
    Ok(())
}

fn run_session<W: Write>(path: &Path, args: SessionArgs, out: &mut W) -> Result<(), String> {
    let config = load_with_warnings(path);
    let commands = read_script(args.script.as_deref()).map_err(|err| err.to_string())?;

    let mut session = Session::new(&config);
    session
        .run(commands, out)
        .map_err(|err| format!("Failed to write output: {err}"))?;

    writeln!(out).map_err(|err| err.to_string())?;
    write_report(session.state(), &config, args.json, &[], out)
}

fn handle_config_command<W: Write>(
    path: &Path,
    command: ConfigCommand,
    out: &mut W,
) -> Result<(), String> {
    let mut config = load_with_warnings(path);
    let io_err = |err: io::Error| err.to_string();

    match command {
        ConfigCommand::Show => {
            let rendered = toml::to_string_pretty(&config).map_err(|err| err.to_string())?;
            write!(out, "{rendered}").map_err(io_err)?;
            return Ok(());
        }
        ConfigCommand::Path => {
            writeln!(out, "{}", path.display()).map_err(io_err)?;
            return Ok(());
        }
        ConfigCommand::SetDayType { day_type } => {
            config.selection.default_day_type = day_type;
            writeln!(out, "Default day type set to {day_type}").map_err(io_err)?;
        }
        ConfigCommand::SetDateFormat { format } => {
            dayrange_core::DateFormat::new(&format).map_err(|err| err.to_string())?;
            writeln!(out, "Date format set to '{format}'").map_err(io_err)?;
            config.display.date_format = format;
        }
        ConfigCommand::SetWeekStart { week_start } => {
            config.display.week_start = week_start;
            writeln!(out, "Week start set to {week_start:?}").map_err(io_err)?;
        }
        ConfigCommand::Reset => {
            config = FileConfig::default();
            writeln!(out, "Configuration reset to defaults").map_err(io_err)?;
        }
    }

    save_config_to(path, &config).map_err(|err| err.to_string())
}
