use chrono::NaiveDate;
use clap::Parser;
use dayrange_cli::cli_args::{Cli, Command, ConfigCommand, DateArg};
use dayrange_core::{DayType, WeekStart};

// Integration tests for argument parsing and the one-shot selection flow.

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

#[test]
fn test_no_arguments_is_empty_selection() {
    let cli = Cli::try_parse_from(["dayrange"]).expect("parse");
    assert!(cli.select.is_empty());
    assert!(cli.command.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn test_repeated_full_and_half_flags() {
    let cli = Cli::try_parse_from([
        "dayrange",
        "--full",
        "2024-01-01..2024-01-03",
        "--full",
        "2024-01-10",
        "--half",
        "2024-01-04",
    ])
    .expect("parse");

    assert_eq!(
        cli.select.full,
        vec![DateArg::Span(jan(1), jan(3)), DateArg::Day(jan(10))]
    );
    assert_eq!(cli.select.half, vec![DateArg::Day(jan(4))]);

    let (plan, warnings) = cli.select.to_plan();
    assert!(warnings.is_empty());
    assert_eq!(plan.full, vec![jan(1), jan(2), jan(3), jan(10)]);
    assert_eq!(plan.half, vec![jan(4)]);
}

#[test]
fn test_invalid_date_is_rejected() {
    let result = Cli::try_parse_from(["dayrange", "--full", "2024-02-30"]);
    assert!(result.is_err(), "February 30th must not parse");

    let result = Cli::try_parse_from(["dayrange", "--half", "2024-01-09..2024-01-02"]);
    assert!(result.is_err(), "Reversed spans must not parse");
}

#[test]
fn test_calendar_month_flag() {
    let cli = Cli::try_parse_from(["dayrange", "--full", "2024-03-01", "--calendar", "2024-03"])
        .expect("parse");
    assert_eq!(
        cli.select.calendar,
        vec![NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()]
    );
    assert!(Cli::try_parse_from(["dayrange", "--calendar", "2024-13"]).is_err());
}

#[test]
fn test_session_subcommand() {
    let cli = Cli::try_parse_from(["dayrange", "session", "--script", "plan.txt", "--json"])
        .expect("parse");
    match cli.command {
        Some(Command::Session(args)) => {
            assert_eq!(args.script.unwrap().to_str(), Some("plan.txt"));
            assert!(args.json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_config_subcommands() {
    let cli = Cli::try_parse_from(["dayrange", "config", "set-day-type", "half"]).expect("parse");
    assert!(matches!(
        cli.command,
        Some(Command::Config(ConfigCommand::SetDayType {
            day_type: DayType::Half
        }))
    ));

    let cli = Cli::try_parse_from(["dayrange", "config", "set-week-start", "sunday"])
        .expect("parse");
    assert!(matches!(
        cli.command,
        Some(Command::Config(ConfigCommand::SetWeekStart {
            week_start: WeekStart::Sunday
        }))
    ));

    assert!(Cli::try_parse_from(["dayrange", "config", "set-day-type", "quarter"]).is_err());
}

#[test]
fn test_global_config_flag_after_subcommand() {
    let cli = Cli::try_parse_from(["dayrange", "config", "show", "--config", "/tmp/x.toml"])
        .expect("parse");
    assert_eq!(cli.config.unwrap().to_str(), Some("/tmp/x.toml"));
}
