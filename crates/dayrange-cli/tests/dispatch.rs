use std::fs;

use clap::Parser;
use dayrange_cli::cli_args::Cli;
use dayrange_cli::dispatch;
use dayrange_core::{DayType, WeekStart, load_config_from};
use tempfile::tempdir;

fn run(args: &[&str]) -> Result<String, String> {
    let cli = Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    let mut out = Vec::new();
    dispatch(cli, &mut out)?;
    Ok(String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn one_shot_selection_prints_range_table() {
    let temp = tempdir().expect("tempdir");
    let config = temp.path().join("config.toml");
    let config = config.to_str().unwrap();

    let output = run(&[
        "dayrange",
        "--config",
        config,
        "--full",
        "2024-01-01..2024-01-03",
        "--half",
        "2024-01-04",
    ])
    .expect("dispatch");

    assert!(output.contains("01/01/2024 - 03/01/2024  Full"));
    assert!(output.contains("04/01/2024"));
    assert!(output.contains("3 full, 1 half (3.5 days)"));
}

#[test]
fn one_shot_selection_json() {
    let temp = tempdir().expect("tempdir");
    let config = temp.path().join("config.toml");

    let output = run(&[
        "dayrange",
        "--config",
        config.to_str().unwrap(),
        "--json",
        "--full",
        "2024-01-01",
        "--full",
        "2024-01-03",
    ])
    .expect("dispatch");

    let json: serde_json::Value = serde_json::from_str(&output).expect("valid json");
    assert_eq!(json["ranges"].as_array().unwrap().len(), 2);
    assert!(json["ranges"][0].get("end").is_none());
}

#[test]
fn session_script_from_file() {
    let temp = tempdir().expect("tempdir");
    let config = temp.path().join("config.toml");
    let script = temp.path().join("plan.txt");
    fs::write(
        &script,
        "# holiday plan\n\
         add 2024-01-01..2024-01-05\n\
         type half\n\
         toggle 2024-01-03\n\
         type full\n\
         toggle 2024-01-05\n",
    )
    .expect("write script");

    let output = run(&[
        "dayrange",
        "--config",
        config.to_str().unwrap(),
        "session",
        "--script",
        script.to_str().unwrap(),
    ])
    .expect("dispatch");

    assert!(output.contains("01/01/2024 - 02/01/2024  Full"));
    assert!(output.contains("03/01/2024               Half"));
    assert!(output.contains("04/01/2024               Full"));
    assert!(!output.contains("05/01/2024"));
}

#[test]
fn session_script_errors_name_the_line() {
    let temp = tempdir().expect("tempdir");
    let script = temp.path().join("bad.txt");
    fs::write(&script, "add 2024-01-01\ntoggle tomorrow\n").expect("write script");

    let err = run(&[
        "dayrange",
        "--config",
        temp.path().join("config.toml").to_str().unwrap(),
        "session",
        "--script",
        script.to_str().unwrap(),
    ])
    .unwrap_err();

    assert!(err.starts_with("line 2:"), "got {err}");
}

#[test]
fn config_commands_persist_preferences() {
    let temp = tempdir().expect("tempdir");
    let config = temp.path().join("config.toml");
    let config_arg = config.to_str().unwrap();

    run(&["dayrange", "--config", config_arg, "config", "set-day-type", "half"]).expect("set type");
    run(&["dayrange", "--config", config_arg, "config", "set-week-start", "sunday"])
        .expect("set week start");
    run(&["dayrange", "--config", config_arg, "config", "set-date-format", "%Y-%m-%d"])
        .expect("set format");

    let loaded = load_config_from(&config);
    assert_eq!(loaded.config.selection.default_day_type, DayType::Half);
    assert_eq!(loaded.config.display.week_start, WeekStart::Sunday);
    assert_eq!(loaded.config.display.date_format, "%Y-%m-%d");

    let output = run(&["dayrange", "--config", config_arg, "--full", "2024-01-01"])
        .expect("dispatch");
    assert!(output.contains("2024-01-01"));

    run(&["dayrange", "--config", config_arg, "config", "reset"]).expect("reset");
    let loaded = load_config_from(&config);
    assert_eq!(loaded.config.selection.default_day_type, DayType::Full);
}

#[test]
fn config_rejects_bad_date_format() {
    let temp = tempdir().expect("tempdir");
    let config = temp.path().join("config.toml");
    let err = run(&[
        "dayrange",
        "--config",
        config.to_str().unwrap(),
        "config",
        "set-date-format",
        "%Q",
    ])
    .unwrap_err();
    assert!(err.contains("%Q"));
    assert!(!config.exists());
}

#[test]
fn selection_flags_conflict_with_subcommands() {
    let err = run(&["dayrange", "--full", "2024-01-01", "config", "show"]).unwrap_err();
    assert!(err.contains("cannot be combined"));
}
