//! End-to-end tests against the built binary.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_grid_cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run grid_cli")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_default_output_is_kilometers() {
    let output = run(&["FN42", "JO01"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5325.2 km\n");
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_unit_option() {
    let output = run(&["FN42", "JO01", "--unit", "mi"]);
    assert_eq!(stdout(&output), "3309.1 miles\n");

    let output = run(&["-u", "nm", "FN42", "JO01"]);
    assert_eq!(stdout(&output), "2875.3 nm\n");
}

#[test]
fn test_lowercase_locators() {
    let upper = run(&["FN42HN", "DM13AT"]);
    let lower = run(&["fn42hn", "dm13at"]);
    assert_eq!(stdout(&upper), stdout(&lower));
    assert_eq!(stdout(&upper), "4131.5 km\n");
}

#[test]
fn test_verbose_output() {
    let output = run(&["CN87", "CN88", "-v"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("From: CN87"));
    assert!(text.contains("111.2 km"));
    assert!(text.contains("69.1 miles"));
    assert!(text.contains("60.0 nautical miles"));
    assert!(text.contains("Bearing:        0.0° (N)"));
    assert!(text.contains("Back Bearing: 180.0° (S)"));
}

#[test]
fn test_json_output() {
    let output = run(&["jn25", "qf22", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["grid1"], "JN25");
    assert_eq!(value["grid2"], "QF22");
    assert_eq!(value["unit"], "km");
    assert!((value["distance"].as_f64().unwrap() - 16605.4).abs() < 0.1);
}

#[test]
fn test_no_arguments_prints_examples() {
    let output = run(&[]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Boston area to London area"));
    assert!(text.contains("Europe to Australia"));
    assert!(text.contains("--help"));
}

#[test]
fn test_help() {
    for flag in ["--help", "-h"] {
        let output = run(&[flag]);
        assert!(output.status.success());
        let text = stdout(&output);
        assert!(text.contains("Usage:"));
        assert!(text.contains("GRID1"));
    }
}

#[test]
fn test_invalid_locator() {
    let output = run(&["FN4", "JO01"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output),
        "Error: Grid square must be 2, 4, 6, or 8 characters\n"
    );

    let output = run(&["FN42", "AB1C"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: Characters 3-4 must be digits\n");
}

#[test]
fn test_argument_errors_exit_one() {
    let cases: [&[&str]; 5] = [
        &["FN42"],
        &["FN42", "JO01", "CN87"],
        &["FN42", "JO01", "--unit", "furlongs"],
        &["FN42", "JO01", "--unit"],
        &["FN42", "JO01", "--bogus"],
    ];
    for args in cases {
        let output = run(args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
        assert!(stdout(&output).is_empty(), "{args:?}");
        assert!(!stderr(&output).is_empty(), "{args:?}");
    }
}
