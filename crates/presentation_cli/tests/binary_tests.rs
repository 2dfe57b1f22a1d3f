//! End-to-end tests for the compiled binary's exit behavior
//!
//! Spawns the built binary to verify the argument-handling contract
//! without touching the network: any parse failure prints the usage text
//! on stdout and exits with code 1, while help and version output exit 0.

use std::process::{Command, Output};

/// Run the compiled binary with the given arguments
fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mvg-abfahrten"))
        .args(args)
        .output()
        .expect("binary should run")
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn assert_usage_exit(output: &Output) {
    assert_eq!(output.status.code(), Some(1));

    let stdout = stdout_text(output);
    assert!(stdout.contains("Usage:"), "usage missing: {stdout}");
    assert!(stdout.contains("<LAT>"), "usage missing <LAT>: {stdout}");
    assert!(stdout.contains("<LNG>"), "usage missing <LNG>: {stdout}");
    assert!(stdout.contains("Example:"), "example line missing: {stdout}");

    // The usage text belongs on stdout, nothing on stderr.
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn cli_no_arguments_prints_usage_and_exits_one() {
    let output = run_binary(&[]);
    assert_usage_exit(&output);
}

#[test]
fn cli_single_argument_prints_usage_and_exits_one() {
    let output = run_binary(&["48.154"]);
    assert_usage_exit(&output);
}

#[test]
fn cli_non_numeric_coordinate_prints_usage_and_exits_one() {
    let output = run_binary(&["north", "11.620"]);
    assert_usage_exit(&output);
}

#[test]
fn cli_unknown_flag_prints_usage_and_exits_one() {
    let output = run_binary(&["48.154", "11.620", "--bogus"]);
    assert_usage_exit(&output);
}

#[test]
fn cli_help_exits_zero() {
    let output = run_binary(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_text(&output);
    assert!(stdout.contains("Nearby departures from Munich public transport"));
    assert!(stdout.contains("Usage:"));
}

#[test]
fn cli_version_exits_zero() {
    let output = run_binary(&["--version"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_text(&output).contains("mvg-abfahrten"));
}
