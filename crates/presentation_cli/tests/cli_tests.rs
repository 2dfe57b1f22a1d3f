//! Integration tests for CLI argument parsing
//!
//! These tests verify the argument surface without performing network
//! calls, using a mirrored parser structure.

use std::ffi::OsString;

use clap::Parser;

// Mock CLI structure for testing (mirrors main.rs)
#[derive(Parser)]
#[command(name = "mvg-abfahrten")]
#[command(version, about = "Nearby departures from Munich public transport", long_about = None)]
struct Cli {
    #[arg(allow_negative_numbers = true)]
    lat: f64,

    #[arg(allow_negative_numbers = true)]
    lng: f64,

    #[arg(short, long, default_value_t = 8)]
    limit: u8,

    #[arg(short, long, default_value_t = 0)]
    offset: u32,

    #[arg(short, long)]
    types: Option<String>,

    #[arg(short, long)]
    compact: bool,

    #[arg(short, long)]
    json: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_coordinates() {
    let cli = parse_args(&["mvg-abfahrten", "48.154", "11.620"]).unwrap();
    assert!((cli.lat - 48.154).abs() < f64::EPSILON);
    assert!((cli.lng - 11.620).abs() < f64::EPSILON);
}

#[test]
fn cli_uses_documented_defaults() {
    let cli = parse_args(&["mvg-abfahrten", "48.154", "11.620"]).unwrap();
    assert_eq!(cli.limit, 8);
    assert_eq!(cli.offset, 0);
    assert!(cli.types.is_none());
    assert!(!cli.compact);
    assert!(!cli.json);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_requires_both_coordinates() {
    assert!(parse_args(&["mvg-abfahrten"]).is_err());
    assert!(parse_args(&["mvg-abfahrten", "48.154"]).is_err());
}

#[test]
fn cli_rejects_non_numeric_coordinates() {
    assert!(parse_args(&["mvg-abfahrten", "north", "east"]).is_err());
    assert!(parse_args(&["mvg-abfahrten", "48.154", "east"]).is_err());
}

#[test]
fn cli_parses_long_flags() {
    let cli = parse_args(&[
        "mvg-abfahrten",
        "48.154",
        "11.620",
        "--limit",
        "5",
        "--offset",
        "3",
        "--compact",
        "--json",
    ])
    .unwrap();
    assert_eq!(cli.limit, 5);
    assert_eq!(cli.offset, 3);
    assert!(cli.compact);
    assert!(cli.json);
}

#[test]
fn cli_parses_short_flags() {
    let cli = parse_args(&[
        "mvg-abfahrten",
        "48.154",
        "11.620",
        "-l",
        "5",
        "-o",
        "3",
        "-c",
        "-j",
    ])
    .unwrap();
    assert_eq!(cli.limit, 5);
    assert_eq!(cli.offset, 3);
    assert!(cli.compact);
    assert!(cli.json);
}

#[test]
fn cli_parses_types_filter() {
    let cli = parse_args(&["mvg-abfahrten", "48.154", "11.620", "--types", "U,S,TRAM"]).unwrap();
    assert_eq!(cli.types.as_deref(), Some("U,S,TRAM"));

    let cli = parse_args(&["mvg-abfahrten", "48.154", "11.620", "-t", "BUS"]).unwrap();
    assert_eq!(cli.types.as_deref(), Some("BUS"));
}

#[test]
fn cli_parses_verbose_flag() {
    let cli = parse_args(&["mvg-abfahrten", "48.154", "11.620", "-v"]).unwrap();
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_parses_multiple_verbose_flags() {
    let cli = parse_args(&["mvg-abfahrten", "48.154", "11.620", "-vvv"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_parses_negative_coordinates() {
    let cli = parse_args(&["mvg-abfahrten", "-33.868", "151.207"]).unwrap();
    assert!(cli.lat < 0.0);
    assert!((cli.lng - 151.207).abs() < f64::EPSILON);
}

#[test]
fn cli_rejects_unknown_flags() {
    assert!(parse_args(&["mvg-abfahrten", "48.154", "11.620", "--raw"]).is_err());
}

#[test]
fn cli_rejects_limit_overflow() {
    // limit is a u8; values past 255 are parse errors
    assert!(parse_args(&["mvg-abfahrten", "48.154", "11.620", "--limit", "300"]).is_err());
}
