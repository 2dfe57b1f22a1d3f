//! MVG departures CLI
//!
//! Finds the public transport stop nearest to a coordinate and prints
//! its upcoming departures, as a text report or as raw JSON.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use clap::{CommandFactory, Parser};
use integration_mvg::{BoardOptions, DepartureService, HttpMvgClient, MvgConfig, TransportType};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// MVG departures CLI
#[derive(Parser)]
#[command(name = "mvg-abfahrten")]
#[command(version, about = "Nearby departures from Munich public transport", long_about = None)]
struct Cli {
    /// Latitude of the search position
    #[arg(allow_negative_numbers = true)]
    lat: f64,

    /// Longitude of the search position
    #[arg(allow_negative_numbers = true)]
    lng: f64,

    /// Maximum number of departures
    #[arg(short, long, default_value_t = 8)]
    limit: u8,

    /// Look-ahead offset in minutes, e.g. walking time to the stop
    #[arg(short, long, default_value_t = 0)]
    offset: u32,

    /// Comma-separated transport type filter (U,S,BUS,TRAM,REGIONAL,BAHN,SCHIFF)
    #[arg(short, long)]
    types: Option<String>,

    /// One line per departure
    #[arg(short, long)]
    compact: bool,

    /// Print the station and departures as raw JSON
    #[arg(short, long)]
    json: bool,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Parse the comma-separated `--types` value; unknown aliases are skipped
fn parse_types(raw: &str) -> Option<Vec<TransportType>> {
    let types: Vec<TransportType> = raw
        .split(',')
        .filter_map(TransportType::parse_alias)
        .collect();

    if types.is_empty() { None } else { Some(types) }
}

/// Usage text printed when the arguments cannot be parsed
fn usage_text() -> String {
    format!(
        "{}\nExample: mvg-abfahrten 48.154 11.620 --limit 5",
        Cli::command().render_usage()
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                err.exit()
            },
            _ => {
                println!("{}", usage_text());
                std::process::exit(1);
            },
        },
    };

    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = HttpMvgClient::new(&MvgConfig::default())?;
    let service = DepartureService::new(Arc::new(client));

    let mut options = BoardOptions::default()
        .with_limit(cli.limit)
        .with_offset_minutes(cli.offset)
        .with_compact(cli.compact);

    if let Some(types) = cli.types.as_deref().and_then(parse_types) {
        options = options.with_transport_types(types);
    }

    if cli.json {
        match service.nearest_board(cli.lat, cli.lng, &options).await? {
            Some(board) => println!("{}", serde_json::to_string_pretty(&board)?),
            None => println!("{}", serde_json::json!({ "error": "No station found" })),
        }
        return Ok(());
    }

    let report = service.render_nearest(cli.lat, cli.lng, &options).await?;
    println!("{report}");

    Ok(())
}
