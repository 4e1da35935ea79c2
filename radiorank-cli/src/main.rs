// Radiorank CLI - scenario comparison front-end
//
// Licensed under AGPL-3.0. See LICENSE file for details.

//! # Radiorank CLI
//!
//! Compares WiFi, Zigbee, LoRaWAN and NB-IoT under one usage scenario and
//! prints the ranked result table.
//!
//! ## Usage
//!
//! ```bash
//! # Default scenario
//! radiorank
//!
//! # Heavy traffic, small battery, CSV export
//! radiorank --messages 288 --payload 64 --battery 1200 --csv results.csv
//!
//! # Record why a protocol was chosen
//! radiorank --note "LoRaWAN: 12 km to the gateway, one message per hour"
//! ```

use clap::Parser;
use radiorank::{write_csv, Comparison, NoteStore, Scenario, DEFAULT_CSV_FILENAME};
use std::path::PathBuf;
use tracing::{error, info, warn, Level};
use tracing_subscriber::EnvFilter;

/// Radiorank - IoT protocol trade-off comparison
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of sensors [1-500]
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..=500))]
    sensors: u32,

    /// Messages per sensor per day [1-500]
    #[arg(long, default_value = "24", value_parser = clap::value_parser!(u32).range(1..=500))]
    messages: u32,

    /// Application payload per message, in bytes [1-512]
    #[arg(long, default_value = "24", value_parser = clap::value_parser!(u32).range(1..=512))]
    payload: u32,

    /// Battery capacity per sensor, in mAh [100-10000]
    #[arg(long, default_value = "2000", value_parser = clap::value_parser!(u32).range(100..=10_000))]
    battery: u32,

    /// Framing overhead inflation, in percent [1-50]
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..=50))]
    overhead: u32,

    /// Receive time per message as a fraction of transmit time
    #[arg(long, default_value = "1.0")]
    rx_ratio: f64,

    /// Load the scenario from a JSON preset instead of the numeric flags
    #[arg(long, value_name = "PATH")]
    scenario: Option<PathBuf>,

    /// Export the ranked table as CSV
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_CSV_FILENAME)]
    csv: Option<PathBuf>,

    /// Save a justification note next to the results
    #[arg(long, value_name = "TEXT")]
    note: Option<String>,

    /// Note file path (default: justification.txt in the working directory)
    #[arg(long, value_name = "PATH", requires = "note")]
    note_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };
        EnvFilter::from_default_env().add_directive(level.into())
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let scenario = match build_scenario(&args) {
        Ok(scenario) => scenario,
        Err(e) => {
            error!("Invalid scenario: {}", e);
            std::process::exit(1);
        }
    };

    let comparison = Comparison::run(&scenario);
    println!("{}", comparison.report());

    if let Some(path) = &args.csv {
        match write_csv(&comparison, path) {
            Ok(()) => info!("Result table written to {}", path.display()),
            Err(e) => {
                error!("CSV export failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Note-save failures are non-fatal: report and keep the results.
    if let Some(text) = &args.note {
        let store = match &args.note_file {
            Some(path) => NoteStore::with_path(path.clone()),
            None => NoteStore::new("."),
        };
        match store.save(text) {
            Ok(()) => info!("Justification saved to {}", store.path().display()),
            Err(e) => warn!("Could not save justification: {} (retry the save)", e),
        }
    }
}

/// Build the scenario from a preset file or the numeric flags.
fn build_scenario(args: &Args) -> Result<Scenario, radiorank::ScenarioError> {
    match &args.scenario {
        Some(path) => Scenario::from_json_file(path),
        None => Scenario::new(
            args.sensors,
            args.messages,
            args.payload,
            args.battery,
            args.overhead,
        )?
        .with_rx_ratio(args.rx_ratio),
    }
}
