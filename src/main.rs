//! Transfer scanner entry point.
//!
//! This binary provides the main entry point for the multi-chain transfer
//! scanner. It resolves configuration from the environment, scans every
//! configured network for recent token transfers, persists one aggregated
//! report per run, and attempts best-effort webhook delivery.
//!
//! # Flow
//! 1. Loads `.env` and resolves the immutable configuration once
//! 2. Scans each configured network sequentially; unconfigured or
//!    unreachable networks are excluded from the report without failing the
//!    run
//! 3. Persists the aggregated report under the report directory
//! 4. Posts the report to the webhook when one is configured
//!
//! Exit code is 0 whenever the report was persisted, regardless of
//! per-network, per-contract, or delivery failures.

use chainscan::{bootstrap, models::ScannerConfig, utils::logging::setup_logging};

use clap::{Arg, Command};
use dotenvy::dotenv;
use std::env::{set_var, var};
use tracing::{error, info};

/// Main entry point for the transfer scanner.
///
/// # Errors
/// Returns an error if configuration resolution fails or if the report
/// cannot be persisted.
#[tokio::main]
async fn main() -> bootstrap::Result<()> {
	// Initialize command-line interface
	let matches = Command::new("chainscan")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Scans configured blockchain networks for recent token transfers and writes an \
			 aggregated, timestamped report.",
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.arg(
			Arg::new("window")
				.long("window")
				.help("Number of blocks behind the current height to scan (default: 500)")
				.value_name("BLOCKS"),
		)
		.arg(
			Arg::new("report-dir")
				.long("report-dir")
				.help("Directory for persisted report files (default: reports/)")
				.value_name("PATH"),
		)
		.get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	// Only apply CLI options if the corresponding environment variables are NOT already set
	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("LOG_LEVEL").is_err() {
			set_var("LOG_LEVEL", level);
		}
	}

	if let Some(window) = matches.get_one::<String>("window") {
		if var("SCAN_BLOCK_WINDOW").is_err() {
			set_var("SCAN_BLOCK_WINDOW", window);
		}
	}

	if let Some(dir) = matches.get_one::<String>("report-dir") {
		if var("REPORT_DIR").is_err() {
			set_var("REPORT_DIR", dir);
		}
	}

	// Setup logging to stdout
	setup_logging().unwrap_or_else(|e| {
		error!("Failed to setup logging: {}", e);
	});

	let config = ScannerConfig::from_env()?;

	let (report, path) = bootstrap::run_scan(&config).await?;

	info!(
		path = %path.display(),
		networks = report.results.len(),
		events = report
			.results
			.iter()
			.map(|result| result.events.len())
			.sum::<usize>(),
		"scan complete"
	);

	Ok(())
}
