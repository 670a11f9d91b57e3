//! Bootstrap module for initializing services and running the scan pipeline.
//!
//! This module wires the resolved configuration into the concrete services
//! and drives one full run: scan every configured network, persist the
//! aggregated report, then attempt webhook delivery.
//!
//! # Services
//! - `ScannerService`: Scans one network at a time with failure isolation
//! - `ReportService`: Aggregates results and persists the report
//! - `WebhookNotifier`: Best-effort delivery of the persisted report

use std::{error::Error, path::PathBuf};

use tracing::{info, warn};

use crate::{
	models::{ScanReport, ScannerConfig},
	services::{
		blockchain::EvmClientFactory,
		decoder::TransferDecoder,
		notification::WebhookNotifier,
		report::ReportService,
		scanner::ScannerService,
	},
};

/// Type alias for handling ServiceResult
pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Builds the scanner and report services from the loaded configuration.
pub fn initialize_services(
	config: &ScannerConfig,
) -> (ScannerService<EvmClientFactory>, ReportService) {
	let factory = EvmClientFactory::new(config.rpc_timeout);
	let scanner = ScannerService::new(factory, TransferDecoder::new(), config.block_window);
	let report_service = ReportService::new(config.report_dir.clone());
	(scanner, report_service)
}

/// Runs one full scan cycle.
///
/// Scans all configured networks sequentially, persists the aggregated
/// report, then attempts webhook delivery. Delivery failures are recorded
/// and swallowed; the persisted report is the run's source of truth. Only
/// configuration and persistence failures propagate.
///
/// # Returns
/// * `Result<(ScanReport, PathBuf)>` - The report and the path it was
///   written to
pub async fn run_scan(config: &ScannerConfig) -> Result<(ScanReport, PathBuf)> {
	let (scanner, report_service) = initialize_services(config);

	let (report, path) = report_service.run(config, &scanner).await?;

	match &config.webhook_url {
		Some(url) => match WebhookNotifier::new(url, config.rpc_timeout) {
			Ok(notifier) => {
				if let Err(e) = notifier.notify(&report).await {
					warn!(
						error = %e,
						"webhook delivery failed, report is already persisted"
					);
				}
			}
			Err(e) => {
				warn!(error = %e, "invalid webhook configuration, skipping delivery");
			}
		},
		None => {
			info!("no webhook configured, skipping delivery");
		}
	}

	Ok((report, path))
}
