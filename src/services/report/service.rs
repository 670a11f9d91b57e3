//! Report aggregation and persistence.
//!
//! Drives the scanner over every configured network in order, assembles the
//! aggregated report, and writes it to a timestamped file. Skipped and
//! unreachable networks contribute nothing to the report; both are surfaced
//! through logs only.

use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use tracing::{error, info, instrument};

use crate::{
	models::{ScanReport, ScannerConfig},
	services::{
		blockchain::ClientFactory,
		scanner::{ScanOutcome, ScannerService},
	},
};

use super::ReportError;

/// Service that aggregates per-network results and persists the report
pub struct ReportService {
	report_dir: PathBuf,
}

impl ReportService {
	pub fn new(report_dir: impl Into<PathBuf>) -> Self {
		Self {
			report_dir: report_dir.into(),
		}
	}

	/// Scans every configured network sequentially and persists the result
	///
	/// The report timestamp is stamped once, after all networks have been
	/// processed. A network-level failure excludes that network and the run
	/// keeps going; only persistence failures propagate.
	///
	/// # Returns
	/// * `Result<(ScanReport, PathBuf), ReportError>` - The report and the
	///   path it was written to
	#[instrument(skip_all)]
	pub async fn run<F: ClientFactory>(
		&self,
		config: &ScannerConfig,
		scanner: &ScannerService<F>,
	) -> Result<(ScanReport, PathBuf), ReportError> {
		let mut results = Vec::new();

		for network in &config.networks {
			match scanner.scan(network).await {
				Ok(ScanOutcome::Completed(result)) => results.push(result),
				Ok(ScanOutcome::SkippedNoRpc) => {
					// Already logged by the scanner; absent from the report
				}
				Err(e) => {
					error!(
						network = network.network.name,
						error = %e,
						"network scan failed, excluding it from the report"
					);
				}
			}
		}

		let report = ScanReport {
			generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
			results,
		};

		let path = self.persist(&report)?;
		Ok((report, path))
	}

	/// Writes the report to a new timestamped file under the report directory
	///
	/// Creates the directory when absent. Filenames embed the report's own
	/// timestamp; an existing path gets a numeric suffix so successive runs
	/// never overwrite each other.
	pub fn persist(&self, report: &ScanReport) -> Result<PathBuf, ReportError> {
		std::fs::create_dir_all(&self.report_dir).map_err(|e| {
			ReportError::persistence_error(format!(
				"Failed to create report directory {}: {}",
				self.report_dir.display(),
				e
			))
		})?;

		let body = serde_json::to_string_pretty(report)?;
		let path = self.unique_path(&file_stamp(&report.generated_at));

		std::fs::write(&path, body).map_err(|e| {
			ReportError::persistence_error(format!(
				"Failed to write report {}: {}",
				path.display(),
				e
			))
		})?;

		info!(path = %path.display(), results = report.results.len(), "wrote report");
		Ok(path)
	}

	fn unique_path(&self, stamp: &str) -> PathBuf {
		let base = self.report_dir.join(format!("report-{}.json", stamp));
		if !base.exists() {
			return base;
		}

		let mut suffix = 1u32;
		loop {
			let candidate = self
				.report_dir
				.join(format!("report-{}-{}.json", stamp, suffix));
			if !candidate.exists() {
				return candidate;
			}
			suffix += 1;
		}
	}
}

/// Makes an RFC 3339 timestamp filesystem-safe
fn file_stamp(generated_at: &str) -> String {
	generated_at
		.chars()
		.map(|c| if c == ':' || c == '.' { '-' } else { c })
		.collect()
}
