//! Webhook notification implementation.
//!
//! Provides best-effort delivery of a completed scan report to an external
//! webhook. Exactly one POST per run; no retries, no authentication, no
//! response-body handling beyond the status code.

use std::time::Duration;

use reqwest::Client;
use tracing::info;
use url::Url;

use crate::models::ScanReport;

use super::NotificationError;

/// Delivers scan reports to a configured webhook URL
pub struct WebhookNotifier {
	/// HTTP client for webhook requests
	client: Client,
	/// Webhook URL for report delivery
	url: Url,
}

impl WebhookNotifier {
	/// Creates a new webhook notifier instance
	///
	/// # Arguments
	/// * `url` - Webhook URL
	/// * `timeout` - Per-request timeout for the delivery attempt
	///
	/// # Returns
	/// * `Result<Self, NotificationError>` - Notifier instance or config error
	pub fn new(url: &str, timeout: Duration) -> Result<Self, NotificationError> {
		let url = Url::parse(url).map_err(|_| {
			NotificationError::config_error(format!("Invalid webhook URL: {}", url))
		})?;

		let client = reqwest::ClientBuilder::new()
			.timeout(timeout)
			.build()
			.map_err(|e| {
				NotificationError::config_error(format!("Failed to create HTTP client: {}", e))
			})?;

		Ok(Self { client, url })
	}

	/// Performs a single delivery attempt of the full report
	///
	/// The report is sent as the JSON body with `content-type:
	/// application/json`. A non-success status is an error.
	///
	/// # Arguments
	/// * `report` - The report to deliver
	///
	/// # Returns
	/// * `Result<(), NotificationError>` - Success or delivery error
	pub async fn notify(&self, report: &ScanReport) -> Result<(), NotificationError> {
		let response = self
			.client
			.post(self.url.clone())
			.json(report)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			return Err(NotificationError::network_error(format!(
				"Webhook POST returned status {}",
				status.as_u16()
			)));
		}

		info!("posted report to webhook");
		Ok(())
	}
}
