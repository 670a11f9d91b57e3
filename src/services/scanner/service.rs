//! Per-network scan orchestration.
//!
//! Computes the block window for one network, queries logs for each watched
//! contract, and assembles the per-network result. Contract-level failures
//! are isolated: one bad contract never aborts the scan of its siblings or
//! of the network.

use tracing::{info, instrument, warn};

use crate::{
	models::{NetworkConfig, NetworkScanResult, TransferEvent},
	services::{
		blockchain::{BlockChainClient, ClientFactory},
		decoder::TransferDecoder,
	},
};

use super::ScannerError;

/// Outcome of scanning one configured network
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
	/// The network was scanned and belongs in the report
	Completed(NetworkScanResult),
	/// The network has no RPC endpoint configured and was skipped
	SkippedNoRpc,
}

/// Service that scans one network at a time for watched transfer events
pub struct ScannerService<F: ClientFactory> {
	factory: F,
	decoder: TransferDecoder,
	/// Number of blocks behind the observed height to include in the window
	block_window: u64,
}

impl<F: ClientFactory> ScannerService<F> {
	pub fn new(factory: F, decoder: TransferDecoder, block_window: u64) -> Self {
		Self {
			factory,
			decoder,
			block_window,
		}
	}

	/// Computes the inclusive block window ending at `height`
	///
	/// The lower bound never goes below block 1.
	fn block_window_bounds(&self, height: u64) -> (u64, u64) {
		(
			std::cmp::max(1, height.saturating_sub(self.block_window)),
			height,
		)
	}

	/// Scans one network for transfer events emitted by its watched contracts
	///
	/// Returns `SkippedNoRpc` when the network has no endpoint configured.
	/// A failed height query fails the whole network scan; a failed log query
	/// discards only that contract's contribution.
	#[instrument(skip_all, fields(network = %config.network.name))]
	pub async fn scan(&self, config: &NetworkConfig) -> Result<ScanOutcome, ScannerError> {
		let Some(rpc_url) = config.rpc_url.as_deref() else {
			info!(
				rpc_env = config.network.rpc_env,
				"no RPC configured, skipping network"
			);
			return Ok(ScanOutcome::SkippedNoRpc);
		};

		let client = self.factory.create(rpc_url)?;
		let latest = client.get_latest_block_number().await?;
		let (from_block, to_block) = self.block_window_bounds(latest);

		let mut events: Vec<TransferEvent> = Vec::new();
		for address in &config.contracts {
			match client
				.get_logs(*address, from_block, to_block, self.decoder.signature())
				.await
			{
				Ok(logs) => {
					events.extend(logs.iter().filter_map(|log| self.decoder.decode(log)));
				}
				Err(e) => {
					warn!(
						contract = %address,
						error = %e,
						"error scanning contract, discarding its contribution"
					);
				}
			}
		}

		info!(
			latest,
			from_block,
			contracts = config.contracts.len(),
			logs_found = events.len(),
			"network scan complete"
		);

		Ok(ScanOutcome::Completed(NetworkScanResult {
			chain: config.network.name.to_string(),
			latest,
			from_block,
			events,
			contracts_count: config.contracts.len(),
		}))
	}
}
