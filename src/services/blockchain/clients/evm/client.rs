//! EVM-compatible blockchain client implementation.
//!
//! This module provides functionality to interact with EVM-compatible
//! blockchains, supporting height queries and filtered log retrieval over a
//! JSON-RPC transport layer.

use std::time::Duration;

use alloy::primitives::{Address, B256};
use async_trait::async_trait;
use serde_json::json;

use crate::{
	models::EVMLog,
	services::blockchain::{
		client::BlockChainClient,
		transports::{BlockchainTransport, HttpTransportClient},
		BlockChainError,
	},
};

/// Client implementation for Ethereum Virtual Machine (EVM) compatible blockchains
///
/// Provides high-level access to EVM blockchain data through a JSON-RPC
/// transport layer.
#[derive(Clone)]
pub struct EvmClient<T: Send + Sync + Clone> {
	/// The underlying transport client for RPC communication
	transport: T,
}

impl<T: Send + Sync + Clone> EvmClient<T> {
	/// Creates a new EVM client instance with a specific transport client
	pub fn new_with_transport(transport: T) -> Self {
		Self { transport }
	}
}

impl EvmClient<HttpTransportClient> {
	/// Creates a new EVM client instance for one endpoint
	///
	/// # Arguments
	/// * `url` - RPC endpoint URL for the network
	/// * `timeout` - Per-call timeout for all requests
	///
	/// # Returns
	/// * `Result<Self, BlockChainError>` - New client instance or connection error
	pub fn new(url: &str, timeout: Duration) -> Result<Self, BlockChainError> {
		let transport = HttpTransportClient::new(url, timeout)?;
		Ok(Self::new_with_transport(transport))
	}
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> BlockChainClient for EvmClient<T> {
	/// Retrieves the latest block number via `eth_blockNumber`
	async fn get_latest_block_number(&self) -> Result<u64, BlockChainError> {
		let response = self
			.transport
			.send_raw_request::<serde_json::Value>("eth_blockNumber", None)
			.await?;

		// Extract the "result" field from the JSON-RPC response
		let hex_str = response
			.get("result")
			.and_then(|v| v.as_str())
			.ok_or_else(|| BlockChainError::request_error("Missing 'result' field".to_string()))?;

		// Parse hex string to u64
		u64::from_str_radix(hex_str.trim_start_matches("0x"), 16).map_err(|e| {
			BlockChainError::request_error(format!("Failed to parse block number: {}", e))
		})
	}

	/// Retrieves logs for one contract within the specified block range via
	/// `eth_getLogs`, filtered to the watched event topic
	async fn get_logs(
		&self,
		address: Address,
		from_block: u64,
		to_block: u64,
		event_topic: B256,
	) -> Result<Vec<EVMLog>, BlockChainError> {
		// Convert parameters to JSON-RPC filter format
		let params = json!([{
			"address": address,
			"fromBlock": format!("0x{:x}", from_block),
			"toBlock": format!("0x{:x}", to_block),
			"topics": [event_topic],
		}]);

		let response = self
			.transport
			.send_raw_request("eth_getLogs", Some(params))
			.await?;

		// Extract the "result" field from the JSON-RPC response
		let logs_data = response
			.get("result")
			.ok_or_else(|| BlockChainError::request_error("Missing 'result' field".to_string()))?;

		// Parse the response into the expected type
		serde_json::from_value(logs_data.clone())
			.map_err(|e| BlockChainError::request_error(format!("Failed to parse logs: {}", e)))
	}
}
