//! Blockchain client factory implementation.
//!
//! This module provides factory functionality to create blockchain clients
//! for a resolved endpoint, abstracting away the specifics of client
//! initialization so the scanner can be tested against substitute clients.

use std::time::Duration;

use crate::services::blockchain::{
	clients::EvmClient, transports::HttpTransportClient, BlockChainClient, BlockChainError,
};

/// Creates blockchain clients for resolved network endpoints
pub trait ClientFactory: Send + Sync {
	type Client: BlockChainClient;

	/// Builds a client bound to one endpoint URL
	///
	/// # Arguments
	/// * `url` - RPC endpoint URL for the network
	///
	/// # Returns
	/// * `Result<Self::Client, BlockChainError>` - Initialized client or error
	fn create(&self, url: &str) -> Result<Self::Client, BlockChainError>;
}

/// Factory producing HTTP-backed EVM clients
pub struct EvmClientFactory {
	/// Per-call timeout applied to every client this factory creates
	rpc_timeout: Duration,
}

impl EvmClientFactory {
	pub fn new(rpc_timeout: Duration) -> Self {
		Self { rpc_timeout }
	}
}

impl ClientFactory for EvmClientFactory {
	type Client = EvmClient<HttpTransportClient>;

	fn create(&self, url: &str) -> Result<Self::Client, BlockChainError> {
		EvmClient::new(url, self.rpc_timeout)
	}
}
