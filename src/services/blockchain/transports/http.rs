//! HTTP transport implementation for blockchain interactions.
//!
//! This module provides an HTTP client implementation for interacting with
//! blockchain nodes via JSON-RPC. Each call is a single attempt against one
//! endpoint with a configurable timeout; transport failures propagate to the
//! caller unchanged.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::services::blockchain::{transports::BlockchainTransport, BlockChainError};

/// HTTP transport client for JSON-RPC blockchain interactions
///
/// The client is thread-safe and can be shared across tasks; reqwest pools
/// connections internally.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	/// HTTP client for making requests
	client: Client,
	/// Endpoint all requests are sent to
	url: Url,
}

impl HttpTransportClient {
	/// Creates a new HTTP transport client for a single endpoint
	///
	/// # Arguments
	/// * `url` - RPC endpoint URL
	/// * `timeout` - Per-call timeout applied to every request
	///
	/// # Returns
	/// * `Result<Self, BlockChainError>` - New client instance or a connection
	///   error when the URL does not parse
	pub fn new(url: &str, timeout: Duration) -> Result<Self, BlockChainError> {
		let url = Url::parse(url)
			.map_err(|_| BlockChainError::connection_error(format!("Invalid RPC URL: {}", url)))?;

		let client = reqwest::ClientBuilder::new()
			.timeout(timeout)
			.build()
			.map_err(|e| {
				BlockChainError::internal_error(format!("Failed to create HTTP client: {}", e))
			})?;

		Ok(Self { client, url })
	}
}

#[async_trait::async_trait]
impl BlockchainTransport for HttpTransportClient {
	/// Sends a JSON-RPC request to the blockchain node
	///
	/// A non-success HTTP status or a JSON-RPC error object in the response
	/// body both surface as errors.
	///
	/// # Arguments
	/// * `method` - The JSON-RPC method name to call
	/// * `params` - Optional parameters for the method call
	///
	/// # Returns
	/// * `Result<Value, BlockChainError>` - Full JSON-RPC response or error
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, BlockChainError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		let payload = self.customize_request(method, params).await;

		let response = self
			.client
			.post(self.url.clone())
			.json(&payload)
			.send()
			.await
			.map_err(|e| {
				BlockChainError::connection_error(format!("Failed to send {}: {}", method, e))
			})?;

		let status = response.status();
		if !status.is_success() {
			return Err(BlockChainError::request_error(format!(
				"HTTP status {} for {}",
				status.as_u16(),
				method
			)));
		}

		let body: Value = response.json().await.map_err(|e| {
			BlockChainError::request_error(format!("Invalid JSON response for {}: {}", method, e))
		})?;

		if let Some(error) = body.get("error") {
			if !error.is_null() {
				return Err(BlockChainError::request_error(format!(
					"JSON-RPC error for {}: {}",
					method, error
				)));
			}
		}

		Ok(body)
	}
}
