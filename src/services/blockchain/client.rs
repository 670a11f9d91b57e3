//! Core blockchain client interface and traits.
//!
//! This module defines the common interface the scanner uses to talk to a
//! network, keeping the pipeline independent of any concrete transport.

use alloy::primitives::{Address, B256};
use async_trait::async_trait;

use crate::{models::EVMLog, services::blockchain::BlockChainError};

/// Defines the core interface for blockchain clients
///
/// One client instance serves exactly one network endpoint. Neither
/// operation retries; failures propagate to the caller, which decides
/// isolation policy.
#[async_trait]
pub trait BlockChainClient: Send + Sync {
	/// Retrieves the latest block number from the blockchain
	///
	/// # Returns
	/// * `Result<u64, BlockChainError>` - The latest block number or an error
	async fn get_latest_block_number(&self) -> Result<u64, BlockChainError>;

	/// Retrieves logs emitted by one contract within an inclusive block range
	///
	/// # Arguments
	/// * `address` - Contract to filter logs by
	/// * `from_block` - Starting block number (inclusive)
	/// * `to_block` - Ending block number (inclusive)
	/// * `event_topic` - Topic hash the first topic of each log must match
	///
	/// # Returns
	/// * `Result<Vec<EVMLog>, BlockChainError>` - Matching logs in block order
	async fn get_logs(
		&self,
		address: Address,
		from_block: u64,
		to_block: u64,
		event_topic: B256,
	) -> Result<Vec<EVMLog>, BlockChainError>;
}
