use alloy::primitives::{Address, B256};
use serde::{Deserialize, Serialize};

/// A single decoded `Transfer` event.
///
/// Produced only for logs that decode cleanly against the watched event
/// shape. The amount is carried as a decimal string because uint256 values
/// overflow native JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferEvent {
    /// Contract that emitted the event
    pub contract: Address,
    pub tx_hash: B256,
    pub block_number: u64,
    pub from: Address,
    pub to: Address,
    /// Decimal string encoding of the transferred amount
    pub value: String,
}
