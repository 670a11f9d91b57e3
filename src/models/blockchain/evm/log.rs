use alloy::primitives::{Address, Bytes, B256, U64};
use serde::{Deserialize, Serialize};

/// Raw log entry as returned by `eth_getLogs`.
///
/// Quantities arrive hex-encoded from the node; the decoder converts them to
/// native integers when building transfer records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EVMLog {
    /// Contract the log was emitted by
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
    pub block_number: U64,
    pub transaction_hash: B256,
}
