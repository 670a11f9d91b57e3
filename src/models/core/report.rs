use serde::{Deserialize, Serialize};

use crate::models::core::transfer::TransferEvent;

/// Scan result for one network.
///
/// A network produces a result only when its endpoint was configured and its
/// height query succeeded; `contracts_count` reflects the size of the
/// watch-list, not how many contracts were scanned without error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkScanResult {
    pub chain: String,
    /// Chain height observed at scan time, also the upper window bound
    pub latest: u64,
    pub from_block: u64,
    pub events: Vec<TransferEvent>,
    pub contracts_count: usize,
}

/// Aggregated output of one run, in network configuration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// RFC 3339 UTC timestamp, stamped once after all networks are scanned
    pub generated_at: String,
    pub results: Vec<NetworkScanResult>,
}
