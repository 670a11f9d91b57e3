//! Core domain models for the transfer scanner.
//!
//! This module contains the fundamental data structures that represent:
//! - Networks: The fixed set of scannable chains and their env bindings
//! - Transfers: Decoded token transfer records
//! - Reports: Per-network results and the aggregated run output

mod network;
mod report;
mod transfer;

pub use network::{Network, SUPPORTED_NETWORKS};
pub use report::{NetworkScanResult, ScanReport};
pub use transfer::TransferEvent;
