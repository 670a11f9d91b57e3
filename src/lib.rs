//! Multi-chain token transfer scanner.
//!
//! This crate scans a fixed set of EVM networks for recent ERC-20 `Transfer`
//! events emitted by configured contract addresses and writes one aggregated,
//! timestamped JSON report per run, optionally posting it to a webhook.
//!
//! # Architecture
//! The pipeline is built from a few small services:
//! - Models: Networks, resolved configuration, transfer records, the report
//! - Blockchain: JSON-RPC transport and EVM client abstraction
//! - Decoder: Topic computation and log decoding for the watched event
//! - Scanner: Per-network block window computation and contract scanning
//! - Report: Aggregation across networks and durable persistence
//! - Notification: Best-effort webhook delivery of the persisted report
//!
//! # Flow
//! 1. Loads configuration once from the environment
//! 2. Scans each configured network sequentially, isolating per-contract failures
//! 3. Assembles the per-network results into a single report
//! 4. Persists the report under the report directory
//! 5. Posts the report to the webhook when one is configured

pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;
