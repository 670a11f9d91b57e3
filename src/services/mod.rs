//! Core services implementing the scan pipeline.
//!
//! - `blockchain`: JSON-RPC transport and EVM client abstraction
//! - `decoder`: Topic computation and log decoding for the watched event
//! - `scanner`: Per-network scan orchestration with failure isolation
//! - `report`: Aggregation across networks and durable persistence
//! - `notification`: Best-effort webhook delivery

pub mod blockchain;
pub mod decoder;
pub mod notification;
pub mod report;
pub mod scanner;
