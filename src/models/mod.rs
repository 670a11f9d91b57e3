//! Domain models and data structures for the transfer scanner.
//!
//! This module contains all the core data structures used throughout the
//! application:
//!
//! - `blockchain`: Raw chain data shapes consumed from the RPC layer
//! - `config`: Environment-resolved, immutable process configuration
//! - `core`: Core domain models (Network, TransferEvent, ScanReport)

mod blockchain;
mod config;
mod core;

// Re-export blockchain types
pub use blockchain::EVMLog;

// Re-export core types
pub use core::{Network, NetworkScanResult, ScanReport, TransferEvent, SUPPORTED_NETWORKS};

// Re-export config types
pub use config::{
    ConfigError, NetworkConfig, ScannerConfig, DEFAULT_BLOCK_WINDOW, DEFAULT_REPORT_DIR,
    DEFAULT_RPC_TIMEOUT_SECS,
};
