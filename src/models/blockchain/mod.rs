//! Blockchain-specific model implementations.
//!
//! Type definitions for the raw chain data the scanner consumes. Only EVM
//! chains are supported; the submodule holds the log shape returned by the
//! JSON-RPC layer.

pub mod evm;

pub use evm::EVMLog;
