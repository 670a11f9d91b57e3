//! Blockchain client interfaces and implementations.
//!
//! Provides abstractions and concrete implementations for interacting with
//! EVM networks. Includes:
//!
//! - Generic blockchain client trait
//! - EVM client implementation
//! - HTTP JSON-RPC transport
//! - Client factory for per-network construction
//! - Error handling for blockchain operations

mod client;
mod clients;
mod error;
mod factory;
mod transports;

pub use client::BlockChainClient;
pub use clients::EvmClient;
pub use error::BlockChainError;
pub use factory::{ClientFactory, EvmClientFactory};
pub use transports::{BlockchainTransport, HttpTransportClient};
