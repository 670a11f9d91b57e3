use std::{path::PathBuf, time::Duration};

use alloy::primitives::Address;

use crate::models::core::{Network, SUPPORTED_NETWORKS};

use super::error::ConfigError;

/// Blocks behind the current height to scan when SCAN_BLOCK_WINDOW is unset
pub const DEFAULT_BLOCK_WINDOW: u64 = 500;

/// Report directory used when REPORT_DIR is unset
pub const DEFAULT_REPORT_DIR: &str = "reports";

/// Per-call RPC timeout in seconds when SCAN_RPC_TIMEOUT_SECS is unset
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;

/// Resolved per-network configuration snapshot.
///
/// `rpc_url` is `None` when the network's RPC variable is absent; such
/// networks are skipped rather than treated as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub network: Network,
    pub rpc_url: Option<String>,
    /// Watch-list for this network, in configured order. May be empty.
    pub contracts: Vec<Address>,
}

/// Immutable process-wide configuration, resolved exactly once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
    /// One entry per supported network, in report order
    pub networks: Vec<NetworkConfig>,
    pub block_window: u64,
    pub report_dir: PathBuf,
    pub webhook_url: Option<String>,
    pub rpc_timeout: Duration,
}

impl ScannerConfig {
    /// Resolves the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through an arbitrary variable lookup.
    ///
    /// The lookup indirection keeps resolution testable without mutating
    /// process-global state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let block_window = parse_integer(&lookup, "SCAN_BLOCK_WINDOW", DEFAULT_BLOCK_WINDOW)?;
        let timeout_secs =
            parse_integer(&lookup, "SCAN_RPC_TIMEOUT_SECS", DEFAULT_RPC_TIMEOUT_SECS)?;

        let report_dir = lookup("REPORT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REPORT_DIR.to_string());

        let webhook_url = lookup("SCAN_WEBHOOK_URL").filter(|url| !url.trim().is_empty());

        let networks = SUPPORTED_NETWORKS
            .iter()
            .map(|network| resolve_network(&lookup, network))
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            networks,
            block_window,
            report_dir: PathBuf::from(report_dir),
            webhook_url,
            rpc_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_integer<F>(lookup: &F, key: &str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|raw| !raw.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::parse_error(format!("{} must be an integer: {}", key, e))),
        None => Ok(default),
    }
}

fn resolve_network<F>(lookup: &F, network: &Network) -> Result<NetworkConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let rpc_url = lookup(network.rpc_env).filter(|url| !url.trim().is_empty());
    if let Some(url) = &rpc_url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::validation_error(format!(
                "{} must start with http:// or https://",
                network.rpc_env
            )));
        }
    }

    let contracts = match lookup(network.contracts_env) {
        Some(raw) => parse_watch_list(network, &raw)?,
        None => Vec::new(),
    };

    Ok(NetworkConfig {
        network: network.clone(),
        rpc_url,
        contracts,
    })
}

fn parse_watch_list(network: &Network, raw: &str) -> Result<Vec<Address>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry.parse::<Address>().map_err(|e| {
                ConfigError::validation_error(format!(
                    "{} contains an invalid address '{}': {}",
                    network.contracts_env, entry, e
                ))
            })
        })
        .collect()
}
