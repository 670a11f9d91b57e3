/// A supported blockchain network and the environment variables that
/// configure it.
///
/// The set of networks is fixed at startup; whether a network actually gets
/// scanned depends on its RPC variable being present at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    /// Identifier used in logs and as the `chain` field of the report
    pub name: &'static str,
    /// Environment variable holding the network's RPC URL
    pub rpc_env: &'static str,
    /// Environment variable holding the network's comma-separated watch-list
    pub contracts_env: &'static str,
}

/// Networks inspected on every run, in report order.
pub const SUPPORTED_NETWORKS: [Network; 3] = [
    Network {
        name: "base",
        rpc_env: "BASE_RPC",
        contracts_env: "BASE_REWARD_CONTRACTS",
    },
    Network {
        name: "optimism",
        rpc_env: "OP_RPC",
        contracts_env: "OP_REWARD_CONTRACTS",
    },
    Network {
        name: "arbitrum",
        rpc_env: "ARBITRUM_RPC",
        contracts_env: "ARBITRUM_REWARD_CONTRACTS",
    },
];
