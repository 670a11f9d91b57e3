mod evm;

pub use evm::client::EvmClient;
