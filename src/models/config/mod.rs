mod error;
mod scanner_config;

pub use error::ConfigError;
pub use scanner_config::{
    NetworkConfig, ScannerConfig, DEFAULT_BLOCK_WINDOW, DEFAULT_REPORT_DIR,
    DEFAULT_RPC_TIMEOUT_SECS,
};
