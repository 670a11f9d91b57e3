//! Scanner error types and handling.
//!
//! Provides error types for per-network scan operations. A scanner error
//! removes one network from the report; it never aborts the run.

use log::error;
use std::fmt;

use crate::services::blockchain::BlockChainError;

/// Represents possible errors during a network scan
#[derive(Debug)]
pub enum ScannerError {
	/// The network endpoint could not be reached or answered incorrectly
	ConnectivityError(String),
}

impl ScannerError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::ConnectivityError(msg) => format!("Connectivity error: {}", msg),
		}
	}

	/// Creates a new connectivity error with logging
	pub fn connectivity_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectivityError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ScannerError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for ScannerError {}

/// Conversion from blockchain errors to ScannerError
impl From<BlockChainError> for ScannerError {
	fn from(err: BlockChainError) -> Self {
		Self::ConnectivityError(err.to_string())
	}
}
