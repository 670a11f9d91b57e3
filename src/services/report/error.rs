//! Report error types and handling.
//!
//! Provides error types for report assembly and persistence. Persistence is
//! the one failure class that aborts the whole run: a run that cannot write
//! its report has produced nothing.

use log::error;
use std::fmt;

/// Represents possible errors during report persistence
#[derive(Debug)]
pub enum ReportError {
	/// The report directory or file could not be created or written
	PersistenceError(String),

	/// The report could not be serialized to JSON
	SerializationError(String),
}

impl ReportError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::PersistenceError(msg) => format!("Persistence error: {}", msg),
			Self::SerializationError(msg) => format!("Serialization error: {}", msg),
		}
	}

	/// Creates a new persistence error with logging
	pub fn persistence_error(msg: impl Into<String>) -> Self {
		let error = Self::PersistenceError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new serialization error with logging
	pub fn serialization_error(msg: impl Into<String>) -> Self {
		let error = Self::SerializationError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ReportError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for ReportError {}

impl From<std::io::Error> for ReportError {
	fn from(err: std::io::Error) -> Self {
		Self::persistence_error(err.to_string())
	}
}

impl From<serde_json::Error> for ReportError {
	fn from(err: serde_json::Error) -> Self {
		Self::serialization_error(err.to_string())
	}
}
