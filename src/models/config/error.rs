//! Configuration error types.
//!
//! This module defines the error types that can occur while resolving the
//! scanner configuration from the environment.

use log::error;
use std::{error::Error, fmt};

/// Errors that can occur during configuration resolution
#[derive(Debug)]
pub enum ConfigError {
    /// A configured value failed validation (bad address, bad URL scheme)
    ValidationError(String),

    /// A configured value could not be parsed (non-integer window or timeout)
    ParseError(String),
}

impl ConfigError {
    /// Format the error message for display
    fn format_message(&self) -> String {
        match self {
            Self::ValidationError(msg) => format!("Validation error: {}", msg),
            Self::ParseError(msg) => format!("Parse error: {}", msg),
        }
    }

    /// Create a new validation error and log it
    pub fn validation_error(msg: impl Into<String>) -> Self {
        let error = Self::ValidationError(msg.into());
        error!("{}", error.format_message());
        error
    }

    /// Create a new parse error and log it
    pub fn parse_error(msg: impl Into<String>) -> Self {
        let error = Self::ParseError(msg.into());
        error!("{}", error.format_message());
        error
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_message())
    }
}

impl Error for ConfigError {}

impl From<std::num::ParseIntError> for ConfigError {
    fn from(err: std::num::ParseIntError) -> Self {
        Self::parse_error(err.to_string())
    }
}
