//! Utility modules for common functionality.
//!
//! Currently includes:
//!
//! - logging: Logging setup for the application

pub mod logging;
