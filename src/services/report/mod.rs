//! Report aggregation and persistence services.
//!
//! Assembles per-network scan results into one timestamped report and writes
//! it under the configured report directory, one new file per run.

mod error;
mod service;

pub use error::ReportError;
pub use service::ReportService;
