//! Network scanning services.
//!
//! Provides the per-network scan orchestration: block window computation,
//! per-contract log queries with failure isolation, and assembly of the
//! per-network result consumed by the report aggregator.

mod error;
mod service;

pub use error::ScannerError;
pub use service::{ScanOutcome, ScannerService};
