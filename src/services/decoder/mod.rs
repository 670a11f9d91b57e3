//! Event decoding for the watched transfer event.
//!
//! Holds the canonical event shape, computes its topic hash for query-layer
//! filtering, and turns raw logs into typed transfer records. Logs that do
//! not match the shape are dropped silently; a mismatch is an expected
//! outcome, not an error.

mod transfer;

pub use transfer::{TransferDecoder, TRANSFER_EVENT_SIGNATURE};
