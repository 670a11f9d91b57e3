//! Notification services for completed scan reports.
//!
//! Provides best-effort webhook delivery. Delivery is independent of
//! persistence: a failed POST is recorded as a diagnostic and the already
//! written report is left untouched.

mod error;
mod webhook;

pub use error::NotificationError;
pub use webhook::WebhookNotifier;
