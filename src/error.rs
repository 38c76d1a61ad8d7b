//! Error taxonomy for the signal pipeline.
//!
//! No error here is fatal to the process: data errors collapse to a stage's
//! documented default outcome, store and delivery errors are logged and the
//! cycle continues.

use thiserror::Error;

/// Errors raised by data providers and analyzers.
#[derive(Debug, Error)]
pub enum DataError {
    /// Empty or missing series/chain for a symbol.
    #[error("data unavailable: {0}")]
    Unavailable(String),

    /// A provider failed (network, timeout, malformed payload).
    #[error("external service error: {0}")]
    Service(String),

    /// A series violated the ordering invariant at construction.
    #[error("invalid series: {0}")]
    InvalidSeries(String),
}

/// Errors from the append-only signal store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to append signal record: {0}")]
    Append(String),

    #[error("failed to serialize signal record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors from the notification channel.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("notification delivery failed: {0}")]
    Send(String),
}
