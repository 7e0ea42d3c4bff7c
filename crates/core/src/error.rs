//! # Error Taxonomy
//!
//! Errors that can surface from the store layer. Fetch-shaped operations
//! never return these directly - failures there become store state
//! (`LoadStatus::Failed` plus a detail message) so the UI can keep rendering
//! whatever data it already has.

use thiserror::Error;

/// Errors produced by stores, adapters, and the completion client.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A caller-supplied record is missing a required field. Raised
    /// synchronously, before any remote call is attempted.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The remote call could not complete (network, timeout, non-2xx).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The remote responded, but not in the shape the caller expected.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The durable key-value store rejected a read or write.
    #[error("storage failure: {0}")]
    Storage(String),
}
