//! Error types for the caching facade
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// Failure surfaced by a remote store collaborator.
///
/// The facade never catches, retries, or masks these; they propagate
/// unchanged to the caller. Absence of a key is not a failure and is
/// represented as `None` by the store contract, never as a variant here.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// A store operation did not complete in time
    #[error("Timeout: {0}")]
    Timeout(String),

    /// The store failed to serialize or deserialize a value
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Any other failure reported by the store backend
    #[error("Backend error: {0}")]
    Backend(String),
}

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Caller-supplied input rejected before any remote call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Remote store failure, propagated unchanged
    #[error("Remote store failure: {0}")]
    Store(#[from] StoreError),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
