//! Error types for the suffix search.

use hashcash_core::{DigestError, StampError};
use thiserror::Error;

/// Errors that end a search without a suffix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No suffix of at most `limit` characters reaches the target.
    #[error("no suffix of at most {limit} characters reaches {target} bits ({probes} candidates tried)")]
    Exhausted { limit: usize, target: u32, probes: u64 },

    /// The caller's cancellation token fired or its deadline passed.
    #[error("search cancelled after {probes} candidates")]
    Cancelled { probes: u64 },

    /// The stamp could not be rendered.
    #[error("stamp error: {0}")]
    Stamp(#[from] StampError),

    /// The digest provider failed.
    #[error("digest error: {0}")]
    Digest(#[from] DigestError),
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
