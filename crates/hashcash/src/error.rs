//! Error types for the stamp engine.

use hashcash_core::{DigestError, StampError};
use hashcash_search::SearchError;
use thiserror::Error;

/// Errors that can occur while generating or verifying stamps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashcashError {
    /// A field failed validation, or a stamp could not be rendered or parsed.
    #[error("stamp error: {0}")]
    Stamp(#[from] StampError),

    /// The digest provider failed or returned output of the wrong size.
    #[error("digest provider error: {0}")]
    Provider(#[from] DigestError),

    /// No suffix within the length limit reaches the target.
    #[error("no suffix of at most {limit} characters reaches {target} bits")]
    SearchExhausted { limit: usize, target: u32, probes: u64 },

    /// The search was stopped by a cancellation token or deadline.
    #[error("search cancelled after {probes} candidates")]
    Cancelled { probes: u64 },
}

/// Coarse classification of [`HashcashError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidFormat,
    InvalidCharacter,
    OutOfRange,
    IncompleteStamp,
    SearchExhausted,
    Cancelled,
    ProviderError,
}

impl HashcashError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HashcashError::Stamp(StampError::InvalidFormat(_)) => ErrorKind::InvalidFormat,
            HashcashError::Stamp(StampError::InvalidCharacter { .. }) => {
                ErrorKind::InvalidCharacter
            }
            HashcashError::Stamp(StampError::OutOfRange { .. }) => ErrorKind::OutOfRange,
            HashcashError::Stamp(StampError::IncompleteStamp(_)) => ErrorKind::IncompleteStamp,
            HashcashError::Provider(_) => ErrorKind::ProviderError,
            HashcashError::SearchExhausted { .. } => ErrorKind::SearchExhausted,
            HashcashError::Cancelled { .. } => ErrorKind::Cancelled,
        }
    }
}

impl From<SearchError> for HashcashError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Exhausted {
                limit,
                target,
                probes,
            } => HashcashError::SearchExhausted {
                limit,
                target,
                probes,
            },
            SearchError::Cancelled { probes } => HashcashError::Cancelled { probes },
            SearchError::Stamp(e) => HashcashError::Stamp(e),
            SearchError::Digest(e) => HashcashError::Provider(e),
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, HashcashError>;

#[cfg(test)]
mod tests {
    use super::*;
    use hashcash_core::{DigestAlgorithm, Field};

    #[test]
    fn test_kinds() {
        let cases = [
            (HashcashError::from(StampError::InvalidFormat("x".into())), ErrorKind::InvalidFormat),
            (
                StampError::InvalidCharacter { field: Field::Resource, character: ':' }.into(),
                ErrorKind::InvalidCharacter,
            ),
            (
                StampError::OutOfRange { field: Field::Bits, value: 999, max: 160 }.into(),
                ErrorKind::OutOfRange,
            ),
            (StampError::IncompleteStamp(Field::Suffix).into(), ErrorKind::IncompleteStamp),
            (
                DigestError::UnsupportedAlgorithm(DigestAlgorithm::Sha1).into(),
                ErrorKind::ProviderError,
            ),
            (
                SearchError::Exhausted { limit: 1, target: 8, probes: 93 }.into(),
                ErrorKind::SearchExhausted,
            ),
            (SearchError::Cancelled { probes: 0 }.into(), ErrorKind::Cancelled),
        ];
        for (err, kind) in cases {
            assert_eq!(err.kind(), kind, "{err}");
        }
    }

    #[test]
    fn test_search_error_unwraps_nested() {
        let err: HashcashError =
            SearchError::Digest(DigestError::Backend("offline".into())).into();
        assert_eq!(err, HashcashError::Provider(DigestError::Backend("offline".into())));
    }
}
