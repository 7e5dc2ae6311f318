//! Error types for the hashcash core.

use thiserror::Error;

use crate::digest::DigestAlgorithm;
use crate::types::Field;

/// Errors raised while validating, rendering, or parsing stamp fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StampError {
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("invalid character {character:?} in {field} field")]
    InvalidCharacter { field: Field, character: char },

    #[error("{field} value {value} is out of range (max {max})")]
    OutOfRange { field: Field, value: u64, max: u64 },

    #[error("incomplete stamp: {0} is not set")]
    IncompleteStamp(Field),
}

impl StampError {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        StampError::InvalidFormat(msg.into())
    }
}

/// Errors reported by (or about) a digest provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    #[error("digest algorithm {0} is not supported by this provider")]
    UnsupportedAlgorithm(DigestAlgorithm),

    #[error("{algorithm} digest has unexpected length: expected {expected} bytes, got {actual}")]
    UnexpectedLength {
        algorithm: DigestAlgorithm,
        expected: usize,
        actual: usize,
    },

    #[error("digest provider failure: {0}")]
    Backend(String),
}
