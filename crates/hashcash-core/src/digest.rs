//! The digest capability consumed by the stamp engine.
//!
//! The core never hashes anything itself. Callers inject a [`DigestProvider`];
//! `hashcash-digest` supplies a software implementation and the testkit
//! supplies deterministic stubs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DigestError;

/// Digest algorithms a provider may be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// SHA-1, the algorithm hashcash stamps are conventionally minted with.
    Sha1,
    /// SHA-256.
    Sha256,
    /// Blake3 with the default 32-byte output.
    Blake3,
}

impl DigestAlgorithm {
    /// Output size in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 | Self::Blake3 => 32,
        }
    }

    /// Output size in bits.
    pub const fn output_bits(self) -> u32 {
        (self.output_len() * 8) as u32
    }

    /// Stable identifier, as used in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Blake3 => "blake3",
        }
    }
}

impl Default for DigestAlgorithm {
    fn default() -> Self {
        Self::Sha1
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source of message digests.
///
/// Implementations must be safe to call from several threads at once; each
/// call is independent.
pub trait DigestProvider: Send + Sync {
    /// Hash `data` with `algorithm`.
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError>;
}

impl<P: DigestProvider + ?Sized> DigestProvider for &P {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError> {
        (**self).digest(algorithm, data)
    }
}

impl<P: DigestProvider + ?Sized> DigestProvider for std::sync::Arc<P> {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError> {
        (**self).digest(algorithm, data)
    }
}

impl<P: DigestProvider + ?Sized> DigestProvider for Box<P> {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError> {
        (**self).digest(algorithm, data)
    }
}

/// Call `provider` and reject output whose size does not match `algorithm`.
pub fn checked_digest<P: DigestProvider + ?Sized>(
    provider: &P,
    algorithm: DigestAlgorithm,
    data: &[u8],
) -> Result<Vec<u8>, DigestError> {
    let out = provider.digest(algorithm, data)?;
    if out.len() != algorithm.output_len() {
        return Err(DigestError::UnexpectedLength {
            algorithm,
            expected: algorithm.output_len(),
            actual: out.len(),
        });
    }
    Ok(out)
}

/// Hex rendering of a digest, for logs and diagnostics.
pub fn digest_hex(digest: &[u8]) -> String {
    hex::encode(digest)
}
