//! # Hashcash Digest
//!
//! A software [`DigestProvider`] for the stamp engine, backed by the `sha1`,
//! `sha2` and `blake3` crates.
//!
//! ```rust
//! use hashcash_core::{DigestAlgorithm, DigestProvider};
//! use hashcash_digest::SoftwareDigest;
//!
//! let provider = SoftwareDigest::new();
//! let digest = provider.digest(DigestAlgorithm::Sha1, b"abc").unwrap();
//! assert_eq!(digest.len(), 20);
//! ```

use hashcash_core::{DigestAlgorithm, DigestError, DigestProvider};
use sha1::{Digest, Sha1};
use sha2::Sha256;

/// In-process digest provider.
///
/// Stateless apart from the set of algorithms it will serve, so one instance
/// can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct SoftwareDigest {
    sha1: bool,
    sha256: bool,
    blake3: bool,
}

impl SoftwareDigest {
    /// A provider serving every supported algorithm.
    pub const fn new() -> Self {
        Self {
            sha1: true,
            sha256: true,
            blake3: true,
        }
    }

    /// A provider restricted to a single algorithm.
    pub const fn only(algorithm: DigestAlgorithm) -> Self {
        Self {
            sha1: matches!(algorithm, DigestAlgorithm::Sha1),
            sha256: matches!(algorithm, DigestAlgorithm::Sha256),
            blake3: matches!(algorithm, DigestAlgorithm::Blake3),
        }
    }

    /// Whether this provider serves `algorithm`.
    pub const fn supports(&self, algorithm: DigestAlgorithm) -> bool {
        match algorithm {
            DigestAlgorithm::Sha1 => self.sha1,
            DigestAlgorithm::Sha256 => self.sha256,
            DigestAlgorithm::Blake3 => self.blake3,
        }
    }
}

impl Default for SoftwareDigest {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestProvider for SoftwareDigest {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError> {
        if !self.supports(algorithm) {
            return Err(DigestError::UnsupportedAlgorithm(algorithm));
        }
        let out = match algorithm {
            DigestAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            DigestAlgorithm::Blake3 => blake3::hash(data).as_bytes().to_vec(),
        };
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashcash_core::leading_zero_bits;

    #[test]
    fn test_sha1_known_answer() {
        let d = SoftwareDigest::new()
            .digest(DigestAlgorithm::Sha1, b"abc")
            .unwrap();
        assert_eq!(hex::encode(d), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_sha256_known_answer() {
        let d = SoftwareDigest::new()
            .digest(DigestAlgorithm::Sha256, b"abc")
            .unwrap();
        assert_eq!(
            hex::encode(d),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_blake3_matches_crate() {
        let d = SoftwareDigest::new()
            .digest(DigestAlgorithm::Blake3, b"abc")
            .unwrap();
        assert_eq!(d.as_slice(), blake3::hash(b"abc").as_bytes());
        assert_eq!(d.len(), DigestAlgorithm::Blake3.output_len());
    }

    #[test]
    fn test_output_lengths_match_algorithm() {
        let p = SoftwareDigest::new();
        for alg in [DigestAlgorithm::Sha1, DigestAlgorithm::Sha256, DigestAlgorithm::Blake3] {
            assert_eq!(p.digest(alg, b"").unwrap().len(), alg.output_len());
        }
    }

    #[test]
    fn test_restricted_provider() {
        let p = SoftwareDigest::only(DigestAlgorithm::Sha1);
        assert!(p.digest(DigestAlgorithm::Sha1, b"x").is_ok());
        assert_eq!(
            p.digest(DigestAlgorithm::Blake3, b"x"),
            Err(DigestError::UnsupportedAlgorithm(DigestAlgorithm::Blake3))
        );
    }

    #[test]
    fn test_known_stamp_value() {
        let d = SoftwareDigest::new()
            .digest(
                DigestAlgorithm::Sha1,
                b"1:8:050101000000:alice@example.com::abc:bT",
            )
            .unwrap();
        assert_eq!(hex::encode(&d), "00f953ee949b1ad118c686c6af9a52b6443c934b");
        assert_eq!(leading_zero_bits(&d), 8);
    }
}
