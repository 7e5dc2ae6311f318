//! Golden test vectors for deterministic verification.
//!
//! Each vector fixes a stamp without its suffix, a target, and the suffix the
//! search must find: the first in enumeration order whose digest reaches the
//! target. Digests were computed independently of this workspace.

use hashcash_core::digest::digest_hex;
use hashcash_core::{checked_digest, leading_zero_bits, parse, DigestAlgorithm, Stamp};
use hashcash_digest::SoftwareDigest;
use hashcash_search::{find_suffix, SearchControl, SearchOutcome};

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub algorithm: DigestAlgorithm,
    /// Stamp text up to and including the final delimiter.
    pub prefix: &'static str,
    /// Target handed to the search. Equals the claimed bits for v1.
    pub target_bits: u32,
    /// Expected winning suffix.
    pub suffix: &'static str,
    /// Candidates evaluated to reach it.
    pub probes: u64,
    /// Actual value of the finished stamp.
    pub value: u32,
    /// Hex digest of the finished stamp.
    pub digest: &'static str,
}

impl GoldenVector {
    /// The finished stamp text.
    pub fn stamp_text(&self) -> String {
        format!("{}{}", self.prefix, self.suffix)
    }

    /// The stamp fields with the suffix unset, ready for searching.
    pub fn unsuffixed(&self) -> Stamp {
        let mut stamp = parse(&self.stamp_text())
            .unwrap_or_else(|e| panic!("vector {:?} does not parse: {e}", self.name));
        stamp.suffix = None;
        stamp
    }
}

/// A v1 stamp claiming 20 bits whose SHA-1 digest has one.
pub const OVERCLAIMED_STAMP: &str = "1:20:050101000000:alice@example.com::abc:bT";

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "v1 sha1 8 bits",
            algorithm: DigestAlgorithm::Sha1,
            prefix: "1:8:050101000000:alice@example.com::abc:",
            target_bits: 8,
            suffix: "bT",
            probes: 232,
            value: 8,
            digest: "00f953ee949b1ad118c686c6af9a52b6443c934b",
        },
        GoldenVector {
            name: "v1 sha1 12 bits",
            algorithm: DigestAlgorithm::Sha1,
            prefix: "1:12:050101000000:alice@example.com::abc:",
            target_bits: 12,
            suffix: "akP",
            probes: 9714,
            value: 18,
            digest: "0000241fb8beda898634e1e164b6841d0f23077f",
        },
        GoldenVector {
            name: "v0 sha1 10 bits",
            algorithm: DigestAlgorithm::Sha1,
            prefix: "0:050101:bob@example.org:",
            target_bits: 10,
            suffix: "j/",
            probes: 995,
            value: 11,
            digest: "00128ed2f8ab07e9a3f29eb9ba4e92dc95b647d8",
        },
        GoldenVector {
            name: "v1 sha1 16 bits, day date, extensions",
            algorithm: DigestAlgorithm::Sha1,
            prefix: "1:16:260114:carol@example.net:ext=1::xyz:",
            target_bits: 16,
            suffix: "g{6",
            probes: 67112,
            value: 16,
            digest: "0000a3683640af6604e6e048cdac666fdcd63410",
        },
        GoldenVector {
            name: "v1 sha1 0 bits",
            algorithm: DigestAlgorithm::Sha1,
            prefix: "1:0:050101000000:alice@example.com::abc:",
            target_bits: 0,
            suffix: "a",
            probes: 1,
            value: 0,
            digest: "ac11a288696b419badab0d8f83fedfcb73a7f275",
        },
        GoldenVector {
            name: "v1 sha256 10 bits",
            algorithm: DigestAlgorithm::Sha256,
            prefix: "1:10:050101000000:alice@example.com::abc:",
            target_bits: 10,
            suffix: "F",
            probes: 32,
            value: 11,
            digest: "001cc4584e3d8ae6ece16eedd9eadb0c1f4d2a2b54bfa26d269b751107c59b11",
        },
    ]
}

/// Run the search for `vector` with the software provider.
pub fn search_vector(vector: &GoldenVector) -> hashcash_search::Result<SearchOutcome> {
    find_suffix(
        &vector.unsuffixed(),
        vector.target_bits,
        8,
        vector.algorithm,
        &SoftwareDigest::new(),
        &SearchControl::default(),
    )
}

/// Digest every finished vector stamp and compare with the recorded digest
/// and value.
///
/// Returns `(name, matches, actual hex)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let provider = SoftwareDigest::new();
    all_vectors()
        .iter()
        .map(|v| {
            let text = v.stamp_text();
            match checked_digest(&provider, v.algorithm, text.as_bytes()) {
                Ok(digest) => {
                    let hex = digest_hex(&digest);
                    let matches = hex == v.digest && leading_zero_bits(&digest) == v.value;
                    (v.name.to_string(), matches, hex)
                }
                Err(e) => (v.name.to_string(), false, e.to_string()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_verify() {
        for (name, matches, hex) in verify_all_vectors() {
            assert!(matches, "vector {name:?} digested to {hex}");
        }
    }

    #[test]
    fn test_search_reproduces_vectors() {
        for vector in all_vectors() {
            let outcome = search_vector(&vector).unwrap();
            assert_eq!(outcome.suffix, vector.suffix, "{}", vector.name);
            assert_eq!(outcome.probes, vector.probes, "{}", vector.name);
            assert_eq!(outcome.value, vector.value, "{}", vector.name);
        }
    }

    #[test]
    fn test_overclaimed_stamp_value() {
        let digest = checked_digest(
            &SoftwareDigest::new(),
            DigestAlgorithm::Sha1,
            OVERCLAIMED_STAMP.as_bytes(),
        )
        .unwrap();
        assert_eq!(leading_zero_bits(&digest), 1);
    }
}
