//! Deterministic digest providers for tests.
//!
//! Each stub returns output of the requested algorithm's length unless its
//! purpose is to do otherwise.

use std::sync::atomic::{AtomicU64, Ordering};

use hashcash_core::{DigestAlgorithm, DigestError, DigestProvider};

/// Every digest is all zero bytes, so every stamp has the maximum value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroDigest;

impl DigestProvider for ZeroDigest {
    fn digest(&self, algorithm: DigestAlgorithm, _data: &[u8]) -> Result<Vec<u8>, DigestError> {
        Ok(vec![0; algorithm.output_len()])
    }
}

/// Every digest has exactly `value` leading zero bits, whatever the input.
#[derive(Debug, Clone, Copy)]
pub struct ConstantDigest {
    value: u32,
}

impl ConstantDigest {
    pub fn with_value(value: u32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl DigestProvider for ConstantDigest {
    fn digest(&self, algorithm: DigestAlgorithm, _data: &[u8]) -> Result<Vec<u8>, DigestError> {
        let mut out = vec![0xff; algorithm.output_len()];
        let zero_bytes = (self.value / 8) as usize;
        for byte in out.iter_mut().take(zero_bytes) {
            *byte = 0;
        }
        if let Some(byte) = out.get_mut(zero_bytes) {
            *byte = 0xff >> (self.value % 8);
        }
        Ok(out)
    }
}

/// Wraps a provider and counts calls to it.
#[derive(Debug, Default)]
pub struct CountingDigest<P> {
    inner: P,
    calls: AtomicU64,
}

impl<P> CountingDigest<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: AtomicU64::new(0),
        }
    }

    /// Digest calls made so far.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }
}

impl<P: DigestProvider> DigestProvider for CountingDigest<P> {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.digest(algorithm, data)
    }
}

/// Always fails with a backend error.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingDigest;

pub const FAILING_DIGEST_MESSAGE: &str = "digest backend unavailable";

impl DigestProvider for FailingDigest {
    fn digest(&self, _: DigestAlgorithm, _: &[u8]) -> Result<Vec<u8>, DigestError> {
        Err(DigestError::Backend(FAILING_DIGEST_MESSAGE.to_string()))
    }
}

/// Returns one byte fewer than the algorithm's digest length.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortDigest;

impl DigestProvider for ShortDigest {
    fn digest(&self, algorithm: DigestAlgorithm, _: &[u8]) -> Result<Vec<u8>, DigestError> {
        Ok(vec![0; algorithm.output_len().saturating_sub(1)])
    }
}

/// All-zero digest for inputs ending in `:<winner>`, all-ones otherwise.
///
/// Makes the search stop at a chosen suffix, independent of any real hash.
#[derive(Debug, Clone)]
pub struct SuffixMatchDigest {
    tail: Vec<u8>,
}

impl SuffixMatchDigest {
    pub fn new(winner: &str) -> Self {
        let mut tail = Vec::with_capacity(winner.len() + 1);
        tail.push(b':');
        tail.extend_from_slice(winner.as_bytes());
        Self { tail }
    }
}

impl DigestProvider for SuffixMatchDigest {
    fn digest(&self, algorithm: DigestAlgorithm, data: &[u8]) -> Result<Vec<u8>, DigestError> {
        let byte = if data.ends_with(&self.tail) { 0x00 } else { 0xff };
        Ok(vec![byte; algorithm.output_len()])
    }
}
