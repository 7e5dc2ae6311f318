//! The proof-of-work search.

use hashcash_core::{
    checked_digest, leading_zero_bits, probe_prefix, validate_bits, DigestAlgorithm,
    DigestProvider, Stamp,
};
use tracing::{debug, trace};

use crate::candidates::SuffixCandidates;
use crate::control::SearchControl;
use crate::error::{Result, SearchError};

/// What a successful search produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The winning suffix.
    pub suffix: String,
    /// Actual value of the stamp with this suffix.
    pub value: u32,
    /// Digest evaluations performed, including the re-check of an existing
    /// suffix.
    pub probes: u64,
    /// True if the stamp's existing suffix already met the target.
    pub retained: bool,
}

/// Finds the shortest suffix giving a stamp a target value.
///
/// The searcher never modifies the stamp; the caller applies the outcome.
pub struct Searcher<'p, P: DigestProvider + ?Sized> {
    provider: &'p P,
    algorithm: DigestAlgorithm,
    length_limit: usize,
}

impl<'p, P: DigestProvider + ?Sized> Searcher<'p, P> {
    pub fn new(provider: &'p P, algorithm: DigestAlgorithm, length_limit: usize) -> Self {
        Self {
            provider,
            algorithm,
            length_limit,
        }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    pub fn length_limit(&self) -> usize {
        self.length_limit
    }

    /// Actual value of `stamp` with `suffix` in place of its own.
    pub fn probe_value(&self, stamp: &Stamp, suffix: &str) -> Result<u32> {
        let mut text = probe_prefix(stamp)?;
        text.push_str(suffix);
        let digest = checked_digest(self.provider, self.algorithm, text.as_bytes())?;
        Ok(leading_zero_bits(&digest))
    }

    /// Search for a suffix giving `stamp` at least `target_bits` of value.
    ///
    /// A non-empty existing suffix is re-checked first and kept if it still
    /// meets the target. Otherwise candidates are tried in the order defined
    /// by [`SuffixCandidates`].
    pub fn find_suffix(
        &self,
        stamp: &Stamp,
        target_bits: u32,
        control: &SearchControl,
    ) -> Result<SearchOutcome> {
        let target = validate_bits(target_bits)?;
        let prefix = probe_prefix(stamp)?;

        if let Some(existing) = stamp.suffix().filter(|s| !s.is_empty()) {
            let value = self.probe_value(stamp, existing)?;
            if value >= target {
                debug!(suffix = existing, value, target, "existing suffix still valid");
                return Ok(SearchOutcome {
                    suffix: existing.to_string(),
                    value,
                    probes: 1,
                    retained: true,
                });
            }
            trace!(suffix = existing, value, target, "existing suffix below target");
        }

        debug!(
            target,
            limit = self.length_limit,
            algorithm = %self.algorithm,
            "starting suffix search"
        );

        let prefix_len = prefix.len();
        let mut buf = prefix.into_bytes();
        let mut candidates = SuffixCandidates::new(self.length_limit);
        let interval = control.check_interval();
        let mut probes: u64 = 0;

        while candidates.advance() {
            if probes % interval == 0 && control.should_stop() {
                debug!(probes, "suffix search cancelled");
                return Err(SearchError::Cancelled { probes });
            }

            buf.truncate(prefix_len);
            candidates.write_to(&mut buf);
            let digest = checked_digest(self.provider, self.algorithm, &buf)?;
            probes += 1;

            let value = leading_zero_bits(&digest);
            if value >= target {
                let suffix = candidates.current();
                debug!(suffix = %suffix, value, probes, "suffix found");
                return Ok(SearchOutcome {
                    suffix,
                    value,
                    probes,
                    retained: false,
                });
            }
        }

        debug!(probes, limit = self.length_limit, "suffix search exhausted");
        Err(SearchError::Exhausted {
            limit: self.length_limit,
            target,
            probes,
        })
    }
}

/// One-shot form of [`Searcher::find_suffix`].
pub fn find_suffix<P: DigestProvider + ?Sized>(
    stamp: &Stamp,
    target_bits: u32,
    length_limit: usize,
    algorithm: DigestAlgorithm,
    provider: &P,
    control: &SearchControl,
) -> Result<SearchOutcome> {
    Searcher::new(provider, algorithm, length_limit).find_suffix(stamp, target_bits, control)
}
