//! Engine configuration.

use hashcash_core::{
    validate_bits, validate_date_pattern, validate_version, DatePattern, DigestAlgorithm,
    Version, DEFAULT_BITS, DEFAULT_DATE_FORMAT, DEFAULT_SEED_LENGTH, DEFAULT_SUFFIX_LIMIT,
};
use hashcash_search::DEFAULT_CHECK_INTERVAL;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Defaults applied to new stamps and searches.
///
/// Every field has a serde default, so a partial document (for example a
/// JSON or TOML section holding only `bits`) deserializes to a full config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Version of new stamps (0 or 1).
    pub version: u32,
    /// Claimed value of new stamps.
    pub bits: u32,
    /// Random bytes drawn to seed the default salt. Bytes outside the field
    /// alphabet are dropped, so the salt may be shorter than this.
    pub seed_length: usize,
    /// Longest suffix the search will try.
    pub suffix_limit: usize,
    /// strftime pattern for new stamp dates; a prefix of `%y%m%d%H%M%S`.
    pub date_format: String,
    /// Digest algorithm requested from the provider.
    pub algorithm: DigestAlgorithm,
    /// Candidates evaluated between cancellation checks.
    pub check_interval: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            version: Version::V1.as_u8().into(),
            bits: DEFAULT_BITS,
            seed_length: DEFAULT_SEED_LENGTH,
            suffix_limit: DEFAULT_SUFFIX_LIMIT,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            algorithm: DigestAlgorithm::Sha1,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }
}

/// A config that passed [`EngineConfig::validate`], in typed form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ValidatedConfig {
    pub version: Version,
    pub bits: u32,
    pub date_pattern: DatePattern,
}

impl EngineConfig {
    /// Check the stamp defaults with the same validators the setters use.
    pub fn validate(&self) -> Result<()> {
        self.validated().map(|_| ())
    }

    pub(crate) fn validated(&self) -> Result<ValidatedConfig> {
        Ok(ValidatedConfig {
            version: validate_version(self.version)?,
            bits: validate_bits(self.bits)?,
            date_pattern: validate_date_pattern(Some(&self.date_format), false)?,
        })
    }
}
