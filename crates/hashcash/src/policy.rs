//! Optional acceptance policy for received stamps.
//!
//! The engine only answers "does the actual value reach the claim". Deciding
//! whether a stamp is good enough for a particular service (fresh enough,
//! for the right resource, worth enough bits) is up to the caller. This
//! module packages the common checks.

use chrono::{Duration, NaiveDateTime};
use hashcash_core::Version;
use thiserror::Error;

use crate::error::HashcashError;
use crate::verify::ParsedStamp;

/// Accept stamps dated up to this far ahead of the verifier's clock.
pub const DEFAULT_MAX_FUTURE_DAYS: i64 = 2;

/// Accept stamps dated up to this far behind the verifier's clock.
pub const DEFAULT_MAX_AGE_DAYS: i64 = 28;

/// Why a stamp was turned away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("version {0:?} is not accepted")]
    VersionNotAllowed(Version),

    #[error("resource {actual:?} does not match {expected:?}")]
    ResourceMismatch {
        expected: String,
        actual: Option<String>,
    },

    #[error("salt {actual:?} does not match {expected:?}")]
    SaltMismatch { expected: String, actual: String },

    #[error("stamp dated {date} is too far in the future")]
    DatedInFuture { date: NaiveDateTime },

    #[error("stamp dated {date} has expired")]
    Expired { date: NaiveDateTime },

    /// The stamp claims more than its digest delivers.
    #[error("stamp claims {claimed} bits but is worth {actual}")]
    ClaimNotMet { claimed: u32, actual: u32 },

    #[error("stamp is worth {effective} bits, {required} required")]
    InsufficientValue { required: u32, effective: u32 },

    #[error(transparent)]
    Engine(#[from] HashcashError),
}

/// A set of acceptance rules applied by [`VerificationPolicy::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationPolicy {
    pub min_bits: u32,
    pub allowed_versions: Vec<Version>,
    pub max_future: Duration,
    pub max_age: Duration,
    pub expected_resource: Option<String>,
    pub expected_salt: Option<String>,
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            min_bits: 0,
            allowed_versions: vec![Version::V0, Version::V1],
            max_future: Duration::days(DEFAULT_MAX_FUTURE_DAYS),
            max_age: Duration::days(DEFAULT_MAX_AGE_DAYS),
            expected_resource: None,
            expected_salt: None,
        }
    }
}

impl VerificationPolicy {
    pub fn new(min_bits: u32) -> Self {
        Self {
            min_bits,
            ..Self::default()
        }
    }

    pub fn with_versions(mut self, versions: impl IntoIterator<Item = Version>) -> Self {
        self.allowed_versions = versions.into_iter().collect();
        self
    }

    pub fn with_max_future(mut self, max_future: Duration) -> Self {
        self.max_future = max_future;
        self
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    pub fn expect_resource(mut self, resource: impl Into<String>) -> Self {
        self.expected_resource = Some(resource.into());
        self
    }

    pub fn expect_salt(mut self, salt: impl Into<String>) -> Self {
        self.expected_salt = Some(salt.into());
        self
    }

    /// Apply every rule to `stamp` as of `now`.
    ///
    /// Field checks run before any digest is computed.
    pub fn check(&self, stamp: &ParsedStamp, now: NaiveDateTime) -> Result<(), PolicyViolation> {
        if !self.allowed_versions.contains(&stamp.version()) {
            return Err(PolicyViolation::VersionNotAllowed(stamp.version()));
        }

        if let Some(expected) = &self.expected_resource {
            if stamp.resource() != Some(expected.as_str()) {
                return Err(PolicyViolation::ResourceMismatch {
                    expected: expected.clone(),
                    actual: stamp.resource().map(str::to_string),
                });
            }
        }

        if let Some(expected) = &self.expected_salt {
            if stamp.salt() != expected.as_str() {
                return Err(PolicyViolation::SaltMismatch {
                    expected: expected.clone(),
                    actual: stamp.salt().to_string(),
                });
            }
        }

        // A bound past chrono's range does not constrain anything.
        let date = stamp.date().when();
        if matches!(now.checked_add_signed(self.max_future), Some(latest) if date > latest) {
            return Err(PolicyViolation::DatedInFuture { date });
        }
        if matches!(now.checked_sub_signed(self.max_age), Some(earliest) if date < earliest) {
            return Err(PolicyViolation::Expired { date });
        }

        let effective = effective_value(stamp)?;
        if effective < self.min_bits {
            return Err(PolicyViolation::InsufficientValue {
                required: self.min_bits,
                effective,
            });
        }
        Ok(())
    }
}

/// The value a stamp can be credited with.
///
/// For v1 this is the claim, provided the digest delivers it. A v0 stamp
/// has no claim, so its actual value counts.
pub fn effective_value(stamp: &ParsedStamp) -> Result<u32, PolicyViolation> {
    let actual = stamp.value()?;
    match stamp.claimed_bits() {
        Some(claimed) if actual < claimed => Err(PolicyViolation::ClaimNotMet { claimed, actual }),
        Some(claimed) => Ok(claimed),
        None => Ok(actual),
    }
}
