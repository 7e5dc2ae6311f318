//! The verification role.

use std::sync::Arc;

use hashcash_core::{
    parse_extensions, render, DigestAlgorithm, DigestProvider, Extension, Stamp, StampDate,
    Version,
};

use crate::engine::{stamp_value, SearchSettings, StampGenerator};
use crate::error::Result;

/// A stamp received from elsewhere, parsed for verification.
///
/// Parsing only checks structure. [`is_valid`](Self::is_valid) and
/// [`value`](Self::value) evaluate the digest; both are pure queries.
pub struct ParsedStamp {
    stamp: Stamp,
    settings: SearchSettings,
    provider: Arc<dyn DigestProvider>,
}

impl ParsedStamp {
    pub(crate) fn from_parts(
        stamp: Stamp,
        settings: SearchSettings,
        provider: Arc<dyn DigestProvider>,
    ) -> Self {
        Self {
            stamp,
            settings,
            provider,
        }
    }

    pub fn fields(&self) -> &Stamp {
        &self.stamp
    }

    pub fn into_fields(self) -> Stamp {
        self.stamp
    }

    pub fn version(&self) -> Version {
        self.stamp.version
    }

    /// Claimed value. Always 0 for v0 stamps, which carry no claim.
    pub fn bits(&self) -> u32 {
        self.stamp.bits
    }

    /// Claimed value as written on the wire; `None` for v0.
    pub fn claimed_bits(&self) -> Option<u32> {
        self.stamp.claimed_bits()
    }

    pub fn date(&self) -> StampDate {
        self.stamp.date
    }

    pub fn resource(&self) -> Option<&str> {
        self.stamp.resource()
    }

    pub fn extensions(&self) -> &str {
        &self.stamp.extensions
    }

    /// The extensions field split into `name` / `name=value` entries.
    pub fn parsed_extensions(&self) -> Vec<Extension> {
        parse_extensions(&self.stamp.extensions)
    }

    pub fn salt(&self) -> &str {
        &self.stamp.salt
    }

    pub fn suffix(&self) -> Option<&str> {
        self.stamp.suffix()
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.settings.algorithm
    }

    /// The stamp text. Identical to the string it was parsed from.
    pub fn render(&self) -> Result<String> {
        Ok(render(&self.stamp)?)
    }

    /// Leading zero bits of the digest of the stamp text.
    pub fn value(&self) -> Result<u32> {
        stamp_value(self.provider.as_ref(), self.settings.algorithm, &self.stamp)
    }

    /// Whether the actual value reaches the claimed value.
    ///
    /// For v0 stamps the claim is 0 and this is always true; compare
    /// [`value`](Self::value) against your own minimum instead.
    pub fn is_valid(&self) -> Result<bool> {
        Ok(self.value()? >= self.stamp.bits)
    }

    /// Reopen the stamp for editing. The generator starts in
    /// [`Configuring`](crate::GeneratorState::Configuring); its first search
    /// re-checks the existing suffix.
    pub fn into_generator(self) -> StampGenerator {
        StampGenerator::from_parts(self.stamp, self.settings, self.provider)
    }
}

impl std::fmt::Debug for ParsedStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedStamp")
            .field("stamp", &self.stamp)
            .field("algorithm", &self.settings.algorithm)
            .finish_non_exhaustive()
    }
}
