//! The stamp field model.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::date::StampDate;
use crate::error::StampError;

/// Largest claimable value, in bits.
pub const MAX_BITS: u32 = 160;

/// Default claimed value for new stamps.
pub const DEFAULT_BITS: u32 = 20;

/// Default maximum suffix length, in characters.
pub const DEFAULT_SUFFIX_LIMIT: usize = 128;

/// Default number of random bytes used to seed a new salt.
pub const DEFAULT_SEED_LENGTH: usize = 16;

/// Names of stamp fields, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Version,
    Bits,
    Date,
    Resource,
    Extensions,
    Salt,
    Suffix,
}

impl Field {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Bits => "bits",
            Self::Date => "date",
            Self::Resource => "resource",
            Self::Extensions => "extensions",
            Self::Salt => "salt",
            Self::Suffix => "suffix",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hashcash stamp format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Version {
    /// `0:date:resource:suffix`
    V0 = 0,
    /// `1:bits:date:resource:extensions:salt:suffix`
    #[default]
    V1 = 1,
}

impl Version {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Number of colon-delimited components in this version's wire form.
    pub const fn component_count(self) -> usize {
        match self {
            Self::V0 => 4,
            Self::V1 => 7,
        }
    }
}

impl TryFrom<u8> for Version {
    type Error = StampError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        crate::validation::validate_version(u32::from(v))
    }
}

impl From<Version> for u8 {
    fn from(v: Version) -> Self {
        v.as_u8()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// A stamp as a set of fields.
///
/// `extensions` and `salt` are plain strings where empty means absent.
/// `resource` and `suffix` distinguish "unset" from "empty", since rendering
/// a final stamp requires both to be set.
///
/// Fields are public for reading and for tests; use the generator in the
/// `hashcash` crate to mutate them with validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stamp {
    pub version: Version,
    /// Claimed value for v1; generation target for v0 (not on the wire).
    pub bits: u32,
    pub date: StampDate,
    pub resource: Option<String>,
    #[serde(default)]
    pub extensions: String,
    #[serde(default)]
    pub salt: String,
    pub suffix: Option<String>,
}

impl Stamp {
    /// A stamp with the given version, bits and date, and every string field
    /// empty or unset.
    pub fn new(version: Version, bits: u32, date: StampDate) -> Self {
        Self {
            version,
            bits,
            date,
            resource: None,
            extensions: String::new(),
            salt: String::new(),
            suffix: None,
        }
    }

    /// The claimed value as it appears on the wire, if this version has one.
    pub fn claimed_bits(&self) -> Option<u32> {
        match self.version {
            Version::V0 => None,
            Version::V1 => Some(self.bits),
        }
    }

    pub fn resource(&self) -> Option<&str> {
        self.resource.as_deref()
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::DatePattern;

    #[test]
    fn test_version_conversions() {
        assert_eq!(Version::try_from(0u8).unwrap(), Version::V0);
        assert_eq!(Version::try_from(1u8).unwrap(), Version::V1);
        assert!(matches!(Version::try_from(2u8), Err(StampError::InvalidFormat(_))));
        assert_eq!(Version::default(), Version::V1);
    }

    #[test]
    fn test_component_counts() {
        assert_eq!(Version::V0.component_count(), 4);
        assert_eq!(Version::V1.component_count(), 7);
    }

    #[test]
    fn test_claimed_bits_only_for_v1() {
        let date = StampDate::parse("050101").unwrap();
        let v1 = Stamp::new(Version::V1, 20, date);
        let v0 = Stamp::new(Version::V0, 20, date);
        assert_eq!(v1.claimed_bits(), Some(20));
        assert_eq!(v0.claimed_bits(), None);
        assert_eq!(v0.date.pattern(), DatePattern::Day);
    }

    #[test]
    fn test_serde_shape() {
        let mut stamp = Stamp::new(Version::V1, 8, StampDate::parse("050101000000").unwrap());
        stamp.resource = Some("alice@example.com".into());
        stamp.salt = "abc".into();

        let json = serde_json::to_value(&stamp).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["date"], "050101000000");

        let back: Stamp = serde_json::from_value(json).unwrap();
        assert_eq!(back, stamp);
    }
}
