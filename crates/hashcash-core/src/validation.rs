//! Field validation.
//!
//! One pure check per field. Setters and the parser both go through these, so
//! a field that passes here is always renderable.

use crate::charset::{first_invalid_field_char, is_date_char};
use crate::date::{DatePattern, DEFAULT_DATE_FORMAT};
use crate::error::StampError;
use crate::types::{Field, Version, MAX_BITS};

/// Accept only versions 0 and 1.
pub fn validate_version(version: u32) -> Result<Version, StampError> {
    match version {
        0 => Ok(Version::V0),
        1 => Ok(Version::V1),
        other => Err(StampError::InvalidFormat(format!(
            "unsupported stamp version {other}"
        ))),
    }
}

/// Accept claimed values in `0..=160`.
pub fn validate_bits(bits: u32) -> Result<u32, StampError> {
    if bits > MAX_BITS {
        return Err(StampError::OutOfRange {
            field: Field::Bits,
            value: u64::from(bits),
            max: u64::from(MAX_BITS),
        });
    }
    Ok(bits)
}

/// Resolve the rendering pattern for a date.
///
/// With `use_default_pattern` the canonical pattern applies and `format` is
/// ignored. Otherwise `format` must be a component-wise prefix of
/// `%y%m%d%H%M%S`.
pub fn validate_date_pattern(
    format: Option<&str>,
    use_default_pattern: bool,
) -> Result<DatePattern, StampError> {
    if use_default_pattern {
        return Ok(DatePattern::FULL);
    }
    DatePattern::from_format(format.unwrap_or(DEFAULT_DATE_FORMAT))
}

/// Check that every character of `value` is in the stamp field alphabet.
///
/// `None` is valid and treated as empty.
pub fn validate_field_string(field: Field, value: Option<&str>) -> Result<(), StampError> {
    match value.and_then(first_invalid_field_char) {
        Some(character) => Err(StampError::InvalidCharacter { field, character }),
        None => Ok(()),
    }
}

/// Check that a date component contains only digits.
pub fn validate_date_string(value: &str) -> Result<(), StampError> {
    match value.chars().find(|c| !is_date_char(*c)) {
        Some(character) => Err(StampError::InvalidCharacter {
            field: Field::Date,
            character,
        }),
        None => Ok(()),
    }
}

/// Check a suffix against the configured length limit.
pub fn validate_suffix_length(suffix: &str, limit: usize) -> Result<(), StampError> {
    let len = suffix.chars().count();
    if len > limit {
        return Err(StampError::OutOfRange {
            field: Field::Suffix,
            value: len as u64,
            max: limit as u64,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(validate_version(0).unwrap(), Version::V0);
        assert_eq!(validate_version(1).unwrap(), Version::V1);
        assert!(matches!(validate_version(2), Err(StampError::InvalidFormat(_))));
        assert!(matches!(validate_version(u32::MAX), Err(StampError::InvalidFormat(_))));
    }

    #[test]
    fn test_bits_bounds() {
        assert_eq!(validate_bits(0).unwrap(), 0);
        assert_eq!(validate_bits(160).unwrap(), 160);
        assert!(matches!(
            validate_bits(161),
            Err(StampError::OutOfRange { field: Field::Bits, value: 161, max: 160 })
        ));
    }

    #[test]
    fn test_date_pattern_default_ignores_format() {
        assert_eq!(
            validate_date_pattern(Some("%Y"), true).unwrap(),
            DatePattern::FULL
        );
    }

    #[test]
    fn test_date_pattern_custom() {
        assert_eq!(
            validate_date_pattern(Some("%y%m%d"), false).unwrap(),
            DatePattern::Day
        );
        assert!(matches!(
            validate_date_pattern(Some("%d%m%y"), false),
            Err(StampError::InvalidFormat(_))
        ));
        assert_eq!(validate_date_pattern(None, false).unwrap(), DatePattern::FULL);
    }

    #[test]
    fn test_field_string() {
        assert!(validate_field_string(Field::Resource, None).is_ok());
        assert!(validate_field_string(Field::Resource, Some("")).is_ok());
        assert!(validate_field_string(Field::Resource, Some("alice@example.com")).is_ok());
        assert!(validate_field_string(Field::Extensions, Some("a=1;b")).is_ok());
        assert_eq!(
            validate_field_string(Field::Resource, Some("alice:bob")),
            Err(StampError::InvalidCharacter { field: Field::Resource, character: ':' })
        );
        assert_eq!(
            validate_field_string(Field::Salt, Some("a b")),
            Err(StampError::InvalidCharacter { field: Field::Salt, character: ' ' })
        );
    }

    #[test]
    fn test_date_string() {
        assert!(validate_date_string("050101").is_ok());
        assert!(validate_date_string("").is_ok());
        assert!(matches!(
            validate_date_string("05-01"),
            Err(StampError::InvalidCharacter { field: Field::Date, character: '-' })
        ));
    }

    #[test]
    fn test_suffix_length() {
        assert!(validate_suffix_length("abc", 3).is_ok());
        assert!(matches!(
            validate_suffix_length("abcd", 3),
            Err(StampError::OutOfRange { field: Field::Suffix, value: 4, max: 3 })
        ));
    }
}
