//! The textual wire form of stamps.
//!
//! ```text
//! v0: 0:<date>:<resource>:<suffix>
//! v1: 1:<bits>:<date>:<resource>:<extensions>:<salt>:<suffix>
//! ```
//!
//! Parsing is lenient in the sense that it never looks at the digest: a
//! structurally valid stamp parses whether or not its proof-of-work holds.
//! It is strict about text, though. Only canonical renderings are accepted,
//! so `render(parse(s)) == s` for every `s` that parses, and a verifier
//! hashes exactly the bytes the sender hashed.

use crate::charset::DELIMITER;
use crate::date::StampDate;
use crate::error::StampError;
use crate::types::{Field, Stamp, Version};
use crate::validation::{validate_bits, validate_field_string, validate_version};

/// Render a complete stamp.
///
/// Fails with [`StampError::IncompleteStamp`] if the resource or the suffix
/// is unset.
pub fn render(stamp: &Stamp) -> Result<String, StampError> {
    let suffix = stamp
        .suffix
        .as_deref()
        .ok_or(StampError::IncompleteStamp(Field::Suffix))?;
    render_probe(stamp, suffix)
}

/// Render `stamp` with `candidate` in place of its own suffix.
///
/// Only the resource is required; the stamp's suffix is ignored.
pub fn render_probe(stamp: &Stamp, candidate: &str) -> Result<String, StampError> {
    let mut out = probe_prefix(stamp)?;
    out.push_str(candidate);
    Ok(out)
}

/// Everything up to and including the delimiter before the suffix.
///
/// The searcher renders this once and appends each candidate to it.
pub fn probe_prefix(stamp: &Stamp) -> Result<String, StampError> {
    let resource = stamp
        .resource
        .as_deref()
        .ok_or(StampError::IncompleteStamp(Field::Resource))?;
    let date = stamp.date.render();

    let mut out = String::with_capacity(
        16 + date.len() + resource.len() + stamp.extensions.len() + stamp.salt.len(),
    );
    out.push_str(if stamp.version == Version::V0 { "0" } else { "1" });
    out.push(DELIMITER);
    if stamp.version == Version::V1 {
        out.push_str(&stamp.bits.to_string());
        out.push(DELIMITER);
    }
    out.push_str(&date);
    out.push(DELIMITER);
    out.push_str(resource);
    out.push(DELIMITER);
    if stamp.version == Version::V1 {
        out.push_str(&stamp.extensions);
        out.push(DELIMITER);
        out.push_str(&stamp.salt);
        out.push(DELIMITER);
    }
    Ok(out)
}

/// Parse a stamp string into fields.
///
/// Checks structure, character sets and numeric ranges. Does not check the
/// proof-of-work.
pub fn parse(s: &str) -> Result<Stamp, StampError> {
    let parts: Vec<&str> = s.split(DELIMITER).collect();
    let version = parse_version(parts[0])?;

    if parts.len() != version.component_count() {
        return Err(StampError::InvalidFormat(format!(
            "version {version} stamp must have {} components, found {}",
            version.component_count(),
            parts.len()
        )));
    }

    match version {
        Version::V0 => {
            let date = StampDate::parse(parts[1])?;
            let mut stamp = Stamp::new(Version::V0, 0, date);
            stamp.resource = Some(parse_field(Field::Resource, parts[2])?);
            stamp.suffix = Some(parse_field(Field::Suffix, parts[3])?);
            Ok(stamp)
        }
        Version::V1 => {
            let bits = parse_bits(parts[1])?;
            let date = StampDate::parse(parts[2])?;
            let mut stamp = Stamp::new(Version::V1, bits, date);
            stamp.resource = Some(parse_field(Field::Resource, parts[3])?);
            stamp.extensions = parse_field(Field::Extensions, parts[4])?;
            stamp.salt = parse_field(Field::Salt, parts[5])?;
            stamp.suffix = Some(parse_field(Field::Suffix, parts[6])?);
            Ok(stamp)
        }
    }
}

fn parse_version(s: &str) -> Result<Version, StampError> {
    match s {
        "0" => Ok(Version::V0),
        "1" => Ok(Version::V1),
        _ => match s.parse::<u32>() {
            // Numeric but unsupported, e.g. "2"; or non-canonical, e.g. "01".
            Ok(v) if s.len() == 1 => validate_version(v),
            _ => Err(StampError::InvalidFormat(format!(
                "malformed version component {s:?}"
            ))),
        },
    }
}

fn parse_bits(s: &str) -> Result<u32, StampError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StampError::InvalidFormat(format!(
            "bits component {s:?} is not a decimal number"
        )));
    }
    if s.len() > 1 && s.starts_with('0') {
        return Err(StampError::InvalidFormat(format!(
            "bits component {s:?} has leading zeros"
        )));
    }
    let value: u64 = s.parse().unwrap_or(u64::MAX);
    let bits = u32::try_from(value).map_err(|_| StampError::OutOfRange {
        field: Field::Bits,
        value,
        max: u64::from(crate::types::MAX_BITS),
    })?;
    validate_bits(bits)
}

fn parse_field(field: Field, s: &str) -> Result<String, StampError> {
    validate_field_string(field, Some(s))?;
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const V1: &str = "1:20:050101000000:alice@example.com:ext=1;flag:abc:xyz";
    const V0: &str = "0:050101:bob@example.org:j/";

    fn base_v1() -> Stamp {
        let mut stamp = Stamp::new(Version::V1, 8, StampDate::parse("050101000000").unwrap());
        stamp.resource = Some("alice@example.com".into());
        stamp.salt = "abc".into();
        stamp
    }

    #[test]
    fn test_render_v1() {
        let mut stamp = base_v1();
        stamp.suffix = Some("bT".into());
        assert_eq!(
            render(&stamp).unwrap(),
            "1:8:050101000000:alice@example.com::abc:bT"
        );
    }

    #[test]
    fn test_render_v0_omits_v1_fields() {
        let mut stamp = base_v1();
        stamp.version = Version::V0;
        stamp.extensions = "ignored".into();
        stamp.suffix = Some("q".into());
        assert_eq!(render(&stamp).unwrap(), "0:050101000000:alice@example.com:q");
    }

    #[test]
    fn test_render_requires_resource_and_suffix() {
        let mut stamp = base_v1();
        assert_eq!(render(&stamp), Err(StampError::IncompleteStamp(Field::Suffix)));

        stamp.suffix = Some("a".into());
        stamp.resource = None;
        assert_eq!(render(&stamp), Err(StampError::IncompleteStamp(Field::Resource)));
    }

    #[test]
    fn test_render_probe_ignores_own_suffix() {
        let mut stamp = base_v1();
        stamp.suffix = Some("zzz".into());
        assert_eq!(
            render_probe(&stamp, "a").unwrap(),
            "1:8:050101000000:alice@example.com::abc:a"
        );

        stamp.suffix = None;
        assert!(render_probe(&stamp, "a").is_ok());
    }

    #[test]
    fn test_probe_prefix_ends_with_delimiter() {
        let prefix = probe_prefix(&base_v1()).unwrap();
        assert_eq!(prefix, "1:8:050101000000:alice@example.com::abc:");
    }

    #[test]
    fn test_parse_v1() {
        let stamp = parse(V1).unwrap();
        assert_eq!(stamp.version, Version::V1);
        assert_eq!(stamp.bits, 20);
        assert_eq!(stamp.date.render(), "050101000000");
        assert_eq!(stamp.resource(), Some("alice@example.com"));
        assert_eq!(stamp.extensions, "ext=1;flag");
        assert_eq!(stamp.salt, "abc");
        assert_eq!(stamp.suffix(), Some("xyz"));
        assert_eq!(render(&stamp).unwrap(), V1);
    }

    #[test]
    fn test_parse_v0() {
        let stamp = parse(V0).unwrap();
        assert_eq!(stamp.version, Version::V0);
        assert_eq!(stamp.bits, 0);
        assert_eq!(stamp.claimed_bits(), None);
        assert_eq!(stamp.resource(), Some("bob@example.org"));
        assert_eq!(stamp.suffix(), Some("j/"));
        assert_eq!(render(&stamp).unwrap(), V0);
    }

    #[test]
    fn test_parse_empty_optional_fields() {
        let stamp = parse("1:0:05:r:::").unwrap();
        assert_eq!(stamp.extensions, "");
        assert_eq!(stamp.salt, "");
        assert_eq!(stamp.suffix(), Some(""));
        assert_eq!(render(&stamp).unwrap(), "1:0:05:r:::");
    }

    #[test]
    fn test_parse_unsupported_version() {
        assert!(matches!(
            parse("2:20:050101:res:ext:salt:sfx"),
            Err(StampError::InvalidFormat(_))
        ));
        assert!(matches!(parse("x:1:2:3"), Err(StampError::InvalidFormat(_))));
        assert!(matches!(parse("01:050101:r:s"), Err(StampError::InvalidFormat(_))));
        assert!(matches!(parse(""), Err(StampError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_wrong_component_count() {
        assert!(matches!(
            parse("1:20:050101:res:ext:salt"),
            Err(StampError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse("1:20:050101:res:ext:salt:sfx:extra"),
            Err(StampError::InvalidFormat(_))
        ));
        assert!(matches!(parse("0:050101:res"), Err(StampError::InvalidFormat(_))));
        assert!(matches!(
            parse("0:050101:res:sfx:extra"),
            Err(StampError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_bits_out_of_range() {
        assert!(matches!(
            parse("1:999:050101:res:ext:salt:sfx"),
            Err(StampError::OutOfRange { field: Field::Bits, value: 999, max: 160 })
        ));
        assert!(matches!(
            parse("1:161:050101:res:ext:salt:sfx"),
            Err(StampError::OutOfRange { field: Field::Bits, .. })
        ));
        assert!(matches!(
            parse("1:99999999999999999999999:050101:res:ext:salt:sfx"),
            Err(StampError::OutOfRange { field: Field::Bits, .. })
        ));
        assert!(parse("1:160:050101:res:ext:salt:sfx").is_ok());
    }

    #[test]
    fn test_parse_bits_non_canonical() {
        for bits in ["", "020", "+20", "-1", "2a"] {
            let s = format!("1:{bits}:050101:res:ext:salt:sfx");
            assert!(
                matches!(parse(&s), Err(StampError::InvalidFormat(_))),
                "{s}"
            );
        }
    }

    #[test]
    fn test_parse_bad_characters() {
        assert!(matches!(
            parse("1:20:0501x1:res:ext:salt:sfx"),
            Err(StampError::InvalidCharacter { field: Field::Date, character: 'x' })
        ));
        assert!(matches!(
            parse("1:20:050101:re s:ext:salt:sfx"),
            Err(StampError::InvalidCharacter { field: Field::Resource, character: ' ' })
        ));
        assert!(matches!(
            parse("0:050101:res:sf\tx"),
            Err(StampError::InvalidCharacter { field: Field::Suffix, .. })
        ));
    }
}
