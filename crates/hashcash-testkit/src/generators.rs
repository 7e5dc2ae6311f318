//! Proptest generators for property-based testing.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use hashcash_core::{
    DatePattern, Stamp, StampDate, Version, FIELD_ALPHABET, MAX_BITS, MAX_YEAR, MIN_YEAR,
};

/// A string of field-alphabet characters with length in `len`.
pub fn field_string(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    let alphabet: Vec<char> = FIELD_ALPHABET.chars().collect();
    prop::collection::vec(prop::sample::select(alphabet), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// A non-empty resource such as a mailbox or host name.
pub fn resource() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,12}@[a-z]{1,12}\\.(com|org|net)".prop_map(String::from),
        field_string(1..=32),
    ]
}

/// An extensions field of `name` / `name=value` entries.
pub fn extensions() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-z]{1,6}", prop::option::of("[a-z0-9]{1,6}")), 0..=3).prop_map(
        |entries| {
            entries
                .into_iter()
                .map(|(name, value)| match value {
                    Some(v) => format!("{name}={v}"),
                    None => name,
                })
                .collect::<Vec<_>>()
                .join(";")
        },
    )
}

pub fn version() -> impl Strategy<Value = Version> {
    prop_oneof![Just(Version::V0), Just(Version::V1)]
}

/// Any valid claimed value.
pub fn bits() -> impl Strategy<Value = u32> {
    0..=MAX_BITS
}

/// A difficulty cheap enough to search for in a test.
pub fn low_bits() -> impl Strategy<Value = u32> {
    0u32..=6
}

pub fn date_pattern() -> impl Strategy<Value = DatePattern> {
    prop_oneof![
        Just(DatePattern::Year),
        Just(DatePattern::Month),
        Just(DatePattern::Day),
        Just(DatePattern::Hour),
        Just(DatePattern::Minute),
        Just(DatePattern::Second),
    ]
}

fn datetime_in(years: impl Strategy<Value = i32>) -> impl Strategy<Value = NaiveDateTime> {
    (years, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60).prop_filter_map(
        "valid calendar time",
        |(y, mo, d, h, mi, s)| NaiveDate::from_ymd_opt(y, mo, d)?.and_hms_opt(h, mi, s),
    )
}

/// A UTC time inside the two-digit-year window (1970 to 2069).
pub fn datetime() -> impl Strategy<Value = NaiveDateTime> {
    datetime_in(MIN_YEAR..=MAX_YEAR)
}

/// A UTC time whose year a two-digit rendering cannot carry.
pub fn datetime_outside_window() -> impl Strategy<Value = NaiveDateTime> {
    datetime_in(prop_oneof![1000i32..MIN_YEAR, (MAX_YEAR + 1)..=9999])
}

pub fn stamp_date() -> impl Strategy<Value = StampDate> {
    (datetime(), date_pattern())
        .prop_filter_map("year in window", |(when, pattern)| {
            StampDate::new(when, pattern).ok()
        })
}

/// Parameters for building a complete stamp.
///
/// v0 parameters carry zero bits and empty v1-only fields, so a stamp built
/// from them equals its own parse.
#[derive(Debug, Clone)]
pub struct StampParams {
    pub version: Version,
    pub bits: u32,
    pub date: StampDate,
    pub resource: String,
    pub extensions: String,
    pub salt: String,
    pub suffix: String,
}

impl Arbitrary for StampParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            version(),
            bits(),
            stamp_date(),
            resource(),
            extensions(),
            field_string(0..=16), // salt
            field_string(0..=12), // suffix
        )
            .prop_map(|(version, bits, date, resource, extensions, salt, suffix)| {
                let v1 = version == Version::V1;
                StampParams {
                    version,
                    bits: if v1 { bits } else { 0 },
                    date,
                    resource,
                    extensions: if v1 { extensions } else { String::new() },
                    salt: if v1 { salt } else { String::new() },
                    suffix,
                }
            })
            .boxed()
    }
}

/// Build the stamp described by `params`.
pub fn stamp_from_params(params: &StampParams) -> Stamp {
    let mut stamp = Stamp::new(params.version, params.bits, params.date);
    stamp.resource = Some(params.resource.clone());
    stamp.extensions = params.extensions.clone();
    stamp.salt = params.salt.clone();
    stamp.suffix = Some(params.suffix.clone());
    stamp
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashcash_core::{is_field_char, parse, render, validate_field_string, Field};

    proptest! {
        #[test]
        fn test_field_strings_validate(s in field_string(0..=40)) {
            prop_assert!(s.chars().all(is_field_char));
            prop_assert!(validate_field_string(Field::Salt, Some(&s)).is_ok());
        }

        #[test]
        fn test_extensions_validate(s in extensions()) {
            prop_assert!(validate_field_string(Field::Extensions, Some(&s)).is_ok());
        }

        #[test]
        fn test_params_round_trip(params: StampParams) {
            let stamp = stamp_from_params(&params);
            let text = render(&stamp).unwrap();
            prop_assert_eq!(parse(&text).unwrap(), stamp);
        }
    }
}
