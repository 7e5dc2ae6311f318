//! Fixed clocks and randomness for reproducible tests.

use chrono::{NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use rand::SeedableRng;

use hashcash_core::{Stamp, StampDate, Version};

/// Seed used by [`seeded_rng`].
pub const FIXTURE_SEED: u64 = 0x6861_7368_6361_7368;

/// 2005-01-01 00:00:00 UTC, the date of most golden vectors.
pub fn fixed_now() -> NaiveDateTime {
    at(2005, 1, 1, 0, 0, 0)
}

/// A UTC time from its calendar components; panics on impossible dates.
pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, sec))
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day} {hour}:{min}:{sec}"))
}

/// A deterministic RNG for salts.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(FIXTURE_SEED)
}

/// The v1 stamp `1:<bits>:050101000000:alice@example.com::abc:` without a
/// suffix.
pub fn alice_stamp(bits: u32) -> Stamp {
    let mut stamp = Stamp::new(
        Version::V1,
        bits,
        StampDate::new(fixed_now(), Default::default()).unwrap_or_else(|e| panic!("fixture date rejected: {e}")),
    );
    stamp.resource = Some("alice@example.com".to_string());
    stamp.salt = "abc".to_string();
    stamp
}
