//! # Hashcash Testkit
//!
//! Testing utilities for the hashcash stamp engine.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Digest stubs**: providers with fixed, counted, failing or malformed
//!   output, for exercising search and verification without real hashing
//! - **Golden vectors**: stamps with known winning suffixes and digests
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: a fixed clock and seeded RNG
//!
//! ## Golden Vectors
//!
//! ```rust
//! use hashcash_testkit::vectors::{all_vectors, verify_all_vectors};
//!
//! for (name, matches, hex) in verify_all_vectors() {
//!     assert!(matches, "{name}: {hex}");
//! }
//! assert!(!all_vectors().is_empty());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use hashcash_testkit::generators::{stamp_from_params, StampParams};
//!
//! proptest! {
//!     #[test]
//!     fn stamps_round_trip(params: StampParams) {
//!         let stamp = stamp_from_params(&params);
//!         let text = hashcash_core::render(&stamp).unwrap();
//!         prop_assert_eq!(hashcash_core::parse(&text).unwrap(), stamp);
//!     }
//! }
//! ```

pub mod digests;
pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use digests::{
    ConstantDigest, CountingDigest, FailingDigest, ShortDigest, SuffixMatchDigest, ZeroDigest,
};
pub use fixtures::{alice_stamp, fixed_now, seeded_rng};
pub use generators::{stamp_from_params, StampParams};
pub use vectors::{all_vectors, search_vector, verify_all_vectors, GoldenVector};
