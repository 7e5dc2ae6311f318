//! # Hashcash Core
//!
//! Pure primitives for hashcash proof-of-work stamps: the field model, the
//! v0/v1 wire codec, field validation, and value (leading-zero-bit) counting.
//!
//! This crate does no hashing, no I/O and no searching. Digests come from an
//! injected [`DigestProvider`].
//!
//! ## Key Types
//!
//! - [`Stamp`] - A stamp as a set of fields
//! - [`StampDate`] - A date together with its truncatable rendering pattern
//! - [`Version`] - Wire format version (0 or 1)
//! - [`DigestProvider`] - The digest capability the engine consumes
//!
//! ## Wire Format
//!
//! ```text
//! v0: 0:<date>:<resource>:<suffix>
//! v1: 1:<bits>:<date>:<resource>:<extensions>:<salt>:<suffix>
//! ```
//!
//! See the [`codec`] module.

pub mod charset;
pub mod codec;
pub mod date;
pub mod digest;
pub mod error;
pub mod extensions;
pub mod types;
pub mod validation;
pub mod value;

pub use charset::{is_field_char, DELIMITER, FIELD_ALPHABET};
pub use codec::{parse, probe_prefix, render, render_probe};
pub use date::{DatePattern, StampDate, DEFAULT_DATE_FORMAT, MAX_YEAR, MIN_YEAR};
pub use digest::{checked_digest, DigestAlgorithm, DigestProvider};
pub use error::{DigestError, StampError};
pub use extensions::{format_extensions, parse_extensions, Extension};
pub use types::{
    Field, Stamp, Version, DEFAULT_BITS, DEFAULT_SEED_LENGTH, DEFAULT_SUFFIX_LIMIT, MAX_BITS,
};
pub use validation::{
    validate_bits, validate_date_pattern, validate_date_string, validate_field_string,
    validate_suffix_length, validate_version,
};
pub use value::{leading_zero_bits, meets_target};
