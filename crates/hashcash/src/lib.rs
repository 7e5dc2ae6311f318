//! # Hashcash
//!
//! Generate and verify hashcash proof-of-work stamps.
//!
//! ## Overview
//!
//! A stamp is a short text token whose digest starts with a number of zero
//! bits. Producing one takes on average `2^bits` digest evaluations; checking
//! one takes a single evaluation. Services ask requesters for a stamp to put a
//! price on each request.
//!
//! - **Generation**: [`StampEngine::new_for_generation`] gives a
//!   [`StampGenerator`]. Set the resource, then search for a suffix.
//! - **Verification**: [`StampEngine::parse_for_verification`] gives a
//!   [`ParsedStamp`]. Parsing only checks structure; ask
//!   [`ParsedStamp::is_valid`] or [`ParsedStamp::value`] for the work.
//! - **Policy**: [`VerificationPolicy`] layers freshness, resource and
//!   minimum-value checks on top.
//!
//! ## Usage
//!
//! ```rust
//! use hashcash::{EngineConfig, StampEngine};
//!
//! let engine = StampEngine::with_software_digest(EngineConfig {
//!     bits: 8,
//!     ..EngineConfig::default()
//! })
//! .unwrap();
//!
//! let mut generator = engine.new_for_generation().unwrap();
//! generator.set_resource("alice@example.com").unwrap();
//! generator.find_suffix().unwrap();
//! let text = generator.stamp().unwrap();
//!
//! let parsed = engine.parse_for_verification(&text).unwrap();
//! assert!(parsed.is_valid().unwrap());
//! assert!(parsed.value().unwrap() >= 8);
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `hashcash::primitives` - Field model, codec and validation
//! - `hashcash::digest` - Software digest provider
//! - `hashcash::search` - The suffix search and its controls

pub mod config;
pub mod engine;
pub mod error;
pub mod policy;
pub mod salt;
pub mod verify;

// Re-export component crates
pub use hashcash_core as primitives;
pub use hashcash_digest as digest;
pub use hashcash_search as search;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use engine::{GeneratorState, StampEngine, StampGenerator};
pub use error::{ErrorKind, HashcashError, Result};
pub use policy::{effective_value, PolicyViolation, VerificationPolicy};
pub use verify::ParsedStamp;

// Re-export commonly used component types
pub use hashcash_core::{DigestAlgorithm, DigestError, DigestProvider, Stamp, StampDate, Version};
pub use hashcash_digest::SoftwareDigest;
pub use hashcash_search::{CancellationToken, SearchControl, SearchOutcome};
