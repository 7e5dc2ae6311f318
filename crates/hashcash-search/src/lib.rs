//! # Hashcash Search
//!
//! The proof-of-work search: given a stamp missing only its suffix, find the
//! shortest suffix whose digest has at least a target number of leading zero
//! bits.
//!
//! The search is pure CPU work with no shared state. It can run on any thread
//! and stops cooperatively through a [`SearchControl`].
//!
//! ```rust
//! use hashcash_core::{DigestAlgorithm, Stamp, StampDate, Version};
//! use hashcash_digest::SoftwareDigest;
//! use hashcash_search::{find_suffix, SearchControl};
//!
//! let mut stamp = Stamp::new(Version::V1, 8, StampDate::parse("050101000000").unwrap());
//! stamp.resource = Some("alice@example.com".into());
//! stamp.salt = "abc".into();
//!
//! let outcome = find_suffix(
//!     &stamp,
//!     8,
//!     128,
//!     DigestAlgorithm::Sha1,
//!     &SoftwareDigest::new(),
//!     &SearchControl::default(),
//! )
//! .unwrap();
//! assert_eq!(outcome.suffix, "bT");
//! ```

pub mod candidates;
pub mod control;
pub mod error;
pub mod searcher;

pub use candidates::SuffixCandidates;
pub use control::{CancellationToken, SearchControl, DEFAULT_CHECK_INTERVAL};
pub use error::{Result, SearchError};
pub use searcher::{find_suffix, SearchOutcome, Searcher};
