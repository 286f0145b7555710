// cardsmith-core/src/lib.rs
//! # cardsmith Core Library
//!
//! `cardsmith-core` provides the platform-independent arithmetic behind the
//! `cardsmith` CLI: Luhn validation, check-digit synthesis, wildcard-based
//! candidate generation, prefix-based brand/issuer classification and
//! issuance of new, checksum-valid card numbers.
//!
//! The library does no console I/O. The only file access is
//! [`PrefixMapping::load_from_file`], which reads the flat `PREFIX:LABEL`
//! mapping files used for classification and issuance.
//!
//! ## Modules
//!
//! * `validators`: Luhn checks and card-number format validation.
//! * `mapping`: Ordered prefix-to-label mappings and their text loader.
//! * `classifier`: Longest-prefix classification and label-to-prefix lookup.
//! * `generator`: Wildcard expansion of card patterns.
//! * `issuer`: Issuance of new card numbers from brand and issuer prefixes.
//! * `info`: Card information records.
//! * `engine`: The `CardEngine` facade that owns the random number source.
//! * `errors`: The `CardError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use cardsmith_core::{CardEngine, PrefixMapping, MappingLayout};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! fn main() -> Result<(), cardsmith_core::CardError> {
//!     let brands = PrefixMapping::parse_str("4:VISA\n51:MASTERCARD", MappingLayout::PrefixFirst, "brands")?;
//!     let issuers = PrefixMapping::parse_str("400430:Kaspi Gold", MappingLayout::PrefixFirst, "issuers")?;
//!
//!     let mut engine = CardEngine::with_rng(StdRng::seed_from_u64(7));
//!     let card = engine.issue_for_labels("VISA", "Kaspi Gold", &brands, &issuers)?;
//!     assert!(engine.check_validity(&card)?);
//!
//!     let info = engine.card_info(&card, &brands, &issuers)?;
//!     assert_eq!(info.brand, "VISA");
//!
//!     let candidates = engine.generate("411111111111111*", false)?;
//!     assert_eq!(candidates, vec!["4111111111111111".to_string()]);
//!     Ok(())
//! }
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod classifier;
pub mod engine;
pub mod errors;
pub mod generator;
pub mod info;
pub mod issuer;
pub mod mapping;
pub mod validators;

/// Re-exports the custom error type for clear error reporting.
pub use errors::{CardError, Result};

/// Re-exports the engine facade used by the CLI.
pub use engine::CardEngine;

/// Re-exports the free-standing engine operations.
pub use classifier::{best_match, classify_by_prefix, resolve_prefix_for_label, UNKNOWN_LABEL};
pub use generator::{generate, validate_pattern, MAX_WILDCARDS, WILDCARD};
pub use info::{card_info, CardInfo};
pub use issuer::{issue, issue_for_labels, ISSUED_CARD_LENGTH};
pub use mapping::{MappingLayout, PrefixMapping, FIELD_SEPARATOR};
pub use validators::{
    check_validity, compute_check_digit, is_valid_luhn, validate_card, MAX_CARD_LENGTH, MIN_CARD_LENGTH,
};
