// cardsmith-core/src/issuer.rs
//! Issuance of new card numbers from brand and issuer prefixes.
//!
//! An issued number is laid out as `brand prefix | issuer prefix | random
//! fill | check digit` and is always exactly [`ISSUED_CARD_LENGTH`] digits.

use log::{debug, info};
use rand::Rng;

use crate::classifier::resolve_prefix_for_label;
use crate::errors::{CardError, Result};
use crate::mapping::PrefixMapping;
use crate::validators;

/// Length of every issued card number.
pub const ISSUED_CARD_LENGTH: usize = 16;

/// Issues a Luhn-valid card number starting with `brand_prefix` followed by `issuer_prefix`.
///
/// Fails with [`CardError::InsufficientPrefixRoom`] when the combined prefix
/// leaves no room for at least one random digit plus the check digit, and with
/// [`CardError::InvalidCardFormat`] when a prefix contains non-digits.
pub fn issue<R: Rng + ?Sized>(brand_prefix: &str, issuer_prefix: &str, rng: &mut R) -> Result<String> {
    let mut card = String::with_capacity(ISSUED_CARD_LENGTH);
    card.push_str(brand_prefix);
    card.push_str(issuer_prefix);

    if let Some(bad) = card.chars().find(|c| !c.is_ascii_digit()) {
        return Err(CardError::InvalidCardFormat(format!(
            "prefix contains non-digit character '{}'",
            bad.escape_default()
        )));
    }

    let prefix_len = card.len();
    let remaining = ISSUED_CARD_LENGTH.saturating_sub(prefix_len);
    if remaining <= 1 {
        return Err(CardError::InsufficientPrefixRoom {
            prefix_len,
            max: ISSUED_CARD_LENGTH - 2,
        });
    }

    for _ in 0..remaining - 1 {
        let digit: u8 = rng.random_range(0..10);
        card.push(char::from(b'0' + digit));
    }

    let check_digit = validators::compute_check_digit(&card)?;
    card.push(char::from(b'0' + check_digit));

    debug!("Issued card with {}-digit prefix and {} random digit(s)", prefix_len, remaining - 1);
    Ok(card)
}

/// Resolves `brand` and `issuer` labels to prefixes and issues a card from them.
///
/// Both mappings must be non-empty; an empty one is reported as a file format
/// problem since it can only come from an empty mapping source.
pub fn issue_for_labels<R: Rng + ?Sized>(
    brand: &str,
    issuer: &str,
    brands: &PrefixMapping,
    issuers: &PrefixMapping,
    rng: &mut R,
) -> Result<String> {
    for (name, mapping) in [("brands", brands), ("issuers", issuers)] {
        if mapping.is_empty() {
            return Err(CardError::InvalidFileFormat {
                source_name: name.to_string(),
                reason: "mapping contains no entries".to_string(),
            });
        }
    }

    let brand_prefix = resolve_prefix_for_label(brand, brands)?;
    let issuer_prefix = resolve_prefix_for_label(issuer, issuers)?;
    info!("Issuing {} card for {} (prefix {}{})", brand, issuer, brand_prefix, issuer_prefix);

    issue(&brand_prefix, &issuer_prefix, rng)
}
