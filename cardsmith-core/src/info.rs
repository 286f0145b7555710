//! Card information records: validity plus brand and issuer classification.

use serde::Serialize;

use crate::classifier::classify_by_prefix;
use crate::errors::Result;
use crate::mapping::PrefixMapping;
use crate::validators;

/// Everything cardsmith can tell about a single card number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardInfo {
    pub card: String,
    /// Whether the number passes the Luhn checksum.
    pub valid: bool,
    /// Brand label, or `"-"` when no brand prefix matches.
    pub brand: String,
    /// Issuer label, or `"-"` when no issuer prefix matches.
    pub issuer: String,
}

/// Builds a [`CardInfo`] for `card`.
///
/// Fails with [`crate::CardError::InvalidCardFormat`] if the number contains
/// anything but digits. A number that merely fails the checksum is reported
/// with `valid: false` and is still classified.
pub fn card_info(card: &str, brands: &PrefixMapping, issuers: &PrefixMapping) -> Result<CardInfo> {
    let valid = validators::check_validity(card)?;
    Ok(CardInfo {
        card: card.to_string(),
        valid,
        brand: classify_by_prefix(card, brands),
        issuer: classify_by_prefix(card, issuers),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CardError;

    fn mappings() -> (PrefixMapping, PrefixMapping) {
        let brands = [("4", "VISA"), ("51", "MASTERCARD")].into_iter().collect();
        let issuers = [("440043", "Kaspi Gold")].into_iter().collect();
        (brands, issuers)
    }

    #[test]
    fn test_card_info_valid_card() {
        let (brands, issuers) = mappings();
        let info = card_info("4400430180300003", &brands, &issuers).unwrap();
        assert_eq!(
            info,
            CardInfo {
                card: "4400430180300003".to_string(),
                valid: true,
                brand: "VISA".to_string(),
                issuer: "Kaspi Gold".to_string(),
            }
        );
    }

    #[test]
    fn test_card_info_invalid_checksum_still_classified() {
        let (brands, issuers) = mappings();
        let info = card_info("5100000000000000", &brands, &issuers).unwrap();
        assert!(!info.valid);
        assert_eq!(info.brand, "MASTERCARD");
        assert_eq!(info.issuer, "-");
    }

    #[test]
    fn test_card_info_rejects_non_digits() {
        let (brands, issuers) = mappings();
        assert!(matches!(
            card_info("4400-4301-8030-0003", &brands, &issuers),
            Err(CardError::InvalidCardFormat(_))
        ));
    }
}
