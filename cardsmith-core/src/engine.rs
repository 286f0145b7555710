// cardsmith-core/src/engine.rs
//! Defines `CardEngine`, the single entry point the CLI layer talks to.
//!
//! The engine is a thin facade over the free functions in this crate. Its only
//! state is the random number source used by [`CardEngine::generate`] (when
//! picking) and [`CardEngine::issue`]. Production code uses the thread-local
//! generator; tests inject a seeded one to get reproducible output.
//!
//! License: MIT OR APACHE 2.0

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::errors::Result;
use crate::info::{card_info, CardInfo};
use crate::mapping::PrefixMapping;
use crate::{classifier, generator, issuer, validators};

/// Card number operations bundled with a random number source.
#[derive(Debug, Clone)]
pub struct CardEngine<R = ThreadRng> {
    rng: R,
}

impl CardEngine<ThreadRng> {
    /// Creates an engine backed by the thread-local random number generator.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for CardEngine<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CardEngine<R> {
    /// Creates an engine with an explicit random number source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// See [`validators::check_validity`].
    pub fn check_validity(&self, card: &str) -> Result<bool> {
        validators::check_validity(card)
    }

    /// See [`validators::validate_card`].
    pub fn validate_card(&self, card: &str) -> Result<bool> {
        validators::validate_card(card)
    }

    /// See [`validators::compute_check_digit`].
    pub fn compute_check_digit(&self, digits: &str) -> Result<u8> {
        validators::compute_check_digit(digits)
    }

    /// See [`generator::generate`].
    pub fn generate(&mut self, pattern: &str, pick_one: bool) -> Result<Vec<String>> {
        generator::generate(pattern, pick_one, &mut self.rng)
    }

    /// See [`classifier::classify_by_prefix`].
    pub fn classify_by_prefix(&self, card: &str, mapping: &PrefixMapping) -> String {
        classifier::classify_by_prefix(card, mapping)
    }

    /// See [`classifier::resolve_prefix_for_label`].
    pub fn resolve_prefix_for_label(&self, label: &str, mapping: &PrefixMapping) -> Result<String> {
        classifier::resolve_prefix_for_label(label, mapping)
    }

    /// See [`issuer::issue`].
    pub fn issue(&mut self, brand_prefix: &str, issuer_prefix: &str) -> Result<String> {
        issuer::issue(brand_prefix, issuer_prefix, &mut self.rng)
    }

    /// See [`issuer::issue_for_labels`].
    pub fn issue_for_labels(
        &mut self,
        brand: &str,
        issuer: &str,
        brands: &PrefixMapping,
        issuers: &PrefixMapping,
    ) -> Result<String> {
        issuer::issue_for_labels(brand, issuer, brands, issuers, &mut self.rng)
    }

    /// See [`card_info`].
    pub fn card_info(&self, card: &str, brands: &PrefixMapping, issuers: &PrefixMapping) -> Result<CardInfo> {
        card_info(card, brands, issuers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = CardEngine::with_rng(StdRng::seed_from_u64(11));
        let mut b = CardEngine::with_rng(StdRng::seed_from_u64(11));
        assert_eq!(a.issue("4", "1234").unwrap(), b.issue("4", "1234").unwrap());
        assert_eq!(
            a.generate("4111111111111***", true).unwrap(),
            b.generate("4111111111111***", true).unwrap()
        );
    }

    #[test]
    fn test_default_engine_round_trip() {
        let mut engine = CardEngine::default();
        let card = engine.issue("37", "").unwrap();
        assert!(engine.check_validity(&card).unwrap());
        assert!(engine.validate_card(&card).unwrap());
        let digit = engine.compute_check_digit(&card[..15]).unwrap();
        assert_eq!(char::from(b'0' + digit), card.chars().last().unwrap());
    }
}
