// cardsmith-core/src/classifier.rs
//! Prefix-based classification of card numbers into brands and issuers.

use crate::errors::{CardError, Result};
use crate::mapping::PrefixMapping;

/// Label reported for a card that matches no configured prefix.
pub const UNKNOWN_LABEL: &str = "-";

/// Returns the label of the most specific prefix that `card` starts with,
/// or [`UNKNOWN_LABEL`] when nothing matches.
///
/// The longest matching prefix wins; among equally long prefixes the
/// lexicographically smallest one is chosen, so the result never depends on
/// mapping order.
pub fn classify_by_prefix(card: &str, mapping: &PrefixMapping) -> String {
    best_match(card, mapping)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

/// The `(prefix, label)` entry selected by [`classify_by_prefix`], if any.
pub fn best_match<'a>(card: &str, mapping: &'a PrefixMapping) -> Option<(&'a str, &'a str)> {
    mapping
        .iter()
        .filter(|(prefix, _)| card.starts_with(*prefix))
        .min_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)))
}

/// Finds the prefix of the first entry, in insertion order, labelled `label`.
pub fn resolve_prefix_for_label(label: &str, mapping: &PrefixMapping) -> Result<String> {
    mapping
        .iter()
        .find(|(_, l)| *l == label)
        .map(|(prefix, _)| prefix.to_string())
        .ok_or_else(|| CardError::NotFound(label.to_string()))
}
