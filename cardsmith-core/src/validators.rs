// File: cardsmith-core/src/validators.rs
//! Card number validation built on the `cardsmith-luhn` checksum engine.
//!
//! The raw checksum functions only care that their input is made of digits.
//! [`validate_card`] additionally enforces the length bounds of real-world
//! card numbers before running the checksum.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::errors::{CardError, Result};

pub use cardsmith_luhn::is_valid_luhn;

/// Shortest card number accepted by [`validate_card`] and the generator.
pub const MIN_CARD_LENGTH: usize = 13;
/// Longest card number accepted by [`validate_card`] and the generator.
pub const MAX_CARD_LENGTH: usize = 19;

/// Runs the Luhn checksum over a digit string.
///
/// Fails with [`CardError::InvalidCardFormat`] if the input is empty or
/// contains anything other than ASCII digits.
pub fn check_validity(card: &str) -> Result<bool> {
    Ok(cardsmith_luhn::check_validity(card)?)
}

/// Computes the check digit to append to `digits`.
pub fn compute_check_digit(digits: &str) -> Result<u8> {
    Ok(cardsmith_luhn::compute_check_digit(digits)?)
}

/// Validates a full card number: 13 to 19 ASCII digits, then the Luhn checksum.
///
/// # Returns
///
/// `Ok(true)` for a correct number, `Ok(false)` for a well-formed number whose
/// checksum does not match, and [`CardError::InvalidCardFormat`] otherwise.
pub fn validate_card(card: &str) -> Result<bool> {
    if !(MIN_CARD_LENGTH..=MAX_CARD_LENGTH).contains(&card.len()) {
        return Err(CardError::InvalidCardFormat(format!(
            "card number must be {}-{} digits long, got {} bytes",
            MIN_CARD_LENGTH,
            MAX_CARD_LENGTH,
            card.len()
        )));
    }
    let valid = check_validity(card)?;
    debug!("Luhn check for {}-digit card: {}", card.len(), valid);
    Ok(valid)
}
