// cardsmith-luhn/src/checksum.rs
//! Luhn (mod 10) checksum validation and check-digit synthesis.
//!
//! Both operations walk the digits right-to-left, doubling every second
//! digit and folding doubled values above 9 back into a single digit. They
//! differ only in which position is doubled first: validation treats the
//! rightmost digit as the check digit (never doubled), while check-digit
//! synthesis doubles the rightmost existing digit because the digit about to
//! be appended will take the undoubled slot.

use crate::error::LuhnError;
use crate::Digit;

/// Validates a digit string using the Luhn algorithm.
///
/// # Arguments
///
/// * `card` - A string slice containing only ASCII digits, check digit last.
///
/// # Returns
///
/// `Ok(true)` if the weighted digit sum is divisible by 10, `Ok(false)` if not,
/// and an error if the input is empty or contains a non-digit character.
pub fn check_validity(card: &str) -> Result<bool, LuhnError> {
    if card.is_empty() {
        return Err(LuhnError::Empty);
    }
    Ok(weighted_sum(card, false)? == 0)
}

/// Computes the digit that makes `digits ++ check_digit` pass [`check_validity`].
///
/// An empty input yields `0`, since `"0"` on its own is Luhn-valid.
pub fn compute_check_digit(digits: &str) -> Result<Digit, LuhnError> {
    let sum = weighted_sum(digits, true)?;
    Ok((10 - sum) % 10)
}

/// Boolean shorthand for [`check_validity`]; malformed input is simply invalid.
pub fn is_valid_luhn(num_str: &str) -> bool {
    check_validity(num_str).unwrap_or(false)
}

/// Returns the Luhn sum reduced mod 10.
fn weighted_sum(digits: &str, double_first: bool) -> Result<Digit, LuhnError> {
    let mut sum: Digit = 0;
    let mut double = double_first;

    for (position, character) in digits.char_indices().rev() {
        let Some(value) = character.to_digit(10) else {
            return Err(LuhnError::InvalidDigit { position, character });
        };
        let mut digit = value as Digit;

        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum = (sum + digit) % 10;
        double = !double;
    }

    Ok(sum)
}
