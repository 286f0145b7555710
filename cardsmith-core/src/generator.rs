// cardsmith-core/src/generator.rs
//! Wildcard expansion of card patterns.
//!
//! A pattern is a card number whose last few digits may be unknown, written
//! as `*`. Expansion substitutes every combination of digits into those slots,
//! keeps the candidates that pass the Luhn checksum and returns them sorted.
//!
//! Candidates are built in parallel: each rayon task owns exactly one slot of
//! a pre-sized buffer, indexed by the number it substitutes, so no locking is
//! involved. Sorting happens once after every slot is filled.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use rand::Rng;
use rayon::prelude::*;

use crate::errors::{CardError, Result};
use crate::validators::{self, MAX_CARD_LENGTH, MIN_CARD_LENGTH};

/// Marker for an unknown digit in a card pattern.
pub const WILDCARD: char = '*';

/// Upper bound on wildcards in a pattern; they may only occupy this many trailing positions.
pub const MAX_WILDCARDS: usize = 4;

/// Expands `pattern` into Luhn-valid card numbers.
///
/// * With no wildcards the pattern itself is returned as the only element,
///   whether or not it passes the checksum.
/// * With `pick_one` set, a single candidate is drawn uniformly from the full
///   unfiltered candidate set using `rng`; it may fail the checksum.
/// * Otherwise the valid candidates are returned in ascending order. An empty
///   result is not an error.
pub fn generate<R: Rng + ?Sized>(pattern: &str, pick_one: bool, rng: &mut R) -> Result<Vec<String>> {
    validate_pattern(pattern)?;

    let wildcards = pattern.chars().filter(|&c| c == WILDCARD).count();
    ensure_wildcard_budget(wildcards)?;

    let mut candidates = expand_candidates(pattern, wildcards);
    debug!("Pattern with {} wildcard(s) expanded to {} candidates", wildcards, candidates.len());

    if pick_one {
        let index = rng.random_range(0..candidates.len());
        let picked = candidates.swap_remove(index);
        debug!("Picked candidate #{} of the unfiltered set", index);
        return Ok(vec![picked]);
    }

    if wildcards == 0 {
        return Ok(candidates);
    }

    let mut valid = Vec::with_capacity(candidates.len() / 10 + 1);
    for candidate in candidates {
        if validators::check_validity(&candidate)? {
            valid.push(candidate);
        }
    }
    debug!("{} candidates passed the Luhn check", valid.len());
    Ok(valid)
}

/// Checks length, character set and wildcard placement of a pattern.
pub fn validate_pattern(pattern: &str) -> Result<()> {
    if !(MIN_CARD_LENGTH..=MAX_CARD_LENGTH).contains(&pattern.len()) {
        return Err(CardError::InvalidCardFormat(format!(
            "pattern must be {}-{} characters long, got {} bytes",
            MIN_CARD_LENGTH,
            MAX_CARD_LENGTH,
            pattern.len()
        )));
    }

    let wildcard_zone = pattern.len() - MAX_WILDCARDS;
    for (position, c) in pattern.char_indices() {
        match c {
            WILDCARD if position < wildcard_zone => {
                return Err(CardError::InvalidCardFormat(format!(
                    "wildcard at position {} is outside the last {} positions",
                    position, MAX_WILDCARDS
                )));
            }
            WILDCARD => {}
            c if c.is_ascii_digit() => {}
            other => {
                return Err(CardError::InvalidCardFormat(format!(
                    "invalid character '{}' at position {}",
                    other.escape_default(),
                    position
                )));
            }
        }
    }
    Ok(())
}

fn ensure_wildcard_budget(found: usize) -> Result<()> {
    if found > MAX_WILDCARDS {
        return Err(CardError::InvalidWildcardCount { found, max: MAX_WILDCARDS });
    }
    Ok(())
}

/// Builds all `10^wildcards` concrete strings for a validated pattern, sorted.
fn expand_candidates(pattern: &str, wildcards: usize) -> Vec<String> {
    if wildcards == 0 {
        return vec![pattern.to_string()];
    }

    let template: Vec<char> = pattern.chars().collect();
    let slots: Vec<usize> = template
        .iter()
        .enumerate()
        .filter(|(_, &c)| c == WILDCARD)
        .map(|(i, _)| i)
        .collect();

    let total = 10usize.pow(wildcards as u32);
    let mut candidates = vec![String::new(); total];
    candidates
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, slot)| *slot = substitute(&template, &slots, index));

    candidates.sort_unstable();
    candidates
}

/// Writes `index`, zero-padded to `slots.len()` digits, into the wildcard slots.
fn substitute(template: &[char], slots: &[usize], index: usize) -> String {
    let mut digits = template.to_vec();
    let mut remaining = index;
    for &slot in slots.iter().rev() {
        digits[slot] = char::from(b'0' + (remaining % 10) as u8);
        remaining /= 10;
    }
    digits.into_iter().collect()
}
