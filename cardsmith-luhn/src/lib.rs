// cardsmith-luhn/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod checksum;
pub mod error;

pub use checksum::{check_validity, compute_check_digit, is_valid_luhn};
pub use error::LuhnError;

/// A single decimal digit in the range `0..=9`.
pub type Digit = u8;
