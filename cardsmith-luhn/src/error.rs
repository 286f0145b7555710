// cardsmith-luhn/src/error.rs
use core::fmt;

/// Reasons a string cannot be run through the Luhn checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuhnError {
    /// The input contained no characters at all.
    Empty,
    /// A character that is not an ASCII decimal digit was found.
    InvalidDigit {
        /// Byte offset of the offending character.
        position: usize,
        character: char,
    },
}

impl fmt::Display for LuhnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),
            Self::InvalidDigit { position, character } => write!(
                f,
                "invalid character '{}' at position {} (only digits 0-9 are allowed)",
                character.escape_default(),
                position
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LuhnError {}
