//! errors.rs - Custom error types for the cardsmith-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

use cardsmith_luhn::LuhnError;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, CardError>;

/// This enum represents all possible error types in the `cardsmith-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CardError {
    #[error("invalid card format: {0}")]
    InvalidCardFormat(String),

    #[error("invalid wildcard count: found {found}, at most {max} allowed")]
    InvalidWildcardCount { found: usize, max: usize },

    #[error("invalid file format in '{source_name}': {reason}")]
    InvalidFileFormat { source_name: String, reason: String },

    #[error("invalid file format: cannot read mapping file '{}': {source}", path.display())]
    MappingIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("not found: no prefix is registered for '{0}'")]
    NotFound(String),

    #[error("insufficient prefix room: combined prefix has {prefix_len} digits, at most {max} fit")]
    InsufficientPrefixRoom { prefix_len: usize, max: usize },
}

impl CardError {
    /// True for every failure to turn a mapping source into a `PrefixMapping`,
    /// whether the text was malformed or the file could not be read.
    pub fn is_file_format(&self) -> bool {
        matches!(self, Self::InvalidFileFormat { .. } | Self::MappingIo { .. })
    }
}

impl From<LuhnError> for CardError {
    fn from(err: LuhnError) -> Self {
        Self::InvalidCardFormat(err.to_string())
    }
}
