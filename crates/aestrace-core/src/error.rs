//! Library error and result types.

use std::fmt;

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the core can produce.
///
/// The round transforms themselves are total over well-formed inputs, so
/// every variant here concerns input validation before any cipher work
/// begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A character outside `[0-9a-fA-F]` appeared in hex input. Bad
    /// characters are rejected, never coerced to a default nibble.
    InvalidHexCharacter {
        /// Zero-based position of the offending character.
        index: usize,
        /// The character that was found there.
        character: char,
    },
    /// Hex input did not contain exactly the expected number of characters.
    InvalidHexLength {
        /// Number of characters the decoder was asked to consume.
        expected: usize,
        /// Number of characters actually present.
        found: usize,
    },
    /// A key buffer was not exactly 16 bytes.
    InvalidKeyLength(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidHexCharacter { index, character } => {
                write!(f, "invalid hex character {character:?} at position {index}")
            }
            Error::InvalidHexLength { expected, found } => {
                write!(f, "expected {expected} hex characters, found {found}")
            }
            Error::InvalidKeyLength(len) => {
                write!(f, "AES-128 key must be 16 bytes, got {len}")
            }
        }
    }
}

impl std::error::Error for Error {}
