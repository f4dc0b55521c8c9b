//! Error types for hueshift.

use thiserror::Error;

/// Result type for hueshift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when decoding color input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The input is not a `#` followed by six characters.
    #[error("invalid hex color {0:?}: expected the form #rrggbb")]
    InvalidHexFormat(String),

    /// The input has a character that is not a hexadecimal digit.
    #[error("invalid hex color {input:?}: character at {index} is not a hex digit")]
    InvalidHexDigit {
        /// The rejected input.
        input: String,
        /// Byte offset of the offending character.
        index: usize,
    },
}
