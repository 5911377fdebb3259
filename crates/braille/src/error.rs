//! Translation errors.
//!
//! The two directions fail differently. Encoding stops at the first
//! character the table cannot express. Decoding only fails when the input is
//! not a whole number of cells; unknown cells decode to `?` instead.

use thiserror::Error;

/// Error returned by the English-to-Braille encoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A character has no Braille cell in the symbol table.
    #[error("unsupported character {character:?} (U+{code:04X}) at position {position}", code = u32::from(*.character))]
    UnsupportedCharacter {
        /// The character that could not be encoded.
        character: char,
        /// Its 0-based character index in the input.
        position: usize,
    },
}

/// Error returned by the Braille-to-English decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input length is not a multiple of the cell width.
    #[error("braille input of {length} characters ends with a truncated cell ({remainder} of 6 characters)")]
    TruncatedCell {
        /// Input length in characters.
        length: usize,
        /// Characters left over after the last whole cell.
        remainder: usize,
    },
}

/// Error returned by [`translate`](crate::translate()).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// English input could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
    /// Braille input could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
