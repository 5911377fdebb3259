//! Direction-aware translation: classify, then encode or decode.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{classify, InputKind};
use crate::codec::{decode, encode};
use crate::error::TranslateError;

/// Options for [`translate_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Treat the input as this kind instead of classifying it.
    pub source: Option<InputKind>,
}

impl TranslateOptions {
    /// Options that force the input kind.
    #[must_use]
    pub const fn from_source(source: InputKind) -> Self {
        Self {
            source: Some(source),
        }
    }
}

/// The result of one translation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Translation {
    /// Representation of the input.
    pub source: InputKind,
    /// Representation of the output.
    pub target: InputKind,
    /// The text that was translated.
    pub input: String,
    /// The translated text.
    pub output: String,
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.output)
    }
}

/// Translates `input` in whichever direction its classification implies.
///
/// # Errors
///
/// Returns [`TranslateError::Encode`] when English input holds a character
/// with no cell, and [`TranslateError::Decode`] when Braille input is not a
/// whole number of cells.
///
/// # Example
///
/// ```
/// use braille::{translate, InputKind};
///
/// let t = translate("Hello").unwrap();
/// assert_eq!(t.source, InputKind::English);
/// assert_eq!(translate(&t.output).unwrap().output, "Hello");
/// ```
pub fn translate(input: &str) -> Result<Translation, TranslateError> {
    translate_with(input, &TranslateOptions::default())
}

/// Translates `input`, honoring a forced source kind in `options`.
///
/// # Errors
///
/// Same as [`translate`].
pub fn translate_with(
    input: &str,
    options: &TranslateOptions,
) -> Result<Translation, TranslateError> {
    let source = options.source.unwrap_or_else(|| classify(input));
    debug!(%source, forced = options.source.is_some(), "translating");

    let output = match source {
        InputKind::English => encode(input)?,
        InputKind::Braille => decode(input)?,
    };

    Ok(Translation {
        source,
        target: source.target(),
        input: input.to_owned(),
        output,
    })
}
