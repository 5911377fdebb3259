//! Input classification: is this text English or Braille?

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::{FLAT, RAISED};

/// The representation a piece of text is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InputKind {
    /// Plain English text.
    English,
    /// Braille cells in `O`/`.` textual form.
    Braille,
}

impl InputKind {
    /// Returns the representation a translation of this kind produces.
    #[must_use]
    pub const fn target(self) -> Self {
        match self {
            Self::English => Self::Braille,
            Self::Braille => Self::English,
        }
    }

    /// Lowercase name, as used on the command line and in JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Braille => "braille",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies `input` as Braille when every non-space character is `O` or
/// `.`, and as English otherwise.
///
/// Text that is empty or only spaces has nothing to contradict the Braille
/// alphabet and classifies as [`InputKind::Braille`].
///
/// # Example
///
/// ```
/// use braille::{classify, InputKind};
///
/// assert_eq!(classify("O.....O.O..."), InputKind::Braille);
/// assert_eq!(classify("Hello"), InputKind::English);
/// assert_eq!(classify("   "), InputKind::Braille);
/// ```
#[must_use]
pub fn classify(input: &str) -> InputKind {
    let braille = input
        .chars()
        .filter(|&c| c != ' ')
        .all(|c| c == RAISED || c == FLAT);
    if braille {
        InputKind::Braille
    } else {
        InputKind::English
    }
}
