//! Grade-1 Braille translation for English text.
//!
//! Braille is carried as six-dot cells written in a fixed-width textual form:
//! six characters per cell, `O` for a raised dot and `.` for a flat one, read
//! row by row across the 3x2 grid. Translation runs in either direction and
//! the direction is picked by classifying the input.
//!
//! # Cell Layout
//!
//! ```text
//! Dot Grid:    Text Order:
//! ┌───┬───┐    ┌───┬───┐
//! │ 1 │ 4 │    │ 0 │ 1 │
//! │ 2 │ 5 │    │ 2 │ 3 │
//! │ 3 │ 6 │    │ 4 │ 5 │
//! └───┴───┘    └───┴───┘
//! ```
//!
//! # Indicators
//!
//! | Indicator | Cell | Effect |
//! |-----------|------|--------|
//! | Capital | `.....O` | Next letter is uppercase |
//! | Number | `.O.OOO` | Following `a`..`j` cells are digits `1`..`0` |
//!
//! Digit cells reuse the letter cells `a`..`j`; only the number indicator
//! tells them apart. Number mode lasts until the next non-digit.
//!
//! # Example
//!
//! ```
//! use braille::{decode, encode, translate, InputKind};
//!
//! let cells = encode("Hi 5!").unwrap();
//! assert_eq!(cells.len(), 7 * 6);
//! assert_eq!(decode(&cells).unwrap(), "Hi 5!");
//!
//! let t = translate(".....OO.....").unwrap();
//! assert_eq!(t.source, InputKind::Braille);
//! assert_eq!(t.output, "A");
//! ```
//!
//! # Error Policy
//!
//! Encoding is fail-fast: a character outside the symbol table aborts the
//! call with [`EncodeError::UnsupportedCharacter`]. Decoding is best-effort:
//! an unknown cell becomes `?` and the scan continues; only an input whose
//! length is not a whole number of cells fails, with
//! [`DecodeError::TruncatedCell`].

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod cell;
pub mod classify;
pub mod codec;
pub mod error;
pub mod table;
pub mod translate;

pub use cell::{Cell, CellParseError};
pub use classify::{classify, InputKind};
pub use codec::{decode, decode_cells, encode, encode_cells, Mode};
pub use error::{DecodeError, EncodeError, TranslateError};
pub use table::{Indicator, Symbol, CAPITAL_INDICATOR, NUMBER_INDICATOR, SPACE};
pub use translate::{translate, translate_with, TranslateOptions, Translation};
