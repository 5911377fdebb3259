//! English to Braille.

use tracing::{debug, trace};

use super::Mode;
use crate::cell::{Cell, DOTS};
use crate::error::EncodeError;
use crate::table;

/// Encodes English text into a sequence of cells.
///
/// Uppercase ASCII letters are written as the capital indicator followed by
/// the lowercase cell. A run of digits is opened by one number indicator and
/// closed implicitly by the next non-digit.
///
/// # Errors
///
/// Returns [`EncodeError::UnsupportedCharacter`] for the first character with
/// no cell in the symbol table. Nothing is returned for the rest of the input.
///
/// # Example
///
/// ```
/// use braille::{encode_cells, CAPITAL_INDICATOR};
///
/// let cells = encode_cells("Ab").unwrap();
/// assert_eq!(cells.len(), 3);
/// assert_eq!(cells[0], CAPITAL_INDICATOR);
/// ```
pub fn encode_cells(text: &str) -> Result<Vec<Cell>, EncodeError> {
    let mut cells = Vec::with_capacity(text.len() + text.len() / 4);
    let mut mode = Mode::Normal;

    for (position, character) in text.chars().enumerate() {
        let capital = character.is_ascii_uppercase();
        let (symbol, cell) = table::lookup(character.to_ascii_lowercase()).ok_or(
            EncodeError::UnsupportedCharacter {
                character,
                position,
            },
        )?;

        let (next, indicator) = mode.write(symbol, capital);
        if let Some(indicator) = indicator {
            trace!(position, ?indicator, "emitting indicator");
            cells.push(indicator.cell());
        }
        cells.push(cell);
        mode = next;
    }

    debug!(chars = text.chars().count(), cells = cells.len(), "encoded english text");
    Ok(cells)
}

/// Encodes English text into the `O`/`.` textual form, six characters per
/// cell with no separators.
///
/// # Errors
///
/// Same as [`encode_cells`].
///
/// # Example
///
/// ```
/// use braille::encode;
///
/// assert_eq!(encode("a b").unwrap(), "O...........O.O...");
/// assert_eq!(encode("A").unwrap(), ".....OO.....");
/// assert!(encode("a@b").is_err());
/// ```
pub fn encode(text: &str) -> Result<String, EncodeError> {
    let cells = encode_cells(text)?;
    let mut out = String::with_capacity(cells.len() * DOTS);
    for cell in cells {
        out.extend(cell.pattern());
    }
    Ok(out)
}
