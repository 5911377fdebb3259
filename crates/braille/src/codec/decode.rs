//! Braille to English.

use tracing::{debug, trace, warn};

use super::{Mode, Reading, UNKNOWN};
use crate::cell::{Cell, DOTS};
use crate::error::DecodeError;

/// Decodes `O`/`.` text into English.
///
/// The input is read in six-character windows. Windows that are not a known
/// cell decode to `?` and the scan continues. Indicators still pending at the
/// end of the input are dropped.
///
/// # Errors
///
/// Returns [`DecodeError::TruncatedCell`] when the length in characters is not
/// a multiple of six.
///
/// # Example
///
/// ```
/// use braille::decode;
///
/// assert_eq!(decode(".....OO.....").unwrap(), "A");
/// assert_eq!(decode(".O.OOOO.....").unwrap(), "1");
/// assert!(decode("O....").is_err());
/// ```
pub fn decode(text: &str) -> Result<String, DecodeError> {
    let chars: Vec<char> = text.chars().collect();
    let remainder = chars.len() % DOTS;
    if remainder != 0 {
        return Err(DecodeError::TruncatedCell {
            length: chars.len(),
            remainder,
        });
    }

    let mut out = String::with_capacity(chars.len() / DOTS);
    let mut mode = Mode::Normal;
    for (index, window) in chars.chunks_exact(DOTS).enumerate() {
        let (next, reading) = match Cell::from_chars(window) {
            Ok(cell) => mode.read(cell),
            Err(_) => mode.read_malformed(),
        };
        emit(&mut out, index, reading);
        mode = next;
    }

    debug!(cells = chars.len() / DOTS, chars = out.chars().count(), "decoded braille");
    Ok(out)
}

/// Decodes an already parsed cell sequence. Never fails.
///
/// # Example
///
/// ```
/// use braille::{decode_cells, encode_cells};
///
/// let cells = encode_cells("Room 101").unwrap();
/// assert_eq!(decode_cells(&cells), "Room 101");
/// ```
#[must_use]
pub fn decode_cells(cells: &[Cell]) -> String {
    let mut out = String::with_capacity(cells.len());
    let mut mode = Mode::Normal;
    for (index, &cell) in cells.iter().enumerate() {
        let (next, reading) = mode.read(cell);
        emit(&mut out, index, reading);
        mode = next;
    }
    out
}

fn emit(out: &mut String, index: usize, reading: Reading) {
    match reading {
        Reading::Char(c) => out.push(c),
        Reading::Indicator(indicator) => trace!(cell = index, ?indicator, "indicator"),
        Reading::Unknown => {
            warn!(cell = index, "unrecognized braille cell");
            out.push(UNKNOWN);
        }
    }
}
