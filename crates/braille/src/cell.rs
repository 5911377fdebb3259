//! Single six-dot Braille cell.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Number of dots in a cell, and characters in its textual form.
pub const DOTS: usize = 6;

/// Character marking a raised dot in the textual form.
pub const RAISED: char = 'O';

/// Character marking a flat dot in the textual form.
pub const FLAT: char = '.';

/// Dot number carried by each position of the textual form.
///
/// The text reads the grid row by row: dots 1 and 4, then 2 and 5, then 3
/// and 6.
pub const TEXT_ORDER: [u8; DOTS] = [1, 4, 2, 5, 3, 6];

/// A single six-dot Braille cell.
///
/// Stored as a 6-bit mask where bit `i` is dot `i + 1`. The canonical textual
/// form is six characters over `{O, .}` in [`TEXT_ORDER`].
///
/// ```text
/// Dot Grid:    Bit Mapping:
/// ┌───┬───┐    ┌───┬───┐
/// │ 1 │ 4 │    │ 0 │ 3 │
/// │ 2 │ 5 │    │ 1 │ 4 │
/// │ 3 │ 6 │    │ 2 │ 5 │
/// └───┴───┘    └───┴───┘
/// ```
///
/// # Example
///
/// ```
/// use braille::Cell;
///
/// let b = Cell::parse("O.O...").unwrap();
/// assert!(b.is_raised(1));
/// assert!(b.is_raised(2));
/// assert_eq!(b.dot_count(), 2);
/// assert_eq!(b.to_string(), "O.O...");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Cell(u8);

/// Error when parsing a [`Cell`] from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellParseError {
    /// The text is not exactly six characters long.
    #[error("a cell is 6 characters, got {length}")]
    WrongLength {
        /// Number of characters supplied.
        length: usize,
    },
    /// A character other than `O` or `.` appeared.
    #[error("invalid dot {character:?} at position {position}, expected 'O' or '.'")]
    InvalidDot {
        /// The offending character.
        character: char,
        /// Position within the cell text.
        position: usize,
    },
}

impl Cell {
    /// Mask of the six meaningful bits.
    pub const MASK: u8 = 0b11_1111;

    /// The blank cell (no dots raised). Encodes a space.
    pub const BLANK: Self = Self(0);

    /// The full cell (all six dots raised).
    pub const FULL: Self = Self(Self::MASK);

    /// Creates a cell from a dot mask. Bits above dot 6 are discarded.
    ///
    /// ```
    /// use braille::Cell;
    ///
    /// assert_eq!(Cell::new(0b0000_0001).to_string(), "O.....");
    /// assert_eq!(Cell::new(0xFF), Cell::FULL);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(mask: u8) -> Self {
        Self(mask & Self::MASK)
    }

    /// Builds a cell from a textual pattern at compile time.
    ///
    /// Any byte other than `b'O'` counts as a flat dot; use [`Cell::parse`]
    /// for untrusted text.
    #[must_use]
    pub const fn from_pattern(pattern: &[u8; DOTS]) -> Self {
        let mut mask = 0u8;
        let mut i = 0;
        while i < DOTS {
            if pattern[i] == b'O' {
                mask |= 1 << (TEXT_ORDER[i] - 1);
            }
            i += 1;
        }
        Self(mask)
    }

    /// Parses a cell from its six-character textual form.
    ///
    /// # Errors
    ///
    /// Returns [`CellParseError::WrongLength`] unless `text` is exactly six
    /// characters, and [`CellParseError::InvalidDot`] for any character other
    /// than `O` or `.`.
    pub fn parse(text: &str) -> Result<Self, CellParseError> {
        let chars: Vec<char> = text.chars().collect();
        Self::from_chars(&chars)
    }

    /// Parses a cell from a window of characters.
    ///
    /// # Errors
    ///
    /// Same as [`Cell::parse`].
    pub fn from_chars(window: &[char]) -> Result<Self, CellParseError> {
        if window.len() != DOTS {
            return Err(CellParseError::WrongLength {
                length: window.len(),
            });
        }
        let mut mask = 0u8;
        for (position, (&character, &dot)) in
            window.iter().zip(TEXT_ORDER.iter()).enumerate()
        {
            match character {
                RAISED => mask |= 1 << (dot - 1),
                FLAT => {}
                _ => return Err(CellParseError::InvalidDot { character, position }),
            }
        }
        Ok(Self(mask))
    }

    /// Returns the raw dot mask.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u8 {
        self.0
    }

    /// Returns true if `dot` (1..=6) is raised. Out-of-range dots are flat.
    #[inline]
    #[must_use]
    pub const fn is_raised(self, dot: u8) -> bool {
        dot >= 1 && (dot as usize) <= DOTS && self.0 & (1 << (dot - 1)) != 0
    }

    /// Returns the number of raised dots.
    #[inline]
    #[must_use]
    pub const fn dot_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates over the raised dot numbers in ascending order.
    ///
    /// ```
    /// use braille::Cell;
    ///
    /// let number = Cell::parse(".O.OOO").unwrap();
    /// assert_eq!(number.dots().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    /// ```
    pub fn dots(self) -> impl Iterator<Item = u8> {
        (1..=DOTS as u8).filter(move |&dot| self.is_raised(dot))
    }

    /// Returns the textual form as a character array.
    #[must_use]
    pub fn pattern(self) -> [char; DOTS] {
        TEXT_ORDER.map(|dot| if self.is_raised(dot) { RAISED } else { FLAT })
    }
}

impl FromStr for Cell {
    type Err = CellParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({self})")
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.pattern() {
            fmt::Write::write_char(f, c)?;
        }
        Ok(())
    }
}
