//! The Grade-1 symbol table and its inverse lookups.
//!
//! Forward entries map characters to cells. The inverse tables are computed
//! at compile time and indexed by the cell's 6-bit mask, so every lookup is a
//! single array access into read-only memory.
//!
//! # Tables Provided
//!
//! - **Letters**: `a`..`z`
//! - **Digits**: `1`..`9`, `0`, sharing the cells of `a`..`j`
//! - **Punctuation**: `. , ? ! : ; - / ( )`
//! - **Indicators**: capital and number
//!
//! Because digit cells coincide with letter cells, the digit and letter
//! inverses are separate tables and the caller picks one by mode.
//!
//! # Example
//!
//! ```
//! use braille::table::{digit_for, letter_for, lookup, Symbol};
//!
//! let (symbol, cell) = lookup('1').unwrap();
//! assert_eq!(symbol, Symbol::Digit('1'));
//! assert_eq!(letter_for(cell), Some('a'));
//! assert_eq!(digit_for(cell), Some('1'));
//! ```

use crate::cell::Cell;

/// Marks the next letter as uppercase.
pub const CAPITAL_INDICATOR: Cell = Cell::from_pattern(b".....O");

/// Starts a run of digits.
pub const NUMBER_INDICATOR: Cell = Cell::from_pattern(b".O.OOO");

/// The space cell.
pub const SPACE: Cell = Cell::BLANK;

/// Letter cells, `a` through `z`.
pub const LETTERS: [Cell; 26] = [
    Cell::from_pattern(b"O....."), // a
    Cell::from_pattern(b"O.O..."), // b
    Cell::from_pattern(b"OO...."), // c
    Cell::from_pattern(b"OO.O.."), // d
    Cell::from_pattern(b"O..O.."), // e
    Cell::from_pattern(b"OOO..."), // f
    Cell::from_pattern(b"OOOO.."), // g
    Cell::from_pattern(b"O.OO.."), // h
    Cell::from_pattern(b".OO..."), // i
    Cell::from_pattern(b".OOO.."), // j
    Cell::from_pattern(b"O...O."), // k
    Cell::from_pattern(b"O.O.O."), // l
    Cell::from_pattern(b"OO..O."), // m
    Cell::from_pattern(b"OO.OO."), // n
    Cell::from_pattern(b"O..OO."), // o
    Cell::from_pattern(b"OOO.O."), // p
    Cell::from_pattern(b"OOOOO."), // q
    Cell::from_pattern(b"O.OOO."), // r
    Cell::from_pattern(b".OO.O."), // s
    Cell::from_pattern(b".OOOO."), // t
    Cell::from_pattern(b"O...OO"), // u
    Cell::from_pattern(b"O.O.OO"), // v
    Cell::from_pattern(b".OOO.O"), // w
    Cell::from_pattern(b"OO..OO"), // x
    Cell::from_pattern(b"OO.OOO"), // y
    Cell::from_pattern(b"O..OOO"), // z
];

/// Digits in cell order. `DIGITS[i]` shares its cell with `LETTERS[i]`.
pub const DIGITS: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

/// Supported punctuation marks and their cells.
pub const PUNCTUATION: [(char, Cell); 10] = [
    ('.', Cell::from_pattern(b"..OO.O")),
    (',', Cell::from_pattern(b"..O...")),
    ('?', Cell::from_pattern(b"..O.OO")),
    ('!', Cell::from_pattern(b"..OOO.")),
    (':', Cell::from_pattern(b"..OO..")),
    (';', Cell::from_pattern(b"..O.O.")),
    ('-', Cell::from_pattern(b"....OO")),
    ('/', Cell::from_pattern(b".O..O.")),
    ('(', Cell::from_pattern(b"O.O..O")),
    (')', Cell::from_pattern(b".O.OO.")),
];

/// Number of distinct cells (2^6).
pub const CELL_CARDINALITY: usize = 1 << crate::cell::DOTS;

/// A reserved cell that changes how following cells are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// The next letter is uppercase.
    Capital,
    /// Following cells are digits until a non-digit.
    Number,
}

impl Indicator {
    /// Returns the cell reserved for this indicator.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Self::Capital => CAPITAL_INDICATOR,
            Self::Number => NUMBER_INDICATOR,
        }
    }
}

/// A printable entry of the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A lowercase letter.
    Letter(char),
    /// A decimal digit.
    Digit(char),
    /// The space character.
    Space,
    /// A supported punctuation mark.
    Punctuation(char),
}

impl Symbol {
    /// Returns the character this symbol prints as.
    #[must_use]
    pub const fn character(self) -> char {
        match self {
            Self::Letter(c) | Self::Digit(c) | Self::Punctuation(c) => c,
            Self::Space => ' ',
        }
    }
}

/// Looks up a character in the forward table.
///
/// Only lowercase letters are entries; uppercase letters are written as the
/// capital indicator plus the lowercase cell, which is the encoder's job.
#[must_use]
pub fn lookup(c: char) -> Option<(Symbol, Cell)> {
    match c {
        'a'..='z' => Some((Symbol::Letter(c), LETTERS[(c as u8 - b'a') as usize])),
        '1'..='9' => Some((Symbol::Digit(c), LETTERS[(c as u8 - b'1') as usize])),
        '0' => Some((Symbol::Digit(c), LETTERS[9])),
        ' ' => Some((Symbol::Space, SPACE)),
        _ => PUNCTUATION
            .iter()
            .find(|(mark, _)| *mark == c)
            .map(|&(mark, cell)| (Symbol::Punctuation(mark), cell)),
    }
}

/// Iterates over every printable forward entry.
pub fn entries() -> impl Iterator<Item = (Symbol, Cell)> {
    let letters = LETTERS
        .iter()
        .zip('a'..='z')
        .map(|(&cell, c)| (Symbol::Letter(c), cell));
    let digits = DIGITS
        .iter()
        .zip(LETTERS.iter())
        .map(|(&d, &cell)| (Symbol::Digit(d), cell));
    let punctuation = PUNCTUATION
        .iter()
        .map(|&(mark, cell)| (Symbol::Punctuation(mark), cell));
    letters
        .chain(digits)
        .chain(core::iter::once((Symbol::Space, SPACE)))
        .chain(punctuation)
}

// ============================================================================
// Inverse tables
// ============================================================================

/// `LETTER_OF[cell]` is the lowercase letter written with that cell.
pub static LETTER_OF: [Option<char>; CELL_CARDINALITY] = {
    let mut table = [None; CELL_CARDINALITY];
    let mut i = 0;
    while i < LETTERS.len() {
        table[LETTERS[i].mask() as usize] = Some((b'a' + i as u8) as char);
        i += 1;
    }
    table
};

/// `DIGIT_OF[cell]` is the digit written with that cell in number mode.
pub static DIGIT_OF: [Option<char>; CELL_CARDINALITY] = {
    let mut table = [None; CELL_CARDINALITY];
    let mut i = 0;
    while i < DIGITS.len() {
        table[LETTERS[i].mask() as usize] = Some(DIGITS[i]);
        i += 1;
    }
    table
};

/// `PUNCTUATION_OF[cell]` is the punctuation mark written with that cell.
pub static PUNCTUATION_OF: [Option<char>; CELL_CARDINALITY] = {
    let mut table = [None; CELL_CARDINALITY];
    let mut i = 0;
    while i < PUNCTUATION.len() {
        table[PUNCTUATION[i].1.mask() as usize] = Some(PUNCTUATION[i].0);
        i += 1;
    }
    table
};

/// `INDICATOR_OF[cell]` is the indicator reserved to that cell.
pub static INDICATOR_OF: [Option<Indicator>; CELL_CARDINALITY] = {
    let mut table = [None; CELL_CARDINALITY];
    table[CAPITAL_INDICATOR.mask() as usize] = Some(Indicator::Capital);
    table[NUMBER_INDICATOR.mask() as usize] = Some(Indicator::Number);
    table
};

/// O(1) letter lookup.
#[inline]
#[must_use]
pub fn letter_for(cell: Cell) -> Option<char> {
    LETTER_OF[cell.mask() as usize]
}

/// O(1) digit lookup.
#[inline]
#[must_use]
pub fn digit_for(cell: Cell) -> Option<char> {
    DIGIT_OF[cell.mask() as usize]
}

/// O(1) punctuation lookup.
#[inline]
#[must_use]
pub fn punctuation_for(cell: Cell) -> Option<char> {
    PUNCTUATION_OF[cell.mask() as usize]
}

/// O(1) indicator lookup.
#[inline]
#[must_use]
pub fn indicator_for(cell: Cell) -> Option<Indicator> {
    INDICATOR_OF[cell.mask() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_indicator_cells() {
        assert_eq!(CAPITAL_INDICATOR.to_string(), ".....O");
        assert_eq!(NUMBER_INDICATOR.to_string(), ".O.OOO");
        assert_eq!(SPACE.to_string(), "......");
        assert_eq!(Indicator::Capital.cell(), CAPITAL_INDICATOR);
        assert_eq!(Indicator::Number.cell(), NUMBER_INDICATOR);
    }

    #[test]
    fn test_entry_counts() {
        let all: Vec<_> = entries().collect();
        assert_eq!(all.len(), 26 + 10 + 1 + 10);
    }

    #[test]
    fn test_non_digit_cells_are_distinct() {
        let mut seen = HashSet::new();
        for (symbol, cell) in entries() {
            if matches!(symbol, Symbol::Digit(_)) {
                continue;
            }
            assert!(seen.insert(cell), "{symbol:?} reuses {cell}");
        }
        assert!(seen.insert(CAPITAL_INDICATOR));
        assert!(seen.insert(NUMBER_INDICATOR));
    }

    #[test]
    fn test_digits_share_letters_a_to_j() {
        for (digit, letter) in "1234567890".chars().zip("abcdefghij".chars()) {
            let (_, d) = lookup(digit).unwrap();
            let (_, l) = lookup(letter).unwrap();
            assert_eq!(d, l, "{digit} and {letter}");
        }
        let digits: HashSet<_> = DIGITS.iter().map(|&d| lookup(d).unwrap().1).collect();
        assert_eq!(digits.len(), 10);
    }

    #[test]
    fn test_inverse_tables_agree_with_forward() {
        for (symbol, cell) in entries() {
            match symbol {
                Symbol::Letter(c) => assert_eq!(letter_for(cell), Some(c)),
                Symbol::Digit(c) => assert_eq!(digit_for(cell), Some(c)),
                Symbol::Punctuation(c) => assert_eq!(punctuation_for(cell), Some(c)),
                Symbol::Space => assert_eq!(cell, Cell::BLANK),
            }
        }
    }

    #[test]
    fn test_indicators_are_not_printable() {
        for cell in [CAPITAL_INDICATOR, NUMBER_INDICATOR] {
            assert_eq!(letter_for(cell), None);
            assert_eq!(digit_for(cell), None);
            assert_eq!(punctuation_for(cell), None);
        }
        assert_eq!(indicator_for(CAPITAL_INDICATOR), Some(Indicator::Capital));
        assert_eq!(indicator_for(NUMBER_INDICATOR), Some(Indicator::Number));
        assert_eq!(indicator_for(SPACE), None);
    }

    #[test]
    fn test_lookup_rejects_unsupported() {
        assert_eq!(lookup('A'), None);
        assert_eq!(lookup('@'), None);
        assert_eq!(lookup('é'), None);
        assert_eq!(lookup('\n'), None);
    }

    #[test]
    fn test_symbol_character() {
        assert_eq!(Symbol::Space.character(), ' ');
        assert_eq!(Symbol::Punctuation('!').character(), '!');
        assert_eq!(lookup('q').unwrap().0.character(), 'q');
    }
}
