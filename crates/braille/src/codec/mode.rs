//! The indicator state machine shared by both directions.

use crate::cell::Cell;
use crate::table::{self, Indicator, Symbol, SPACE};

/// Interpretation state accumulated from indicator cells.
///
/// | State | Capital | Number | Space | Resolved character |
/// |-------|---------|--------|-------|--------------------|
/// | `Normal` | `CapitalPending` | `Number` | `Normal` | `Normal` |
/// | `Number` | `NumberCapitalPending` | `Number` | `Normal` | `Number` (digit) or `Normal` |
/// | `CapitalPending` | `CapitalPending` | `NumberCapitalPending` | `CapitalPending` | `Normal` |
/// | `NumberCapitalPending` | `NumberCapitalPending` | `NumberCapitalPending` | `CapitalPending` | `Number` (digit) or `Normal` |
///
/// The encoder only ever visits `Normal` and `Number`; capital indicators
/// are emitted per letter and never pend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Cells `a`..`j` read as letters.
    #[default]
    Normal,
    /// Cells `a`..`j` read as digits.
    Number,
    /// The next resolved character is capitalized.
    CapitalPending,
    /// Number mode with a capital indicator still pending.
    NumberCapitalPending,
}

/// What one cell contributes to the decoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// An indicator was consumed; nothing is emitted.
    Indicator(Indicator),
    /// A printable character.
    Char(char),
    /// The cell is not in any table.
    Unknown,
}

impl Mode {
    /// Returns true in either number state.
    #[inline]
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(self, Self::Number | Self::NumberCapitalPending)
    }

    /// Returns true while a capital indicator waits for its character.
    #[inline]
    #[must_use]
    pub const fn is_capital_pending(self) -> bool {
        matches!(self, Self::CapitalPending | Self::NumberCapitalPending)
    }

    /// Applies an indicator cell.
    #[must_use]
    pub const fn with_indicator(self, indicator: Indicator) -> Self {
        match (indicator, self) {
            (Indicator::Capital, Self::Normal | Self::CapitalPending) => Self::CapitalPending,
            (Indicator::Capital, Self::Number | Self::NumberCapitalPending) => {
                Self::NumberCapitalPending
            }
            (Indicator::Number, Self::Normal | Self::Number) => Self::Number,
            (Indicator::Number, Self::CapitalPending | Self::NumberCapitalPending) => {
                Self::NumberCapitalPending
            }
        }
    }

    /// Leaves number mode, keeping any pending capital.
    #[must_use]
    pub const fn leave_number(self) -> Self {
        match self {
            Self::Number => Self::Normal,
            Self::NumberCapitalPending => Self::CapitalPending,
            other => other,
        }
    }

    /// Consumes a pending capital once a character has been resolved.
    #[must_use]
    pub const fn resolve(self) -> Self {
        match self {
            Self::CapitalPending => Self::Normal,
            Self::NumberCapitalPending => Self::Number,
            other => other,
        }
    }

    /// Decoder transition for one cell.
    ///
    /// In number mode the digit table is consulted first; a miss leaves
    /// number mode and the same cell is read again as a letter. A space
    /// leaves number mode but does not consume a pending capital.
    #[must_use]
    pub fn read(self, cell: Cell) -> (Self, Reading) {
        if let Some(indicator) = table::indicator_for(cell) {
            return (self.with_indicator(indicator), Reading::Indicator(indicator));
        }
        if cell == SPACE {
            return (self.leave_number(), Reading::Char(' '));
        }

        let mut mode = self;
        if mode.is_number() {
            if let Some(digit) = table::digit_for(cell) {
                return (mode.resolve(), Reading::Char(digit));
            }
            mode = mode.leave_number();
        }
        if let Some(letter) = table::letter_for(cell) {
            let letter = if mode.is_capital_pending() {
                letter.to_ascii_uppercase()
            } else {
                letter
            };
            return (mode.resolve(), Reading::Char(letter));
        }
        if let Some(mark) = table::punctuation_for(cell) {
            return (mode.resolve(), Reading::Char(mark));
        }
        (mode, Reading::Unknown)
    }

    /// Decoder transition for a window that is not a well-formed cell.
    ///
    /// Behaves like a cell missing from every table.
    #[must_use]
    pub const fn read_malformed(self) -> (Self, Reading) {
        (self.leave_number(), Reading::Unknown)
    }

    /// Encoder transition for one symbol.
    ///
    /// Returns the next mode and the indicator, if any, to emit before the
    /// symbol's own cell.
    #[must_use]
    pub const fn write(self, symbol: Symbol, capital: bool) -> (Self, Option<Indicator>) {
        match symbol {
            Symbol::Digit(_) if self.is_number() => (self, None),
            Symbol::Digit(_) => (self.with_indicator(Indicator::Number), Some(Indicator::Number)),
            _ if capital => (self.leave_number(), Some(Indicator::Capital)),
            _ => (self.leave_number(), None),
        }
    }
}
