//! Player marks and board cells.

use derive_more::{Display, Error};
use tracing::instrument;

/// A player's mark: a single uppercase alphabetic character.
///
/// Symbols are only built through validation, so a `Symbol` never
/// collides with the digits used to number empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct Symbol(char);

impl Symbol {
    /// Validates a single character and uppercases it.
    #[instrument]
    pub fn from_char(c: char) -> Result<Self, SymbolError> {
        if !c.is_alphabetic() {
            return Err(SymbolError::NotAlphabetic(c));
        }

        let mut upper = c.to_uppercase();
        match (upper.next(), upper.next()) {
            (Some(u), None) => Ok(Self(u)),
            _ => Err(SymbolError::NoUppercase(c)),
        }
    }

    /// Parses user input that must be exactly one alphabetic character.
    ///
    /// Surrounding whitespace is ignored.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, SymbolError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(SymbolError::Empty),
            (Some(c), None) => Self::from_char(c),
            (Some(_), Some(_)) => Err(SymbolError::TooLong(trimmed.chars().count())),
        }
    }

    /// Parses a symbol that must differ from `forbidden`.
    ///
    /// Both sides are uppercase after validation, so the comparison is
    /// case-insensitive with respect to the raw input.
    #[instrument]
    pub fn parse_excluding(input: &str, forbidden: Option<Symbol>) -> Result<Self, SymbolError> {
        let symbol = Self::parse(input)?;
        match forbidden {
            Some(taken) if taken == symbol => Err(SymbolError::Taken(taken)),
            _ => Ok(symbol),
        }
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

/// Reasons a symbol was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SymbolError {
    /// Nothing was entered.
    #[display("Please enter a single letter")]
    Empty,
    /// More than one character was entered.
    #[display("Expected a single letter, got {} characters", _0)]
    TooLong(#[error(not(source))] usize),
    /// The character is not a letter.
    #[display("'{}' is not a letter", _0)]
    NotAlphabetic(#[error(not(source))] char),
    /// The letter has no single-character uppercase form.
    #[display("'{}' cannot be used as a symbol", _0)]
    NoUppercase(#[error(not(source))] char),
    /// The other player already uses this symbol.
    #[display("Symbol {} is already taken", _0)]
    Taken(#[error(not(source))] Symbol),
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Unoccupied cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the occupying symbol, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }

    /// Returns true if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}
