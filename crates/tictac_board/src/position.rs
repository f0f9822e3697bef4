//! The nine addressable cells of the board.

use derive_more::{Display, Error};
use tracing::instrument;

/// A position on the board, row-major.
///
/// Internally indexed 0-8; players refer to cells by number 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum Position {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The number players type for this cell (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Creates position from the number players type (1-9).
    pub fn from_number(number: u32) -> Option<Self> {
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(Self::from_index)
    }

    /// Parses a player's cell choice.
    ///
    /// Accepts only ASCII digits (surrounding whitespace ignored) naming
    /// a cell 1-9. Occupancy is the caller's concern.
    #[instrument]
    pub fn parse_choice(input: &str) -> Result<Self, CellChoiceError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(CellChoiceError::NotANumber(trimmed.to_string()));
        }

        // All digits, so the only possible parse failure is overflow.
        let number = trimmed
            .parse::<u32>()
            .map_err(|_| CellChoiceError::OutOfRange(trimmed.to_string()))?;

        Self::from_number(number).ok_or_else(|| CellChoiceError::OutOfRange(trimmed.to_string()))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Reasons a cell choice was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CellChoiceError {
    /// Input was not a whole number.
    #[display("'{}' is not a number, enter a cell from 1 to 9", _0)]
    NotANumber(#[error(not(source))] String),
    /// Number outside 1-9.
    #[display("{} is not on the board, enter a cell from 1 to 9", _0)]
    OutOfRange(#[error(not(source))] String),
    /// The cell already holds a mark.
    #[display("Cell {} is already taken, choose another", _0)]
    Occupied(#[error(not(source))] Position),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (index, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_iter_matches_row_major_order() {
        use strum::IntoEnumIterator;
        let iterated: Vec<Position> = Position::iter().collect();
        assert_eq!(iterated, Position::ALL.to_vec());
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(Position::parse_choice("1"), Ok(Position::TopLeft));
        assert_eq!(Position::parse_choice(" 5\n"), Ok(Position::Center));
        assert_eq!(Position::parse_choice("9"), Ok(Position::BottomRight));
    }

    #[test]
    fn test_parse_choice_rejects() {
        assert!(matches!(
            Position::parse_choice("0"),
            Err(CellChoiceError::OutOfRange(_))
        ));
        assert!(matches!(
            Position::parse_choice("10"),
            Err(CellChoiceError::OutOfRange(_))
        ));
        assert!(matches!(
            Position::parse_choice("99999999999999999999"),
            Err(CellChoiceError::OutOfRange(_))
        ));
        assert!(matches!(
            Position::parse_choice("abc"),
            Err(CellChoiceError::NotANumber(_))
        ));
        assert!(matches!(
            Position::parse_choice("-3"),
            Err(CellChoiceError::NotANumber(_))
        ));
        assert!(matches!(
            Position::parse_choice(""),
            Err(CellChoiceError::NotANumber(_))
        ));
    }
}
