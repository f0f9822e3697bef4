//! The 3x3 board: storage, mutation, rendering and parsing.

use crate::rules::{self, Line};
use crate::{Cell, Position, Symbol};
use derive_more::{Display, Error};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Separator drawn between rows.
const RULE: &str = "---+---+---";

/// 3x3 tic-tac-toe board.
///
/// Cells only ever go from empty to occupied; [`Board::reset`] is the one
/// way back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Marks an empty cell with `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::Occupied`] and leaves the board untouched if the
    /// cell already holds a mark.
    #[instrument(skip(self, pos, symbol), fields(position = %pos, symbol = %symbol))]
    pub fn place(&mut self, pos: Position, symbol: Symbol) -> Result<(), PlaceError> {
        if !self.is_empty(pos) {
            debug!("Cell already occupied");
            return Err(PlaceError::Occupied(pos));
        }
        self.cells[pos.to_index()] = Cell::Occupied(symbol);
        Ok(())
    }

    /// Returns all cells as an array, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Positions still open for play.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::iter().filter(|pos| self.is_empty(*pos))
    }

    /// Renders the full board; empty cells show their number (1-9).
    ///
    /// Nothing is formatted until the returned value is displayed.
    pub fn render(&self) -> Rendered<'_> {
        Rendered { board: self }
    }

    /// Renders only the cells of `line`; every other cell is blank.
    pub fn render_highlighted(&self, line: Line) -> Highlighted<'_> {
        Highlighted { board: self, line }
    }

    fn write_grid(f: &mut fmt::Formatter<'_>, token: impl Fn(Position) -> char) -> fmt::Result {
        for (row, chunk) in Position::ALL.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{}", RULE)?;
            }
            write!(f, " {} | {} | {} ", token(chunk[0]), token(chunk[1]), token(chunk[2]))?;
        }
        Ok(())
    }
}

/// Lazy rendering of a whole board.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    board: &'a Board,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Board::write_grid(f, |pos| match self.board.get(pos) {
            Cell::Occupied(symbol) => symbol.as_char(),
            Cell::Empty => char::from(b'0' + pos.number()),
        })
    }
}

/// Lazy rendering of a single winning line.
#[derive(Debug, Clone, Copy)]
pub struct Highlighted<'a> {
    board: &'a Board,
    line: Line,
}

impl fmt::Display for Highlighted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Board::write_grid(f, |pos| match self.board.get(pos) {
            Cell::Occupied(symbol) if self.line.contains(pos) => symbol.as_char(),
            _ => ' ',
        })
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses the text produced by [`Board::render`].
    ///
    /// Rule lines are skipped; each remaining line must hold three
    /// `|`-separated tokens. A digit must match its cell's number and
    /// marks the cell empty; an uppercase letter occupies it.
    #[instrument(skip(s))]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter(|line| !line.trim().chars().all(|c| c == '-' || c == '+'))
            .collect();

        if rows.len() != 3 {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let tokens: Vec<&str> = text.split('|').map(str::trim).collect();
            if tokens.len() != 3 {
                return Err(BoardParseError::ColumnCount {
                    row: row + 1,
                    found: tokens.len(),
                });
            }

            for (col, token) in tokens.into_iter().enumerate() {
                let pos = Position::ALL[row * 3 + col];
                let invalid = || BoardParseError::Token {
                    position: pos,
                    token: token.to_string(),
                };

                let mut chars = token.chars();
                let c = match (chars.next(), chars.next()) {
                    (Some(c), None) => c,
                    _ => return Err(invalid()),
                };

                if c.is_ascii_digit() {
                    if c.to_digit(10) != Some(u32::from(pos.number())) {
                        return Err(invalid());
                    }
                    continue;
                }

                let symbol = Symbol::from_char(c).map_err(|_| invalid())?;
                if symbol.as_char() != c {
                    return Err(invalid());
                }
                board.cells[pos.to_index()] = Cell::Occupied(symbol);
            }
        }

        Ok(board)
    }
}

/// Error returned when placing on an occupied cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
}

/// Error returned when rendered board text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Wrong number of cell rows.
    #[display("Expected 3 rows, found {}", _0)]
    RowCount(#[error(not(source))] usize),
    /// A row without exactly three cells.
    #[display("Row {} has {} cells, expected 3", row, found)]
    ColumnCount {
        /// Row number (1-3).
        row: usize,
        /// Cells found.
        found: usize,
    },
    /// A token that is neither the cell's number nor a symbol.
    #[display("Unexpected '{}' in cell {}", token, position)]
    Token {
        /// Cell the token was read for.
        position: Position,
        /// Offending token.
        token: String,
    },
}
