//! Pure tic-tac-toe logic for two human players.
//!
//! No I/O lives here. The crate provides:
//!
//! - [`Board`]: nine [`Cell`]s with placement, rendering and parsing
//! - [`rules`]: the eight winning [`Line`]s, win and draw detection
//! - [`Player`]: a validated name and [`Symbol`]
//!
//! # Example
//!
//! ```
//! use tictac_board::{rules, Board, Position, Symbol};
//!
//! let x = Symbol::parse("x").unwrap();
//! let mut board = Board::new();
//! for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
//!     board.place(pos, x).unwrap();
//! }
//! assert_eq!(rules::winning_line(&board), Some(rules::LINES[0]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod player;
mod position;
pub mod rules;

pub use board::{Board, BoardParseError, Highlighted, PlaceError, Rendered};
pub use cell::{Cell, Symbol, SymbolError};
pub use player::{validate_name, NameError, Player};
pub use position::{CellChoiceError, Position};
pub use rules::{is_draw, winning_line, Line, LINES};
