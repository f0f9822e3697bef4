//! Two-player console tic-tac-toe.
//!
//! Two people share a terminal, pick names and one-letter symbols, and
//! take turns on a 3x3 board until someone completes a line or the board
//! fills. After each round they can restart with the same identities or
//! quit.
//!
//! # Architecture
//!
//! - **Board and rules**: the [`tictac_board`] crate, no I/O
//! - **Console**: prompts that loop until input is valid
//! - **GameState**: the owned board, players and turn
//! - **Session**: the menu / setup / round / restart state machine
//!
//! # Example
//!
//! ```
//! use tictac_duel::{Console, Seat, Session};
//!
//! let input = "1\nAnn\nx\nBob\no\n1\n5\n2\n9\n3\n2\n";
//! let mut output = Vec::new();
//! let console = Console::new(input.as_bytes(), &mut output);
//! let report = Session::new(console, || Seat::First).run().unwrap();
//! assert_eq!(report.winner_name(0), Some("Ann"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod game;
mod session;
mod starter;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console
pub use console::{Choice, ChoiceError, Console, ConsoleError};

// Crate-level exports - Game state
pub use game::{GameState, MoveError, Outcome, Seat, SetupError, Turn};

// Crate-level exports - Session
pub use session::{RoundSummary, Session, SessionError, SessionReport};

// Crate-level exports - Starter selection
pub use starter::{RandomStarter, StarterSelector};
