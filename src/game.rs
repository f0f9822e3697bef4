//! Owned game state and the turn transition.

use derive_more::{Display, Error};
use tictac_board::{rules, Board, Line, Player, Position, Symbol};
use tracing::{debug, info, instrument};

/// Which of the two players: index 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The player set up first.
    First,
    /// The player set up second.
    Second,
}

impl Seat {
    /// Index into the player pair.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    /// The other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The mover completed `line`.
    Win {
        /// Seat that made the completing move.
        winner: Seat,
        /// The completed line.
        line: Line,
    },
    /// Board full, no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winning seat if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// Result of a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Round continues with `next` to move.
    Continue {
        /// Seat now to move.
        next: Seat,
    },
    /// Round ended.
    Finished(Outcome),
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),
    /// The round already has an outcome.
    #[display("Round is already over")]
    RoundOver,
}

/// Error that can occur when seating two players.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// Both players chose the same symbol.
    #[display("Both players use symbol {}", _0)]
    DuplicateSymbol(#[error(not(source))] Symbol),
}

/// Complete state of one session's game.
///
/// Players persist for the whole session; the board, starter and
/// outcome are per round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    active: Seat,
    starter: Seat,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Seats two players and starts the first round with `starter` to move.
    #[instrument(skip(players), fields(first = %players[0], second = %players[1]))]
    pub fn new(players: [Player; 2], starter: Seat) -> Result<Self, SetupError> {
        if players[0].symbol() == players[1].symbol() {
            return Err(SetupError::DuplicateSymbol(*players[0].symbol()));
        }
        info!("Players seated");
        Ok(Self {
            board: Board::new(),
            players,
            active: starter,
            starter,
            outcome: None,
        })
    }

    /// Clears the board and begins a new round; players are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self, starter: Seat) {
        self.board.reset();
        self.active = starter;
        self.starter = starter;
        self.outcome = None;
        info!("Round restarted");
    }

    /// Applies the active player's move at `pos`.
    ///
    /// The mover is captured before the turn passes, so a win is always
    /// credited to the player who completed the line.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Occupied`] without changing anything if the cell
    /// is taken, or [`MoveError::RoundOver`] once the round has an outcome.
    #[instrument(skip(self), fields(seat = ?self.active))]
    pub fn play(&mut self, pos: Position) -> Result<Turn, MoveError> {
        if self.outcome.is_some() {
            return Err(MoveError::RoundOver);
        }

        let mover = self.active;
        let symbol = *self.players[mover.index()].symbol();
        self.board
            .place(pos, symbol)
            .map_err(|_| MoveError::Occupied(pos))?;

        if let Some(line) = rules::winning_line(&self.board) {
            let outcome = Outcome::Win {
                winner: mover,
                line,
            };
            info!(line = %line, winner = %self.players[mover.index()], "Line completed");
            self.outcome = Some(outcome);
            return Ok(Turn::Finished(outcome));
        }

        if self.board.is_full() {
            info!("Board full, draw");
            self.outcome = Some(Outcome::Draw);
            return Ok(Turn::Finished(Outcome::Draw));
        }

        self.active = mover.other();
        debug!(next = ?self.active, "Turn passes");
        Ok(Turn::Continue { next: self.active })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both players, first seat first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns the seat to move.
    pub fn active(&self) -> Seat {
        self.active
    }

    /// Returns the player to move.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// Returns the seat that opened the current round.
    pub fn starter(&self) -> Seat {
        self.starter
    }

    /// Returns the round's outcome once it has one.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Gives back the players, ending the game.
    pub fn into_players(self) -> [Player; 2] {
        self.players
    }
}
