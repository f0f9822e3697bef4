//! Game controller: main menu, player setup, rounds and restarts.
//!
//! The session walks a small state machine:
//!
//! ```text
//! MainMenu -> Setup -> InProgress -> Terminal -> Restart -> InProgress ...
//!    |                                  |
//!    +------------> Quit <--------------+
//! ```
//!
//! The single [`GameState`] is owned by whichever phase is current and
//! handed to the next one; nothing lives in globals.

use crate::{
    Choice, Console, ConsoleError, GameState, Outcome, Seat, SetupError, StarterSelector, Turn,
};
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use tictac_board::{Board, Player};
use tracing::{debug, info, instrument, warn};

/// Record of one finished round.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RoundSummary {
    /// Seat that moved first.
    starter: Seat,
    /// How the round ended.
    outcome: Outcome,
    /// Final board.
    board: Board,
}

/// What a session leaves behind once the player quits.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SessionReport {
    /// Both players, if setup was reached.
    players: Option<[Player; 2]>,
    /// Every finished round, in order.
    rounds: Vec<RoundSummary>,
}

impl SessionReport {
    /// Name of the player who won `round`, if it was won.
    pub fn winner_name(&self, round: usize) -> Option<&str> {
        let winner = self.rounds.get(round)?.outcome.winner()?;
        self.players
            .as_ref()
            .map(|players| players[winner.index()].name().as_str())
    }
}

/// Failure that ends a session early.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// The console could not read or write.
    #[display("{}", _0)]
    Console(ConsoleError),
    /// The players could not be seated.
    #[display("{}", _0)]
    Setup(SetupError),
}

#[derive(Debug)]
enum Phase {
    MainMenu,
    Setup,
    InProgress(GameState),
    Terminal(GameState),
    Restart(GameState),
    Quit(Option<GameState>),
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::MainMenu => "main_menu",
            Phase::Setup => "setup",
            Phase::InProgress(_) => "in_progress",
            Phase::Terminal(_) => "terminal",
            Phase::Restart(_) => "restart",
            Phase::Quit(_) => "quit",
        }
    }
}

/// One interactive run of the game.
pub struct Session<R, W, S> {
    console: Console<R, W>,
    starter: S,
    rounds: Vec<RoundSummary>,
}

impl<R: BufRead, W: Write, S: StarterSelector> Session<R, W, S> {
    /// Creates a session over `console`, choosing starters with `starter`.
    pub fn new(console: Console<R, W>, starter: S) -> Self {
        Self {
            console,
            starter,
            rounds: Vec::new(),
        }
    }

    /// Runs until the player chooses Quit.
    ///
    /// # Errors
    ///
    /// Only console or setup failures end the session early; invalid input
    /// is re-prompted.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<SessionReport, SessionError> {
        info!("Session started");
        let mut phase = Phase::MainMenu;
        loop {
            phase = match phase {
                Phase::Quit(state) => {
                    self.console.say("Thanks for playing!")?;
                    info!(rounds = self.rounds.len(), "Session ended");
                    return Ok(SessionReport {
                        players: state.map(GameState::into_players),
                        rounds: self.rounds,
                    });
                }
                other => self.step(other)?,
            };
        }
    }

    fn step(&mut self, phase: Phase) -> Result<Phase, SessionError> {
        debug!(phase = phase.name(), "Entering phase");
        let next = match phase {
            Phase::MainMenu => {
                self.console.clear()?;
                match self.console.main_menu()? {
                    Choice::Play => Phase::Setup,
                    Choice::Quit => Phase::Quit(None),
                }
            }
            Phase::Setup => Phase::InProgress(self.setup()?),
            Phase::InProgress(mut state) => {
                self.play_round(&mut state)?;
                Phase::Terminal(state)
            }
            Phase::Terminal(state) => match self.console.endgame_menu()? {
                Choice::Play => Phase::Restart(state),
                Choice::Quit => Phase::Quit(Some(state)),
            },
            Phase::Restart(mut state) => {
                state.restart(self.starter.pick());
                Phase::InProgress(state)
            }
            Phase::Quit(state) => Phase::Quit(state),
        };
        Ok(next)
    }

    /// Collects both players and seats them.
    #[instrument(skip(self))]
    fn setup(&mut self) -> Result<GameState, SessionError> {
        let first = self.console.choose_player("Player 1", None)?;
        let second = self
            .console
            .choose_player("Player 2", Some(*first.symbol()))?;
        Ok(GameState::new([first, second], self.starter.pick())?)
    }

    /// Plays one round to its outcome, then shows the result.
    #[instrument(skip(self, state), fields(starter = ?state.starter()))]
    fn play_round(&mut self, state: &mut GameState) -> Result<(), ConsoleError> {
        self.console.clear()?;
        self.console
            .say(format_args!("{} goes first.", state.active_player().name()))?;

        let outcome = loop {
            self.console.say(state.board().render())?;
            let pos = self
                .console
                .choose_cell(state.active_player(), state.board())?;
            match state.play(pos) {
                Ok(Turn::Continue { .. }) => self.console.clear()?,
                Ok(Turn::Finished(outcome)) => break outcome,
                Err(err) => {
                    warn!(%err, "Move rejected");
                    self.console.say(&err)?;
                }
            }
        };

        self.announce(state, outcome)?;
        self.rounds.push(RoundSummary {
            starter: state.starter(),
            outcome,
            board: state.board().clone(),
        });
        Ok(())
    }

    fn announce(&mut self, state: &GameState, outcome: Outcome) -> Result<(), ConsoleError> {
        self.console.clear()?;
        self.console.say(state.board().render())?;
        match outcome {
            Outcome::Win { winner, line } => {
                self.console.say("")?;
                self.console.say("Winning line:")?;
                self.console.say(state.board().render_highlighted(line))?;
                self.console
                    .say(format_args!("{} wins!", state.player(winner).name()))?;
            }
            Outcome::Draw => self.console.say("It's a draw!")?,
        }
        Ok(())
    }
}
