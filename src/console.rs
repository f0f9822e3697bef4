//! Line-oriented prompts over any input/output pair.
//!
//! Every prompt loops until it gets valid input. Validation failures are
//! shown to the player and never returned; only I/O trouble and closed
//! input are.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use derive_more::{Display, Error};
use std::fmt;
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tictac_board::{validate_name, Board, CellChoiceError, NameError, Player, Position, Symbol};
use tracing::{debug, instrument, trace};

/// A two-option menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Choice {
    /// Option 1: start or restart.
    Play,
    /// Option 2: leave.
    Quit,
}

impl Choice {
    /// Number typed to select this option.
    pub fn number(self) -> u32 {
        match self {
            Choice::Play => 1,
            Choice::Quit => 2,
        }
    }

    /// Parses a menu answer.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, ChoiceError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ChoiceError::NotANumber(trimmed.to_string()));
        }
        Choice::iter()
            .find(|choice| trimmed.parse::<u32>().ok() == Some(choice.number()))
            .ok_or_else(|| ChoiceError::OutOfRange(trimmed.to_string()))
    }
}

/// Which menu is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Menu {
    /// Shown once at launch.
    Main,
    /// Shown after every finished round.
    Endgame,
}

impl Menu {
    fn title(self) -> &'static str {
        match self {
            Menu::Main => "=== Tic-Tac-Toe ===",
            Menu::Endgame => "=== Game over ===",
        }
    }

    fn label(self, choice: Choice) -> &'static str {
        match (self, choice) {
            (Menu::Main, Choice::Play) => "Start",
            (Menu::Endgame, Choice::Play) => "Restart",
            (_, Choice::Quit) => "Quit",
        }
    }
}

/// Reasons a menu answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ChoiceError {
    /// Input was not a whole number.
    #[display("'{}' is not a number, enter 1 or 2", _0)]
    NotANumber(#[error(not(source))] String),
    /// Number other than 1 or 2.
    #[display("{} is not an option, enter 1 or 2", _0)]
    OutOfRange(#[error(not(source))] String),
}

/// Console failure that ends the session.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("Console I/O error: {}", _0)]
    Io(std::io::Error),
    /// Input ended while a prompt was waiting.
    #[display("Input closed before a valid answer was given")]
    InputClosed,
    /// A name that passed the prompt was refused by [`Player::new`].
    #[display("Rejected player name: {}", _0)]
    Name(NameError),
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<NameError> for ConsoleError {
    fn from(err: NameError) -> Self {
        Self::Name(err)
    }
}

/// Prompts and output for the game.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console; screen clearing starts disabled.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Enables or disables clearing the terminal between screens.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Writes one line of text.
    pub fn say(&mut self, text: impl fmt::Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Clears the terminal when enabled.
    pub fn clear(&mut self) -> Result<(), ConsoleError> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Writes a prompt and reads one line, without its line ending.
    fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        // Bytes, not `read_line`: invalid UTF-8 becomes U+FFFD, which every
        // validator rejects, so the player is asked again.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            debug!("Input closed");
            return Err(ConsoleError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        trace!(%line, "Read input");
        Ok(line)
    }

    /// Shows the launch menu: 1. Start, 2. Quit.
    pub fn main_menu(&mut self) -> Result<Choice, ConsoleError> {
        self.menu(Menu::Main)
    }

    /// Shows the post-round menu: 1. Restart, 2. Quit.
    pub fn endgame_menu(&mut self) -> Result<Choice, ConsoleError> {
        self.menu(Menu::Endgame)
    }

    #[instrument(skip(self))]
    fn menu(&mut self, menu: Menu) -> Result<Choice, ConsoleError> {
        self.say(menu.title())?;
        for choice in Choice::iter() {
            writeln!(self.output, "{}. {}", choice.number(), menu.label(choice))?;
        }

        loop {
            let answer = self.ask("Enter your choice: ")?;
            match Choice::parse(&answer) {
                Ok(choice) => {
                    debug!(?choice, "Menu choice accepted");
                    return Ok(choice);
                }
                Err(err) => self.say(format_args!("Invalid choice: {}", err))?,
            }
        }
    }

    /// Asks for a name of one or more letters.
    #[instrument(skip(self))]
    pub fn choose_name(&mut self, label: &str) -> Result<String, ConsoleError> {
        loop {
            let answer = self.ask(&format!("{}, enter your name: ", label))?;
            match validate_name(&answer) {
                Ok(name) => return Ok(name.to_string()),
                Err(err) => self.say(format_args!("Invalid name: {}", err))?,
            }
        }
    }

    /// Asks for a one-letter symbol other than `forbidden`.
    #[instrument(skip(self))]
    pub fn choose_symbol(
        &mut self,
        name: &str,
        forbidden: Option<Symbol>,
    ) -> Result<Symbol, ConsoleError> {
        loop {
            let answer = self.ask(&format!("{}, choose your symbol (one letter): ", name))?;
            match Symbol::parse_excluding(&answer, forbidden) {
                Ok(symbol) => return Ok(symbol),
                Err(err) => self.say(format_args!("Invalid symbol: {}", err))?,
            }
        }
    }

    /// Collects a full player identity.
    pub fn choose_player(
        &mut self,
        label: &str,
        forbidden: Option<Symbol>,
    ) -> Result<Player, ConsoleError> {
        let name = self.choose_name(label)?;
        let symbol = self.choose_symbol(&name, forbidden)?;
        Ok(Player::new(name, symbol)?)
    }

    /// Asks `player` for an empty cell, 1-9.
    #[instrument(skip(self, player, board), fields(player = %player))]
    pub fn choose_cell(&mut self, player: &Player, board: &Board) -> Result<Position, ConsoleError> {
        loop {
            let answer = self.ask(&format!(
                "{} ({}), choose a cell (1-9): ",
                player.name(),
                player.symbol()
            ))?;
            let choice = Position::parse_choice(&answer).and_then(|pos| {
                if board.is_empty(pos) {
                    Ok(pos)
                } else {
                    Err(CellChoiceError::Occupied(pos))
                }
            });
            match choice {
                Ok(pos) => return Ok(pos),
                Err(err) => self.say(format_args!("Invalid move: {}", err))?,
            }
        }
    }
}
