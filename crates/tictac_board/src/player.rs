//! Player identity: a name and a mark.

use crate::Symbol;
use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::instrument;

/// A player in a game.
///
/// Names are validated at construction; the pair persists across
/// restarts within one session.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Player {
    /// Player's name (one or more letters).
    name: String,
    /// Mark this player places on the board.
    symbol: Symbol,
}

impl Player {
    /// Creates a player after validating the name.
    #[instrument(skip(name, symbol), fields(symbol = %symbol))]
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Result<Self, NameError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, symbol })
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

/// Checks that a name is one or more alphabetic characters.
///
/// Surrounding whitespace is trimmed; the trimmed name is returned.
#[instrument]
pub fn validate_name(input: &str) -> Result<&str, NameError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    match name.chars().find(|c| !c.is_alphabetic()) {
        Some(c) => Err(NameError::NotAlphabetic(c)),
        None => Ok(name),
    }
}

/// Reasons a name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum NameError {
    /// Nothing was entered.
    #[display("Name cannot be empty")]
    Empty,
    /// The name contains something other than letters.
    #[display("Name must contain letters only, found '{}'", _0)]
    NotAlphabetic(#[error(not(source))] char),
}
