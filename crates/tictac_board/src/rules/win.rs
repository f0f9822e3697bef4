//! Win detection logic for tic-tac-toe.

use super::lines::{Line, LINES};
use crate::Board;
use tracing::instrument;

/// Returns the first completed line in fixed order, if any.
///
/// A single move cannot complete two lines with different owners, but it
/// can complete two lines at once (e.g. a row and a diagonal through the
/// last cell). The earlier line in [`LINES`] is reported.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.iter().copied().find(|line| line.owner(board).is_some())
}
