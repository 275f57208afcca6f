//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark};
use super::lines::{LINES, line_matches};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line (in [`LINES`] order) whose three
/// squares all carry `mark`, `None` otherwise.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| {
        Mark::ALL
            .into_iter()
            .find(|&mark| line_matches(board, line, mark, 3))
    })
}
