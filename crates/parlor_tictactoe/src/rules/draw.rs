//! Draw and terminal detection logic for tic-tac-toe.

use super::super::Board;
use super::win::winner;
use tracing::instrument;

/// Checks if the board is full (no open positions).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.open_positions().is_empty()
}

/// A full board with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

/// No further moves are evaluated: someone won or the board is full.
#[instrument]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}
