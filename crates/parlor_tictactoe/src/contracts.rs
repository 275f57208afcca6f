//! Preconditions and invariants for moves.
//!
//! Preconditions are checked on every move and turn a bad request into a
//! [`MoveError`] before anything is touched. Invariants are asserted in debug
//! builds after every accepted move.

use super::action::{Move, MoveError};
use super::round::{Phase, Round};
use super::{Board, Mark};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round has not been resolved.
pub(crate) struct RoundOpen;

impl RoundOpen {
    #[instrument(skip(round))]
    pub(crate) fn check(round: &Round) -> Result<(), MoveError> {
        if matches!(round.phase(), Phase::Resolved(_)) {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the mover's turn.
pub(crate) struct PlayersTurn;

impl PlayersTurn {
    #[instrument(skip(round))]
    pub(crate) fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        let expected = round.to_move().map(|seat| round.seats().mark_of(seat));
        if expected != Some(mov.mark) {
            Err(MoveError::WrongPlayer(mov.mark))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub(crate) struct SquareIsEmpty;

impl SquareIsEmpty {
    #[instrument(skip(round))]
    pub(crate) fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        if !round.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the round is open, it is the mover's turn and the square is free.
pub(crate) struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(round))]
    pub(crate) fn check(mov: &Move, round: &Round) -> Result<(), MoveError> {
        RoundOpen::check(round)?;
        PlayersTurn::check(mov, round)?;
        SquareIsEmpty::check(mov, round)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Invariants
// ─────────────────────────────────────────────────────────────

/// Invariant: mark counts differ by at most one.
pub(crate) struct BoardConsistent;

impl BoardConsistent {
    #[instrument(skip(board))]
    pub(crate) fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

/// Invariant: history length matches filled squares.
pub(crate) struct HistoryComplete;

impl HistoryComplete {
    #[instrument(skip(round))]
    pub(crate) fn holds(round: &Round) -> bool {
        let filled = 9 - round.board().open_positions().len();
        let history_len = round.history().len();
        let valid = filled == history_len;
        if !valid {
            warn!(filled, history_len, "History completeness violated");
        }
        valid
    }
}

/// Asserts that all round invariants hold (debug builds only).
pub(crate) fn assert_invariants(round: &Round) {
    debug_assert!(
        BoardConsistent::holds(round.board()),
        "Board consistency violated"
    );
    debug_assert!(
        HistoryComplete::holds(round),
        "History completeness violated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Seat, Seats};

    #[test]
    fn test_precondition_empty_square() {
        let round = Round::new(Seats::new(Mark::X), Seat::Human);
        let action = Move::new(Mark::X, Position::Center);
        assert!(LegalMove::check(&action, &round).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut round = Round::new(Seats::new(Mark::X), Seat::Human);
        round.play(Seat::Human, Position::Center).unwrap();
        round.play(Seat::Agent, Position::TopLeft).unwrap();

        let action = Move::new(Mark::X, Position::Center);
        assert_eq!(
            LegalMove::check(&action, &round),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let round = Round::new(Seats::new(Mark::X), Seat::Human);
        let action = Move::new(Mark::O, Position::Center);
        assert_eq!(
            LegalMove::check(&action, &round),
            Err(MoveError::WrongPlayer(Mark::O))
        );
    }

    #[test]
    fn test_board_consistency_detects_skew() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::X).unwrap();
        assert!(BoardConsistent::holds(&board));
        board.place(Position::TopRight, Mark::X).unwrap();
        assert!(!BoardConsistent::holds(&board));
    }
}
