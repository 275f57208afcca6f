//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Tag placed on a square.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// The X tag.
    X,
    /// The O tag.
    O,
}

impl Mark {
    /// Both marks, X first.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Unmarked square.
    Empty,
    /// Square marked by a player.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (index 0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is unmarked.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Marks the square at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square already carries a
    /// mark. The board is left untouched in that case.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(mark);
        Ok(())
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Unmarked positions in board order.
    pub fn open_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Number of squares carrying `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(mark))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_open_everywhere() {
        let board = Board::new();
        assert_eq!(board.open_positions().len(), 9);
        assert_eq!(board.count(Mark::X), 0);
    }

    #[test]
    fn test_place_marks_square() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X).unwrap();
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
        assert!(!board.open_positions().contains(&Position::Center));
    }

    #[test]
    fn test_place_on_occupied_square_is_rejected() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::O).unwrap();
        let before = board.clone();

        let err = board.place(Position::TopLeft, Mark::X).unwrap_err();
        assert_eq!(err, MoveError::SquareOccupied(Position::TopLeft));
        assert_eq!(board, before);
    }

    #[test]
    fn test_mark_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Mark::O).unwrap(), "\"O\"");
        assert_eq!(Mark::X.opponent(), Mark::O);
    }
}
