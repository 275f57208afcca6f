//! Heuristic computer opponent.
//!
//! The agent does not search. It walks a fixed priority list and takes the
//! first rule that applies:
//!
//! 1. [`Priority::Win`] - complete one of its own two-in-a-rows.
//! 2. [`Priority::Center`] - take the center square.
//! 3. [`Priority::Block`] - fill the open square of an opponent two-in-a-row.
//! 4. [`Priority::Random`] - any open square, chosen uniformly.
//!
//! Center sits above Block: an open center outranks an opponent threat.

use super::rules::completing_square;
use super::{Board, Mark, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The rule that produced a decision.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Priority {
    /// Completed its own line.
    #[display("win")]
    Win,
    /// Took the center square.
    #[display("center")]
    Center,
    /// Blocked an opponent line.
    #[display("block")]
    Block,
    /// Picked an open square at random.
    #[display("random")]
    Random,
}

/// A chosen square and the reason it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Decision {
    /// Square to mark.
    pub position: Position,
    /// Rule that fired.
    pub priority: Priority,
}

/// Rule-based opponent playing a single mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicAgent {
    mark: Mark,
}

impl HeuristicAgent {
    /// Creates an agent playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }

    /// The mark this agent places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Chooses the next square, or `None` if the board is full.
    ///
    /// `rng` is only consulted when no rule above [`Priority::Random`] applies.
    #[instrument(skip(self, board, rng), fields(mark = %self.mark))]
    pub fn decide<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Decision> {
        let decision = if let Some(position) = completing_square(board, self.mark) {
            Decision::new(position, Priority::Win)
        } else if board.is_empty(Position::Center) {
            Decision::new(Position::Center, Priority::Center)
        } else if let Some(position) = completing_square(board, self.mark.opponent()) {
            Decision::new(position, Priority::Block)
        } else {
            let open = board.open_positions();
            let position = open.choose(rng).copied()?;
            Decision::new(position, Priority::Random)
        };

        debug!(
            position = %decision.position,
            priority = %decision.priority,
            "Agent decided"
        );
        Some(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for &(pos, mark) in marks {
            board.place(pos, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_takes_center_on_empty_board() {
        let agent = HeuristicAgent::new(Mark::O);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let decision = agent.decide(&Board::new(), &mut rng).unwrap();
        assert_eq!(decision, Decision::new(Position::Center, Priority::Center));
    }

    #[test]
    fn test_win_outranks_center() {
        let board = board_with(&[
            (Position::TopLeft, Mark::O),
            (Position::TopCenter, Mark::O),
            (Position::BottomLeft, Mark::X),
            (Position::BottomCenter, Mark::X),
        ]);
        let agent = HeuristicAgent::new(Mark::O);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let decision = agent.decide(&board, &mut rng).unwrap();
        assert_eq!(decision, Decision::new(Position::TopRight, Priority::Win));
    }

    #[test]
    fn test_center_outranks_block() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
        ]);
        let agent = HeuristicAgent::new(Mark::O);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let decision = agent.decide(&board, &mut rng).unwrap();
        assert_eq!(decision.priority, Priority::Center);
    }

    #[test]
    fn test_blocks_when_center_taken() {
        let board = board_with(&[
            (Position::Center, Mark::O),
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
        ]);
        let agent = HeuristicAgent::new(Mark::O);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let decision = agent.decide(&board, &mut rng).unwrap();
        assert_eq!(decision, Decision::new(Position::TopRight, Priority::Block));
    }

    #[test]
    fn test_random_picks_open_square() {
        let board = board_with(&[
            (Position::Center, Mark::X),
            (Position::TopLeft, Mark::O),
        ]);
        let agent = HeuristicAgent::new(Mark::O);
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let decision = agent.decide(&board, &mut rng).unwrap();
            assert_eq!(decision.priority, Priority::Random);
            assert!(board.is_empty(decision.position));
        }
    }

    #[test]
    fn test_full_board_yields_nothing() {
        use Mark::{O, X};
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip([X, O, X, O, X, X, O, X, O]) {
            board.place(pos, mark).unwrap();
        }
        let agent = HeuristicAgent::new(O);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(agent.decide(&board, &mut rng), None);
    }
}
