//! Which mark belongs to whom.

use super::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A participant at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The person at the keyboard.
    Human,
    /// The heuristic computer opponent.
    Agent,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::Human => Seat::Agent,
            Seat::Agent => Seat::Human,
        }
    }
}

/// Assignment of marks to seats, fixed for a whole session.
///
/// Built once from configuration and handed to every round; nothing in the
/// engine decides on its own which mark is the human's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats {
    human: Mark,
}

impl Seats {
    /// Seats the human as `human`; the agent gets the opponent mark.
    #[instrument]
    pub fn new(human: Mark) -> Self {
        Self { human }
    }

    /// The human's mark.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// The agent's mark.
    pub fn agent(&self) -> Mark {
        self.human.opponent()
    }

    /// The mark played by `seat`.
    pub fn mark_of(&self, seat: Seat) -> Mark {
        match seat {
            Seat::Human => self.human(),
            Seat::Agent => self.agent(),
        }
    }

    /// The seat playing `mark`.
    pub fn seat_of(&self, mark: Mark) -> Seat {
        if mark == self.human {
            Seat::Human
        } else {
            Seat::Agent
        }
    }
}

impl Default for Seats {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_gets_opponent_mark() {
        let seats = Seats::new(Mark::O);
        assert_eq!(seats.agent(), Mark::X);
        assert_eq!(seats.seat_of(Mark::X), Seat::Agent);
        assert_eq!(seats.seat_of(Mark::O), Seat::Human);
        assert_eq!(seats.mark_of(Seat::Agent), Mark::X);
    }
}
