//! One round of tic-tac-toe between the human and the agent.
//!
//! A round is created fresh for every game; nothing on it survives into the
//! next round. The phase moves
//! `AwaitingHuman <-> AwaitingAgent -> Resolved`, and every accepted move is
//! followed by a terminal check.

use super::action::{Move, MoveError};
use super::agent::{Decision, HeuristicAgent};
use super::contracts::{LegalMove, assert_invariants};
use super::rules::{is_full, winner};
use super::{Board, Position, Seat, Seats};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// How a finished round ended, from the human's point of view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Verdict {
    /// The human completed a line.
    #[display("humanWin")]
    HumanWin,
    /// The agent completed a line.
    #[display("agentWin")]
    AgentWin,
    /// Full board, no line.
    #[display("tie")]
    Tie,
}

/// Where the round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human's square.
    AwaitingHuman,
    /// Waiting for the agent to decide.
    AwaitingAgent,
    /// Terminal; no more moves are accepted.
    Resolved(Verdict),
}

/// Board, seats, phase and move history of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    board: Board,
    seats: Seats,
    phase: Phase,
    history: Vec<Move>,
}

impl Round {
    /// Starts a round on an empty board with `first` to move.
    #[instrument]
    pub fn new(seats: Seats, first: Seat) -> Self {
        info!(?first, human = %seats.human(), "Starting tic-tac-toe round");
        Self {
            board: Board::new(),
            seats,
            phase: Self::awaiting(first),
            history: Vec::new(),
        }
    }

    fn awaiting(seat: Seat) -> Phase {
        match seat {
            Seat::Human => Phase::AwaitingHuman,
            Seat::Agent => Phase::AwaitingAgent,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seat assignment.
    pub fn seats(&self) -> Seats {
        self.seats
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The seat expected to move, or `None` once resolved.
    pub fn to_move(&self) -> Option<Seat> {
        match self.phase {
            Phase::AwaitingHuman => Some(Seat::Human),
            Phase::AwaitingAgent => Some(Seat::Agent),
            Phase::Resolved(_) => None,
        }
    }

    /// The verdict, once resolved.
    pub fn verdict(&self) -> Option<Verdict> {
        match self.phase {
            Phase::Resolved(verdict) => Some(verdict),
            _ => None,
        }
    }

    /// Open squares on the board.
    pub fn open_positions(&self) -> Vec<Position> {
        self.board.open_positions()
    }

    /// Places `seat`'s mark at `position`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the round is resolved
    /// - [`MoveError::WrongPlayer`] if it is the other seat's turn
    /// - [`MoveError::SquareOccupied`] if the square is taken
    ///
    /// The round is unchanged on error.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn play(&mut self, seat: Seat, position: Position) -> Result<Phase, MoveError> {
        let action = Move::new(self.seats.mark_of(seat), position);
        if let Err(e) = LegalMove::check(&action, self) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        self.board.place(position, action.mark)?;
        self.history.push(action);
        self.phase = self.evaluate(seat);
        assert_invariants(self);

        debug!(%action, phase = ?self.phase, "Move applied");
        Ok(self.phase)
    }

    /// Places the human's mark at `position`.
    pub fn play_human(&mut self, position: Position) -> Result<Phase, MoveError> {
        self.play(Seat::Human, position)
    }

    /// Lets the heuristic agent choose and place its mark.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] if resolved, [`MoveError::WrongPlayer`] if the
    /// human is to move.
    #[instrument(skip(self, rng))]
    pub fn play_agent<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Decision, MoveError> {
        match self.phase {
            Phase::Resolved(_) => return Err(MoveError::GameOver),
            Phase::AwaitingHuman => return Err(MoveError::WrongPlayer(self.seats.agent())),
            Phase::AwaitingAgent => {}
        }

        let agent = HeuristicAgent::new(self.seats.agent());
        let decision = agent
            .decide(&self.board, rng)
            .ok_or(MoveError::GameOver)?;
        self.play(Seat::Agent, decision.position)?;
        Ok(decision)
    }

    /// Terminal check after `mover` placed a mark.
    fn evaluate(&self, mover: Seat) -> Phase {
        if let Some(mark) = winner(&self.board) {
            let verdict = match self.seats.seat_of(mark) {
                Seat::Human => Verdict::HumanWin,
                Seat::Agent => Verdict::AgentWin,
            };
            info!(%mark, %verdict, "Round won");
            Phase::Resolved(verdict)
        } else if is_full(&self.board) {
            info!("Round tied");
            Phase::Resolved(Verdict::Tie)
        } else {
            Self::awaiting(mover.other())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_turns_alternate() {
        let mut round = Round::new(Seats::new(Mark::X), Seat::Human);
        assert_eq!(round.to_move(), Some(Seat::Human));

        let phase = round.play_human(Position::TopLeft).unwrap();
        assert_eq!(phase, Phase::AwaitingAgent);

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let decision = round.play_agent(&mut rng).unwrap();
        assert_eq!(decision.position, Position::Center);
        assert_eq!(round.phase(), Phase::AwaitingHuman);
        assert_eq!(round.history().len(), 2);
    }

    #[test]
    fn test_agent_cannot_move_out_of_turn() {
        let mut round = Round::new(Seats::new(Mark::X), Seat::Human);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(
            round.play_agent(&mut rng),
            Err(MoveError::WrongPlayer(Mark::O))
        );
        assert!(round.history().is_empty());
    }

    #[test]
    fn test_rejected_move_leaves_round_untouched() {
        let mut round = Round::new(Seats::new(Mark::O), Seat::Agent);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        round.play_agent(&mut rng).unwrap();
        let before = round.clone();

        assert_eq!(
            round.play_human(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(round, before);
    }

    #[test]
    fn test_human_win_resolves_round() {
        let mut round = Round::new(Seats::new(Mark::X), Seat::Human);
        round.play(Seat::Human, Position::TopLeft).unwrap();
        round.play(Seat::Agent, Position::Center).unwrap();
        round.play(Seat::Human, Position::TopCenter).unwrap();
        round.play(Seat::Agent, Position::BottomLeft).unwrap();
        let phase = round.play(Seat::Human, Position::TopRight).unwrap();

        assert_eq!(phase, Phase::Resolved(Verdict::HumanWin));
        assert_eq!(round.to_move(), None);
        assert_eq!(
            round.play(Seat::Agent, Position::BottomRight),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_verdict_tags() {
        assert_eq!(Verdict::HumanWin.to_string(), "humanWin");
        assert_eq!(Verdict::AgentWin.to_string(), "agentWin");
        assert_eq!(Verdict::Tie.to_string(), "tie");
    }
}
