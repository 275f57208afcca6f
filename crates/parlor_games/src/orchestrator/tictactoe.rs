//! Tic-tac-toe round loop.

use crate::players::SquarePicker;
use crate::presenter::Presenter;
use crate::score::{MatchResult, OutcomeTag, ScoreSnapshot};
use anyhow::Result;
use parlor_tictactoe::{Board, MoveError, Phase, Position, Priority, Round, Seat, Seats, Verdict};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// Messages sent from a tic-tac-toe session to its presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeEvent {
    /// The session opened against a named opponent.
    Welcome {
        /// The human's name.
        player: String,
        /// The computer's name.
        opponent: String,
    },
    /// A fresh board, before the first move.
    RoundStarted {
        /// Empty board.
        board: Board,
        /// Who plays which mark.
        seats: Seats,
        /// Who moves first.
        first: Seat,
        /// Points going into the round.
        score: ScoreSnapshot,
    },
    /// A move was applied.
    MoveMade {
        /// Who moved.
        seat: Seat,
        /// Where.
        position: Position,
        /// The board afterwards.
        board: Board,
        /// The agent's reason, for agent moves.
        priority: Option<Priority>,
        /// Points so far; unchanged until the round is over.
        score: ScoreSnapshot,
    },
    /// The human's move was refused; the board is unchanged.
    MoveRejected {
        /// Why.
        error: MoveError,
    },
    /// The round ended and the score was updated.
    RoundOver {
        /// The verdict.
        verdict: Verdict,
        /// Game-independent tag of the verdict.
        tag: OutcomeTag,
        /// Final board.
        board: Board,
        /// Points after recording the verdict.
        score: ScoreSnapshot,
    },
    /// A side reached the match threshold; the score has been reset.
    MatchOver(MatchResult),
    /// The human declined another round.
    Farewell,
}

/// Drives one tic-tac-toe round to its verdict.
pub struct TicTacToeOrchestrator<'a, I, P> {
    round: Round,
    score: ScoreSnapshot,
    input: &'a mut I,
    presenter: &'a mut P,
}

impl<'a, I, P> TicTacToeOrchestrator<'a, I, P>
where
    I: SquarePicker,
    P: Presenter<TicTacToeEvent>,
{
    /// Creates an orchestrator for `round`, played at `score`.
    pub fn new(
        round: Round,
        score: ScoreSnapshot,
        input: &'a mut I,
        presenter: &'a mut P,
    ) -> Self {
        Self {
            round,
            score,
            input,
            presenter,
        }
    }

    /// The round being played.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Runs the round loop until a verdict.
    ///
    /// Rejected human moves are reported and asked for again.
    #[instrument(skip_all)]
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Verdict> {
        info!("Starting tic-tac-toe round");

        if let Some(first) = self.round.to_move() {
            self.presenter.present(&TicTacToeEvent::RoundStarted {
                board: self.round.board().clone(),
                seats: self.round.seats(),
                first,
                score: self.score,
            })?;
        }

        loop {
            match self.round.phase() {
                Phase::Resolved(verdict) => {
                    info!(%verdict, "Round finished");
                    return Ok(verdict);
                }
                Phase::AwaitingHuman => self.human_turn()?,
                Phase::AwaitingAgent => self.agent_turn(rng)?,
            }
        }
    }

    fn human_turn(&mut self) -> Result<()> {
        let open = self.round.open_positions();
        debug!(open = open.len(), "Waiting for human move");
        let position = self.input.pick_square(self.round.board(), &open)?;

        match self.round.play_human(position) {
            Ok(_) => self.presenter.present(&TicTacToeEvent::MoveMade {
                seat: Seat::Human,
                position,
                board: self.round.board().clone(),
                priority: None,
                score: self.score,
            }),
            Err(error) => {
                warn!(%error, "Human move rejected");
                self.presenter
                    .present(&TicTacToeEvent::MoveRejected { error })
            }
        }
    }

    fn agent_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let decision = self.round.play_agent(rng)?;
        self.presenter.present(&TicTacToeEvent::MoveMade {
            seat: Seat::Agent,
            position: decision.position,
            board: self.round.board().clone(),
            priority: Some(decision.priority),
            score: self.score,
        })
    }
}
