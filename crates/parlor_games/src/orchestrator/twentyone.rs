//! 21 round loop.

use crate::players::CommandSource;
use crate::presenter::Presenter;
use crate::score::{MatchResult, OutcomeTag, ScoreSnapshot};
use anyhow::{Context, Result};
use parlor_twentyone::{Card, Command, Hand, Phase, Round, Verdict};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Messages sent from a 21 session to its presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TwentyOneEvent {
    /// The session opened against a named opponent.
    Welcome {
        /// The human's name.
        player: String,
        /// The computer's name.
        opponent: String,
    },
    /// Two cards each are out; only the dealer's first card is visible.
    Dealt {
        /// The human's hand.
        player: Hand,
        /// The dealer's face-up card.
        dealer_upcard: Option<Card>,
        /// Points going into the round.
        score: ScoreSnapshot,
    },
    /// The human took a card.
    PlayerHit {
        /// The card drawn.
        card: Card,
        /// The hand afterwards.
        hand: Hand,
        /// Points so far.
        score: ScoreSnapshot,
    },
    /// The human stood.
    PlayerStood {
        /// The hand kept.
        hand: Hand,
        /// Points so far.
        score: ScoreSnapshot,
    },
    /// The dealer took a card.
    DealerHit {
        /// The card drawn.
        card: Card,
        /// The dealer's hand afterwards.
        hand: Hand,
        /// Points so far.
        score: ScoreSnapshot,
    },
    /// The dealer reached its threshold without drawing.
    DealerStood {
        /// The dealer's hand.
        hand: Hand,
        /// Points so far.
        score: ScoreSnapshot,
    },
    /// The round ended and the score was updated.
    RoundOver {
        /// The verdict.
        verdict: Verdict,
        /// Game-independent tag of the verdict.
        tag: OutcomeTag,
        /// The human's final hand.
        player: Hand,
        /// The dealer's final hand.
        dealer: Hand,
        /// Points after recording the verdict.
        score: ScoreSnapshot,
    },
    /// A side reached the match threshold; the score has been reset.
    MatchOver(MatchResult),
    /// The human declined another round.
    Farewell,
}

/// Drives one 21 round to its verdict.
pub struct TwentyOneOrchestrator<'a, I, P> {
    round: Round,
    score: ScoreSnapshot,
    input: &'a mut I,
    presenter: &'a mut P,
}

impl<'a, I, P> TwentyOneOrchestrator<'a, I, P>
where
    I: CommandSource,
    P: Presenter<TwentyOneEvent>,
{
    /// Creates an orchestrator for a freshly dealt `round`, played at `score`.
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

    /// Runs the player turn, then the dealer turn, until a verdict.
    ///
    /// An exhausted deck aborts the round with an error.
    #[instrument(skip_all)]
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Verdict> {
        info!("Starting 21 round");
        self.presenter.present(&TwentyOneEvent::Dealt {
            player: self.round.player().clone(),
            dealer_upcard: self.round.dealer_upcard(),
            score: self.score,
        })?;

        loop {
            match self.round.phase() {
                Phase::Resolved(verdict) => {
                    info!(%verdict, "Round finished");
                    return Ok(verdict);
                }
                Phase::PlayerTurn => self.player_turn(rng)?,
                Phase::DealerTurn => self.dealer_turn(rng)?,
            }
        }
    }

    fn player_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let command = self
            .input
            .choose_command(self.round.player(), self.round.dealer_upcard())?;
        debug!(%command, "Player command");
        self.round.apply(command, rng)?;

        let hand = self.round.player().clone();
        let score = self.score;
        let event = match command {
            Command::Hit => TwentyOneEvent::PlayerHit {
                card: hand.cards().last().copied().context("Hit drew no card")?,
                hand,
                score,
            },
            Command::Stand => TwentyOneEvent::PlayerStood { hand, score },
        };
        self.presenter.present(&event)
    }

    fn dealer_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let drawn = self.round.dealer_step(rng)?;
        let hand = self.round.dealer().clone();
        let score = self.score;
        let event = match drawn {
            Some(card) => TwentyOneEvent::DealerHit { card, hand, score },
            None => TwentyOneEvent::DealerStood { hand, score },
        };
        self.presenter.present(&event)
    }
}
