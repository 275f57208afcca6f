//! One round of 21: deal, player turn, dealer turn, resolution.

use super::card::Card;
use super::dealer::{DealerAction, DealerPolicy, DealerState};
use super::deck::{Deck, DeckError};
use super::hand::Hand;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Player command during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Command {
    /// Take another card.
    #[display("hit")]
    Hit,
    /// Keep the current hand.
    #[display("stand")]
    Stand,
}

/// Text that names no command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Not `hit` or `stand`.
    #[display("Invalid command {:?}: choose hit or stand", _0)]
    InvalidCommand(String),
}

impl std::error::Error for CommandError {}

impl FromStr for Command {
    type Err = CommandError;

    /// Accepts `hit` and `stand` (or `stay`), ignoring case and surrounding space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hit" => Ok(Command::Hit),
            "stand" | "stay" => Ok(Command::Stand),
            _ => Err(CommandError::InvalidCommand(s.trim().to_string())),
        }
    }
}

/// How a finished round ended, from the player's point of view.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Verdict {
    /// Player beat the dealer, or the dealer busted.
    #[display("humanWin")]
    HumanWin,
    /// Dealer beat the player.
    #[display("agentWin")]
    DealerWin,
    /// Neither side won.
    #[display("tie")]
    Tie,
    /// Player went over 21; the dealer never plays.
    #[display("bust")]
    HumanBust,
}

/// Where the round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Player may hit or stand.
    PlayerTurn,
    /// Dealer draws under its policy.
    DealerTurn,
    /// Terminal.
    Resolved(Verdict),
}

/// Failure while driving a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RoundError {
    /// The action does not belong to the current phase.
    #[display("Action not allowed during {:?}", _0)]
    OutOfTurn(Phase),
    /// The deck ran out.
    #[display("{}", _0)]
    Deck(DeckError),
}

impl std::error::Error for RoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RoundError::Deck(e) => Some(e),
            RoundError::OutOfTurn(_) => None,
        }
    }
}

impl From<DeckError> for RoundError {
    fn from(err: DeckError) -> Self {
        Self::Deck(err)
    }
}

/// Deck, both hands and phase of one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    deck: Deck,
    player: Hand,
    dealer: Hand,
    policy: DealerPolicy,
    phase: Phase,
}

impl Round {
    /// Opens a round on a fresh deck and deals two cards each, player first.
    ///
    /// # Errors
    ///
    /// Only [`RoundError::Deck`], which a fresh deck cannot produce.
    #[instrument(skip(rng))]
    pub fn deal<R: Rng + ?Sized>(policy: DealerPolicy, rng: &mut R) -> Result<Self, RoundError> {
        let mut deck = Deck::new();
        let mut player = Hand::new();
        let mut dealer = Hand::new();
        for _ in 0..2 {
            player.draw_from(&mut deck, rng)?;
            dealer.draw_from(&mut deck, rng)?;
        }
        info!(
            player_total = player.total(),
            remaining = deck.remaining(),
            "Dealt 21 round"
        );
        Ok(Self {
            deck,
            player,
            dealer,
            policy,
            phase: Phase::PlayerTurn,
        })
    }

    /// The player's hand.
    pub fn player(&self) -> &Hand {
        &self.player
    }

    /// The dealer's hand.
    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// The dealer's face-up card (the first one dealt).
    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.cards().first().copied()
    }

    /// Undealt cards.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The dealer policy in force.
    pub fn policy(&self) -> DealerPolicy {
        self.policy
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The verdict, once resolved.
    pub fn verdict(&self) -> Option<Verdict> {
        match self.phase {
            Phase::Resolved(verdict) => Some(verdict),
            _ => None,
        }
    }

    /// Applies a player command.
    ///
    /// A hit that busts resolves the round as [`Verdict::HumanBust`]; a stand
    /// hands over to the dealer.
    ///
    /// # Errors
    ///
    /// [`RoundError::OutOfTurn`] outside [`Phase::PlayerTurn`].
    #[instrument(skip(self, rng), fields(player_total = self.player.total()))]
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        command: Command,
        rng: &mut R,
    ) -> Result<Phase, RoundError> {
        if self.phase != Phase::PlayerTurn {
            warn!(phase = ?self.phase, "Player command out of turn");
            return Err(RoundError::OutOfTurn(self.phase));
        }

        self.phase = match command {
            Command::Hit => {
                self.player.draw_from(&mut self.deck, rng)?;
                if self.player.is_bust() {
                    info!(total = self.player.total(), "Player busted");
                    Phase::Resolved(Verdict::HumanBust)
                } else {
                    Phase::PlayerTurn
                }
            }
            Command::Stand => Phase::DealerTurn,
        };
        debug!(phase = ?self.phase, "Player command applied");
        Ok(self.phase)
    }

    /// Runs one step of the dealer policy.
    ///
    /// Returns the card drawn, or `None` when the dealer stands. The round
    /// resolves as soon as the dealer stops drawing.
    ///
    /// # Errors
    ///
    /// [`RoundError::OutOfTurn`] outside [`Phase::DealerTurn`].
    #[instrument(skip(self, rng), fields(dealer_total = self.dealer.total()))]
    pub fn dealer_step<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<Card>, RoundError> {
        if self.phase != Phase::DealerTurn {
            return Err(RoundError::OutOfTurn(self.phase));
        }

        let drawn = match self.policy.decide(&self.dealer) {
            DealerAction::Hit => Some(self.dealer.draw_from(&mut self.deck, rng)?),
            DealerAction::Stand => None,
        };

        if self.policy.state(&self.dealer) != DealerState::Drawing {
            self.phase = Phase::Resolved(self.resolve());
        }
        Ok(drawn)
    }

    /// Runs the dealer policy to completion; returns the cards it drew.
    ///
    /// # Errors
    ///
    /// As [`Round::dealer_step`].
    pub fn play_dealer<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<Card>, RoundError> {
        let mut drawn = Vec::new();
        while self.phase == Phase::DealerTurn {
            drawn.extend(self.dealer_step(rng)?);
        }
        Ok(drawn)
    }

    /// Compares the hands once the dealer is done.
    fn resolve(&self) -> Verdict {
        let player = self.player.total();
        let dealer = self.dealer.total();
        let verdict = if self.player.is_bust() {
            Verdict::HumanBust
        } else if self.dealer.is_bust() || player > dealer {
            Verdict::HumanWin
        } else if dealer > player {
            Verdict::DealerWin
        } else {
            Verdict::Tie
        };
        info!(player, dealer, %verdict, "Round resolved");
        verdict
    }
}
