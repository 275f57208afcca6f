//! The 52-card deck.

use super::card::{Card, Rank, Suit};
use rand::Rng;
use strum::IntoEnumIterator;
use tracing::{debug, error, instrument};

/// Drawing from a deck failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DeckError {
    /// Every card has already been dealt.
    #[display("Deck is empty")]
    Empty,
    /// The requested card has already left the deck.
    #[display("{} has already been dealt", _0)]
    Dealt(Card),
}

impl std::error::Error for DeckError {}

/// The 52 canonical cards still undealt this round.
///
/// Cards only ever leave the deck; a new round starts from a new deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// A full deck, suit by suit.
    #[instrument]
    pub fn new() -> Self {
        let cards: Vec<_> = Suit::iter()
            .flat_map(|suit| Rank::iter().map(move |rank| Card::new(suit, rank)))
            .collect();
        debug!(count = cards.len(), "Built deck");
        Self { cards }
    }

    /// Removes and returns a uniformly chosen card.
    ///
    /// # Errors
    ///
    /// [`DeckError::Empty`] when no cards remain. A round draws at most a
    /// couple of dozen cards, so hitting this means the caller broke the
    /// round contract.
    #[instrument(skip(self, rng), fields(remaining = self.cards.len()))]
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            error!("Draw from empty deck");
            return Err(DeckError::Empty);
        }
        let index = rng.gen_range(0..self.cards.len());
        Ok(self.cards.swap_remove(index))
    }

    /// Removes `card` itself, for dealing a known sequence.
    ///
    /// # Errors
    ///
    /// [`DeckError::Dealt`] when `card` is no longer in the deck.
    #[instrument(skip(self), fields(remaining = self.cards.len()))]
    pub fn take(&mut self, card: Card) -> Result<Card, DeckError> {
        let index = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(DeckError::Dealt(card))?;
        Ok(self.cards.swap_remove(index))
    }

    /// Cards left to draw.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Undealt cards, in no particular order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Whether `card` is still undealt.
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
