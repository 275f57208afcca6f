//! A participant's hand.

use super::card::Card;
use super::deck::{Deck, DeckError};
use super::scoring;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, instrument};

/// Cards held by one participant, in the order they were drawn.
///
/// A hand starts empty and only ever receives cards taken out of a [`Deck`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// An empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws one card from `deck` into this hand.
    ///
    /// # Errors
    ///
    /// Propagates [`DeckError::Empty`].
    #[instrument(skip_all)]
    pub fn draw_from<R: Rng + ?Sized>(
        &mut self,
        deck: &mut Deck,
        rng: &mut R,
    ) -> Result<Card, DeckError> {
        let card = deck.draw(rng)?;
        self.cards.push(card);
        debug!(%card, total = self.total(), "Card drawn");
        Ok(card)
    }

    /// Moves the named `card` from `deck` into this hand.
    ///
    /// # Errors
    ///
    /// Propagates [`DeckError::Dealt`].
    #[instrument(skip(self, deck))]
    pub fn take_from(&mut self, deck: &mut Deck, card: Card) -> Result<Card, DeckError> {
        let card = deck.take(card)?;
        self.cards.push(card);
        debug!(%card, total = self.total(), "Card taken");
        Ok(card)
    }

    /// Cards in draw order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards held.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// No cards held.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Best total; see [`scoring::total`].
    pub fn total(&self) -> u32 {
        scoring::total(&self.cards)
    }

    /// Whether an ace is being counted high.
    pub fn is_soft(&self) -> bool {
        scoring::is_soft(&self.cards)
    }

    /// Total over 21.
    pub fn is_bust(&self) -> bool {
        scoring::is_bust(&self.cards)
    }
}
