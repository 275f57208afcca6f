//! Hand totals.
//!
//! Aces count 1 each. When the hand can afford it, one ace is promoted to 11
//! (a +10 bonus), which makes the total "soft". With `n` aces and a non-ace
//! sum `s` that gives `s + 10 + n` when that stays at or under 21, and
//! `s + n` otherwise. The same rule covers any number of aces.

use super::card::Card;
use tracing::instrument;

/// The target total; anything above busts.
pub const TWENTY_ONE: u32 = 21;

const SOFT_BONUS: u32 = 10;

/// Splits a hand into (ace count, sum of non-ace values).
fn split(cards: &[Card]) -> (u32, u32) {
    cards.iter().fold((0, 0), |(aces, sum), card| {
        if card.rank().is_ace() {
            (aces + 1, sum)
        } else {
            (aces, sum + card.rank().value())
        }
    })
}

/// The soft total, if the hand has an ace and the bonus does not bust it.
fn soft_total(aces: u32, sum: u32) -> Option<u32> {
    let soft = sum + SOFT_BONUS + aces;
    (aces > 0 && soft <= TWENTY_ONE).then_some(soft)
}

/// Best total for `cards`.
#[instrument(skip(cards), fields(cards = cards.len()))]
pub fn total(cards: &[Card]) -> u32 {
    let (aces, sum) = split(cards);
    soft_total(aces, sum).unwrap_or(sum + aces)
}

/// Whether an ace is counted as 11 in [`total`].
pub fn is_soft(cards: &[Card]) -> bool {
    let (aces, sum) = split(cards);
    soft_total(aces, sum).is_some()
}

/// Total over 21.
pub fn is_bust(cards: &[Card]) -> bool {
    total(cards) > TWENTY_ONE
}
