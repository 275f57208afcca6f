//! Pure game logic for 21, a simplified blackjack.
//!
//! - **State**: [`Card`], [`Deck`], [`Hand`]
//! - **Rules**: [`total`], [`is_soft`], [`is_bust`] - ace-aware scoring
//! - **Dealer**: [`DealerPolicy`] - draw under 17, stand at 17 or more
//! - **Round**: [`Round`] - player turn, dealer turn, [`Verdict`]
//!
//! There is no splitting, doubling or betting. The player sees their own
//! hand and the dealer's first card, hits or stands, and the dealer then
//! plays out its fixed policy.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod card;
mod dealer;
mod deck;
mod hand;
mod round;
mod scoring;

pub use card::{Card, Rank, Suit};
pub use dealer::{DEFAULT_STAND_ON, DealerAction, DealerPolicy, DealerState};
pub use deck::{Deck, DeckError};
pub use hand::Hand;
pub use round::{Command, CommandError, Phase, Round, RoundError, Verdict};
pub use scoring::{TWENTY_ONE, is_bust, is_soft, total};
