//! The dealer's fixed threshold policy.
//!
//! The dealer ignores the player's hand entirely: it draws while its total is
//! under the threshold and stands once it reaches it, even when standing on
//! a total the player already beats.

use super::hand::Hand;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Default stand threshold.
pub const DEFAULT_STAND_ON: u32 = 17;

/// What the dealer does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerAction {
    /// Draw another card.
    Hit,
    /// Stop drawing.
    Stand,
}

/// Where the dealer's turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerState {
    /// Under the threshold; will draw.
    Drawing,
    /// At or over the threshold without busting.
    Standing,
    /// Over 21.
    Bust,
}

/// Draw below `stand_on`, stand at or above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerPolicy {
    stand_on: u32,
}

impl DealerPolicy {
    /// Policy standing on `stand_on`.
    pub fn new(stand_on: u32) -> Self {
        Self { stand_on }
    }

    /// The stand threshold.
    pub fn stand_on(&self) -> u32 {
        self.stand_on
    }

    /// State of the dealer's turn for `hand`.
    pub fn state(&self, hand: &Hand) -> DealerState {
        if hand.is_bust() {
            DealerState::Bust
        } else if hand.total() >= self.stand_on {
            DealerState::Standing
        } else {
            DealerState::Drawing
        }
    }

    /// Next action for `hand`.
    #[instrument(skip(self, hand), fields(total = hand.total(), stand_on = self.stand_on))]
    pub fn decide(&self, hand: &Hand) -> DealerAction {
        let action = match self.state(hand) {
            DealerState::Drawing => DealerAction::Hit,
            DealerState::Standing | DealerState::Bust => DealerAction::Stand,
        };
        debug!(?action, "Dealer decided");
        action
    }
}

impl Default for DealerPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_STAND_ON)
    }
}
