//! Playing cards.

use serde::{Deserialize, Serialize};

/// Card suit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Suit {
    /// Hearts
    Hearts,
    /// Clubs
    Clubs,
    /// Diamonds
    Diamonds,
    /// Spades
    Spades,
}

/// Card rank, two through ace.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Rank {
    /// 2
    #[display("2")]
    Two,
    /// 3
    #[display("3")]
    Three,
    /// 4
    #[display("4")]
    Four,
    /// 5
    #[display("5")]
    Five,
    /// 6
    #[display("6")]
    Six,
    /// 7
    #[display("7")]
    Seven,
    /// 8
    #[display("8")]
    Eight,
    /// 9
    #[display("9")]
    Nine,
    /// 10
    #[display("10")]
    Ten,
    /// Jack (10 points)
    Jack,
    /// Queen (10 points)
    Queen,
    /// King (10 points)
    King,
    /// Ace (1 point, or the soft bonus; see [`crate::total`])
    Ace,
}

impl Rank {
    /// Base point value: number cards count their rank, faces 10, ace 1.
    pub fn value(self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 1,
        }
    }

    /// Whether this is an ace.
    pub fn is_ace(self) -> bool {
        self == Rank::Ace
    }
}

/// An immutable playing card.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("{rank} of {suit}")]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// The card's suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// The card's rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}
