//! Yes/no questions asked between rounds.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A question the session puts to the human between rounds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Question {
    /// Start another round?
    #[display("Would you like to play again?")]
    PlayAgain,
    /// Take the first move of the next round?
    #[display("Would you like to go first?")]
    GoFirst,
}

/// A yes/no reply.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Answer {
    /// `y` or `yes`.
    #[display("y")]
    Yes,
    /// `n` or `no`.
    #[display("n")]
    No,
}

impl Answer {
    /// True for [`Answer::Yes`].
    pub fn is_yes(self) -> bool {
        self == Answer::Yes
    }
}

impl From<bool> for Answer {
    fn from(yes: bool) -> Self {
        if yes { Answer::Yes } else { Answer::No }
    }
}

/// Text that is neither yes nor no.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum AnswerError {
    /// Anything other than `y`, `yes`, `n` or `no`.
    #[display("Invalid answer {:?}: must be y or n", _0)]
    InvalidAnswer(String),
}

impl std::error::Error for AnswerError {}

impl FromStr for Answer {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(Answer::Yes),
            "n" | "no" => Ok(Answer::No),
            _ => Err(AnswerError::InvalidAnswer(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answers() {
        assert_eq!("y".parse::<Answer>(), Ok(Answer::Yes));
        assert_eq!(" YES\n".parse::<Answer>(), Ok(Answer::Yes));
        assert_eq!("n".parse::<Answer>(), Ok(Answer::No));
        assert_eq!(
            "maybe".parse::<Answer>(),
            Err(AnswerError::InvalidAnswer("maybe".to_string()))
        );
    }

    #[test]
    fn test_from_bool() {
        assert!(Answer::from(true).is_yes());
        assert!(!Answer::from(false).is_yes());
    }
}
