//! Points across rounds and the match threshold.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Which side a point goes to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Side {
    /// The person playing.
    #[display("human")]
    Human,
    /// The computer opponent (agent or dealer).
    #[display("computer")]
    Computer,
}

/// Game-independent outcome tag of a finished round.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "camelCase")]
pub enum OutcomeTag {
    /// The human won.
    #[display("humanWin")]
    HumanWin,
    /// The computer won.
    #[display("agentWin")]
    AgentWin,
    /// Nobody won.
    #[display("tie")]
    Tie,
    /// The human went over 21.
    #[display("bust")]
    Bust,
}

impl OutcomeTag {
    /// The side this outcome awards a point to, if any.
    pub fn point(self) -> Option<Side> {
        match self {
            OutcomeTag::HumanWin => Some(Side::Human),
            OutcomeTag::AgentWin | OutcomeTag::Bust => Some(Side::Computer),
            OutcomeTag::Tie => None,
        }
    }
}

/// A round verdict the scoreboard understands.
pub trait Scored {
    /// The outcome tag of this verdict.
    fn tag(&self) -> OutcomeTag;
}

impl Scored for OutcomeTag {
    fn tag(&self) -> OutcomeTag {
        *self
    }
}

impl Scored for parlor_tictactoe::Verdict {
    fn tag(&self) -> OutcomeTag {
        use parlor_tictactoe::Verdict;
        match self {
            Verdict::HumanWin => OutcomeTag::HumanWin,
            Verdict::AgentWin => OutcomeTag::AgentWin,
            Verdict::Tie => OutcomeTag::Tie,
        }
    }
}

impl Scored for parlor_twentyone::Verdict {
    fn tag(&self) -> OutcomeTag {
        use parlor_twentyone::Verdict;
        match self {
            Verdict::HumanWin => OutcomeTag::HumanWin,
            Verdict::DealerWin => OutcomeTag::AgentWin,
            Verdict::Tie => OutcomeTag::Tie,
            Verdict::HumanBust => OutcomeTag::Bust,
        }
    }
}

/// Read-only copy of the points, for events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_new::new)]
pub struct ScoreSnapshot {
    /// Human points.
    pub human: u32,
    /// Computer points.
    pub computer: u32,
}

/// A match decided by reaching the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Who reached the threshold.
    pub winner: Side,
    /// The points just before the reset.
    pub final_score: ScoreSnapshot,
}

/// Points for each side, reset whenever one side reaches the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    human: u32,
    computer: u32,
    threshold: u32,
}

impl Scoreboard {
    /// Empty scoreboard; a match ends at `threshold` points.
    #[instrument]
    pub fn new(threshold: u32) -> Self {
        Self {
            human: 0,
            computer: 0,
            threshold,
        }
    }

    /// Human points.
    pub fn human(&self) -> u32 {
        self.human
    }

    /// Computer points.
    pub fn computer(&self) -> u32 {
        self.computer
    }

    /// Points needed to win the match.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Current points.
    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot::new(self.human, self.computer)
    }

    /// Awards the point for `verdict`.
    ///
    /// When a side reaches the threshold the match result is returned and
    /// both counts go back to zero.
    #[instrument(skip(self, verdict), fields(tag = %verdict.tag()))]
    pub fn record<V: Scored>(&mut self, verdict: &V) -> Option<MatchResult> {
        let side = verdict.tag().point()?;
        let points = match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        };
        *points += 1;
        debug!(
            human = self.human,
            computer = self.computer,
            "Score updated"
        );

        if self.human.max(self.computer) < self.threshold {
            return None;
        }

        let result = MatchResult {
            winner: side,
            final_score: self.snapshot(),
        };
        info!(winner = %side, human = self.human, computer = self.computer, "Match won");
        self.human = 0;
        self.computer = 0;
        Some(result)
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_scores_nothing() {
        let mut board = Scoreboard::new(2);
        assert_eq!(board.record(&OutcomeTag::Tie), None);
        assert_eq!(board.snapshot(), ScoreSnapshot::new(0, 0));
    }

    #[test]
    fn test_bust_goes_to_computer() {
        let mut board = Scoreboard::new(5);
        board.record(&parlor_twentyone::Verdict::HumanBust);
        assert_eq!(board.computer(), 1);
        assert_eq!(board.human(), 0);
    }

    #[test]
    fn test_threshold_declares_winner_and_resets() {
        let mut board = Scoreboard::new(2);
        assert_eq!(board.record(&parlor_tictactoe::Verdict::HumanWin), None);
        assert_eq!(board.record(&parlor_tictactoe::Verdict::AgentWin), None);
        let result = board.record(&parlor_tictactoe::Verdict::HumanWin);
        assert_eq!(
            result,
            Some(MatchResult {
                winner: Side::Human,
                final_score: ScoreSnapshot::new(2, 1),
            })
        );
        assert_eq!(board.snapshot(), ScoreSnapshot::new(0, 0));
    }

    #[test]
    fn test_tags_serialize_in_camel_case() {
        assert_eq!(
            serde_json::to_string(&OutcomeTag::HumanWin).unwrap(),
            "\"humanWin\""
        );
        assert_eq!(
            serde_json::to_string(&OutcomeTag::Bust).unwrap(),
            "\"bust\""
        );
    }

    #[test]
    fn test_verdict_tags_agree_with_engine_display() {
        assert_eq!(
            parlor_twentyone::Verdict::DealerWin.tag().to_string(),
            parlor_twentyone::Verdict::DealerWin.to_string()
        );
        assert_eq!(
            parlor_tictactoe::Verdict::Tie.tag().to_string(),
            parlor_tictactoe::Verdict::Tie.to_string()
        );
    }
}
