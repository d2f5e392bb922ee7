//! Final-report data produced once a match completes.
//!
//! Everything here is derived from the final `MatchState` and stays
//! immutable afterwards; the display sink and the history recorder both
//! read from this one struct.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a victory margin is expressed: runs for the side defending a total,
/// wickets in hand for the side that chased it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginUnit {
    Runs,
    Wickets,
}

impl fmt::Display for MarginUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginUnit::Runs => write!(f, "RUNS"),
            MarginUnit::Wickets => write!(f, "WICKETS"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub value: u32,
    pub unit: MarginUnit,
}

/// The man-of-the-match line: who, for whom, and the composite score that
/// earned the award.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BestPerformer {
    pub name: String,
    pub team: String,
    pub runs: u32,
    pub wickets: u32,
    pub score: f32,
}

/// One side's final score line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamScore {
    pub team: String,
    pub runs: u32,
    pub wickets: u32,
    pub balls: u32,
}

impl TeamScore {
    pub fn overs_display(&self) -> (u32, u32) {
        (self.balls / 6, self.balls % 6)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    /// Winning team name; `None` on equal totals.
    pub winner: Option<String>,
    /// Victory margin; absent exactly when `winner` is.
    pub margin: Option<Margin>,
    /// Best composite performer, or `None` when nobody scored above zero.
    pub man_of_the_match: Option<BestPerformer>,
    /// Final score lines in batting order: first innings, then the chase.
    pub first_innings: TeamScore,
    pub second_innings: TeamScore,
}

impl MatchResult {
    pub fn is_tie(&self) -> bool {
        self.winner.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_unit_display() {
        assert_eq!(MarginUnit::Runs.to_string(), "RUNS");
        assert_eq!(MarginUnit::Wickets.to_string(), "WICKETS");
    }

    #[test]
    fn test_result_serializes_round_trip() {
        let result = MatchResult {
            winner: Some("Test XI".to_string()),
            margin: Some(Margin { value: 3, unit: MarginUnit::Wickets }),
            man_of_the_match: Some(BestPerformer {
                name: "A. Rahman".to_string(),
                team: "Test XI".to_string(),
                runs: 41,
                wickets: 0,
                score: 74.2,
            }),
            first_innings: TeamScore {
                team: "Other XI".to_string(),
                runs: 40,
                wickets: 4,
                balls: 18,
            },
            second_innings: TeamScore {
                team: "Test XI".to_string(),
                runs: 41,
                wickets: 1,
                balls: 14,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        let back: MatchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
        assert!(!back.is_tie());
        assert_eq!(back.second_innings.overs_display(), (2, 2));
    }
}
