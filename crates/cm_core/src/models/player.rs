use crate::stats;
use serde::{Deserialize, Serialize};

/// One squad member with cumulative batting and bowling figures.
///
/// Derived rates (`strike_rate`, `overs`, `economy`) are always recomputed
/// from their source counters after a recording call; they are never set
/// independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub name: String,
    /// Whether this player can be handed the ball.
    #[serde(default)]
    pub is_bowler: bool,

    // Batting
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub balls_faced: u32,
    #[serde(default)]
    pub fours: u32,
    #[serde(default)]
    pub sixes: u32,
    #[serde(default)]
    pub is_out: bool,
    #[serde(default)]
    pub strike_rate: f32,

    // Bowling
    #[serde(default)]
    pub balls_bowled: u32,
    #[serde(default)]
    pub runs_conceded: u32,
    #[serde(default)]
    pub wickets: u32,
    #[serde(default)]
    pub overs: f32,
    #[serde(default)]
    pub economy: f32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_bowler: false,
            runs: 0,
            balls_faced: 0,
            fours: 0,
            sixes: 0,
            is_out: false,
            strike_rate: 0.0,
            balls_bowled: 0,
            runs_conceded: 0,
            wickets: 0,
            overs: 0.0,
            economy: 0.0,
        }
    }

    pub fn bowler(name: impl Into<String>) -> Self {
        let mut player = Self::new(name);
        player.is_bowler = true;
        player
    }

    /// Zero every counter for a fresh match. The name and bowler flag are
    /// roster properties and survive.
    pub fn reset_for_match(&mut self) {
        self.runs = 0;
        self.balls_faced = 0;
        self.fours = 0;
        self.sixes = 0;
        self.is_out = false;
        self.strike_rate = 0.0;
        self.balls_bowled = 0;
        self.runs_conceded = 0;
        self.wickets = 0;
        self.overs = 0.0;
        self.economy = 0.0;
    }

    /// Credit a delivery faced for `runs` runs.
    pub fn record_ball_faced(&mut self, runs: u32) {
        self.runs += runs;
        self.balls_faced += 1;
        if runs == 4 {
            self.fours += 1;
        }
        if runs == 6 {
            self.sixes += 1;
        }
        self.strike_rate = stats::strike_rate(self.runs, self.balls_faced);
    }

    /// Charge a delivery bowled for `runs` conceded.
    pub fn record_ball_bowled(&mut self, runs: u32) {
        self.runs_conceded += runs;
        self.balls_bowled += 1;
        self.overs = stats::overs_from_balls(self.balls_bowled);
        self.economy = stats::economy_rate(self.runs_conceded, self.overs);
    }

    pub fn record_dismissal(&mut self) {
        self.is_out = true;
    }

    pub fn record_wicket_taken(&mut self) {
        self.wickets += 1;
    }
}
