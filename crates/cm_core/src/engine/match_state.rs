use crate::config::MatchConfig;
use crate::engine::rng::RandomSource;
use crate::error::{Result, SimError};
use crate::models::Team;
use serde::{Deserialize, Serialize};

/// Minimum squad size for a match to start.
pub const MIN_SQUAD: usize = 2;
/// Minimum bowler-capable players per side for a match to start.
pub const MIN_BOWLERS: usize = 2;

/// The whole live match: both squads plus everything that changes between
/// deliveries. Exactly one side bats at any time; during the chase the
/// other side's totals stay frozen as the first-innings score.
///
/// State is consistent at every ball boundary, so a driver can stop
/// requesting deliveries mid-innings and display or resume later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub teams: [Team; 2],
    /// Index into `teams` of the side currently batting.
    pub batting_side: usize,
    pub first_innings: bool,
    pub match_over: bool,
    /// Batting-order index of the batter on strike.
    pub striker: usize,
    /// Position within the bowling order; advances round-robin at over
    /// boundaries.
    pub bowler_slot: usize,
    /// Runs the chasing side needs to win; set when the first innings ends.
    pub target: Option<u32>,
    pub config: MatchConfig,
    /// Bowler-capable player indices of the fielding side, in batting
    /// order. Rebuilt at each innings start.
    bowling_order: Vec<usize>,
}

impl MatchState {
    /// Gate a match start: both squads need enough players and bowlers.
    /// Nothing is mutated on failure.
    pub fn check_eligibility(team: &Team) -> Result<()> {
        if team.player_count() < MIN_SQUAD {
            return Err(SimError::NotEnoughPlayers {
                team: team.name.clone(),
                required: MIN_SQUAD,
                found: team.player_count(),
            });
        }
        if team.bowler_count() < MIN_BOWLERS {
            return Err(SimError::NotEnoughBowlers {
                team: team.name.clone(),
                required: MIN_BOWLERS,
                found: team.bowler_count(),
            });
        }
        Ok(())
    }

    pub fn new(team_a: Team, team_b: Team, config: MatchConfig) -> Result<Self> {
        Self::check_eligibility(&team_a)?;
        Self::check_eligibility(&team_b)?;
        Ok(Self {
            teams: [team_a, team_b],
            batting_side: 0,
            first_innings: true,
            match_over: false,
            striker: 0,
            bowler_slot: 0,
            target: None,
            config,
            bowling_order: Vec::new(),
        })
    }

    /// Toss and fresh start: pick who bats first, zero every counter on
    /// both sides, and derive the opening bowling order.
    pub fn start(&mut self, rng: &mut dyn RandomSource) {
        self.batting_side = rng.uniform(2) as usize;
        self.first_innings = true;
        self.match_over = false;
        self.striker = 0;
        self.bowler_slot = 0;
        self.target = None;
        for team in &mut self.teams {
            team.reset_for_match();
        }
        self.rebuild_bowling_order();
        log::info!("toss: {} will bat first", self.batting_team().name);
    }

    pub fn bowling_side(&self) -> usize {
        1 - self.batting_side
    }

    pub fn batting_team(&self) -> &Team {
        &self.teams[self.batting_side]
    }

    pub fn batting_team_mut(&mut self) -> &mut Team {
        &mut self.teams[self.batting_side]
    }

    pub fn bowling_team(&self) -> &Team {
        &self.teams[self.bowling_side()]
    }

    pub fn bowling_team_mut(&mut self) -> &mut Team {
        let side = self.bowling_side();
        &mut self.teams[side]
    }

    pub fn bowling_order(&self) -> &[usize] {
        &self.bowling_order
    }

    /// Squad index of the bowler currently on, or `None` when the fielding
    /// side has no bowlers (unreachable after the eligibility gate).
    pub fn current_bowler_index(&self) -> Option<usize> {
        self.bowling_order.get(self.bowler_slot).copied()
    }

    pub(crate) fn advance_bowler_slot(&mut self) {
        if !self.bowling_order.is_empty() {
            self.bowler_slot = (self.bowler_slot + 1) % self.bowling_order.len();
        }
    }

    fn rebuild_bowling_order(&mut self) {
        self.bowling_order = self.bowling_team().bowler_indices();
    }

    /// Swap innings after the first one closes. The side that just batted
    /// keeps its figures as the score to beat; the new batting side's
    /// counters are already zero from the pre-match reset.
    pub(crate) fn begin_second_innings(&mut self) {
        let first_innings_total = self.batting_team().total_runs;
        self.target = Some(first_innings_total + 1);
        self.batting_side = self.bowling_side();
        self.first_innings = false;
        self.striker = 0;
        self.bowler_slot = 0;
        self.rebuild_bowling_order();
        log::info!(
            "first innings complete: {} set a target of {}",
            self.bowling_team().name,
            first_innings_total + 1
        );
    }
}
