use super::Player;
use crate::error::{Result, SimError};
use crate::stats;
use serde::{Deserialize, Serialize};

/// Maximum squad size. Enforced at insertion time; the engine itself never
/// grows or shrinks a squad.
pub const MAX_PLAYERS: usize = 11;

/// A squad in batting order plus its live innings totals.
///
/// `total_runs` always equals the sum of the squad's individual runs, and
/// `total_balls` the sum of balls faced; both are advanced together with the
/// player counters on every delivery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub name: String,
    pub players: Vec<Player>,
    #[serde(default)]
    pub total_runs: u32,
    #[serde(default)]
    pub total_wickets: u32,
    #[serde(default)]
    pub total_balls: u32,
    #[serde(default)]
    pub current_run_rate: f32,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
            total_runs: 0,
            total_wickets: 0,
            total_balls: 0,
            current_run_rate: 0.0,
        }
    }

    pub fn with_players(name: impl Into<String>, players: Vec<Player>) -> Result<Self> {
        let mut team = Self::new(name);
        for player in players {
            team.add_player(player)?;
        }
        Ok(team)
    }

    /// Append a player to the batting order, rejecting oversize squads.
    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if self.players.len() >= MAX_PLAYERS {
            return Err(SimError::SquadFull { team: self.name.clone(), max: MAX_PLAYERS });
        }
        self.players.push(player);
        Ok(())
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn bowler_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_bowler).count()
    }

    /// Indices of bowler-capable players, in batting order. The rotation
    /// walks this list round-robin.
    pub fn bowler_indices(&self) -> Vec<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_bowler)
            .map(|(i, _)| i)
            .collect()
    }

    /// Zero team totals and every player's counters for a fresh match.
    pub fn reset_for_match(&mut self) {
        self.total_runs = 0;
        self.total_wickets = 0;
        self.total_balls = 0;
        self.current_run_rate = 0.0;
        for player in &mut self.players {
            player.reset_for_match();
        }
    }

    /// Advance the innings totals by one legal delivery worth `runs`.
    pub fn record_ball(&mut self, runs: u32) {
        self.total_runs += runs;
        self.total_balls += 1;
        self.current_run_rate = stats::run_rate(self.total_runs, self.total_balls);
    }

    pub fn record_wicket(&mut self) {
        self.total_wickets += 1;
    }

    /// Overs faced as (completed overs, balls into the current over).
    pub fn overs_display(&self) -> (u32, u32) {
        (self.total_balls / 6, self.total_balls % 6)
    }

    /// Scorecard rows: batters who actually faced a delivery.
    pub fn batting_card(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.balls_faced > 0).collect()
    }

    /// Scorecard rows: bowlers who actually bowled.
    pub fn bowling_card(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_bowler && p.balls_bowled > 0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squad(names: &[(&str, bool)]) -> Team {
        let players = names
            .iter()
            .map(|(name, bowls)| {
                if *bowls {
                    Player::bowler(*name)
                } else {
                    Player::new(*name)
                }
            })
            .collect();
        Team::with_players("Test XI", players).unwrap()
    }

    #[test]
    fn test_squad_capacity_enforced() {
        let mut team = Team::new("Test XI");
        for i in 0..MAX_PLAYERS {
            team.add_player(Player::new(format!("Player {}", i + 1))).unwrap();
        }
        let err = team.add_player(Player::new("One Too Many")).unwrap_err();
        assert!(matches!(err, SimError::SquadFull { max: MAX_PLAYERS, .. }));
        assert_eq!(team.player_count(), MAX_PLAYERS);
    }

    #[test]
    fn test_bowler_indices_follow_batting_order() {
        let team = squad(&[("A", false), ("B", true), ("C", false), ("D", true), ("E", true)]);
        assert_eq!(team.bowler_count(), 3);
        assert_eq!(team.bowler_indices(), vec![1, 3, 4]);
    }

    #[test]
    fn test_record_ball_tracks_run_rate() {
        let mut team = squad(&[("A", false), ("B", true)]);
        team.record_ball(4);
        team.record_ball(0);
        team.record_ball(2);

        assert_eq!(team.total_runs, 6);
        assert_eq!(team.total_balls, 3);
        // 6 runs off half a decimal over = 12 runs per over
        assert!((team.current_run_rate - 12.0).abs() < 1e-5);
    }

    #[test]
    fn test_overs_display() {
        let mut team = squad(&[("A", false)]);
        for _ in 0..8 {
            team.record_ball(1);
        }
        assert_eq!(team.overs_display(), (1, 2));
    }

    #[test]
    fn test_scorecards_select_participants_only() {
        let mut team = squad(&[("A", false), ("B", true), ("C", true)]);
        team.players[0].record_ball_faced(4);
        team.players[1].record_ball_bowled(2);

        let batting: Vec<&str> = team.batting_card().iter().map(|p| p.name.as_str()).collect();
        let bowling: Vec<&str> = team.bowling_card().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(batting, vec!["A"]);
        assert_eq!(bowling, vec!["B"]);
    }

    #[test]
    fn test_reset_clears_totals_and_players() {
        let mut team = squad(&[("A", false), ("B", true)]);
        team.players[0].record_ball_faced(6);
        team.record_ball(6);
        team.record_wicket();

        team.reset_for_match();

        assert_eq!(team.total_runs, 0);
        assert_eq!(team.total_wickets, 0);
        assert_eq!(team.total_balls, 0);
        assert_eq!(team.current_run_rate, 0.0);
        assert_eq!(team.players[0].runs, 0);
    }
}
