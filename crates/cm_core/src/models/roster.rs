//! JSON roster format handed in by the roster provider.
//!
//! The provider owns squad editing; the engine only receives the finished
//! lineups. Example document:
//!
//! ```json
//! {
//!   "team_a": { "name": "OMOR EKUSHEY HALL",
//!               "players": [ { "name": "A. Rahman", "bowler": true } ] },
//!   "team_b": { "name": "SHAHID SMRITY HALL",
//!               "players": [ { "name": "S. Ahmed" } ] }
//! }
//! ```

use super::{Player, Team};
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub name: String,
    #[serde(default)]
    pub bowler: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterTeam {
    pub name: String,
    pub players: Vec<RosterPlayer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub team_a: RosterTeam,
    pub team_b: RosterTeam,
}

impl Roster {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the two match squads. Capacity is enforced here, at the roster
    /// boundary.
    pub fn into_teams(self) -> Result<(Team, Team)> {
        let team_a = build_team(self.team_a)?;
        let team_b = build_team(self.team_b)?;
        Ok((team_a, team_b))
    }
}

fn build_team(side: RosterTeam) -> Result<Team> {
    let mut team = Team::new(side.name);
    for entry in side.players {
        let mut player = Player::new(entry.name);
        player.is_bowler = entry.bowler;
        team.add_player(player)?;
    }
    Ok(team)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_parses_with_default_bowler_flag() {
        let json = r#"{
            "team_a": { "name": "Alpha", "players": [
                { "name": "A1", "bowler": true },
                { "name": "A2" }
            ]},
            "team_b": { "name": "Beta", "players": [
                { "name": "B1" },
                { "name": "B2", "bowler": true }
            ]}
        }"#;

        let roster = Roster::from_json(json).unwrap();
        let (team_a, team_b) = roster.into_teams().unwrap();

        assert_eq!(team_a.name, "Alpha");
        assert!(team_a.players[0].is_bowler);
        assert!(!team_a.players[1].is_bowler);
        assert_eq!(team_b.bowler_count(), 1);
    }

    #[test]
    fn test_oversize_roster_rejected() {
        let players: Vec<RosterPlayer> = (0..12)
            .map(|i| RosterPlayer { name: format!("P{}", i), bowler: false })
            .collect();
        let roster = Roster {
            team_a: RosterTeam { name: "Alpha".to_string(), players },
            team_b: RosterTeam { name: "Beta".to_string(), players: Vec::new() },
        };
        assert!(roster.into_teams().is_err());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = Roster::from_json("{ not json").unwrap_err();
        assert!(matches!(err, crate::error::SimError::RosterParse(_)));
    }
}
