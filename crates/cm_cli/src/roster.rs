//! Roster provision: built-in squads or a JSON roster file.
//!
//! The engine never edits squads; whatever comes out of here is the
//! lineup for the whole match.

use anyhow::{Context, Result};
use cm_core::{Player, Roster, Team};
use std::path::Path;

pub fn load(path: &Path) -> Result<(Team, Team)> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading roster {}", path.display()))?;
    let roster = Roster::from_json(&json)
        .with_context(|| format!("parsing roster {}", path.display()))?;
    Ok(roster.into_teams()?)
}

/// The two house squads, ready to play with no setup.
pub fn default_squads() -> (Team, Team) {
    let team_a = build(
        "OMOR EKUSHEY HALL",
        &[
            ("T. Alam", false),
            ("S. Chowdhury", false),
            ("M. Karim", false),
            ("J. Uddin", false),
            ("R. Hossain", true),
            ("A. Rahman", true),
            ("F. Ahmed", true),
            ("N. Islam", true),
        ],
    );
    let team_b = build(
        "SHAHID SMRITY HALL",
        &[
            ("K. Hasan", false),
            ("S. Mia", false),
            ("B. Sarkar", false),
            ("I. Haque", false),
            ("D. Roy", true),
            ("P. Das", true),
            ("Z. Bhuiyan", true),
            ("E. Mollah", true),
        ],
    );
    (team_a, team_b)
}

fn build(name: &str, entries: &[(&str, bool)]) -> Team {
    let players = entries
        .iter()
        .map(|(player, bowls)| {
            if *bowls {
                Player::bowler(*player)
            } else {
                Player::new(*player)
            }
        })
        .collect();
    Team::with_players(name, players).expect("built-in squads fit the capacity")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cm_core::engine::MatchState;

    #[test]
    fn test_default_squads_are_match_eligible() {
        let (team_a, team_b) = default_squads();
        assert!(MatchState::check_eligibility(&team_a).is_ok());
        assert!(MatchState::check_eligibility(&team_b).is_ok());
        assert_ne!(team_a.name, team_b.name);
    }

    #[test]
    fn test_load_round_trips_a_written_roster() {
        let (team_a, team_b) = default_squads();
        let roster = Roster {
            team_a: cm_core::models::RosterTeam {
                name: team_a.name.clone(),
                players: team_a
                    .players
                    .iter()
                    .map(|p| cm_core::models::RosterPlayer {
                        name: p.name.clone(),
                        bowler: p.is_bowler,
                    })
                    .collect(),
            },
            team_b: cm_core::models::RosterTeam {
                name: team_b.name.clone(),
                players: team_b
                    .players
                    .iter()
                    .map(|p| cm_core::models::RosterPlayer {
                        name: p.name.clone(),
                        bowler: p.is_bowler,
                    })
                    .collect(),
            },
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        std::fs::write(&path, roster.to_json().unwrap()).unwrap();

        let (loaded_a, loaded_b) = load(&path).unwrap();
        assert_eq!(loaded_a, team_a);
        assert_eq!(loaded_b, team_b);
    }

    #[test]
    fn test_load_reports_missing_file() {
        assert!(load(Path::new("does-not-exist.json")).is_err());
    }
}
