use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("{team} needs at least {required} players to start a match, found {found}")]
    NotEnoughPlayers { team: String, required: usize, found: usize },

    #[error("{team} needs at least {required} bowlers to start a match, found {found}")]
    NotEnoughBowlers { team: String, required: usize, found: usize },

    #[error("no bowler available in {team}")]
    NoBowlerAvailable { team: String },

    #[error("{team} already has {max} players")]
    SquadFull { team: String, max: usize },

    #[error("wicket probability {0} is outside 0.0..=1.0")]
    InvalidWicketProbability(f32),

    #[error("roster parse error: {0}")]
    RosterParse(#[from] serde_json::Error),
}

impl SimError {
    /// Eligibility failures can be fixed by the caller (edit the roster and
    /// retry); a missing bowler mid-match cannot.
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimError::NotEnoughPlayers { .. } => true,
            SimError::NotEnoughBowlers { .. } => true,
            SimError::SquadFull { .. } => true,
            SimError::InvalidWicketProbability(_) => true,
            SimError::RosterParse(_) => true,
            SimError::NoBowlerAvailable { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility_errors_name_the_team() {
        let err = SimError::NotEnoughBowlers {
            team: "Alpha".to_string(),
            required: 2,
            found: 1,
        };
        let message = err.to_string();
        assert!(message.contains("Alpha"));
        assert!(message.contains("2"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_missing_bowler_is_fatal() {
        let err = SimError::NoBowlerAvailable { team: "Beta".to_string() };
        assert!(!err.is_recoverable());
    }
}
