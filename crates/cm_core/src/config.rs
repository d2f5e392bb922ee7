use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OVERS: u32 = 3;
pub const DEFAULT_WICKET_PROBABILITY: f32 = 0.15;

/// Per-match settings, supplied once before the match starts and fixed for
/// its duration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Length of each innings in overs.
    pub overs_limit: u32,
    /// Chance of a wicket on any delivery, in `0.0..=1.0`.
    pub wicket_probability: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { overs_limit: DEFAULT_OVERS, wicket_probability: DEFAULT_WICKET_PROBABILITY }
    }
}

impl MatchConfig {
    pub fn new(overs_limit: u32, wicket_probability: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&wicket_probability) {
            return Err(SimError::InvalidWicketProbability(wicket_probability));
        }
        Ok(Self { overs_limit, wicket_probability })
    }

    /// Legal deliveries available to each side.
    pub fn balls_per_innings(&self) -> u32 {
        self.overs_limit * 6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.overs_limit, 3);
        assert!((config.wicket_probability - 0.15).abs() < f32::EPSILON);
        assert_eq!(config.balls_per_innings(), 18);
    }

    #[test]
    fn test_wicket_probability_bounds() {
        assert!(MatchConfig::new(3, 0.0).is_ok());
        assert!(MatchConfig::new(3, 1.0).is_ok());
        assert!(MatchConfig::new(3, -0.01).is_err());
        assert!(MatchConfig::new(3, 1.01).is_err());
    }
}
