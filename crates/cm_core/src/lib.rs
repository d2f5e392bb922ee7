//! # cm_core - Deterministic Cricket Match Simulation Engine
//!
//! Ball-by-ball simulation of a two-team limited-overs cricket match:
//! batting/bowling rotation, innings and match end detection, running
//! statistics, and the final result with a man-of-the-match award.
//!
//! ## Features
//! - 100% deterministic simulation (same rosters + config + seed = same result)
//! - Driver-paced: single-ball stepping or auto-completion
//! - State consistent and displayable at every ball boundary
//! - Serde-serializable models for rosters, state and results

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod stats;

// Re-export the main simulation surface
pub use config::{MatchConfig, DEFAULT_OVERS, DEFAULT_WICKET_PROBABILITY};
pub use engine::{BallOutcome, MatchEngine, MatchState, RandomSource, SeededRandom};
pub use error::{Result, SimError};
pub use models::{
    BestPerformer, Margin, MarginUnit, MatchResult, Player, Roster, Team, TeamScore,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
