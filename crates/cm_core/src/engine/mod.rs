//! Match simulation engine.
//!
//! The engine is layered the same way the match plays out:
//!
//! - `rng`: injected random source; every draw flows through it.
//! - `match_state`: the owned state aggregate: both squads, innings
//!   flags, striker and rotation indices, target, config.
//! - `ball`: advances the state by exactly one delivery.
//! - `innings`: `MatchEngine` with step/auto-complete driving modes and
//!   the end-of-innings checks after every ball.
//! - `result`: winner, margin and man-of-the-match, derived once from
//!   the final state.
//!
//! Single-threaded and fully synchronous: the driver decides when the next
//! ball happens, and the state is valid to display at every ball boundary.

pub mod ball;
pub mod innings;
pub mod match_state;
pub mod result;
pub mod rng;

pub use ball::BallOutcome;
pub use innings::MatchEngine;
pub use match_state::{MatchState, MIN_BOWLERS, MIN_SQUAD};
pub use result::performer_score;
pub use rng::{RandomSource, SeededRandom};
