//! One delivery of the match.
//!
//! `simulate_ball` advances the state by exactly one legal ball: outcome
//! draw, batter/bowler/team bookkeeping, dismissal handling and bowler
//! rotation. It either applies the whole delivery or nothing: the only
//! failure point (no bowler on the fielding side) is resolved before any
//! counter moves.

use crate::engine::match_state::MatchState;
use crate::engine::rng::RandomSource;
use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};

/// Distinct run outcomes per delivery: 0..=6.
const RUN_OUTCOMES: u32 = 7;
/// A wicket caps the runs off that ball to 0..=2.
const WICKET_RUN_OUTCOMES: u32 = 3;

/// What happened on one delivery, for the display sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BallOutcome {
    pub runs: u32,
    pub wicket: bool,
    pub batter: String,
    pub bowler: String,
    /// Batting side's score line after the ball.
    pub team_runs: u32,
    pub team_wickets: u32,
    pub team_balls: u32,
    /// Filled in by the innings controller after its end-of-ball checks.
    pub innings_complete: bool,
    pub match_complete: bool,
}

impl BallOutcome {
    /// Overs faced as (completed overs, balls into the current over).
    pub fn overs_display(&self) -> (u32, u32) {
        (self.team_balls / 6, self.team_balls % 6)
    }
}

/// Bowl one ball. A no-op (`Ok(None)`) when the match is already over or
/// the batting side's ball quota is spent.
pub fn simulate_ball(
    state: &mut MatchState,
    rng: &mut dyn RandomSource,
) -> Result<Option<BallOutcome>> {
    if state.match_over || state.batting_team().total_balls >= state.config.balls_per_innings() {
        return Ok(None);
    }

    // A dismissal advances the striker index past the end of the order
    // before the all-out check can fire; wrap back to the top.
    if state.striker >= state.batting_team().player_count() {
        state.striker = 0;
    }

    // Resolve the bowler before mutating anything.
    let bowler_idx = state.current_bowler_index().ok_or_else(|| SimError::NoBowlerAvailable {
        team: state.bowling_team().name.clone(),
    })?;

    let mut runs = rng.uniform(RUN_OUTCOMES);
    let wicket = rng.chance(state.config.wicket_probability);
    if wicket && runs > 2 {
        // Single redraw, never resampled further.
        runs = rng.uniform(WICKET_RUN_OUTCOMES);
    }

    let striker_idx = state.striker;
    let batting = state.batting_team_mut();
    batting.players[striker_idx].record_ball_faced(runs);
    batting.record_ball(runs);
    if wicket {
        batting.players[striker_idx].record_dismissal();
        batting.record_wicket();
    }
    let batter = batting.players[striker_idx].name.clone();
    let (team_runs, team_wickets, team_balls) =
        (batting.total_runs, batting.total_wickets, batting.total_balls);

    let bowling = state.bowling_team_mut();
    bowling.players[bowler_idx].record_ball_bowled(runs);
    if wicket {
        bowling.players[bowler_idx].record_wicket_taken();
    }
    let bowler = bowling.players[bowler_idx].name.clone();
    let over_complete = bowling.players[bowler_idx].balls_bowled % 6 == 0;

    if wicket {
        // Next batter in, sequentially down the order.
        state.striker += 1;
    }
    if over_complete {
        state.advance_bowler_slot();
    }

    log::debug!(
        "{} to {}: {} run(s){}",
        bowler,
        batter,
        runs,
        if wicket { ", WICKET" } else { "" }
    );

    Ok(Some(BallOutcome {
        runs,
        wicket,
        batter,
        bowler,
        team_runs,
        team_wickets,
        team_balls,
        innings_complete: false,
        match_complete: false,
    }))
}
