//! Innings control on top of the ball engine.
//!
//! `MatchEngine` owns the state and the random source, drives one delivery
//! at a time, and runs the end-of-innings bookkeeping after every ball.
//! The chase can close an innings mid-over, so the checks never wait for
//! an over boundary.

use crate::config::MatchConfig;
use crate::engine::ball::{self, BallOutcome};
use crate::engine::match_state::MatchState;
use crate::engine::result;
use crate::engine::rng::{RandomSource, SeededRandom};
use crate::error::Result;
use crate::models::{MatchResult, Team};

pub struct MatchEngine {
    state: MatchState,
    rng: Box<dyn RandomSource>,
    result: Option<MatchResult>,
}

impl MatchEngine {
    /// Gate eligibility, toss, reset both sides and start the match with a
    /// seeded random source.
    pub fn new(team_a: Team, team_b: Team, config: MatchConfig, seed: u64) -> Result<Self> {
        Self::with_random_source(team_a, team_b, config, Box::new(SeededRandom::from_seed(seed)))
    }

    /// Same as [`MatchEngine::new`] with a caller-supplied random source.
    pub fn with_random_source(
        team_a: Team,
        team_b: Team,
        config: MatchConfig,
        mut rng: Box<dyn RandomSource>,
    ) -> Result<Self> {
        let mut state = MatchState::new(team_a, team_b, config)?;
        state.start(rng.as_mut());
        Ok(Self { state, rng, result: None })
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.match_over
    }

    /// The final report, present once the match is over. Evaluated exactly
    /// once and immutable afterwards.
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Bowl one ball and run the end-of-innings checks. `Ok(None)` when
    /// there is nothing left to bowl.
    pub fn step(&mut self) -> Result<Option<BallOutcome>> {
        match ball::simulate_ball(&mut self.state, self.rng.as_mut())? {
            None => Ok(None),
            Some(mut outcome) => {
                self.check_innings_end(&mut outcome);
                Ok(Some(outcome))
            }
        }
    }

    /// Bowl until the match is decided. Stops early only if a step reports
    /// nothing left to bowl, so a zero-over config cannot spin forever.
    pub fn auto_complete(&mut self) -> Result<()> {
        while !self.state.match_over {
            if self.step()?.is_none() {
                break;
            }
        }
        Ok(())
    }

    /// End-of-ball bookkeeping. An innings closes on a spent ball quota,
    /// on all-out (last man stands: the final batter is never dismissed
    /// alone), or, during the chase only, the moment the target falls.
    fn check_innings_end(&mut self, outcome: &mut BallOutcome) {
        let batting = self.state.batting_team();
        let quota_spent = batting.total_balls >= self.state.config.balls_per_innings();
        let all_out = batting.total_wickets >= batting.player_count() as u32 - 1;
        let target_reached = !self.state.first_innings
            && batting.total_runs > self.state.bowling_team().total_runs;

        if !(quota_spent || all_out || target_reached) {
            return;
        }

        outcome.innings_complete = true;
        if self.state.first_innings {
            self.state.begin_second_innings();
        } else {
            self.state.match_over = true;
            outcome.match_complete = true;
            let result = result::evaluate(&self.state);
            match &result.winner {
                Some(winner) => log::info!("match over: {} win", winner),
                None => log::info!("match over: tied"),
            }
            self.result = Some(result);
        }
    }
}
