//! Rate calculations shared by the engine and the scorecards.
//!
//! Bowling figures use cricket's overs notation: `1.3` means one over and
//! three balls, not 1.3 decimal overs. `overs_from_balls` produces that
//! notation; `run_rate` is the only place decimal overs are used, for the
//! team aggregate figure.

/// Runs per hundred balls faced. Zero until the batter has faced a ball.
pub fn strike_rate(runs: u32, balls_faced: u32) -> f32 {
    if balls_faced == 0 {
        return 0.0;
    }
    runs as f32 * 100.0 / balls_faced as f32
}

/// Balls bowled expressed as whole overs plus balls-in-tenths (9 balls -> 1.3).
pub fn overs_from_balls(balls: u32) -> f32 {
    (balls / 6) as f32 + (balls % 6) as f32 / 10.0
}

/// Runs conceded per over, with `overs` in the notation `overs_from_balls`
/// produces. Zero until the bowler has bowled.
pub fn economy_rate(runs_conceded: u32, overs: f32) -> f32 {
    if overs <= 0.0 {
        return 0.0;
    }
    runs_conceded as f32 / overs
}

/// Team run rate over decimal overs (`total_balls / 6`).
pub fn run_rate(total_runs: u32, total_balls: u32) -> f32 {
    if total_balls == 0 {
        return 0.0;
    }
    total_runs as f32 / (total_balls as f32 / 6.0)
}
