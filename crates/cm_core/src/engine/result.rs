//! Post-match evaluation: winner, margin, man of the match.
//!
//! Everything here is a pure read of the final state, so a result can
//! always be re-derived and cross-checked against the stored one.

use crate::engine::match_state::MatchState;
use crate::models::{BestPerformer, Margin, MarginUnit, MatchResult, Player, Team, TeamScore};

// Composite-score weights for the man-of-the-match award. Tunables, not
// laws: tune here, nowhere else.
pub const STRIKE_RATE_WEIGHT: f32 = 0.2;
pub const WICKET_WEIGHT: f32 = 25.0;
pub const ECONOMY_WEIGHT: f32 = 2.0;

/// Composite performance score. Batting counts once a ball was faced,
/// bowling once a ball was bowled; an expensive spell can push the bowling
/// term negative.
pub fn performer_score(player: &Player) -> f32 {
    let mut score = 0.0;
    if player.balls_faced > 0 {
        score += player.runs as f32 + player.strike_rate * STRIKE_RATE_WEIGHT;
    }
    if player.is_bowler && player.balls_bowled > 0 {
        score += player.wickets as f32 * WICKET_WEIGHT - player.economy * ECONOMY_WEIGHT;
    }
    score
}

/// Evaluate a completed match. Higher total wins; the defending side wins
/// by runs, the chasing side by wickets in hand; equal totals tie.
pub fn evaluate(state: &MatchState) -> MatchResult {
    // Only one innings swap ever happens, so at match end the batting side
    // is the side that chased.
    let chasing = state.batting_team();
    let defending = state.bowling_team();

    let (winner, margin) = if defending.total_runs > chasing.total_runs {
        let margin = Margin {
            value: defending.total_runs - chasing.total_runs,
            unit: MarginUnit::Runs,
        };
        (Some(defending.name.clone()), Some(margin))
    } else if chasing.total_runs > defending.total_runs {
        let wickets_in_hand =
            (chasing.player_count() as u32 - 1).saturating_sub(chasing.total_wickets);
        let margin = Margin { value: wickets_in_hand, unit: MarginUnit::Wickets };
        (Some(chasing.name.clone()), Some(margin))
    } else {
        (None, None)
    };

    MatchResult {
        winner,
        margin,
        man_of_the_match: best_performer(state),
        first_innings: score_line(defending),
        second_innings: score_line(chasing),
    }
}

fn score_line(team: &Team) -> TeamScore {
    TeamScore {
        team: team.name.clone(),
        runs: team.total_runs,
        wickets: team.total_wickets,
        balls: team.total_balls,
    }
}

/// The single strictly-best performer across both squads, or `None` when
/// nobody scored above zero. Ties keep the first player encountered.
fn best_performer(state: &MatchState) -> Option<BestPerformer> {
    let mut best: Option<(f32, &Player, &Team)> = None;
    for team in &state.teams {
        for player in &team.players {
            let score = performer_score(player);
            let beats_current = match best {
                Some((best_score, _, _)) => score > best_score,
                None => true,
            };
            if beats_current {
                best = Some((score, player, team));
            }
        }
    }

    best.filter(|(score, _, _)| *score > 0.0).map(|(score, player, team)| BestPerformer {
        name: player.name.clone(),
        team: team.name.clone(),
        runs: player.runs,
        wickets: player.wickets,
        score,
    })
}
