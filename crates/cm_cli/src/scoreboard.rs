//! Plain-text rendering: ball results, the scoreboard, and the final
//! report. Layout only; every number comes straight from the engine.

use cm_core::{BallOutcome, MatchResult, MatchState, Team};

pub fn print_ball(outcome: &BallOutcome) {
    let (overs, balls) = outcome.overs_display();
    let wicket = if outcome.wicket { " - WICKET!" } else { "" };
    println!();
    println!(
        "Ball result: {} run(s){}  ({} to {})",
        outcome.runs, wicket, outcome.bowler, outcome.batter
    );
    println!(
        "SCORE: {}/{} ({}.{} overs)",
        outcome.team_runs, outcome.team_wickets, overs, balls
    );
}

pub fn print_scoreboard(state: &MatchState) {
    println!();
    println!("================== SCOREBOARD ==================");
    for team in &state.teams {
        print_team(team);
    }
    if let Some(target) = state.target {
        if !state.match_over {
            println!();
            println!("TARGET: {} RUNS", target);
        }
    }
}

fn print_team(team: &Team) {
    let (overs, balls) = team.overs_display();
    println!();
    println!(
        "{}: {}/{} ({}.{} overs)",
        team.name, team.total_runs, team.total_wickets, overs, balls
    );
    if team.total_balls > 0 {
        println!("CURRENT RR: {:.2}", team.current_run_rate);
    }

    let batting = team.batting_card();
    if !batting.is_empty() {
        println!();
        println!(
            "{:<18} {:>4} {:>5} {:>3} {:>3} {:>6}",
            "BATTING", "RUNS", "BALLS", "4s", "6s", "SR"
        );
        println!("------------------------------------------------");
        for player in batting {
            println!(
                "{:<18} {:>4} {:>5} {:>3} {:>3} {:>6.1}{}",
                player.name,
                player.runs,
                player.balls_faced,
                player.fours,
                player.sixes,
                player.strike_rate,
                if player.is_out { " *" } else { "" }
            );
        }
    }

    let bowling = team.bowling_card();
    if !bowling.is_empty() {
        println!();
        println!(
            "{:<18} {:>5} {:>4} {:>4} {:>6}",
            "BOWLING", "OVERS", "RUNS", "WKTS", "ECON"
        );
        println!("------------------------------------------------");
        for player in bowling {
            println!(
                "{:<18} {:>5.1} {:>4} {:>4} {:>6.2}",
                player.name, player.overs, player.runs_conceded, player.wickets, player.economy
            );
        }
    }
}

pub fn print_result(result: &MatchResult) {
    println!();
    println!("================ MATCH RESULT ================");
    for innings in [&result.first_innings, &result.second_innings] {
        let (overs, balls) = innings.overs_display();
        println!(
            "{}: {}/{} ({}.{} overs)",
            innings.team, innings.runs, innings.wickets, overs, balls
        );
    }
    println!();
    match (&result.winner, result.margin) {
        (Some(winner), Some(margin)) => {
            println!("{} WINS THE MATCH!", winner);
            println!("WON BY {} {}", margin.value, margin.unit);
        }
        _ => println!("MATCH TIED!"),
    }

    println!();
    println!("-------------- MAN OF THE MATCH --------------");
    match &result.man_of_the_match {
        Some(best) => {
            println!("{} ({})", best.name, best.team);
            println!("RUNS: {} | WICKETS: {}", best.runs, best.wickets);
        }
        None => println!("No standout performance"),
    }
}
