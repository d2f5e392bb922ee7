//! CricMania console driver.
//!
//! Hosts everything the engine treats as external: roster provision,
//! the per-ball menu, scoreboard rendering, and match-history
//! persistence. The engine itself lives in `cm_core`.

mod history;
mod roster;
mod scoreboard;

use anyhow::{Context, Result};
use clap::Parser;
use cm_core::{MatchConfig, MatchEngine};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cricmania")]
#[command(about = "Simulate a two-team limited-overs cricket match", long_about = None)]
struct Cli {
    /// RNG seed; derived from the clock when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Overs per innings
    #[arg(long, default_value_t = cm_core::DEFAULT_OVERS)]
    overs: u32,

    /// Wicket probability per delivery (0.0..=1.0)
    #[arg(long, default_value_t = cm_core::DEFAULT_WICKET_PROBABILITY)]
    wicket_prob: f32,

    /// Roster JSON file; built-in squads when omitted
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Simulate the full match without prompting
    #[arg(long, default_value_t = false)]
    auto: bool,

    /// Match history file, appended after each completed match
    #[arg(long, default_value = "history.jsonl")]
    history: PathBuf,

    /// Skip writing match history
    #[arg(long, default_value_t = false)]
    no_history: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = MatchConfig::new(cli.overs, cli.wicket_prob)?;
    let (team_a, team_b) = match &cli.roster {
        Some(path) => roster::load(path)?,
        None => roster::default_squads(),
    };

    let seed = cli.seed.unwrap_or_else(seed_from_clock);
    let mut engine = MatchEngine::new(team_a, team_b, config, seed)?;

    println!("MATCH: {} vs {}", engine.state().teams[0].name, engine.state().teams[1].name);
    println!("TOSS: {} WILL BAT FIRST (seed {})", engine.state().batting_team().name, seed);

    if cli.auto {
        engine.auto_complete()?;
    } else {
        run_menu(&mut engine)?;
    }

    if let Some(result) = engine.result() {
        scoreboard::print_result(result);
        scoreboard::print_scoreboard(engine.state());
        if !cli.no_history {
            history::append(&cli.history, result)
                .with_context(|| format!("writing {}", cli.history.display()))?;
            println!();
            println!("Match recorded in {}", cli.history.display());
        }
    }

    Ok(())
}

fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

fn run_menu(engine: &mut MatchEngine) -> Result<()> {
    let stdin = io::stdin();
    while !engine.is_over() {
        println!();
        println!("1. SIMULATE NEXT BALL");
        println!("2. VIEW CURRENT STATUS");
        println!("3. AUTO-COMPLETE MATCH");
        println!("4. QUIT");
        print!("ENTER CHOICE (1-4): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "1" => {
                if let Some(outcome) = engine.step()? {
                    scoreboard::print_ball(&outcome);
                    if outcome.innings_complete && !outcome.match_complete {
                        if let Some(target) = engine.state().target {
                            println!();
                            println!("FIRST INNINGS COMPLETE! TARGET: {} RUNS", target);
                        }
                    }
                }
            }
            "2" => scoreboard::print_scoreboard(engine.state()),
            "3" => engine.auto_complete()?,
            "4" => return Ok(()),
            other => println!("INVALID CHOICE: {}", other),
        }
    }
    Ok(())
}
