//! scorekeeper CLI: browse saved tournaments and simulate brackets.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scorekeeper::config::engine::EngineConfig;
use scorekeeper::domain::bracket::{AdvanceOutcome, Slot};
use scorekeeper::domain::result::{today, TournamentResult};
use scorekeeper::errors::ErrorCode;
use scorekeeper::state::Session;
use scorekeeper::AppError;
use tracing::{error, info};
use uuid::Uuid;

mod telemetry;

/// Highest random score a simulated entrant can post in a match.
const SIMULATED_MAX_SCORE: i32 = 21;

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Score tracking for simple games, Skull King and tournaments")]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List saved tournaments, newest first
    History {
        /// Show at most this many tournaments
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one saved tournament in full
    Show {
        /// Tournament id as printed by `history`
        id: Uuid,
    },
    /// Play out a bracket with random match scores
    Simulate {
        /// Number of entrants (2-64)
        #[arg(long)]
        entrants: usize,

        /// Seed for pairing, tie draws and scores (for reproducible runs)
        #[arg(long)]
        seed: Option<u64>,

        /// Shuffle entrants before every round
        #[arg(long)]
        auto_generate: bool,

        #[arg(long, default_value = "Simulated Cup")]
        title: String,

        /// Record the result in tournament history
        #[arg(long)]
        save: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    telemetry::init_tracing(if args.verbose { "debug" } else { "warn" });

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = %e.code(), detail = %e.detail(), "Command failed");
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), AppError> {
    let config = EngineConfig::from_env()?;
    let mut session = Session::with_file_store(config);

    match command {
        Command::History { limit } => {
            let mut records = session.store().load_all()?;
            if let Some(limit) = limit {
                records.truncate(limit);
            }
            if records.is_empty() {
                println!("No tournaments recorded yet.");
            }
            for record in &records {
                print_summary(record);
            }
        }
        Command::Show { id } => {
            let record = session.store().find(id)?.ok_or_else(|| {
                AppError::not_found(
                    ErrorCode::TournamentNotFound,
                    format!("No saved tournament with id {id}"),
                )
            })?;
            print_details(&record);
        }
        Command::Simulate {
            entrants,
            seed,
            auto_generate,
            title,
            save,
        } => {
            let names: Vec<String> = (1..=entrants).map(|i| format!("Team {i}")).collect();
            session.start_tournament(&title, &names, auto_generate, seed)?;
            play_out(&mut session, seed)?;

            let result = if save {
                session.finish_tournament(&today())?
            } else {
                session.bracket_mut()?.result(today())?
            };
            print_details(&result);
            if save {
                println!("Saved as {}", result.id);
            }
        }
    }
    Ok(())
}

/// Fill every open match with random scores and advance until a champion
/// is crowned.
fn play_out(session: &mut Session, seed: Option<u64>) -> Result<(), AppError> {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s.wrapping_add(1)),
        None => ChaCha8Rng::from_os_rng(),
    };
    let bracket = session.bracket_mut()?;

    loop {
        let open: Vec<_> = bracket
            .matches()
            .iter()
            .filter(|m| !m.is_bye())
            .map(|m| m.id)
            .collect();
        for id in open {
            for slot in [Slot::First, Slot::Second] {
                let score = rng.random_range(0..=SIMULATED_MAX_SCORE);
                bracket.record_match_score(id, slot, score.to_string())?;
            }
        }
        match bracket.advance_round() {
            AdvanceOutcome::Finished => return Ok(()),
            AdvanceOutcome::NextRound { round, survivors } => {
                info!(round, survivors, "Simulated round complete");
            }
            AdvanceOutcome::NotReady => {
                return Err(AppError::Validation {
                    code: ErrorCode::ValidationError,
                    detail: "Simulated round could not be completed".to_string(),
                });
            }
        }
    }
}

fn print_summary(record: &TournamentResult) {
    let champion = record
        .champion()
        .map(|c| format!("{} ({})", c.name, c.score))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{}  {}  {}  champion: {}",
        record.id, record.date, record.title, champion
    );
}

fn print_details(record: &TournamentResult) {
    println!("🏆 {} ({})", record.title, record.date);
    for team in &record.winners {
        println!("  #{} {} - {}", team.placement, team.name, team.score);
    }
    println!("Entrants:");
    for team in &record.all_players {
        let placement = if team.is_ranked() {
            format!("#{}", team.placement)
        } else {
            "-".to_string()
        };
        println!("  {placement:>3} {} ({})", team.name, team.score);
    }
    if !record.round_history.is_empty() {
        println!("Rounds:");
        for line in &record.round_history {
            println!("  {line}");
        }
    }
}
