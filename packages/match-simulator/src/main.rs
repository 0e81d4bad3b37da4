//! Match Simulator CLI - replays or randomly generates badminton matches.
//!
//! Runs matches entirely in memory through the scorekeeper engines and writes
//! per-match metrics for inspection.

mod metrics;
mod output;
mod simulator;
mod types;

use clap::Parser;
use metrics::{build_match_metrics, MatchMetricsInput};
use output::OutputWriter;
use scorekeeper::{MatchSetup, MatchType};
use simulator::{parse_rallies, MatchResult, RallySource, Simulator};
use std::time::Instant;
use tracing::{info, warn};
use types::{MatchKind, OutputFormat};

#[derive(Parser)]
#[command(name = "match-simulator")]
#[command(about = "In-memory badminton match simulator")]
struct Args {
    /// Number of matches to simulate
    #[arg(short, long, default_value = "1")]
    matches: u32,

    /// Singles or doubles
    #[arg(long, default_value = "doubles")]
    match_type: MatchKind,

    /// Comma-separated player names (2 for singles, 4 for doubles)
    #[arg(long, value_delimiter = ',')]
    players: Option<Vec<String>>,

    /// Probability that the serving side wins a rally
    #[arg(long, default_value = "0.5")]
    serve_win_rate: f64,

    /// Match seed (for deterministic matches) - fills the first 8 bytes of the 32-byte seed
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed rally winners, e.g. "0,1,1,0"; replaces random rallies
    #[arg(long, conflicts_with_all = ["seed", "serve_win_rate"])]
    rallies: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON (filter from RUST_LOG)
    #[arg(long)]
    json_logs: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.json_logs {
        scorekeeper::telemetry::init_tracing();
    } else {
        // Silent by default, only show warnings/errors
        let filter = if args.verbose {
            "debug"
        } else if args.show_output {
            "info"
        } else {
            "warn"
        };
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let match_type = MatchType::from(args.match_type);
    let players = args
        .players
        .clone()
        .unwrap_or_else(|| default_players(match_type));
    let setup = MatchSetup::new(match_type, &players)?;
    let script = args.rallies.as_deref().map(parse_rallies).transpose()?;

    if args.show_output {
        info!(
            "Configuration: {} {:?} matches, teams {:?} vs {:?}",
            args.matches,
            match_type,
            setup.team_display_name(0)?,
            setup.team_display_name(1)?
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for match_id in 1..=args.matches {
        let match_start = Instant::now();
        let (source, seed) = match &script {
            Some(rallies) => (RallySource::scripted(rallies.clone()), None),
            None => {
                let seed: [u8; 32] = match args.seed {
                    Some(s) => {
                        // Vary per match so repeated runs stay reproducible but distinct
                        let mut seed = [0u8; 32];
                        seed[..8].copy_from_slice(&s.wrapping_add(match_id as u64).to_le_bytes());
                        seed
                    }
                    None => rand::random(),
                };
                (RallySource::random(seed, args.serve_win_rate), Some(seed))
            }
        };

        let outcome = Simulator::new(setup.clone(), source).and_then(Simulator::simulate_match);
        match outcome {
            Ok(result) => {
                let duration_ms = match_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_match_metrics(MatchMetricsInput {
                    match_id,
                    seed: seed.as_ref(),
                    setup: &setup,
                    serve_win_rate: script.is_none().then_some(args.serve_win_rate),
                    total_matches: args.matches,
                    result: &result,
                    duration_ms,
                });

                if let Err(e) = output_writer.write_match(&metrics) {
                    warn!("Failed to write metrics for match {}: {}", match_id, e);
                }
                if args.verbose {
                    info!(
                        "Match {} completed: winner={:?} rallies={}",
                        match_id, result.winner, result.rallies
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Match {} failed: {}", match_id, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.clone(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&setup, &results, errors, elapsed, args.matches);
    }

    Ok(())
}

fn default_players(match_type: MatchType) -> Vec<String> {
    (1..=match_type.player_count())
        .map(|i| format!("Player {i}"))
        .collect()
}

fn print_summary(
    setup: &MatchSetup,
    results: &[MatchResult],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Matches completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);

    if results.is_empty() {
        return;
    }

    let mut wins = [0u32; 2];
    let mut unfinished = 0u32;
    let mut three_setters = 0u32;
    let mut total_rallies = 0u64;
    for result in results {
        match result.winner {
            Some(team) => wins[team as usize] += 1,
            None => unfinished += 1,
        }
        if result.sets.len() == 3 {
            three_setters += 1;
        }
        total_rallies += result.rallies as u64;
    }

    println!("\n=== Results by Team ===");
    for (team, count) in wins.iter().enumerate() {
        let name = setup
            .team_display_name(team as u8)
            .unwrap_or_else(|_| format!("Team {team}"));
        let win_rate = (*count as f64 / results.len() as f64) * 100.0;
        println!("{name}: wins={count} ({win_rate:.1}%)");
    }
    if unfinished > 0 {
        println!("Unfinished: {unfinished}");
    }
    println!("Three-set matches: {three_setters}");
    println!(
        "Average rallies per match: {:.1}",
        total_rallies as f64 / results.len() as f64
    );
}
