//! salet - CLI
//!
//! Entropy-maximizing Wordle solver with a wall-clock budget per guess.

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};
use salet::{
    commands::{analyze_word, run_bench, run_play, solve_word},
    config::{DEFAULT_OPENER, SolverConfig, default_workers},
    core::Word,
    output::{print_analysis_result, print_bench_statistics, print_solve_result},
    wordlists::Lexicon,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "salet",
    about = "Entropy-maximizing Wordle solver",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Allowed-guess list, one word per line
    #[arg(long, global = true, default_value = "data/allowed.txt")]
    allowed: PathBuf,

    /// Possible-answer list, one word per line (subset of --allowed)
    #[arg(long, global = true, default_value = "data/answers.txt")]
    answers: PathBuf,

    /// Wall-clock budget per guess selection, in seconds
    #[arg(long, global = true, default_value_t = 5.0)]
    time_budget: f64,

    /// Worker threads for the entropy scan (default: all cores)
    #[arg(long, global = true)]
    max_workers: Option<usize>,

    /// Maximum guesses before the game is lost
    #[arg(long, global = true, default_value_t = 6)]
    max_turns: usize,

    /// First guess played without evaluation; empty string disables it
    #[arg(long, global = true, default_value = DEFAULT_OPENER)]
    opener: String,

    /// Candidate count at which the scan pool shrinks to the candidates
    #[arg(long, global = true, default_value_t = 2)]
    pool_threshold: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: relay feedback from a real judge
    Play,

    /// Simulate solving a target word (random answer when omitted)
    Solve {
        /// The target word to solve
        word: Option<String>,

        /// Show per-turn entropy and timing detail
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a specific guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark the solver over the answer set
    Bench {
        /// Limit the number of answers tested
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let lexicon = Lexicon::load(&cli.allowed, &cli.answers)?;

    match cli.command {
        Commands::Play => run_play(&lexicon, &config),
        Commands::Solve { word, verbose } => {
            let result = solve_word(word.as_deref(), &lexicon, &config)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &lexicon)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Bench { limit } => {
            let stats = run_bench(&lexicon, &config, limit);
            print_bench_statistics(&stats);
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> Result<SolverConfig> {
    ensure!(cli.max_turns >= 1, "--max-turns must be at least 1");
    ensure!(
        cli.time_budget > 0.0 && cli.time_budget.is_finite(),
        "--time-budget must be a positive number of seconds"
    );
    if let Some(workers) = cli.max_workers {
        ensure!(workers >= 1, "--max-workers must be at least 1");
    }

    let opener = if cli.opener.is_empty() {
        None
    } else {
        Some(Word::new(&cli.opener).context("invalid --opener word")?)
    };

    Ok(SolverConfig {
        max_turns: cli.max_turns,
        time_budget: Duration::from_secs_f64(cli.time_budget),
        max_workers: cli.max_workers.unwrap_or_else(default_workers),
        opener,
        pool_threshold: cli.pool_threshold,
    })
}
