//! Bench command
//!
//! Runs one simulated game per answer word and aggregates the results
//! into win-rate and guess-distribution statistics.

use crate::config::SolverConfig;
use crate::core::Word;
use crate::game::{GameOutcome, Orchestrator, Simulator};
use crate::wordlists::Lexicon;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Aggregated statistics from a benchmark run
#[derive(Debug)]
pub struct BenchStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Winning games keyed by how many guesses they took
    pub distribution: HashMap<usize, usize>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub total_time: Duration,
    pub words_per_second: f64,
    /// Slowest solves (5+ guesses), worst first
    pub worst_words: Vec<(Word, usize)>,
}

impl BenchStatistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total_words as f64
    }
}

/// Play every answer (or the first `limit`) against the simulator
///
/// Games run sequentially; the parallelism lives inside each turn's
/// entropy scan, which keeps per-game timing honest.
#[must_use]
pub fn run_bench(
    lexicon: &Lexicon,
    config: &SolverConfig,
    limit: Option<usize>,
) -> BenchStatistics {
    let targets: Vec<Word> = lexicon
        .answers()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .copied()
        .collect();

    let progress = ProgressBar::new(targets.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );

    let orchestrator = Orchestrator::new(lexicon, config.clone());

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut worst_words: Vec<(Word, usize)> = Vec::new();
    let mut solved = 0usize;
    let mut failed = 0usize;
    let mut total_guesses = 0usize;

    let start = Instant::now();

    for (idx, &target) in targets.iter().enumerate() {
        let mut judge = Simulator::new(target);

        match orchestrator.run(&mut judge) {
            Ok(report) => match report.outcome {
                GameOutcome::Win { turns } => {
                    solved += 1;
                    total_guesses += turns;
                    *distribution.entry(turns).or_insert(0) += 1;
                    if turns >= 5 {
                        worst_words.push((target, turns));
                    }
                }
                GameOutcome::Loss => failed += 1,
            },
            Err(err) => {
                warn!("game against {target} aborted: {err}");
                failed += 1;
            }
        }

        if idx % 10 == 0 && solved > 0 {
            progress.set_message(format!(
                "Avg: {:.2}",
                total_guesses as f64 / solved as f64
            ));
        }
        progress.inc(1);
    }

    progress.finish_with_message("Complete!");

    let total_time = start.elapsed();
    worst_words.sort_by_key(|&(_, turns)| std::cmp::Reverse(turns));
    worst_words.truncate(10);

    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    BenchStatistics {
        total_words: targets.len(),
        solved,
        failed,
        min_guesses: distribution.keys().min().copied().unwrap_or(0),
        max_guesses: distribution.keys().max().copied().unwrap_or(0),
        distribution,
        average_guesses,
        total_time,
        words_per_second: targets.len() as f64 / total_time.as_secs_f64().max(f64::EPSILON),
        worst_words,
    }
}
