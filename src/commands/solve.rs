//! Solve command
//!
//! Plays one simulated game against a known (or randomly drawn) answer
//! and reports the solution path.

use crate::config::SolverConfig;
use crate::core::Word;
use crate::game::{GameReport, Orchestrator, Simulator};
use crate::wordlists::Lexicon;
use anyhow::{Context, bail};
use rand::prelude::IndexedRandom;

/// Result of one simulated game
pub struct SolveResult {
    pub target: Word,
    pub report: GameReport,
}

/// Simulate a full game against `target`
///
/// A missing target draws a random word from the answer list, the same
/// way a fresh daily puzzle would.
///
/// # Errors
/// Returns an error when the target is malformed or not in the answer
/// list, or when the game aborts (judge fault, inconsistent feedback).
pub fn solve_word(
    target: Option<&str>,
    lexicon: &Lexicon,
    config: &SolverConfig,
) -> anyhow::Result<SolveResult> {
    let target = match target {
        Some(text) => {
            let word = Word::new(text.trim()).context("invalid target word")?;
            if !lexicon.is_answer(&word) {
                bail!("{word} is not in the answer list");
            }
            word
        }
        None => *lexicon
            .answers()
            .choose(&mut rand::rng())
            .context("answer list is empty")?,
    };

    let mut judge = Simulator::new(target);
    let report = Orchestrator::new(lexicon, config.clone()).run(&mut judge)?;

    Ok(SolveResult { target, report })
}
