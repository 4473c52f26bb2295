//! Analyze command
//!
//! Entropy analysis of a single guess against the full answer set.

use crate::config::DEFAULT_OPENER;
use crate::core::Word;
use crate::solver::{GuessMetrics, calculate_metrics};
use crate::wordlists::Lexicon;
use anyhow::{Context, bail};

/// Analysis of one guess
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    /// Size of the answer set the guess was scored against
    pub candidate_count: usize,
    /// Whether this is the precomputed opener
    pub is_opener: bool,
}

/// Score `text` against every possible answer
///
/// # Errors
/// Returns an error when the word is malformed or not an allowed guess.
pub fn analyze_word(text: &str, lexicon: &Lexicon) -> anyhow::Result<AnalysisResult> {
    let word = Word::new(text.trim()).context("invalid word")?;

    if !lexicon.is_allowed(&word) {
        bail!("{word} is not an allowed guess");
    }

    let metrics = calculate_metrics(&word, lexicon.answers());

    Ok(AnalysisResult {
        word,
        metrics,
        candidate_count: lexicon.answers().len(),
        is_opener: word.to_string() == DEFAULT_OPENER,
    })
}
