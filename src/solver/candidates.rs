//! Candidate tracking
//!
//! The live set of answers still consistent with every piece of feedback
//! received this game. Starts as the full answer set and only shrinks.

use crate::core::{Pattern, Word};
use thiserror::Error;

/// Filtering produced an empty candidate set
///
/// Under a truthful judge the hidden answer survives every filter, so an
/// empty result means the judge is not playing standard rules (or the
/// answer is outside the configured answer set).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no candidates remain after {guess} -> {pattern}: feedback is inconsistent")]
pub struct InconsistentFeedback {
    pub guess: Word,
    pub pattern: Pattern,
}

/// Immutable snapshot of the still-possible answers
#[derive(Debug, Clone)]
pub struct CandidateState {
    words: Vec<Word>,
}

impl CandidateState {
    /// Start a game: every configured answer is possible.
    #[must_use]
    pub fn new(answers: &[Word]) -> Self {
        Self {
            words: answers.to_vec(),
        }
    }

    /// Retain the candidates that would have produced `observed` for `guess`
    ///
    /// Returns the shrunk state.
    ///
    /// # Errors
    /// Returns [`InconsistentFeedback`] when nothing survives the filter.
    pub fn filter(
        &self,
        guess: &Word,
        observed: Pattern,
    ) -> Result<Self, InconsistentFeedback> {
        let words: Vec<Word> = self
            .words
            .iter()
            .filter(|candidate| Pattern::calculate(guess, candidate) == observed)
            .copied()
            .collect();

        if words.is_empty() {
            return Err(InconsistentFeedback {
                guess: *guess,
                pattern: observed,
            });
        }

        Ok(Self { words })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The remaining candidates, in answer-set order.
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Lexicographically smallest remaining candidate.
    #[must_use]
    pub fn smallest(&self) -> Option<Word> {
        self.words.iter().min().copied()
    }
}
