//! Word lists
//!
//! The two immutable word sets the solver works with: the words the judge
//! accepts as guesses, and the subset that can be hidden answers. Loaded
//! once at startup and shared by reference from then on.

pub mod loader;

use crate::core::Word;
use log::info;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Word list loading or validation failure
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list {} contains no usable words", path.display())]
    Empty { path: PathBuf },
    #[error("answer {word} is missing from the allowed-guess list")]
    AnswerNotAllowed { word: Word },
}

/// The allowed-guess list and the answer list, with membership indexes
///
/// Invariant: every answer is also an allowed guess.
#[derive(Debug, Clone)]
pub struct Lexicon {
    allowed: Vec<Word>,
    answers: Vec<Word>,
    allowed_set: FxHashSet<Word>,
    answer_set: FxHashSet<Word>,
}

impl Lexicon {
    /// Load both lists from files and validate them.
    ///
    /// # Errors
    /// Returns [`LexiconError`] when a file is unreadable, a list comes up
    /// empty, or an answer is not an allowed guess.
    pub fn load<P: AsRef<Path>>(allowed_path: P, answers_path: P) -> Result<Self, LexiconError> {
        let allowed = load_list(allowed_path.as_ref())?;
        let answers = load_list(answers_path.as_ref())?;

        let lexicon = Self::from_words(allowed, answers)?;
        info!(
            "loaded {} allowed guesses, {} possible answers",
            lexicon.allowed.len(),
            lexicon.answers.len()
        );
        Ok(lexicon)
    }

    /// Build a lexicon from already-parsed lists.
    ///
    /// # Errors
    /// Returns [`LexiconError::AnswerNotAllowed`] when an answer is not in
    /// the allowed list.
    pub fn from_words(allowed: Vec<Word>, answers: Vec<Word>) -> Result<Self, LexiconError> {
        let allowed_set: FxHashSet<Word> = allowed.iter().copied().collect();

        if let Some(&word) = answers.iter().find(|w| !allowed_set.contains(w)) {
            return Err(LexiconError::AnswerNotAllowed { word });
        }

        let answer_set: FxHashSet<Word> = answers.iter().copied().collect();

        Ok(Self {
            allowed,
            answers,
            allowed_set,
            answer_set,
        })
    }

    /// Every word the judge accepts as a guess.
    #[inline]
    #[must_use]
    pub fn allowed(&self) -> &[Word] {
        &self.allowed
    }

    /// Every word that can be a hidden answer.
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    #[must_use]
    pub fn is_allowed(&self, word: &Word) -> bool {
        self.allowed_set.contains(word)
    }

    #[must_use]
    pub fn is_answer(&self, word: &Word) -> bool {
        self.answer_set.contains(word)
    }
}

fn load_list(path: &Path) -> Result<Vec<Word>, LexiconError> {
    let words = loader::load_from_file(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if words.is_empty() {
        return Err(LexiconError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn lexicon_accepts_answers_subset_of_allowed() {
        let lexicon = Lexicon::from_words(
            words(&["salet", "crane", "crate"]),
            words(&["crane", "crate"]),
        )
        .unwrap();

        assert_eq!(lexicon.allowed().len(), 3);
        assert_eq!(lexicon.answers().len(), 2);
    }

    #[test]
    fn lexicon_rejects_answer_outside_allowed() {
        let err = Lexicon::from_words(words(&["salet", "crane"]), words(&["crane", "slate"]))
            .unwrap_err();

        assert!(matches!(
            err,
            LexiconError::AnswerNotAllowed { word } if word.to_string() == "SLATE"
        ));
    }

    #[test]
    fn lexicon_membership_checks() {
        let lexicon =
            Lexicon::from_words(words(&["salet", "crane"]), words(&["crane"])).unwrap();

        assert!(lexicon.is_allowed(&Word::new("salet").unwrap()));
        assert!(lexicon.is_allowed(&Word::new("crane").unwrap()));
        assert!(!lexicon.is_allowed(&Word::new("slate").unwrap()));

        assert!(lexicon.is_answer(&Word::new("crane").unwrap()));
        assert!(!lexicon.is_answer(&Word::new("salet").unwrap()));
    }

    #[test]
    fn lexicon_load_missing_file_is_io_error() {
        let err = Lexicon::load("/nonexistent/allowed.txt", "/nonexistent/answers.txt")
            .unwrap_err();

        assert!(matches!(err, LexiconError::Io { .. }));
    }
}
