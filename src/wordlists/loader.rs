//! Word list loading
//!
//! Plain-text lists, one word per line, UTF-8. Lines are trimmed; anything
//! that is not exactly five ASCII letters is rejected.

use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Parse a word list from file contents
///
/// Rejected lines (empty, wrong length, non-letters) are skipped and
/// counted, not fatal: real lists occasionally carry stray whitespace or
/// comments.
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut rejected = 0usize;

    let words: Vec<Word> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(_) => {
                    rejected += 1;
                    None
                }
            }
        })
        .collect();

    if rejected > 0 {
        debug!("rejected {rejected} malformed word-list lines");
    }

    words
}

/// Load a word list from a file
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}
