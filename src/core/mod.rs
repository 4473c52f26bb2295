//! Core domain types
//!
//! The fundamental types with zero external dependencies: words and
//! feedback patterns. Everything here is pure and has clear mathematical
//! properties.

mod pattern;
mod word;

pub use pattern::{Feedback, PATTERN_COUNT, Pattern};
pub use word::{WORD_LEN, Word, WordError};
