//! salet
//!
//! An entropy-maximizing Wordle solver: each turn it plays the guess with
//! the highest expected information gain against the remaining candidate
//! answers, evaluated in parallel under a wall-clock budget.
//!
//! # Quick Start
//!
//! ```rust
//! use salet::core::{Pattern, Word};
//!
//! let guess = Word::new("salet").unwrap();
//! let answer = Word::new("crane").unwrap();
//!
//! let pattern = Pattern::calculate(&guess, &answer);
//! assert_eq!(pattern.to_string(), "APAPA");
//! ```

// Core domain types
pub mod core;

// Solving machinery
pub mod solver;

// Game loop and the judge boundary
pub mod game;

// Solver configuration
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
