//! Solver configuration
//!
//! Tunables for a single game, mirrored by the CLI flags in `main`.

use crate::core::Word;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Precomputed opening guess, ~5.89 bits against the standard answer set.
///
/// Skips the full first-turn scan; any word of equal or greater entropy
/// against the configured answer set is a valid replacement.
pub const DEFAULT_OPENER: &str = "SALET";

/// Per-game solver tunables
///
/// `Default` yields the standard rules: six turns, five seconds of
/// wall-clock per guess selection, all available cores, SALET opener.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum guesses before the game is lost (>= 1)
    pub max_turns: usize,
    /// Wall-clock budget per guess selection (> 0)
    pub time_budget: Duration,
    /// Worker threads for the entropy scan (>= 1)
    pub max_workers: usize,
    /// First guess played without evaluation; `None` disables the shortcut
    pub opener: Option<Word>,
    /// Candidate counts at or below this switch the scan pool from the
    /// full allowed list to the candidates themselves
    pub pool_threshold: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_turns: 6,
            time_budget: Duration::from_secs_f64(5.0),
            max_workers: default_workers(),
            opener: Word::new(DEFAULT_OPENER).ok(),
            pool_threshold: 2,
        }
    }
}

impl SolverConfig {
    /// Clamp the configured worker count to something usable.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.max_workers.max(1)
    }
}

/// Number of cores available to the process.
#[must_use]
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}
