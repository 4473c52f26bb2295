//! Guess selection
//!
//! Picks the next guess: shortcut paths for the opener and tiny candidate
//! sets, otherwise a deadline-bounded parallel entropy scan over the guess
//! pool with a deterministic tie-break.

use super::candidates::CandidateState;
use super::entropy::calculate_entropy;
use crate::config::SolverConfig;
use crate::core::Word;
use log::warn;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::time::Instant;

/// Outcome of one guess selection
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    /// The chosen guess
    pub word: Word,
    /// Entropy of the chosen guess; `None` on shortcut paths
    pub entropy: Option<f64>,
    /// How many pool words were evaluated before the deadline
    pub evaluated: usize,
    /// Size of the scanned pool (0 on shortcut paths)
    pub pool_size: usize,
    /// Whether the wall-clock budget expired before the pool was exhausted
    pub budget_exhausted: bool,
}

/// A scored pool word during the scan
#[derive(Debug, Clone, Copy)]
struct Scored {
    word: Word,
    entropy: f64,
    is_candidate: bool,
}

/// Pick the better of two scored guesses
///
/// Higher entropy wins; ties prefer words that are still candidate
/// answers (a candidate guess can win the game outright), then the
/// lexicographically smaller word. Applied identically in the worker fold
/// and the cross-worker reduce, so the result does not depend on worker
/// count or scheduling.
fn prefer(a: Scored, b: Scored) -> Scored {
    match a.entropy.total_cmp(&b.entropy) {
        Ordering::Greater => a,
        Ordering::Less => b,
        Ordering::Equal => match (a.is_candidate, b.is_candidate) {
            (true, false) => a,
            (false, true) => b,
            _ => {
                if a.word <= b.word {
                    a
                } else {
                    b
                }
            }
        },
    }
}

fn merge(a: Option<Scored>, b: Option<Scored>) -> Option<Scored> {
    match (a, b) {
        (Some(a), Some(b)) => Some(prefer(a, b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Select the next guess
///
/// Policy, in order:
/// 1. Fresh game (candidates == full answer set) with a configured opener
///    that the judge accepts: play the opener without evaluating.
/// 2. One candidate left: play it.
/// 3. Two candidates left: play the lexicographically smaller; either
///    order wins within two further turns.
/// 4. Otherwise scan a pool and keep the entropy maximum under the
///    wall-clock budget. The pool is the candidates themselves when few
///    remain (probing can no longer pay off), the full allowed list when
///    many do.
///
/// The deadline is checked before each evaluation; an evaluation is never
/// aborted mid-computation. If the budget expires before a single result
/// exists, the lexicographically smallest candidate is returned.
///
/// # Panics
/// Panics if `state` is empty; the orchestrator never lets that happen.
#[must_use]
pub fn select_guess(
    allowed: &[Word],
    state: &CandidateState,
    answer_count: usize,
    config: &SolverConfig,
) -> Selection {
    assert!(!state.is_empty(), "cannot select from an empty candidate state");

    // Fresh game: the precomputed opener skips the most expensive scan.
    if state.len() == answer_count
        && let Some(opener) = config.opener
        && allowed.contains(&opener)
    {
        return shortcut(opener);
    }

    if state.len() == 1 {
        return shortcut(state.words()[0]);
    }

    if state.len() == 2 {
        let smaller = state.smallest().expect("state has two words");
        return shortcut(smaller);
    }

    let pool: &[Word] = if state.len() <= config.pool_threshold {
        state.words()
    } else {
        allowed
    };

    let candidate_set: FxHashSet<Word> = state.words().iter().copied().collect();
    let deadline = Instant::now() + config.time_budget;

    let scan = || {
        pool.par_iter()
            .fold(
                || (None, 0usize),
                |(best, evaluated), word| {
                    // Cooperative deadline: skip, never abort mid-evaluation.
                    if Instant::now() >= deadline {
                        return (best, evaluated);
                    }
                    let scored = Scored {
                        word: *word,
                        entropy: calculate_entropy(word, state.words()),
                        is_candidate: candidate_set.contains(word),
                    };
                    (merge(best, Some(scored)), evaluated + 1)
                },
            )
            .reduce(
                || (None, 0usize),
                |(a, ae), (b, be)| (merge(a, b), ae + be),
            )
    };

    let (best, evaluated) = match rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers())
        .build()
    {
        Ok(thread_pool) => thread_pool.install(scan),
        Err(err) => {
            warn!("falling back to the global thread pool: {err}");
            scan()
        }
    };

    match best {
        Some(scored) => Selection {
            word: scored.word,
            entropy: Some(scored.entropy),
            evaluated,
            pool_size: pool.len(),
            budget_exhausted: evaluated < pool.len(),
        },
        None => {
            // Budget expired with zero evaluations: degrade, don't fail.
            let fallback = state.smallest().expect("state is non-empty");
            warn!(
                "time budget expired before any of {} pool words was evaluated; \
                 falling back to {fallback}",
                pool.len()
            );
            Selection {
                word: fallback,
                entropy: None,
                evaluated: 0,
                pool_size: pool.len(),
                budget_exhausted: true,
            }
        }
    }
}

fn shortcut(word: Word) -> Selection {
    Selection {
        word,
        entropy: None,
        evaluated: 0,
        pool_size: 0,
        budget_exhausted: false,
    }
}
