//! The game loop
//!
//! Drives one game end to end: select a guess, submit it to the judge,
//! ingest the feedback, shrink the candidate set, repeat until the game is
//! won, the turn budget runs out, or something goes wrong.

use super::judge::{Judge, JudgeError};
use crate::config::SolverConfig;
use crate::core::{Pattern, Word};
use crate::solver::{CandidateState, InconsistentFeedback, select_guess};
use crate::wordlists::Lexicon;
use log::{info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Terminal result of a completed game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Guessed the hidden answer within the turn budget
    Win { turns: usize },
    /// Turn budget exhausted
    Loss,
}

/// One completed turn
#[derive(Debug, Clone, Copy)]
pub struct TurnRecord {
    pub guess: Word,
    pub pattern: Pattern,
    /// Candidates remaining after this turn's filter (1 on the winning turn)
    pub candidates_after: usize,
    /// Entropy of the chosen guess; `None` on shortcut turns
    pub entropy: Option<f64>,
    /// Pool words evaluated during selection
    pub evaluated: usize,
    /// Wall-clock for the whole turn (selection + judge round-trip)
    pub duration: Duration,
}

/// Full account of a finished game
#[derive(Debug, Clone)]
pub struct GameReport {
    pub outcome: GameOutcome,
    pub turns: Vec<TurnRecord>,
    pub duration: Duration,
}

impl GameReport {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.outcome, GameOutcome::Win { .. })
    }
}

/// A game that could not run to a win/loss verdict
#[derive(Debug, Error)]
pub enum GameError {
    #[error("{word} is not in the allowed-guess list")]
    InvalidWord { word: Word },
    #[error(transparent)]
    Judge(#[from] JudgeError),
    #[error(transparent)]
    InconsistentFeedback(#[from] InconsistentFeedback),
    #[error("game cancelled")]
    Cancelled,
}

/// Runs games against a judge
///
/// Holds only borrowed, immutable word lists and the solver tunables; all
/// per-game state lives inside [`Orchestrator::run`]. The judge is passed
/// in as a capability, never held globally.
pub struct Orchestrator<'a> {
    lexicon: &'a Lexicon,
    config: SolverConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> Orchestrator<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon, config: SolverConfig) -> Self {
        Self {
            lexicon,
            config,
            cancel: None,
        }
    }

    /// Attach a cooperative cancellation flag, honored at turn boundaries.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Play one game to completion
    ///
    /// # Errors
    /// Returns [`GameError`] on a misconfigured opener, judge failure,
    /// feedback that eliminates every candidate, or cancellation. Running
    /// out of turns is a [`GameOutcome::Loss`], not an error.
    pub fn run<J: Judge>(&self, judge: &mut J) -> Result<GameReport, GameError> {
        if let Some(opener) = self.config.opener
            && !self.lexicon.is_allowed(&opener)
        {
            return Err(GameError::InvalidWord { word: opener });
        }

        let game_start = Instant::now();
        let mut state = CandidateState::new(self.lexicon.answers());
        let mut turns: Vec<TurnRecord> = Vec::with_capacity(self.config.max_turns);

        for turn in 1..=self.config.max_turns {
            if self.cancelled() {
                warn!("cancellation requested, abandoning game at turn {turn}");
                return Err(GameError::Cancelled);
            }

            let turn_start = Instant::now();
            let selection = select_guess(
                self.lexicon.allowed(),
                &state,
                self.lexicon.answers().len(),
                &self.config,
            );

            let pattern = judge.submit(selection.word)?;
            let duration = turn_start.elapsed();

            if pattern.is_perfect() {
                turns.push(TurnRecord {
                    guess: selection.word,
                    pattern,
                    candidates_after: 1,
                    entropy: selection.entropy,
                    evaluated: selection.evaluated,
                    duration,
                });
                info!(
                    "turn {turn}: {} -> {pattern}, solved in {:.2}s",
                    selection.word,
                    game_start.elapsed().as_secs_f64()
                );
                return Ok(GameReport {
                    outcome: GameOutcome::Win { turns: turn },
                    turns,
                    duration: game_start.elapsed(),
                });
            }

            state = state.filter(&selection.word, pattern)?;

            info!(
                "turn {turn}: {} -> {pattern}, {} candidates remain ({} evaluated in {:.2}s)",
                selection.word,
                state.len(),
                selection.evaluated,
                duration.as_secs_f64()
            );

            turns.push(TurnRecord {
                guess: selection.word,
                pattern,
                candidates_after: state.len(),
                entropy: selection.entropy,
                evaluated: selection.evaluated,
                duration,
            });
        }

        info!(
            "out of turns after {} guesses, {} candidates were left",
            turns.len(),
            state.len()
        );

        Ok(GameReport {
            outcome: GameOutcome::Loss,
            turns,
            duration: game_start.elapsed(),
        })
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
