//! Play command
//!
//! Interactive mode against a real judge: the solver proposes guesses,
//! the human types the judge's feedback back in. The stdin round-trip is
//! the judge adapter here; typos are re-prompted and never reach the
//! game loop.

use crate::config::SolverConfig;
use crate::core::{Pattern, Word};
use crate::game::{GameError, Judge, JudgeError, Orchestrator};
use crate::wordlists::Lexicon;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Give up on a guess after this many unusable feedback lines.
const MAX_FEEDBACK_ATTEMPTS: usize = 10;

/// Judge implementation that relays feedback typed by the user
struct RelayJudge<R> {
    input: R,
}

impl<R: BufRead> RelayJudge<R> {
    const fn new(input: R) -> Self {
        Self { input }
    }

    fn read_line(&mut self) -> Result<String, JudgeError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(JudgeError::Closed);
        }
        Ok(line.trim().to_lowercase())
    }
}

impl<R: BufRead> Judge for RelayJudge<R> {
    fn submit(&mut self, guess: Word) -> Result<Pattern, JudgeError> {
        println!(
            "\nPlay: {}",
            guess.to_string().bright_yellow().bold()
        );

        let mut last_input = String::new();
        for _ in 0..MAX_FEEDBACK_ATTEMPTS {
            print!("Feedback (E/P/A per letter, or 'win'): ");
            io::stdout().flush()?;

            let line = self.read_line()?;
            match line.as_str() {
                "win" | "correct" | "solved" => return Ok(Pattern::PERFECT),
                "quit" | "q" | "exit" => return Err(JudgeError::Closed),
                _ => {
                    if let Some(pattern) = Pattern::parse(&line) {
                        return Ok(pattern);
                    }
                    println!(
                        "{}",
                        "Could not read that - five of E/P/A (or G/Y/-), e.g. APEPA".red()
                    );
                    last_input = line;
                }
            }
        }

        Err(JudgeError::MalformedFeedback(last_input))
    }
}

/// Run the interactive relay mode
///
/// # Errors
/// Returns an error when stdin closes mid-game or the game aborts for a
/// reason other than mistyped feedback.
pub fn run_play(lexicon: &Lexicon, config: &SolverConfig) -> anyhow::Result<()> {
    println!("\n{}", "═".repeat(62).cyan());
    println!(" Entropy solver - relay mode");
    println!("{}", "═".repeat(62).cyan());
    println!("\nEnter the judge's feedback after each suggested guess:");
    println!("  E = exact position, P = present elsewhere, A = absent");
    println!("  'win' when the judge shows all green, 'quit' to stop\n");

    let stdin = io::stdin();
    let mut judge = RelayJudge::new(stdin.lock());
    let orchestrator = Orchestrator::new(lexicon, config.clone());

    match orchestrator.run(&mut judge) {
        Ok(report) => {
            crate::output::print_game_summary(&report);
            Ok(())
        }
        Err(GameError::InconsistentFeedback(err)) => {
            println!(
                "\n{} {err}",
                "No possible answer matches that feedback.".red().bold()
            );
            println!("One of the entered patterns is probably mistyped.");
            Ok(())
        }
        Err(GameError::Judge(JudgeError::Closed)) => {
            println!("\nStopped.");
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn relay_judge_parses_wire_feedback() {
        let mut judge = RelayJudge::new("apapa\n".as_bytes());
        let pattern = judge.submit(Word::new("salet").unwrap()).unwrap();

        assert_eq!(pattern.to_string(), "APAPA");
    }

    #[test]
    fn relay_judge_reprompts_on_malformed_feedback() {
        // First two lines are unusable; the third parses.
        let mut judge = RelayJudge::new("banana\nEPX\nEEEEE\n".as_bytes());
        let pattern = judge.submit(Word::new("crane").unwrap()).unwrap();

        assert!(pattern.is_perfect());
    }

    #[test]
    fn relay_judge_win_shortcut() {
        let mut judge = RelayJudge::new("win\n".as_bytes());
        let pattern = judge.submit(Word::new("crane").unwrap()).unwrap();

        assert!(pattern.is_perfect());
    }

    #[test]
    fn relay_judge_gives_up_after_persistent_garbage() {
        let input = "garbage\n".repeat(MAX_FEEDBACK_ATTEMPTS);
        let mut judge = RelayJudge::new(input.as_bytes());
        let err = judge.submit(Word::new("crane").unwrap()).unwrap_err();

        assert!(matches!(err, JudgeError::MalformedFeedback(_)));
    }

    #[test]
    fn relay_judge_closed_input() {
        let mut judge = RelayJudge::new("".as_bytes());
        let err = judge.submit(Word::new("crane").unwrap()).unwrap_err();

        assert!(matches!(err, JudgeError::Closed));
    }

    #[test]
    fn relay_mode_drives_a_full_game() {
        let lexicon = Lexicon::from_words(
            words(&["salet", "crane", "crate", "crave", "craze", "grade"]),
            words(&["crane", "crate", "crave", "craze", "grade"]),
        )
        .unwrap();

        // Feedback for SALET then CRANE against hidden answer CRANE.
        let mut judge = RelayJudge::new("apapa\nwin\n".as_bytes());
        let report = Orchestrator::new(&lexicon, SolverConfig::default())
            .run(&mut judge)
            .unwrap();

        assert!(report.is_win());
        assert_eq!(report.turns.len(), 2);
    }
}
