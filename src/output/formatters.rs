//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::Colorize;

/// Render a guess with its feedback coloring, letter by letter
#[must_use]
pub fn colorize_guess(guess: &Word, pattern: Pattern) -> String {
    guess
        .bytes()
        .iter()
        .zip(pattern.feedback())
        .map(|(&letter, feedback)| {
            let ch = (letter as char).to_string();
            match feedback {
                Feedback::Exact => ch.bright_green().bold().to_string(),
                Feedback::Present => ch.bright_yellow().bold().to_string(),
                Feedback::Absent => ch.bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a fixed-width bar
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    let max_entropy = 6.0; // Roughly log2 of the pattern spread a guess can reach
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn colorized_guess_keeps_all_letters() {
        colored::control::set_override(false);

        let guess = Word::new("salet").unwrap();
        let rendered = colorize_guess(&guess, Pattern::new(30));

        assert_eq!(rendered, "SALET");

        colored::control::unset_override();
    }
}
