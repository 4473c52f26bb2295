//! Display functions for command results

use super::formatters::{colorize_guess, entropy_bar};
use crate::commands::{AnalysisResult, BenchStatistics, SolveResult};
use crate::game::{GameOutcome, GameReport};
use colored::Colorize;

/// Print the result of a simulated game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.report.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colorize_guess(&turn.guess, turn.pattern),
            turn.pattern.to_emoji()
        );

        if verbose {
            println!("  Candidates after: {}", turn.candidates_after);
            if let Some(entropy) = turn.entropy {
                println!("  Entropy:          {entropy:.3} bits");
                println!("  Pool evaluated:   {}", turn.evaluated);
            }
            println!("  Turn time:        {:.2}s", turn.duration.as_secs_f64());
        }
    }

    println!();
    print_game_summary(&result.report);
}

/// Print the win/loss line for a finished game
pub fn print_game_summary(report: &GameReport) {
    match report.outcome {
        GameOutcome::Win { turns } => println!(
            "{}",
            format!(
                "Solved in {turns} guess{} ({:.2}s)",
                if turns == 1 { "" } else { "es" },
                report.duration.as_secs_f64()
            )
            .green()
            .bold()
        ),
        GameOutcome::Loss => println!(
            "{}",
            format!("Out of turns after {} guesses", report.turns.len())
                .red()
                .bold()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.metrics.entropy, 30);

    println!("\nAgainst {} possible answers:", result.candidate_count);
    println!(
        "   Entropy:      [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.metrics.entropy).bright_yellow()
    );
    println!("   Patterns:     {} distinct", result.metrics.pattern_count);
    println!(
        "   Expected:     {:.1} candidates remain",
        result.metrics.expected_remaining
    );
    if result.is_opener {
        println!("   {}", "This is the precomputed opener".bright_cyan());
    }
}

/// Print benchmark statistics
pub fn print_bench_statistics(stats: &BenchStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", stats.total_words);
    println!(
        "   Solved:           {} {}",
        stats.solved,
        format!("({:.1}%)", stats.win_rate() * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "   Failed:           {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", stats.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", stats.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());
    println!("   Words/second:     {:.1}", stats.words_per_second);

    println!("\n{}", "Distribution:".bright_cyan().bold());
    for guesses in 1..=6 {
        if let Some(&count) = stats.distribution.get(&guesses) {
            let pct = count as f64 / stats.solved.max(1) as f64 * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {guesses}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !stats.worst_words.is_empty() {
        println!("\n{}", "Hardest words (5-6 guesses)".yellow().bold());
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("   {} ({} guesses)", word.to_string().yellow(), guesses);
        }
    }
}
