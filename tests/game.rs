//! End-to-end games through the public API.

use salet::config::SolverConfig;
use salet::core::Word;
use salet::game::{GameOutcome, Judge, Orchestrator, Simulator};
use salet::wordlists::Lexicon;

fn words(texts: &[&str]) -> Vec<Word> {
    texts.iter().map(|t| Word::new(t).unwrap()).collect()
}

#[test]
fn five_candidate_game_wins_within_four_turns() {
    let lexicon = Lexicon::from_words(
        words(&["salet", "crane", "crate", "crave", "craze", "grade"]),
        words(&["crane", "crate", "crave", "craze", "grade"]),
    )
    .unwrap();

    let orchestrator = Orchestrator::new(&lexicon, SolverConfig::default());
    let mut judge = Simulator::new(Word::new("crane").unwrap());
    let report = orchestrator.run(&mut judge).unwrap();

    assert!(matches!(report.outcome, GameOutcome::Win { turns } if turns <= 4));
    assert!(report.turns.len() <= 4);
    assert_eq!(report.turns[0].guess.to_string(), "SALET");
}

#[test]
fn shipped_word_lists_load_and_solve() {
    let lexicon = Lexicon::load("data/allowed.txt", "data/answers.txt").unwrap();
    assert!(lexicon.allowed().len() > lexicon.answers().len());

    let orchestrator = Orchestrator::new(&lexicon, SolverConfig::default());
    let mut judge = Simulator::new(Word::new("crane").unwrap());
    let report = orchestrator.run(&mut judge).unwrap();

    assert!(report.is_win());
    assert!(report.turns.len() <= 6);
    assert_eq!(report.turns.last().unwrap().guess.to_string(), "CRANE");
}

#[test]
fn several_targets_from_the_shipped_lists_all_win() {
    let lexicon = Lexicon::load("data/allowed.txt", "data/answers.txt").unwrap();
    let orchestrator = Orchestrator::new(&lexicon, SolverConfig::default());

    for target in ["aback", "mouse", "zebra", "llama", "stone"] {
        let answer = Word::new(target).unwrap();
        let mut judge = Simulator::new(answer);
        let report = orchestrator.run(&mut judge).unwrap();

        assert!(report.is_win(), "failed to solve {target}");
        assert!(
            report.turns.len() <= 6,
            "{target} took {} turns",
            report.turns.len()
        );
    }
}

#[test]
fn disabled_opener_still_wins() {
    let lexicon = Lexicon::from_words(
        words(&["salet", "crane", "crate", "crave", "craze", "grade"]),
        words(&["crane", "crate", "crave", "craze", "grade"]),
    )
    .unwrap();

    let config = SolverConfig {
        opener: None,
        ..SolverConfig::default()
    };
    let orchestrator = Orchestrator::new(&lexicon, config);
    let mut judge = Simulator::new(Word::new("craze").unwrap());
    let report = orchestrator.run(&mut judge).unwrap();

    assert!(report.is_win());
    assert_ne!(report.turns[0].guess.to_string(), "SALET");
}

#[test]
fn turn_records_carry_the_judge_feedback() {
    let lexicon = Lexicon::from_words(
        words(&["salet", "crane", "crate", "crave", "craze", "grade"]),
        words(&["crane", "crate", "crave", "craze", "grade"]),
    )
    .unwrap();

    let answer = Word::new("grade").unwrap();
    let orchestrator = Orchestrator::new(&lexicon, SolverConfig::default());
    let mut judge = Simulator::new(answer);
    let report = orchestrator.run(&mut judge).unwrap();

    // Every recorded pattern must be reproducible from the known answer.
    for turn in &report.turns {
        let mut check = Simulator::new(answer);
        assert_eq!(check.submit(turn.guess).unwrap(), turn.pattern);
    }
}
