//! Shannon entropy of the feedback partition
//!
//! Given a guess and the current candidates, computes the expected
//! information gain of playing that guess.

use crate::core::{PATTERN_COUNT, Pattern, Word};

/// Detailed evaluation of a single guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Number of distinct feedback patterns the guess can produce
    pub pattern_count: usize,
    /// Expected number of candidates remaining after this guess
    pub expected_remaining: f64,
}

/// Partition the candidates by the pattern they produce with `guess`
///
/// The histogram is indexed by pattern code; bucket k counts the
/// candidates for which `Pattern::calculate(guess, candidate)` encodes
/// to k.
#[must_use]
pub fn pattern_histogram(guess: &Word, candidates: &[Word]) -> [u32; PATTERN_COUNT] {
    let mut buckets = [0u32; PATTERN_COUNT];
    for candidate in candidates {
        buckets[Pattern::calculate(guess, candidate).value() as usize] += 1;
    }
    buckets
}

/// Expected information gain of playing `guess`, in bits
///
/// # Formula
/// H = −Σ p(k) · log₂ p(k) over the non-empty pattern buckets, with the
/// candidates treated as uniformly likely.
///
/// Zero or one candidate carries no uncertainty, so H = 0; empty buckets
/// are skipped, so log₂(0) is never evaluated.
///
/// # Examples
/// ```
/// use salet::core::Word;
/// use salet::solver::calculate_entropy;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("zzzzz").unwrap(),
/// ];
///
/// // Two candidates, two distinct patterns: a perfect one-bit split.
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> f64 {
    if candidates.len() <= 1 {
        return 0.0;
    }

    let buckets = pattern_histogram(guess, candidates);
    let total = candidates.len() as f64;

    buckets
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

/// Full metrics for one guess: entropy, pattern spread, expected remainder
///
/// Used by the analyze command and verbose solve output.
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            pattern_count: 0,
            expected_remaining: 0.0,
        };
    }

    let buckets = pattern_histogram(guess, candidates);
    let total = candidates.len() as f64;

    let mut entropy = 0.0;
    let mut pattern_count = 0;
    let mut expected_remaining = 0.0;

    for &count in buckets.iter().filter(|&&count| count > 0) {
        let p = f64::from(count) / total;
        entropy -= p * p.log2();
        pattern_count += 1;
        expected_remaining += p * f64::from(count);
    }

    GuessMetrics {
        entropy,
        pattern_count,
        expected_remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(t).unwrap()).collect()
    }

    #[test]
    fn entropy_is_never_negative() {
        let candidates = words(&["slate", "irate", "trace", "raise"]);

        for guess in &candidates {
            assert!(calculate_entropy(guess, &candidates) >= 0.0);
        }
    }

    #[test]
    fn entropy_zero_for_single_candidate() {
        let candidates = words(&["slate"]);
        let guess = Word::new("crane").unwrap();

        assert!(calculate_entropy(&guess, &candidates).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_zero_for_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        assert!(calculate_entropy(&guess, &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_zero_iff_single_pattern_bucket() {
        // Every candidate produces all-absent against ZZZZZ: one bucket.
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);

        assert!(calculate_entropy(&guess, &candidates).abs() < 1e-12);

        // Distinguishable candidates give strictly positive entropy.
        let guess = Word::new("abcde").unwrap();
        let candidates = words(&["abcde", "vwxyz"]);
        assert!(calculate_entropy(&guess, &candidates) > 0.0);
    }

    #[test]
    fn entropy_perfect_binary_split_is_one_bit() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);

        let entropy = calculate_entropy(&guess, &candidates);
        assert!((entropy - 1.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_uniform_four_way_split_is_two_bits() {
        // Four candidates, four distinct patterns against ABCDE.
        let guess = Word::new("abcde").unwrap();
        let candidates = words(&["abcde", "abcdz", "abczz", "abzzz"]);

        let histogram = pattern_histogram(&guess, &candidates);
        assert_eq!(histogram.iter().filter(|&&c| c == 1).count(), 4);

        let entropy = calculate_entropy(&guess, &candidates);
        assert!((entropy - 2.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_skewed_split_below_uniform() {
        let guess = Word::new("grade").unwrap();
        // GRADE lumps CRANE/CRAVE/CRAZE into one bucket, GRADE alone in another
        let candidates = words(&["crane", "crave", "craze", "grade"]);

        let skewed = calculate_entropy(&guess, &candidates);
        let expected = -(0.75f64 * 0.75f64.log2()) - (0.25f64 * 0.25f64.log2());

        assert!((skewed - expected).abs() < 1e-9);
        assert!(skewed < 2.0);
    }

    #[test]
    fn histogram_counts_sum_to_candidates() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "trace", "raise", "crane"]);

        let histogram = pattern_histogram(&guess, &candidates);
        let total: u32 = histogram.iter().sum();

        assert_eq!(total as usize, candidates.len());
        assert_eq!(
            histogram[Pattern::PERFECT.value() as usize], 1,
            "CRANE itself lands in the perfect bucket"
        );
    }

    #[test]
    fn metrics_match_entropy_and_count_patterns() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "trace", "raise"]);

        let metrics = calculate_metrics(&guess, &candidates);
        let entropy = calculate_entropy(&guess, &candidates);

        assert!((metrics.entropy - entropy).abs() < 1e-12);
        assert!(metrics.pattern_count >= 1);
        assert!(metrics.expected_remaining >= 1.0);
        assert!(metrics.expected_remaining <= candidates.len() as f64);
    }

    #[test]
    fn metrics_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        let metrics = calculate_metrics(&guess, &[]);

        assert!(metrics.entropy.abs() < f64::EPSILON);
        assert_eq!(metrics.pattern_count, 0);
        assert!(metrics.expected_remaining.abs() < f64::EPSILON);
    }
}
