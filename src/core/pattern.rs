//! Feedback pattern calculation and representation
//!
//! A pattern encodes the judge's feedback for one guess using base-3
//! encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where position i
//! contributes digit × 3^i to the total.

use super::Word;
use super::word::WORD_LEN;

/// Number of distinct feedback patterns (3^5).
pub const PATTERN_COUNT: usize = 243;

/// Per-position feedback symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Feedback {
    /// Letter does not appear in the answer (gray)
    Absent = 0,
    /// Letter appears in the answer at another position (yellow)
    Present = 1,
    /// Letter is in the correct position (green)
    Exact = 2,
}

impl Feedback {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Wire-format character: E, P or A
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'E',
            Self::Present => 'P',
            Self::Absent => 'A',
        }
    }
}

/// Feedback pattern for one guess
///
/// Represents the five per-position symbols as a single byte value.
/// Value range: 0-242 (3^5 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All exact (winning pattern)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Create a pattern from a raw code
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < PATTERN_COUNT as u8, "Pattern code must be < 243");
        Self(value)
    }

    /// Get the raw pattern code (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is the winning pattern (all exact)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Calculate the pattern when `guess` is played and `answer` is hidden
    ///
    /// Implements the exact feedback rules, including duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume those answer letters
    /// 2. Second pass: mark present-but-misplaced letters from the
    ///    remaining pool, left to right
    /// 3. Encode as a base-3 number
    ///
    /// # Examples
    /// ```
    /// use salet::core::{Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// // C(absent) R(absent) A(exact) N(absent) E(exact)
    /// // 0 + 0×3 + 2×9 + 0×27 + 2×81 = 180
    /// assert_eq!(pattern.value(), 180);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut digits = [0u8; WORD_LEN];

        // Letters of the answer still available for PRESENT matches
        let mut available = [0u8; 26];
        for &letter in answer.bytes() {
            available[Word::alphabet_index(letter)] += 1;
        }

        // First pass: exact matches consume their answer letter
        for i in 0..WORD_LEN {
            let letter = guess.letter_at(i);
            if letter == answer.letter_at(i) {
                digits[i] = Feedback::Exact as u8;
                available[Word::alphabet_index(letter)] -= 1;
            }
        }

        // Second pass: misplaced letters consume from the remaining pool
        for i in 0..WORD_LEN {
            if digits[i] != 0 {
                continue;
            }
            let slot = &mut available[Word::alphabet_index(guess.letter_at(i))];
            if *slot > 0 {
                digits[i] = Feedback::Present as u8;
                *slot -= 1;
            }
        }

        Self::encode(digits)
    }

    /// Build a pattern from the five per-position symbols
    #[must_use]
    pub fn from_feedback(feedback: [Feedback; WORD_LEN]) -> Self {
        Self::encode(feedback.map(|f| f as u8))
    }

    /// Decode the pattern back into per-position symbols
    ///
    /// Inverse of [`Pattern::from_feedback`] for every code in [0, 243).
    #[must_use]
    pub fn feedback(self) -> [Feedback; WORD_LEN] {
        let mut symbols = [Feedback::Absent; WORD_LEN];
        let mut val = self.0;

        for symbol in &mut symbols {
            *symbol = Feedback::from_digit(val % 3);
            val /= 3;
        }

        symbols
    }

    fn encode(digits: [u8; WORD_LEN]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for &digit in &digits {
            value += digit * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Parse a pattern from a feedback string like "APAPE"
    ///
    /// Accepts, per position:
    /// - 'E'/'e'/'G'/'g'/🟩 for exact
    /// - 'P'/'p'/'Y'/'y'/🟨 for present
    /// - 'A'/'a'/'-'/'_'/⬜/⬛ for absent
    ///
    /// # Examples
    /// ```
    /// use salet::core::Pattern;
    ///
    /// let p1 = Pattern::parse("EPAAE").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜⬜🟩").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != WORD_LEN {
            return None;
        }

        let mut digits = [0u8; WORD_LEN];
        for (digit, ch) in digits.iter_mut().zip(chars) {
            *digit = match ch {
                'E' | 'e' | 'G' | 'g' | '🟩' => 2,
                'P' | 'p' | 'Y' | 'y' | '🟨' => 1,
                'A' | 'a' | '-' | '_' | '⬜' | '⬛' => 0,
                _ => return None,
            };
        }

        Some(Self::encode(digits))
    }

    /// Count the number of exact-position symbols
    #[must_use]
    pub fn count_exact(self) -> u8 {
        let mut count = 0;
        let mut val = self.0;

        for _ in 0..WORD_LEN {
            if val % 3 == 2 {
                count += 1;
            }
            val /= 3;
        }

        count
    }

    /// Render as colored block emoji, e.g. "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.feedback()
            .iter()
            .map(|f| match f {
                Feedback::Exact => '🟩',
                Feedback::Present => '🟨',
                Feedback::Absent => '⬛',
            })
            .collect()
    }
}

impl std::fmt::Display for Pattern {
    /// Wire-format string over the {E, P, A} alphabet
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in self.feedback() {
            write!(f, "{}", symbol.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}
