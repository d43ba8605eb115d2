//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::letters::letter_index;
use super::word::{WORD_LENGTH, Word};

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent = 0,
    Present = 1,
    Exact = 2,
}

impl Mark {
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Weight used for the luck factor: exact 2, present 1, absent 0
    #[must_use]
    pub const fn weight(self) -> u8 {
        self as u8
    }

    /// True for `Exact` and `Present`
    #[must_use]
    pub const fn is_hit(self) -> bool {
        !matches!(self, Self::Absent)
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All exact (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Build a pattern from per-position marks
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LENGTH]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            pattern += mark as u8 * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is a perfect match (all exact)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Mark at a single position
    #[must_use]
    pub fn mark(self, position: usize) -> Mark {
        Mark::from_digit(self.0 / 3u8.pow(position as u32) % 3)
    }

    /// Marks for every position, left to right
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LENGTH] {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Implements Wordle's feedback rules including duplicate letters: exact
    /// matches are claimed first, then the remaining answer letters are handed
    /// out left to right, so a repeated guess letter only earns as many
    /// `Present` marks as the answer has spare copies.
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::{Mark, Pattern, Word};
    ///
    /// let guess = Word::new("sassy").unwrap();
    /// let answer = Word::new("essay").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer);
    ///
    /// assert_eq!(
    ///     pattern.marks(),
    ///     [Mark::Present, Mark::Present, Mark::Exact, Mark::Absent, Mark::Exact]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut answer_available = [0u8; 26];

        // First pass: exact matches; everything else goes into the pool
        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                marks[i] = Mark::Exact;
            } else {
                answer_available[letter_index(a)] += 1;
            }
        }

        // Second pass: leftmost guess letters claim the remaining supply
        for (i, &g) in guess.chars().iter().enumerate() {
            if marks[i] == Mark::Exact {
                continue;
            }
            let supply = &mut answer_available[letter_index(g)];
            if *supply > 0 {
                marks[i] = Mark::Present;
                *supply -= 1;
            }
        }

        Self::from_marks(marks)
    }

    /// Sum of mark weights (exact 2, present 1)
    #[must_use]
    pub fn weight(self) -> u8 {
        self.marks().iter().map(|m| m.weight()).sum()
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::{Pattern, Word};
    ///
    /// let p = Pattern::calculate(&Word::new("crane").unwrap(), &Word::new("caper").unwrap());
    /// assert_eq!(p.to_emoji(), "🟩🟨🟨⬜🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks().iter().map(|m| m.emoji()).collect()
    }
}
