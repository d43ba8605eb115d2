//! Accumulated knowledge from feedback
//!
//! A [`ConstraintState`] is a small value type: letter sets are bitmasks and
//! counts are fixed arrays, so cloning one for a hypothetical round only
//! copies a few dozen bytes plus the guess history.

use crate::core::{ALPHABET_SIZE, LetterSet, Mark, Pattern, WORD_LENGTH, Word, letter_index};

/// What the feedback so far says about the answer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintState {
    /// Letters confirmed absent from the answer
    excluded_letters: LetterSet,
    /// Minimum occurrences of each letter, indexed by `letter_index`
    required_counts: [u8; ALPHABET_SIZE],
    /// Letters confirmed at each position
    confirmed: [Option<u8>; WORD_LENGTH],
    /// Letters known not to sit at each position
    excluded_positions: [LetterSet; WORD_LENGTH],
    guess_history: Vec<Word>,
}

impl ConstraintState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one round of feedback into the state
    ///
    /// Applying the same guess and pattern twice leaves the state unchanged
    /// the second time.
    pub fn apply(&mut self, guess: &Word, pattern: Pattern) {
        let marks = pattern.marks();

        let mut hit_counts = [0u8; ALPHABET_SIZE];
        for (&letter, mark) in guess.chars().iter().zip(marks) {
            if mark.is_hit() {
                hit_counts[letter_index(letter)] += 1;
            }
        }

        for (position, (&letter, mark)) in guess.chars().iter().zip(marks).enumerate() {
            match mark {
                Mark::Exact => self.confirmed[position] = Some(letter),
                Mark::Present => self.excluded_positions[position].insert(letter),
                // A duplicate that scored elsewhere in this guess only rules
                // out this position
                Mark::Absent if hit_counts[letter_index(letter)] > 0 => {
                    self.excluded_positions[position].insert(letter);
                }
                Mark::Absent => self.excluded_letters.insert(letter),
            }
        }

        for (required, &hits) in self.required_counts.iter_mut().zip(&hit_counts) {
            *required = (*required).max(hits);
        }

        if !self.guess_history.contains(guess) {
            self.guess_history.push(*guess);
        }
    }

    /// True if `word` is still a possible answer
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.matches_known(word)
            && word.chars().iter().enumerate().all(|(position, &letter)| {
                !self.excluded_positions[position].contains(letter)
                    && (!self.excluded_letters.contains(letter)
                        || self.required_counts[letter_index(letter)] > 0)
            })
            && !self.has_guessed(word)
    }

    /// True if `word` keeps every confirmed letter in place and uses every
    /// required letter often enough (the hard-mode rule)
    #[must_use]
    pub fn matches_known(&self, word: &Word) -> bool {
        let counts = word.letter_counts();
        self.confirmed
            .iter()
            .zip(word.chars())
            .all(|(known, &letter)| known.is_none_or(|k| k == letter))
            && self
                .required_counts
                .iter()
                .zip(&counts)
                .all(|(&required, &have)| have >= required)
    }

    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.guess_history.contains(word)
    }

    /// Guesses applied so far, in order
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.guess_history
    }

    #[must_use]
    pub const fn excluded_letters(&self) -> LetterSet {
        self.excluded_letters
    }

    #[must_use]
    pub const fn required_count(&self, letter: u8) -> u8 {
        self.required_counts[letter_index(letter)]
    }

    /// Letters known to be in the answer
    #[must_use]
    pub fn required_letters(&self) -> LetterSet {
        self.required_counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(i, _)| crate::core::letter_from_index(i))
            .collect()
    }

    /// Sum of required counts across letters
    #[must_use]
    pub fn known_letter_count(&self) -> usize {
        self.required_counts.iter().map(|&c| usize::from(c)).sum()
    }

    #[must_use]
    pub const fn confirmed_at(&self, position: usize) -> Option<u8> {
        self.confirmed[position]
    }

    #[must_use]
    pub fn confirmed_count(&self) -> usize {
        self.confirmed.iter().flatten().count()
    }

    /// Positions without a confirmed letter
    pub fn open_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WORD_LENGTH).filter(|&position| self.confirmed[position].is_none())
    }

    #[must_use]
    pub const fn excluded_at(&self, position: usize) -> LetterSet {
        self.excluded_positions[position]
    }
}
