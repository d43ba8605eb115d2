//! Letter frequency tables
//!
//! Two scores drive every heuristic ranking:
//! - **coverage**: for each distinct letter of a word, how many reference
//!   words contain that letter, summed
//! - **placement**: for each position, how many reference words have the same
//!   letter at that position, summed

use super::letters::{ALPHABET_SIZE, letter_index};
use super::word::{WORD_LENGTH, Word};

/// Presence and per-position letter counts over a reference word set
#[derive(Debug, Clone)]
pub struct LetterStats {
    presence: [u32; ALPHABET_SIZE],
    placement: [[u32; ALPHABET_SIZE]; WORD_LENGTH],
    total: usize,
}

impl LetterStats {
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut presence = [0u32; ALPHABET_SIZE];
        let mut placement = [[0u32; ALPHABET_SIZE]; WORD_LENGTH];
        let mut total = 0;

        for word in words {
            total += 1;
            for letter in word.distinct_letters().iter() {
                presence[letter_index(letter)] += 1;
            }
            for (position, &letter) in word.chars().iter().enumerate() {
                placement[position][letter_index(letter)] += 1;
            }
        }

        Self {
            presence,
            placement,
            total,
        }
    }

    /// Number of reference words
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of reference words containing `letter`
    #[must_use]
    pub const fn presence(&self, letter: u8) -> u32 {
        self.presence[letter_index(letter)]
    }

    #[must_use]
    pub fn coverage(&self, word: &Word) -> u32 {
        word.distinct_letters()
            .iter()
            .map(|letter| self.presence(letter))
            .sum()
    }

    #[must_use]
    pub fn placement(&self, word: &Word) -> u32 {
        word.chars()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.placement[position][letter_index(letter)])
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn presence_counts_words_not_letters() {
        let stats = LetterStats::from_words(&words(&["sassy", "essay", "crane"]));
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.presence(b's'), 2);
        assert_eq!(stats.presence(b'a'), 3);
        assert_eq!(stats.presence(b'z'), 0);
    }

    #[test]
    fn coverage_ignores_repeats() {
        let stats = LetterStats::from_words(&words(&["crane", "slate", "irate"]));
        // a:3 e:3 r:2 t:2 and one each for c n s l i
        assert_eq!(stats.coverage(&Word::new("crane").unwrap()), 10);
        assert_eq!(stats.coverage(&Word::new("irate").unwrap()), 11);
        assert_eq!(stats.coverage(&Word::new("eeeee").unwrap()), 3);
    }

    #[test]
    fn placement_is_positional() {
        let stats = LetterStats::from_words(&words(&["crane", "slate", "irate"]));
        // e at 4 in all three, a at 2 in all three, r at 1 in crane and irate
        assert_eq!(stats.placement(&Word::new("grate").unwrap()), 2 + 3 + 2 + 3);
        assert_eq!(stats.placement(&Word::new("eaxxx").unwrap()), 0);
    }
}
