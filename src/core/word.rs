//! Wordle word representation
//!
//! A Word is five lowercase ASCII letters stored inline, so it is `Copy` and
//! cheap to hash. That keeps constraint snapshots and cache keys small.

use super::letters::{ALPHABET_SIZE, LetterSet, letter_index};
use crate::error::SolverError;
use std::fmt;
use std::str::FromStr;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter lowercase word
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns [`SolverError::MalformedWord`] if the input is not exactly five
    /// ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, SolverError> {
        let raw = text.as_ref();
        let malformed = |reason| SolverError::MalformedWord {
            word: raw.to_string(),
            reason,
        };

        if !raw.is_ascii() {
            return Err(malformed("only the letters a-z are allowed"));
        }

        let lower = raw.to_ascii_lowercase();
        let chars: [u8; WORD_LENGTH] = lower
            .as_bytes()
            .try_into()
            .map_err(|_| malformed("words must be exactly five letters"))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(malformed("only the letters a-z are allowed"));
        }

        Ok(Self(chars))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Construction guarantees ASCII
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Occurrence count of every letter, indexed by [`letter_index`]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &ch in &self.0 {
            counts[letter_index(ch)] += 1;
        }
        counts
    }

    /// The set of distinct letters in the word
    #[must_use]
    pub fn distinct_letters(&self) -> LetterSet {
        self.0.iter().copied().collect()
    }

    /// True when some letter appears more than once
    #[must_use]
    pub fn has_repeated_letters(&self) -> bool {
        self.distinct_letters().len() < WORD_LENGTH
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.text())
    }
}

impl FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
