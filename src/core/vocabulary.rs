//! Word vocabularies
//!
//! A [`Vocabulary`] is an immutable, deduplicated, alphabetically ordered set
//! of words. [`Vocabularies`] pairs the broad guess list with the curated
//! answer list for the lifetime of a solver.

use super::word::Word;
use crate::error::SolverError;
use rustc_hash::FxHashSet;

/// An immutable set of words with stable iteration order
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Vocabulary {
    /// Build a vocabulary, dropping duplicates
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let index: FxHashSet<Word> = words.into_iter().collect();
        let mut words: Vec<Word> = index.iter().copied().collect();
        words.sort_unstable();
        Self { words, index }
    }

    /// Build a vocabulary from strings
    ///
    /// # Errors
    /// Returns [`SolverError::MalformedWord`] for the first invalid entry.
    pub fn from_strs<I, S>(words: I) -> Result<Self, SolverError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(words))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Words in alphabetical order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.words.iter().all(|w| other.contains(w))
    }

    /// A new vocabulary holding the words of both
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.words.iter().chain(other.words.iter()).copied())
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// The two word pools a solver works with
#[derive(Debug, Clone)]
pub struct Vocabularies {
    guessable: Vocabulary,
    answerable: Vocabulary,
}

impl Vocabularies {
    /// Pair a guess list with an answer list
    ///
    /// Answer words missing from the guess list are added to it, since every
    /// possible answer must also be a legal guess.
    #[must_use]
    pub fn new(guessable: Vocabulary, answerable: Vocabulary) -> Self {
        let guessable = if answerable.is_subset_of(&guessable) {
            guessable
        } else {
            let widened = guessable.union(&answerable);
            log::warn!(
                "{} answer words were missing from the guess list and have been added",
                widened.len() - guessable.len()
            );
            widened
        };

        Self {
            guessable,
            answerable,
        }
    }

    #[inline]
    #[must_use]
    pub const fn guessable(&self) -> &Vocabulary {
        &self.guessable
    }

    #[inline]
    #[must_use]
    pub const fn answerable(&self) -> &Vocabulary {
        &self.answerable
    }
}
