//! Bounded memo of feedback patterns
//!
//! Each lookahead worker owns its cache and reuses it across the shortlisted
//! guesses it evaluates, so no cache is ever shared between threads. Scoring
//! a guess against every hypothetical answer never repeats a pair; hits come
//! from full-game play-outs, where the same candidate is played against the
//! same hypothetical answer under different first guesses.

use crate::core::{FeedbackOracle, Pattern, Word};
use crate::error::SolverError;
use rustc_hash::FxHashMap;

/// Default number of (guess, answer) entries kept before the cache resets
pub const DEFAULT_CACHE_CAPACITY: usize = 1 << 16;

/// Memoized `(guess, answer) -> Pattern` lookups
#[derive(Debug, Clone)]
pub struct PatternCache {
    entries: FxHashMap<(Word, Word), Pattern>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl PatternCache {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::default(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Score through the oracle, remembering the result
    ///
    /// When the cache is full it is cleared before the new entry goes in.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidGuess`] if the oracle rejects `guess`.
    pub fn score(
        &mut self,
        oracle: &FeedbackOracle<'_>,
        guess: &Word,
        answer: &Word,
    ) -> Result<Pattern, SolverError> {
        if let Some(&pattern) = self.entries.get(&(*guess, *answer)) {
            self.hits += 1;
            return Ok(pattern);
        }

        let pattern = oracle.score(guess, answer)?;
        self.misses += 1;
        if self.entries.len() >= self.capacity {
            self.entries.clear();
        }
        self.entries.insert((*guess, *answer), pattern);
        Ok(pattern)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (hits, misses) since creation
    #[must_use]
    pub const fn counters(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
