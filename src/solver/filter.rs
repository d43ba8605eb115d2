//! Candidate filtering and ordering

use super::constraints::ConstraintState;
use crate::core::{LetterStats, Word};
use std::cmp::Ordering;

/// A word with its two heuristic scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: Word,
    pub coverage: u32,
    pub placement: u32,
}

impl ScoredWord {
    #[must_use]
    pub fn new(word: Word, stats: &LetterStats) -> Self {
        Self {
            word,
            coverage: stats.coverage(&word),
            placement: stats.placement(&word),
        }
    }

    /// Best first: coverage descending, then placement descending, then
    /// alphabetical so ties are stable
    #[must_use]
    pub fn ranking_order(&self, other: &Self) -> Ordering {
        other
            .coverage
            .cmp(&self.coverage)
            .then(other.placement.cmp(&self.placement))
            .then(self.word.cmp(&other.word))
    }
}

/// Words from `pool` still consistent with `state`, in pool order
///
/// The output is always a subset of `pool`.
pub fn filter_candidates<'a>(
    pool: impl IntoIterator<Item = &'a Word>,
    state: &ConstraintState,
) -> Vec<Word> {
    pool.into_iter()
        .filter(|word| state.admits(word))
        .copied()
        .collect()
}

/// Score `words` against `stats` and sort best first
pub fn rank_words(words: impl IntoIterator<Item = Word>, stats: &LetterStats) -> Vec<ScoredWord> {
    let mut scored: Vec<ScoredWord> = words
        .into_iter()
        .map(|word| ScoredWord::new(word, stats))
        .collect();
    scored.sort_by(ScoredWord::ranking_order);
    scored
}

/// Filter `pool` and order the survivors
///
/// With `local_stats` the scores come from the surviving candidates
/// themselves; otherwise `static_stats` is used.
pub fn ranked_candidates<'a>(
    pool: impl IntoIterator<Item = &'a Word>,
    state: &ConstraintState,
    static_stats: &LetterStats,
    local_stats: bool,
) -> Vec<ScoredWord> {
    let candidates = filter_candidates(pool, state);
    if local_stats {
        let stats = LetterStats::from_words(&candidates);
        rank_words(candidates, &stats)
    } else {
        rank_words(candidates, static_stats)
    }
}
