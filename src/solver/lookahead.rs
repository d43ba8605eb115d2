//! Counterfactual lookahead
//!
//! For every shortlisted guess, treat each remaining candidate as the true
//! answer, play the guess against it on a private copy of the constraint
//! state, and measure how the game would continue. Per-guess summary
//! statistics then feed a [`RankingPolicy`](super::policy::RankingPolicy).
//!
//! Each shortlisted guess is one independent unit of work on the worker pool.

use super::cache::PatternCache;
use super::constraints::ConstraintState;
use super::filter::{ScoredWord, filter_candidates, rank_words};
use crate::core::{FeedbackOracle, LetterStats, Word};
use crate::error::SolverError;
use rayon::ThreadPool;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// What a simulated round measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Measure {
    /// Candidates left after the guess (0 if it wins)
    #[default]
    RemainingCandidates,
    /// Further rounds the candidate-only heuristic needs to finish after the
    /// guess (0 if it wins). Much slower.
    FullGame,
}

impl FromStr for Measure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remaining" | "remaining-candidates" => Ok(Self::RemainingCandidates),
            "full-game" | "game" => Ok(Self::FullGame),
            other => Err(format!("unknown lookahead measure: {other}")),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RemainingCandidates => "remaining-candidates",
            Self::FullGame => "full-game",
        })
    }
}

/// Summary of one guess's outcomes across all hypothetical answers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutcomeStats {
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub max: usize,
    pub samples: usize,
}

impl OutcomeStats {
    #[must_use]
    pub fn from_outcomes(outcomes: &[usize]) -> Self {
        if outcomes.is_empty() {
            return Self {
                mean: 0.0,
                std_dev: 0.0,
                max: 0,
                samples: 0,
            };
        }

        let n = outcomes.len() as f64;
        let mean = outcomes.iter().sum::<usize>() as f64 / n;
        let variance = outcomes
            .iter()
            .map(|&x| {
                let d = x as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;

        Self {
            mean,
            std_dev: variance.sqrt(),
            max: outcomes.iter().copied().max().unwrap_or(0),
            samples: outcomes.len(),
        }
    }
}

/// A shortlisted guess with its simulated outcome statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessEvaluation {
    pub guess: ScoredWord,
    pub stats: OutcomeStats,
}

/// One lookahead pass over the current candidates
pub struct Lookahead<'a> {
    oracle: FeedbackOracle<'a>,
    candidates: &'a [Word],
    state: &'a ConstraintState,
    measure: Measure,
    cache_capacity: usize,
}

impl<'a> Lookahead<'a> {
    /// `candidates` must be the words currently admitted by `state`
    #[must_use]
    pub const fn new(
        oracle: FeedbackOracle<'a>,
        candidates: &'a [Word],
        state: &'a ConstraintState,
        measure: Measure,
        cache_capacity: usize,
    ) -> Self {
        Self {
            oracle,
            candidates,
            state,
            measure,
            cache_capacity,
        }
    }

    /// Evaluate every shortlisted guess on `pool`
    ///
    /// Waits for all units before returning. Results come back in shortlist
    /// order regardless of which worker finished first.
    ///
    /// # Errors
    /// The first simulation error (for example an unguessable shortlist word)
    /// fails the whole evaluation.
    pub fn evaluate(
        &self,
        shortlist: &[ScoredWord],
        pool: &ThreadPool,
    ) -> Result<Vec<GuessEvaluation>, SolverError> {
        pool.install(|| {
            shortlist
                .par_iter()
                .map_init(
                    || PatternCache::new(self.cache_capacity),
                    |cache, guess| self.evaluate_guess(cache, guess),
                )
                .collect()
        })
    }

    /// Simulate one guess against every candidate answer
    ///
    /// # Errors
    /// Propagates oracle errors.
    pub fn evaluate_guess(
        &self,
        cache: &mut PatternCache,
        guess: &ScoredWord,
    ) -> Result<GuessEvaluation, SolverError> {
        let outcomes = self
            .candidates
            .iter()
            .map(|hypothetical| self.outcome(cache, &guess.word, hypothetical))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GuessEvaluation {
            guess: *guess,
            stats: OutcomeStats::from_outcomes(&outcomes),
        })
    }

    fn outcome(
        &self,
        cache: &mut PatternCache,
        guess: &Word,
        hypothetical: &Word,
    ) -> Result<usize, SolverError> {
        let pattern = cache.score(&self.oracle, guess, hypothetical)?;
        if pattern.is_perfect() {
            return Ok(0);
        }

        let mut scratch = self.state.clone();
        scratch.apply(guess, pattern);

        match self.measure {
            Measure::RemainingCandidates => Ok(self
                .candidates
                .iter()
                .filter(|word| scratch.admits(word))
                .count()),
            Measure::FullGame => self.play_out(cache, scratch, hypothetical),
        }
    }

    /// Rounds the candidate-only heuristic needs to reach `answer`
    fn play_out(
        &self,
        cache: &mut PatternCache,
        mut state: ConstraintState,
        answer: &Word,
    ) -> Result<usize, SolverError> {
        let mut remaining = filter_candidates(self.candidates, &state);
        let mut rounds = 0;

        loop {
            let stats = LetterStats::from_words(&remaining);
            let next = rank_words(remaining.iter().copied(), &stats)
                .first()
                .map(|scored| scored.word)
                .ok_or(SolverError::NoCandidates)?;

            rounds += 1;
            let pattern = cache.score(&self.oracle, &next, answer)?;
            if pattern.is_perfect() {
                return Ok(rounds);
            }

            state.apply(&next, pattern);
            remaining = filter_candidates(&remaining, &state);
        }
    }
}
