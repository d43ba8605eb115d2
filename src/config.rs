//! Solver configuration

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::cache::DEFAULT_CACHE_CAPACITY;
use crate::solver::{LookaheadPolicy, LookaheadTrigger, Measure};
use std::fmt;
use std::str::FromStr;

/// How far a round may stray from the candidate list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessMode {
    /// Always guess the best-ranked remaining candidate
    CandidatesOnly,
    /// When the trigger fires, guess the top information word without
    /// simulating
    Shortlist,
    /// When the trigger fires, simulate the shortlist and let the ranking
    /// policy choose
    #[default]
    Lookahead,
}

impl FromStr for GuessMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "candidates" | "candidates-only" => Ok(Self::CandidatesOnly),
            "shortlist" => Ok(Self::Shortlist),
            "lookahead" => Ok(Self::Lookahead),
            other => Err(format!("unknown guess mode: {other}")),
        }
    }
}

impl fmt::Display for GuessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CandidatesOnly => "candidates-only",
            Self::Shortlist => "shortlist",
            Self::Lookahead => "lookahead",
        })
    }
}

/// Tunable solver options
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Every guess must keep confirmed letters in place and use all known
    /// letters
    pub hard_mode: bool,
    /// Round-1 guess, overriding the opening ranking
    pub forced_opening_guess: Option<Word>,
    /// Number of information words simulated per lookahead round
    pub lookahead_shortlist_size: usize,
    pub lookahead_policy: LookaheadPolicy,
    /// Threads in the lookahead worker pool
    pub worker_count: usize,
    pub measure: Measure,
    pub guess_mode: GuessMode,
    pub trigger: LookaheadTrigger,
    /// Order candidates by statistics of the remaining candidates rather
    /// than of the whole answer pool
    pub local_scoring: bool,
    /// Extra words always added to the lookahead shortlist
    pub augmented_guesses: Vec<Word>,
    /// Bound of each lookahead worker's pattern cache
    pub cache_capacity: usize,
}

impl SolverConfig {
    /// # Errors
    /// Returns [`SolverError::InvalidConfig`] for a zero shortlist size,
    /// worker count or cache capacity, or an empty trigger window.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.lookahead_shortlist_size == 0 {
            return Err(SolverError::InvalidConfig(
                "lookahead shortlist size must be at least 1".to_string(),
            ));
        }
        if self.worker_count == 0 {
            return Err(SolverError::InvalidConfig(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(SolverError::InvalidConfig(
                "cache capacity must be at least 1".to_string(),
            ));
        }
        if self.trigger.first_round > self.trigger.last_round {
            return Err(SolverError::InvalidConfig(format!(
                "lookahead window {}..={} is empty",
                self.trigger.first_round, self.trigger.last_round
            )));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            hard_mode: false,
            forced_opening_guess: None,
            lookahead_shortlist_size: 40,
            lookahead_policy: LookaheadPolicy::MinimizeMean,
            worker_count: 8,
            measure: Measure::RemainingCandidates,
            guess_mode: GuessMode::Lookahead,
            trigger: LookaheadTrigger::default(),
            local_scoring: true,
            augmented_guesses: Vec::new(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}
