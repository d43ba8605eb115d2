//! Pluggable solver policies
//!
//! - [`RankingPolicy`] orders lookahead evaluations to pick the final guess
//! - [`VocabularyPolicy`] decides the answer pool for a puzzle
//! - [`LookaheadTrigger`] decides when a round switches to lookahead

use super::constraints::ConstraintState;
use super::lookahead::GuessEvaluation;
use crate::core::{Vocabularies, Vocabulary, Word};
use crate::error::SolverError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Orders evaluated guesses, best first
pub trait RankingPolicy: Send + Sync {
    fn compare(&self, a: &GuessEvaluation, b: &GuessEvaluation) -> Ordering;

    /// Pick the best evaluation
    fn select<'e>(&self, evaluations: &'e [GuessEvaluation]) -> Option<&'e GuessEvaluation> {
        evaluations.iter().min_by(|a, b| self.compare(a, b))
    }
}

/// The two built-in ranking policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookaheadPolicy {
    /// Smallest average outcome, then spread, then worst case
    #[default]
    MinimizeMean,
    /// Smallest worst case, then spread, then average
    MinimizeMax,
}

impl RankingPolicy for LookaheadPolicy {
    fn compare(&self, a: &GuessEvaluation, b: &GuessEvaluation) -> Ordering {
        let (sa, sb) = (&a.stats, &b.stats);
        let primary = match self {
            Self::MinimizeMean => sa
                .mean
                .total_cmp(&sb.mean)
                .then(sa.std_dev.total_cmp(&sb.std_dev))
                .then(sa.max.cmp(&sb.max)),
            Self::MinimizeMax => sa
                .max
                .cmp(&sb.max)
                .then(sa.std_dev.total_cmp(&sb.std_dev))
                .then(sa.mean.total_cmp(&sb.mean)),
        };
        primary.then(a.guess.ranking_order(&b.guess))
    }
}

impl FromStr for LookaheadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" | "minimize-mean" | "min-mean" => Ok(Self::MinimizeMean),
            "max" | "minimize-max" | "min-max" | "minimax" => Ok(Self::MinimizeMax),
            other => Err(format!("unknown lookahead policy: {other}")),
        }
    }
}

impl fmt::Display for LookaheadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MinimizeMean => "minimize-mean",
            Self::MinimizeMax => "minimize-max",
        })
    }
}

/// Chooses the answer pool for a puzzle
pub trait VocabularyPolicy: Send + Sync {
    /// # Errors
    /// Returns [`SolverError::UnsolvableWithRestrictedVocabulary`] when the
    /// answer cannot be reached from any allowed pool.
    fn answer_pool<'v>(
        &self,
        vocab: &'v Vocabularies,
        answer: &Word,
    ) -> Result<&'v Vocabulary, SolverError>;
}

/// Only curated answers can be solved
#[derive(Debug, Clone, Copy, Default)]
pub struct RestrictedAnswers;

impl VocabularyPolicy for RestrictedAnswers {
    fn answer_pool<'v>(
        &self,
        vocab: &'v Vocabularies,
        answer: &Word,
    ) -> Result<&'v Vocabulary, SolverError> {
        if vocab.answerable().contains(answer) {
            Ok(vocab.answerable())
        } else {
            Err(SolverError::UnsolvableWithRestrictedVocabulary(
                answer.to_string(),
            ))
        }
    }
}

/// Fall back to the whole guess list when the answer is not curated
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackToGuessable;

impl VocabularyPolicy for FallbackToGuessable {
    fn answer_pool<'v>(
        &self,
        vocab: &'v Vocabularies,
        answer: &Word,
    ) -> Result<&'v Vocabulary, SolverError> {
        if vocab.answerable().contains(answer) {
            Ok(vocab.answerable())
        } else if vocab.guessable().contains(answer) {
            log::warn!(
                "{answer} is not in the answer list, solving against all {} guessable words",
                vocab.guessable().len()
            );
            Ok(vocab.guessable())
        } else {
            Err(SolverError::UnsolvableWithRestrictedVocabulary(
                answer.to_string(),
            ))
        }
    }
}

/// When a round uses lookahead instead of guessing the top candidate
///
/// Lookahead runs when the round is inside `first_round..=last_round`, more
/// than `candidate_threshold` candidates remain, and (if either gate is
/// non-zero) at least `min_known_letters` letters are known or at least
/// `min_confirmed` positions are confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookaheadTrigger {
    pub first_round: usize,
    pub last_round: usize,
    pub candidate_threshold: usize,
    pub min_known_letters: usize,
    pub min_confirmed: usize,
}

impl LookaheadTrigger {
    #[must_use]
    pub fn should_look_ahead(&self, round: usize, remaining: usize, state: &ConstraintState) -> bool {
        if !(self.first_round..=self.last_round).contains(&round)
            || remaining <= self.candidate_threshold
        {
            return false;
        }

        let known_gate = self.min_known_letters > 0;
        let confirmed_gate = self.min_confirmed > 0;
        if !known_gate && !confirmed_gate {
            return true;
        }

        (known_gate && state.known_letter_count() >= self.min_known_letters)
            || (confirmed_gate && state.confirmed_count() >= self.min_confirmed)
    }
}

impl Default for LookaheadTrigger {
    fn default() -> Self {
        Self {
            first_round: 2,
            last_round: 5,
            candidate_threshold: 2,
            min_known_letters: 0,
            min_confirmed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pattern;
    use crate::solver::filter::ScoredWord;
    use crate::solver::lookahead::OutcomeStats;

    fn evaluation(word: &str, mean: f64, std_dev: f64, max: usize) -> GuessEvaluation {
        GuessEvaluation {
            guess: ScoredWord {
                word: Word::new(word).unwrap(),
                coverage: 0,
                placement: 0,
            },
            stats: OutcomeStats {
                mean,
                std_dev,
                max,
                samples: 10,
            },
        }
    }

    #[test]
    fn mean_and_max_policies_disagree() {
        let steady = evaluation("stead", 3.0, 0.5, 4);
        let risky = evaluation("risky", 2.0, 2.0, 9);
        let evaluations = [steady, risky];

        let by_mean = LookaheadPolicy::MinimizeMean.select(&evaluations).unwrap();
        let by_max = LookaheadPolicy::MinimizeMax.select(&evaluations).unwrap();

        assert_eq!(by_mean.guess.word.text(), "risky");
        assert_eq!(by_max.guess.word.text(), "stead");
    }

    #[test]
    fn ties_fall_back_to_heuristic_order() {
        let a = evaluation("crane", 1.0, 0.0, 1);
        let mut b = evaluation("slate", 1.0, 0.0, 1);
        b.guess.coverage = 5;

        let evaluations = [a, b];
        let best = LookaheadPolicy::MinimizeMean.select(&evaluations).unwrap();
        assert_eq!(best.guess.word.text(), "slate");
    }

    #[test]
    fn policy_parses() {
        assert_eq!("mean".parse::<LookaheadPolicy>(), Ok(LookaheadPolicy::MinimizeMean));
        assert_eq!("minimax".parse::<LookaheadPolicy>(), Ok(LookaheadPolicy::MinimizeMax));
        assert!("median".parse::<LookaheadPolicy>().is_err());
        assert_eq!(LookaheadPolicy::MinimizeMax.to_string(), "minimize-max");
    }

    #[test]
    fn restricted_pool_rejects_uncurated_answer() {
        let vocab = Vocabularies::new(
            Vocabulary::from_strs(["crane", "slate", "xylyl"]).unwrap(),
            Vocabulary::from_strs(["crane", "slate"]).unwrap(),
        );
        let odd = Word::new("xylyl").unwrap();

        assert!(matches!(
            RestrictedAnswers.answer_pool(&vocab, &odd),
            Err(SolverError::UnsolvableWithRestrictedVocabulary(_))
        ));
        assert_eq!(
            FallbackToGuessable.answer_pool(&vocab, &odd).unwrap().len(),
            3
        );
        let unknown = Word::new("qqqqq").unwrap();
        assert!(FallbackToGuessable.answer_pool(&vocab, &unknown).is_err());
    }

    #[test]
    fn trigger_default_window() {
        let trigger = LookaheadTrigger::default();
        let state = ConstraintState::new();

        assert!(!trigger.should_look_ahead(1, 100, &state));
        assert!(trigger.should_look_ahead(2, 3, &state));
        assert!(!trigger.should_look_ahead(2, 2, &state));
        assert!(trigger.should_look_ahead(5, 50, &state));
        assert!(!trigger.should_look_ahead(6, 50, &state));
    }

    #[test]
    fn trigger_letter_gates() {
        let trigger = LookaheadTrigger {
            min_known_letters: 3,
            min_confirmed: 3,
            ..LookaheadTrigger::default()
        };
        let mut state = ConstraintState::new();
        assert!(!trigger.should_look_ahead(2, 10, &state));

        let guess = Word::new("crane").unwrap();
        state.apply(&guess, Pattern::calculate(&guess, &Word::new("trace").unwrap()));
        // c, r, a, e all hit
        assert!(trigger.should_look_ahead(2, 10, &state));
    }
}
