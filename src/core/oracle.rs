//! Feedback oracle
//!
//! Scores guesses against an answer, refusing guesses that are not in the
//! guessable vocabulary.

use super::pattern::Pattern;
use super::vocabulary::Vocabulary;
use super::word::Word;
use crate::error::SolverError;

/// Validating wrapper around [`Pattern::calculate`]
#[derive(Debug, Clone, Copy)]
pub struct FeedbackOracle<'a> {
    guessable: &'a Vocabulary,
}

impl<'a> FeedbackOracle<'a> {
    #[must_use]
    pub const fn new(guessable: &'a Vocabulary) -> Self {
        Self { guessable }
    }

    /// Score `guess` against `answer`
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidGuess`] if `guess` is not guessable.
    pub fn score(&self, guess: &Word, answer: &Word) -> Result<Pattern, SolverError> {
        self.check(guess)?;
        Ok(Pattern::calculate(guess, answer))
    }

    /// Ensure `guess` is a legal guess
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidGuess`] if `guess` is not guessable.
    pub fn check(&self, guess: &Word) -> Result<(), SolverError> {
        if self.guessable.contains(guess) {
            Ok(())
        } else {
            Err(SolverError::InvalidGuess(guess.to_string()))
        }
    }

    #[must_use]
    pub const fn guessable(&self) -> &'a Vocabulary {
        self.guessable
    }
}
