//! Error types for the solver
//!
//! Every failure in the library surfaces as a [`SolverError`]. Nothing is
//! retried; callers decide what to do with a failed solve.

use thiserror::Error;

/// Errors produced while building vocabularies or solving a puzzle
#[derive(Debug, Error)]
pub enum SolverError {
    /// Input is not a five-letter alphabetic word
    #[error("\"{word}\" is not a valid word: {reason}")]
    MalformedWord { word: String, reason: &'static str },

    /// A guess outside the guessable vocabulary was scored
    #[error("\"{0}\" is not in the guessable vocabulary")]
    InvalidGuess(String),

    /// The answer is not in the curated answer list and the vocabulary
    /// policy does not allow widening it
    #[error("\"{0}\" is not in the answer list, use the full dictionary")]
    UnsolvableWithRestrictedVocabulary(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not start the lookahead worker pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// No candidate answer is consistent with the accumulated feedback
    #[error("no candidate answers remain")]
    NoCandidates,
}

/// Result alias used throughout the library
pub type Result<T, E = SolverError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_word() {
        let err = SolverError::InvalidGuess("qzxvj".to_string());
        assert_eq!(
            err.to_string(),
            "\"qzxvj\" is not in the guessable vocabulary"
        );

        let err = SolverError::MalformedWord {
            word: "cr4ne".to_string(),
            reason: "only the letters a-z are allowed",
        };
        assert!(err.to_string().contains("cr4ne"));
    }
}
