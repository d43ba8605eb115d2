//! Wordle solving algorithms
//!
//! Candidate filtering and heuristic ranking pick most guesses; a
//! counterfactual lookahead over an information shortlist takes over in the
//! middle rounds when several candidates remain.

pub mod cache;
pub mod constraints;
mod engine;
pub mod filter;
pub mod heuristic;
pub mod lookahead;
pub mod policy;

pub use cache::PatternCache;
pub use constraints::ConstraintState;
pub use engine::{GameState, GuessSource, Puzzle, RoundRecord, Session, SolveResult, Solver};
pub use filter::ScoredWord;
pub use lookahead::{GuessEvaluation, Lookahead, Measure, OutcomeStats};
pub use policy::{
    FallbackToGuessable, LookaheadPolicy, LookaheadTrigger, RankingPolicy, RestrictedAnswers,
    VocabularyPolicy,
};
