//! Core domain types for Wordle
//!
//! Words, letter sets, feedback patterns, vocabularies and the letter
//! frequency tables the heuristics score against.

mod letters;
mod oracle;
mod pattern;
mod stats;
mod vocabulary;
mod word;

pub use letters::{ALPHABET_SIZE, LetterSet, letter_from_index, letter_index};
pub use oracle::FeedbackOracle;
pub use pattern::{Mark, Pattern};
pub use stats::LetterStats;
pub use vocabulary::{Vocabularies, Vocabulary};
pub use word::{WORD_LENGTH, Word};
