//! Word lists for Wordle solving
//!
//! Loading word lists from disk and curating the answer list.

pub mod curation;
pub mod loader;

pub use curation::{CurationRules, is_likely_plural};
pub use loader::{load_from_file, parse_words, words_from_slice};

use crate::core::{Vocabularies, Vocabulary, Word};

/// Build both vocabularies from raw lists
///
/// The answer list is curated with `rules`; any answer missing from the
/// guess list is added to it.
#[must_use]
pub fn build_vocabularies(
    guessable: Vec<Word>,
    raw_answers: &[Word],
    rules: &CurationRules,
) -> Vocabularies {
    Vocabularies::new(Vocabulary::new(guessable), rules.curate(raw_answers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_end_up_guessable() {
        let guessable = words_from_slice(&["crane", "slate"]);
        let answers = words_from_slice(&["crane", "irate", "cards"]);

        let vocab = build_vocabularies(guessable, &answers, &CurationRules::new());

        assert_eq!(vocab.answerable().len(), 2);
        assert!(vocab.answerable().is_subset_of(vocab.guessable()));
        assert_eq!(vocab.guessable().len(), 3);
    }
}
