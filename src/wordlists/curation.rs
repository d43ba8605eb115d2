//! Answer list curation
//!
//! Daily answers are common words, so the raw answer list is trimmed of
//! excluded words, likely plurals and (optionally) anything outside a
//! common-word allow list.

use crate::core::{Vocabulary, Word};
use rustc_hash::FxHashSet;

/// Ends in `s` but not in `ss`, `us` or `is`
#[must_use]
pub fn is_likely_plural(word: &Word) -> bool {
    let text = word.text();
    text.ends_with('s') && !["ss", "us", "is"].iter().any(|end| text.ends_with(end))
}

/// Rules for building the answerable vocabulary from a raw list
#[derive(Debug, Clone)]
pub struct CurationRules {
    exclusions: FxHashSet<Word>,
    drop_plurals: bool,
    common_words: Option<FxHashSet<Word>>,
}

impl Default for CurationRules {
    fn default() -> Self {
        Self {
            exclusions: FxHashSet::default(),
            drop_plurals: true,
            common_words: None,
        }
    }
}

impl CurationRules {
    /// Drop plurals, nothing else
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep every word
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            drop_plurals: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_exclusions(mut self, words: impl IntoIterator<Item = Word>) -> Self {
        self.exclusions.extend(words);
        self
    }

    #[must_use]
    pub const fn with_plurals_dropped(mut self, drop: bool) -> Self {
        self.drop_plurals = drop;
        self
    }

    /// Only keep words also in `words`
    #[must_use]
    pub fn with_common_words(mut self, words: impl IntoIterator<Item = Word>) -> Self {
        self.common_words = Some(words.into_iter().collect());
        self
    }

    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        !self.exclusions.contains(word)
            && !(self.drop_plurals && is_likely_plural(word))
            && self
                .common_words
                .as_ref()
                .is_none_or(|common| common.contains(word))
    }

    /// Apply the rules to a raw answer list
    pub fn curate<'a>(&self, raw: impl IntoIterator<Item = &'a Word>) -> Vocabulary {
        let mut dropped = 0usize;
        let kept: Vec<Word> = raw
            .into_iter()
            .filter(|word| {
                let keep = self.allows(word);
                if !keep {
                    dropped += 1;
                }
                keep
            })
            .copied()
            .collect();

        log::debug!("curated answer list: kept {}, dropped {dropped}", kept.len());
        Vocabulary::new(kept)
    }
}
