//! Guess generation heuristics
//!
//! Two rankings over the guess vocabulary:
//! - the opening ranking scores every legal guess against static letter
//!   statistics of the answer pool
//! - the information shortlist looks for words made of letters that can
//!   still tell the remaining candidates apart, even if the word itself can
//!   no longer be the answer

use super::constraints::ConstraintState;
use super::filter::ScoredWord;
use crate::core::{LetterSet, LetterStats, Vocabulary, Word};
use rayon::prelude::*;

/// Rank the guess vocabulary for a round without lookahead
///
/// Keeps words consistent with `state` (and with the hard-mode rule when
/// `hard_mode` is set), ordered by coverage then placement.
#[must_use]
pub fn rank_guesses(
    guessable: &Vocabulary,
    state: &ConstraintState,
    stats: &LetterStats,
    hard_mode: bool,
) -> Vec<ScoredWord> {
    let mut ranked: Vec<ScoredWord> = guessable
        .words()
        .par_iter()
        .filter(|word| state.admits(word) && (!hard_mode || state.matches_known(word)))
        .map(|&word| ScoredWord::new(word, stats))
        .collect();
    ranked.sort_by(ScoredWord::ranking_order);
    ranked
}

/// Letters that could still fill an open position
///
/// Collected from the open positions of every candidate, minus letters
/// already known to be in the answer.
#[must_use]
pub fn letters_it_could_be(candidates: &[Word], state: &ConstraintState) -> LetterSet {
    let open: Vec<usize> = state.open_positions().collect();
    candidates
        .iter()
        .flat_map(|word| open.iter().map(move |&position| word.char_at(position)))
        .collect::<LetterSet>()
        .difference(state.required_letters())
}

/// Score a word for the information shortlist
///
/// Coverage counts the word's letters that are still undecided; placement is
/// measured against the remaining candidates.
#[must_use]
pub fn score_information_guess(
    word: Word,
    undecided: LetterSet,
    local_stats: &LetterStats,
) -> ScoredWord {
    ScoredWord {
        word,
        coverage: word
            .chars()
            .iter()
            .filter(|&&letter| undecided.contains(letter))
            .count() as u32,
        placement: local_stats.placement(&word),
    }
}

/// Best `size` information-gathering guesses for the remaining candidates
///
/// Only words without repeated letters that have not been guessed yet are
/// considered. In hard mode words must also satisfy the known letters.
#[must_use]
pub fn information_shortlist(
    guessable: &Vocabulary,
    candidates: &[Word],
    state: &ConstraintState,
    hard_mode: bool,
    size: usize,
) -> Vec<ScoredWord> {
    let undecided = letters_it_could_be(candidates, state);
    let local_stats = LetterStats::from_words(candidates);

    let mut scored: Vec<ScoredWord> = guessable
        .words()
        .par_iter()
        .filter(|word| {
            !word.has_repeated_letters()
                && !state.has_guessed(word)
                && (!hard_mode || state.matches_known(word))
        })
        .map(|&word| score_information_guess(word, undecided, &local_stats))
        .collect();

    scored.sort_by(ScoredWord::ranking_order);
    scored.truncate(size);
    log::debug!(
        "shortlist of {} from letters {undecided:?}: {:?}",
        scored.len(),
        scored.iter().take(10).map(|s| s.word.text()).collect::<Vec<_>>()
    );
    scored
}
