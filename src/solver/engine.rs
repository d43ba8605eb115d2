//! Main Wordle solver interface
//!
//! A [`Solver`] holds the vocabularies, configuration, policies and the
//! lookahead worker pool, and can be reused across puzzles. Each puzzle is
//! played by a [`Session`], which owns the constraint state, the candidate
//! list and the round transcript for that one run.

use super::constraints::ConstraintState;
use super::filter::{ScoredWord, filter_candidates, ranked_candidates};
use super::heuristic::{information_shortlist, letters_it_could_be, rank_guesses, score_information_guess};
use super::lookahead::{GuessEvaluation, Lookahead};
use super::policy::{RankingPolicy, RestrictedAnswers, VocabularyPolicy};
use crate::config::{GuessMode, SolverConfig};
use crate::core::{FeedbackOracle, LetterStats, Pattern, Vocabularies, Word};
use crate::error::SolverError;
use crate::output::formatters::format_transcript;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// The puzzle to solve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub answer: Word,
    /// Puzzle number shown in the transcript header
    pub number: Option<u32>,
}

impl Puzzle {
    /// # Errors
    /// Returns [`SolverError::MalformedWord`] if `answer` is not a valid word.
    pub fn new(answer: &str, number: Option<u32>) -> Result<Self, SolverError> {
        Ok(Self {
            answer: Word::new(answer)?,
            number,
        })
    }
}

/// How a round's guess was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessSource {
    /// Configured opening guess
    Forced,
    /// Top of the round-1 vocabulary ranking
    Opening,
    /// Best-ranked remaining candidate
    Candidate,
    /// Top information word, not simulated
    Shortlist,
    /// Chosen by counterfactual lookahead
    Lookahead,
}

/// One played round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    pub guess: Word,
    pub pattern: Pattern,
    /// Candidates consistent with the feedback before this round
    pub candidates_before: usize,
    /// Candidates consistent with the feedback after this round
    pub remaining: usize,
    pub source: GuessSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Initialized,
    Guessing,
    Won,
}

/// Everything a finished solve reports
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub rounds_used: usize,
    pub final_guess: Word,
    /// Shareable emoji grid
    pub transcript: String,
    /// Reported alongside the transcript, not inside it
    pub luck_factor: usize,
    pub guess_history: Vec<Word>,
    pub rounds: Vec<RoundRecord>,
    pub puzzle_number: Option<u32>,
    /// Rounds won by a configured augmented guess
    pub augmented_picks: usize,
}

/// Reusable solver over a fixed pair of vocabularies
pub struct Solver<'a> {
    vocab: &'a Vocabularies,
    config: SolverConfig,
    vocabulary_policy: Box<dyn VocabularyPolicy>,
    ranking_policy: Box<dyn RankingPolicy>,
    workers: ThreadPool,
}

impl<'a> Solver<'a> {
    /// Create a solver
    ///
    /// Uses [`RestrictedAnswers`] and the configured lookahead policy until
    /// replaced with the `with_*` methods.
    ///
    /// # Errors
    /// - [`SolverError::InvalidConfig`] if the configuration is invalid
    /// - [`SolverError::InvalidGuess`] if the forced opening guess or an
    ///   augmented guess is not guessable
    /// - [`SolverError::WorkerPool`] if the worker threads cannot start
    pub fn new(vocab: &'a Vocabularies, config: SolverConfig) -> Result<Self, SolverError> {
        config.validate()?;

        let oracle = FeedbackOracle::new(vocab.guessable());
        if let Some(opening) = &config.forced_opening_guess {
            oracle.check(opening)?;
        }
        for extra in &config.augmented_guesses {
            oracle.check(extra)?;
        }

        let workers = ThreadPoolBuilder::new()
            .num_threads(config.worker_count)
            .thread_name(|i| format!("lookahead-{i}"))
            .build()?;

        Ok(Self {
            vocab,
            ranking_policy: Box::new(config.lookahead_policy),
            vocabulary_policy: Box::new(RestrictedAnswers),
            config,
            workers,
        })
    }

    #[must_use]
    pub fn with_vocabulary_policy(mut self, policy: impl VocabularyPolicy + 'static) -> Self {
        self.vocabulary_policy = Box::new(policy);
        self
    }

    #[must_use]
    pub fn with_ranking_policy(mut self, policy: impl RankingPolicy + 'static) -> Self {
        self.ranking_policy = Box::new(policy);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn vocabularies(&self) -> &'a Vocabularies {
        self.vocab
    }

    /// Run `op` on the solver's worker pool
    ///
    /// Parallel iterators inside `op` use `worker_count` threads.
    pub fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        self.workers.install(op)
    }

    /// Start a session for `puzzle`
    ///
    /// # Errors
    /// Returns [`SolverError::UnsolvableWithRestrictedVocabulary`] if the
    /// vocabulary policy has no answer pool containing the answer.
    pub fn session(&self, puzzle: &Puzzle) -> Result<Session<'_, 'a>, SolverError> {
        Session::new(self, *puzzle)
    }

    /// Play `puzzle` to the end
    ///
    /// # Errors
    /// Propagates any error from [`Solver::session`] or from a round.
    pub fn solve(&self, puzzle: &Puzzle) -> Result<SolveResult, SolverError> {
        self.session(puzzle)?.run()
    }
}

struct Choice {
    word: Word,
    source: GuessSource,
    augmented: bool,
}

impl Choice {
    const fn new(word: Word, source: GuessSource) -> Self {
        Self {
            word,
            source,
            augmented: false,
        }
    }
}

/// One puzzle run
pub struct Session<'s, 'a> {
    solver: &'s Solver<'a>,
    puzzle: Puzzle,
    oracle: FeedbackOracle<'a>,
    /// Letter statistics of the whole answer pool
    static_stats: LetterStats,
    state: ConstraintState,
    candidates: Vec<Word>,
    rounds: Vec<RoundRecord>,
    game: GameState,
    luck_factor: Option<usize>,
    augmented_picks: usize,
}

impl<'s, 'a> Session<'s, 'a> {
    fn new(solver: &'s Solver<'a>, puzzle: Puzzle) -> Result<Self, SolverError> {
        let pool = solver
            .vocabulary_policy
            .answer_pool(solver.vocab, &puzzle.answer)?;
        log::debug!(
            "solving with {} answer words and {} guessable words",
            pool.len(),
            solver.vocab.guessable().len()
        );

        Ok(Self {
            solver,
            puzzle,
            oracle: FeedbackOracle::new(solver.vocab.guessable()),
            static_stats: LetterStats::from_words(pool),
            state: ConstraintState::new(),
            candidates: pool.words().to_vec(),
            rounds: Vec::new(),
            game: GameState::Initialized,
            luck_factor: None,
            augmented_picks: 0,
        })
    }

    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        &self.state
    }

    #[must_use]
    pub const fn game_state(&self) -> GameState {
        self.game
    }

    /// Answers still consistent with the feedback so far
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// The guess the next round would play
    ///
    /// # Errors
    /// Propagates lookahead errors.
    pub fn next_guess(&self) -> Result<(Word, GuessSource), SolverError> {
        self.choose().map(|choice| (choice.word, choice.source))
    }

    /// Choose, score and apply one guess
    ///
    /// After the game is won this returns the winning round again.
    ///
    /// # Errors
    /// Propagates lookahead and oracle errors.
    pub fn play_round(&mut self) -> Result<RoundRecord, SolverError> {
        if let (GameState::Won, Some(last)) = (self.game, self.rounds.last()) {
            return Ok(*last);
        }
        self.game = GameState::Guessing;

        let choice = self.choose()?;
        let round = self.rounds.len() + 1;
        let candidates_before = self.candidates.len();

        let pattern = self.oracle.score(&choice.word, &self.puzzle.answer)?;
        self.state.apply(&choice.word, pattern);
        self.candidates = filter_candidates(&self.candidates, &self.state);

        // Four letters known but several words still fit: what happens next
        // is mostly luck
        if self.luck_factor.is_none() && pattern.weight() == 8 {
            self.luck_factor = Some(candidates_before);
        }
        if choice.augmented {
            self.augmented_picks += 1;
        }

        let record = RoundRecord {
            guess: choice.word,
            pattern,
            candidates_before,
            remaining: self.candidates.len(),
            source: choice.source,
        };
        log::info!(
            "round {round}: {} {} ({:?}, {} left)",
            record.guess,
            pattern.to_emoji(),
            record.source,
            record.remaining
        );

        if pattern.is_perfect() {
            self.game = GameState::Won;
        }
        self.rounds.push(record);
        Ok(record)
    }

    /// Play until the answer is found
    ///
    /// # Errors
    /// Propagates the first round error.
    pub fn run(mut self) -> Result<SolveResult, SolverError> {
        while self.game != GameState::Won {
            self.play_round()?;
        }
        self.finish()
    }

    fn finish(self) -> Result<SolveResult, SolverError> {
        let last = *self.rounds.last().ok_or(SolverError::NoCandidates)?;
        let transcript = format_transcript(self.puzzle.number, &self.rounds);

        Ok(SolveResult {
            rounds_used: self.rounds.len(),
            final_guess: last.guess,
            transcript,
            luck_factor: self.luck_factor.unwrap_or(last.candidates_before),
            guess_history: self.state.history().to_vec(),
            rounds: self.rounds,
            puzzle_number: self.puzzle.number,
            augmented_picks: self.augmented_picks,
        })
    }

    fn choose(&self) -> Result<Choice, SolverError> {
        let config = &self.solver.config;
        let guessable = self.solver.vocab.guessable();
        let round = self.rounds.len() + 1;

        if round == 1 {
            if let Some(opening) = config.forced_opening_guess {
                return Ok(Choice::new(opening, GuessSource::Forced));
            }
            let ranked = self.solver.install(|| {
                rank_guesses(guessable, &self.state, &self.static_stats, config.hard_mode)
            });
            return ranked
                .first()
                .map(|best| Choice::new(best.word, GuessSource::Opening))
                .ok_or(SolverError::NoCandidates);
        }

        let ranked = ranked_candidates(
            &self.candidates,
            &self.state,
            &self.static_stats,
            config.local_scoring,
        );
        let best_candidate = ranked.first().ok_or(SolverError::NoCandidates)?.word;
        log::debug!(
            "{} matching answers: {:?}",
            ranked.len(),
            ranked.iter().take(10).map(|s| s.word.text()).collect::<Vec<_>>()
        );

        if config.guess_mode == GuessMode::CandidatesOnly
            || !config
                .trigger
                .should_look_ahead(round, ranked.len(), &self.state)
        {
            return Ok(Choice::new(best_candidate, GuessSource::Candidate));
        }

        let mut shortlist = self.solver.install(|| {
            information_shortlist(
                guessable,
                &self.candidates,
                &self.state,
                config.hard_mode,
                config.lookahead_shortlist_size,
            )
        });
        let augmented = self.augmented_entries(&shortlist);
        shortlist.extend(augmented.iter().copied());

        let Some(top) = shortlist.first() else {
            return Ok(Choice::new(best_candidate, GuessSource::Candidate));
        };

        if config.guess_mode == GuessMode::Shortlist {
            return Ok(Choice::new(top.word, GuessSource::Shortlist));
        }

        let lookahead = Lookahead::new(
            self.oracle,
            &self.candidates,
            &self.state,
            config.measure,
            config.cache_capacity,
        );
        let evaluations = lookahead.evaluate(&shortlist, &self.solver.workers)?;
        self.log_evaluations(&evaluations);

        let best = self
            .solver
            .ranking_policy
            .select(&evaluations)
            .ok_or(SolverError::NoCandidates)?;

        Ok(Choice {
            word: best.guess.word,
            source: GuessSource::Lookahead,
            augmented: augmented.iter().any(|a| a.word == best.guess.word),
        })
    }

    /// Configured extra words not already in the shortlist
    fn augmented_entries(&self, shortlist: &[ScoredWord]) -> Vec<ScoredWord> {
        let config = &self.solver.config;
        if config.augmented_guesses.is_empty() {
            return Vec::new();
        }

        let undecided = letters_it_could_be(&self.candidates, &self.state);
        let local_stats = LetterStats::from_words(&self.candidates);
        let mut extras: Vec<ScoredWord> = Vec::new();

        for &word in &config.augmented_guesses {
            let fresh = !self.state.has_guessed(&word)
                && !shortlist.iter().any(|s| s.word == word)
                && !extras.iter().any(|s| s.word == word);
            if fresh && (!config.hard_mode || self.state.matches_known(&word)) {
                extras.push(score_information_guess(word, undecided, &local_stats));
            }
        }

        log::debug!("{} augmented guesses added to the shortlist", extras.len());
        extras
    }

    fn log_evaluations(&self, evaluations: &[GuessEvaluation]) {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        let mut ordered = evaluations.to_vec();
        ordered.sort_by(|a, b| self.solver.ranking_policy.compare(a, b));
        for eval in ordered.iter().take(10) {
            log::trace!(
                "{}: mean {:.2} std {:.2} max {} (coverage {}, placement {})",
                eval.guess.word,
                eval.stats.mean,
                eval.stats.std_dev,
                eval.stats.max,
                eval.guess.coverage,
                eval.guess.placement
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Mark, Vocabulary};
    use crate::solver::policy::{FallbackToGuessable, LookaheadPolicy};

    fn vocab(guessable: &[&str], answerable: &[&str]) -> Vocabularies {
        Vocabularies::new(
            Vocabulary::from_strs(guessable).unwrap(),
            Vocabulary::from_strs(answerable).unwrap(),
        )
    }

    fn small_config() -> SolverConfig {
        SolverConfig {
            worker_count: 2,
            ..SolverConfig::default()
        }
    }

    const OUND: &[&str] = &[
        "bound", "found", "hound", "mound", "pound", "round", "sound", "wound",
    ];

    fn ound_vocab() -> Vocabularies {
        let mut guessable: Vec<&str> = OUND.to_vec();
        guessable.extend(["whams", "champ", "frump", "wimps", "shrew"]);
        vocab(&guessable, OUND)
    }

    #[test]
    fn solves_crane_from_fresh_state() {
        let vocab = vocab(&["crane", "slate", "irate"], &["crane", "slate", "irate"]);
        let solver = Solver::new(&vocab, small_config()).unwrap();
        let result = solver.solve(&Puzzle::new("crane", Some(42)).unwrap()).unwrap();

        assert!(result.rounds_used <= 6);
        assert_eq!(result.final_guess.text(), "crane");
        assert!(result.rounds.last().unwrap().pattern.is_perfect());
        assert_eq!(result.guess_history.len(), result.rounds_used);
        assert!(result.transcript.starts_with("Wordlebot Wordle 42 "));
    }

    #[test]
    fn opening_then_candidate() {
        let vocab = vocab(&["crane", "slate", "irate"], &["crane", "slate", "irate"]);
        let solver = Solver::new(&vocab, small_config()).unwrap();
        let result = solver.solve(&Puzzle::new("crane", None).unwrap()).unwrap();

        // irate has the best coverage of the three
        let guesses: Vec<&str> = result.guess_history.iter().map(Word::text).collect();
        assert_eq!(guesses, vec!["irate", "crane"]);
        assert_eq!(result.rounds[0].source, GuessSource::Opening);
        assert_eq!(result.rounds[1].source, GuessSource::Candidate);
        assert_eq!(result.rounds[0].remaining, 1);
        assert_eq!(result.rounds[1].remaining, 0);
        assert_eq!(result.luck_factor, 1);
        // The luck factor travels beside the shareable grid
        assert_eq!(
            result.transcript,
            "Wordlebot Wordle 2/6\n\n⬜🟩🟩⬜🟩 1 left\n🟩🟩🟩🟩🟩 0 left\n"
        );
    }

    #[test]
    fn forced_opening_is_played_first() {
        let vocab = vocab(&["crane", "slate", "irate"], &["crane", "slate", "irate"]);
        let config = SolverConfig {
            forced_opening_guess: Some(Word::new("slate").unwrap()),
            ..small_config()
        };
        let solver = Solver::new(&vocab, config).unwrap();

        for answer in ["crane", "slate", "irate"] {
            let result = solver.solve(&Puzzle::new(answer, None).unwrap()).unwrap();
            assert_eq!(result.guess_history[0].text(), "slate");
            assert_eq!(result.rounds[0].source, GuessSource::Forced);
            assert_eq!(result.final_guess.text(), answer);
        }
    }

    #[test]
    fn forced_opening_must_be_guessable() {
        let vocab = vocab(&["crane", "slate"], &["crane"]);
        let config = SolverConfig {
            forced_opening_guess: Some(Word::new("qqqqq").unwrap()),
            ..small_config()
        };
        assert!(matches!(
            Solver::new(&vocab, config),
            Err(SolverError::InvalidGuess(_))
        ));
    }

    #[test]
    fn lookahead_handles_ound_family() {
        let vocab = ound_vocab();
        let config = SolverConfig {
            forced_opening_guess: Some(Word::new("bound").unwrap()),
            ..small_config()
        };
        let solver = Solver::new(&vocab, config).unwrap();

        for answer in OUND {
            let result = solver.solve(&Puzzle::new(answer, None).unwrap()).unwrap();
            assert_eq!(result.final_guess.text(), *answer);
            assert!(result.rounds_used <= 6, "{answer} took {}", result.rounds_used);
            if *answer != "bound" {
                assert_eq!(result.rounds[1].source, GuessSource::Lookahead);
                // bound scores four exact letters with all eight words in play
                assert_eq!(result.luck_factor, 8);
            }
        }
    }

    #[test]
    fn minimize_max_policy_also_solves() {
        let vocab = ound_vocab();
        let config = SolverConfig {
            forced_opening_guess: Some(Word::new("bound").unwrap()),
            lookahead_policy: LookaheadPolicy::MinimizeMax,
            ..small_config()
        };
        let solver = Solver::new(&vocab, config).unwrap();
        let result = solver.solve(&Puzzle::new("wound", None).unwrap()).unwrap();
        assert_eq!(result.final_guess.text(), "wound");
    }

    #[test]
    fn candidates_only_never_leaves_candidates() {
        let vocab = ound_vocab();
        let config = SolverConfig {
            forced_opening_guess: Some(Word::new("bound").unwrap()),
            guess_mode: GuessMode::CandidatesOnly,
            ..small_config()
        };
        let solver = Solver::new(&vocab, config).unwrap();
        let result = solver.solve(&Puzzle::new("wound", None).unwrap()).unwrap();

        assert!(
            result
                .guess_history
                .iter()
                .all(|w| OUND.contains(&w.text()))
        );
        assert!(
            result.rounds[1..]
                .iter()
                .all(|r| r.source == GuessSource::Candidate)
        );
    }

    #[test]
    fn shortlist_mode_skips_simulation() {
        let vocab = ound_vocab();
        let config = SolverConfig {
            forced_opening_guess: Some(Word::new("bound").unwrap()),
            guess_mode: GuessMode::Shortlist,
            ..small_config()
        };
        let solver = Solver::new(&vocab, config).unwrap();
        let result = solver.solve(&Puzzle::new("pound", None).unwrap()).unwrap();

        assert_eq!(result.rounds[1].source, GuessSource::Shortlist);
        assert_eq!(result.final_guess.text(), "pound");
    }

    #[test]
    fn augmented_guess_can_be_picked() {
        // shush repeats letters, so only the augmented list can offer it. It
        // tells hound, mound and sound apart; the one-word shortlist (hound)
        // leaves two candidates whenever it misses.
        let answers = ["bound", "hound", "mound", "sound"];
        let mut guessable = answers.to_vec();
        guessable.push("shush");
        let vocab = vocab(&guessable, &answers);
        let config = SolverConfig {
            forced_opening_guess: Some(Word::new("bound").unwrap()),
            lookahead_shortlist_size: 1,
            augmented_guesses: vec![Word::new("shush").unwrap()],
            ..small_config()
        };
        let solver = Solver::new(&vocab, config).unwrap();
        let result = solver.solve(&Puzzle::new("mound", None).unwrap()).unwrap();

        assert_eq!(result.rounds[1].guess.text(), "shush");
        assert_eq!(result.rounds[1].source, GuessSource::Lookahead);
        assert_eq!(result.rounds[1].remaining, 1);
        assert_eq!(result.augmented_picks, 1);
        assert_eq!(result.final_guess.text(), "mound");
        assert_eq!(result.rounds_used, 3);
    }

    #[test]
    fn augmented_guess_not_picked_without_config() {
        let answers = ["bound", "hound", "mound", "sound"];
        let mut guessable = answers.to_vec();
        guessable.push("shush");
        let vocab = vocab(&guessable, &answers);
        let config = SolverConfig {
            forced_opening_guess: Some(Word::new("bound").unwrap()),
            lookahead_shortlist_size: 1,
            ..small_config()
        };
        let solver = Solver::new(&vocab, config).unwrap();
        let result = solver.solve(&Puzzle::new("mound", None).unwrap()).unwrap();

        assert_eq!(result.augmented_picks, 0);
        assert!(result.guess_history.iter().all(|w| w.text() != "shush"));
    }

    #[test]
    fn heuristics_run_on_the_worker_pool() {
        let vocab = vocab(&["crane", "slate", "irate"], &["crane", "slate", "irate"]);
        let config = SolverConfig {
            worker_count: 1,
            ..SolverConfig::default()
        };
        let solver = Solver::new(&vocab, config).unwrap();

        assert_eq!(solver.install(rayon::current_num_threads), 1);
        let result = solver.solve(&Puzzle::new("crane", None).unwrap()).unwrap();
        assert_eq!(result.final_guess.text(), "crane");
    }

    #[test]
    fn restricted_vocabulary_rejects_answer() {
        let vocab = vocab(&["crane", "slate", "irate"], &["crane", "slate"]);
        let solver = Solver::new(&vocab, small_config()).unwrap();

        assert!(matches!(
            solver.solve(&Puzzle::new("irate", None).unwrap()),
            Err(SolverError::UnsolvableWithRestrictedVocabulary(_))
        ));
    }

    #[test]
    fn fallback_vocabulary_solves_answer() {
        let vocab = vocab(&["crane", "slate", "irate"], &["crane", "slate"]);
        let solver = Solver::new(&vocab, small_config())
            .unwrap()
            .with_vocabulary_policy(FallbackToGuessable);

        let result = solver.solve(&Puzzle::new("irate", None).unwrap()).unwrap();
        assert_eq!(result.final_guess.text(), "irate");
    }

    #[test]
    fn session_steps_through_states() {
        let vocab = vocab(&["crane", "slate", "irate"], &["crane", "slate", "irate"]);
        let solver = Solver::new(&vocab, small_config()).unwrap();
        let mut session = solver.session(&Puzzle::new("crane", None).unwrap()).unwrap();

        assert_eq!(session.game_state(), GameState::Initialized);
        assert_eq!(session.candidates().len(), 3);
        assert_eq!(session.next_guess().unwrap().0.text(), "irate");

        let first = session.play_round().unwrap();
        assert_eq!(session.game_state(), GameState::Guessing);
        assert_eq!(first.pattern.mark(1), Mark::Exact);
        assert_eq!(session.candidates().len(), 1);

        let second = session.play_round().unwrap();
        assert_eq!(session.game_state(), GameState::Won);
        assert!(second.pattern.is_perfect());

        // Playing on after the win changes nothing
        assert_eq!(session.play_round().unwrap(), second);
        assert_eq!(session.rounds().len(), 2);
    }

    #[test]
    fn hard_mode_guesses_keep_known_letters() {
        let vocab = ound_vocab();
        let config = SolverConfig {
            forced_opening_guess: Some(Word::new("bound").unwrap()),
            hard_mode: true,
            ..small_config()
        };
        let solver = Solver::new(&vocab, config).unwrap();
        let result = solver.solve(&Puzzle::new("round", None).unwrap()).unwrap();

        // Every later guess must keep o-u-n-d in place
        for record in &result.rounds[1..] {
            assert!(record.guess.text().ends_with("ound"));
        }
        assert_eq!(result.final_guess.text(), "round");
    }
}
