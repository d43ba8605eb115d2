//! Benchmark command
//!
//! Solves many answers and summarizes round counts and luck.

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{Puzzle, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds used -> number of answers
    pub distribution: BTreeMap<usize, usize>,
    /// Answers that needed more than six rounds
    pub failures: Vec<Word>,
    pub mean_luck: f64,
    pub augmented_picks: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` answers at random with a fixed seed, or all of them
#[must_use]
pub fn sample_answers(answers: &[Word], count: Option<usize>, seed: u64) -> Vec<Word> {
    match count {
        Some(n) if n < answers.len() => {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut sample: Vec<Word> = answers.choose_multiple(&mut rng, n).copied().collect();
            sample.sort_unstable();
            sample
        }
        _ => answers.to_vec(),
    }
}

/// Solve every word in `targets`
///
/// # Errors
/// The first failed solve aborts the benchmark.
pub fn run_benchmark(
    solver: &Solver<'_>,
    targets: &[Word],
    show_progress: bool,
) -> Result<BenchmarkResult, SolverError> {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut total_rounds = 0;
    let mut total_luck = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut augmented_picks = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut failures = Vec::new();

    for &answer in targets {
        let result = solver.solve(&Puzzle {
            answer,
            number: None,
        })?;
        let rounds = result.rounds_used;

        total_rounds += rounds;
        total_luck += result.luck_factor;
        min_rounds = min_rounds.min(rounds);
        max_rounds = max_rounds.max(rounds);
        augmented_picks += result.augmented_picks;
        *distribution.entry(rounds).or_insert(0) += 1;
        if rounds > 6 {
            log::warn!("{answer} took {rounds} rounds");
            failures.push(answer);
        }

        pb.set_message(format!("{answer}: {rounds}"));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();
    let per_word = |total: usize| {
        if total_words == 0 {
            0.0
        } else {
            total as f64 / total_words as f64
        }
    };

    Ok(BenchmarkResult {
        total_words,
        total_rounds,
        average_rounds: per_word(total_rounds),
        min_rounds: if total_words == 0 { 0 } else { min_rounds },
        max_rounds,
        distribution,
        failures,
        mean_luck: per_word(total_luck),
        augmented_picks,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::core::{Vocabularies, Vocabulary};

    const ANSWERS: &[&str] = &[
        "bound", "found", "hound", "mound", "pound", "round", "sound", "wound", "crane", "slate",
    ];

    fn vocab() -> Vocabularies {
        let mut guessable = ANSWERS.to_vec();
        guessable.extend(["whams", "frump", "irate"]);
        Vocabularies::new(
            Vocabulary::from_strs(guessable).unwrap(),
            Vocabulary::from_strs(ANSWERS).unwrap(),
        )
    }

    fn solver(vocab: &Vocabularies) -> Solver<'_> {
        let config = SolverConfig {
            worker_count: 2,
            ..SolverConfig::default()
        };
        Solver::new(vocab, config).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let vocab = vocab();
        let solver = solver(&vocab);
        let targets = vocab.answerable().words().to_vec();

        let result = run_benchmark(&solver, &targets, false).unwrap();

        assert_eq!(result.total_words, ANSWERS.len());
        assert!(result.average_rounds >= 1.0);
        assert!(result.min_rounds >= 1);
        assert!(result.max_rounds <= 6);
        assert!(result.failures.is_empty());
        assert!(result.mean_luck >= 1.0);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let vocab = vocab();
        let solver = solver(&vocab);
        let targets = vocab.answerable().words().to_vec();

        let result = run_benchmark(&solver, &targets, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_words);
        assert!(result.average_rounds >= result.min_rounds as f64);
        assert!(result.average_rounds <= result.max_rounds as f64);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let vocab = vocab();
        let solver = solver(&vocab);

        let result = run_benchmark(&solver, &[], false).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.min_rounds, 0);
        assert!(result.average_rounds.abs() < f64::EPSILON);
    }

    #[test]
    fn sampling_is_seeded() {
        let vocab = vocab();
        let answers = vocab.answerable().words();

        let a = sample_answers(answers, Some(4), 7);
        let b = sample_answers(answers, Some(4), 7);
        assert_eq!(a.len(), 4);
        assert_eq!(a, b);
        assert!(a.iter().all(|w| vocab.answerable().contains(w)));

        assert_eq!(sample_answers(answers, None, 7).len(), answers.len());
        assert_eq!(sample_answers(answers, Some(100), 7).len(), answers.len());
    }
}
