//! Wordlebot - CLI
//!
//! Heuristic Wordle solver with counterfactual lookahead.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use wordlebot::{
    commands::{run_benchmark, sample_answers, solve_word},
    config::{GuessMode, SolverConfig},
    core::{Vocabularies, Word},
    output::{print_benchmark_result, print_solve_result},
    solver::{FallbackToGuessable, LookaheadPolicy, LookaheadTrigger, Measure, Solver},
    wordlists::{CurationRules, build_vocabularies, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordlebot",
    about = "Heuristic Wordle solver with counterfactual lookahead",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    words: WordListArgs,

    #[command(flatten)]
    solver: SolverArgs,

    /// More logging (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args)]
struct WordListArgs {
    /// Guessable words, one per line
    #[arg(short, long, global = true, default_value = "guesses.txt")]
    guesses: PathBuf,

    /// Raw answer list, one per line
    #[arg(short, long, global = true, default_value = "answers.txt")]
    answers: PathBuf,

    /// Words never to treat as answers
    #[arg(long, global = true)]
    exclusions: Option<PathBuf>,

    /// Only treat words in this list as answers
    #[arg(long, global = true)]
    common: Option<PathBuf>,

    /// Keep likely plurals in the answer list
    #[arg(long, global = true)]
    keep_plurals: bool,

    /// Solve against the whole guess list when the answer is not in the answer list
    #[arg(long, global = true)]
    fallback: bool,
}

#[derive(Args)]
struct SolverArgs {
    /// Every guess must use all known letters
    #[arg(long, global = true)]
    hard: bool,

    /// Opening guess
    #[arg(short, long, global = true)]
    opening: Option<Word>,

    /// Words simulated per lookahead round
    #[arg(long, global = true, default_value_t = 40)]
    shortlist: usize,

    /// Lookahead ranking: mean or max
    #[arg(long, global = true, default_value_t = LookaheadPolicy::MinimizeMean)]
    policy: LookaheadPolicy,

    /// Lookahead worker threads
    #[arg(long, global = true, default_value_t = 8)]
    workers: usize,

    /// Lookahead measure: remaining or full-game
    #[arg(long, global = true, default_value_t = Measure::RemainingCandidates)]
    measure: Measure,

    /// Guess mode: candidates, shortlist or lookahead
    #[arg(long, global = true, default_value_t = GuessMode::Lookahead)]
    mode: GuessMode,

    /// Last round that may use lookahead
    #[arg(long, global = true, default_value_t = 5)]
    last_lookahead_round: usize,

    /// Extra words always added to the lookahead shortlist
    #[arg(long = "augment", global = true)]
    augmented: Vec<Word>,

    /// Rank candidates by letter statistics of the whole answer list
    #[arg(long, global = true)]
    static_scoring: bool,
}

impl SolverArgs {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            hard_mode: self.hard,
            forced_opening_guess: self.opening,
            lookahead_shortlist_size: self.shortlist,
            lookahead_policy: self.policy,
            worker_count: self.workers,
            measure: self.measure,
            guess_mode: self.mode,
            trigger: LookaheadTrigger {
                last_round: self.last_lookahead_round,
                ..LookaheadTrigger::default()
            },
            local_scoring: !self.static_scoring,
            augmented_guesses: self.augmented.clone(),
            ..SolverConfig::default()
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific answer
    Solve {
        /// The answer to solve
        answer: String,

        /// Puzzle number for the transcript header
        #[arg(short, long)]
        number: Option<u32>,

        /// Show candidate counts per round
        #[arg(long)]
        details: bool,
    },

    /// Solve many answers and report statistics
    Benchmark {
        /// Number of random answers to test (default: all)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Sampling seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn read_list(path: &Path, what: &str) -> Result<Vec<Word>> {
    load_from_file(path).with_context(|| format!("reading {what} from {}", path.display()))
}

fn load_vocabularies(args: &WordListArgs) -> Result<Vocabularies> {
    let guessable = read_list(&args.guesses, "guess list")?;
    let raw_answers = read_list(&args.answers, "answer list")?;

    let mut rules = CurationRules::new().with_plurals_dropped(!args.keep_plurals);
    if let Some(path) = &args.exclusions {
        rules = rules.with_exclusions(read_list(path, "exclusion list")?);
    }
    if let Some(path) = &args.common {
        rules = rules.with_common_words(read_list(path, "common word list")?);
    }

    let vocab = build_vocabularies(guessable, &raw_answers, &rules);
    anyhow::ensure!(
        !vocab.answerable().is_empty(),
        "no answers left after curating {}",
        args.answers.display()
    );
    Ok(vocab)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let vocab = load_vocabularies(&cli.words)?;
    let mut solver = Solver::new(&vocab, cli.solver.config())?;
    if cli.words.fallback {
        solver = solver.with_vocabulary_policy(FallbackToGuessable);
    }

    match cli.command {
        Commands::Solve {
            answer,
            number,
            details,
        } => {
            let result = solve_word(&solver, &answer, number)
                .with_context(|| format!("solving {answer}"))?;
            print_solve_result(&result, details);
        }
        Commands::Benchmark { count, seed } => {
            let targets = sample_answers(vocab.answerable().words(), count, seed);
            println!("Running benchmark on {} answers...", targets.len());
            let result = run_benchmark(&solver, &targets, true)?;
            print_benchmark_result(&result);
        }
    }
    Ok(())
}
