//! Wordlebot
//!
//! A heuristic Wordle solver. Most rounds guess the remaining candidate with
//! the best letter coverage; in the middle rounds a counterfactual lookahead
//! simulates a shortlist of information-gathering words against every
//! remaining candidate and picks the one that narrows the field best.
//!
//! # Quick Start
//!
//! ```rust
//! use wordlebot::config::SolverConfig;
//! use wordlebot::core::{Vocabularies, Vocabulary};
//! use wordlebot::solver::{Puzzle, Solver};
//!
//! let words = ["crane", "slate", "irate"];
//! let vocab = Vocabularies::new(
//!     Vocabulary::from_strs(words).unwrap(),
//!     Vocabulary::from_strs(words).unwrap(),
//! );
//!
//! let solver = Solver::new(&vocab, SolverConfig::default()).unwrap();
//! let result = solver.solve(&Puzzle::new("crane", Some(1)).unwrap()).unwrap();
//! assert_eq!(result.final_guess.text(), "crane");
//! println!("{}", result.transcript);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Solver options
pub mod config;

pub mod error;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use config::SolverConfig;
pub use error::{Result, SolverError};
