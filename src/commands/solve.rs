//! Word solving command
//!
//! Solves a specific answer and returns the full result.

use crate::error::SolverError;
use crate::solver::{Puzzle, SolveResult, Solver};
use std::time::Instant;

/// Solve `answer` with `solver`
///
/// # Errors
///
/// Returns an error if:
/// - The answer is not a valid five-letter word
/// - The vocabulary policy rejects the answer
/// - A round fails (for example an unguessable forced opening)
pub fn solve_word(
    solver: &Solver<'_>,
    answer: &str,
    number: Option<u32>,
) -> Result<SolveResult, SolverError> {
    let puzzle = Puzzle::new(answer, number)?;

    let start = Instant::now();
    let result = solver.solve(&puzzle)?;
    log::debug!(
        "solved {} in {} rounds ({:.2?})",
        puzzle.answer,
        result.rounds_used,
        start.elapsed()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::core::{Vocabularies, Vocabulary};

    fn vocab() -> Vocabularies {
        let words = ["crane", "slate", "irate", "trace", "grate"];
        Vocabularies::new(
            Vocabulary::from_strs(words).unwrap(),
            Vocabulary::from_strs(words).unwrap(),
        )
    }

    fn config() -> SolverConfig {
        SolverConfig {
            worker_count: 2,
            ..SolverConfig::default()
        }
    }

    #[test]
    fn solve_known_word() {
        let vocab = vocab();
        let solver = Solver::new(&vocab, config()).unwrap();
        let result = solve_word(&solver, "GRATE", Some(7)).unwrap();

        assert_eq!(result.final_guess.text(), "grate");
        assert_eq!(result.puzzle_number, Some(7));
        assert!(result.rounds_used <= 6);
    }

    #[test]
    fn solve_invalid_word() {
        let vocab = vocab();
        let solver = Solver::new(&vocab, config()).unwrap();

        assert!(matches!(
            solve_word(&solver, "toolong", None),
            Err(SolverError::MalformedWord { .. })
        ));
        assert!(matches!(
            solve_word(&solver, "cr4ne", None),
            Err(SolverError::MalformedWord { .. })
        ));
    }
}
