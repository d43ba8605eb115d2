//! Formatting utilities for terminal output

use crate::solver::RoundRecord;
use std::fmt::Write;

/// Shareable emoji grid for a finished game
///
/// ```text
/// Wordlebot Wordle 412 3/6
///
/// ⬜🟨⬜⬜🟩 23 left
/// 🟩🟩⬜⬜🟩 2 left
/// 🟩🟩🟩🟩🟩 0 left
/// ```
#[must_use]
pub fn format_transcript(number: Option<u32>, rounds: &[RoundRecord]) -> String {
    let mut out = match number {
        Some(n) => format!("Wordlebot Wordle {n} {}/6\n\n", rounds.len()),
        None => format!("Wordlebot Wordle {}/6\n\n", rounds.len()),
    };
    for round in rounds {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{} {} left", round.pattern.to_emoji(), round.remaining);
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Pattern, Word};
    use crate::solver::GuessSource;

    fn record(guess: &str, answer: &str, remaining: usize) -> RoundRecord {
        let guess = Word::new(guess).unwrap();
        RoundRecord {
            guess,
            pattern: Pattern::calculate(&guess, &Word::new(answer).unwrap()),
            candidates_before: remaining + 1,
            remaining,
            source: GuessSource::Candidate,
        }
    }

    #[test]
    fn transcript_lists_every_round() {
        let rounds = [record("irate", "crane", 1), record("crane", "crane", 0)];
        let transcript = format_transcript(Some(412), &rounds);

        assert_eq!(
            transcript,
            "Wordlebot Wordle 412 2/6\n\n⬜🟩🟩⬜🟩 1 left\n🟩🟩🟩🟩🟩 0 left\n"
        );
    }

    #[test]
    fn transcript_without_number() {
        let rounds = [record("crane", "crane", 0)];
        assert!(format_transcript(None, &rounds).starts_with("Wordlebot Wordle 1/6\n\n"));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }
}
