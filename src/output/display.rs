//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::BenchmarkResult;
use crate::solver::SolveResult;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.final_guess.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            round.guess.text().to_uppercase(),
            round.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                round.candidates_before, round.remaining
            );
            println!("  Chosen by:  {:?}", round.source);
        }
    }

    println!();
    let summary = format!("Solved in {}/6 rounds", result.rounds_used);
    if result.rounds_used <= 6 {
        println!("{}", format!("✅ {summary}").green().bold());
    } else {
        println!("{}", format!("❌ {summary}").red().bold());
    }
    println!("   Luck factor: {}", result.luck_factor.to_string().bright_yellow());
    if result.augmented_picks > 0 {
        println!("   Augmented picks: {}", result.augmented_picks);
    }

    println!("\n{}", result.transcript);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average rounds:   {}",
        format!("{:.3}", result.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        result.min_rounds.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_rounds.to_string().yellow()
    );
    println!("   Mean luck:        {:.2}", result.mean_luck);
    if result.augmented_picks > 0 {
        println!("   Augmented picks:  {}", result.augmented_picks);
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&rounds, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        let label = format!("{rounds:2}");
        let label = if rounds > 6 { label.red() } else { label.normal() };
        println!("   {label}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!("\n{}", "Failures:".red().bold());
        for word in &result.failures {
            println!("   {word}");
        }
    }
}
