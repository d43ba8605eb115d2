//! Terminal output formatting
//!
//! The shareable transcript and colored display of CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_solve_result};
pub use formatters::format_transcript;
