//! Terminal output
//!
//! Colored code and peg rendering plus result printers for the batch commands.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
pub use formatters::{colorize_code, colorize_feedback};
