//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod console;
pub mod play;
pub mod select;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_code};
pub use benchmark::{BenchmarkResult, play_with_opening, run_benchmark};
pub use console::{Console, ConsoleError};
pub use play::{RoundReport, run_guesser_round, run_session};
pub use select::{SelectorOptions, run_selector_round};
pub use solve::{GuessStep, SolveResult, solve_code};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
