//! Guess analysis command
//!
//! Scores a single opening guess against the full candidate space.

use crate::core::{Code, Rules};
use crate::solver::CandidateSet;
use crate::solver::entropy::calculate_metrics;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub worst_case: usize,
    pub total_candidates: usize,
    pub code_length: usize,
}

/// Analyze a guess as an opening move under `rules`
///
/// The guess is expected to be valid for `rules` (see [`Rules::parse_code`]).
#[must_use]
pub fn analyze_code(guess: &Code, rules: &Rules) -> AnalysisResult {
    let space = CandidateSet::full(rules);
    let metrics = calculate_metrics(guess, space.as_slice());

    AnalysisResult {
        guess: guess.clone(),
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        worst_case: metrics.max_partition,
        total_candidates: space.len(),
        code_length: rules.code_length(),
    }
}
