//! Code solving command
//!
//! Breaks a known secret and returns the solution path.

use crate::core::{Code, Feedback};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{Outcome, Solver, SolverError, Strategy};

/// Result of solving a code
pub struct SolveResult {
    pub secret: Code,
    pub strategy: &'static str,
    pub outcome: Outcome,
    pub guesses: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.outcome.is_won()
    }
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `secret` from a fresh round using the solver's strategy
///
/// # Errors
/// Returns `SolverError::WrongLength` for a secret of the wrong length and
/// `SolverError::InconsistentFeedback` for a secret outside the palette.
pub fn solve_code<S: Strategy>(secret: &Code, solver: &mut Solver<S>) -> Result<SolveResult, SolverError> {
    let expected = solver.rules().code_length();
    if secret.len() != expected {
        return Err(SolverError::WrongLength {
            code: secret.clone(),
            expected,
        });
    }

    solver.reset();
    let mut guesses = Vec::new();

    let outcome = loop {
        let candidates_before = solver.candidates().len();
        let guess = solver.next_guess()?;

        // Entropy is only informative while there is still a choice to make
        let (entropy, expected_remaining) = if candidates_before > 1 {
            let metrics = calculate_metrics(&guess, solver.candidates().as_slice());
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let feedback = Feedback::evaluate(secret, &guess);
        let candidates_after = solver.record_feedback(&guess, feedback)?;

        guesses.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after,
            entropy,
            expected_remaining,
        });

        if let Some(outcome) = solver.outcome() {
            break outcome;
        }
    };

    Ok(SolveResult {
        secret: secret.clone(),
        strategy: solver.strategy_name(),
        outcome,
        guesses,
    })
}
