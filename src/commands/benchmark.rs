//! Benchmark command
//!
//! Tests solver performance across random secrets.

use crate::core::{Code, Feedback};
use crate::solver::{Outcome, Solver, SolverError, Strategy};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub guess_budget: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Play one fresh round against `secret`
///
/// If `opening` is provided it is played as the first guess instead of
/// asking the strategy; it must fit the solver's rules.
///
/// # Errors
/// Returns `SolverError::WrongLength` for a secret or opening of the wrong
/// length and `SolverError::InconsistentFeedback` for a secret the solver
/// cannot represent.
pub fn play_with_opening<S: Strategy>(
    solver: &mut Solver<S>,
    secret: &Code,
    opening: Option<&Code>,
) -> Result<Outcome, SolverError> {
    solver.reset();

    if let Some(opening) = opening {
        let expected = solver.rules().code_length();
        for code in [secret, opening] {
            if code.len() != expected {
                return Err(SolverError::WrongLength {
                    code: code.clone(),
                    expected,
                });
            }
        }

        solver.record_feedback(opening, Feedback::evaluate(secret, opening))?;
        if let Some(outcome) = solver.outcome() {
            return Ok(outcome);
        }
    }

    solver.play(secret)
}

/// Run benchmark on `count` random secrets drawn from `rng`
///
/// # Errors
/// Propagates any solver error from [`play_with_opening`].
pub fn run_benchmark<S, R>(
    solver: &mut Solver<S>,
    count: usize,
    opening: Option<&Code>,
    rng: &mut R,
) -> Result<BenchmarkResult, SolverError>
where
    S: Strategy,
    R: Rng + ?Sized,
{
    let rules = solver.rules().clone();
    let secrets: Vec<Code> = (0..count).map(|_| rules.random_code(rng)).collect();

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for secret in &secrets {
        let outcome = play_with_opening(solver, secret, opening)?;
        let guesses = outcome.guesses();

        total_guesses += guesses;
        if outcome.is_won() {
            solved += 1;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        }
    }

    let duration = start.elapsed();

    Ok(BenchmarkResult {
        total_codes: count,
        solved,
        failed: count - solved,
        total_guesses,
        average_guesses: if solved > 0 {
            distribution.iter().map(|(g, n)| g * n).sum::<usize>() as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        guess_budget: rules.max_guesses(),
        distribution,
        duration,
        codes_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::solver::{FirstCandidateStrategy, MinimaxStrategy};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn benchmark_runs() {
        let mut solver = Solver::new(Rules::standard(), FirstCandidateStrategy);
        let mut rng = StdRng::seed_from_u64(3);

        let result = run_benchmark(&mut solver, 20, None, &mut rng).unwrap();

        assert_eq!(result.total_codes, 20);
        assert!(result.total_guesses > 0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 10);
        assert_eq!(result.guess_budget, 10);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let mut solver = Solver::new(Rules::standard(), FirstCandidateStrategy);
        let mut rng = StdRng::seed_from_u64(4);

        let result = run_benchmark(&mut solver, 25, None, &mut rng).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.failed, result.total_codes);
    }

    #[test]
    fn benchmark_is_reproducible_from_seed() {
        let mut solver = Solver::new(Rules::standard(), FirstCandidateStrategy);

        let a = run_benchmark(&mut solver, 10, None, &mut StdRng::seed_from_u64(8)).unwrap();
        let b = run_benchmark(&mut solver, 10, None, &mut StdRng::seed_from_u64(8)).unwrap();

        assert_eq!(a.total_guesses, b.total_guesses);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_with_forced_opening() {
        let rules = Rules::standard();
        let opening = rules.parse_code("RRBB").unwrap();
        let mut solver = Solver::new(rules, MinimaxStrategy);
        let mut rng = StdRng::seed_from_u64(5);

        let result = run_benchmark(&mut solver, 3, Some(&opening), &mut rng).unwrap();

        assert_eq!(result.total_codes, 3);
        assert_eq!(result.failed, 0);
        assert!(result.average_guesses >= 1.0);
    }

    #[test]
    fn benchmark_zero_codes() {
        let mut solver = Solver::new(Rules::standard(), FirstCandidateStrategy);
        let mut rng = StdRng::seed_from_u64(1);

        let result = run_benchmark(&mut solver, 0, None, &mut rng).unwrap();

        assert_eq!(result.total_codes, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn opening_that_wins_ends_round() {
        let rules = Rules::standard();
        let secret = rules.parse_code("GYBR").unwrap();
        let mut solver = Solver::new(rules, FirstCandidateStrategy);

        let outcome = play_with_opening(&mut solver, &secret, Some(&secret)).unwrap();
        assert_eq!(outcome, Outcome::Won { guesses: 1 });
    }

    #[test]
    fn opening_of_wrong_length_is_rejected() {
        let rules = Rules::standard();
        let secret = rules.parse_code("GYBR").unwrap();
        let opening = Rules::from_symbols("RBYGPW", 3, 10).unwrap().parse_code("RBY").unwrap();
        let mut solver = Solver::new(rules, FirstCandidateStrategy);

        assert!(matches!(
            play_with_opening(&mut solver, &secret, Some(&opening)),
            Err(SolverError::WrongLength { .. })
        ));
    }
}
