//! Minimax-based guess selection
//!
//! Selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Ties prefer codes that are still candidates, then the earliest code in the
/// pool. Returns the chosen code and its worst case, or `None` if the pool is empty.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Rules;
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let rules = Rules::standard();
/// let parse = |t: &str| rules.parse_code(t).unwrap();
///
/// let pool = vec![parse("RRRR"), parse("RBYG")];
/// let candidates = vec![parse("RBYG"), parse("RBGY"), parse("GYBR")];
///
/// let (best, worst_case) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.to_string(), "RBYG");
/// assert_eq!(worst_case, 1);
/// ```
#[must_use]
pub fn select_best_guess<'a>(guess_pool: &'a [Code], candidates: &[Code]) -> Option<(&'a Code, usize)> {
    let candidate_set: FxHashSet<&Code> = candidates.iter().collect();

    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            (index, guess, max_remaining, !candidate_set.contains(guess))
        })
        .min_by_key(|&(index, _, max_remaining, not_candidate)| (max_remaining, not_candidate, index))
        .map(|(_, guess, max_remaining, _)| (guess, max_remaining))
}
