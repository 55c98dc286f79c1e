//! Pure entropy-based guess selection
//!
//! Selects codes that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Code;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Select best guess by maximizing entropy
///
/// Ties prefer codes that are still candidates (they might win outright),
/// then the earliest code in the pool, so the choice is deterministic.
/// Returns the chosen code and its entropy, or `None` if the pool is empty.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Rules;
/// use mastermind_solver::solver::entropy::select_best_guess;
///
/// let rules = Rules::standard();
/// let parse = |t: &str| rules.parse_code(t).unwrap();
///
/// let pool = vec![parse("RRRR"), parse("RBYG")];
/// let candidates = vec![parse("RBYG"), parse("RBGY"), parse("BRYG"), parse("GYBR")];
///
/// let (best, entropy) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.to_string(), "RBYG"); // RRRR cannot tell these apart
/// assert!(entropy > 1.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(guess_pool: &'a [Code], candidates: &[Code]) -> Option<(&'a Code, f64)> {
    let candidate_set: FxHashSet<&Code> = candidates.iter().collect();

    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let entropy = calculate_entropy(guess, candidates);
            (index, guess, entropy, candidate_set.contains(guess))
        })
        .max_by(|(i1, _, e1, c1), (i2, _, e2, c2)| {
            e1.total_cmp(e2).then(c1.cmp(c2)).then(i2.cmp(i1))
        })
        .map(|(_, guess, entropy, _)| (guess, entropy))
}
