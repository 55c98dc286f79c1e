//! Constraint filter
//!
//! Keeps only the candidates that, had they been the secret, would have
//! produced the observed feedback for a guess.

use super::space::CandidateSet;
use crate::core::{Code, Feedback};

/// Filter candidates to those consistent with one guess and its feedback
///
/// Returns `{ c in candidates : evaluate(c, guess) == feedback }` as a new set,
/// in the original order. The input is left untouched.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Feedback, Rules};
/// use mastermind_solver::solver::{CandidateSet, filter};
///
/// let rules = Rules::standard();
/// let space = CandidateSet::full(&rules);
/// let secret = rules.parse_code("RBYG").unwrap();
/// let guess = rules.parse_code("RRBB").unwrap();
///
/// let remaining = filter(&space, &guess, Feedback::evaluate(&secret, &guess));
/// assert!(remaining.contains(&secret));
/// assert!(remaining.len() < space.len());
/// ```
#[must_use]
pub fn filter(candidates: &CandidateSet, guess: &Code, feedback: Feedback) -> CandidateSet {
    CandidateSet::from_unique(
        candidates
            .iter()
            .filter(|candidate| Feedback::evaluate(candidate, guess) == feedback)
            .cloned()
            .collect(),
    )
}

/// Filter candidates against a whole guess history
#[must_use]
pub fn filter_history(candidates: &CandidateSet, history: &[(Code, Feedback)]) -> CandidateSet {
    CandidateSet::from_unique(
        candidates
            .iter()
            .filter(|&candidate| {
                history
                    .iter()
                    .all(|(guess, observed)| Feedback::evaluate(candidate, guess) == *observed)
            })
            .cloned()
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Palette, Rules};
    use crate::solver::space::enumerate;

    fn standard_space() -> (Rules, CandidateSet) {
        let rules = Rules::standard();
        let space = CandidateSet::full(&rules);
        (rules, space)
    }

    #[test]
    fn filter_keeps_secret() {
        let (rules, space) = standard_space();
        let secret = rules.parse_code("RBYG").unwrap();

        for guess in ["RRBB", "RGYB", "WWWW", "GYBR", "RBYG"] {
            let guess = rules.parse_code(guess).unwrap();
            let remaining = filter(&space, &guess, Feedback::evaluate(&secret, &guess));
            assert!(remaining.contains(&secret), "lost secret after {guess}");
        }
    }

    #[test]
    fn filter_is_monotonic() {
        let (rules, space) = standard_space();
        let guess = rules.parse_code("RRBY").unwrap();

        for exact in 0..=4 {
            for color_only in 0..=4 {
                let remaining = filter(&space, &guess, Feedback::new(exact, color_only));
                assert!(remaining.len() <= space.len());
            }
        }
    }

    #[test]
    fn filter_partitions_the_space() {
        // Every candidate lands in exactly one feedback class for a given guess
        let (rules, space) = standard_space();
        let guess = rules.parse_code("RRBY").unwrap();

        let mut total = 0;
        for exact in 0..=4 {
            for color_only in 0..=(4 - exact) {
                total += filter(&space, &guess, Feedback::new(exact, color_only)).len();
            }
        }
        assert_eq!(total, space.len());
    }

    #[test]
    fn filter_perfect_feedback_leaves_guess_only() {
        let (rules, space) = standard_space();
        let guess = rules.parse_code("PWPW").unwrap();

        let remaining = filter(&space, &guess, Feedback::solved(4));
        assert_eq!(remaining.as_slice(), &[guess]);
    }

    #[test]
    fn filter_impossible_feedback_empties() {
        let (rules, space) = standard_space();
        let guess = rules.parse_code("RBYG").unwrap();

        // Three exact and one misplaced can never happen
        assert!(filter(&space, &guess, Feedback::new(3, 1)).is_empty());
    }

    #[test]
    fn filter_never_removes_consistent_candidates_exhaustive() {
        let palette = Palette::from_symbols("RBY").unwrap();
        let space = enumerate(&palette, 3).unwrap();

        for secret in &space {
            for guess in &space {
                let feedback = Feedback::evaluate(secret, guess);
                let remaining = filter(&space, guess, feedback);
                assert!(remaining.contains(secret));
                assert!(
                    remaining
                        .iter()
                        .all(|c| Feedback::evaluate(c, guess) == feedback)
                );
            }
        }
    }

    #[test]
    fn filter_history_matches_repeated_filter() {
        let (rules, space) = standard_space();
        let secret = rules.parse_code("GGPR").unwrap();
        let guesses: Vec<Code> = ["RRBB", "YYGG", "PWRG"]
            .iter()
            .map(|g| rules.parse_code(g).unwrap())
            .collect();

        let history: Vec<(Code, Feedback)> = guesses
            .iter()
            .map(|g| (g.clone(), Feedback::evaluate(&secret, g)))
            .collect();

        let mut stepwise = space.clone();
        for (guess, feedback) in &history {
            stepwise = filter(&stepwise, guess, *feedback);
        }

        assert_eq!(filter_history(&space, &history), stepwise);
        assert!(stepwise.contains(&secret));
    }
}
