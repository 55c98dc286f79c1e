//! Worst case of a guess

use crate::core::Code;
use crate::solver::partition::Partition;

/// Candidates left in the worst case after `guess`
///
/// That is the size of the largest feedback class.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Rules;
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let rules = Rules::standard();
/// let guess = rules.parse_code("RBYG").unwrap();
/// let candidates = vec![
///     rules.parse_code("RBYG").unwrap(),
///     rules.parse_code("PPPP").unwrap(),
/// ];
///
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    Partition::of(guess, candidates).largest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::solver::CandidateSet;

    fn codes(texts: &[&str]) -> Vec<Code> {
        let rules = Rules::standard();
        texts.iter().map(|t| rules.parse_code(t).unwrap()).collect()
    }

    #[test]
    fn max_remaining_all_same_feedback() {
        let guess = codes(&["WWWW"]).remove(0);
        let candidates = codes(&["RRRR", "BBBB", "YYYY"]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn max_remaining_largest_group_wins() {
        let guess = codes(&["RRRR"]).remove(0);
        // RBYG, BRYG and GYBR all answer one exact peg; PPPP answers nothing
        let candidates = codes(&["RBYG", "BRYG", "GYBR", "PPPP"]);

        assert_eq!(calculate_max_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let guess = codes(&["RBYG"]).remove(0);
        assert_eq!(calculate_max_remaining(&guess, &[]), 0);
    }

    #[test]
    fn max_remaining_standard_opening() {
        // Knuth's opening 1122 leaves at most 256 of 1296 codes
        let rules = Rules::standard();
        let space = CandidateSet::full(&rules);
        let guess = rules.parse_code("RRBB").unwrap();

        assert_eq!(calculate_max_remaining(&guess, space.as_slice()), 256);
    }
}
