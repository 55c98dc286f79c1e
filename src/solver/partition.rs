//! Feedback partitions
//!
//! Scoring a guess against every candidate splits the candidates into
//! classes that share one feedback. Feedback for `L` pegs always has
//! `exact + color_only <= L`, so the classes fit a flat `(L+1)^2` count array
//! indexed by `exact * (L+1) + color_only`.

use crate::core::{Code, Feedback};

/// Class sizes of the candidates under one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    counts: Vec<usize>,
    width: usize,
    total: usize,
}

impl Partition {
    /// Partition `candidates` by the feedback each would give `guess` as secret
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Feedback, Rules};
    /// use mastermind_solver::solver::Partition;
    ///
    /// let rules = Rules::standard();
    /// let parse = |t: &str| rules.parse_code(t).unwrap();
    /// let candidates = vec![parse("RBYG"), parse("RBGY"), parse("BRYG"), parse("GYBR")];
    ///
    /// let partition = Partition::of(&parse("RBYG"), &candidates);
    /// assert_eq!(partition.count(Feedback::new(2, 2)), 2);
    /// assert_eq!(partition.largest(), 2);
    /// assert_eq!(partition.classes(), 3);
    /// ```
    #[must_use]
    pub fn of(guess: &Code, candidates: &[Code]) -> Self {
        let width = guess.len() + 1;
        let mut counts = vec![0; width * width];

        for candidate in candidates {
            let feedback = Feedback::evaluate(candidate, guess);
            counts[feedback.exact() * width + feedback.color_only()] += 1;
        }

        Self {
            counts,
            width,
            total: candidates.len(),
        }
    }

    /// Candidates that would answer the guess with `feedback`
    #[must_use]
    pub fn count(&self, feedback: Feedback) -> usize {
        if feedback.exact() >= self.width || feedback.color_only() >= self.width {
            return 0;
        }
        self.counts[feedback.exact() * self.width + feedback.color_only()]
    }

    /// Raw class sizes, empty classes included
    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Number of candidates partitioned
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Size of the largest class: the worst case left after the guess
    #[must_use]
    pub fn largest(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Number of non-empty classes
    #[must_use]
    pub fn classes(&self) -> usize {
        self.counts.iter().filter(|&&n| n > 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::solver::CandidateSet;

    #[test]
    fn classes_cover_every_candidate() {
        let rules = Rules::standard();
        let space = CandidateSet::full(&rules);
        let guess = rules.parse_code("RRBY").unwrap();

        let partition = Partition::of(&guess, space.as_slice());
        assert_eq!(partition.total(), 1296);
        assert_eq!(partition.counts().iter().sum::<usize>(), 1296);
        assert_eq!(partition.counts().len(), 25);
    }

    #[test]
    fn impossible_feedback_is_never_counted() {
        let rules = Rules::standard();
        let space = CandidateSet::full(&rules);
        let guess = rules.parse_code("RBYG").unwrap();

        let partition = Partition::of(&guess, space.as_slice());
        assert_eq!(partition.count(Feedback::new(3, 1)), 0);
        assert_eq!(partition.count(Feedback::new(4, 0)), 1);
        assert_eq!(partition.count(Feedback::new(9, 0)), 0);
        // 14 possible answers for four pegs, all reachable from four distinct colors
        assert_eq!(partition.classes(), 14);
    }

    #[test]
    fn empty_candidates() {
        let guess = Rules::standard().parse_code("RBYG").unwrap();
        let partition = Partition::of(&guess, &[]);

        assert_eq!(partition.total(), 0);
        assert_eq!(partition.largest(), 0);
        assert_eq!(partition.classes(), 0);
    }
}
