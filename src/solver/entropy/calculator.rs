//! Information content of a guess
//!
//! All figures come from the guess's [`Partition`] of the candidates.

use crate::core::Code;
use crate::solver::partition::Partition;

/// Scores of one guess against the current candidates
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Bits of information the feedback is expected to reveal
    pub entropy: f64,
    /// Candidates expected to survive the guess
    pub expected_remaining: f64,
    /// Candidates left in the worst case
    pub max_partition: usize,
}

/// Expected information gain of `guess`, in bits
///
/// H = -Σ p log₂ p over the feedback classes, p being the share of
/// candidates in each class.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Rules;
/// use mastermind_solver::solver::entropy::calculate_entropy;
///
/// let rules = Rules::standard();
/// let guess = rules.parse_code("RRRR").unwrap();
/// let candidates = vec![
///     rules.parse_code("RRRR").unwrap(),
///     rules.parse_code("BBBB").unwrap(),
/// ];
///
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 1e-9); // a perfect binary split
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Code, candidates: &[Code]) -> f64 {
    shannon_entropy(Partition::of(guess, candidates).counts())
}

/// Shannon entropy of a list of class sizes
///
/// Empty classes are skipped; an empty or all-zero list has no entropy.
#[must_use]
pub fn shannon_entropy(class_sizes: &[usize]) -> f64 {
    let total = class_sizes.iter().sum::<usize>();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    class_sizes
        .iter()
        .filter(|&&size| size > 0)
        .map(|&size| {
            let p = size as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy, expected survivors and worst case of `guess` in one pass
#[must_use]
pub fn calculate_metrics(guess: &Code, candidates: &[Code]) -> GuessMetrics {
    let partition = Partition::of(guess, candidates);
    if partition.total() == 0 {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    // A class of n is hit with probability n/total and leaves n behind
    let total = partition.total() as f64;
    let expected_remaining = partition
        .counts()
        .iter()
        .map(|&size| (size * size) as f64 / total)
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(partition.counts()),
        expected_remaining,
        max_partition: partition.largest(),
    }
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
    fn entropy_of_even_split_is_log2_of_classes() {
        assert!((shannon_entropy(&[1, 1, 1, 1]) - 2.0).abs() < 1e-9);
        assert!((shannon_entropy(&[5, 0, 5, 0, 0]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn entropy_of_single_class_is_zero() {
        assert!(shannon_entropy(&[0, 10, 0]).abs() < 1e-9);
        assert!(shannon_entropy(&[]).abs() < f64::EPSILON);
        assert!(shannon_entropy(&[0, 0]).abs() < f64::EPSILON);
    }

    #[test]
    fn lopsided_split_carries_less_information() {
        assert!(shannon_entropy(&[25, 25, 25, 25]) > shannon_entropy(&[97, 1, 1, 1]));
    }

    #[test]
    fn disjoint_colors_reveal_nothing() {
        // Every candidate answers (0, 0)
        let guess = codes(&["WWWW"]).remove(0);
        let candidates = codes(&["RRRR", "BBBB", "YYYY"]);

        assert!(calculate_entropy(&guess, &candidates).abs() < 1e-9);
    }

    #[test]
    fn entropy_never_exceeds_log2_of_candidates() {
        let guess = codes(&["RRBY"]).remove(0);
        let candidates = codes(&["RBYG", "GGGG", "RRBY", "YBRR", "PWPW"]);

        let entropy = calculate_entropy(&guess, &candidates);
        assert!(entropy > 0.0);
        assert!(entropy <= (candidates.len() as f64).log2() + 1e-9);
    }

    #[test]
    fn no_candidates_no_entropy() {
        let guess = codes(&["RBYG"]).remove(0);
        assert!(calculate_entropy(&guess, &[]).abs() < f64::EPSILON);

        let metrics = calculate_metrics(&guess, &[]);
        assert_eq!(metrics.max_partition, 0);
        assert!(metrics.expected_remaining.abs() < f64::EPSILON);
    }

    #[test]
    fn metrics_of_binary_split() {
        let guess = codes(&["RRRR"]).remove(0);
        let candidates = codes(&["RRRR", "BBBB"]);

        let metrics = calculate_metrics(&guess, &candidates);
        assert!((metrics.entropy - 1.0).abs() < 1e-9);
        assert!((metrics.expected_remaining - 1.0).abs() < 1e-9);
        assert_eq!(metrics.max_partition, 1);
    }

    #[test]
    fn metrics_of_one_class() {
        let guess = codes(&["WWWW"]).remove(0);
        let candidates = codes(&["RRRR", "BBBB", "YYYY"]);

        let metrics = calculate_metrics(&guess, &candidates);
        assert!((metrics.expected_remaining - 3.0).abs() < 1e-9);
        assert_eq!(metrics.max_partition, 3);
    }

    #[test]
    fn opening_on_full_space_agrees_with_partition() {
        let rules = Rules::standard();
        let space = CandidateSet::full(&rules);
        let guess = rules.parse_code("RRBB").unwrap();

        let metrics = calculate_metrics(&guess, space.as_slice());
        assert_eq!(metrics.max_partition, 256);
        assert!(metrics.entropy > 0.0);
        assert!(metrics.entropy <= (14_f64).log2() + 1e-9);
    }
}
