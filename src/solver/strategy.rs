//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Code;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::Rng;

/// A strategy for selecting the next guess
pub trait Strategy {
    /// Short name shown to the user and used on the command line
    fn name(&self) -> &'static str;

    /// Select the next guess given the full guess pool and the current candidates
    ///
    /// `candidates` is never larger than `guess_pool`. Returns `None` only when
    /// there is nothing to choose from.
    fn select_guess<'a>(&mut self, guess_pool: &'a [Code], candidates: &'a [Code]) -> Option<&'a Code>;

    /// Whether guesses may come from outside the candidates
    ///
    /// When `false` the solver passes the candidates as the pool and keeps no
    /// copy of the full space.
    fn guesses_outside_candidates(&self) -> bool {
        false
    }
}

/// Names accepted by [`StrategyType::from_name`]
pub const STRATEGY_NAMES: [&str; 4] = ["random", "first", "entropy", "minimax"];

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Uniform random choice among the remaining candidates (default)
    Random(RandomStrategy),
    /// First remaining candidate in enumeration order
    First(FirstCandidateStrategy),
    /// Shannon entropy maximization over the whole space
    Entropy(EntropyStrategy),
    /// Worst-case partition minimization over the whole space
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn name(&self) -> &'static str {
        match self {
            Self::Random(s) => s.name(),
            Self::First(s) => s.name(),
            Self::Entropy(s) => s.name(),
            Self::Minimax(s) => s.name(),
        }
    }

    fn select_guess<'a>(&mut self, guess_pool: &'a [Code], candidates: &'a [Code]) -> Option<&'a Code> {
        match self {
            Self::Random(s) => s.select_guess(guess_pool, candidates),
            Self::First(s) => s.select_guess(guess_pool, candidates),
            Self::Entropy(s) => s.select_guess(guess_pool, candidates),
            Self::Minimax(s) => s.select_guess(guess_pool, candidates),
        }
    }

    fn guesses_outside_candidates(&self) -> bool {
        match self {
            Self::Random(s) => s.guesses_outside_candidates(),
            Self::First(s) => s.guesses_outside_candidates(),
            Self::Entropy(s) => s.guesses_outside_candidates(),
            Self::Minimax(s) => s.guesses_outside_candidates(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names are listed in [`STRATEGY_NAMES`]. `seed` makes the
    /// random strategy reproducible; other strategies are deterministic.
    /// Returns `None` for an unknown name.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Option<Self> {
        let strategy = match name.to_ascii_lowercase().as_str() {
            "random" => Self::Random(seed.map_or_else(RandomStrategy::from_os_rng, RandomStrategy::seeded)),
            "first" => Self::First(FirstCandidateStrategy),
            "entropy" => Self::Entropy(EntropyStrategy),
            "minimax" => Self::Minimax(MinimaxStrategy),
            _ => return None,
        };
        Some(strategy)
    }
}

/// Random strategy
///
/// Picks uniformly among the remaining candidates. The random source is
/// injectable so runs can be replayed from a seed.
pub struct RandomStrategy<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomStrategy<R> {
    /// Create a random strategy drawing from `rng`
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomStrategy<StdRng> {
    /// Reproducible random strategy
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Random strategy seeded from the operating system
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl Default for RandomStrategy<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select_guess<'a>(&mut self, _guess_pool: &'a [Code], candidates: &'a [Code]) -> Option<&'a Code> {
        candidates.choose(&mut self.rng)
    }
}

/// Deterministic strategy
///
/// Always guesses the first remaining candidate, which makes guess traces
/// exactly predictable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn name(&self) -> &'static str {
        "first"
    }

    fn select_guess<'a>(&mut self, _guess_pool: &'a [Code], candidates: &'a [Code]) -> Option<&'a Code> {
        candidates.first()
    }
}

/// Pure entropy maximization strategy
///
/// Selects the guess with the highest Shannon entropy over the feedback
/// distribution. Any code may be guessed, not only remaining candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn select_guess<'a>(&mut self, guess_pool: &'a [Code], candidates: &'a [Code]) -> Option<&'a Code> {
        super::entropy::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }

    fn guesses_outside_candidates(&self) -> bool {
        true
    }
}

/// Pure minimax strategy
///
/// Selects the guess that minimizes the worst-case number of remaining candidates.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn select_guess<'a>(&mut self, guess_pool: &'a [Code], candidates: &'a [Code]) -> Option<&'a Code> {
        super::minimax::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }

    fn guesses_outside_candidates(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::solver::CandidateSet;

    fn setup_test_data() -> (Vec<Code>, Vec<Code>) {
        let rules = Rules::standard();
        let pool = CandidateSet::full(&rules).into_vec();
        let candidates = ["RBYG", "RBYP", "RBGY"]
            .iter()
            .map(|c| rules.parse_code(c).unwrap())
            .collect();
        (pool, candidates)
    }

    #[test]
    fn random_strategy_selects_from_candidates() {
        let (pool, candidates) = setup_test_data();
        let mut strategy = RandomStrategy::seeded(1);

        for _ in 0..20 {
            let guess = strategy.select_guess(&pool, &candidates).unwrap();
            assert!(candidates.contains(guess));
        }
    }

    #[test]
    fn random_strategy_is_reproducible() {
        let (pool, candidates) = setup_test_data();
        let mut a = RandomStrategy::seeded(42);
        let mut b = RandomStrategy::seeded(42);

        for _ in 0..20 {
            assert_eq!(
                a.select_guess(&pool, &candidates),
                b.select_guess(&pool, &candidates)
            );
        }
    }

    #[test]
    fn random_strategy_empty_candidates() {
        let (pool, _) = setup_test_data();
        let mut strategy = RandomStrategy::seeded(1);
        assert!(strategy.select_guess(&pool, &[]).is_none());
    }

    #[test]
    fn first_strategy_is_deterministic() {
        let (pool, candidates) = setup_test_data();
        let mut strategy = FirstCandidateStrategy;
        assert_eq!(
            strategy.select_guess(&pool, &candidates),
            Some(&candidates[0])
        );
    }

    #[test]
    fn entropy_strategy_selects_guess() {
        let (pool, candidates) = setup_test_data();
        let mut strategy = EntropyStrategy;

        let guess = strategy.select_guess(&pool, &candidates).unwrap();
        assert!(pool.contains(guess));
    }

    #[test]
    fn minimax_strategy_selects_guess() {
        let (pool, candidates) = setup_test_data();
        let mut strategy = MinimaxStrategy;

        let guess = strategy.select_guess(&pool, &candidates).unwrap();
        assert!(pool.contains(guess));
    }

    #[test]
    fn only_scoring_strategies_guess_outside_candidates() {
        let expected = [("random", false), ("first", false), ("entropy", true), ("minimax", true)];
        for (name, outside) in expected {
            let strategy = StrategyType::from_name(name, Some(1)).unwrap();
            assert_eq!(strategy.guesses_outside_candidates(), outside, "{name}");
        }
    }

    #[test]
    fn strategy_from_name() {
        for name in STRATEGY_NAMES {
            let strategy = StrategyType::from_name(name, Some(3)).unwrap();
            assert_eq!(strategy.name(), name);
        }
        assert_eq!(
            StrategyType::from_name("ENTROPY", None).map(|s| s.name()),
            Some("entropy")
        );
        assert!(StrategyType::from_name("knuth", None).is_none());
    }
}
