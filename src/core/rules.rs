//! Game rules: palette, code length and guess budget
//!
//! Rules are an immutable value handed to every solver and game round, so
//! several configurations can coexist in one process.

use super::{Code, CodeError, Palette, PaletteError};
use rand::Rng;
use thiserror::Error;

/// Largest candidate space a solver will materialize
pub const MAX_SPACE_SIZE: usize = 1 << 20;

/// Error type for invalid rule sets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error("code length must be at least 1")]
    ZeroCodeLength,
    #[error("guess budget must be at least 1")]
    ZeroMaxGuesses,
    #[error("{colors} colors over {length} positions exceeds {} possible codes", MAX_SPACE_SIZE)]
    SpaceTooLarge { colors: usize, length: usize },
}

/// A validated rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rules {
    palette: Palette,
    code_length: usize,
    max_guesses: usize,
}

/// Check that `length` pegs over `palette` give a non-empty space of at most
/// [`MAX_SPACE_SIZE`] codes
pub(crate) fn check_space(palette: &Palette, length: usize) -> Result<(), ConfigError> {
    if palette.is_empty() {
        return Err(PaletteError::Empty.into());
    }
    if length == 0 {
        return Err(ConfigError::ZeroCodeLength);
    }

    let within_limit = u32::try_from(length)
        .ok()
        .and_then(|exp| palette.len().checked_pow(exp))
        .is_some_and(|size| size <= MAX_SPACE_SIZE);
    if within_limit {
        Ok(())
    } else {
        Err(ConfigError::SpaceTooLarge {
            colors: palette.len(),
            length,
        })
    }
}

impl Rules {
    /// Default number of pegs in a code
    pub const DEFAULT_CODE_LENGTH: usize = 4;

    /// Default number of guesses allowed per round
    pub const DEFAULT_MAX_GUESSES: usize = 10;

    /// Create a rule set
    ///
    /// # Errors
    /// Returns `ConfigError` if the palette is empty, `code_length` or
    /// `max_guesses` is zero, or the number of possible codes exceeds
    /// [`MAX_SPACE_SIZE`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Palette, Rules};
    ///
    /// let rules = Rules::new(Palette::standard(), 4, 10).unwrap();
    /// assert_eq!(rules.space_size(), 1296);
    ///
    /// assert!(Rules::new(Palette::standard(), 0, 10).is_err());
    /// ```
    pub fn new(palette: Palette, code_length: usize, max_guesses: usize) -> Result<Self, ConfigError> {
        check_space(&palette, code_length)?;
        if max_guesses == 0 {
            return Err(ConfigError::ZeroMaxGuesses);
        }

        Ok(Self {
            palette,
            code_length,
            max_guesses,
        })
    }

    /// Create a rule set from palette symbols such as `"RBYGPW"`
    ///
    /// # Errors
    /// Returns `ConfigError` for a bad palette string or any error of [`Rules::new`].
    pub fn from_symbols(symbols: &str, code_length: usize, max_guesses: usize) -> Result<Self, ConfigError> {
        Self::new(Palette::from_symbols(symbols)?, code_length, max_guesses)
    }

    /// The classic game: six colors, four pegs, ten guesses
    #[must_use]
    pub fn standard() -> Self {
        Self {
            palette: Palette::standard(),
            code_length: Self::DEFAULT_CODE_LENGTH,
            max_guesses: Self::DEFAULT_MAX_GUESSES,
        }
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Number of possible codes, `colors ^ code_length`
    #[must_use]
    pub fn space_size(&self) -> usize {
        // Bounded by MAX_SPACE_SIZE at construction
        self.palette.len().pow(self.code_length as u32)
    }

    /// Validate and parse a code typed by a player
    ///
    /// # Errors
    /// Returns `CodeError` on a wrong length or a symbol outside the palette.
    pub fn parse_code(&self, input: &str) -> Result<Code, CodeError> {
        Code::parse(input, &self.palette, self.code_length)
    }

    /// Check that a code fits these rules
    #[must_use]
    pub fn accepts(&self, code: &Code) -> bool {
        code.len() == self.code_length && code.is_within(&self.palette)
    }

    /// Generate a uniformly random secret code
    pub fn random_code<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        let colors = self.palette.colors();
        let pegs: Vec<_> = (0..self.code_length)
            .map(|_| colors[rng.random_range(0..colors.len())])
            .collect();
        Code::new(pegs)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn standard_rules() {
        let rules = Rules::standard();
        assert_eq!(rules.palette().len(), 6);
        assert_eq!(rules.code_length(), 4);
        assert_eq!(rules.max_guesses(), 10);
        assert_eq!(rules.space_size(), 1296);
    }

    #[test]
    fn rules_reject_zero_length() {
        assert_eq!(
            Rules::new(Palette::standard(), 0, 10),
            Err(ConfigError::ZeroCodeLength)
        );
    }

    #[test]
    fn rules_reject_zero_budget() {
        assert_eq!(
            Rules::new(Palette::standard(), 4, 0),
            Err(ConfigError::ZeroMaxGuesses)
        );
    }

    #[test]
    fn rules_reject_empty_palette() {
        assert_eq!(
            Rules::from_symbols("", 4, 10),
            Err(ConfigError::Palette(PaletteError::Empty))
        );
    }

    #[test]
    fn rules_reject_huge_space() {
        // 8^7 = 2^21
        assert!(matches!(
            Rules::from_symbols("RBYGPWOC", 7, 10),
            Err(ConfigError::SpaceTooLarge { colors: 8, length: 7 })
        ));
        assert!(Rules::from_symbols("RB", 10_000, 10).is_err());
        // 4^10 = 2^20 is exactly at the ceiling
        assert!(Rules::from_symbols("RBYG", 10, 10).is_ok());
    }

    #[test]
    fn space_check_is_shared_by_rules_and_enumeration() {
        let eight = Palette::from_symbols("RBYGPWOC").unwrap();
        assert!(check_space(&eight, 6).is_ok());
        assert!(matches!(
            check_space(&eight, 7),
            Err(ConfigError::SpaceTooLarge { colors: 8, length: 7 })
        ));
        assert_eq!(check_space(&eight, 0), Err(ConfigError::ZeroCodeLength));
        assert!(crate::solver::space::enumerate(&eight, 7).is_err());
    }

    #[test]
    fn rules_single_color_single_peg() {
        let rules = Rules::from_symbols("R", 1, 1).unwrap();
        assert_eq!(rules.space_size(), 1);
    }

    #[test]
    fn parse_code_uses_rules() {
        let rules = Rules::from_symbols("RB", 3, 5).unwrap();
        assert!(rules.parse_code("rbr").is_ok());
        assert!(rules.parse_code("RBY").is_err());
        assert!(rules.parse_code("RB").is_err());
    }

    #[test]
    fn random_code_is_valid_and_reproducible() {
        let rules = Rules::standard();
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let a = rules.random_code(&mut rng1);
            let b = rules.random_code(&mut rng2);
            assert!(rules.accepts(&a));
            assert_eq!(a, b);
        }
    }
}
