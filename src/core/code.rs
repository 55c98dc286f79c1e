//! Mastermind code representation
//!
//! A Code is an ordered, immutable sequence of peg colors: the secret or a guess.

use super::{Color, Palette};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// An ordered sequence of peg colors
///
/// Two codes are equal iff every position matches. Whether a code is valid
/// for a game depends on the rules; use [`Code::parse`] or
/// [`crate::core::Rules::parse_code`] to validate external input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    colors: Box<[Color]>,
}

/// Error type for rejected code input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code must be exactly {expected} pegs, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("'{symbol}' is not a color in the palette ({palette})")]
    UnknownColor { symbol: char, palette: String },
}

impl Code {
    /// Build a code from colors without palette validation
    #[must_use]
    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        Self {
            colors: colors.into().into_boxed_slice(),
        }
    }

    /// Parse a code from text such as `"RBYG"`
    ///
    /// Input is case-insensitive and surrounding whitespace is ignored.
    /// Nothing is coerced: a wrong length or an unknown symbol is an error.
    ///
    /// # Errors
    /// Returns `CodeError` if the length is not `length` or a symbol is not
    /// in `palette`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Palette};
    ///
    /// let palette = Palette::standard();
    /// let code = Code::parse("rbyg", &palette, 4).unwrap();
    /// assert_eq!(code.to_string(), "RBYG");
    ///
    /// assert!(Code::parse("RBY", &palette, 4).is_err());
    /// assert!(Code::parse("RBYX", &palette, 4).is_err());
    /// ```
    pub fn parse(input: &str, palette: &Palette, length: usize) -> Result<Self, CodeError> {
        let symbols: Vec<char> = input.trim().chars().collect();

        if symbols.len() != length {
            return Err(CodeError::InvalidLength {
                expected: length,
                actual: symbols.len(),
            });
        }

        let colors = symbols
            .into_iter()
            .map(|symbol| {
                palette.lookup(symbol).ok_or_else(|| CodeError::UnknownColor {
                    symbol,
                    palette: palette.symbols(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(colors))
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Get the color at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn color_at(&self, position: usize) -> Color {
        self.colors[position]
    }

    /// Check that every peg belongs to `palette`
    #[must_use]
    pub fn is_within(&self, palette: &Palette) -> bool {
        self.colors.iter().all(|&c| palette.contains(c))
    }

    /// Count of each color in the code
    ///
    /// Used by feedback evaluation for the multiset-consumption rule.
    #[inline]
    pub(crate) fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for &color in &self.colors {
            *counts.entry(color).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.colors {
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard(text: &str) -> Code {
        Code::parse(text, &Palette::standard(), 4).unwrap()
    }

    #[test]
    fn code_parse_valid() {
        let code = standard("RBYG");
        assert_eq!(code.len(), 4);
        assert_eq!(code.to_string(), "RBYG");
        assert_eq!(code.color_at(2), Color::new('Y'));
    }

    #[test]
    fn code_parse_normalizes_case_and_whitespace() {
        assert_eq!(standard("  rbyg\n"), standard("RBYG"));
    }

    #[test]
    fn code_parse_invalid_length() {
        let palette = Palette::standard();
        assert_eq!(
            Code::parse("RBYGP", &palette, 4),
            Err(CodeError::InvalidLength {
                expected: 4,
                actual: 5
            })
        );
        assert!(matches!(
            Code::parse("", &palette, 4),
            Err(CodeError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn code_parse_unknown_color() {
        let palette = Palette::standard();
        assert!(matches!(
            Code::parse("RBYO", &palette, 4),
            Err(CodeError::UnknownColor { symbol: 'O', .. })
        ));
        assert!(Code::parse("RB G", &palette, 4).is_err());
    }

    #[test]
    fn code_is_within_palette() {
        let code = Code::new(vec![Color::new('R'), Color::new('O')]);
        assert!(!code.is_within(&Palette::standard()));
        assert!(code.is_within(&Palette::from_symbols("RO").unwrap()));
    }

    #[test]
    fn code_color_counts() {
        let code = standard("RRBY");
        let counts = code.color_counts();
        assert_eq!(counts.get(&Color::new('R')), Some(&2));
        assert_eq!(counts.get(&Color::new('B')), Some(&1));
        assert_eq!(counts.get(&Color::new('G')), None);
    }

    #[test]
    fn code_equality_is_positional() {
        assert_eq!(standard("RBYG"), standard("rbyg"));
        assert_ne!(standard("RBYG"), standard("GYBR"));
    }
}
