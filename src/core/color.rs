//! Peg colors and the palette they are drawn from
//!
//! A color is an opaque token identified by a single-character symbol. The
//! palette fixes which colors exist and in what order they are enumerated.

use std::fmt;
use thiserror::Error;

/// A single peg color, identified by its one-character symbol
///
/// Colors are not ranked; two colors are equal iff their symbols are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(char);

impl Color {
    /// Create a color from its symbol
    ///
    /// Symbols are normalized to uppercase so that text input is case-insensitive.
    #[inline]
    #[must_use]
    pub fn new(symbol: char) -> Self {
        Self(symbol.to_ascii_uppercase())
    }

    /// The one-character symbol used for text I/O
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        self.0
    }

    /// Human-readable name for the classic symbols, if this is one of them
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            'R' => Some("Red"),
            'B' => Some("Blue"),
            'Y' => Some("Yellow"),
            'G' => Some("Green"),
            'P' => Some("Purple"),
            'W' => Some("White"),
            'O' => Some("Orange"),
            'C' => Some("Cyan"),
            'K' => Some("Black"),
            'N' => Some("Brown"),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from building a palette
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,
    #[error("color symbol '{0}' appears more than once")]
    Duplicate(char),
    #[error("color symbol '{0}' must be an ASCII letter or digit")]
    InvalidSymbol(char),
}

/// Ordered, duplicate-free set of colors
///
/// The order is only used to make candidate enumeration deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Symbols of the classic six-color palette
    pub const STANDARD_SYMBOLS: &'static str = "RBYGPW";

    /// Build a palette from a string of symbols, e.g. `"RBYGPW"`
    ///
    /// # Errors
    /// Returns `PaletteError` if the string is empty, repeats a symbol
    /// (case-insensitively), or contains a non-alphanumeric character.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Palette;
    ///
    /// let palette = Palette::from_symbols("rgb").unwrap();
    /// assert_eq!(palette.len(), 3);
    /// assert!(Palette::from_symbols("RR").is_err());
    /// ```
    pub fn from_symbols(symbols: &str) -> Result<Self, PaletteError> {
        let mut colors: Vec<Color> = Vec::new();

        for ch in symbols.chars() {
            if !ch.is_ascii_alphanumeric() {
                return Err(PaletteError::InvalidSymbol(ch));
            }
            let color = Color::new(ch);
            if colors.contains(&color) {
                return Err(PaletteError::Duplicate(color.symbol()));
            }
            colors.push(color);
        }

        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Self { colors })
    }

    /// The classic palette: Red, Blue, Yellow, Green, Purple, White
    #[must_use]
    pub fn standard() -> Self {
        Self {
            colors: Self::STANDARD_SYMBOLS.chars().map(Color::new).collect(),
        }
    }

    /// Number of colors
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

    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Look up the palette color for a typed symbol (case-insensitive)
    #[must_use]
    pub fn lookup(&self, symbol: char) -> Option<Color> {
        let wanted = Color::new(symbol);
        self.colors.iter().copied().find(|&c| c == wanted)
    }

    /// The palette as a symbol string, e.g. `"RBYGPW"`
    #[must_use]
    pub fn symbols(&self) -> String {
        self.colors.iter().map(|c| c.symbol()).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .colors
            .iter()
            .map(|c| match c.name() {
                Some(name) => format!("{c} ({name})"),
                None => c.to_string(),
            })
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
