//! Mastermind feedback evaluation and representation
//!
//! Feedback for a guess is a pair of peg counts:
//! - exact (black peg, `B`): right color in the right position
//! - color-only (white peg, `W`): right color, wrong position
//!
//! Each secret peg can satisfy at most one guess peg, and exact matches are
//! counted before color-only matches.

use super::Code;
use std::fmt;
use thiserror::Error;

/// Peg counts produced by scoring a guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    exact: usize,
    color_only: usize,
}

/// Error type for feedback typed by a human codemaker
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackParseError {
    #[error("feedback is empty (use '-' for no pegs)")]
    Empty,
    #[error("unrecognized feedback '{0}' (use pegs like 'BBW' or counts like '2 1')")]
    Unrecognized(String),
    #[error("{exact} exact + {color_only} color pegs exceeds code length {length}")]
    TooManyPegs {
        exact: usize,
        color_only: usize,
        length: usize,
    },
}

impl Feedback {
    /// Create feedback from raw peg counts
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, color_only: usize) -> Self {
        Self { exact, color_only }
    }

    /// Feedback for a fully correct guess of `length` pegs
    #[inline]
    #[must_use]
    pub const fn solved(length: usize) -> Self {
        Self::new(length, 0)
    }

    /// Number of exact matches (black pegs)
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Number of color-only matches (white pegs)
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> usize {
        self.color_only
    }

    /// Total pegs awarded
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact.saturating_add(self.color_only)
    }

    /// Check if every one of `length` positions matched exactly
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact == length
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches and consume those secret pegs
    /// 2. Second pass: for every non-exact guess peg, consume one remaining
    ///    secret peg of the same color, if any, and count a color-only match
    ///
    /// Codes are compared position by position; callers pass codes of equal length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Feedback, Palette};
    ///
    /// let palette = Palette::standard();
    /// let secret = Code::parse("RBYG", &palette, 4).unwrap();
    /// let guess = Code::parse("RGYB", &palette, 4).unwrap();
    ///
    /// // R and Y exact; G and B present but misplaced
    /// assert_eq!(Feedback::evaluate(&secret, &guess), Feedback::new(2, 2));
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Code, guess: &Code) -> Self {
        debug_assert_eq!(secret.len(), guess.len(), "codes must be the same length");

        let mut exact = 0;
        let mut secret_available = secret.color_counts();
        let mut unmatched = Vec::with_capacity(guess.len());

        // First pass: exact matches consume their secret peg
        for (&s, &g) in secret.colors().iter().zip(guess.colors()) {
            if s == g {
                exact += 1;
                if let Some(count) = secret_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            } else {
                unmatched.push(g);
            }
        }

        // Second pass: remaining guess pegs consume any unclaimed secret peg
        let mut color_only = 0;
        for color in unmatched {
            if let Some(count) = secret_available.get_mut(&color)
                && *count > 0
            {
                *count -= 1;
                color_only += 1;
            }
        }

        Self { exact, color_only }
    }

    /// Parse feedback typed by a human scoring a guess of `length` pegs
    ///
    /// Accepts:
    /// - peg strings: `B`/`b` for exact, `W`/`w` for color-only, e.g. `"BBW"`
    /// - `-` on its own for no pegs at all
    /// - two counts separated by whitespace or a comma, e.g. `"2 1"` or `"2,1"`
    ///
    /// # Errors
    /// Returns `FeedbackParseError` if the text is empty, not in one of the
    /// accepted forms, or awards more pegs than `length`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// assert_eq!(Feedback::parse("BBW", 4).unwrap(), Feedback::new(2, 1));
    /// assert_eq!(Feedback::parse("2,1", 4).unwrap(), Feedback::new(2, 1));
    /// assert_eq!(Feedback::parse("-", 4).unwrap(), Feedback::new(0, 0));
    /// assert!(Feedback::parse("BBBBB", 4).is_err());
    /// ```
    pub fn parse(input: &str, length: usize) -> Result<Self, FeedbackParseError> {
        let text = input.trim();
        if text.is_empty() {
            return Err(FeedbackParseError::Empty);
        }

        let feedback = if text == "-" {
            Self::new(0, 0)
        } else if let Some(feedback) = Self::parse_pegs(text) {
            feedback
        } else if let Some(feedback) = Self::parse_counts(text) {
            feedback
        } else {
            return Err(FeedbackParseError::Unrecognized(text.to_string()));
        };

        if feedback.total() > length {
            return Err(FeedbackParseError::TooManyPegs {
                exact: feedback.exact,
                color_only: feedback.color_only,
                length,
            });
        }

        Ok(feedback)
    }

    fn parse_pegs(text: &str) -> Option<Self> {
        let mut feedback = Self::new(0, 0);
        for ch in text.chars() {
            match ch {
                'B' | 'b' => feedback.exact += 1,
                'W' | 'w' => feedback.color_only += 1,
                _ => return None,
            }
        }
        Some(feedback)
    }

    fn parse_counts(text: &str) -> Option<Self> {
        let mut parts = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let exact = parts.next()?.parse().ok()?;
        let color_only = parts.next()?.parse().ok()?;

        if parts.next().is_some() {
            return None;
        }

        Some(Self::new(exact, color_only))
    }

    /// Render as key pegs, e.g. `"BBW"`; empty when nothing matched
    #[must_use]
    pub fn to_pegs(self) -> String {
        let mut pegs = String::with_capacity(self.total());
        pegs.push_str(&"B".repeat(self.exact));
        pegs.push_str(&"W".repeat(self.color_only));
        pegs
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total() == 0 {
            write!(f, "-")
        } else {
            write!(f, "{}", self.to_pegs())
        }
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackParseError;

    /// Parse without a length bound; use [`Feedback::parse`] when the code length is known.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, usize::MAX)
    }
}
