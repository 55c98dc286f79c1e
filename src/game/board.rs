//! Round board
//!
//! Records each scored guess of a round and renders it the way the game has
//! always shown it: `Guess N: CODE | PEGS`.

use crate::core::{Code, Feedback};
use std::fmt;

/// Scored guesses of one round, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    lines: Vec<(Code, Feedback)>,
}

impl Board {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append a scored guess
    pub fn record(&mut self, guess: Code, feedback: Feedback) {
        self.lines.push((guess, feedback));
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn lines(&self) -> &[(Code, Feedback)] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Render one line per guess
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Feedback, Rules};
    /// use mastermind_solver::game::Board;
    ///
    /// let rules = Rules::standard();
    /// let mut board = Board::new();
    /// board.record(rules.parse_code("RGYB").unwrap(), Feedback::new(2, 1));
    /// board.record(rules.parse_code("PPPP").unwrap(), Feedback::new(0, 0));
    ///
    /// assert_eq!(board.render(), vec!["Guess 1: RGYB | BBW", "Guess 2: PPPP | -"]);
    /// ```
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, (guess, feedback))| format!("Guess {}: {guess} | {feedback}", i + 1))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
