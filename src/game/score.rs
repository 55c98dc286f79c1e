//! Running score across rounds
//!
//! The codemaker scores one point for every guess the codebreaker made plus
//! one for the round itself, whether or not the code was broken.

use crate::solver::Outcome;
use std::fmt;

/// Which side the human plays in a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The human breaks a computer-generated code
    Guesser,
    /// The human picks (or scores) the code the computer breaks
    Selector,
}

impl Role {
    /// Parse the answer to the role prompt: `s` selects, anything else guesses
    #[must_use]
    pub fn from_answer(answer: &str) -> Self {
        if answer.trim().eq_ignore_ascii_case("s") {
            Self::Selector
        } else {
            Self::Guesser
        }
    }
}

/// Player and computer points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    player: usize,
    computer: usize,
    rounds: usize,
}

impl Scoreboard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player: 0,
            computer: 0,
            rounds: 0,
        }
    }

    #[must_use]
    pub const fn player(&self) -> usize {
        self.player
    }

    #[must_use]
    pub const fn computer(&self) -> usize {
        self.computer
    }

    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Points the codemaker earns for a finished round
    #[must_use]
    pub const fn points_for(outcome: Outcome) -> usize {
        outcome.guesses() + 1
    }

    /// Credit the codemaker of a round the human played as `role`
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::game::{Role, Scoreboard};
    /// use mastermind_solver::solver::Outcome;
    ///
    /// let mut score = Scoreboard::new();
    /// score.record(Role::Guesser, Outcome::Won { guesses: 4 });
    /// score.record(Role::Selector, Outcome::Exhausted { guesses: 10 });
    ///
    /// assert_eq!(score.computer(), 5);
    /// assert_eq!(score.player(), 11);
    /// ```
    pub fn record(&mut self, role: Role, outcome: Outcome) {
        let points = Self::points_for(outcome);
        match role {
            Role::Guesser => self.computer += points,
            Role::Selector => self.player += points,
        }
        self.rounds += 1;
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player: {} to Computer: {}", self.player, self.computer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_answer() {
        assert_eq!(Role::from_answer("s"), Role::Selector);
        assert_eq!(Role::from_answer(" S\n"), Role::Selector);
        assert_eq!(Role::from_answer(""), Role::Guesser);
        assert_eq!(Role::from_answer("selector"), Role::Guesser);
    }

    #[test]
    fn every_round_scores_guesses_plus_one() {
        assert_eq!(Scoreboard::points_for(Outcome::Won { guesses: 1 }), 2);
        assert_eq!(Scoreboard::points_for(Outcome::Won { guesses: 10 }), 11);
        assert_eq!(Scoreboard::points_for(Outcome::Exhausted { guesses: 10 }), 11);
    }

    #[test]
    fn computer_broken_in_four_gives_five() {
        let mut score = Scoreboard::new();
        score.record(Role::Guesser, Outcome::Won { guesses: 4 });

        assert_eq!(score.computer(), 5);
        assert_eq!(score.player(), 0);
    }

    #[test]
    fn points_accumulate_across_rounds() {
        let mut score = Scoreboard::new();
        score.record(Role::Guesser, Outcome::Won { guesses: 3 });
        score.record(Role::Guesser, Outcome::Won { guesses: 5 });
        score.record(Role::Selector, Outcome::Won { guesses: 6 });

        assert_eq!(score.computer(), 10);
        assert_eq!(score.player(), 7);
        assert_eq!(score.rounds(), 3);
        assert_eq!(score.to_string(), "Player: 7 to Computer: 10");
    }
}
