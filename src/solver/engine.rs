//! Main Mastermind solver interface
//!
//! The solver owns one round's candidate set and walks it through
//! `Initialized -> Guessing -> (Won | Exhausted)`.

use super::error::SolverError;
use super::filter::filter;
use super::space::CandidateSet;
use super::strategy::Strategy;
use crate::core::{Code, Feedback, Palette, Rules};

/// Where a round currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// Full candidate space, no guesses yet
    Initialized,
    /// At least one guess scored, code not yet broken
    Guessing,
    /// The last feedback was all exact pegs
    Won,
    /// The guess budget ran out without breaking the code
    Exhausted,
}

impl SolverState {
    /// Whether the round is over and takes no more guesses
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Exhausted)
    }
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { guesses: usize },
    Exhausted { guesses: usize },
}

impl Outcome {
    #[must_use]
    pub const fn guesses(self) -> usize {
        match self {
            Self::Won { guesses } | Self::Exhausted { guesses } => guesses,
        }
    }

    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won { .. })
    }
}

/// Main Mastermind solver
///
/// Coordinates one round using a given strategy. Feedback may come from a
/// known secret ([`Solver::play`]) or from a human scoring each guess
/// ([`Solver::next_guess`] + [`Solver::record_feedback`]).
pub struct Solver<S: Strategy> {
    rules: Rules,
    strategy: S,
    // Full space, kept only for strategies that guess outside the candidates
    guess_pool: Option<CandidateSet>,
    candidates: CandidateSet,
    history: Vec<(Code, Feedback)>,
    state: SolverState,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver for `rules`, enumerating the full candidate space
    #[must_use]
    pub fn new(rules: Rules, strategy: S) -> Self {
        let candidates = CandidateSet::full(&rules);
        let guess_pool = strategy.guesses_outside_candidates().then(|| candidates.clone());
        Self {
            rules,
            strategy,
            guess_pool,
            candidates,
            history: Vec::new(),
            state: SolverState::Initialized,
        }
    }

    /// Create a solver straight from its configuration values
    ///
    /// # Errors
    /// Returns `SolverError::Configuration` if `code_length` or `max_guesses`
    /// is zero, the palette is empty, or the space is too large.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Palette;
    /// use mastermind_solver::solver::{FirstCandidateStrategy, Solver};
    ///
    /// let solver = Solver::with_config(Palette::standard(), 4, 10, FirstCandidateStrategy).unwrap();
    /// assert_eq!(solver.candidates().len(), 1296);
    ///
    /// assert!(Solver::with_config(Palette::standard(), 4, 0, FirstCandidateStrategy).is_err());
    /// ```
    pub fn with_config(
        palette: Palette,
        code_length: usize,
        max_guesses: usize,
        strategy: S,
    ) -> Result<Self, SolverError> {
        let rules = Rules::new(palette, code_length, max_guesses)?;
        Ok(Self::new(rules, strategy))
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Name of the active guess selection strategy
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SolverState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state == SolverState::Won
    }

    /// The round's result, once it has ended
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.state.is_terminal() {
            return None;
        }

        let guesses = self.guesses_made();
        Some(if self.state == SolverState::Won {
            Outcome::Won { guesses }
        } else {
            Outcome::Exhausted { guesses }
        })
    }

    /// Codes still consistent with every recorded feedback
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Recorded `(guess, feedback)` pairs, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.rules.max_guesses().saturating_sub(self.guesses_made())
    }

    /// Start a new round with the same rules and strategy
    pub fn reset(&mut self) {
        self.candidates = match &self.guess_pool {
            Some(pool) => pool.clone(),
            None => CandidateSet::full(&self.rules),
        };
        self.history.clear();
        self.state = SolverState::Initialized;
    }

    /// Choose the next guess from the current candidates
    ///
    /// The guess is not counted until its feedback is recorded, so asking
    /// twice without feedback does not burn budget.
    ///
    /// # Errors
    /// Returns `SolverError::Exhausted` once the budget is spent and
    /// `SolverError::AlreadySolved` after the code was broken.
    pub fn next_guess(&mut self) -> Result<Code, SolverError> {
        self.ensure_playable()?;

        let candidates = self.candidates.as_slice();
        if candidates.len() == 1 {
            return Ok(candidates[0].clone());
        }

        let pool = self.guess_pool.as_ref().map_or(candidates, CandidateSet::as_slice);

        // Never empty here: record_feedback refuses to commit an empty set
        let guess = self
            .strategy
            .select_guess(pool, candidates)
            .unwrap_or(&candidates[0]);

        Ok(guess.clone())
    }

    /// Record the feedback one guess received and shrink the candidates
    ///
    /// Returns the number of candidates left. On error nothing changes, so a
    /// human can re-enter mistyped feedback.
    ///
    /// # Errors
    /// - `SolverError::WrongLength` if the guess does not fit the rules
    /// - `SolverError::InconsistentFeedback` if no candidate survives
    /// - `SolverError::Exhausted` / `SolverError::AlreadySolved` after the round ended
    pub fn record_feedback(&mut self, guess: &Code, feedback: Feedback) -> Result<usize, SolverError> {
        self.ensure_playable()?;
        self.ensure_length(guess)?;

        let remaining = filter(&self.candidates, guess, feedback);
        if remaining.is_empty() {
            return Err(SolverError::InconsistentFeedback {
                guess: guess.clone(),
                feedback,
            });
        }

        self.candidates = remaining;
        self.history.push((guess.clone(), feedback));

        self.state = if feedback.is_solved(self.rules.code_length()) {
            SolverState::Won
        } else if self.guesses_made() >= self.rules.max_guesses() {
            SolverState::Exhausted
        } else {
            SolverState::Guessing
        };

        Ok(self.candidates.len())
    }

    /// Play the rest of the round against a known secret
    ///
    /// # Errors
    /// Returns `SolverError::WrongLength` for a secret of the wrong length,
    /// `SolverError::InconsistentFeedback` if the secret is outside the
    /// candidate space, or any error of [`Solver::next_guess`].
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Palette, Rules};
    /// use mastermind_solver::solver::{RandomStrategy, Solver};
    ///
    /// // A budget as large as the space guarantees a win
    /// let rules = Rules::new(Palette::standard(), 4, 1296).unwrap();
    /// let secret = rules.parse_code("RBYG").unwrap();
    ///
    /// let mut solver = Solver::new(rules, RandomStrategy::seeded(7));
    /// let outcome = solver.play(&secret).unwrap();
    /// assert!(outcome.is_won());
    /// assert_eq!(solver.history().last().unwrap().0, secret);
    /// ```
    pub fn play(&mut self, secret: &Code) -> Result<Outcome, SolverError> {
        self.ensure_length(secret)?;

        loop {
            let guess = self.next_guess()?;
            let feedback = Feedback::evaluate(secret, &guess);
            self.record_feedback(&guess, feedback)?;

            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }
        }
    }

    fn ensure_playable(&self) -> Result<(), SolverError> {
        if !self.state.is_terminal() {
            return Ok(());
        }

        if self.state == SolverState::Won {
            Err(SolverError::AlreadySolved {
                guesses: self.guesses_made(),
            })
        } else {
            Err(SolverError::Exhausted {
                max_guesses: self.rules.max_guesses(),
            })
        }
    }

    fn ensure_length(&self, code: &Code) -> Result<(), SolverError> {
        if code.len() == self.rules.code_length() {
            Ok(())
        } else {
            Err(SolverError::WrongLength {
                code: code.clone(),
                expected: self.rules.code_length(),
            })
        }
    }
}
