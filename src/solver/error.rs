//! Solver error taxonomy

use crate::core::{Code, ConfigError, Feedback};
use thiserror::Error;

/// Errors reported by [`super::Solver`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The rules could not be built
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigError),

    /// A guess or secret has the wrong number of pegs for the rules
    #[error("code {code} does not have {expected} pegs")]
    WrongLength { code: Code, expected: usize },

    /// A guess or feedback was supplied after the guess budget ran out
    #[error("guess budget of {max_guesses} exhausted")]
    Exhausted { max_guesses: usize },

    /// A guess or feedback was supplied after the code was broken
    #[error("code already broken in {guesses} guesses")]
    AlreadySolved { guesses: usize },

    /// The feedback contradicts every remaining candidate
    ///
    /// Either the feedback was computed wrongly, it belongs to a different
    /// guess, or the secret is not a valid code under the current rules.
    #[error("feedback {feedback} for guess {guess} is inconsistent with all earlier feedback")]
    InconsistentFeedback { guess: Code, feedback: Feedback },
}
