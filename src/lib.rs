//! Mastermind Solver
//!
//! The Mastermind code-breaking game with a candidate-filtering solver: after
//! every guess, only codes that would have produced the same feedback stay in
//! play, and a pluggable strategy picks the next guess among them.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Feedback, Rules};
//! use mastermind_solver::solver::{FirstCandidateStrategy, Solver};
//!
//! let rules = Rules::standard();
//! let secret = rules.parse_code("GYBR").unwrap();
//!
//! // Score a single guess
//! let guess = rules.parse_code("RBYG").unwrap();
//! assert_eq!(Feedback::evaluate(&secret, &guess), Feedback::new(0, 4));
//!
//! // Let the solver break the code
//! let mut solver = Solver::new(rules, FirstCandidateStrategy);
//! let outcome = solver.play(&secret).unwrap();
//! assert!(outcome.is_won());
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Round bookkeeping
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
