//! Mastermind solving algorithms
//!
//! Candidate enumeration, constraint filtering, guess selection strategies
//! and the per-round solver driver.

mod engine;
pub mod entropy;
mod error;
mod filter;
pub mod minimax;
pub mod partition;
pub mod space;
pub mod strategy;

pub use engine::{Outcome, Solver, SolverState};
pub use error::SolverError;
pub use filter::{filter, filter_history};
pub use partition::Partition;
pub use space::CandidateSet;
pub use strategy::{
    EntropyStrategy, FirstCandidateStrategy, MinimaxStrategy, RandomStrategy, STRATEGY_NAMES, Strategy,
    StrategyType,
};
