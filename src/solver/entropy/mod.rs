//! Information-theoretic guess scoring
//!
//! A guess splits the candidates into feedback classes; the Shannon entropy
//! of that split is the expected number of bits the guess reveals.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, shannon_entropy};
pub use selector::select_best_guess;
