//! Worst-case guess scoring
//!
//! Scores a guess by the largest feedback class it can leave behind and
//! prefers the guess whose worst case is smallest.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::select_best_guess;
