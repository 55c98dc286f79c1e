//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types: colors, codes, feedback
//! and the rules that tie them together. All types here are pure and testable.

mod code;
mod color;
mod feedback;
mod rules;

pub use code::{Code, CodeError};
pub use color::{Color, Palette, PaletteError};
pub use feedback::{Feedback, FeedbackParseError};
pub use rules::{ConfigError, MAX_SPACE_SIZE, Rules};
pub(crate) use rules::check_space;
