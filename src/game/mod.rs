//! Game bookkeeping shared by the interactive rounds

mod board;
mod score;

pub use board::Board;
pub use score::{Role, Scoreboard};
