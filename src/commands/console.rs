//! Line-oriented terminal I/O for the interactive rounds
//!
//! Generic over the reader and writer so rounds can be driven from scripted
//! input in tests.

use crate::solver::SolverError;
use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use thiserror::Error;

/// Errors that end an interactive round early
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Input reached end of file while waiting for an answer
    #[error("input closed")]
    Closed,

    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Prompting reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` and read one trimmed line
    ///
    /// # Errors
    /// Returns `ConsoleError::Closed` at end of input, or the I/O error.
    pub fn prompt(&mut self, message: &str) -> Result<String, ConsoleError> {
        writeln!(self.output, "{message}")?;
        write!(self.output, "> ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Print one line
    ///
    /// # Errors
    /// Returns the underlying write error.
    pub fn say(&mut self, message: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's standard input and output
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
