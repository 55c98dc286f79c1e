//! Human selector round
//!
//! The human is the codemaker. Either they type a secret and watch the
//! solver break it, or they keep the secret to themselves and score every
//! computer guess by hand.

use super::console::{Console, ConsoleError};
use super::play::{RoundReport, help_message};
use crate::core::{Code, Feedback};
use crate::game::{Board, Role};
use crate::output::formatters::{colorize_code, colorize_feedback};
use crate::solver::{Outcome, Solver, SolverError, Strategy};
use colored::Colorize;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

/// Selector round settings
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectorOptions {
    /// Score computer guesses by hand instead of typing the secret
    pub manual_feedback: bool,
    /// Pause between computer guesses
    pub delay: Duration,
}

/// Play one round with the human as codemaker
///
/// # Errors
/// Returns `ConsoleError` if the terminal fails, input closes mid-round, or
/// the solver reports an unexpected fault.
pub fn run_selector_round<R, W, S>(
    console: &mut Console<R, W>,
    solver: &mut Solver<S>,
    options: &SelectorOptions,
) -> Result<RoundReport, ConsoleError>
where
    R: BufRead,
    W: Write,
    S: Strategy,
{
    solver.reset();

    if options.manual_feedback {
        score_by_hand(console, solver, options)
    } else {
        let secret = read_secret(console, solver)?;
        break_secret(console, solver, secret, options)
    }
}

fn read_secret<R: BufRead, W: Write, S: Strategy>(
    console: &mut Console<R, W>,
    solver: &Solver<S>,
) -> Result<Code, ConsoleError> {
    let rules = solver.rules();
    let prompt = format!(
        "\nChoose a secret code of {} pegs from {} (type 'help' for options)",
        rules.code_length(),
        rules.palette().symbols()
    );

    loop {
        let input = console.prompt(&prompt)?;
        if input.eq_ignore_ascii_case("help") {
            help_message(console, rules)?;
            continue;
        }
        match rules.parse_code(&input) {
            Ok(code) => return Ok(code),
            Err(e) => console.say(format!("Invalid input: {e}").red())?,
        }
    }
}

fn break_secret<R: BufRead, W: Write, S: Strategy>(
    console: &mut Console<R, W>,
    solver: &mut Solver<S>,
    secret: Code,
    options: &SelectorOptions,
) -> Result<RoundReport, ConsoleError> {
    console.say(format!("The computer ({}) is breaking your code...", solver.strategy_name()))?;

    let outcome = loop {
        let guess = solver.next_guess()?;
        let feedback = Feedback::evaluate(&secret, &guess);
        let remaining = solver.record_feedback(&guess, feedback)?;

        console.say(format!(
            "Guess {}: {} | {}  ({remaining} left)",
            solver.guesses_made(),
            colorize_code(&guess),
            colorize_feedback(feedback)
        ))?;

        if let Some(outcome) = solver.outcome() {
            break outcome;
        }
        if !options.delay.is_zero() {
            thread::sleep(options.delay);
        }
    };

    announce(console, outcome)?;
    Ok(RoundReport {
        role: Role::Selector,
        secret: Some(secret),
        outcome,
    })
}

fn score_by_hand<R: BufRead, W: Write, S: Strategy>(
    console: &mut Console<R, W>,
    solver: &mut Solver<S>,
    options: &SelectorOptions,
) -> Result<RoundReport, ConsoleError> {
    let code_length = solver.rules().code_length();
    let mut board = Board::new();
    console.say("\nThink of a secret code. Score each guess as pegs (BBW), or counts (2 1 or 2,1); '-' for none.")?;

    let outcome = loop {
        let guess = solver.next_guess()?;
        console.say(format!(
            "\nComputer guess {}: {}",
            solver.guesses_made() + 1,
            colorize_code(&guess)
        ))?;

        let feedback = loop {
            let input = console.prompt("Feedback?")?;
            let feedback = match Feedback::parse(&input, code_length) {
                Ok(feedback) => feedback,
                Err(e) => {
                    console.say(format!("Invalid feedback: {e}").red())?;
                    continue;
                }
            };
            match solver.record_feedback(&guess, feedback) {
                Ok(_) => break feedback,
                Err(SolverError::InconsistentFeedback { .. }) => {
                    console.say(
                        "That feedback contradicts your earlier answers; no code fits them all. Try again."
                            .red(),
                    )?;
                }
                Err(e) => return Err(e.into()),
            }
        };

        board.record(guess, feedback);
        console.say(&board)?;

        if let Some(outcome) = solver.outcome() {
            break outcome;
        }
        if !options.delay.is_zero() {
            thread::sleep(options.delay);
        }
    };

    announce(console, outcome)?;
    // The last guess is the secret only if it was scored as solved
    let secret = if outcome.is_won() {
        board.lines().last().map(|(code, _)| code.clone())
    } else {
        None
    };
    Ok(RoundReport {
        role: Role::Selector,
        secret,
        outcome,
    })
}

fn announce<R: BufRead, W: Write>(console: &mut Console<R, W>, outcome: Outcome) -> Result<(), ConsoleError> {
    match outcome {
        Outcome::Won { guesses } => {
            let noun = if guesses == 1 { "guess" } else { "guesses" };
            console.say(format!("The computer broke the code in {guesses} {noun}.").yellow().bold())
        }
        Outcome::Exhausted { guesses } => console.say(
            format!("The computer could not break the code in {guesses} guesses. You win the round!")
                .green()
                .bold(),
        ),
    }
}
