//! Human guesser round and the session loop
//!
//! The computer picks a random secret and the human breaks it; the session
//! alternates rounds, keeping score until the human quits.

use super::console::{Console, ConsoleError};
use super::select::{SelectorOptions, run_selector_round};
use crate::core::{Code, Feedback, Rules};
use crate::game::{Board, Role, Scoreboard};
use crate::solver::{Outcome, Solver, Strategy};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// How one round ended, from the codebreaker's side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// Side the human played
    pub role: Role,
    /// The secret, when it is known to the program
    pub secret: Option<Code>,
    pub outcome: Outcome,
}

/// Print the palette and the peg legend
pub(crate) fn help_message<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    rules: &Rules,
) -> Result<(), ConsoleError> {
    console.say(format!("Pins: {}", rules.palette()))?;
    console.say("Results: B - A pin is the right color and in the right spot. W - Pin is the right color but in the wrong spot.")
}

/// Play one round with the human as codebreaker
///
/// Guesses are case-insensitive; `help` prints the palette and invalid input
/// is re-prompted without costing a guess.
///
/// # Errors
/// Returns `ConsoleError` if the terminal fails or input closes mid-round.
pub fn run_guesser_round<R, W, G>(
    console: &mut Console<R, W>,
    rules: &Rules,
    rng: &mut G,
) -> Result<RoundReport, ConsoleError>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let secret = rules.random_code(rng);
    let mut board = Board::new();
    let prompt = format!(
        "\nGuess a {} length code (type 'help' for options)",
        rules.code_length()
    );

    for turn in 1..=rules.max_guesses() {
        let guess = loop {
            let input = console.prompt(&prompt)?;
            if input.eq_ignore_ascii_case("help") {
                help_message(console, rules)?;
                continue;
            }
            match rules.parse_code(&input) {
                Ok(code) => break code,
                Err(e) => console.say(format!("Invalid input: {e}").red())?,
            }
        };

        let feedback = Feedback::evaluate(&secret, &guess);
        if feedback.is_solved(rules.code_length()) {
            let noun = if turn == 1 { "guess" } else { "guesses" };
            console.say(format!("You win in {turn} {noun}.").green().bold())?;
            return Ok(RoundReport {
                role: Role::Guesser,
                secret: Some(secret),
                outcome: Outcome::Won { guesses: turn },
            });
        }

        console.say("The code did not match.")?;
        board.record(guess, feedback);
        console.say(&board)?;
    }

    console.say("You could not guess the code in time.".red())?;
    console.say(format!("The code was {secret}."))?;
    Ok(RoundReport {
        role: Role::Guesser,
        secret: Some(secret),
        outcome: Outcome::Exhausted {
            guesses: rules.max_guesses(),
        },
    })
}

/// Keep playing rounds until the human declines another
///
/// Closed input ends the session quietly; the final score is returned.
///
/// # Errors
/// Returns `ConsoleError` for terminal failures or a solver fault.
pub fn run_session<R, W, S, G>(
    console: &mut Console<R, W>,
    solver: &mut Solver<S>,
    rng: &mut G,
    options: &SelectorOptions,
) -> Result<Scoreboard, ConsoleError>
where
    R: BufRead,
    W: Write,
    S: Strategy,
    G: Rng + ?Sized,
{
    let mut scoreboard = Scoreboard::new();

    match play_rounds(console, solver, rng, options, &mut scoreboard) {
        Ok(()) | Err(ConsoleError::Closed) => Ok(scoreboard),
        Err(e) => Err(e),
    }
}

fn play_rounds<R, W, S, G>(
    console: &mut Console<R, W>,
    solver: &mut Solver<S>,
    rng: &mut G,
    options: &SelectorOptions,
    scoreboard: &mut Scoreboard,
) -> Result<(), ConsoleError>
where
    R: BufRead,
    W: Write,
    S: Strategy,
    G: Rng + ?Sized,
{
    loop {
        console.say("MASTERMIND".bright_cyan().bold())?;
        console.say("----------")?;
        let answer = console.prompt("Play as the guesser or selector (s for selector)")?;

        let report = match Role::from_answer(&answer) {
            Role::Guesser => run_guesser_round(console, solver.rules(), rng)?,
            Role::Selector => run_selector_round(console, solver, options)?,
        };
        scoreboard.record(report.role, report.outcome);

        console.say(format!("\nScore is {scoreboard}"))?;
        let again = console.prompt("\nPlay again? (n to quit)")?;
        if again.eq_ignore_ascii_case("n") {
            return Ok(());
        }
    }
}
