//! Mastermind - CLI
//!
//! Play Mastermind against the computer, or let the candidate-filtering
//! solver break codes in batch.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        Console, SelectorOptions, analyze_code, print_test_all_statistics, run_benchmark, run_session,
        run_test_all, solve_code,
    },
    core::{Code, Palette, Rules},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{STRATEGY_NAMES, Solver, Strategy, StrategyType},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind: break the computer's code, or watch it break yours",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: random (default), first, entropy, minimax
    #[arg(short, long, global = true, default_value = "random")]
    strategy: String,

    /// Palette as one symbol per color
    #[arg(long, global = true, default_value = Palette::STANDARD_SYMBOLS)]
    colors: String,

    /// Number of pegs in a code
    #[arg(long, global = true, default_value_t = Rules::DEFAULT_CODE_LENGTH)]
    length: usize,

    /// Guesses allowed per round
    #[arg(long, global = true, default_value_t = Rules::DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Seed for reproducible secrets and random guesses
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game against the computer (default)
    Play {
        /// As selector, score the computer's guesses yourself instead of typing the secret
        #[arg(long)]
        manual: bool,

        /// Pause between the computer's guesses, in milliseconds
        #[arg(long, default_value = "0")]
        delay_ms: u64,
    },

    /// Break a specific secret code
    Solve {
        /// The secret code to break
        code: String,

        /// Show entropy and information gained per guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze a code as an opening guess
    Analyze {
        /// Guess to analyze
        code: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to break
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Force the first guess instead of asking the strategy
        #[arg(short = 'f', long)]
        first: Option<String>,
    },

    /// Test solver on every code in the space
    TestAll {
        /// Limit number of codes to test
        #[arg(short = 'l', long)]
        limit: Option<usize>,

        /// Force the first guess instead of asking the strategy
        #[arg(short = 'f', long)]
        first: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules = Rules::from_symbols(&cli.colors, cli.length, cli.max_guesses).context("invalid game rules")?;
    let strategy = build_strategy(&cli.strategy, cli.seed)?;
    let mut solver = Solver::new(rules, strategy);
    let mut rng = cli.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        manual: false,
        delay_ms: 0,
    });

    match command {
        Commands::Play { manual, delay_ms } => {
            let options = SelectorOptions {
                manual_feedback: manual,
                delay: Duration::from_millis(delay_ms),
            };
            let mut console = Console::stdio();
            let score = run_session(&mut console, &mut solver, &mut rng, &options)?;
            println!("\nFinal score: {score}");
            Ok(())
        }
        Commands::Solve { code, verbose } => {
            let secret = parse_code(solver.rules(), &code)?;
            let result = solve_code(&secret, &mut solver)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { code } => {
            let guess = parse_code(solver.rules(), &code)?;
            print_analysis_result(&analyze_code(&guess, solver.rules()));
            Ok(())
        }
        Commands::Benchmark { count, first } => run_benchmark_command(&mut solver, count, first.as_deref(), &mut rng),
        Commands::TestAll { limit, first } => run_test_all_command(&mut solver, limit, first.as_deref()),
    }
}

fn build_strategy(name: &str, seed: Option<u64>) -> Result<StrategyType> {
    match StrategyType::from_name(name, seed) {
        Some(strategy) => Ok(strategy),
        None => bail!("unknown strategy '{name}' (expected one of: {})", STRATEGY_NAMES.join(", ")),
    }
}

fn parse_code(rules: &Rules, text: &str) -> Result<Code> {
    rules.parse_code(text).with_context(|| format!("invalid code '{text}'"))
}

fn run_benchmark_command<S: Strategy>(
    solver: &mut Solver<S>,
    count: usize,
    first: Option<&str>,
    rng: &mut StdRng,
) -> Result<()> {
    let opening = first.map(|text| parse_code(solver.rules(), text)).transpose()?;

    if let Some(code) = &opening {
        println!("Running benchmark on {count} random codes with forced first guess: {code}...");
    } else {
        println!("Running benchmark on {count} random codes...");
    }

    let result = run_benchmark(solver, count, opening.as_ref(), rng)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command<S: Strategy>(solver: &mut Solver<S>, limit: Option<usize>, first: Option<&str>) -> Result<()> {
    let opening = first.map(|text| parse_code(solver.rules(), text)).transpose()?;

    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible codes ({} colors, {} pegs)",
        solver.rules().space_size(),
        solver.rules().palette().len(),
        solver.rules().code_length()
    );
    println!("Strategy: {}", solver.strategy_name());
    if let Some(code) = &opening {
        println!("Forced first guess: {code}");
    }
    println!();

    let stats = run_test_all(solver, limit, opening.as_ref())?;
    print_test_all_statistics(&stats);
    Ok(())
}
