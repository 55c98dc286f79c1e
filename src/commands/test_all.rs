//! Test every code - comprehensive solver evaluation
//!
//! Runs the solver against every code in the space and generates statistics.

use super::benchmark::play_with_opening;
use crate::core::Code;
use crate::solver::{CandidateSet, Solver, SolverError, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single code
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub secret: Code,
    pub first_guess: Option<Code>,
    pub num_guesses: usize,
    pub success: bool,
}

/// Statistics from testing all codes
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub space_size: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_budget: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub best_code: Option<(Code, usize)>,
    pub worst_codes: Vec<(Code, usize)>,
    pub failed_codes: Vec<Code>,
    pub first_guess_used: HashMap<Code, usize>,
}

/// Run the solver on every code (or the first `limit` codes) in enumeration order
///
/// If `opening` is provided, it is played as the first guess instead of
/// asking the strategy.
///
/// # Errors
/// Propagates any solver error from [`play_with_opening`].
pub fn run_test_all<S: Strategy>(
    solver: &mut Solver<S>,
    limit: Option<usize>,
    opening: Option<&Code>,
) -> Result<TestAllStatistics, SolverError> {
    let space = CandidateSet::full(solver.rules());
    let space_size = space.len();
    let guess_budget = solver.rules().max_guesses();
    let test_codes: Vec<Code> = space.into_vec().into_iter().take(limit.unwrap_or(space_size)).collect();

    println!("🎯 Testing {} codes...", test_codes.len());

    let pb = ProgressBar::new(test_codes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut results: Vec<CodeTestResult> = Vec::with_capacity(test_codes.len());
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    let mut first_guess_used: HashMap<Code, usize> = HashMap::new();

    let total_start = Instant::now();

    for (idx, secret) in test_codes.into_iter().enumerate() {
        let outcome = play_with_opening(solver, &secret, opening)?;
        let first_guess = solver.history().first().map(|(guess, _)| guess.clone());

        if let Some(first) = &first_guess {
            *first_guess_used.entry(first.clone()).or_insert(0) += 1;
        }
        if outcome.is_won() {
            *guess_distribution.entry(outcome.guesses()).or_insert(0) += 1;
        }

        results.push(CodeTestResult {
            secret,
            first_guess,
            num_guesses: outcome.guesses(),
            success: outcome.is_won(),
        });

        // Update progress
        if idx % 10 == 0 {
            let avg = results.iter().map(|r| r.num_guesses).sum::<usize>() as f64 / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();
    Ok(summarize(
        results,
        space_size,
        guess_budget,
        guess_distribution,
        first_guess_used,
        total_time,
    ))
}

fn summarize(
    results: Vec<CodeTestResult>,
    space_size: usize,
    guess_budget: usize,
    guess_distribution: HashMap<usize, usize>,
    first_guess_used: HashMap<Code, usize>,
    total_time: Duration,
) -> TestAllStatistics {
    let solved: Vec<&CodeTestResult> = results.iter().filter(|r| r.success).collect();
    let solved_count = solved.len();

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved_count > 0 {
        total_guesses as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_guesses = solved.iter().map(|r| r.num_guesses).max().unwrap_or(0);
    let min_guesses = solved.iter().map(|r| r.num_guesses).min().unwrap_or(0);

    let best_code = solved
        .iter()
        .min_by_key(|r| r.num_guesses)
        .map(|r| (r.secret.clone(), r.num_guesses));

    // Hardest solved codes: those at the worst observed guess count
    let mut worst_codes: Vec<(Code, usize)> = solved
        .iter()
        .filter(|r| r.num_guesses == max_guesses && max_guesses > 1)
        .map(|r| (r.secret.clone(), r.num_guesses))
        .collect();
    worst_codes.truncate(10);

    let failed_codes: Vec<Code> = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| r.secret.clone())
        .collect();

    TestAllStatistics {
        total_codes: results.len(),
        space_size,
        solved: solved_count,
        failed: failed_codes.len(),
        guess_budget,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        best_code,
        worst_codes,
        failed_codes,
        first_guess_used,
    }
}

/// Print test-all statistics with colored formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    if stats.total_codes == 0 {
        println!("\nNo codes tested.");
        return;
    }

    // Overall performance
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total codes tested:  {} of {}", stats.total_codes, stats.space_size);
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / stats.total_codes as f64 * 100.0).green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!("({:.1}%)", stats.failed as f64 / stats.total_codes as f64 * 100.0).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!("  Total time:          {:.2}s", stats.total_time.as_secs_f64());
    println!(
        "  Time per code:       {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / stats.total_codes as f64
    );

    // Guess distribution
    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    for guesses in 1..=stats.guess_budget {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        if stats.solved > 0 && (count > 0 || guesses <= stats.max_guesses) {
            let percentage = count as f64 / stats.solved as f64 * 100.0;
            let bar_len = if max_count > 0 {
                (count * 40 / max_count).max(usize::from(count > 0))
            } else {
                0
            };
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {guesses:2} guesses: {bar} {count:5} ({percentage:5.1}%)");
        }
    }

    // Information theory metrics
    println!("\n🧮 Information Theory Metrics");
    let total_bits = (stats.space_size as f64).log2();
    let bits_per_guess = if stats.average_guesses > 0.0 {
        total_bits / stats.average_guesses
    } else {
        0.0
    };
    println!("  Total information:   {total_bits:.2} bits");
    println!("  Bits per guess:      {bits_per_guess:.2} bits");

    // Best and worst cases
    if let Some((code, guesses)) = &stats.best_code {
        println!("\n✨ {}", "Best Performance".green().bold());
        println!(
            "  {} solved in {} guess{}",
            code.to_string().bright_green(),
            guesses,
            if *guesses == 1 { "" } else { "es" }
        );
    }

    if !stats.worst_codes.is_empty() {
        println!("\n😰 {}", format!("Hardest Codes ({} guesses)", stats.max_guesses).yellow().bold());
        for (code, _) in stats.worst_codes.iter().take(5) {
            println!("  {}", code.to_string().yellow());
        }
    }

    if !stats.failed_codes.is_empty() {
        println!("\n❌ {}", "Unsolved Codes".red().bold());
        for code in stats.failed_codes.iter().take(10) {
            println!("  {}", code.to_string().red());
        }
    }

    // First guess analysis
    println!("\n🎯 First Guess Usage");
    let mut first_guesses: Vec<(&Code, usize)> = stats.first_guess_used.iter().map(|(k, v)| (k, *v)).collect();
    first_guesses.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.to_string().cmp(&b.0.to_string())));

    for (code, count) in first_guesses.iter().take(5) {
        let percentage = *count as f64 / stats.total_codes as f64 * 100.0;
        println!("  {code}: {count} times ({percentage:.1}%)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Palette, Rules};
    use crate::solver::{FirstCandidateStrategy, RandomStrategy};

    fn small_rules(max_guesses: usize) -> Rules {
        Rules::new(Palette::from_symbols("RBY").unwrap(), 3, max_guesses).unwrap()
    }

    #[test]
    fn every_code_is_solved() {
        let mut solver = Solver::new(small_rules(27), FirstCandidateStrategy);

        let stats = run_test_all(&mut solver, None, None).unwrap();

        assert_eq!(stats.total_codes, 27);
        assert_eq!(stats.space_size, 27);
        assert_eq!(stats.solved, 27);
        assert_eq!(stats.failed, 0);
        assert!(stats.failed_codes.is_empty());
        assert_eq!(stats.guess_distribution.values().sum::<usize>(), 27);

        // The first candidate strategy always opens with the first code
        assert_eq!(stats.first_guess_used.len(), 1);
        assert_eq!(stats.best_code.as_ref().map(|(c, n)| (c.to_string(), *n)), Some(("RRR".to_string(), 1)));
        assert_eq!(stats.min_guesses, 1);
        assert!(stats.average_guesses >= 1.0);
        assert!(stats.average_guesses <= stats.max_guesses as f64);
    }

    #[test]
    fn limit_restricts_codes() {
        let mut solver = Solver::new(small_rules(27), RandomStrategy::seeded(2));

        let stats = run_test_all(&mut solver, Some(5), None).unwrap();

        assert_eq!(stats.total_codes, 5);
        assert_eq!(stats.space_size, 27);
        assert_eq!(stats.solved + stats.failed, 5);
    }

    #[test]
    fn tight_budget_reports_failures() {
        let mut solver = Solver::new(small_rules(1), FirstCandidateStrategy);

        let stats = run_test_all(&mut solver, None, None).unwrap();

        // Only the opening code itself can be broken in one guess
        assert_eq!(stats.solved, 1);
        assert_eq!(stats.failed, 26);
        assert_eq!(stats.failed_codes.len(), 26);
    }

    #[test]
    fn forced_opening_is_counted() {
        let rules = small_rules(27);
        let opening = rules.parse_code("RBY").unwrap();
        let mut solver = Solver::new(rules, FirstCandidateStrategy);

        let stats = run_test_all(&mut solver, None, Some(&opening)).unwrap();

        assert_eq!(stats.first_guess_used.get(&opening), Some(&27));
        assert_eq!(stats.solved, 27);
    }
}
