//! Display functions for command results

use super::formatters::{colorize_code, colorize_feedback, entropy_bar, feedback_classes};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a code
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  (strategy: {})",
        colorize_code(&result.secret),
        result.strategy.bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nGuess {}: {} | {}",
            turn,
            colorize_code(&step.guess),
            colorize_feedback(step.feedback)
        );
        println!("  Candidates: {} → {}", step.candidates_before, step.candidates_after);

        if verbose && let Some(entropy) = step.entropy {
            println!("  Entropy:    {entropy:.3} bits");
            if let Some(expected) = step.expected_remaining {
                println!("  Expected:   {expected:.1} candidates");
            }

            // Information actually gained (reduction in uncertainty)
            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!("  Info gained: {:.3} bits ({ratio:.1}x reduction)", ratio.log2());
            }
        }
    }

    println!();
    let count = result.guesses.len();
    let noun = if count == 1 { "guess" } else { "guesses" };
    if result.success() {
        println!("{}", format!("✅ Solved in {count} {noun}!").green().bold());
    } else {
        println!("{}", format!("❌ Failed to solve in {count} {noun}").red().bold());
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        colorize_code(&result.guess)
    );
    println!("{}", "═".repeat(60).cyan());

    let max_entropy = (feedback_classes(result.code_length) as f64).log2();
    let bar = entropy_bar(result.entropy, max_entropy, 30);

    println!("\n📊 Against {} possible codes:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Info gain:   {:.1}x reduction", result.expected_reduction);
    println!("   Expected:    {:.1} candidates remain", result.expected_remaining);
    println!("   Worst case:  {} candidates remain", result.worst_case);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses).bright_yellow().bold()
    );
    println!("   Best case:        {}", result.min_guesses.to_string().green());
    println!("   Worst case:       {}", result.max_guesses.to_string().yellow());
    if result.failed > 0 {
        println!(
            "   Not broken:       {}",
            format!("{} (budget {})", result.failed, result.guess_budget).red()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    if result.total_codes == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=result.guess_budget {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_codes as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
