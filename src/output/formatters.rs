//! Formatting utilities for terminal output

use crate::core::{Code, Color, Feedback};
use colored::{ColoredString, Colorize};

/// Paint one peg in its own color
///
/// Symbols without a terminal color are shown bold.
#[must_use]
pub fn colorize_peg(color: Color) -> ColoredString {
    let symbol = color.symbol().to_string();
    match color.symbol() {
        'R' => symbol.red().bold(),
        'B' => symbol.blue().bold(),
        'Y' => symbol.yellow().bold(),
        'G' => symbol.green().bold(),
        'P' => symbol.magenta().bold(),
        'W' => symbol.white().bold(),
        'O' => symbol.truecolor(255, 165, 0).bold(),
        'C' => symbol.cyan().bold(),
        'K' => symbol.bright_black().bold(),
        'N' => symbol.truecolor(139, 69, 19).bold(),
        _ => symbol.bold(),
    }
}

/// Format a code with each peg in its own color
#[must_use]
pub fn colorize_code(code: &Code) -> String {
    code.colors().iter().map(|&c| colorize_peg(c).to_string()).collect()
}

/// Format feedback as black/white pegs, or a dim `-` when nothing matched
#[must_use]
pub fn colorize_feedback(feedback: Feedback) -> String {
    if feedback.total() == 0 {
        return "-".bright_black().to_string();
    }
    format!(
        "{}{}",
        "B".repeat(feedback.exact()).bright_white().on_black().bold(),
        "W".repeat(feedback.color_only()).black().on_white()
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar scaled to the largest possible entropy
///
/// `max_entropy` is `log2` of the number of distinct feedbacks.
#[must_use]
pub fn entropy_bar(entropy: f64, max_entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, max_entropy, width)
}

/// Number of distinct feedbacks possible for codes of `length` pegs
///
/// Every `(exact, color_only)` with `exact + color_only <= length`, minus
/// the impossible `(length - 1, 1)`.
#[must_use]
pub const fn feedback_classes(length: usize) -> usize {
    let all = (length + 1) * (length + 2) / 2;
    if length >= 1 { all - 1 } else { all }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;

    #[test]
    fn colorized_code_keeps_symbols_in_order() {
        let code = Rules::standard().parse_code("RGYB").unwrap();
        let text = colorize_code(&code);

        let positions: Vec<usize> = ['R', 'G', 'Y', 'B']
            .iter()
            .map(|&c| text.find(c).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn colorized_feedback_counts_pegs() {
        let text = colorize_feedback(Feedback::new(2, 1));
        assert_eq!(text.matches('B').count(), 2);
        assert_eq!(text.matches('W').count(), 1);

        assert!(colorize_feedback(Feedback::new(0, 0)).contains('-'));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(1.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn feedback_class_counts() {
        // Classic four-peg game has 14 possible answers
        assert_eq!(feedback_classes(4), 14);
        assert_eq!(feedback_classes(1), 2);
        assert_eq!(feedback_classes(0), 1);
    }
}
