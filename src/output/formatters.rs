//! Formatting utilities for terminal output

use crate::core::{BOARDS, Feedback, Mark, WORD_LEN};
use colored::{ColoredString, Colorize};

/// Render one letter as a coloured tile
#[must_use]
pub fn tile(letter: u8, mark: Mark) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match mark {
        Mark::Green => text.black().on_green().bold(),
        Mark::Yellow => text.black().on_yellow().bold(),
        Mark::Grey => text.white().on_bright_black(),
    }
}

/// Render a feedback entry as a row of coloured tiles
#[must_use]
pub fn feedback_tiles(feedback: &Feedback) -> String {
    feedback
        .iter()
        .map(|(letter, mark)| tile(letter, mark).to_string())
        .collect()
}

/// Placeholder row for a board that no longer takes guesses
#[must_use]
pub fn blank_row() -> String {
    " · ".repeat(WORD_LEN)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { (value * width / max).min(width) };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Domain sizes as `[a, b, c, d]` with solved boards marked
#[must_use]
pub fn domain_summary(sizes: &[usize; BOARDS]) -> String {
    let parts: Vec<String> = sizes
        .iter()
        .map(|&n| if n == 1 { "1✓".to_string() } else { n.to_string() })
        .collect();
    format!("[{}]", parts.join(", "))
}
