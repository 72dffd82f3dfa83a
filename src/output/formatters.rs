//! Formatting utilities for terminal output

use crate::core::{Rarity, Word};
use colored::{ColoredString, Colorize};

/// Rarity label colored by tier
#[must_use]
pub fn rarity_badge(rarity: Rarity) -> ColoredString {
    let label = rarity.label();
    match rarity {
        Rarity::UltraRare => label.bright_magenta().bold(),
        Rarity::Rare => label.bright_blue(),
        Rarity::Uncommon => label.green(),
        Rarity::Common => label.yellow(),
        Rarity::VeryCommon => label.bright_black(),
    }
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

/// Comma-separated word list, truncated with a count of the rest
#[must_use]
pub fn word_preview(words: &[Word], limit: usize) -> String {
    let shown: Vec<&str> = words.iter().take(limit).map(Word::text).collect();
    let rest = words.len().saturating_sub(limit);
    if rest == 0 {
        shown.join(", ")
    } else {
        format!("{}, … +{rest}", shown.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

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
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn word_preview_truncates() {
        let words = words_from_slice(&["walking", "talking", "running"]);
        assert_eq!(word_preview(&words, 5), "walking, talking, running");
        assert_eq!(word_preview(&words, 2), "walking, talking, … +1");
    }

    #[test]
    fn rarity_badge_keeps_label_text() {
        colored::control::set_override(false);
        assert_eq!(rarity_badge(Rarity::Rare).to_string(), "rare");
    }
}
