//! Formatting utilities for terminal output

use crate::trainer::WeightChange;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a weight in (0, 1) as a bar
#[must_use]
pub fn weight_bar(weight: f64, width: usize) -> String {
    create_progress_bar(weight, 1.0, width)
}

/// Format a weight movement for display, e.g. `0.50 -> 0.60`
#[must_use]
pub fn format_weight_change(change: WeightChange) -> String {
    format!("{:.2} -> {:.2}", change.old, change.new)
}

/// Reaction emoji for a guess verdict
#[must_use]
pub const fn verdict_emoji(correct: bool) -> &'static str {
    if correct { "🟩" } else { "🟥" }
}
