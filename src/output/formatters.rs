//! Formatting utilities for terminal output

use crate::core::WordNode;

/// Format remaining seconds as `m:ss`
#[must_use]
pub fn format_timer(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Timer bar, full at the configured duration
#[must_use]
pub fn timer_bar(remaining: u32, duration: u32, width: usize) -> String {
    create_progress_bar(f64::from(remaining), f64::from(duration), width)
}

/// Grid letters as rows of `side` upper-case letters
///
/// Selected cells are wrapped in brackets.
#[must_use]
pub fn grid_rows(grid: &[char], side: usize, selected: &[usize]) -> Vec<String> {
    if side == 0 {
        return Vec::new();
    }
    grid.chunks(side)
        .enumerate()
        .map(|(row, letters)| {
            letters
                .iter()
                .enumerate()
                .map(|(col, c)| {
                    let letter = c.to_ascii_uppercase();
                    if selected.contains(&(row * side + col)) {
                        format!("[{letter}]")
                    } else {
                        format!(" {letter} ")
                    }
                })
                .collect()
        })
        .collect()
}

/// The chain as `water → wet → rain`
#[must_use]
pub fn chain_line(chain: &[WordNode]) -> String {
    chain
        .iter()
        .map(|node| node.word.as_str())
        .collect::<Vec<_>>()
        .join(" → ")
}
