use colored::Colorize;

use crate::summary::CategoryBreakdown;

use super::table::format_amount;

const BAR_WIDTH: usize = 40;

/// Renders the category breakdown as labelled percentage bars, the text
/// stand-in for the proportion pie chart.
pub fn proportion_bars(breakdown: &CategoryBreakdown) -> String {
    let label_width = breakdown
        .entries()
        .map(|(category, _)| category.label().chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for (idx, (category, amount)) in breakdown.entries().enumerate() {
        let share = breakdown.share(amount);
        let filled = ((share * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        // Pad before coloring so ANSI escapes do not skew the alignment.
        let bar = format!("{:<width$}", "█".repeat(filled), width = BAR_WIDTH);
        let bar = match idx % 4 {
            0 => bar.bright_blue(),
            1 => bar.bright_green(),
            2 => bar.bright_yellow(),
            _ => bar.bright_magenta(),
        };
        lines.push(format!(
            "{:<width$}  {}  {:>5.1}%  {}",
            category.label(),
            bar,
            share * 100.0,
            format_amount(amount),
            width = label_width,
        ));
    }
    lines.join("\n")
}
