use crate::cli::output;
use crate::cli::state::CliState;
use crate::cli::ui::chart::proportion_bars;
use crate::summary::{CategoryBreakdown, MonthlyPivot};

use super::pivot_table;

/// All-years spending summary for the active display currency.
pub fn render(state: &CliState) {
    output::section("Spendings Summary");
    let book = state.manager().book();
    if book.spendings.is_empty() {
        output::info("No spendings entered yet.");
        return;
    }

    let filtered: Vec<_> = book
        .spendings
        .iter()
        .filter(|s| s.currency == state.currency)
        .collect();
    if filtered.is_empty() {
        output::info(format!(
            "No spendings entered for selected currency ({}).",
            state.currency
        ));
        return;
    }

    let pivot = MonthlyPivot::from_records(
        filtered.iter().map(|s| (s.month, s.year, s.amount)),
    );
    println!("{}", pivot_table(&pivot));

    output::section("Spending Proportions");
    let breakdown = CategoryBreakdown::from_spendings(filtered.iter().copied());
    println!("{}", proportion_bars(&breakdown));
}
