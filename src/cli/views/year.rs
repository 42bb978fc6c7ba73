use dialoguer::{theme::ColorfulTheme, Select};

use crate::book::{Month, SpendingCategory};
use crate::cli::forms;
use crate::cli::output;
use crate::cli::state::CliState;
use crate::cli::ui::chart::proportion_bars;
use crate::cli::ui::format_amount;
use crate::cli::ui::table::{Table, TableColumn};
use crate::cli::CliResult;
use crate::summary::CategoryBreakdown;

fn render(state: &CliState, year: i32) {
    output::section(format!("Spendings for {}", year));
    let book = state.manager().book();
    if book.spendings.is_empty() {
        output::info("No spendings entered yet.");
        return;
    }

    let view = book.spendings_for(year, state.currency);
    if view.is_empty() {
        output::info(format!(
            "No spendings entered for {} in {}.",
            year, state.currency
        ));
        return;
    }

    let mut table = Table::new(vec![
        TableColumn::right("Idx"),
        TableColumn::left("Month"),
        TableColumn::right("Amount"),
        TableColumn::left("Category"),
        TableColumn::left("Notes"),
    ]);
    for (view_idx, (_, spending)) in view.iter().enumerate() {
        table.push_row(vec![
            view_idx.to_string(),
            spending.month.to_string(),
            format_amount(spending.amount),
            spending.category.to_string(),
            spending.notes.clone(),
        ]);
    }
    println!("{}", table.render());

    // Per-month totals, Savings excluded, matching the monthly breakdown of
    // the entry page.
    let mut totals = Table::new(vec![
        TableColumn::left("Month"),
        TableColumn::right("Records"),
        TableColumn::right("Total"),
    ]);
    for month in Month::ALL {
        let records = view.iter().filter(|(_, s)| s.month == month).count();
        let total: f64 = view
            .iter()
            .filter(|(_, s)| s.month == month && s.category != SpendingCategory::Savings)
            .map(|(_, s)| s.amount)
            .sum();
        totals.push_row(vec![
            month.label().to_string(),
            records.to_string(),
            format_amount(total),
        ]);
    }
    output::section("Monthly Totals");
    println!("{}", totals.render());

    output::section(format!("Spending Proportions for {}", year));
    let breakdown = CategoryBreakdown::from_spendings(view.iter().map(|(_, s)| *s));
    println!("{}", proportion_bars(&breakdown));
}

fn delete_by_index(state: &mut CliState, theme: &ColorfulTheme, year: i32) -> CliResult<()> {
    let view = state.manager().book().spendings_for(year, state.currency);
    if view.is_empty() {
        output::info("Nothing to delete for this year and currency.");
        return Ok(());
    }
    let index = forms::index_input(theme, view.len() - 1)?;
    let Some((store_index, _)) = view.get(index).map(|(i, s)| (*i, *s)) else {
        output::warning("Invalid index selected.");
        return Ok(());
    };
    match state.manager_mut().delete_spending_at(store_index) {
        Ok(removed) => output::success(format!(
            "Deleted {} record of {} for {}.",
            removed.category,
            format_amount(removed.amount),
            removed.month
        )),
        Err(err) => output::error(err),
    }
    Ok(())
}

/// Year page: reconciles auto-savings once on activation, then loops over
/// render + entry/delete actions.
pub fn run(state: &mut CliState, theme: &ColorfulTheme, year: i32) -> CliResult<()> {
    let currency = state.currency;
    match state.manager_mut().reconcile_savings(year, currency) {
        Ok(months) if !months.is_empty() => {
            let labels: Vec<&str> = months.iter().map(|m| m.label()).collect();
            output::success(format!(
                "Added auto-calculated savings for: {}",
                labels.join(", ")
            ));
        }
        Ok(_) => {}
        Err(err) => output::error(err),
    }

    loop {
        render(state, year);
        let actions = ["Add spending", "Delete record by index", "Back"];
        let Some(choice) = Select::with_theme(theme)
            .with_prompt(format!("Actions for {}", year))
            .items(&actions)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };
        match choice {
            0 => {
                if let Some(spending) = forms::spending_form(theme, year, state.currency)? {
                    match state.manager_mut().add_spending(spending) {
                        Ok(()) => output::success("Data saved!"),
                        Err(err) => output::error(err),
                    }
                }
            }
            1 => delete_by_index(state, theme, year)?,
            _ => return Ok(()),
        }
    }
}
