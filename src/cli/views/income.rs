use dialoguer::{theme::ColorfulTheme, Select};

use crate::cli::forms;
use crate::cli::output;
use crate::cli::state::CliState;
use crate::cli::ui::format_amount;
use crate::cli::ui::table::{Table, TableColumn};
use crate::cli::CliResult;
use crate::summary::MonthlyPivot;

use super::pivot_table;

fn render(state: &CliState) {
    output::section("Income");
    let book = state.manager().book();
    if book.income.is_empty() {
        output::info("No income records entered yet.");
        return;
    }

    output::section("Income Records");
    let mut table = Table::new(vec![
        TableColumn::right("Year"),
        TableColumn::left("Month"),
        TableColumn::left("Source"),
        TableColumn::right("Amount"),
        TableColumn::left("Currency"),
    ]);
    for income in &book.income {
        table.push_row(vec![
            income.year.to_string(),
            income.month.to_string(),
            income.source.to_string(),
            format_amount(income.amount),
            income.currency.to_string(),
        ]);
    }
    println!("{}", table.render());

    let filtered = book.income.iter().filter(|i| i.currency == state.currency);
    let pivot = MonthlyPivot::from_records(filtered.map(|i| (i.month, i.year, i.amount)));
    if pivot.is_empty() {
        output::info(format!(
            "No income records for selected currency ({}).",
            state.currency
        ));
    } else {
        output::section("Income Summary");
        println!("{}", pivot_table(&pivot));
    }
}

/// Income page: records, summary pivot, and the income entry form.
pub fn run(state: &mut CliState, theme: &ColorfulTheme) -> CliResult<()> {
    loop {
        render(state);
        let actions = ["Add income", "Back"];
        let Some(choice) = Select::with_theme(theme)
            .with_prompt("Income actions")
            .items(&actions)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };
        match choice {
            0 => {
                if let Some(income) = forms::income_form(theme, state.currency)? {
                    match state.manager_mut().add_income(income) {
                        Ok(()) => output::success("Data saved!"),
                        Err(err) => output::error(err),
                    }
                }
            }
            _ => return Ok(()),
        }
    }
}
