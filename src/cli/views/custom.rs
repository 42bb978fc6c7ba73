use dialoguer::{theme::ColorfulTheme, Select};

use crate::cli::forms;
use crate::cli::output;
use crate::cli::state::CliState;
use crate::cli::ui::format_amount;
use crate::cli::ui::table::{Table, TableColumn};
use crate::cli::CliResult;

fn render(state: &CliState, name: &str) {
    output::section(name);
    let book = state.manager().book();
    let entries = book.entries_for(name);
    if entries.is_empty() {
        output::info("No spendings entered for this page yet.");
        return;
    }

    let mut table = Table::new(vec![
        TableColumn::left("Currency"),
        TableColumn::right("Amount"),
        TableColumn::left("Notes"),
    ]);
    for entry in entries {
        table.push_row(vec![
            entry.currency.to_string(),
            format_amount(entry.amount),
            entry.notes.clone(),
        ]);
    }
    println!("{}", table.render());
    output::info(format!(
        "Total spendings: {}",
        format_amount(book.page_total(name))
    ));
}

/// Custom page: raw entry form plus the append-to-year flow.
pub fn run(state: &mut CliState, theme: &ColorfulTheme, name: &str) -> CliResult<()> {
    loop {
        render(state, name);
        let actions = [
            "Add spending",
            "Append total to a month and year",
            "Back",
        ];
        let Some(choice) = Select::with_theme(theme)
            .with_prompt(format!("Actions for {}", name))
            .items(&actions)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };
        match choice {
            0 => {
                if let Some(entry) = forms::page_entry_form(theme, state.currency)? {
                    match state.manager_mut().add_page_entry(name, entry) {
                        Ok(()) => output::success("Data saved!"),
                        Err(err) => output::error(err),
                    }
                }
            }
            1 => {
                if state.manager().book().entries_for(name).is_empty() {
                    output::warning("This page has no entries to append.");
                    continue;
                }
                let Some((year, month, category, currency)) =
                    forms::append_target_form(theme, state.currency)?
                else {
                    continue;
                };
                match state
                    .manager_mut()
                    .append_page_total(name, year, month, category, currency)
                {
                    Ok(appended) => output::success(format!(
                        "Data appended to {} {}: {} {}",
                        month,
                        year,
                        format_amount(appended.amount),
                        currency
                    )),
                    Err(err) => output::error(err),
                }
            }
            _ => return Ok(()),
        }
    }
}
