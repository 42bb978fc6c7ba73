//! Top-level page selector loop, the CLI stand-in for the sidebar.

use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use super::forms;
use super::output;
use super::pages::{all_pages, Page};
use super::state::CliState;
use super::views;
use super::CliResult;

fn add_custom_page(state: &mut CliState, theme: &ColorfulTheme) -> CliResult<()> {
    let name = forms::page_name_form(theme)?;
    match state.manager_mut().add_page(&name) {
        Ok(()) => output::success(format!("Page successfully added: {}", name.trim())),
        Err(err) => output::error(err),
    }
    Ok(())
}

fn remove_custom_page(state: &mut CliState, theme: &ColorfulTheme) -> CliResult<()> {
    let pages = state.manager().book().custom_pages.clone();
    if pages.is_empty() {
        output::info("No custom pages available to delete.");
        return Ok(());
    }
    let Some(choice) = Select::with_theme(theme)
        .with_prompt("Select custom page to remove")
        .items(&pages)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };
    let name = &pages[choice];
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!(
            "Remove `{}` and its unappended entries? Spendings already appended are kept.",
            name
        ))
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }
    match state.manager_mut().remove_page(name) {
        Ok(()) => output::success(format!("Removed custom page: {}", name)),
        Err(err) => output::error(err),
    }
    Ok(())
}

/// Runs the page-selection loop until the user quits. Rendering a page
/// recomputes its aggregation from the current book; activating a year page
/// additionally reconciles auto-savings.
pub fn run(state: &mut CliState) -> CliResult<()> {
    let theme = ColorfulTheme::default();
    loop {
        let pages = all_pages(state.manager().book());
        let mut labels: Vec<String> = pages.iter().map(Page::label).collect();
        labels.push("Add custom page".into());
        labels.push("Remove custom page".into());
        labels.push(format!("Display currency: {}", state.currency));
        labels.push("Quit".into());

        let Some(choice) = Select::with_theme(&theme)
            .with_prompt("Select page")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };

        if let Some(page) = pages.get(choice) {
            match page.clone() {
                Page::Summary => views::summary::render(state),
                Page::Income => views::income::run(state, &theme)?,
                Page::Year(year) => views::year::run(state, &theme, year)?,
                Page::Custom(name) => views::custom::run(state, &theme, &name)?,
            }
            continue;
        }

        match choice - pages.len() {
            0 => add_custom_page(state, &theme)?,
            1 => remove_custom_page(state, &theme)?,
            2 => {
                if let Some(currency) = forms::select_currency(&theme, state.currency)? {
                    state.currency = currency;
                }
            }
            _ => return Ok(()),
        }
    }
}
