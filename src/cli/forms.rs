//! Entry forms for every page, built on dialoguer prompts.
//!
//! Each form returns `Ok(None)` when the user cancels a selection or the
//! submitted amount fails validation; the caller treats both as "no record
//! created".

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::book::{
    year_range, Currency, Income, IncomeSource, Month, PageEntry, Spending, SpendingCategory,
};

use super::{output, CliResult};

pub fn select_month(theme: &ColorfulTheme) -> CliResult<Option<Month>> {
    let labels: Vec<&str> = Month::ALL.iter().map(|m| m.label()).collect();
    let chosen = Select::with_theme(theme)
        .with_prompt("Month")
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(chosen.map(|idx| Month::ALL[idx]))
}

pub fn select_year(theme: &ColorfulTheme) -> CliResult<Option<i32>> {
    let years: Vec<i32> = year_range().collect();
    let labels: Vec<String> = years.iter().map(|y| y.to_string()).collect();
    let chosen = Select::with_theme(theme)
        .with_prompt("Year")
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(chosen.map(|idx| years[idx]))
}

pub fn select_currency(theme: &ColorfulTheme, default: Currency) -> CliResult<Option<Currency>> {
    let labels: Vec<&str> = Currency::ALL.iter().map(|c| c.code()).collect();
    let default_index = Currency::ALL
        .iter()
        .position(|c| *c == default)
        .unwrap_or(0);
    let chosen = Select::with_theme(theme)
        .with_prompt("Currency")
        .items(&labels)
        .default(default_index)
        .interact_opt()?;
    Ok(chosen.map(|idx| Currency::ALL[idx]))
}

pub fn select_category(theme: &ColorfulTheme) -> CliResult<Option<SpendingCategory>> {
    let labels: Vec<&str> = SpendingCategory::ENTRY.iter().map(|c| c.label()).collect();
    let chosen = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(chosen.map(|idx| SpendingCategory::ENTRY[idx]))
}

pub fn select_source(theme: &ColorfulTheme) -> CliResult<Option<IncomeSource>> {
    let labels: Vec<&str> = IncomeSource::ALL.iter().map(|s| s.label()).collect();
    let chosen = Select::with_theme(theme)
        .with_prompt("Income source")
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(chosen.map(|idx| IncomeSource::ALL[idx]))
}

/// Prompts for an amount and applies the entry invariant: submissions with a
/// non-positive amount are rejected with an inline message.
fn amount_input(theme: &ColorfulTheme, prompt: &str) -> CliResult<Option<f64>> {
    let amount: f64 = Input::with_theme(theme).with_prompt(prompt).interact_text()?;
    if amount <= 0.0 {
        output::warning("amount must be greater than zero, nothing was saved");
        return Ok(None);
    }
    Ok(Some(amount))
}

fn notes_input(theme: &ColorfulTheme) -> CliResult<String> {
    let notes: String = Input::with_theme(theme)
        .with_prompt("Notes for this spending")
        .allow_empty(true)
        .interact_text()?;
    Ok(notes)
}

/// Spending entry form for a year page.
pub fn spending_form(
    theme: &ColorfulTheme,
    year: i32,
    default_currency: Currency,
) -> CliResult<Option<Spending>> {
    let Some(month) = select_month(theme)? else {
        return Ok(None);
    };
    let Some(currency) = select_currency(theme, default_currency)? else {
        return Ok(None);
    };
    let Some(amount) = amount_input(theme, "Amount spent")? else {
        return Ok(None);
    };
    let Some(category) = select_category(theme)? else {
        return Ok(None);
    };
    let notes = notes_input(theme)?;
    Ok(Some(Spending::new(
        amount, category, year, month, currency, notes,
    )))
}

/// Income entry form.
pub fn income_form(
    theme: &ColorfulTheme,
    default_currency: Currency,
) -> CliResult<Option<Income>> {
    let Some(year) = select_year(theme)? else {
        return Ok(None);
    };
    let Some(month) = select_month(theme)? else {
        return Ok(None);
    };
    let Some(source) = select_source(theme)? else {
        return Ok(None);
    };
    let Some(amount) = amount_input(theme, "Earned amount")? else {
        return Ok(None);
    };
    let Some(currency) = select_currency(theme, default_currency)? else {
        return Ok(None);
    };
    Ok(Some(Income::new(amount, source, year, month, currency)))
}

/// Raw entry form on a custom page.
pub fn page_entry_form(
    theme: &ColorfulTheme,
    default_currency: Currency,
) -> CliResult<Option<PageEntry>> {
    let Some(currency) = select_currency(theme, default_currency)? else {
        return Ok(None);
    };
    let Some(amount) = amount_input(theme, "Amount spent")? else {
        return Ok(None);
    };
    let notes = notes_input(theme)?;
    Ok(Some(PageEntry::new(currency, amount, notes)))
}

/// Target for appending a custom page's total into the main store.
pub fn append_target_form(
    theme: &ColorfulTheme,
    default_currency: Currency,
) -> CliResult<Option<(i32, Month, SpendingCategory, Currency)>> {
    let Some(month) = select_month(theme)? else {
        return Ok(None);
    };
    let Some(year) = select_year(theme)? else {
        return Ok(None);
    };
    let Some(category) = select_category(theme)? else {
        return Ok(None);
    };
    let Some(currency) = select_currency(theme, default_currency)? else {
        return Ok(None);
    };
    Ok(Some((year, month, category, currency)))
}

pub fn page_name_form(theme: &ColorfulTheme) -> CliResult<String> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Custom page name")
        .allow_empty(true)
        .interact_text()?;
    Ok(name)
}

pub fn index_input(theme: &ColorfulTheme, max: usize) -> CliResult<usize> {
    let index: usize = Input::with_theme(theme)
        .with_prompt(format!("Enter the index number to delete (0..={})", max))
        .interact_text()?;
    Ok(index)
}
