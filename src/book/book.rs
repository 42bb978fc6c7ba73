use chrono::Datelike;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::errors::BookError;

use super::custom_page::{page_slug, PageEntry};
use super::income::Income;
use super::month::Month;
use super::spending::{Currency, Spending, SpendingCategory};

/// Earliest year the tracker accepts.
pub const MIN_YEAR: i32 = 2022;

/// Note attached to synthesized auto-savings records.
pub const AUTO_SAVINGS_NOTE: &str = "auto calculated";

/// Years selectable on entry forms: 2022 through the current calendar year.
pub fn year_range() -> RangeInclusive<i32> {
    MIN_YEAR..=chrono::Local::now().year()
}

/// In-memory application state: every record collection plus the custom page
/// registry. Collections keep insertion order; record identity is positional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Book {
    pub spendings: Vec<Spending>,
    pub income: Vec<Income>,
    pub custom_pages: Vec<String>,
    pub page_entries: BTreeMap<String, Vec<PageEntry>>,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_amount(amount: f64) -> Result<(), BookError> {
        if amount <= 0.0 {
            return Err(BookError::validation("amount must be greater than zero"));
        }
        Ok(())
    }

    fn check_year(year: i32) -> Result<(), BookError> {
        if !year_range().contains(&year) {
            return Err(BookError::validation(format!(
                "year {} is outside {}..={}",
                year,
                MIN_YEAR,
                *year_range().end()
            )));
        }
        Ok(())
    }

    /// Appends a spending record. Rejects non-positive amounts and years
    /// outside the accepted range; the collection is unchanged on error.
    pub fn add_spending(&mut self, spending: Spending) -> Result<(), BookError> {
        Self::check_amount(spending.amount)?;
        Self::check_year(spending.year)?;
        self.spendings.push(spending);
        Ok(())
    }

    pub fn add_income(&mut self, income: Income) -> Result<(), BookError> {
        Self::check_amount(income.amount)?;
        Self::check_year(income.year)?;
        self.income.push(income);
        Ok(())
    }

    /// Removes exactly one spending record by its position in the store.
    pub fn delete_spending_at(&mut self, index: usize) -> Result<Spending, BookError> {
        let len = self.spendings.len();
        if index >= len {
            return Err(BookError::IndexOutOfRange { index, len });
        }
        Ok(self.spendings.remove(index))
    }

    /// Spending records for one year and currency, paired with their store
    /// positions so a filtered view can delete through its own indices.
    pub fn spendings_for(&self, year: i32, currency: Currency) -> Vec<(usize, &Spending)> {
        self.spendings
            .iter()
            .enumerate()
            .filter(|(_, s)| s.year == year && s.currency == currency)
            .collect()
    }

    /// Total spending for one (year, month, currency), excluding synthesized
    /// Savings records.
    pub fn spending_total(&self, year: i32, month: Month, currency: Currency) -> f64 {
        self.spendings
            .iter()
            .filter(|s| {
                s.year == year
                    && s.month == month
                    && s.currency == currency
                    && s.category != SpendingCategory::Savings
            })
            .map(|s| s.amount)
            .sum()
    }

    pub fn income_total(&self, year: i32, month: Month, currency: Currency) -> f64 {
        self.income
            .iter()
            .filter(|i| i.year == year && i.month == month && i.currency == currency)
            .map(|i| i.amount)
            .sum()
    }

    /// Whether an auto-savings record already exists for the given key.
    pub fn has_savings_record(&self, year: i32, month: Month, currency: Currency) -> bool {
        self.spendings.iter().any(|s| {
            s.year == year
                && s.month == month
                && s.currency == currency
                && s.category == SpendingCategory::Savings
        })
    }

    /// Registers a custom page with an empty entry collection.
    pub fn add_page(&mut self, name: &str) -> Result<(), BookError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BookError::validation("page name cannot be empty"));
        }
        let slug = page_slug(name);
        if self.custom_pages.iter().any(|p| p == name || page_slug(p) == slug) {
            return Err(BookError::DuplicatePage(name.to_string()));
        }
        self.custom_pages.push(name.to_string());
        self.page_entries.insert(name.to_string(), Vec::new());
        Ok(())
    }

    /// Drops a page registration together with its still-unappended raw
    /// entries. Spending records already appended from the page are kept.
    pub fn remove_page(&mut self, name: &str) -> Result<(), BookError> {
        let position = self
            .custom_pages
            .iter()
            .position(|p| p == name)
            .ok_or_else(|| BookError::UnknownPage(name.to_string()))?;
        self.custom_pages.remove(position);
        self.page_entries.remove(name);
        Ok(())
    }

    pub fn add_page_entry(&mut self, page: &str, entry: PageEntry) -> Result<(), BookError> {
        if !self.custom_pages.iter().any(|p| p == page) {
            return Err(BookError::UnknownPage(page.to_string()));
        }
        Self::check_amount(entry.amount)?;
        self.page_entries.entry(page.to_string()).or_default().push(entry);
        Ok(())
    }

    pub fn entries_for(&self, page: &str) -> &[PageEntry] {
        self.page_entries.get(page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sum of all entries currently on a custom page.
    pub fn page_total(&self, page: &str) -> f64 {
        self.entries_for(page).iter().map(|e| e.amount).sum()
    }

    /// Synthesizes one spending record from a custom page's current total and
    /// appends it to the main store. The source entries are left in place, so
    /// repeating the append duplicates the total.
    pub fn append_page_total(
        &mut self,
        page: &str,
        year: i32,
        month: Month,
        category: SpendingCategory,
        currency: Currency,
    ) -> Result<Spending, BookError> {
        if !self.custom_pages.iter().any(|p| p == page) {
            return Err(BookError::UnknownPage(page.to_string()));
        }
        if self.entries_for(page).is_empty() {
            return Err(BookError::validation(format!(
                "page `{}` has no entries to append",
                page
            )));
        }
        let spending = Spending::new(
            self.page_total(page),
            category,
            year,
            month,
            currency,
            format!("appended from {}", page),
        );
        self.add_spending(spending.clone())?;
        Ok(spending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spending(amount: f64, month: Month) -> Spending {
        Spending::new(
            amount,
            SpendingCategory::Groceries,
            2024,
            month,
            Currency::Eur,
            "",
        )
    }

    #[test]
    fn add_spending_appends_exactly_one_record() {
        let mut book = Book::new();
        book.add_spending(spending(12.5, Month::March)).unwrap();
        assert_eq!(book.spendings.len(), 1);
        assert_eq!(book.spendings[0].amount, 12.5);
        assert_eq!(book.spendings[0].month, Month::March);
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let mut book = Book::new();
        let err = book.add_spending(spending(0.0, Month::March)).unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));
        assert!(book.spendings.is_empty());

        let err = book.add_spending(spending(-3.0, Month::March)).unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));
        assert!(book.spendings.is_empty());
    }

    #[test]
    fn out_of_range_years_are_rejected() {
        let mut book = Book::new();
        let mut record = spending(10.0, Month::March);
        record.year = 2021;
        assert!(book.add_spending(record).is_err());
        assert!(book.spendings.is_empty());
    }

    #[test]
    fn delete_by_index_removes_one_and_keeps_order() {
        let mut book = Book::new();
        book.add_spending(spending(1.0, Month::January)).unwrap();
        book.add_spending(spending(2.0, Month::February)).unwrap();
        book.add_spending(spending(3.0, Month::March)).unwrap();

        let removed = book.delete_spending_at(1).unwrap();
        assert_eq!(removed.amount, 2.0);
        let amounts: Vec<f64> = book.spendings.iter().map(|s| s.amount).collect();
        assert_eq!(amounts, vec![1.0, 3.0]);
    }

    #[test]
    fn delete_past_end_reports_index_out_of_range() {
        let mut book = Book::new();
        book.add_spending(spending(1.0, Month::January)).unwrap();
        let err = book.delete_spending_at(5).unwrap_err();
        assert!(matches!(err, BookError::IndexOutOfRange { index: 5, len: 1 }));
        assert_eq!(book.spendings.len(), 1);
    }

    #[test]
    fn filtered_view_carries_store_positions() {
        let mut book = Book::new();
        book.add_spending(spending(1.0, Month::January)).unwrap();
        let mut other = spending(2.0, Month::January);
        other.currency = Currency::Huf;
        book.add_spending(other).unwrap();
        book.add_spending(spending(3.0, Month::February)).unwrap();

        let view = book.spendings_for(2024, Currency::Eur);
        let positions: Vec<usize> = view.iter().map(|(i, _)| *i).collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn duplicate_page_names_are_rejected() {
        let mut book = Book::new();
        book.add_page("Travel").unwrap();
        let err = book.add_page("Travel").unwrap_err();
        assert!(matches!(err, BookError::DuplicatePage(_)));
        assert_eq!(book.custom_pages.len(), 1);
    }

    #[test]
    fn colliding_page_slugs_are_rejected() {
        let mut book = Book::new();
        book.add_page("Road Trip").unwrap();
        let err = book.add_page("road trip").unwrap_err();
        assert!(matches!(err, BookError::DuplicatePage(_)));
    }

    #[test]
    fn removing_a_page_discards_its_raw_entries() {
        let mut book = Book::new();
        book.add_page("Travel").unwrap();
        book.add_page_entry("Travel", PageEntry::new(Currency::Eur, 40.0, ""))
            .unwrap();
        book.remove_page("Travel").unwrap();
        assert!(book.custom_pages.is_empty());
        assert!(book.page_entries.get("Travel").is_none());
    }

    #[test]
    fn removing_a_page_keeps_previously_appended_spendings() {
        let mut book = Book::new();
        book.add_page("Travel").unwrap();
        book.add_page_entry("Travel", PageEntry::new(Currency::Eur, 40.0, ""))
            .unwrap();
        book.append_page_total(
            "Travel",
            2024,
            Month::May,
            SpendingCategory::Other,
            Currency::Eur,
        )
        .unwrap();
        book.remove_page("Travel").unwrap();
        assert_eq!(book.spendings.len(), 1);
        assert_eq!(book.spendings[0].amount, 40.0);
    }

    #[test]
    fn append_page_total_sums_all_entries() {
        let mut book = Book::new();
        book.add_page("Travel").unwrap();
        book.add_page_entry("Travel", PageEntry::new(Currency::Eur, 40.0, "hotel"))
            .unwrap();
        book.add_page_entry("Travel", PageEntry::new(Currency::Eur, 10.5, "bus"))
            .unwrap();

        let appended = book
            .append_page_total(
                "Travel",
                2024,
                Month::May,
                SpendingCategory::Leisure,
                Currency::Eur,
            )
            .unwrap();
        assert_eq!(appended.amount, 50.5);
        assert_eq!(book.spendings.len(), 1);
        // Entries stay in place, so a second submit duplicates the total.
        book.append_page_total(
            "Travel",
            2024,
            Month::May,
            SpendingCategory::Leisure,
            Currency::Eur,
        )
        .unwrap();
        assert_eq!(book.spendings.len(), 2);
    }

    #[test]
    fn appending_an_empty_page_is_rejected() {
        let mut book = Book::new();
        book.add_page("Travel").unwrap();
        let err = book
            .append_page_total(
                "Travel",
                2024,
                Month::May,
                SpendingCategory::Other,
                Currency::Eur,
            )
            .unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));
        assert!(book.spendings.is_empty());
    }
}
