use tracing::{debug, info};

use crate::{
    book::{Book, Currency, Income, Month, PageEntry, Spending, SpendingCategory},
    errors::BookError,
    storage::StorageBackend,
    summary::savings,
};

/// Facade that coordinates the in-memory book with its persistence backend.
///
/// Every successful mutation is followed by an immediate full persist of all
/// collections. When the persist fails the error propagates and the mutated
/// in-memory state is kept; the caller decides how to surface it.
pub struct BookManager {
    current: Book,
    storage: Box<dyn StorageBackend>,
}

impl BookManager {
    /// Loads the book from storage. Per-file recovery warnings are returned
    /// for the caller to surface once at startup.
    pub fn load(storage: Box<dyn StorageBackend>) -> Result<(Self, Vec<String>), BookError> {
        let report = storage.load()?;
        Ok((
            Self {
                current: report.book,
                storage,
            },
            report.warnings,
        ))
    }

    pub fn book(&self) -> &Book {
        &self.current
    }

    fn persist(&self) -> Result<(), BookError> {
        self.storage.save(&self.current)?;
        debug!("book persisted");
        Ok(())
    }

    pub fn add_spending(&mut self, spending: Spending) -> Result<(), BookError> {
        self.current.add_spending(spending)?;
        self.persist()
    }

    pub fn add_income(&mut self, income: Income) -> Result<(), BookError> {
        self.current.add_income(income)?;
        self.persist()
    }

    pub fn delete_spending_at(&mut self, index: usize) -> Result<Spending, BookError> {
        let removed = self.current.delete_spending_at(index)?;
        self.persist()?;
        Ok(removed)
    }

    pub fn add_page(&mut self, name: &str) -> Result<(), BookError> {
        self.current.add_page(name)?;
        self.persist()
    }

    pub fn remove_page(&mut self, name: &str) -> Result<(), BookError> {
        self.current.remove_page(name)?;
        self.persist()
    }

    pub fn add_page_entry(&mut self, page: &str, entry: PageEntry) -> Result<(), BookError> {
        self.current.add_page_entry(page, entry)?;
        self.persist()
    }

    pub fn append_page_total(
        &mut self,
        page: &str,
        year: i32,
        month: Month,
        category: SpendingCategory,
        currency: Currency,
    ) -> Result<Spending, BookError> {
        let appended = self
            .current
            .append_page_total(page, year, month, category, currency)?;
        self.persist()?;
        Ok(appended)
    }

    /// Runs the auto-savings reconciliation for one (year, currency) pair:
    /// plans the missing records, appends them, and persists once. Returns
    /// the months that gained a record. Invoked on Year-page activation.
    pub fn reconcile_savings(
        &mut self,
        year: i32,
        currency: Currency,
    ) -> Result<Vec<Month>, BookError> {
        let planned = savings::plan(&self.current, year, currency);
        if planned.is_empty() {
            return Ok(Vec::new());
        }
        let months: Vec<Month> = planned.iter().map(|record| record.month).collect();
        for record in planned {
            self.current.add_spending(record)?;
        }
        self.persist()?;
        info!(year, %currency, months = months.len(), "appended auto-savings records");
        Ok(months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{IncomeSource, Month};
    use crate::storage::CsvStorage;
    use tempfile::TempDir;

    fn manager() -> (BookManager, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let storage = CsvStorage::new(temp.path().join("data")).expect("csv storage");
        let (manager, warnings) = BookManager::load(Box::new(storage)).expect("load book");
        assert!(warnings.is_empty());
        (manager, temp)
    }

    fn reload(temp: &TempDir) -> BookManager {
        let storage = CsvStorage::new(temp.path().join("data")).expect("csv storage");
        BookManager::load(Box::new(storage)).expect("load book").0
    }

    #[test]
    fn mutations_persist_immediately() {
        let (mut manager, temp) = manager();
        manager
            .add_spending(Spending::new(
                9.99,
                SpendingCategory::Bills,
                2024,
                Month::July,
                Currency::Eur,
                "electricity",
            ))
            .unwrap();

        let reloaded = reload(&temp);
        assert_eq!(reloaded.book().spendings.len(), 1);
        assert_eq!(reloaded.book().spendings[0].notes, "electricity");
    }

    #[test]
    fn reconcile_appends_once_and_persists() {
        let (mut manager, temp) = manager();
        manager
            .add_income(Income::new(
                1000.0,
                IncomeSource::Work,
                2024,
                Month::March,
                Currency::Eur,
            ))
            .unwrap();
        manager
            .add_spending(Spending::new(
                600.0,
                SpendingCategory::Groceries,
                2024,
                Month::March,
                Currency::Eur,
                "",
            ))
            .unwrap();

        let appended = manager.reconcile_savings(2024, Currency::Eur).unwrap();
        assert_eq!(appended, vec![Month::March]);
        assert_eq!(manager.book().spendings.len(), 2);

        let again = manager.reconcile_savings(2024, Currency::Eur).unwrap();
        assert!(again.is_empty());

        let reloaded = reload(&temp);
        assert_eq!(reloaded.book().spendings.len(), 2);
        assert_eq!(reloaded.book().spendings[1].amount, 400.0);
    }

    #[test]
    fn delete_through_manager_persists_the_removal() {
        let (mut manager, temp) = manager();
        for amount in [1.0, 2.0, 3.0] {
            manager
                .add_spending(Spending::new(
                    amount,
                    SpendingCategory::Other,
                    2024,
                    Month::May,
                    Currency::Eur,
                    "",
                ))
                .unwrap();
        }
        let removed = manager.delete_spending_at(1).unwrap();
        assert_eq!(removed.amount, 2.0);

        let reloaded = reload(&temp);
        let amounts: Vec<f64> = reloaded.book().spendings.iter().map(|s| s.amount).collect();
        assert_eq!(amounts, vec![1.0, 3.0]);
    }
}
