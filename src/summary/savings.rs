use tracing::debug;

use crate::book::{Book, Currency, Month, Spending, SpendingCategory, AUTO_SAVINGS_NOTE};

/// Computes the auto-savings records a year page is still missing.
///
/// For each calendar month the unspent income is
/// `income_total − spending_total` (Savings records excluded from the
/// spending side), scoped to one (year, currency). A record is planned only
/// when the result is strictly positive and no Savings record with the same
/// key exists yet, which makes the derivation idempotent per
/// (year, month, currency). Non-positive results are discarded outright.
///
/// This is the pure half of the reconciliation; appending the plan (and the
/// single persist that follows) is the manager's job.
pub fn plan(book: &Book, year: i32, currency: Currency) -> Vec<Spending> {
    let mut planned = Vec::new();
    for month in Month::ALL {
        let income = book.income_total(year, month, currency);
        let spending = book.spending_total(year, month, currency);
        let savings = income - spending;
        if savings <= 0.0 {
            continue;
        }
        if book.has_savings_record(year, month, currency) {
            continue;
        }
        debug!(year, month = %month, %currency, savings, "planning auto-savings record");
        planned.push(Spending::new(
            savings,
            SpendingCategory::Savings,
            year,
            month,
            currency,
            AUTO_SAVINGS_NOTE,
        ));
    }
    planned
}
