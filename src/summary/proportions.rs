use std::collections::BTreeMap;

use crate::book::{Spending, SpendingCategory};

/// Per-category totals over a spending collection, used to drive the
/// proportion chart. An empty breakdown means "no data", not a zero chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    totals: BTreeMap<SpendingCategory, f64>,
    total: f64,
}

impl CategoryBreakdown {
    /// Sums amounts per category. Filtering happens at the call site.
    pub fn from_spendings<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Spending>,
    {
        let mut totals: BTreeMap<SpendingCategory, f64> = BTreeMap::new();
        let mut total = 0.0;
        for record in records {
            *totals.entry(record.category).or_insert(0.0) += record.amount;
            total += record.amount;
        }
        Self { totals, total }
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Category totals in category declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (SpendingCategory, f64)> + '_ {
        self.totals.iter().map(|(category, amount)| (*category, *amount))
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Fraction of the overall total, in `0.0..=1.0`.
    pub fn share(&self, amount: f64) -> f64 {
        if self.total > 0.0 {
            amount / self.total
        } else {
            0.0
        }
    }
}
