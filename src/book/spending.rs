use serde::{Deserialize, Serialize};
use std::fmt;

use super::month::Month;

/// Currencies the tracker accepts. Amounts are never converted between them;
/// every summary view filters on a single currency instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Eur,
    Idr,
    Sgd,
    Huf,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Eur, Currency::Idr, Currency::Sgd, Currency::Huf];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Idr => "IDR",
            Currency::Sgd => "SGD",
            Currency::Huf => "HUF",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Spending categories. `Savings` is reserved for synthesized auto-savings
/// records and is never offered on entry forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpendingCategory {
    Groceries,
    #[serde(rename = "Leisure/Entertainment")]
    Leisure,
    Bills,
    Wohnung,
    Other,
    Savings,
}

impl SpendingCategory {
    pub const ALL: [SpendingCategory; 6] = [
        SpendingCategory::Groceries,
        SpendingCategory::Leisure,
        SpendingCategory::Bills,
        SpendingCategory::Wohnung,
        SpendingCategory::Other,
        SpendingCategory::Savings,
    ];

    /// Categories selectable on entry forms.
    pub const ENTRY: [SpendingCategory; 5] = [
        SpendingCategory::Groceries,
        SpendingCategory::Leisure,
        SpendingCategory::Bills,
        SpendingCategory::Wohnung,
        SpendingCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SpendingCategory::Groceries => "Groceries",
            SpendingCategory::Leisure => "Leisure/Entertainment",
            SpendingCategory::Bills => "Bills",
            SpendingCategory::Wohnung => "Wohnung",
            SpendingCategory::Other => "Other",
            SpendingCategory::Savings => "Savings",
        }
    }
}

impl fmt::Display for SpendingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single spending record. Identity is positional within the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spending {
    pub amount: f64,
    pub category: SpendingCategory,
    pub year: i32,
    pub month: Month,
    pub currency: Currency,
    #[serde(default)]
    pub notes: String,
}

impl Spending {
    pub fn new(
        amount: f64,
        category: SpendingCategory,
        year: i32,
        month: Month,
        currency: Currency,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category,
            year,
            month,
            currency,
            notes: notes.into(),
        }
    }
}
