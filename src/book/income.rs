use serde::{Deserialize, Serialize};
use std::fmt;

use super::month::Month;
use super::spending::Currency;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeSource {
    Family,
    Work,
    Other,
}

impl IncomeSource {
    pub const ALL: [IncomeSource; 3] = [IncomeSource::Family, IncomeSource::Work, IncomeSource::Other];

    pub fn label(&self) -> &'static str {
        match self {
            IncomeSource::Family => "Family",
            IncomeSource::Work => "Work",
            IncomeSource::Other => "Other",
        }
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An income record. The currency column is part of the canonical schema;
/// files written without it fail to deserialize and load as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub amount: f64,
    pub source: IncomeSource,
    pub year: i32,
    pub month: Month,
    pub currency: Currency,
}

impl Income {
    pub fn new(amount: f64, source: IncomeSource, year: i32, month: Month, currency: Currency) -> Self {
        Self {
            amount,
            source,
            year,
            month,
            currency,
        }
    }
}
