use serde::{Deserialize, Serialize};

use super::spending::Currency;

/// A raw entry on a user-defined custom page. Entries carry no year/month;
/// they only gain one when the page total is appended into the main store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEntry {
    pub currency: Currency,
    pub amount: f64,
    #[serde(default)]
    pub notes: String,
}

impl PageEntry {
    pub fn new(currency: Currency, amount: f64, notes: impl Into<String>) -> Self {
        Self {
            currency,
            amount,
            notes: notes.into(),
        }
    }
}

/// Reduces a page name to the file stem used for its CSV file.
pub fn page_slug(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "page".into()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_keeps_alphanumerics() {
        assert_eq!(page_slug("Travel 2024"), "travel_2024");
    }

    #[test]
    fn slug_falls_back_for_symbol_only_names() {
        assert_eq!(page_slug("!!!"), "page");
    }
}
