use crate::book::{year_range, Book};

/// The page the user is on. Custom pages behave like year pages for data
/// entry, except their entries carry no year/month until appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Summary,
    Income,
    Year(i32),
    Custom(String),
}

impl Page {
    pub fn label(&self) -> String {
        match self {
            Page::Summary => "Spendings Summary".to_string(),
            Page::Income => "Income".to_string(),
            Page::Year(year) => format!("Spendings {}", year),
            Page::Custom(name) => name.clone(),
        }
    }
}

/// Selector order: summary, one page per year, income, then every custom
/// page in registration order.
pub fn all_pages(book: &Book) -> Vec<Page> {
    let mut pages = vec![Page::Summary];
    pages.extend(year_range().map(Page::Year));
    pages.push(Page::Income);
    pages.extend(book.custom_pages.iter().cloned().map(Page::Custom));
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_lists_summary_years_income_then_customs() {
        let mut book = Book::new();
        book.add_page("Travel").unwrap();
        let pages = all_pages(&book);

        assert_eq!(pages[0], Page::Summary);
        assert_eq!(pages[1], Page::Year(2022));
        assert_eq!(pages[pages.len() - 2], Page::Income);
        assert_eq!(pages[pages.len() - 1], Page::Custom("Travel".into()));
    }

    #[test]
    fn labels_match_the_page_kind() {
        assert_eq!(Page::Year(2024).label(), "Spendings 2024");
        assert_eq!(Page::Summary.label(), "Spendings Summary");
    }
}
