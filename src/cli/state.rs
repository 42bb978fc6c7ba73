use crate::book::Currency;
use crate::core::BookManager;

/// Shared CLI runtime state: the book manager plus the display currency the
/// summary views filter on.
pub struct CliState {
    manager: BookManager,
    pub currency: Currency,
}

impl CliState {
    pub fn new(manager: BookManager, currency: Currency) -> Self {
        Self { manager, currency }
    }

    pub fn manager(&self) -> &BookManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut BookManager {
        &mut self.manager
    }
}
