//! Spendbook keeps a personal record of spending and income per year, month,
//! and currency, derives pivot and proportion summaries from it, and persists
//! everything as flat CSV files between sessions.

pub mod book;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod storage;
pub mod summary;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("spendbook=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
