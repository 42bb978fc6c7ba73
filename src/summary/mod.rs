//! Aggregation engine: pivot summaries, category proportions, auto-savings.

pub mod pivot;
pub mod proportions;
pub mod savings;

pub use pivot::MonthlyPivot;
pub use proportions::CategoryBreakdown;
