//! One module per page kind, mirroring the sidebar structure.

pub mod custom;
pub mod income;
pub mod summary;
pub mod year;

use crate::book::Month;
use crate::summary::MonthlyPivot;

use super::ui::table::{Table, TableColumn};
use super::ui::format_amount;

/// Renders a month × year pivot as a text table: one fixed row per calendar
/// month, one right-aligned column per year.
pub fn pivot_table(pivot: &MonthlyPivot) -> String {
    let mut columns = vec![TableColumn::left("Month")];
    for year in pivot.years() {
        columns.push(TableColumn::right(year.to_string()));
    }
    let mut table = Table::new(columns);
    for month in Month::ALL {
        let mut row = vec![month.label().to_string()];
        row.extend(pivot.row(month).into_iter().map(format_amount));
        table.push_row(row);
    }
    table.render()
}
