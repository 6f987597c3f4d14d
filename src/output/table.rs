//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Modify, Style, Width, object::Segment},
};

/// Cells wider than this wrap onto further lines
pub const MAX_COL_WIDTH: usize = 200;

/// Format rows as a `|`-separated table with a header row.
///
/// An empty slice still renders the header.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    let mut table = Table::new(data);
    table
        .with(Style::psql())
        .with(Modify::new(Segment::all()).with(Width::wrap(MAX_COL_WIDTH)));

    table.to_string()
}

/// Split a rendered table line into trimmed cell values
#[cfg(test)]
pub fn cells(line: &str) -> Vec<String> {
    line.split('|').map(|c| c.trim().to_string()).collect()
}
