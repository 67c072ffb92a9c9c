use super::dataset::{ColumnDataset, RowDataset};

/// Sums field A by walking whole records.
///
/// Every cache line fetched also carries field B, which is never read, so only
/// half of the memory traffic is useful.
pub fn sum_row_oriented(rows: &RowDataset) -> i64 {
    rows.records().iter().map(|record| record.a).sum()
}

/// Sums field A by walking only the A column.
pub fn sum_column_oriented(columns: &ColumnDataset) -> i64 {
    columns.column_a().iter().sum()
}
