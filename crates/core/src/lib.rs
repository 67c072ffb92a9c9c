pub mod dataset;
pub mod false_sharing;
pub mod layout;
pub mod pool;
pub mod traits;

pub use dataset::{ColumnDataset, RowDataset, generate_columns, generate_rows};
pub use false_sharing::{CompactSums, PaddedSums, count_padded, count_unpadded};
pub use layout::{sum_column_oriented, sum_row_oriented};
