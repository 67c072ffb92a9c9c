use common::types::SumPair;
use layout_bench_core::dataset::{ColumnDataset, RowDataset};
use layout_bench_core::traits::SumSlots;
use layout_bench_core::*;
use proptest::prelude::*;

const SIZE_STRATEGY: std::ops::Range<usize> = 0usize..5_000;

proptest! {
    /// Property: both layouts hold the same logical records, index by index.
    #[test]
    fn columns_stay_index_aligned(n in SIZE_STRATEGY) {
        let rows = generate_rows(n);
        let columns = generate_columns(n);

        prop_assert_eq!(columns.column_a().len(), columns.column_b().len());
        prop_assert_eq!(columns.len(), rows.len());
        for (i, record) in rows.records().iter().enumerate() {
            prop_assert_eq!(columns.get(i), Some(*record));
        }
    }

    /// Property: converting AoS -> SoA -> AoS is lossless.
    #[test]
    fn layout_conversion_is_lossless(n in SIZE_STRATEGY) {
        let rows = generate_rows(n);
        let columns: ColumnDataset = rows.clone().into();
        let back: RowDataset = columns.into();
        prop_assert_eq!(back, rows);
    }

    /// Property: row and column sums agree and match Σ(0..n).
    #[test]
    fn layout_sums_match_closed_form(n in SIZE_STRATEGY) {
        let expected = SumPair::expected_for(n).sum_a;
        prop_assert_eq!(sum_row_oriented(&generate_rows(n)), expected);
        prop_assert_eq!(sum_column_oriented(&generate_columns(n)), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: padding changes layout, never content.
    #[test]
    fn padded_and_unpadded_sums_match_closed_form(n in SIZE_STRATEGY) {
        let rows = generate_rows(n);
        let expected = SumPair::expected_for(n);

        prop_assert_eq!(count_unpadded(rows.records()).sums(), expected);
        prop_assert_eq!(count_padded(rows.records()).sums(), expected);
    }

    /// Property: arbitrary records, not just generated ones, sum the same way
    /// in both variants.
    #[test]
    fn variants_agree_on_arbitrary_records(
        pairs in prop::collection::vec((-1_000_000i64..1_000_000, -1_000_000i64..1_000_000), 0..2_000)
    ) {
        let records: Vec<common::types::Record> = pairs
            .into_iter()
            .map(|(a, b)| common::types::Record { a, b })
            .collect();

        let expected = SumPair {
            sum_a: records.iter().map(|r| r.a).sum(),
            sum_b: records.iter().map(|r| r.b).sum(),
        };

        prop_assert_eq!(count_unpadded(&records).sums(), expected);
        prop_assert_eq!(count_padded(&records).sums(), expected);
    }
}
