use std::hint::black_box;
use tracing::{debug, info};

use super::error::Error;
use super::types::{Comparison, VariantRun};
use common::types::SumPair;
use layout_bench_core::traits::SumSlots;
use layout_bench_core::{
    count_padded, count_unpadded, generate_columns, generate_rows, sum_column_oriented,
    sum_row_oriented,
};
use perf_bench::{compare, time_iterations};

pub const LAYOUT_SCENARIO: &str = "layout";
pub const FALSE_SHARING_SCENARIO: &str = "false_sharing";

pub type LayoutComparison = Comparison<i64>;
pub type FalseSharingComparison = Comparison<SumPair>;

/// Times `sum_row_oriented` against `sum_column_oriented` on `size` records.
///
/// Both datasets are built before the clock starts.
pub fn run_layout_comparison(size: usize, iterations: u32, tie_tolerance: f64) -> LayoutComparison {
    info!(size, iterations, "running layout comparison");

    let rows = generate_rows(size);
    let columns = generate_columns(size);

    let (row_sum, row_time) = time_iterations(iterations, || sum_row_oriented(black_box(&rows)));
    debug!(total = ?row_time.total, "row-oriented done");

    let (column_sum, column_time) =
        time_iterations(iterations, || sum_column_oriented(black_box(&columns)));
    debug!(total = ?column_time.total, "column-oriented done");

    Comparison {
        scenario: LAYOUT_SCENARIO,
        size,
        iterations: row_time.iterations,
        verdict: compare(row_time.total, column_time.total, tie_tolerance),
        first: VariantRun {
            name: "row-oriented",
            result: row_sum,
            measurement: row_time,
        },
        second: VariantRun {
            name: "column-oriented",
            result: column_sum,
            measurement: column_time,
        },
    }
}

/// Times `count_unpadded` against `count_padded` on `size` records.
///
/// Each call spawns and joins its own pair of workers, so thread start-up is
/// part of the measured time for both variants alike.
pub fn run_false_sharing_comparison(
    size: usize,
    iterations: u32,
    tie_tolerance: f64,
) -> FalseSharingComparison {
    info!(size, iterations, "running false-sharing comparison");

    let rows = generate_rows(size);
    let records = rows.records();

    let (unpadded, unpadded_time) =
        time_iterations(iterations, || count_unpadded(black_box(records)));
    debug!(total = ?unpadded_time.total, "unpadded done");

    let (padded, padded_time) = time_iterations(iterations, || count_padded(black_box(records)));
    debug!(total = ?padded_time.total, "padded done");

    Comparison {
        scenario: FALSE_SHARING_SCENARIO,
        size,
        iterations: unpadded_time.iterations,
        verdict: compare(unpadded_time.total, padded_time.total, tie_tolerance),
        first: VariantRun {
            name: "unpadded",
            result: unpadded.sums(),
            measurement: unpadded_time,
        },
        second: VariantRun {
            name: "padded",
            result: padded.sums(),
            measurement: padded_time,
        },
    }
}

/// Fails with `ResultMismatch` when the two variants disagree.
pub fn ensure_match<T>(comparison: &Comparison<T>) -> Result<(), Error>
where
    T: PartialEq + std::fmt::Debug,
{
    if comparison.results_match() {
        return Ok(());
    }

    Err(Error::ResultMismatch {
        scenario: comparison.scenario,
        detail: format!(
            "size {}: {}={:?}, {}={:?}",
            comparison.size,
            comparison.first.name,
            comparison.first.result,
            comparison.second.name,
            comparison.second.result
        ),
    })
}
