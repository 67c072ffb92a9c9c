use std::hint::black_box;
use std::time::Instant;

use layout_bench_core::{ColumnDataset, generate_rows, sum_column_oriented};
use perf_bench::NUM_RECORDS;

fn main() {
    let columns: ColumnDataset = generate_rows(NUM_RECORDS).into();

    let start_time = Instant::now();

    // Only the contiguous A column is touched.
    let checksum = sum_column_oriented(black_box(&columns));

    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum);

    println!("--- SoA Benchmark Results ({} Records) ---", NUM_RECORDS);
    println!("Checksum: {}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
