use std::hint::black_box;
use std::time::Instant;

use layout_bench_core::{generate_rows, sum_row_oriented};
use perf_bench::NUM_RECORDS;

fn main() {
    let rows = generate_rows(NUM_RECORDS);

    let start_time = Instant::now();

    // Each cache line carries field B too, which this loop never reads.
    let checksum = sum_row_oriented(black_box(&rows));

    let elapsed_time = start_time.elapsed();

    let final_checksum = black_box(checksum);

    println!("--- AoS Benchmark Results ({} Records) ---", NUM_RECORDS);
    println!("Checksum: {}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
