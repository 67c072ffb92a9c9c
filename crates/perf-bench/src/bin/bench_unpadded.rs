use std::hint::black_box;
use std::time::Instant;

use layout_bench_core::{count_unpadded, generate_rows};
use perf_bench::NUM_RECORDS;

fn main() {
    let rows = generate_rows(NUM_RECORDS);

    let start_time = Instant::now();

    // Both workers write into the same cache line.
    let sums = count_unpadded(black_box(rows.records()));

    let elapsed_time = start_time.elapsed();

    let sums = black_box(sums);

    println!("--- Unpadded Benchmark Results ({} Records) ---", NUM_RECORDS);
    println!("sumA: {}, sumB: {}", sums.sum_a, sums.sum_b);
    println!("Elapsed Time: {:?}", elapsed_time);
}
