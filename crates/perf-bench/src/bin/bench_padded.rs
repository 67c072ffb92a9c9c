use std::hint::black_box;
use std::time::Instant;

use common::cache_line::CACHE_LINE_SIZE;
use layout_bench_core::{count_padded, generate_rows};
use perf_bench::NUM_RECORDS;

fn main() {
    let rows = generate_rows(NUM_RECORDS);

    let start_time = Instant::now();

    let sums = count_padded(black_box(rows.records()));

    let elapsed_time = start_time.elapsed();

    let sums = black_box(sums);

    println!(
        "--- Padded Benchmark Results ({} Records, {}-byte lines) ---",
        NUM_RECORDS, CACHE_LINE_SIZE
    );
    println!("sumA: {}, sumB: {}", sums.sum_a, sums.sum_b);
    println!("Elapsed Time: {:?}", elapsed_time);
}
