// ----------------------------
// Timing and comparison helpers
// ----------------------------

use std::time::{Duration, Instant};

/// Dataset size used by the single-variant bench binaries.
pub const NUM_RECORDS: usize = 200_000;

/// Elapsed wall-clock time over a number of calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub total: Duration,
    pub iterations: u32,
}

impl Measurement {
    /// Average time per call.
    pub fn average(&self) -> Duration {
        self.total / self.iterations.max(1)
    }
}

/// Calls `op` `iterations` times (at least once) and returns the last result
/// together with the elapsed time.
///
/// The result of every call is passed through `black_box` so the work cannot
/// be optimized away.
pub fn time_iterations<T>(iterations: u32, mut op: impl FnMut() -> T) -> (T, Measurement) {
    let iterations = iterations.max(1);

    let start_time = Instant::now();
    let mut last = std::hint::black_box(op());
    for _ in 1..iterations {
        last = std::hint::black_box(op());
    }
    let total = start_time.elapsed();

    (last, Measurement { total, iterations })
}

/// Outcome of timing two variants against each other.
///
/// The ratio is always `slower / faster`, so it is `>= 1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    FirstFaster(f64),
    SecondFaster(f64),
    /// Totals differ by no more than the noise tolerance.
    Tie,
}

impl Verdict {
    pub fn ratio(&self) -> f64 {
        match self {
            Verdict::FirstFaster(r) | Verdict::SecondFaster(r) => *r,
            Verdict::Tie => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::FirstFaster(_) => "first_faster",
            Verdict::SecondFaster(_) => "second_faster",
            Verdict::Tie => "tie",
        }
    }
}

/// Compares two totals.
///
/// `tie_tolerance` is the relative difference, measured against the slower
/// total, under which both are reported as a tie (`0.02` means within 2%).
pub fn compare(first: Duration, second: Duration, tie_tolerance: f64) -> Verdict {
    let first_ns = first.as_nanos() as f64;
    let second_ns = second.as_nanos() as f64;

    let slower = first_ns.max(second_ns);
    let faster = first_ns.min(second_ns);

    if slower == 0.0 || (slower - faster) / slower <= tie_tolerance {
        return Verdict::Tie;
    }

    // A zero-length total only happens with a coarse clock; clamp to 1ns.
    let ratio = slower / faster.max(1.0);

    if first_ns < second_ns {
        Verdict::FirstFaster(ratio)
    } else {
        Verdict::SecondFaster(ratio)
    }
}
