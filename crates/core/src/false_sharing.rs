use std::fmt;
use std::hint::black_box;
use std::thread;

use super::traits::SumSlots;
use common::cache_line::FIELD_PAD_BYTES;
use common::types::{Record, SumPair};

/// Result record with both sums adjacent: they share one cache line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(C)]
pub struct CompactSums {
    pub sum_a: i64,
    pub sum_b: i64,
}

impl SumSlots for CompactSums {
    fn slots(&mut self) -> (&mut i64, &mut i64) {
        (&mut self.sum_a, &mut self.sum_b)
    }

    fn sums(&self) -> SumPair {
        SumPair {
            sum_a: self.sum_a,
            sum_b: self.sum_b,
        }
    }
}

/// Result record with an inert byte region between the sums.
///
/// `repr(C)` keeps the declared field order, so `sum_b` starts
/// [`CACHE_LINE_SIZE`](common::cache_line::CACHE_LINE_SIZE) bytes after
/// `sum_a` and the two can never sit on the same line. The padding is never
/// read.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct PaddedSums {
    pub sum_a: i64,
    _pad: [u8; FIELD_PAD_BYTES],
    pub sum_b: i64,
}

impl Default for PaddedSums {
    fn default() -> Self {
        PaddedSums {
            sum_a: 0,
            _pad: [0; FIELD_PAD_BYTES],
            sum_b: 0,
        }
    }
}

impl fmt::Debug for PaddedSums {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PaddedSums")
            .field("sum_a", &self.sum_a)
            .field("sum_b", &self.sum_b)
            .finish_non_exhaustive()
    }
}

impl SumSlots for PaddedSums {
    fn slots(&mut self) -> (&mut i64, &mut i64) {
        (&mut self.sum_a, &mut self.sum_b)
    }

    fn sums(&self) -> SumPair {
        SumPair {
            sum_a: self.sum_a,
            sum_b: self.sum_b,
        }
    }
}

/// Adds every value into `slot`, storing the running total after each step.
///
/// `black_box` on the slot stops the compiler from keeping the total in a
/// register and writing it once at the end, which would hide the contention
/// being measured.
fn accumulate(slot: &mut i64, values: impl Iterator<Item = i64>) {
    for value in values {
        *slot += value;
        black_box(&mut *slot);
    }
}

/// Sums fields A and B of `records` on two scoped threads, each writing only
/// its own field of one shared result record `S`.
///
/// Returns once both workers have joined.
pub fn count_into<S: SumSlots>(records: &[Record]) -> S {
    let mut result = S::default();
    let (sum_a, sum_b) = result.slots();

    thread::scope(|s| {
        s.spawn(move || accumulate(sum_a, records.iter().map(|r| r.a)));
        s.spawn(move || accumulate(sum_b, records.iter().map(|r| r.b)));
    });

    result
}

/// Concurrent accumulation into adjacent fields (false sharing expected).
pub fn count_unpadded(records: &[Record]) -> CompactSums {
    count_into(records)
}

/// Concurrent accumulation into fields a full cache line apart.
pub fn count_padded(records: &[Record]) -> PaddedSums {
    count_into(records)
}
