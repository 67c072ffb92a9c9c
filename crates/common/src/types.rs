use std::fmt;

/// One row of the benchmark dataset: both fields stored contiguously.
///
/// Records are generated from their index so every layout built for the
/// same size holds byte-identical data: `a = i`, `b = 2i`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub a: i64,
    pub b: i64,
}

impl Record {
    /// Returns the deterministic record for index `i`.
    pub fn at(i: usize) -> Self {
        let value = i as i64;
        Record {
            a: value,
            b: value * 2,
        }
    }
}

/// Layout-independent pair of accumulated sums.
///
/// Physical result records (compact or padded) are converted into this type
/// so variants can be cross-checked for equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SumPair {
    pub sum_a: i64,
    pub sum_b: i64,
}

impl SumPair {
    /// Closed-form sums for a dataset of `n` records: `Σ(0..n)` and twice that.
    pub fn expected_for(n: usize) -> Self {
        let n = n as i64;
        let sum_a = if n == 0 { 0 } else { n * (n - 1) / 2 };
        SumPair {
            sum_a,
            sum_b: sum_a * 2,
        }
    }
}

impl fmt::Display for SumPair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "sumA: {}, sumB: {}", self.sum_a, self.sum_b)
    }
}
