use common::types::SumPair;

/// A result record whose two sums can be written by separate workers.
///
/// `slots` hands out disjoint mutable borrows, so each worker owns exactly one
/// field and the borrow checker rules out any overlap between them.
pub trait SumSlots: Default {
    /// Splits the record into `(&mut sum_a, &mut sum_b)`.
    fn slots(&mut self) -> (&mut i64, &mut i64);

    /// Returns the logical content, ignoring physical layout.
    fn sums(&self) -> SumPair;
}
