//! The instrumented working sequence.
//!
//! ## Purpose
//!
//! This module defines [`InstrumentedSequence`], the counted-access substrate
//! every sorting algorithm runs on. It owns the working copy of the caller's
//! data and the [`SortStats`] counters, and exposes the only primitives the
//! algorithm bodies are allowed to touch the data through.
//!
//! ## Design notes
//!
//! * **Defensive copy**: `load` clones the caller's slice; the caller's
//!   original is never mutated.
//! * **Counted primitives**: `compare` and `swap` charge the counters
//!   automatically. Direct reads/writes that bypass them (a cached insertion
//!   key, a merge-buffer write) must go through `read`/`write` so each unit
//!   of traffic is charged 1 access.
//! * **Uncharged escape hatch**: `as_slice` yields a read-only view for
//!   event snapshots and merge-buffer copies; neither counts as data
//!   traffic the statistics report on.
//! * Generic over `num_traits::PrimInt`: any totally-ordered primitive
//!   integer element works; there is no comparator injection.
//!
//! ## Key concepts
//!
//! ### Access accounting
//!
//! * `compare(i, j)`: comparisons += 1, accesses += 2; never mutates.
//! * `swap(i, j)`: swaps += 1, accesses += 4, unconditionally. A self-swap
//!   still charges the full cost of the operation attempted.
//! * `read(i)` / `write(i, v)`: accesses += 1 each.
//! * `record_comparison()`: comparisons += 1 with no access charge, for
//!   comparisons against a value the algorithm already read and paid for.
//! * `record_accesses(n)`: manual bulk charge for reads the algorithm
//!   performs outside the counted primitives.
//!
//! ## Invariants
//!
//! * The working data is always a permutation of the loaded input, except
//!   transiently during merge/insert where a slot holds a previously-read
//!   value that is still live in a buffer.
//! * Counters only move through the methods above; they are monotonically
//!   non-decreasing between `reset_stats` calls.
//!
//! ## Non-goals
//!
//! * This module does not emit events and knows nothing about sinks.
//! * This module does not bounds-check beyond the slice's own panics;
//!   callers index within `0..len` by construction.
//!
//! ## Visibility
//!
//! [`InstrumentedSequence`] is public so external drivers can build custom
//! instrumented algorithms, but the primary consumers are the five sorters
//! in this crate.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::mem;
use num_traits::PrimInt;

use crate::primitives::stats::SortStats;

// ============================================================================
// Instrumented Sequence
// ============================================================================

/// A mutable working sequence with counted access primitives.
#[derive(Debug, Clone, Default)]
pub struct InstrumentedSequence<T> {
    /// Working copy of the data being sorted.
    data: Vec<T>,

    /// Counters accumulated since the last `reset_stats`.
    stats: SortStats,
}

impl<T: PrimInt> InstrumentedSequence<T> {
    /// Create an empty sequence with zeroed counters.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            stats: SortStats::default(),
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Replace the working data with a defensive copy of `input`.
    pub fn load(&mut self, input: &[T]) {
        self.data.clear();
        self.data.extend_from_slice(input);
    }

    /// Zero all counters. Called exactly once at the start of each sort.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Transfer the working data out, leaving the sequence empty.
    ///
    /// Counters are untouched so statistics stay readable after the sorted
    /// output has been handed to the caller.
    pub fn take(&mut self) -> Vec<T> {
        mem::take(&mut self.data)
    }

    // ========================================================================
    // Counted Primitives
    // ========================================================================

    /// Counted comparison: `true` iff `data[i] <= data[j]`.
    ///
    /// Charges 1 comparison and 2 accesses. Never mutates the sequence.
    pub fn compare(&mut self, i: usize, j: usize) -> bool {
        self.stats.comparisons += 1;
        self.stats.accesses += 2;
        self.data[i] <= self.data[j]
    }

    /// Counted unconditional exchange of positions `i` and `j`.
    ///
    /// Charges 1 swap and 4 accesses (two reads + two writes), whether or
    /// not `i == j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.stats.swaps += 1;
        self.stats.accesses += 4;
        self.data.swap(i, j);
    }

    /// Counted single read of position `i`. Charges 1 access.
    pub fn read(&mut self, i: usize) -> T {
        self.stats.accesses += 1;
        self.data[i]
    }

    /// Counted single write of `value` into position `i`. Charges 1 access.
    pub fn write(&mut self, i: usize, value: T) {
        self.stats.accesses += 1;
        self.data[i] = value;
    }

    /// Charge 1 comparison with no access cost.
    ///
    /// Used when an algorithm compares against a value it already read and
    /// paid for (the insertion key, merge-buffer heads).
    pub fn record_comparison(&mut self) {
        self.stats.comparisons += 1;
    }

    /// Charge `n` accesses with no comparison cost.
    pub fn record_accesses(&mut self, n: u64) {
        self.stats.accesses += n;
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// Read-only view of the working data. Uncharged; used for event
    /// snapshots and merge-buffer copies.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Number of elements in the working sequence.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the working sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> SortStats {
        self.stats
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(values: &[i64]) -> InstrumentedSequence<i64> {
        let mut seq = InstrumentedSequence::new();
        seq.load(values);
        seq
    }

    #[test]
    fn compare_charges_one_comparison_two_accesses() {
        let mut seq = loaded(&[3, 7]);
        assert!(seq.compare(0, 1));
        assert!(!seq.compare(1, 0));
        let stats = seq.stats();
        assert_eq!(stats.comparisons, 2);
        assert_eq!(stats.accesses, 4);
        assert_eq!(stats.swaps, 0);
    }

    #[test]
    fn compare_treats_equal_elements_as_ordered() {
        let mut seq = loaded(&[5, 5]);
        assert!(seq.compare(0, 1));
        assert!(seq.compare(1, 0));
    }

    #[test]
    fn swap_charges_full_cost_even_for_self_swap() {
        let mut seq = loaded(&[1, 2]);
        seq.swap(0, 0);
        let stats = seq.stats();
        assert_eq!(stats.swaps, 1);
        assert_eq!(stats.accesses, 4);
        assert_eq!(seq.as_slice(), &[1, 2]);
    }

    #[test]
    fn swap_exchanges_positions() {
        let mut seq = loaded(&[1, 2, 3]);
        seq.swap(0, 2);
        assert_eq!(seq.as_slice(), &[3, 2, 1]);
        assert_eq!(seq.stats().accesses, 4);
    }

    #[test]
    fn read_write_charge_one_access_each() {
        let mut seq = loaded(&[4, 9]);
        let v = seq.read(1);
        seq.write(0, v);
        assert_eq!(seq.as_slice(), &[9, 9]);
        assert_eq!(seq.stats().accesses, 2);
    }

    #[test]
    fn reset_clears_counters_but_not_data() {
        let mut seq = loaded(&[2, 1]);
        seq.swap(0, 1);
        seq.reset_stats();
        assert_eq!(seq.stats(), SortStats::default());
        assert_eq!(seq.as_slice(), &[1, 2]);
    }

    #[test]
    fn load_takes_a_defensive_copy() {
        let input = vec![3, 1, 2];
        let mut seq = loaded(&input);
        seq.swap(0, 1);
        assert_eq!(input, vec![3, 1, 2]);
    }

    #[test]
    fn take_leaves_stats_readable() {
        let mut seq = loaded(&[2, 1]);
        seq.swap(0, 1);
        let out = seq.take();
        assert_eq!(out, vec![1, 2]);
        assert!(seq.is_empty());
        assert_eq!(seq.stats().swaps, 1);
    }
}
