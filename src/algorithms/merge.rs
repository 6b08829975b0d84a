//! Merge sort (strictly recursive, top-down).
//!
//! ## Purpose
//!
//! Stable top-down merge sort: divide at `mid = (left + right) / 2`, recurse
//! left then right, then merge the two sorted runs through scratch buffers.
//! The order of operations is fixed so the event trace is identical run to
//! run for a given input.
//!
//! ## Event vocabulary
//!
//! Per recursive call:
//!
//! * `dividing`: before recursing; the range plus the midpoint.
//!
//! Per merge:
//!
//! * `merging`: once, announcing the two sub-ranges.
//! * `merge_progress`: one per element written to the output range during
//!   the interleaved-copy phase; carries the write index.
//! * `merged`: once, the final range, after all remaining-tail copies
//!   complete.
//!
//! ## Access accounting
//!
//! Creating the scratch copies of the two runs is uncharged. Each
//! interleave step charges 1 comparison + 2 accesses (the two buffer heads)
//! and 1 access for the write. Copying a remaining tail element (no
//! competing comparison) charges 1 access per element written, no
//! comparison.
//!
//! ## Invariants
//!
//! * The two runs handed to `merge` are each sorted.
//! * After `merged`, the whole `[left, right]` range is sorted.
//! * Ties favor the left run, which is what makes the sort stable.

use num_traits::PrimInt;

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::boxed::Box;
#[cfg(feature = "std")]
use std::vec::Vec;

use log::debug;

use crate::algorithms::Sorter;
use crate::engine::complexity::Complexity;
use crate::engine::core::SortCore;
use crate::engine::events::{EventSink, SortPhase};
use crate::primitives::span::Span;
use crate::primitives::stats::SortStats;

const COMPLEXITY: Complexity = Complexity {
    time_best: "O(n log n)",
    time_avg: "O(n log n)",
    time_worst: "O(n log n)",
    space: "O(n)",
};

// ============================================================================
// MergeSort
// ============================================================================

/// Top-down merge sort with per-element merge progress events.
#[derive(Debug)]
pub struct MergeSort<T> {
    core: SortCore<T>,
}

impl<T: PrimInt> Default for MergeSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt> MergeSort<T> {
    /// Create a headless merge sorter.
    pub fn new() -> Self {
        Self {
            core: SortCore::new(),
        }
    }

    /// Attach an event sink, builder-style.
    pub fn with_sink(mut self, sink: Box<dyn EventSink<T>>) -> Self {
        self.core.set_sink(sink);
        self
    }

    fn mergesort(&mut self, left: usize, right: usize) {
        if left >= right {
            return;
        }

        let mid = (left + right) / 2;
        self.core.emit(SortPhase::Dividing {
            section: Span::new(left, right),
            mid,
        });

        self.mergesort(left, mid);
        self.mergesort(mid + 1, right);
        self.merge(left, mid, right);
    }

    fn merge(&mut self, left: usize, mid: usize, right: usize) {
        // Scratch copies of the two runs; uncharged.
        let left_run: Vec<T> = self.core.seq.as_slice()[left..=mid].to_vec();
        let right_run: Vec<T> = self.core.seq.as_slice()[mid + 1..=right].to_vec();

        self.core.emit(SortPhase::Merging {
            left: Span::new(left, mid),
            right: Span::new(mid + 1, right),
        });

        let section = Span::new(left, right);
        let mut i = 0;
        let mut j = 0;
        let mut k = left;

        // Interleaved copy: one comparison + write per element placed.
        while i < left_run.len() && j < right_run.len() {
            self.core.seq.record_comparison();
            self.core.seq.record_accesses(2);

            if left_run[i] <= right_run[j] {
                self.core.seq.write(k, left_run[i]);
                i += 1;
            } else {
                self.core.seq.write(k, right_run[j]);
                j += 1;
            }

            self.core.emit(SortPhase::MergeProgress { section, cursor: k });
            k += 1;
        }

        // Remaining tails: writes only, no comparisons.
        while i < left_run.len() {
            self.core.seq.write(k, left_run[i]);
            i += 1;
            k += 1;
        }

        while j < right_run.len() {
            self.core.seq.write(k, right_run[j]);
            j += 1;
            k += 1;
        }

        self.core.emit(SortPhase::Merged { section });
    }
}

impl<T: PrimInt> Sorter<T> for MergeSort<T> {
    fn sort(&mut self, input: &[T]) -> Vec<T> {
        self.core.begin(input);
        let n = self.core.seq.len();
        if n > 1 {
            self.mergesort(0, n - 1);
        }
        let sorted = self.core.finish();
        debug!("{} done: {}", self.name(), self.core.stats());
        sorted
    }

    fn name(&self) -> &'static str {
        "MergeSort"
    }

    fn complexity(&self) -> Complexity {
        COMPLEXITY
    }

    fn stats(&self) -> SortStats {
        self.core.stats()
    }

    fn set_sink(&mut self, sink: Box<dyn EventSink<T>>) {
        self.core.set_sink(sink);
    }

    fn clear_sink(&mut self) {
        self.core.clear_sink();
    }
}
