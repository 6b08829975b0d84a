//! Insertion sort (shift-based).
//!
//! ## Purpose
//!
//! Classic shift-based insertion: each outer index `i` lifts the element
//! there out as the key, shifts larger prefix elements one slot right while
//! scanning backward, then drops the key into the gap. Not binary-search
//! insertion: the scan is linear so every probe is visible to the renderer.
//!
//! ## Event vocabulary
//!
//! Per outer index `i`:
//!
//! * `selecting`: once, the element about to be placed, with the prefix
//!   `[0, i-1]` marked sorted.
//! * `comparing`: for each backward probe, always; the pair is
//!   `(probe, i)` where `i` is the original selection index.
//! * `shifting`: only when a one-slot shift actually occurs.
//! * `inserted`: once, the resting index, with the sorted prefix now
//!   `[0, i]`; fires even if the element never moved.
//!
//! ## Access accounting
//!
//! The key is read once (+1 access) and compared from a register
//! thereafter, so each probe charges 1 comparison + 1 access (the prefix
//! read); each shift write and the final insert write charge 1 access each.
//!
//! ## Invariants
//!
//! * Before outer index `i`, `[0, i-1]` is sorted (relative order, not
//!   final positions).
//! * Exactly one `inserted` fires per outer index.

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
    time_best: "O(n)",
    time_avg: "O(n²)",
    time_worst: "O(n²)",
    space: "O(1)",
};

// ============================================================================
// InsertionSort
// ============================================================================

/// Shift-based insertion into a growing sorted prefix.
#[derive(Debug)]
pub struct InsertionSort<T> {
    core: SortCore<T>,
}

impl<T: PrimInt> Default for InsertionSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt> InsertionSort<T> {
    /// Create a headless insertion sorter.
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

    fn run(&mut self, n: usize) {
        for i in 1..n {
            let key = self.core.seq.read(i);
            let sorted = Some(Span::new(0, i - 1));

            self.core.emit(SortPhase::Selecting { index: i, sorted });

            // Scan the sorted prefix backward, opening a gap for the key.
            let mut gap = i;
            while gap > 0 {
                let probe = gap - 1;
                self.core.seq.record_comparison();
                let value = self.core.seq.read(probe);

                self.core.emit(SortPhase::Comparing {
                    pair: (probe, i),
                    sorted,
                });

                if value > key {
                    self.core.seq.write(gap, value);
                    self.core.emit(SortPhase::Shifting {
                        from: probe,
                        to: gap,
                        sorted,
                    });
                    gap -= 1;
                } else {
                    break;
                }
            }

            self.core.seq.write(gap, key);
            self.core.emit(SortPhase::Inserted {
                index: gap,
                sorted: Some(Span::new(0, i)),
            });
        }
    }
}

impl<T: PrimInt> Sorter<T> for InsertionSort<T> {
    fn sort(&mut self, input: &[T]) -> Vec<T> {
        self.core.begin(input);
        let n = self.core.seq.len();
        if n > 1 {
            self.run(n);
        }
        let sorted = self.core.finish();
        debug!("{} done: {}", self.name(), self.core.stats());
        sorted
    }

    fn name(&self) -> &'static str {
        "InsertionSort"
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
