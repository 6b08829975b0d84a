//! Selection sort.
//!
//! ## Purpose
//!
//! Per outer index `i`, scan the unsorted suffix for its minimum and swap it
//! into position `i`. The sorted prefix grows by exactly one finalized
//! element per outer step.
//!
//! ## Event vocabulary
//!
//! Per outer index `i`:
//!
//! * `searching`: once; initial candidate minimum `i`, with the sorted
//!   prefix (once it exists) and the unsorted `[i, n-1]` suffix.
//! * `comparing`: for each candidate `j`, always; the pair is
//!   `(current_min, j)`.
//! * `new_min`: only when the comparison shows candidate `j` is strictly
//!   smaller than the running minimum.
//! * `swapped` or `in_place`: exactly one of the two after the scan:
//!   `swapped` if the minimum's index differs from `i`, `in_place` if it
//!   already equals `i`. Never both, never neither.
//!
//! ## Invariants
//!
//! * After outer index `i`, positions `[0, i]` hold their final values.
//! * The running minimum index always lies in `[i, n-1]`.

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
    time_best: "O(n²)",
    time_avg: "O(n²)",
    time_worst: "O(n²)",
    space: "O(1)",
};

// ============================================================================
// SelectionSort
// ============================================================================

/// Minimum-scan sort over the shrinking unsorted suffix.
#[derive(Debug)]
pub struct SelectionSort<T> {
    core: SortCore<T>,
}

impl<T: PrimInt> Default for SelectionSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt> SelectionSort<T> {
    /// Create a headless selection sorter.
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
        for i in 0..n {
            let mut min_idx = i;
            let sorted = (i > 0).then(|| Span::new(0, i - 1));

            self.core.emit(SortPhase::Searching {
                min: min_idx,
                sorted,
                unsorted: Span::new(i, n - 1),
            });

            for j in i + 1..n {
                self.core.emit(SortPhase::Comparing {
                    pair: (min_idx, j),
                    sorted,
                });

                // compare() is "<=", so a false result means data[j] is
                // strictly smaller than the running minimum.
                if !self.core.seq.compare(min_idx, j) {
                    min_idx = j;
                    self.core.emit(SortPhase::NewMin { min: min_idx, sorted });
                }
            }

            if min_idx != i {
                self.core.seq.swap(i, min_idx);
                self.core.emit(SortPhase::Swapped {
                    pair: (i, min_idx),
                    sorted: Some(Span::new(0, i)),
                });
            } else {
                self.core.emit(SortPhase::InPlace {
                    index: i,
                    sorted: Some(Span::new(0, i)),
                });
            }
        }
    }
}

impl<T: PrimInt> Sorter<T> for SelectionSort<T> {
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
        "SelectionSort"
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
