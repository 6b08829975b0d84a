//! Bubble sort with early exit.
//!
//! ## Purpose
//!
//! Standard adjacent-swap sweeps: each outer pass bubbles the largest
//! remaining element to the end of the unsorted region. If a full inner pass
//! performs zero swaps the sequence is already sorted and outer iteration
//! stops immediately rather than continuing to the nominal `n` passes.
//!
//! ## Event vocabulary
//!
//! Per outer pass:
//!
//! * `pass_start`: before the inner loop; carries the count of passes
//!   completed so far and, once at least one pass has completed, the
//!   trailing `[n-i, n-1]` range already final.
//! * `comparing`: before each adjacent counted comparison.
//! * `swapped`: immediately after each swap that occurs.
//!
//! ## Invariants
//!
//! * After pass `i`, the last `i` elements are in their final positions.
//! * A swap-free pass is always the last pass.

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
// BubbleSort
// ============================================================================

/// Adjacent-swap sort with early exit on a swap-free pass.
#[derive(Debug)]
pub struct BubbleSort<T> {
    core: SortCore<T>,
}

impl<T: PrimInt> Default for BubbleSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt> BubbleSort<T> {
    /// Create a headless bubble sorter.
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
            let mut swapped = false;
            // Trailing suffix finalized by the previous passes.
            let sorted = (i > 0).then(|| Span::new(n - i, n - 1));

            self.core.emit(SortPhase::PassStart { pass: i, sorted });

            for j in 0..n - i - 1 {
                self.core.emit(SortPhase::Comparing {
                    pair: (j, j + 1),
                    sorted,
                });

                if !self.core.seq.compare(j, j + 1) {
                    self.core.seq.swap(j, j + 1);
                    swapped = true;
                    self.core.emit(SortPhase::Swapped {
                        pair: (j, j + 1),
                        sorted,
                    });
                }
            }

            // A swap-free pass means the sequence is sorted.
            if !swapped {
                break;
            }
        }
    }
}

impl<T: PrimInt> Sorter<T> for BubbleSort<T> {
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
        "BubbleSort"
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
