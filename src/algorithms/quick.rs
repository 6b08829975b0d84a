//! Quick sort (random pivot, Lomuto partition).
//!
//! ## Purpose
//!
//! In-place quicksort with a uniformly random pivot drawn from the current
//! `[low, high]` partition. The random choice (not first/last/median)
//! avoids worst-case behavior on adversarial or pre-sorted input. It also makes the exact event trace non-deterministic across runs
//! unless a seed is supplied via [`QuickSort::with_seed`]; only the *shape*
//! of the trace is stable.
//!
//! ## Event vocabulary
//!
//! Per partition step, in order:
//!
//! * `working`: the section about to be partitioned.
//! * `pivot_selected`: the chosen pivot index, before relocation.
//! * `partitioning`: after classifying every other element against the
//!   pivot; carries the full left/right index classification.
//! * `swapping`: zero or more, one per physical swap during the move
//!   phase (skipped when an element is already in place).
//! * `pivot_placed`: the pivot's final resting index.
//!
//! The base case (`low >= high`) emits nothing and returns.
//!
//! ## Access accounting
//!
//! The classification pass charges one counted comparison per non-pivot
//! element; the move phase re-compares (counted again) while relocating, so
//! a partition step costs about `2 * (high - low)` comparisons. The final
//! pivot placement is an unconditional swap and charges the full 4 accesses
//! even when it is a self-swap.
//!
//! ## Invariants
//!
//! * After `pivot_placed` at index `p`, position `p` holds its final value;
//!   recursion covers `[low, p-1]` and `[p+1, high]` only.

use num_traits::PrimInt;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

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
    time_worst: "O(n²)",
    space: "O(log n)",
};

// ============================================================================
// QuickSort
// ============================================================================

/// Random-pivot quicksort with Lomuto partitioning.
#[derive(Debug)]
pub struct QuickSort<T> {
    core: SortCore<T>,

    /// Fixed pivot seed, when reproducible traces are wanted.
    seed: Option<u64>,

    /// Pivot RNG for the sort in progress.
    rng: SmallRng,
}

impl<T: PrimInt> Default for QuickSort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt> QuickSort<T> {
    /// Create a headless quicksorter with entropy-seeded pivots.
    pub fn new() -> Self {
        Self {
            core: SortCore::new(),
            seed: None,
            rng: SmallRng::seed_from_u64(0),
        }
    }

    /// Attach an event sink, builder-style.
    pub fn with_sink(mut self, sink: Box<dyn EventSink<T>>) -> Self {
        self.core.set_sink(sink);
        self
    }

    /// Fix the pivot seed so every `sort` call replays the same trace.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fresh pivot RNG for one sort call. A fixed seed replays the same
    /// pivot choices every call; otherwise pivots draw from OS entropy.
    fn reseed(&mut self) {
        self.rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
    }

    fn quicksort(&mut self, low: usize, high: usize) {
        if low >= high {
            return;
        }

        self.core.emit(SortPhase::Working {
            section: Span::new(low, high),
        });

        let pivot = self.partition(low, high);

        if pivot > low {
            self.quicksort(low, pivot - 1);
        }
        if pivot < high {
            self.quicksort(pivot + 1, high);
        }
    }

    fn partition(&mut self, low: usize, high: usize) -> usize {
        let section = Span::new(low, high);

        // Uniformly random pivot within the partition.
        let pivot_idx = self.rng.gen_range(low..=high);
        self.core.emit(SortPhase::PivotSelected {
            pivot: pivot_idx,
            section,
        });

        // Relocate the pivot to the section end.
        self.core.seq.swap(pivot_idx, high);
        let pivot_idx = high;

        // Classification pass: one counted compare per non-pivot element.
        let mut left = Vec::new();
        let mut right = Vec::new();
        for j in low..high {
            if self.core.seq.compare(j, pivot_idx) {
                left.push(j);
            } else {
                right.push(j);
            }
        }

        self.core.emit(SortPhase::Partitioning {
            pivot: pivot_idx,
            left,
            right,
            section,
        });

        // Move phase: re-compare and pull <=-pivot elements leftward.
        let mut i = low;
        for j in low..high {
            if self.core.seq.compare(j, pivot_idx) {
                if i != j {
                    self.core.seq.swap(i, j);
                    self.core.emit(SortPhase::Swapping {
                        pair: (i, j),
                        pivot: pivot_idx,
                        section,
                    });
                }
                i += 1;
            }
        }

        // Pivot into its resting index. Unconditional; a self-swap still
        // charges the full 4 accesses.
        self.core.seq.swap(i, high);
        self.core.emit(SortPhase::PivotPlaced { pivot: i, section });

        i
    }
}

impl<T: PrimInt> Sorter<T> for QuickSort<T> {
    fn sort(&mut self, input: &[T]) -> Vec<T> {
        self.core.begin(input);
        self.reseed();
        let n = self.core.seq.len();
        if n > 1 {
            self.quicksort(0, n - 1);
        }
        let sorted = self.core.finish();
        debug!("{} done: {}", self.name(), self.core.stats());
        sorted
    }

    fn name(&self) -> &'static str {
        "QuickSort"
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
