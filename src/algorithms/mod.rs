//! Layer 3: Algorithms
//!
//! The five instrumented sorting algorithms.
//!
//! This layer implements the comparison sorts themselves. The algorithms are
//! textbook; the engineering content is *which* events fire and with *what*
//! payload, specified per variant in each module. All five compose the
//! engine's [`SortCore`] and touch the data only through its counted
//! primitives.
//!
//! # Module Organization
//!
//! - **bubble**: adjacent-swap sweeps with early exit
//! - **insertion**: shift-based insertion into a sorted prefix
//! - **selection**: minimum scans over the unsorted suffix
//! - **merge**: recursive divide and interleaved merge
//! - **quick**: random-pivot Lomuto partitioning
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Engine (core, events, complexity)
//!   ↓
//! Layer 1: Primitives (errors, stats, span, sequence)
//! ```
//!
//! [`SortCore`]: crate::engine::core::SortCore

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::boxed::Box;
#[cfg(feature = "std")]
use std::vec::Vec;

use crate::engine::complexity::Complexity;
use crate::engine::events::EventSink;
use crate::primitives::stats::SortStats;

/// Adjacent-swap sweeps with early exit.
pub mod bubble;

/// Shift-based insertion into a growing sorted prefix.
pub mod insertion;

/// Minimum scans over the shrinking unsorted suffix.
pub mod selection;

/// Recursive divide and interleaved merge.
pub mod merge;

/// Random-pivot Lomuto partitioning.
pub mod quick;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

// ============================================================================
// Sorter Contract
// ============================================================================

/// Common contract implemented by all five sorting algorithms.
///
/// `sort` copies the input defensively, resets the statistics, emits the
/// `initial` bookend, runs the algorithm, emits the `complete` bookend, and
/// returns the sorted copy. It is callable repeatedly on fresh inputs with
/// no residual state from a prior call. Empty and single-element inputs are
/// legal and short-circuit to already-sorted behavior with zero comparisons
/// and swaps, still emitting both bookends.
pub trait Sorter<T> {
    /// Sort a copy of `input`, emitting events along the way.
    fn sort(&mut self, input: &[T]) -> Vec<T>;

    /// Stable identifier, e.g. `"QuickSort"`.
    fn name(&self) -> &'static str;

    /// Static asymptotic metadata; independent of input.
    fn complexity(&self) -> Complexity;

    /// Counter snapshot from the last (or in-progress) `sort` call.
    fn stats(&self) -> SortStats;

    /// Install the event sink used by subsequent `sort` calls.
    fn set_sink(&mut self, sink: Box<dyn EventSink<T>>);

    /// Remove the sink; subsequent sorts run headless.
    fn clear_sink(&mut self);
}
