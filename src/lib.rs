//! Instrumented comparison sorts that emit visualization event streams.
//!
//! ## Purpose
//!
//! This crate animates classic comparison-based sorting algorithms for
//! teaching purposes. Each algorithm is re-implemented to produce a correct
//! sorted output, track comparison/swap/access counters, and push a
//! deterministic, complete sequence of visualization events describing every
//! state transition relevant to understanding the algorithm. A separate
//! rendering layer (not part of this crate) consumes the events and draws
//! them, typically as bar charts.
//!
//! ## Key concepts
//!
//! * **Instrumented sequence**: the working array is only touched through
//!   counted primitives (`compare`, `swap`, single read/write), keeping the
//!   statistics an honest proxy for memory traffic.
//! * **Event stream**: every sort is bookended by `initial` and `complete`
//!   events carrying full snapshots; in between, each algorithm emits its
//!   own vocabulary of phases (pivot selection, merges, shifts, ...).
//! * **Synchronous sink**: events are pushed into a caller-supplied sink on
//!   the calling thread, before the algorithm proceeds. The sink may block
//!   to pace an animation. Without a sink the algorithms run headless and
//!   still count statistics.
//!
//! ## Quick start
//!
//! ```
//! use sortviz::prelude::*;
//!
//! let mut sorter = InsertionSort::<i64>::new();
//! let sorted = sorter.sort(&[5, 3, 8, 1]);
//! assert_eq!(sorted, vec![1, 3, 5, 8]);
//! assert!(sorter.stats().comparisons > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API (algorithm selection, boxed construction)
//!   ↓
//! Layer 3: Algorithms (bubble, insertion, selection, merge, quick)
//!   ↓
//! Layer 2: Engine (core, events, complexity)
//!   ↓
//! Layer 1: Primitives (errors, stats, span, sequence)
//! ```
//!
//! ## Non-goals
//!
//! * No rendering, pacing, or color mapping (external collaborator).
//! * No parallel or out-of-core sorting.
//! * No comparator-based genericity: elements are totally-ordered integers.
//! * No cancellation primitive; aborting mid-animation is the sink's affair.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Layer 1: primitive building blocks (errors, counters, spans, the
/// instrumented sequence).
pub mod primitives;

/// Layer 2: execution substrate (shared sort core, event types, complexity
/// descriptors).
pub mod engine;

/// Layer 3: the five sorting algorithms and the [`Sorter`] trait.
///
/// [`Sorter`]: algorithms::Sorter
pub mod algorithms;

/// Layer 4: public entry points (algorithm selection by name, boxed
/// construction for driver layers).
pub mod api;

/// Convenience re-exports of the stable public surface.
pub mod prelude {
    pub use crate::algorithms::{
        BubbleSort, InsertionSort, MergeSort, QuickSort, SelectionSort, Sorter,
    };
    pub use crate::api::Algorithm;
    pub use crate::engine::complexity::Complexity;
    pub use crate::engine::events::{EventSink, SortEvent, SortPhase};
    pub use crate::primitives::errors::SortError;
    pub use crate::primitives::span::Span;
    pub use crate::primitives::stats::SortStats;
}
