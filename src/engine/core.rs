//! Shared execution core composed into each sorter.
//!
//! ## Purpose
//!
//! This module provides [`SortCore`], the capability bundle every concrete
//! sorter is built around: the instrumented working sequence plus the
//! optional event sink. It owns the lifecycle common to all five
//! algorithms (defensive copy, counter reset, `initial` bookend, `complete`
//! bookend, output transfer) so the algorithm modules contain only their
//! own logic and event vocabulary.
//!
//! ## Design notes
//!
//! * Composition, not inheritance: sorters hold a `SortCore` field and call
//!   through it. The counted-access contract lives in one place.
//! * `emit` is a no-op without a sink; headless sorts still run and still
//!   count statistics.
//! * Emission borrows the live sequence for the snapshot; nothing is cloned
//!   per event.
//!
//! ## Key concepts
//!
//! ### Sort lifecycle
//!
//! 1. `begin(input)`: load a defensive copy, zero the counters, emit
//!    `Initial`.
//! 2. The algorithm body runs, emitting its phases through `emit` and
//!    mutating the data only through the sequence's counted primitives.
//! 3. `finish()`: emit `Complete`, transfer the sorted vector out.
//!
//! The lifecycle is re-entrant across calls: a second `begin` starts from a
//! fresh copy and zeroed counters, so no state leaks between sorts.
//!
//! ## Invariants
//!
//! * `Initial` is the first event of a sort and `Complete` the last,
//!   exactly once each, for every input size including 0 and 1.
//! * After `finish`, the counters remain readable until the next `begin`.
//!
//! ## Non-goals
//!
//! * No algorithm logic; ordering decisions belong to Layer 3.
//! * No cancellation: `finish` is always reached on the calling thread.
//!
//! ## Visibility
//!
//! `SortCore` is an internal seam shared by the algorithm modules. It is
//! public for custom-sorter authors but not re-exported in the prelude.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::boxed::Box;
#[cfg(feature = "std")]
use std::vec::Vec;

use num_traits::PrimInt;

use crate::engine::events::{EventSink, SortEvent, SortPhase};
use crate::primitives::sequence::InstrumentedSequence;
use crate::primitives::stats::SortStats;

// ============================================================================
// SortCore
// ============================================================================

/// Instrumented sequence + optional sink, composed into each sorter.
pub struct SortCore<T> {
    /// The counted working sequence.
    pub seq: InstrumentedSequence<T>,

    /// Destination for visualization events, when present.
    sink: Option<Box<dyn EventSink<T>>>,
}

impl<T: PrimInt> Default for SortCore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PrimInt> SortCore<T> {
    /// Create a headless core (no sink).
    pub fn new() -> Self {
        Self {
            seq: InstrumentedSequence::new(),
            sink: None,
        }
    }

    // ========================================================================
    // Sink Management
    // ========================================================================

    /// Install the event sink. Replaces any previous sink.
    pub fn set_sink(&mut self, sink: Box<dyn EventSink<T>>) {
        self.sink = Some(sink);
    }

    /// Remove the sink; subsequent sorts run headless.
    pub fn clear_sink(&mut self) {
        self.sink = None;
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Start a sort: defensive copy, counter reset, `Initial` bookend.
    pub fn begin(&mut self, input: &[T]) {
        self.seq.load(input);
        self.seq.reset_stats();
        self.emit(SortPhase::Initial);
    }

    /// End a sort: `Complete` bookend, then transfer the sorted vector.
    pub fn finish(&mut self) -> Vec<T> {
        self.emit(SortPhase::Complete);
        self.seq.take()
    }

    /// Push one event into the sink, if any, with the live snapshot.
    ///
    /// Blocks until the sink returns; the algorithm does not proceed while
    /// the renderer is drawing.
    pub fn emit(&mut self, phase: SortPhase) {
        if let Some(sink) = self.sink.as_deref_mut() {
            let event = SortEvent {
                data: self.seq.as_slice(),
                phase,
            };
            sink.on_event(&event);
        }
    }

    /// Snapshot of the counters.
    pub fn stats(&self) -> SortStats {
        self.seq.stats()
    }
}

impl<T> core::fmt::Debug for SortCore<T>
where
    T: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SortCore")
            .field("seq", &self.seq)
            .field("sink", &self.sink.as_ref().map(|_| "EventSink"))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn begin_finish_bookend_with_snapshots() {
        let log: Rc<RefCell<Vec<(Vec<i64>, SortPhase)>>> = Rc::default();
        let tap = Rc::clone(&log);

        let mut core: SortCore<i64> = SortCore::new();
        core.set_sink(Box::new(move |event: &SortEvent<'_, i64>| {
            tap.borrow_mut()
                .push((event.data.to_vec(), event.phase.clone()));
        }));

        core.begin(&[2, 1]);
        let out = core.finish();

        assert_eq!(out, vec![2, 1]);
        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], (vec![2, 1], SortPhase::Initial));
        assert_eq!(log[1], (vec![2, 1], SortPhase::Complete));
    }

    #[test]
    fn headless_sort_counts_without_emitting() {
        let mut core: SortCore<i64> = SortCore::new();
        core.begin(&[2, 1]);
        core.seq.swap(0, 1);
        let out = core.finish();
        assert_eq!(out, vec![1, 2]);
        assert_eq!(core.stats().swaps, 1);
    }

    #[test]
    fn begin_resets_counters_from_previous_sort() {
        let mut core: SortCore<i64> = SortCore::new();
        core.begin(&[2, 1]);
        core.seq.swap(0, 1);
        core.finish();

        core.begin(&[1, 2]);
        assert_eq!(core.stats(), SortStats::default());
    }
}
