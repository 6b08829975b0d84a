//! Visualization event types and the sink seam.
//!
//! ## Purpose
//!
//! This module defines the contract between the sorting algorithms and
//! whatever draws them: [`SortEvent`], an immutable record describing one
//! instant of the algorithm's execution, and [`EventSink`], the synchronous
//! callback the events are pushed through. The event stream is the *only*
//! signal a renderer (or a test) has of algorithm progress, so every
//! mandated phase fires even when no visual change occurs.
//!
//! ## Design notes
//!
//! * **Tagged payloads**: [`SortPhase`] carries exactly the fields each
//!   state needs, instead of an untyped bag of optional fields. This makes
//!   "every referenced index is valid" checkable per variant.
//! * **Borrowed snapshots**: every event carries the full live sequence by
//!   reference. Events are transient; the core never stores them, and the
//!   borrow ends when the sink returns.
//! * **Synchronous push**: emission is a direct, blocking call into the
//!   sink before the algorithm proceeds. A sink that sleeps paces the
//!   animation; there is no async boundary and no queue.
//! * `state()` exposes the snake_case phase label so loosely-coupled
//!   renderers can switch on strings.
//!
//! ## Key concepts
//!
//! ### Bookending
//!
//! Every sort emits exactly one `Initial` event (before any algorithm
//! work) and exactly one `Complete` event (after), regardless of input
//! size. All other phases belong to individual algorithms; see each
//! algorithm module for its vocabulary and firing rules.
//!
//! ### Sorted regions
//!
//! Several phases carry an `Option<Span>` sorted region: the contiguous
//! range the current algorithm's invariant already knows to be final. Its
//! meaning differs per algorithm (trailing suffix for bubble, prefix for
//! insertion/selection) and it is `None` until such a region exists.
//!
//! ## Invariants
//!
//! * Every index or span in a payload is in range for the snapshot the
//!   event carries.
//! * Emission order is deterministic for a fixed algorithm, input, and
//!   pivot seed.
//!
//! ## Non-goals
//!
//! * No rendering, pacing, or color mapping.
//! * No buffering or replay; a sink that wants history records it itself.
//!
//! ## Visibility
//!
//! All types here are part of the public API; this is the crate's primary
//! output surface.

use crate::primitives::span::Span;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Event Envelope
// ============================================================================

/// One instant of a sort's execution, pushed to the sink and discarded.
#[derive(Debug)]
pub struct SortEvent<'a, T> {
    /// Full snapshot of the working sequence at emission time.
    pub data: &'a [T],

    /// Phase tag plus the state-dependent payload.
    pub phase: SortPhase,
}

impl<T> SortEvent<'_, T> {
    /// Snake_case label of the phase (`"initial"`, `"pivot_selected"`, ...).
    pub fn state(&self) -> &'static str {
        self.phase.state()
    }
}

// ============================================================================
// Phase Payloads
// ============================================================================

/// Phase tag with the payload that state requires.
///
/// Variants are grouped by the algorithm that emits them; `Comparing` and
/// `Swapped` are shared by the three quadratic sorts, which report the same
/// payload shape for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortPhase {
    /// First event of every sort, before any algorithm work.
    Initial,

    /// Last event of every sort, after the sequence is non-decreasing.
    Complete,

    // ------------------------------------------------------------------
    // QuickSort
    // ------------------------------------------------------------------
    /// A section is about to be partitioned.
    Working {
        /// The `[low, high]` partition being worked on.
        section: Span,
    },

    /// A pivot index was chosen inside the section.
    PivotSelected {
        /// Index of the chosen pivot (before relocation to the section end).
        pivot: usize,
        /// The `[low, high]` partition being worked on.
        section: Span,
    },

    /// Every non-pivot element has been classified against the pivot.
    Partitioning {
        /// Pivot index (now at the section end).
        pivot: usize,
        /// Indices holding elements `<=` pivot.
        left: Vec<usize>,
        /// Indices holding elements `>` pivot.
        right: Vec<usize>,
        /// The `[low, high]` partition being worked on.
        section: Span,
    },

    /// One physical swap during the move phase of partitioning.
    Swapping {
        /// The two indices exchanged.
        pair: (usize, usize),
        /// Pivot index (still at the section end).
        pivot: usize,
        /// The `[low, high]` partition being worked on.
        section: Span,
    },

    /// The pivot reached its final resting index.
    PivotPlaced {
        /// Resting index of the pivot; final for the whole sort.
        pivot: usize,
        /// The `[low, high]` partition that was worked on.
        section: Span,
    },

    // ------------------------------------------------------------------
    // MergeSort
    // ------------------------------------------------------------------
    /// A section is about to be split and recursed into.
    Dividing {
        /// The `[left, right]` section being divided.
        section: Span,
        /// Split index; recursion covers `[left, mid]` and `[mid+1, right]`.
        mid: usize,
    },

    /// Two adjacent sorted runs are about to be merged.
    Merging {
        /// The left run.
        left: Span,
        /// The right run.
        right: Span,
    },

    /// One element was written to the output range during interleaved copy.
    MergeProgress {
        /// The `[left, right]` output range of the merge.
        section: Span,
        /// Index just written.
        cursor: usize,
    },

    /// A merge finished; the section is now a single sorted run.
    Merged {
        /// The `[left, right]` range that is now sorted.
        section: Span,
    },

    // ------------------------------------------------------------------
    // BubbleSort
    // ------------------------------------------------------------------
    /// An outer pass is starting.
    PassStart {
        /// Passes completed so far.
        pass: usize,
        /// Trailing range already final, once at least one pass completed.
        sorted: Option<Span>,
    },

    /// Two positions are about to be compared (bubble/insertion/selection).
    Comparing {
        /// The indices under comparison. For selection, `.0` is the running
        /// minimum; for insertion, `.1` is the element being placed.
        pair: (usize, usize),
        /// The region the algorithm already knows to be final.
        sorted: Option<Span>,
    },

    /// A swap just occurred (bubble adjacent swap, selection minimum swap).
    Swapped {
        /// The two indices exchanged.
        pair: (usize, usize),
        /// The region the algorithm already knows to be final.
        sorted: Option<Span>,
    },

    // ------------------------------------------------------------------
    // InsertionSort
    // ------------------------------------------------------------------
    /// The element at `index` is about to be placed into the sorted prefix.
    Selecting {
        /// Index of the element being placed.
        index: usize,
        /// Sorted prefix `[0, index-1]`.
        sorted: Option<Span>,
    },

    /// One slot shifted right to open space for the element being placed.
    Shifting {
        /// Source index of the shift.
        from: usize,
        /// Destination index (one past the source).
        to: usize,
        /// Sorted prefix before this outer step.
        sorted: Option<Span>,
    },

    /// The element being placed reached its resting index.
    Inserted {
        /// Resting index of the placed element.
        index: usize,
        /// Sorted prefix `[0, i]` after this outer step.
        sorted: Option<Span>,
    },

    // ------------------------------------------------------------------
    // SelectionSort
    // ------------------------------------------------------------------
    /// The scan for the minimum of the unsorted suffix is starting.
    Searching {
        /// Initial candidate minimum (the first unsorted index).
        min: usize,
        /// Sorted prefix, once it exists.
        sorted: Option<Span>,
        /// The unsorted suffix being scanned.
        unsorted: Span,
    },

    /// A strictly smaller candidate minimum was found.
    NewMin {
        /// The new candidate minimum index.
        min: usize,
        /// Sorted prefix, once it exists.
        sorted: Option<Span>,
    },

    /// The minimum was already at the outer index; no swap needed.
    InPlace {
        /// The outer index that is already final.
        index: usize,
        /// Sorted prefix `[0, i]` after this outer step.
        sorted: Option<Span>,
    },
}

impl SortPhase {
    /// Snake_case label of the phase.
    pub fn state(&self) -> &'static str {
        match self {
            SortPhase::Initial => "initial",
            SortPhase::Complete => "complete",
            SortPhase::Working { .. } => "working",
            SortPhase::PivotSelected { .. } => "pivot_selected",
            SortPhase::Partitioning { .. } => "partitioning",
            SortPhase::Swapping { .. } => "swapping",
            SortPhase::PivotPlaced { .. } => "pivot_placed",
            SortPhase::Dividing { .. } => "dividing",
            SortPhase::Merging { .. } => "merging",
            SortPhase::MergeProgress { .. } => "merge_progress",
            SortPhase::Merged { .. } => "merged",
            SortPhase::PassStart { .. } => "pass_start",
            SortPhase::Comparing { .. } => "comparing",
            SortPhase::Swapped { .. } => "swapped",
            SortPhase::Selecting { .. } => "selecting",
            SortPhase::Shifting { .. } => "shifting",
            SortPhase::Inserted { .. } => "inserted",
            SortPhase::Searching { .. } => "searching",
            SortPhase::NewMin { .. } => "new_min",
            SortPhase::InPlace { .. } => "in_place",
        }
    }
}

// ============================================================================
// Sink
// ============================================================================

/// Synchronous receiver of visualization events.
///
/// Implemented for any `FnMut(&SortEvent<T>)` closure. The sort blocks on
/// `on_event` returning; a sink that sleeps paces the whole animation. Sink
/// behavior must not affect sort correctness; the algorithms never read
/// anything back from it.
pub trait EventSink<T> {
    /// Receive one event. Called on the sorting thread.
    fn on_event(&mut self, event: &SortEvent<'_, T>);
}

impl<T, F> EventSink<T> for F
where
    F: for<'a> FnMut(&SortEvent<'a, T>),
{
    fn on_event(&mut self, event: &SortEvent<'_, T>) {
        self(event);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_labels_are_snake_case() {
        assert_eq!(SortPhase::Initial.state(), "initial");
        assert_eq!(
            SortPhase::PivotSelected {
                pivot: 0,
                section: Span::new(0, 1)
            }
            .state(),
            "pivot_selected"
        );
        assert_eq!(
            SortPhase::MergeProgress {
                section: Span::new(0, 1),
                cursor: 0
            }
            .state(),
            "merge_progress"
        );
        assert_eq!(
            SortPhase::NewMin {
                min: 2,
                sorted: None
            }
            .state(),
            "new_min"
        );
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = 0usize;
        {
            let mut sink = |_event: &SortEvent<'_, i64>| seen += 1;
            let event = SortEvent {
                data: &[1, 2][..],
                phase: SortPhase::Initial,
            };
            sink.on_event(&event);
        }
        assert_eq!(seen, 1);
    }
}
