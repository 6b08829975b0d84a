//! Counter tracking for sort instrumentation.
//!
//! ## Purpose
//!
//! This module defines [`SortStats`], the triple of counters that every sort
//! maintains: comparisons performed, swaps performed, and total memory
//! accesses. The counters exist so a renderer (or a curious student) can see
//! the cost profile of an algorithm evolve as it runs.
//!
//! ## Key concepts
//!
//! ### Access accounting
//!
//! `accesses` is a unit of memory-traffic accounting, charged explicitly by
//! the instrumented sequence:
//!
//! * a counted comparison charges 2 (two reads),
//! * a counted swap charges 4 (two reads + two writes), even when it is a
//!   self-swap,
//! * any manual single read or write charges 1.
//!
//! ## Invariants
//!
//! * Counters are monotonically non-decreasing during a sort.
//! * Counters are reset to zero at the start of each `sort` invocation,
//!   never in between.
//!
//! ## Non-goals
//!
//! * This module does not decide *when* to count; that is the instrumented
//!   sequence's contract.
//!
//! ## Visibility
//!
//! [`SortStats`] is part of the public API and is the snapshot type returned
//! by `Sorter::stats`.

// ============================================================================
// Statistics
// ============================================================================

/// Counters accumulated over one `sort` invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Counted element comparisons.
    pub comparisons: u64,

    /// Counted element exchanges (self-swaps included).
    pub swaps: u64,

    /// Total memory-traffic units (see module docs for the charging rules).
    pub accesses: u64,
}

impl SortStats {
    /// Zero all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl core::fmt::Display for SortStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} comparisons, {} swaps, {} accesses",
            self.comparisons, self.swaps, self.accesses
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
