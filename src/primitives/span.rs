//! Inclusive index ranges for event payloads.
//!
//! ## Purpose
//!
//! This module defines [`Span`], the contiguous index range `[lo, hi]` (both
//! bounds inclusive) used by visualization events to describe partitions,
//! merge sections, and sorted prefixes/suffixes.
//!
//! ## Design notes
//!
//! * Bounds are inclusive on both ends, matching how the algorithms reason
//!   about partitions (`[low, high]`) and sorted regions (`[0, i]`).
//! * `Span` is `Copy`; event payloads embed it by value.
//!
//! ## Invariants
//!
//! * `lo <= hi`. A span always covers at least one index; empty regions are
//!   represented as `Option<Span>::None` in event payloads.
//!
//! ## Visibility
//!
//! [`Span`] is part of the public API; renderers pattern-match on it when
//! coloring index ranges.

// ============================================================================
// Span
// ============================================================================

/// A contiguous, inclusive index range `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First index covered by the span.
    pub lo: usize,

    /// Last index covered by the span (inclusive).
    pub hi: usize,
}

impl Span {
    /// Create a span covering `[lo, hi]`.
    pub fn new(lo: usize, hi: usize) -> Self {
        debug_assert!(lo <= hi, "span bounds inverted: [{lo}, {hi}]");
        Self { lo, hi }
    }

    /// Number of indices covered.
    pub fn len(&self) -> usize {
        self.hi - self.lo + 1
    }

    /// Spans cover at least one index by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `index` falls inside the span.
    pub fn contains(&self, index: usize) -> bool {
        self.lo <= index && index <= self.hi
    }
}

impl core::fmt::Display for Span {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_inclusive_bounds() {
        let span = Span::new(2, 5);
        assert_eq!(span.len(), 4);
        assert!(span.contains(2));
        assert!(span.contains(5));
        assert!(!span.contains(6));
    }

    #[test]
    fn single_index_span() {
        let span = Span::new(3, 3);
        assert_eq!(span.len(), 1);
        assert!(span.contains(3));
    }
}
