//! Static complexity metadata.
//!
//! ## Purpose
//!
//! This module defines [`Complexity`], the per-algorithm record of asymptotic
//! class labels external tooling displays alongside an animation. The labels
//! are declared constants, never computed.
//!
//! ## Design notes
//!
//! * Labels are `&'static str` so each algorithm exposes a `const`.
//! * This is informational metadata only; nothing in the engine branches on
//!   it.
//!
//! ## Visibility
//!
//! [`Complexity`] is part of the public API, returned by
//! `Sorter::complexity`.

// ============================================================================
// Complexity Descriptor
// ============================================================================

/// Asymptotic class labels for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    /// Best-case running time, e.g. `"O(n log n)"`.
    pub time_best: &'static str,

    /// Average-case running time.
    pub time_avg: &'static str,

    /// Worst-case running time.
    pub time_worst: &'static str,

    /// Auxiliary space.
    pub space: &'static str,
}

impl core::fmt::Display for Complexity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "best {}, avg {}, worst {}, space {}",
            self.time_best, self.time_avg, self.time_worst, self.space
        )
    }
}
