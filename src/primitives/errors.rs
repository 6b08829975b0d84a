//! Shared error types.
//!
//! ## Purpose
//!
//! This module defines [`SortError`], the crate's unified error enum. The
//! error surface is deliberately small: the core operates on an in-memory
//! numeric sequence with no I/O, so the only recoverable failure is a
//! driver-layer lookup of an algorithm by an unknown name. Internal
//! invariant violations (an event referencing an out-of-range index, a
//! counter bypass) are defects caught by tests, not runtime conditions.
//!
//! ## Design notes
//!
//! * Error messages name the offending value and list the valid options so
//!   driver layers can surface them verbatim.
//!
//! ## Visibility
//!
//! [`SortError`] is part of the public API and is returned by
//! `Algorithm::from_str`.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Errors surfaced by the public API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// An algorithm name did not match any known sorter.
    #[error(
        "unknown algorithm: {name}. Valid options: quick_sort, merge_sort, \
         bubble_sort, insertion_sort, selection_sort"
    )]
    UnknownAlgorithm {
        /// The name that failed to parse.
        name: String,
    },
}
