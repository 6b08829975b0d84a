//! Layer 4: API
//!
//! ## Purpose
//!
//! This module is the entry point for driver layers (CLIs, notebooks,
//! renderers) that select an algorithm by name rather than by concrete
//! type. It provides the [`Algorithm`] selector, lenient name parsing with
//! aliases, and boxed construction of the matching sorter.
//!
//! ## Design notes
//!
//! * The core sorters have no notion of "algorithm name"; lookup failures
//!   belong here, surfaced as [`SortError::UnknownAlgorithm`].
//! * Parsing is case-insensitive and accepts natural aliases
//!   (`"quicksort"`, `"quick"`) alongside the canonical snake_case names.
//! * `build` returns `Box<dyn Sorter<T>>` so drivers can hold any variant
//!   uniformly; callers wanting seeds or concrete types construct the
//!   sorter structs directly.
//!
//! ## Visibility
//!
//! Everything here is part of the public API and re-exported via the
//! prelude.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::boxed::Box;
#[cfg(feature = "std")]
use std::string::ToString;

use core::fmt;
use core::str::FromStr;

use num_traits::PrimInt;

use crate::algorithms::{
    BubbleSort, InsertionSort, MergeSort, QuickSort, SelectionSort, Sorter,
};
use crate::primitives::errors::SortError;

// ============================================================================
// Algorithm Selector
// ============================================================================

/// Selector for the five available sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Random-pivot quicksort.
    Quick,
    /// Top-down merge sort.
    Merge,
    /// Bubble sort with early exit.
    Bubble,
    /// Shift-based insertion sort.
    Insertion,
    /// Minimum-scan selection sort.
    Selection,
}

impl Algorithm {
    /// Every available algorithm, in display order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
    ];

    /// Canonical snake_case name, as driver layers list it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Quick => "quick_sort",
            Algorithm::Merge => "merge_sort",
            Algorithm::Bubble => "bubble_sort",
            Algorithm::Insertion => "insertion_sort",
            Algorithm::Selection => "selection_sort",
        }
    }

    /// Construct a boxed sorter for this algorithm.
    pub fn build<T: PrimInt + 'static>(self) -> Box<dyn Sorter<T>> {
        match self {
            Algorithm::Quick => Box::new(QuickSort::new()),
            Algorithm::Merge => Box::new(MergeSort::new()),
            Algorithm::Bubble => Box::new(BubbleSort::new()),
            Algorithm::Insertion => Box::new(InsertionSort::new()),
            Algorithm::Selection => Box::new(SelectionSort::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "quick_sort" | "quicksort" | "quick" => Ok(Algorithm::Quick),
            "merge_sort" | "mergesort" | "merge" => Ok(Algorithm::Merge),
            "bubble_sort" | "bubblesort" | "bubble" => Ok(Algorithm::Bubble),
            "insertion_sort" | "insertionsort" | "insertion" => Ok(Algorithm::Insertion),
            "selection_sort" | "selectionsort" | "selection" => Ok(Algorithm::Selection),
            _ => Err(SortError::UnknownAlgorithm {
                name: name.to_string(),
            }),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names_and_aliases() {
        assert_eq!("quick_sort".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert_eq!("QuickSort".parse::<Algorithm>(), Ok(Algorithm::Quick));
        assert_eq!("merge".parse::<Algorithm>(), Ok(Algorithm::Merge));
        assert_eq!("BUBBLE".parse::<Algorithm>(), Ok(Algorithm::Bubble));
    }

    #[test]
    fn rejects_unknown_names_with_options_listed() {
        let err = "heap_sort".parse::<Algorithm>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("heap_sort"));
        assert!(message.contains("quick_sort"));
    }

    #[test]
    fn round_trips_every_canonical_name() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.as_str().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn builds_a_working_boxed_sorter() {
        for algorithm in Algorithm::ALL {
            let mut sorter = algorithm.build::<i64>();
            assert_eq!(sorter.sort(&[3, 1, 2]), vec![1, 2, 3]);
        }
    }
}
