//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the primitive abstractions and data structures used
//! throughout the crate. It has zero internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error types (SortError)
//! - **stats**: Comparison/swap/access counters
//! - **span**: Inclusive index ranges for event payloads
//! - **sequence**: The instrumented working sequence
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms (bubble, insertion, selection, merge, quick)
//!   ↓
//! Layer 2: Engine (core, events, complexity)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `SortError` enum
/// - Algorithm-lookup failure reporting
pub mod errors;

/// Counter tracking for sort instrumentation.
///
/// Provides:
/// - The `SortStats` triple (comparisons, swaps, accesses)
/// - Reset and display helpers
pub mod stats;

/// Inclusive index ranges.
///
/// Provides:
/// - The `Span` struct used by event payloads
/// - Containment and length helpers
pub mod span;

/// The instrumented working sequence.
///
/// Provides:
/// - Counted compare/swap primitives
/// - Counted single-slot reads and writes
/// - Defensive-copy loading and sorted-output transfer
pub mod sequence;
