//! Layer 2: Engine
//!
//! Shared execution substrate for the sorting algorithms.
//!
//! This layer sits between the primitives (counted sequence, counters) and
//! the algorithm bodies. It owns the event vocabulary, the sink seam, and
//! the begin/emit/finish lifecycle every sort goes through.
//!
//! # Module Organization
//!
//! - **core**: The `SortCore` composition (sequence + sink) shared by all sorters
//! - **events**: Visualization event types and the sink trait
//! - **complexity**: Static asymptotic descriptors
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Algorithms (bubble, insertion, selection, merge, quick)
//!   ↓
//! Layer 2: Engine ← You are here
//!   ↓
//! Layer 1: Primitives (errors, stats, span, sequence)
//! ```

/// Shared execution core composed into each sorter.
///
/// Provides:
/// - Instrumented sequence + optional sink ownership
/// - The begin/emit/finish sort lifecycle
pub mod core;

/// Visualization event types.
///
/// Provides:
/// - The `SortEvent` envelope and `SortPhase` tagged union
/// - The synchronous `EventSink` trait
pub mod events;

/// Static complexity metadata.
///
/// Provides:
/// - The `Complexity` descriptor struct
/// - Display formatting for external tooling
pub mod complexity;
