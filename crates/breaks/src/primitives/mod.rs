//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures and utilities used throughout the
//! crate. It has zero internal dependencies outside itself.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Sorting utilities.
pub mod sorting;

/// Input abstractions (plain and nullable observations).
pub mod input;

/// Frequency table of distinct values.
pub mod frequency;

/// Class partitions over the frequency table.
pub mod partition;

/// Seeded random partition sampling.
pub mod random;
