//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer maps observations back onto class boundaries and measures the
//! quality of a classification.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Class membership under the renderer's range predicates.
pub mod assignment;

/// Fit quality metrics.
pub mod diagnostics;
