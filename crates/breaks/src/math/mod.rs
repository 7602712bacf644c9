//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical building blocks: weighted class
//! statistics and discrete order statistics.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Weighted class mean and deviation.
pub mod statistics;

/// Nearest-rank percentiles.
pub mod rank;
