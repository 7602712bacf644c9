//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer validates configuration and input, orchestrates the Jenks
//! multi-restart search, and defines the result type shared by all methods.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Jenks multi-restart execution.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for classification.
pub mod output;
