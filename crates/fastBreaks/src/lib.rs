//! # fastBreaks: Parallel class breaks for Rust
//!
//! A multi-threaded front end for the [`breaks`] crate. Jenks natural breaks
//! restarts are independent local searches; `fastBreaks` evaluates them in
//! parallel with `rayon` while returning exactly the boundaries and fit score
//! the sequential engine would.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastBreaks::prelude::*;
//!
//! let values: Vec<f64> = (0..1_000).map(|i| ((i * 37) % 101) as f64).collect();
//!
//! let result = Breaks::new()
//!     .classes(5)
//!     .method(Jenks)
//!     .iterations(16)   // 16 local-search runs spread across cores
//!     .parallel(true)   // default
//!     .build()?
//!     .classify(&values)?;
//!
//! assert_eq!(result.boundaries.len(), 5);
//! # Result::<(), BreaksError>::Ok(())
//! ```
//!
//! ## Features
//!
//! * `cpu` (default): parallel restarts via `rayon`. Without it every run is
//!   sequential.

#![allow(non_snake_case)]

// Layer 5: Engine - parallel restart execution.
mod engine;

// High-level fluent API with parallel execution.
mod api;

// Standard fastBreaks prelude.
pub mod prelude {
    pub use crate::api::{
        BoundaryKind, BreaksError, ClassificationResult, Classifier, ClassifyInput, Diagnostics,
        Method,
        Method::{EqualInterval, HeadTail, Jenks, Quantile},
        ParallelBreaksBuilder as Breaks, equal_interval, head_tail, jenks, quantile,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
