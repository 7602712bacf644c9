//! # breaks: Choropleth class breaks for Rust
//!
//! Classify a collection of numeric observations into a small number of
//! ordered classes for choropleth maps, legends and histograms.
//!
//! ## Methods
//!
//! | Method           | Boundaries                | Good for                          |
//! |------------------|---------------------------|-----------------------------------|
//! | `EqualInterval`  | upper edges               | evenly spread data                |
//! | `Quantile`       | upper edges (data points) | equal-count classes               |
//! | `HeadTail`       | iterated means            | heavy-tailed data                 |
//! | `Jenks`          | lower edges (or upper)    | natural groupings (min variance)  |
//!
//! Jenks natural breaks minimises the within-class variance with a local
//! search over the table of distinct values, restarted from seeded random
//! partitions. Identical inputs and parameters always give bit-identical
//! output.
//!
//! ## Quick Start
//!
//! ```rust
//! use breaks::prelude::*;
//!
//! let values: Vec<f64> = vec![1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0];
//!
//! let classifier = Breaks::new()
//!     .classes(3)
//!     .method(EqualInterval)
//!     .build()?;
//!
//! let result = classifier.classify(&values)?;
//! assert_eq!(result.boundaries, vec![19.0, 37.0, 55.0]);
//! # Result::<(), BreaksError>::Ok(())
//! ```
//!
//! ### Jenks natural breaks
//!
//! ```rust
//! use breaks::prelude::*;
//!
//! let values: Vec<f64> = vec![1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 20.0, 21.0, 22.0];
//!
//! let result = Breaks::new()
//!     .classes(3)
//!     .method(Jenks)
//!     .invert()              // report class upper edges
//!     .return_diagnostics()  // class counts and GVF
//!     .build()?
//!     .classify(&values)?;
//!
//! assert_eq!(result.boundaries, vec![3.0, 12.0, 22.0]);
//! assert_eq!(result.class_of(11.0), Some(1));
//! println!("{}", result);
//! # Result::<(), BreaksError>::Ok(())
//! ```
//!
//! ### Free functions
//!
//! ```rust
//! use breaks::prelude::*;
//!
//! let values = [0.0, 100.0];
//! assert_eq!(equal_interval(&values, 4)?, vec![25.0, 50.0, 75.0, 100.0]);
//! # Result::<(), BreaksError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Empty or null-only input is not an error: it yields a result without
//! boundaries. Errors are reserved for contract violations such as `k = 0`
//! or non-finite observations.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! breaks = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - the four classification methods.
mod algorithms;

// Layer 4: Evaluation - class assignment and diagnostics.
mod evaluation;

// Layer 5: Engine - validation, Jenks orchestration, results.
mod engine;

// High-level fluent API for classification.
mod api;

// Standard breaks prelude.
pub mod prelude {
    pub use crate::api::{
        BoundaryKind, BreaksBuilder as Breaks, BreaksError, ClassificationResult, Classifier,
        Diagnostics, Method,
        Method::{EqualInterval, HeadTail, Jenks, Quantile},
        equal_interval, head_tail, jenks, quantile,
    };
    pub use crate::primitives::input::ClassifyInput;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
