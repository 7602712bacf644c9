//! High-level API for class breaks with parallel execution support.
//!
//! ## Purpose
//!
//! This module mirrors the `breaks` builder and adds a `parallel` switch.
//! With parallel execution enabled (the default), Jenks random restarts are
//! evaluated on all available CPU cores. The other three methods are cheap
//! single passes and run unchanged.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Wraps the base `breaks` builder.
//! * **Parallel-First**: Defaults to parallel execution.
//! * **Identical output**: Parallel and sequential runs return the same result.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelBreaksBuilder`] via `Breaks::new()`.
//! 2. Chain configuration methods (`.classes()`, `.method()`, etc.).
//! 3. Call `.build()` and then `.classify(&values)`.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::restart_pass_parallel;

// External dependencies
use num_traits::Float;
use std::fmt::Debug;

// Export dependencies from breaks crate
use breaks::internals::api::BreaksBuilder;

// Publicly re-exported types
pub use breaks::internals::api::{
    BoundaryKind, BreaksError, ClassificationResult, Classifier, Diagnostics, Method,
    equal_interval, head_tail, quantile,
};
pub use breaks::internals::primitives::input::ClassifyInput;

// ============================================================================
// Extended Builder
// ============================================================================

/// Builder for a classifier with parallel Jenks restarts.
#[derive(Debug, Clone)]
pub struct ParallelBreaksBuilder<T: Float> {
    /// Base builder from the breaks crate
    pub base: BreaksBuilder<T>,
}

impl<T: Float + Send + Sync> Default for ParallelBreaksBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Send + Sync> ParallelBreaksBuilder<T> {
    /// Create a new builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the breaks builder
    /// * parallel: true (fastBreaks extension)
    pub fn new() -> Self {
        Self {
            base: BreaksBuilder::new(),
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the number of classes.
    pub fn classes(mut self, k: usize) -> Self {
        self.base = self.base.classes(k);
        self
    }

    /// Set the classification method.
    pub fn method(mut self, method: Method) -> Self {
        self.base = self.base.method(method);
        self
    }

    /// Select the classification method by name.
    pub fn method_name(mut self, name: &str) -> Self {
        self.base = self.base.method_name(name);
        self
    }

    /// Set the number of Jenks local-search runs (0 selects the default).
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.base = self.base.iterations(iterations);
        self
    }

    /// Set the maximum iterations per Jenks local-search run.
    pub fn max_search(mut self, max_search: usize) -> Self {
        self.base = self.base.max_search(max_search);
        self
    }

    /// Report Jenks boundaries as class upper edges.
    pub fn invert(mut self) -> Self {
        self.base = self.base.invert();
        self
    }

    /// Set the seed for Jenks random restarts.
    pub fn seed(mut self, seed: u64) -> Self {
        self.base = self.base.seed(seed);
        self
    }

    /// Include fit diagnostics in the output.
    pub fn return_diagnostics(mut self) -> Self {
        self.base = self.base.return_diagnostics();
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the classifier.
    #[allow(unused_mut)]
    pub fn build(self) -> Result<Classifier<T>, BreaksError> {
        let mut base = self.base;

        #[cfg(feature = "cpu")]
        if base.parallel.unwrap_or(true) {
            base = base.custom_restart_pass(restart_pass_parallel::<T>);
        }

        base.build()
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Jenks natural breaks for `k` classes with parallel restarts.
///
/// Same contract as `breaks::prelude::jenks`.
pub fn jenks<T: Float + Debug + Send + Sync>(
    values: &[T],
    k: usize,
    iterations: usize,
    invert: bool,
) -> Result<ClassificationResult<T>, BreaksError> {
    let mut builder = ParallelBreaksBuilder::new()
        .classes(k)
        .method(Method::Jenks)
        .iterations(iterations);
    if invert {
        builder = builder.invert();
    }
    builder.build()?.classify_slice(values)
}
