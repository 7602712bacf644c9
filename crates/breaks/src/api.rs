//! High-level API for class break computation.
//!
//! ## Purpose
//!
//! This module is the only entry point calling code needs. It provides a
//! fluent builder that selects a classification method, validates the
//! configuration, and turns raw observations into a [`ClassificationResult`],
//! plus one free function per method for quick use.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Normalising**: Empty and null-only input yields an empty result, not an error.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`BreaksBuilder`] via `Breaks::new()`.
//! 2. Chain configuration methods (`.classes()`, `.method()`, etc.).
//! 3. Call `.build()` to get a [`Classifier`], then `.classify(&values)`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::Debug;
use core::str::FromStr;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::equal_interval::equal_interval_breaks;
use crate::algorithms::head_tail::head_tail_breaks;
use crate::algorithms::quantile::quantile_breaks;
use crate::engine::executor::{JenksConfig, JenksExecutor, RestartPassFn};
use crate::engine::validator::Validator;
use crate::primitives::frequency::FrequencyTable;
use crate::primitives::input::ClassifyInput;
use crate::primitives::random::DEFAULT_SEED;
use crate::primitives::sorting::sort_values;

// Publicly re-exported types
pub use crate::algorithms::jenks::DEFAULT_MAX_SEARCH;
pub use crate::algorithms::method::Method;
pub use crate::engine::output::ClassificationResult;
pub use crate::evaluation::assignment::BoundaryKind;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::BreaksError;

/// Default number of classes.
pub const DEFAULT_CLASSES: usize = 5;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a classifier.
#[derive(Debug, Clone)]
pub struct BreaksBuilder<T> {
    /// Number of classes.
    pub classes: Option<usize>,

    /// Classification method.
    pub method: Option<Method>,

    /// Jenks local-search runs (0 = `floor(ln n) + 1`).
    pub iterations: Option<usize>,

    /// Jenks iterations per local-search run.
    pub max_search: Option<usize>,

    /// Report Jenks upper class edges instead of lower ones.
    pub invert: Option<bool>,

    /// Seed for Jenks random restarts.
    pub seed: Option<u64>,

    /// Compute fit diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Error recorded while configuring (e.g. an unknown method name).
    deferred_error: Option<BreaksError>,

    // ======================================
    // DEV
    // ======================================
    /// Custom restart pass function.
    #[doc(hidden)]
    pub custom_restart_pass: Option<RestartPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BreaksBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BreaksBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            classes: None,
            method: None,
            iterations: None,
            max_search: None,
            invert: None,
            seed: None,
            return_diagnostics: None,
            deferred_error: None,
            custom_restart_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the number of classes (default 5).
    pub fn classes(mut self, k: usize) -> Self {
        if self.classes.is_some() {
            self.duplicate_param = Some("classes");
        }
        self.classes = Some(k);
        self
    }

    /// Set the classification method (default Jenks).
    pub fn method(mut self, method: Method) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Select the classification method by name (e.g. `"quantile"`).
    pub fn method_name(mut self, name: &str) -> Self {
        match Method::from_str(name) {
            Ok(method) => self.method(method),
            Err(err) => {
                self.deferred_error.get_or_insert(err);
                self
            }
        }
    }

    /// Set the number of Jenks local-search runs (0 selects `floor(ln n) + 1`).
    pub fn iterations(mut self, iterations: usize) -> Self {
        if self.iterations.is_some() {
            self.duplicate_param = Some("iterations");
        }
        self.iterations = Some(iterations);
        self
    }

    /// Set the maximum iterations per Jenks local-search run (default 50).
    pub fn max_search(mut self, max_search: usize) -> Self {
        if self.max_search.is_some() {
            self.duplicate_param = Some("max_search");
        }
        self.max_search = Some(max_search);
        self
    }

    /// Report Jenks boundaries as class upper edges.
    pub fn invert(mut self) -> Self {
        self.invert = Some(true);
        self
    }

    /// Set the seed for Jenks random restarts.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Include fit diagnostics (class counts, SDCM, GVF) in the output.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    // ======================================
    // DEV
    // ======================================

    /// Set a custom restart pass function.
    #[doc(hidden)]
    pub fn custom_restart_pass(mut self, pass: RestartPassFn<T>) -> Self {
        self.custom_restart_pass = Some(pass);
        self
    }

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the classifier.
    pub fn build(self) -> Result<Classifier<T>, BreaksError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let classes = self.classes.unwrap_or(DEFAULT_CLASSES);
        Validator::validate_classes(classes)?;

        let iterations = self.iterations.unwrap_or(0);
        Validator::validate_iterations(iterations)?;

        let max_search = self.max_search.unwrap_or(DEFAULT_MAX_SEARCH);
        Validator::validate_max_search(max_search)?;

        Ok(Classifier {
            method: self.method.unwrap_or_default(),
            return_diagnostics: self.return_diagnostics.unwrap_or(false),
            jenks: JenksConfig {
                classes,
                iterations,
                max_search,
                invert: self.invert.unwrap_or(false),
                seed: self.seed.unwrap_or(DEFAULT_SEED),
                custom_restart_pass: self.custom_restart_pass,
            },
        })
    }
}

// ============================================================================
// Classifier
// ============================================================================

/// Validated, reusable classifier.
#[derive(Debug, Clone)]
pub struct Classifier<T> {
    method: Method,
    return_diagnostics: bool,
    jenks: JenksConfig<T>,
}

impl<T: Float + Debug> Classifier<T> {
    /// Selected method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Number of classes requested.
    pub fn classes(&self) -> usize {
        self.jenks.classes
    }

    /// Classify the non-null observations of `input`.
    pub fn classify<I>(&self, input: &I) -> Result<ClassificationResult<T>, BreaksError>
    where
        I: ClassifyInput<T> + ?Sized,
    {
        self.classify_slice(&input.as_observations())
    }

    /// Classify a slice of observations.
    pub fn classify_slice(&self, values: &[T]) -> Result<ClassificationResult<T>, BreaksError> {
        Validator::validate_values(values)?;

        let k = self.jenks.classes;
        let kind = boundary_kind(self.method, self.jenks.invert);
        if values.is_empty() {
            return Ok(ClassificationResult::empty(self.method, k, kind));
        }

        let sorted = sort_values(values);

        let mut fit_score = None;
        let mut runs = None;
        let boundaries = match self.method {
            Method::EqualInterval => equal_interval_breaks(&sorted, k),
            Method::Quantile => quantile_breaks(&sorted, k),
            Method::HeadTail => head_tail_breaks(&sorted, k),
            Method::Jenks => {
                let table = FrequencyTable::from_sorted(&sorted);
                match JenksExecutor::run_with_config(&table, &self.jenks) {
                    Some(output) => {
                        fit_score = Some(output.fit_score);
                        runs = Some(output.runs);
                        output.boundaries
                    }
                    None => Vec::new(),
                }
            }
        };

        let diagnostics = self
            .return_diagnostics
            .then(|| Diagnostics::compute(&sorted, &boundaries, kind));

        Ok(ClassificationResult {
            method: self.method,
            classes: k,
            boundaries,
            boundary_kind: kind,
            observations: sorted.len(),
            min: sorted.first().copied(),
            max: sorted.last().copied(),
            fit_score,
            runs,
            diagnostics,
        })
    }
}

/// Edge recorded by the boundaries of `method`.
pub fn boundary_kind(method: Method, invert: bool) -> BoundaryKind {
    match method {
        Method::Jenks if !invert => BoundaryKind::Lower,
        _ => BoundaryKind::Upper,
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Upper edges of `k` equal-width classes. Empty input yields no boundaries.
pub fn equal_interval<T: Float + Debug>(values: &[T], k: usize) -> Result<Vec<T>, BreaksError> {
    classify_with(values, k, Method::EqualInterval).map(|r| r.boundaries)
}

/// Upper edges of `k` quantile classes. Empty input yields no boundaries.
pub fn quantile<T: Float + Debug>(values: &[T], k: usize) -> Result<Vec<T>, BreaksError> {
    classify_with(values, k, Method::Quantile).map(|r| r.boundaries)
}

/// Head/tail boundaries for up to `k` classes. Empty input yields no boundaries.
pub fn head_tail<T: Float + Debug>(values: &[T], k: usize) -> Result<Vec<T>, BreaksError> {
    classify_with(values, k, Method::HeadTail).map(|r| r.boundaries)
}

/// Jenks natural breaks for `k` classes.
///
/// `iterations = 0` selects `floor(ln n) + 1` runs; `invert` reports upper
/// class edges. The result carries `fit_score` unless the input was empty.
pub fn jenks<T: Float + Debug>(
    values: &[T],
    k: usize,
    iterations: usize,
    invert: bool,
) -> Result<ClassificationResult<T>, BreaksError> {
    let mut builder = BreaksBuilder::new()
        .classes(k)
        .method(Method::Jenks)
        .iterations(iterations);
    if invert {
        builder = builder.invert();
    }
    builder.build()?.classify_slice(values)
}

fn classify_with<T: Float + Debug>(
    values: &[T],
    k: usize,
    method: Method,
) -> Result<ClassificationResult<T>, BreaksError> {
    BreaksBuilder::new()
        .classes(k)
        .method(method)
        .build()?
        .classify_slice(values)
}
