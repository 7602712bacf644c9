//! Input validation for classifier configuration and data.
//!
//! ## Purpose
//!
//! This module checks classifier parameters and input observations before
//! any classification work starts.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not treat empty input as an error.
//! * This module does not sort, transform, or filter input data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::BreaksError;

/// Largest accepted restart count.
pub const MAX_ITERATIONS: usize = 1000;

/// Largest accepted local-search length.
pub const MAX_SEARCH_LIMIT: usize = 1000;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for classifier configuration and input data.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate that every observation is finite.
    pub fn validate_values<T: Float>(values: &[T]) -> Result<(), BreaksError> {
        for (i, v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(BreaksError::InvalidNumericValue(format!(
                    "values[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the requested number of classes.
    pub fn validate_classes(k: usize) -> Result<(), BreaksError> {
        if k == 0 {
            return Err(BreaksError::InvalidClassCount(k));
        }
        Ok(())
    }

    /// Validate the Jenks restart count (0 selects the heuristic default).
    pub fn validate_iterations(iterations: usize) -> Result<(), BreaksError> {
        if iterations > MAX_ITERATIONS {
            return Err(BreaksError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate the Jenks local-search length.
    pub fn validate_max_search(max_search: usize) -> Result<(), BreaksError> {
        if max_search == 0 || max_search > MAX_SEARCH_LIMIT {
            return Err(BreaksError::InvalidMaxSearch(max_search));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), BreaksError> {
        if let Some(param) = duplicate_param {
            return Err(BreaksError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
