//! Error types for class break computation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while configuring
//! a classifier or validating its input data.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value (class count, index, name).
//! * **Deferred**: Builder misuse is recorded and reported when `.build()` runs.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Non-finite observations.
//! 2. **Parameter validation**: Class count, restart count, search length.
//! 3. **Dispatch**: Unknown classification method names.
//!
//! ## Invariants
//!
//! * An empty (or null-only) dataset is never an error; it yields an empty result.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for class break operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreaksError {
    /// The number of classes must be at least 1.
    InvalidClassCount(usize),

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Restart count exceeds the supported maximum.
    InvalidIterations(usize),

    /// Local search length must be between 1 and the supported maximum.
    InvalidMaxSearch(usize),

    /// Classification method name was not recognised.
    UnknownMethod(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for BreaksError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidClassCount(k) => {
                write!(f, "Invalid class count: {k} (must be at least 1)")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidIterations(iter) => {
                write!(f, "Invalid iterations: {iter} (must be in [0, 1000])")
            }
            Self::InvalidMaxSearch(steps) => {
                write!(f, "Invalid max_search: {steps} (must be in [1, 1000])")
            }
            Self::UnknownMethod(name) => {
                write!(
                    f,
                    "Unknown classification method: '{name}' (expected equal_interval, quantile, head_tail or jenks)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for BreaksError {}
