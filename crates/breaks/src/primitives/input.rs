//! Input abstractions for classification.
//!
//! ## Purpose
//!
//! Classification input arrives either as plain numbers or as nullable
//! column values. This module lets `classify` accept both through a single
//! interface, dropping nulls before any classifier sees the data.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Plain slices are borrowed, not copied.
//! * **Null handling**: `None` entries are excluded; an all-`None` input is empty.
//!
//! ## Invariants
//!
//! * The observation view contains every non-null element, in input order.
//!
//! ## Non-goals
//!
//! * This module does not check finiteness or sort the data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{borrow::Cow, vec::Vec};
#[cfg(feature = "std")]
use std::borrow::Cow;

// External dependencies
use num_traits::Float;

/// Trait for types that can be classified.
pub trait ClassifyInput<T: Float> {
    /// View the input as a sequence of non-null observations.
    fn as_observations(&self) -> Cow<'_, [T]>;
}

// Implemented per float type: a blanket `[T]` impl would overlap with
// `[Option<T>]` under coherence rules.
macro_rules! impl_classify_input {
    ($($t:ty),*) => {
        $(
            impl ClassifyInput<$t> for [$t] {
                fn as_observations(&self) -> Cow<'_, [$t]> {
                    Cow::Borrowed(self)
                }
            }

            impl ClassifyInput<$t> for Vec<$t> {
                fn as_observations(&self) -> Cow<'_, [$t]> {
                    Cow::Borrowed(self.as_slice())
                }
            }

            impl<const N: usize> ClassifyInput<$t> for [$t; N] {
                fn as_observations(&self) -> Cow<'_, [$t]> {
                    Cow::Borrowed(self.as_slice())
                }
            }

            impl ClassifyInput<$t> for [Option<$t>] {
                fn as_observations(&self) -> Cow<'_, [$t]> {
                    Cow::Owned(self.iter().flatten().copied().collect())
                }
            }

            impl ClassifyInput<$t> for Vec<Option<$t>> {
                fn as_observations(&self) -> Cow<'_, [$t]> {
                    self.as_slice().as_observations()
                }
            }
        )*
    };
}

impl_classify_input!(f32, f64);
