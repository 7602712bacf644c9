//! Layer 3: Algorithms
//!
//! This layer implements the four classification methods. Equal interval,
//! quantile and head/tail work directly on sorted observations; Jenks works
//! on the frequency table and is orchestrated by the engine layer.

// Equal-width classes over the value range.
pub mod equal_interval;

// Discrete-percentile classes.
pub mod quantile;

// Iterated mean splits for heavy-tailed data.
pub mod head_tail;

// Jenks natural breaks local search.
pub mod jenks;

// Method selection and name dispatch.
pub mod method;
