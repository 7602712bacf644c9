//! Layer 5: Engine
//!
//! This layer provides the parallel execution engine for Jenks restarts.
//! It distributes independent local-search runs across CPU cores.

// Parallel execution engine using CPU threads
pub mod executor;
