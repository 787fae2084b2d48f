//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer provides the parallel pass functions injected into the
//! `descriptive` execution engine.

// Parallel execution engine using CPU threads
pub mod executor;
