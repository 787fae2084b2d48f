//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the record-producing algorithms that operate on whole
//! datasets. Currently this is the deviation-based outlier search used by
//! Evince mode.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Outlier detection against nominal values.
pub mod outliers;
