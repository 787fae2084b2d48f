//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data containers and error types used throughout
//! the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Columns, datasets and outlier parameters.
pub mod dataset;

/// Shared error types.
pub mod errors;
