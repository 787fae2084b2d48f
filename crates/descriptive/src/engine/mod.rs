//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer routes a request to moment learning or to outlier search,
//! validates its inputs and assembles the table-shaped result.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Request dispatch for Learn and Evince modes.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Result tables for Learn and Evince modes.
pub mod output;
