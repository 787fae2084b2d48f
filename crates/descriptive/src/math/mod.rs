//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical building blocks:
//! - Single-pass accumulation of extrema and raw moments
//! - Conversion of raw moments into mean, variance, skewness and kurtosis
//!
//! These functions know nothing about datasets, modes or requests.
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
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Raw moment accumulation.
pub mod moments;

/// Raw-to-central moment conversion and derived statistics.
pub mod conversion;
