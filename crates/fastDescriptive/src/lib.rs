//! # Fast Descriptive (Parallel Descriptive Statistics)
//!
//! Multi-threaded, `ndarray`-aware execution for the `descriptive` engine.
//! Columns are learned and scanned on separate workers via `rayon`; results
//! are identical to the sequential engine.
//!
//! ## Quick Start
//!
//! ```rust
//! use fastDescriptive::prelude::*;
//! use ndarray::array;
//!
//! // Rows are samples, columns are variables
//! let data = array![
//!     [1.0, 10.0],
//!     [2.0, 10.0],
//!     [3.0, 11.0],
//!     [4.0, 30.0],
//! ];
//!
//! let model = Descriptive::new().build()?;
//!
//! let learned = model.learn(&data)?;
//! assert_eq!(learned.names, vec!["Column 0", "Column 1"]);
//! assert_eq!(learned.summaries[1].max, 30.0);
//!
//! // Row 0: nominal values, row 1: allowed deviations
//! let params = array![[2.5, 15.0], [2.0, 5.0]];
//! let outliers = model.evince(&data, &params)?;
//! assert_eq!(outliers.n_rows(), 1);
//! # Result::<(), DescriptiveError>::Ok(())
//! ```
//!
//! ## Feature Flags
//!
//! * `cpu` (default): parallel passes via `rayon`.
//! * `dev`: exposes the `internals` module for tests.

#![allow(non_snake_case)]

// Layer 4: Engine - parallel pass functions.
mod engine;

// High-level fluent API.
mod api;

// Input data handling.
mod input;

// Standard fastDescriptive prelude.
pub mod prelude {
    pub use crate::api::{
        accumulate, convert, Column, Dataset, DerivedStatistics, DescriptiveError, EvinceResult,
        ExecutionMode, LearnResult, LearnRow, MomentSummary, OutlierParameters, OutlierRecord,
        ParallelDescriptive, ParallelDescriptiveBuilder as Descriptive, RawMoments, Request,
        Response,
    };
    pub use crate::input::{DatasetInput, ParametersInput};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
    pub mod input {
        pub use crate::input::*;
    }
}
