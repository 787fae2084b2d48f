//! # Descriptive: Raw-Moment Statistics and Outlier Search for Rust
//!
//! A small, `no_std`-friendly engine that learns extrema and raw moments of
//! multi-column numeric data, converts them into derived statistics, and
//! flags samples that deviate too far from a nominal value.
//!
//! ## What does it do?
//!
//! The engine runs in one of two modes per request:
//!
//! * **Learn**: one pass per column yields min, max and the first four raw
//!   moments about zero, `m_k = (1/n) · Σ x^k`. Mean, unbiased variance,
//!   skewness, sample excess kurtosis and the bias-corrected G2 kurtosis
//!   follow from those moments and a sample count, on demand.
//! * **Evince**: given a nominal value and an allowed deviation per column,
//!   every sample with `|x - nominal| / allowed_deviation > 1` is reported
//!   together with its relative deviation.
//!
//! Requests are independent: Evince never needs a previous Learn.
//!
//! ## Quick Start
//!
//! ```rust
//! use descriptive::prelude::*;
//!
//! let data = Dataset::from_columns([
//!     ("Metric 1", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
//!     ("Metric 2", vec![2.0, 2.0, 3.0, 3.0, 10.0]),
//! ])?;
//!
//! // Build the engine
//! let model = Descriptive::new()
//!     .return_derived()   // Also convert moments to mean, variance, ...
//!     .build()?;
//!
//! // Learn extrema and raw moments
//! let learned = model.learn(&data)?;
//! assert_eq!(learned.summaries[0].raw.m1, 3.0);
//!
//! // Search for outliers against caller-supplied parameters
//! let params = [
//!     OutlierParameters::new(3.0, 2.5),
//!     OutlierParameters::new(3.0, 2.0),
//! ];
//! let outliers = model.evince(&data, &params)?;
//! assert_eq!(outliers.n_rows(), 1);
//!
//! println!("{}", outliers);
//! # Result::<(), DescriptiveError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Mode:     Evince
//!   Columns:  2
//!   Outliers: 1
//!
//! Outliers:
//!       Column      Row  Rel_Deviation
//! ------------------------------------
//!     Metric 2        4       3.500000
//! ```
//!
//! ### Re-deriving with another sample count
//!
//! Raw moments carry no sample count of their own, so the conversion can be
//! repeated under any `n`:
//!
//! ```rust
//! use descriptive::prelude::*;
//!
//! let summary = accumulate(&[2.0f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])?;
//! assert_eq!(summary.raw.m1, 5.0);
//!
//! let stats = convert(summary.count, &summary.raw)?;
//! assert!((stats.variance - 32.0 / 7.0).abs() < 1e-12);
//!
//! // G2 needs at least four samples
//! assert!(convert(3, &summary.raw).is_err());
//! # Result::<(), DescriptiveError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every request returns `Result<_, DescriptiveError>`. All errors are
//! invalid-input conditions (empty or ragged datasets, too few samples,
//! non-positive deviations, parameter/column count mismatch). A failing
//! request returns no partial table. Numerically degenerate inputs such as
//! a zero-variance column are not errors: skewness and kurtosis come back
//! non-finite.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! descriptive = { version = "0.3", default-features = false }
//! ```
//!
//! ## Feature Flags
//!
//! * `std` (default): standard library support and `std::error::Error`.
//! * `serde`: `Serialize`/`Deserialize` for result and data types.
//! * `dev`: exposes the `internals` module for extension crates and tests.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data containers and error types.
mod primitives;

// Layer 2: Math - moment accumulation and conversion.
mod math;

// Layer 3: Algorithms - outlier search.
mod algorithms;

// Layer 4: Engine - validation, dispatch and result tables.
mod engine;

// High-level fluent API.
mod api;

// Standard descriptive statistics prelude.
pub mod prelude {
    pub use crate::api::{
        accumulate, convert, kurtosis_g2, kurtosis_sample, mean, skewness, variance,
        CentralMoments, Column, Dataset, DerivedStatistics, DescriptiveBuilder as Descriptive,
        DescriptiveError, DescriptiveStatistics, EvinceResult, ExecutionMode, LearnResult,
        LearnRow, MomentAccumulator, MomentSummary, OutlierParameters, OutlierRecord, RawMoments,
        Request, Response,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
