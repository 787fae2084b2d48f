//! High-level API for descriptive statistics.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the engine and produces a ready-to-run
//! [`DescriptiveStatistics`] that serves Learn and Evince requests.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all options.
//! * **Validated**: Configuration is validated when `.build()` is called.
//! * **Stateless**: A built model holds configuration only; requests never
//!   depend on one another.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DescriptiveBuilder`] via `Descriptive::new()`.
//! 2. Chain configuration methods (`.return_derived()`).
//! 3. Call `.build()` and run requests with `.learn()`, `.evince()` or `.execute()`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{DescriptiveConfig, DescriptiveExecutor};
use crate::engine::executor::{EvincePassFn, LearnPassFn};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::outliers::OutlierRecord;
pub use crate::engine::executor::{ExecutionMode, Request, Response};
pub use crate::engine::output::{EvinceResult, LearnResult, LearnRow};
pub use crate::math::conversion::{
    convert, kurtosis_g2, kurtosis_sample, mean, skewness, variance, CentralMoments,
    DerivedStatistics,
};
pub use crate::math::moments::{accumulate, MomentAccumulator, MomentSummary, RawMoments};
pub use crate::primitives::dataset::{Column, Dataset, OutlierParameters};
pub use crate::primitives::errors::DescriptiveError;

/// Fluent builder for configuring the descriptive statistics engine.
#[derive(Debug, Clone)]
pub struct DescriptiveBuilder<T> {
    /// Convert learned moments into derived statistics.
    pub return_derived: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Custom Learn pass function.
    #[doc(hidden)]
    pub custom_learn_pass: Option<LearnPassFn<T>>,

    /// Custom Evince pass function.
    #[doc(hidden)]
    pub custom_evince_pass: Option<EvincePassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for DescriptiveBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DescriptiveBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            return_derived: None,
            custom_learn_pass: None,
            custom_evince_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Include derived statistics (mean, variance, skewness, kurtosis) in Learn output.
    ///
    /// Learn requests then need at least 4 samples per column.
    pub fn return_derived(mut self) -> Self {
        if self.return_derived.is_some() {
            self.duplicate_param = Some("return_derived");
        }
        self.return_derived = Some(true);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom Learn pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_learn_pass(mut self, pass: LearnPassFn<T>) -> Self {
        self.custom_learn_pass = Some(pass);
        self
    }

    /// Set a custom Evince pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_evince_pass(mut self, pass: EvincePassFn<T>) -> Self {
        self.custom_evince_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Validate the configuration and build the engine.
    pub fn build(self) -> Result<DescriptiveStatistics<T>, DescriptiveError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(DescriptiveStatistics {
            config: DescriptiveConfig {
                return_derived: self.return_derived.unwrap_or(false),
                custom_learn_pass: self.custom_learn_pass,
                custom_evince_pass: self.custom_evince_pass,
                parallel: self.parallel.unwrap_or(false),
            },
        })
    }
}

/// Configured descriptive statistics engine.
#[derive(Debug, Clone, Copy)]
pub struct DescriptiveStatistics<T> {
    config: DescriptiveConfig<T>,
}

impl<T: Float> DescriptiveStatistics<T> {
    /// Run a request in whichever mode it carries.
    pub fn execute(&self, request: Request<'_, T>) -> Result<Response<T>, DescriptiveError> {
        DescriptiveExecutor::run_with_config(request, &self.config)
    }

    /// Learn extrema and raw moments of every column.
    pub fn learn(&self, dataset: &Dataset<T>) -> Result<LearnResult<T>, DescriptiveError> {
        DescriptiveExecutor::learn(dataset, &self.config)
    }

    /// Report every sample whose relative deviation exceeds 1.
    pub fn evince(
        &self,
        dataset: &Dataset<T>,
        parameters: &[OutlierParameters<T>],
    ) -> Result<EvinceResult<T>, DescriptiveError> {
        DescriptiveExecutor::evince(dataset, parameters, &self.config)
    }

    /// Whether Learn output includes derived statistics.
    pub fn returns_derived(&self) -> bool {
        self.config.return_derived
    }

    /// Effective execution configuration.
    #[doc(hidden)]
    pub fn config(&self) -> &DescriptiveConfig<T> {
        &self.config
    }
}
