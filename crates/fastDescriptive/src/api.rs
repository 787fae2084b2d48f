//! High-level API for descriptive statistics with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point of `fastDescriptive`. It
//! wraps the `descriptive` builder, injects the rayon-based passes and accepts
//! `ndarray` input alongside the native data model.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `descriptive` builder and its
//!   validation.
//! * **Parallel-First**: Defaults to parallel execution; `.parallel(false)`
//!   falls back to the sequential passes.
//! * **Feature-Gated**: Without the `cpu` feature every request runs
//!   sequentially.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelDescriptiveBuilder`] via `Descriptive::new()`.
//! 2. Chain configuration methods (`.return_derived()`, `.parallel()`).
//! 3. Call `.build()` and run requests with `.learn()`, `.evince()` or `.execute()`.

// External dependencies
use num_traits::Float;

// Internal dependencies
#[cfg(feature = "cpu")]
use crate::engine::executor::{evince_pass_parallel, learn_pass_parallel};
use crate::input::{DatasetInput, ParametersInput};

// Publicly re-exported types
pub use descriptive::internals::api::{
    accumulate, convert, Column, Dataset, DerivedStatistics, DescriptiveBuilder,
    DescriptiveError, DescriptiveStatistics, EvinceResult, ExecutionMode, LearnResult, LearnRow,
    MomentSummary, OutlierParameters, OutlierRecord, RawMoments, Request, Response,
};

// ============================================================================
// Parallel Builder
// ============================================================================

/// Builder for the descriptive statistics engine with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelDescriptiveBuilder<T> {
    /// Base builder from the descriptive crate.
    pub base: DescriptiveBuilder<T>,
}

impl<T: Float> Default for ParallelDescriptiveBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelDescriptiveBuilder<T> {
    /// Create a new builder with default settings.
    ///
    /// Defaults are those of the descriptive builder, plus `parallel: true`.
    pub fn new() -> Self {
        Self {
            base: DescriptiveBuilder::new().parallel(true),
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Include derived statistics in Learn output.
    pub fn return_derived(mut self) -> Self {
        self.base = self.base.return_derived();
        self
    }

    /// Build the engine.
    pub fn build(self) -> Result<ParallelDescriptive<T>, DescriptiveError> {
        // Validate by attempting to build the base engine
        let _ = self.base.clone().build()?;

        Ok(ParallelDescriptive { config: self })
    }
}

// ============================================================================
// Parallel Engine
// ============================================================================

/// Descriptive statistics engine with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelDescriptive<T> {
    config: ParallelDescriptiveBuilder<T>,
}

impl<T: Float + Send + Sync + 'static> ParallelDescriptive<T> {
    /// Learn extrema and raw moments of every column.
    pub fn learn<D>(&self, data: &D) -> Result<LearnResult<T>, DescriptiveError>
    where
        D: DatasetInput<T> + ?Sized,
    {
        let dataset = data.as_dataset()?;
        self.engine()?.learn(&dataset)
    }

    /// Report every sample whose relative deviation exceeds 1.
    pub fn evince<D, P>(&self, data: &D, parameters: &P) -> Result<EvinceResult<T>, DescriptiveError>
    where
        D: DatasetInput<T> + ?Sized,
        P: ParametersInput<T> + ?Sized,
    {
        let dataset = data.as_dataset()?;
        let parameters = parameters.as_parameters()?;
        self.engine()?.evince(&dataset, &parameters)
    }

    /// Run a request in whichever mode it carries.
    pub fn execute(&self, request: Request<'_, T>) -> Result<Response<T>, DescriptiveError> {
        self.engine()?.execute(request)
    }

    /// Whether the parallel passes are used.
    pub fn is_parallel(&self) -> bool {
        cfg!(feature = "cpu") && self.config.base.parallel.unwrap_or(true)
    }

    fn engine(&self) -> Result<DescriptiveStatistics<T>, DescriptiveError> {
        // Configure the base builder with parallel callbacks if enabled
        let mut builder = self.config.base.clone();

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder
                    .custom_learn_pass(learn_pass_parallel)
                    .custom_evince_pass(evince_pass_parallel);
            } else {
                builder.custom_learn_pass = None;
                builder.custom_evince_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if cpu feature is disabled
            builder.custom_learn_pass = None;
            builder.custom_evince_pass = None;
        }

        builder.build()
    }
}
