//! Execution engine for Learn and Evince requests.
//!
//! ## Purpose
//!
//! This module provides the single entry point that takes a request, checks
//! its inputs, routes it to moment learning (Learn) or to outlier search
//! (Evince) and returns the corresponding result table.
//!
//! ## Design notes
//!
//! * The mode travels with the request; the executor keeps no state between
//!   calls, so any sequence of requests against the same dataset is valid.
//! * Learn runs the accumulator on every column; conversion to derived
//!   statistics only happens if the configuration asks for it.
//! * Evince works on the raw samples and the supplied parameters and never
//!   depends on a previous Learn.
//! * Per-mode pass functions can be replaced (e.g. by a parallel
//!   implementation in an extension crate); replacements must preserve
//!   column order.
//!
//! ## Invariants
//!
//! * Inputs are fully validated before any pass runs.
//! * Learn output has one summary per input column, in input order.
//! * Evince output is ordered column-major then row.
//!
//! ## Non-goals
//!
//! * This module does not implement the numerical kernels (see `math`).
//! * This module does not handle parallel execution directly.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::algorithms::outliers::{self, OutlierRecord};
use crate::engine::output::{EvinceResult, LearnResult};
use crate::engine::validator::Validator;
use crate::math::conversion::MIN_SAMPLES_G2;
use crate::math::moments::{self, MomentSummary};
use crate::primitives::dataset::{Dataset, OutlierParameters};
use crate::primitives::errors::DescriptiveError;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom Learn pass (extrema and raw moments per column).
#[doc(hidden)]
pub type LearnPassFn<T> = fn(&Dataset<T>) -> Result<Vec<MomentSummary<T>>, DescriptiveError>;

/// Signature for a custom Evince pass (outlier records, column-major).
#[doc(hidden)]
pub type EvincePassFn<T> = fn(
    &Dataset<T>,             // dataset
    &[OutlierParameters<T>], // one parameter set per column
) -> Result<Vec<OutlierRecord<T>>, DescriptiveError>;

// ============================================================================
// Requests and Responses
// ============================================================================

/// Execution mode of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Learn extrema and raw moments.
    Learn,

    /// Search for outliers against supplied parameters.
    Evince,
}

impl Display for ExecutionMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Learn => write!(f, "Learn"),
            Self::Evince => write!(f, "Evince"),
        }
    }
}

/// A request together with its mode-specific inputs.
#[derive(Debug, Clone, Copy)]
pub enum Request<'a, T> {
    /// Learn extrema and raw moments of every column.
    Learn {
        /// Input samples.
        dataset: &'a Dataset<T>,
    },

    /// Report samples that deviate more than allowed from their nominal value.
    Evince {
        /// Input samples.
        dataset: &'a Dataset<T>,
        /// One parameter set per dataset column.
        parameters: &'a [OutlierParameters<T>],
    },
}

impl<'a, T> Request<'a, T> {
    /// Build a Learn request.
    pub fn learn(dataset: &'a Dataset<T>) -> Self {
        Self::Learn { dataset }
    }

    /// Build an Evince request.
    pub fn evince(dataset: &'a Dataset<T>, parameters: &'a [OutlierParameters<T>]) -> Self {
        Self::Evince {
            dataset,
            parameters,
        }
    }

    /// Mode of this request.
    pub fn mode(&self) -> ExecutionMode {
        match self {
            Self::Learn { .. } => ExecutionMode::Learn,
            Self::Evince { .. } => ExecutionMode::Evince,
        }
    }

    /// Dataset the request operates on.
    pub fn dataset(&self) -> &'a Dataset<T> {
        match *self {
            Self::Learn { dataset } | Self::Evince { dataset, .. } => dataset,
        }
    }
}

/// Result of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Response<T> {
    /// Learn table.
    Learn(LearnResult<T>),

    /// Evince table.
    Evince(EvinceResult<T>),
}

impl<T> Response<T> {
    /// Mode of the request that produced this response.
    pub fn mode(&self) -> ExecutionMode {
        match self {
            Self::Learn(_) => ExecutionMode::Learn,
            Self::Evince(_) => ExecutionMode::Evince,
        }
    }

    /// Borrow the Learn table, if this is a Learn response.
    pub fn as_learn(&self) -> Option<&LearnResult<T>> {
        match self {
            Self::Learn(r) => Some(r),
            Self::Evince(_) => None,
        }
    }

    /// Borrow the Evince table, if this is an Evince response.
    pub fn as_evince(&self) -> Option<&EvinceResult<T>> {
        match self {
            Self::Evince(r) => Some(r),
            Self::Learn(_) => None,
        }
    }

    /// Take the Learn table, if this is a Learn response.
    pub fn into_learn(self) -> Option<LearnResult<T>> {
        match self {
            Self::Learn(r) => Some(r),
            Self::Evince(_) => None,
        }
    }

    /// Take the Evince table, if this is an Evince response.
    pub fn into_evince(self) -> Option<EvinceResult<T>> {
        match self {
            Self::Evince(r) => Some(r),
            Self::Learn(_) => None,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for request execution.
#[derive(Debug, Clone, Copy)]
pub struct DescriptiveConfig<T> {
    /// Also convert learned moments into derived statistics (requires n >= 4).
    pub return_derived: bool,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom Learn pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_learn_pass: Option<LearnPassFn<T>>,

    /// Custom Evince pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_evince_pass: Option<EvincePassFn<T>>,

    /// Parallel execution hint, recorded for extension crates.
    #[doc(hidden)]
    pub parallel: bool,
}

impl<T> Default for DescriptiveConfig<T> {
    fn default() -> Self {
        Self {
            return_derived: false,
            custom_learn_pass: None,
            custom_evince_pass: None,
            parallel: false,
        }
    }
}

// ============================================================================
// Default Passes
// ============================================================================

/// Sequential Learn pass: accumulate every column in order.
pub fn learn_pass<T: Float>(dataset: &Dataset<T>) -> Result<Vec<MomentSummary<T>>, DescriptiveError> {
    dataset
        .columns()
        .iter()
        .enumerate()
        .map(|(column, c)| {
            moments::accumulate(c.values()).map_err(|e| match e {
                DescriptiveError::EmptyColumn { .. } => DescriptiveError::EmptyColumn { column },
                other => other,
            })
        })
        .collect()
}

/// Sequential Evince pass: scan every column in order.
pub fn evince_pass<T: Float>(
    dataset: &Dataset<T>,
    parameters: &[OutlierParameters<T>],
) -> Result<Vec<OutlierRecord<T>>, DescriptiveError> {
    outliers::detect(dataset, parameters)
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless request executor.
pub struct DescriptiveExecutor;

impl DescriptiveExecutor {
    /// Validate and run a request.
    pub fn run_with_config<T: Float>(
        request: Request<'_, T>,
        config: &DescriptiveConfig<T>,
    ) -> Result<Response<T>, DescriptiveError> {
        let dataset = request.dataset();
        debug!(
            mode = %request.mode(),
            columns = dataset.n_columns(),
            rows = dataset.n_rows(),
            parallel = config.parallel,
            "executing request"
        );

        match request {
            Request::Learn { dataset } => Self::learn(dataset, config).map(Response::Learn),
            Request::Evince {
                dataset,
                parameters,
            } => Self::evince(dataset, parameters, config).map(Response::Evince),
        }
    }

    /// Run a Learn request.
    pub fn learn<T: Float>(
        dataset: &Dataset<T>,
        config: &DescriptiveConfig<T>,
    ) -> Result<LearnResult<T>, DescriptiveError> {
        Validator::validate_dataset(dataset)?;
        let n = dataset.n_rows();
        if config.return_derived {
            Validator::validate_sample_count(n, MIN_SAMPLES_G2)?;
        }

        let pass = config.custom_learn_pass.unwrap_or(learn_pass::<T>);
        let summaries = pass(dataset)?;

        let derived = if config.return_derived {
            Some(
                summaries
                    .iter()
                    .map(MomentSummary::derive_own)
                    .collect::<Result<Vec<_>, _>>()?,
            )
        } else {
            None
        };

        debug!(columns = summaries.len(), sample_size = n, "learn complete");

        Ok(LearnResult {
            names: dataset.names(),
            sample_size: n,
            summaries,
            derived,
        })
    }

    /// Run an Evince request.
    pub fn evince<T: Float>(
        dataset: &Dataset<T>,
        parameters: &[OutlierParameters<T>],
        config: &DescriptiveConfig<T>,
    ) -> Result<EvinceResult<T>, DescriptiveError> {
        Validator::validate_dataset(dataset)?;
        Validator::validate_parameters(dataset, parameters)?;

        let pass = config.custom_evince_pass.unwrap_or(evince_pass::<T>);
        let records = pass(dataset, parameters)?;

        debug!(outliers = records.len(), "evince complete");

        Ok(EvinceResult {
            names: dataset.names(),
            records,
        })
    }
}
