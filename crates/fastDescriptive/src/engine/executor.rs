//! Parallel execution engine for Learn and Evince passes.
//!
//! ## Purpose
//!
//! This module provides the parallel pass functions that are injected into
//! the `descriptive` crate's execution engine. Columns are independent, so
//! each one is accumulated or scanned on its own worker.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacements for the sequential passes.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across columns.
//! * **Determinism**: Each column is processed exactly as in the sequential
//!   pass and results are reassembled in column order, so output is
//!   bit-identical to the sequential engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Per-column work**: The accumulator for one column touches no state of
//!   another, so no locking is needed.
//! * **Integration**: Plugs into the `descriptive` executor via the
//!   `LearnPassFn` and `EvincePassFn` hooks.
//!
//! ## Invariants
//!
//! * Learn output has one summary per column, in column order.
//! * Evince output is ordered column-major then row.
//! * Parameters are validated sequentially before any scan, so the reported
//!   error does not depend on thread scheduling.
//!
//! ## Non-goals
//!
//! * This module does not split a single column across threads.
//! * This module does not validate the dataset shape (handled by `validator`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
#[cfg(feature = "cpu")]
use num_traits::Float;
#[cfg(feature = "cpu")]
use tracing::debug;

// Export dependencies from descriptive crate
#[cfg(feature = "cpu")]
use descriptive::internals::algorithms::outliers::{self, OutlierRecord};
#[cfg(feature = "cpu")]
use descriptive::internals::math::moments::{accumulate, MomentSummary};
#[cfg(feature = "cpu")]
use descriptive::internals::primitives::dataset::{Dataset, OutlierParameters};
#[cfg(feature = "cpu")]
use descriptive::internals::primitives::errors::DescriptiveError;

// ============================================================================
// Parallel Learn Pass
// ============================================================================

/// Accumulate extrema and raw moments of every column in parallel.
#[cfg(feature = "cpu")]
pub fn learn_pass_parallel<T>(
    dataset: &Dataset<T>,
) -> Result<Vec<MomentSummary<T>>, DescriptiveError>
where
    T: Float + Send + Sync,
{
    debug!(columns = dataset.n_columns(), "parallel learn pass");

    dataset
        .columns()
        .par_iter()
        .enumerate()
        .map(|(column, c)| {
            accumulate(c.values()).map_err(|e| match e {
                DescriptiveError::EmptyColumn { .. } => DescriptiveError::EmptyColumn { column },
                other => other,
            })
        })
        .collect()
}

// ============================================================================
// Parallel Evince Pass
// ============================================================================

/// Scan every column for outliers in parallel.
#[cfg(feature = "cpu")]
pub fn evince_pass_parallel<T>(
    dataset: &Dataset<T>,
    parameters: &[OutlierParameters<T>],
) -> Result<Vec<OutlierRecord<T>>, DescriptiveError>
where
    T: Float + Send + Sync,
{
    if parameters.len() != dataset.n_columns() {
        return Err(DescriptiveError::MismatchedParameters {
            columns: dataset.n_columns(),
            parameters: parameters.len(),
        });
    }
    for (column, p) in parameters.iter().enumerate() {
        outliers::validate_parameters(column, p)?;
    }

    debug!(columns = dataset.n_columns(), "parallel evince pass");

    let per_column: Vec<Vec<OutlierRecord<T>>> = dataset
        .columns()
        .par_iter()
        .zip(parameters.par_iter())
        .enumerate()
        .map(|(column, (c, p))| outliers::detect_column(column, c.values(), p))
        .collect::<Result<_, _>>()?;

    Ok(per_column.into_iter().flatten().collect())
}
