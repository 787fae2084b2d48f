//! Deviation-based outlier search.
//!
//! ## Purpose
//!
//! This module scans the samples of a dataset against per-column outlier
//! parameters and reports every sample whose distance from the nominal value
//! exceeds the allowed deviation, annotated with its relative deviation
//! `|x - nominal| / allowed_deviation`.
//!
//! ## Design notes
//!
//! * **Validate first**: Parameter count and every allowed deviation are
//!   checked before the scan, so a failing call never yields partial records.
//! * **Deterministic order**: Column-major then row, i.e. all records of
//!   column 0 in row order, then column 1, and so on.
//! * **Per-column entry point**: [`detect_column`] lets extension crates
//!   distribute columns across threads and concatenate in column order.
//!
//! ## Invariants
//!
//! * Every emitted record has `relative_deviation > 1`.
//! * The dataset is never mutated.
//!
//! ## Non-goals
//!
//! * This module does not estimate the nominal value or the deviation;
//!   both are supplied by the caller.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::trace;

// Internal dependencies
use crate::primitives::dataset::{Dataset, OutlierParameters};
use crate::primitives::errors::DescriptiveError;

// ============================================================================
// Outlier Record
// ============================================================================

/// A single sample that deviates more than allowed from its nominal value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlierRecord<T> {
    /// Index of the dataset column.
    pub column: usize,

    /// Index of the sample within its column.
    pub row: usize,

    /// `|sample - nominal| / allowed_deviation`, always greater than 1.
    pub relative_deviation: T,
}

// ============================================================================
// Detection
// ============================================================================

/// Check one parameter set before it is used for a scan.
pub fn validate_parameters<T: Float>(
    column: usize,
    params: &OutlierParameters<T>,
) -> Result<(), DescriptiveError> {
    let d = params.allowed_deviation;
    if d.is_nan() || d <= T::zero() {
        return Err(DescriptiveError::InvalidDeviation {
            column,
            value: params.allowed_deviation.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

/// Scan one column and return its outliers in row order.
pub fn detect_column<T: Float>(
    column: usize,
    values: &[T],
    params: &OutlierParameters<T>,
) -> Result<Vec<OutlierRecord<T>>, DescriptiveError> {
    validate_parameters(column, params)?;
    Ok(scan_column(column, values, params))
}

/// Scan every column of `dataset` against the parameter set at the same position.
pub fn detect<T: Float>(
    dataset: &Dataset<T>,
    params: &[OutlierParameters<T>],
) -> Result<Vec<OutlierRecord<T>>, DescriptiveError> {
    if params.len() != dataset.n_columns() {
        return Err(DescriptiveError::MismatchedParameters {
            columns: dataset.n_columns(),
            parameters: params.len(),
        });
    }
    for (column, p) in params.iter().enumerate() {
        validate_parameters(column, p)?;
    }

    let mut records = Vec::new();
    for (column, (c, p)) in dataset.columns().iter().zip(params).enumerate() {
        records.extend(detect_column(column, c.values(), p)?);
    }
    Ok(records)
}

fn scan_column<T: Float>(
    column: usize,
    values: &[T],
    params: &OutlierParameters<T>,
) -> Vec<OutlierRecord<T>> {
    values
        .iter()
        .enumerate()
        .filter_map(|(row, &x)| {
            let relative_deviation = params.relative_deviation(x);
            if relative_deviation > T::one() {
                trace!(
                    column,
                    row,
                    relative_deviation = relative_deviation.to_f64().unwrap_or(f64::NAN),
                    "outlier"
                );
                Some(OutlierRecord {
                    column,
                    row,
                    relative_deviation,
                })
            } else {
                None
            }
        })
        .collect()
}
