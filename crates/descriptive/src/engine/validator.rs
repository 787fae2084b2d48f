//! Input validation for datasets, outlier parameters and builder options.
//!
//! ## Purpose
//!
//! This module checks every precondition of a request before any statistic
//! is computed, so that a failing request produces an error and nothing else.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Dataset Shape**: At least one column, equal lengths, at least one sample.
//! * **Parameter Shape**: One parameter set per column, positive deviations.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not reject non-finite samples; they propagate.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::outliers;
use crate::primitives::dataset::{Dataset, OutlierParameters};
use crate::primitives::errors::DescriptiveError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for requests and builder configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Dataset Validation
    // ========================================================================

    /// Validate a dataset for moment learning or outlier search.
    pub fn validate_dataset<T: Float>(dataset: &Dataset<T>) -> Result<(), DescriptiveError> {
        // Check 1: At least one column
        let first = dataset.column(0).ok_or(DescriptiveError::EmptyInput)?;

        // Check 2: Equal lengths (guaranteed by construction, re-checked for deserialized data)
        let n = first.len();
        for (column, c) in dataset.columns().iter().enumerate() {
            if c.len() != n {
                return Err(DescriptiveError::MismatchedColumns {
                    column,
                    expected: n,
                    got: c.len(),
                });
            }
        }

        // Check 3: Moment accumulation needs at least one sample
        if n == 0 {
            return Err(DescriptiveError::EmptyColumn { column: 0 });
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate outlier parameters against the dataset they will be applied to.
    pub fn validate_parameters<T: Float>(
        dataset: &Dataset<T>,
        params: &[OutlierParameters<T>],
    ) -> Result<(), DescriptiveError> {
        if params.len() != dataset.n_columns() {
            return Err(DescriptiveError::MismatchedParameters {
                columns: dataset.n_columns(),
                parameters: params.len(),
            });
        }

        for (column, p) in params.iter().enumerate() {
            outliers::validate_parameters(column, p)?;
        }

        Ok(())
    }

    /// Validate a sample count against the minimum for a moment order.
    pub fn validate_sample_count(n: usize, min: usize) -> Result<(), DescriptiveError> {
        if n < min {
            return Err(DescriptiveError::TooFewSamples { got: n, min });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), DescriptiveError> {
        if let Some(param) = duplicate_param {
            return Err(DescriptiveError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
