//! Input abstractions for datasets and outlier parameters.
//!
//! ## Purpose
//!
//! This module lets `learn`, `evince` and `execute` accept several data
//! formats (a `Dataset`, an `ndarray` matrix, slices of parameters) through
//! a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: A `Dataset` or a parameter slice is
//!   borrowed as is; only matrix input is copied into columns.
//! * **Interoperability**: Bridges `ndarray` matrices with the column-oriented
//!   data model of the `descriptive` crate.
//! * **Layout-agnostic**: Matrix columns are gathered element by element, so
//!   both row-major and column-major arrays work.
//!
//! ## Key concepts
//!
//! * **Columns = axis 1**: A `(rows, columns)` matrix becomes one dataset
//!   column per matrix column, named `Column 0`, `Column 1`, ...
//! * **Parameter matrix**: A `2 × c` matrix holds nominal values in row 0 and
//!   allowed deviations in row 1.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.
//! * This module does not validate values (handled by the engine).

// External dependencies
use ndarray::{ArrayBase, Data, Ix2};
use num_traits::Float;
use std::borrow::Cow;

// Export dependencies from descriptive crate
use descriptive::internals::primitives::dataset::{Column, Dataset, OutlierParameters};
use descriptive::internals::primitives::errors::DescriptiveError;

// ============================================================================
// Dataset Input
// ============================================================================

/// Trait for types that can be used as a dataset.
pub trait DatasetInput<T: Float> {
    /// View the input as a dataset.
    fn as_dataset(&self) -> Result<Cow<'_, Dataset<T>>, DescriptiveError>;
}

impl<T: Float> DatasetInput<T> for Dataset<T> {
    fn as_dataset(&self) -> Result<Cow<'_, Dataset<T>>, DescriptiveError> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: Float, S> DatasetInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn as_dataset(&self) -> Result<Cow<'_, Dataset<T>>, DescriptiveError> {
        let columns = self
            .columns()
            .into_iter()
            .enumerate()
            .map(|(j, col)| Column::new(format!("Column {j}"), col.to_vec()))
            .collect();
        Dataset::new(columns).map(Cow::Owned)
    }
}

// ============================================================================
// Parameters Input
// ============================================================================

/// Trait for types that can be used as outlier parameters.
pub trait ParametersInput<T: Float> {
    /// View the input as one parameter set per column.
    fn as_parameters(&self) -> Result<Cow<'_, [OutlierParameters<T>]>, DescriptiveError>;
}

impl<T: Float> ParametersInput<T> for [OutlierParameters<T>] {
    fn as_parameters(&self) -> Result<Cow<'_, [OutlierParameters<T>]>, DescriptiveError> {
        Ok(Cow::Borrowed(self))
    }
}

impl<T: Float> ParametersInput<T> for Vec<OutlierParameters<T>> {
    fn as_parameters(&self) -> Result<Cow<'_, [OutlierParameters<T>]>, DescriptiveError> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl<T: Float, const N: usize> ParametersInput<T> for [OutlierParameters<T>; N] {
    fn as_parameters(&self) -> Result<Cow<'_, [OutlierParameters<T>]>, DescriptiveError> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl<T: Float, S> ParametersInput<T> for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
{
    fn as_parameters(&self) -> Result<Cow<'_, [OutlierParameters<T>]>, DescriptiveError> {
        if self.nrows() != 2 {
            return Err(DescriptiveError::InvalidParameterTable {
                column: 0,
                rows: self.nrows(),
            });
        }
        let params = self
            .columns()
            .into_iter()
            .map(|col| OutlierParameters::new(col[0], col[1]))
            .collect();
        Ok(Cow::Owned(params))
    }
}
