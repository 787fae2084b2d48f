//! Table-shaped input data for descriptive statistics.
//!
//! ## Purpose
//!
//! This module defines the column-oriented containers consumed by the
//! engine: named sample columns, datasets made of equal-length columns, and
//! the per-column outlier parameters used in Evince mode.
//!
//! ## Design notes
//!
//! * **Column-major**: Each column owns a contiguous `Vec<T>` of samples.
//! * **Validated once**: Equal column lengths are checked when a dataset is built.
//! * **Read-only**: The engine only ever borrows datasets and parameters.
//!
//! ## Key concepts
//!
//! * **Dataset**: Ordered columns addressed by index or by name.
//! * **Outlier Parameters**: A `(nominal, allowed deviation)` pair per column,
//!   matched to dataset columns by position.
//!
//! ## Invariants
//!
//! * All columns of a `Dataset` have the same number of samples.
//! * Column order is insertion order.
//!
//! ## Non-goals
//!
//! * This module does not provide typed or heterogeneous columns.
//! * This module does not perform any statistics.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DescriptiveError;

// ============================================================================
// Column
// ============================================================================

/// A named, ordered sequence of samples.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column<T> {
    name: String,
    values: Vec<T>,
}

impl<T> Column<T> {
    /// Create a new column.
    pub fn new(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Samples in insertion order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the column has no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// An ordered set of equal-length columns.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dataset<T> {
    columns: Vec<Column<T>>,
}

impl<T> Default for Dataset<T> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
        }
    }
}

impl<T> Dataset<T> {
    /// Build a dataset, checking that every column has the same length.
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, DescriptiveError> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some((column, c)) = columns
                .iter()
                .enumerate()
                .find(|(_, c)| c.len() != expected)
            {
                return Err(DescriptiveError::MismatchedColumns {
                    column,
                    expected,
                    got: c.len(),
                });
            }
        }
        Ok(Self { columns })
    }

    /// Build a dataset from `(name, samples)` pairs.
    pub fn from_columns<N, I>(columns: I) -> Result<Self, DescriptiveError>
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Vec<T>)>,
    {
        Self::new(
            columns
                .into_iter()
                .map(|(name, values)| Column::new(name, values))
                .collect(),
        )
    }

    /// Append a column, which must match the length of the existing ones.
    pub fn push_column(&mut self, column: Column<T>) -> Result<(), DescriptiveError> {
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(DescriptiveError::MismatchedColumns {
                    column: self.columns.len(),
                    expected: first.len(),
                    got: column.len(),
                });
            }
        }
        self.columns.push(column);
        Ok(())
    }

    /// Column at `index`.
    pub fn column(&self, index: usize) -> Option<&Column<T>> {
        self.columns.get(index)
    }

    /// First column named `name`, together with its index.
    pub fn column_by_name(&self, name: &str) -> Result<(usize, &Column<T>), DescriptiveError> {
        self.columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.name() == name)
            .ok_or_else(|| DescriptiveError::UnknownColumn(name.into()))
    }

    /// All columns in order.
    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Number of samples per column (0 for a dataset without columns).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Whether the dataset has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in order.
    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }
}

// ============================================================================
// Outlier Parameters
// ============================================================================

/// Nominal value and allowed deviation for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlierParameters<T> {
    /// Reference value samples are compared against.
    pub nominal: T,

    /// Largest absolute distance from `nominal` that is not an outlier.
    pub allowed_deviation: T,
}

impl<T: Float> OutlierParameters<T> {
    /// Create a parameter set.
    pub fn new(nominal: T, allowed_deviation: T) -> Self {
        Self {
            nominal,
            allowed_deviation,
        }
    }

    /// `|sample - nominal| / allowed_deviation`.
    #[inline]
    pub fn relative_deviation(&self, sample: T) -> T {
        (sample - self.nominal).abs() / self.allowed_deviation
    }

    /// Read parameters from their table form.
    ///
    /// Each column of `table` holds two rows, the nominal value followed by
    /// the allowed deviation, and describes the dataset column at the same
    /// position.
    pub fn from_table(table: &Dataset<T>) -> Result<Vec<Self>, DescriptiveError> {
        table
            .columns()
            .iter()
            .enumerate()
            .map(|(column, c)| match c.values() {
                &[nominal, allowed_deviation] => Ok(Self::new(nominal, allowed_deviation)),
                other => Err(DescriptiveError::InvalidParameterTable {
                    column,
                    rows: other.len(),
                }),
            })
            .collect()
    }
}
