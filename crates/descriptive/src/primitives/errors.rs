//! Error types for descriptive statistics operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while learning
//! moments, converting them into derived statistics, or searching for
//! outliers.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending column, count or value.
//! * **Deferred**: Builder misconfiguration is recorded and reported by `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Dataset validation**: Empty datasets, empty columns, ragged columns.
//! 2. **Moment order requirements**: Minimum sample counts for variance and G2.
//! 3. **Outlier parameters**: Non-positive deviations, mismatched counts.
//!
//! ## Invariants
//!
//! * Every variant is an invalid-input condition; there are no fatal errors.
//! * A failed request never leaves partial results behind.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Numerically degenerate results (zero variance) are not errors; they
//!   surface as non-finite values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for descriptive statistics operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptiveError {
    /// The dataset has no columns.
    EmptyInput,

    /// A column has no samples; moment accumulation needs at least one.
    EmptyColumn {
        /// Index of the empty column.
        column: usize,
    },

    /// All columns of a dataset must have the same number of samples.
    MismatchedColumns {
        /// Index of the first column whose length differs.
        column: usize,
        /// Length of the first column.
        expected: usize,
        /// Length of the offending column.
        got: usize,
    },

    /// Sample count is below the minimum for the requested moment order.
    TooFewSamples {
        /// Number of samples provided.
        got: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// Allowed deviation must be strictly positive.
    InvalidDeviation {
        /// Column the parameter set belongs to.
        column: usize,
        /// The offending allowed deviation.
        value: f64,
    },

    /// One outlier parameter set is required per dataset column.
    MismatchedParameters {
        /// Number of dataset columns.
        columns: usize,
        /// Number of parameter sets supplied.
        parameters: usize,
    },

    /// No column with the given name exists in the dataset.
    UnknownColumn(String),

    /// A table-shaped parameter column must hold exactly {nominal, allowed deviation}.
    InvalidParameterTable {
        /// Index of the offending parameter column.
        column: usize,
        /// Number of rows found.
        rows: usize,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl DescriptiveError {
    /// Whether this error belongs to the invalid-input kind.
    ///
    /// Always `true`: every failure in this crate is caused by the caller's
    /// input and is local to the request that produced it.
    pub fn is_invalid_input(&self) -> bool {
        true
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DescriptiveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Dataset has no columns"),
            Self::EmptyColumn { column } => write!(f, "Column {column} has no samples"),
            Self::MismatchedColumns {
                column,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Length mismatch: column {column} has {got} samples, expected {expected}"
                )
            }
            Self::TooFewSamples { got, min } => {
                write!(f, "Too few samples: got {got}, need at least {min}")
            }
            Self::InvalidDeviation { column, value } => {
                write!(
                    f,
                    "Invalid allowed deviation for column {column}: {value} (must be > 0)"
                )
            }
            Self::MismatchedParameters {
                columns,
                parameters,
            } => {
                write!(
                    f,
                    "Parameter count mismatch: {columns} columns, {parameters} parameter sets"
                )
            }
            Self::UnknownColumn(name) => write!(f, "Unknown column: {name}"),
            Self::InvalidParameterTable { column, rows } => {
                write!(
                    f,
                    "Invalid parameter column {column}: {rows} rows (expected nominal and allowed deviation)"
                )
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for DescriptiveError {}
