//! Result tables for Learn and Evince requests.
//!
//! ## Purpose
//!
//! This module defines the table-shaped outputs of the engine: the 6-row
//! Learn table (min, max and four raw moments per column) and the Evince
//! table (one row per outlier).
//!
//! ## Design notes
//!
//! * **Table view**: `value(row, column)` mirrors the row/column layout that
//!   table consumers expect; typed accessors are available alongside.
//! * **Owned**: Results are produced fresh per request and owned by the caller.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Key concepts
//!
//! * **Learn rows**: Fixed order {min, max, raw moment 1..4}; columns mirror
//!   the input dataset order and names.
//! * **Evince columns**: {column index, row index, relative deviation}.
//!
//! ## Invariants
//!
//! * `summaries.len() == names.len()` for Learn results.
//! * Evince records are ordered column-major then row.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond on-demand conversion.
//! * This module does not validate result consistency (responsibility of the engine).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::{self, Debug, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::outliers::OutlierRecord;
use crate::math::conversion::DerivedStatistics;
use crate::math::moments::MomentSummary;
use crate::primitives::errors::DescriptiveError;

// ============================================================================
// Learn Table
// ============================================================================

/// Row of the Learn table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LearnRow {
    /// Smallest sample.
    Min,
    /// Largest sample.
    Max,
    /// `Σx / n`
    RawMoment1,
    /// `Σx² / n`
    RawMoment2,
    /// `Σx³ / n`
    RawMoment3,
    /// `Σx⁴ / n`
    RawMoment4,
}

impl LearnRow {
    /// All rows in table order.
    pub const ALL: [LearnRow; 6] = [
        LearnRow::Min,
        LearnRow::Max,
        LearnRow::RawMoment1,
        LearnRow::RawMoment2,
        LearnRow::RawMoment3,
        LearnRow::RawMoment4,
    ];

    /// Position of the row in the table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row for a table position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short label used when printing.
    pub fn label(self) -> &'static str {
        match self {
            Self::Min => "Min",
            Self::Max => "Max",
            Self::RawMoment1 => "Raw_M1",
            Self::RawMoment2 => "Raw_M2",
            Self::RawMoment3 => "Raw_M3",
            Self::RawMoment4 => "Raw_M4",
        }
    }
}

/// Output of a Learn request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LearnResult<T> {
    /// Names of the learned columns, in dataset order.
    pub names: Vec<String>,

    /// Number of samples per column.
    pub sample_size: usize,

    /// Extrema and raw moments, one entry per column.
    pub summaries: Vec<MomentSummary<T>>,

    /// Derived statistics per column (only when requested at build time).
    pub derived: Option<Vec<DerivedStatistics<T>>>,
}

impl<T: Float> LearnResult<T> {
    /// Number of table rows (always 6).
    pub fn n_rows(&self) -> usize {
        LearnRow::ALL.len()
    }

    /// Number of table columns.
    pub fn n_columns(&self) -> usize {
        self.summaries.len()
    }

    /// Table cell at `(row, column)`.
    pub fn value(&self, row: usize, column: usize) -> Option<T> {
        let row = LearnRow::from_index(row)?;
        self.summaries.get(column).map(|s| Self::cell(s, row))
    }

    /// One table row across all columns.
    pub fn row(&self, row: LearnRow) -> Vec<T> {
        self.summaries.iter().map(|s| Self::cell(s, row)).collect()
    }

    /// Summary of one column.
    pub fn summary(&self, column: usize) -> Option<&MomentSummary<T>> {
        self.summaries.get(column)
    }

    /// Derive statistics for one column under an arbitrary sample count.
    pub fn derive(
        &self,
        column: usize,
        n: usize,
    ) -> Result<DerivedStatistics<T>, DescriptiveError> {
        let summary = self
            .summaries
            .get(column)
            .ok_or_else(|| {
                DescriptiveError::InvalidInput(format!("column {column} out of range"))
            })?;
        summary.derive(n)
    }

    /// Check if derived statistics were computed.
    pub fn has_derived(&self) -> bool {
        self.derived.is_some()
    }

    fn cell(s: &MomentSummary<T>, row: LearnRow) -> T {
        match row {
            LearnRow::Min => s.min,
            LearnRow::Max => s.max,
            LearnRow::RawMoment1 => s.raw.m1,
            LearnRow::RawMoment2 => s.raw.m2,
            LearnRow::RawMoment3 => s.raw.m3,
            LearnRow::RawMoment4 => s.raw.m4,
        }
    }
}

// ============================================================================
// Evince Table
// ============================================================================

/// Output of an Evince request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvinceResult<T> {
    /// Names of the searched columns, in dataset order.
    pub names: Vec<String>,

    /// Detected outliers, column-major then row.
    pub records: Vec<OutlierRecord<T>>,
}

impl<T: Float> EvinceResult<T> {
    /// Number of table rows, i.e. the number of outliers.
    pub fn n_rows(&self) -> usize {
        self.records.len()
    }

    /// Number of table columns (always 3).
    pub fn n_columns(&self) -> usize {
        3
    }

    /// Whether no outlier was found.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Table cell at `(row, column)`; the two index columns are returned as `T`.
    pub fn value(&self, row: usize, column: usize) -> Option<T> {
        let r = self.records.get(row)?;
        match column {
            0 => T::from(r.column),
            1 => T::from(r.row),
            2 => Some(r.relative_deviation),
            _ => None,
        }
    }

    /// Records belonging to one dataset column.
    pub fn records_for(&self, column: usize) -> impl Iterator<Item = &OutlierRecord<T>> + '_ {
        self.records.iter().filter(move |r| r.column == column)
    }

    /// Largest relative deviation found, if any.
    pub fn max_relative_deviation(&self) -> Option<T> {
        self.records
            .iter()
            .map(|r| r.relative_deviation)
            .fold(None, |acc, d| match acc {
                Some(m) if m >= d => Some(m),
                _ => Some(d),
            })
    }
}

// ============================================================================
// Display Implementations
// ============================================================================

impl<T: Float + Display + Debug> Display for LearnResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Mode:        Learn")?;
        writeln!(f, "  Columns:     {}", self.n_columns())?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        writeln!(f)?;

        writeln!(f, "Learned Moments:")?;
        write!(f, "{:>12}", "Column")?;
        for row in LearnRow::ALL {
            write!(f, " {:>14}", row.label())?;
        }
        writeln!(f)?;
        writeln!(f, "{:-<width$}", "", width = 12 + 15 * LearnRow::ALL.len())?;

        for (name, s) in self.names.iter().zip(self.summaries.iter()) {
            write!(f, "{:>12}", name)?;
            for row in LearnRow::ALL {
                write!(f, " {:>14.6}", Self::cell(s, row))?;
            }
            writeln!(f)?;
        }

        if let Some(derived) = &self.derived {
            writeln!(f)?;
            writeln!(f, "Derived Statistics:")?;
            writeln!(
                f,
                "{:>12} {:>12} {:>12} {:>12} {:>12} {:>12}",
                "Column", "Mean", "Variance", "Skewness", "Kurt_Sample", "Kurt_G2"
            )?;
            writeln!(f, "{:-<width$}", "", width = 77)?;
            for (name, d) in self.names.iter().zip(derived.iter()) {
                writeln!(
                    f,
                    "{:>12} {:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
                    name, d.mean, d.variance, d.skewness, d.kurtosis_sample, d.kurtosis_g2
                )?;
            }
        }

        Ok(())
    }
}

impl<T: Float + Display + Debug> Display for EvinceResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Mode:     Evince")?;
        writeln!(f, "  Columns:  {}", self.names.len())?;
        writeln!(f, "  Outliers: {}", self.records.len())?;
        writeln!(f)?;

        writeln!(f, "Outliers:")?;
        writeln!(f, "{:>12} {:>8} {:>14}", "Column", "Row", "Rel_Deviation")?;
        writeln!(f, "{:-<width$}", "", width = 36)?;

        // Show first 10 and last 10 if more than 20 outliers
        let n = self.records.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>12}", "...")?;
            }
            prev_idx = idx;

            let r = &self.records[idx];
            let name = self.names.get(r.column).map_or("?", String::as_str);
            writeln!(
                f,
                "{:>12} {:>8} {:>14.6}",
                name, r.row, r.relative_deviation
            )?;
        }

        Ok(())
    }
}
