//! Single-pass accumulation of extrema and raw moments.
//!
//! ## Purpose
//!
//! This module computes, for one column of samples, the minimum, the maximum
//! and the first four raw moments about zero, `m_k = (1/n) * Σ x^k`. These
//! six numbers are everything Learn mode stores per column.
//!
//! ## Design notes
//!
//! * **Single pass**: One linear scan over the samples, no sorting or buffering.
//! * **Raw, not central**: Moments are taken about zero so that conversion can
//!   be deferred and repeated with any sample count.
//! * **Mergeable**: Power sums add, so accumulators over disjoint chunks of a
//!   column combine exactly.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `count` equals the number of samples pushed (NaN included).
//! * A finalized summary always has `count >= 1`.
//!
//! ## Non-goals
//!
//! * No overflow protection beyond the range of `T`.
//! * NaN samples are not filtered; they poison the sums.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::conversion::{self, DerivedStatistics};
use crate::primitives::errors::DescriptiveError;

// ============================================================================
// Raw Moments
// ============================================================================

/// First four raw moments about zero.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawMoments<T> {
    /// `Σx / n`
    pub m1: T,
    /// `Σx² / n`
    pub m2: T,
    /// `Σx³ / n`
    pub m3: T,
    /// `Σx⁴ / n`
    pub m4: T,
}

impl<T: Float> RawMoments<T> {
    /// Create from explicit moment values.
    pub fn new(m1: T, m2: T, m3: T, m4: T) -> Self {
        Self { m1, m2, m3, m4 }
    }

    /// Moments in order `[m1, m2, m3, m4]`.
    pub fn to_array(&self) -> [T; 4] {
        [self.m1, self.m2, self.m3, self.m4]
    }
}

// ============================================================================
// Moment Summary
// ============================================================================

/// Learn-mode output for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MomentSummary<T> {
    /// Number of samples accumulated.
    pub count: usize,

    /// Smallest sample.
    pub min: T,

    /// Largest sample.
    pub max: T,

    /// Raw moments about zero.
    pub raw: RawMoments<T>,
}

impl<T: Float> MomentSummary<T> {
    /// Convert the raw moments using a caller-chosen sample count.
    pub fn derive(&self, n: usize) -> Result<DerivedStatistics<T>, DescriptiveError> {
        conversion::convert(n, &self.raw)
    }

    /// Convert the raw moments using the accumulated sample count.
    pub fn derive_own(&self) -> Result<DerivedStatistics<T>, DescriptiveError> {
        self.derive(self.count)
    }
}

// ============================================================================
// Accumulator
// ============================================================================

/// Incremental accumulator of extrema and power sums.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentAccumulator<T> {
    count: usize,
    min: T,
    max: T,
    sum: T,
    sum_sq: T,
    sum_cube: T,
    sum_quad: T,
}

impl<T: Float> Default for MomentAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> MomentAccumulator<T> {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            min: T::infinity(),
            max: T::neg_infinity(),
            sum: T::zero(),
            sum_sq: T::zero(),
            sum_cube: T::zero(),
            sum_quad: T::zero(),
        }
    }

    /// Add one sample.
    #[inline]
    pub fn push(&mut self, x: T) {
        self.count += 1;

        if x < self.min {
            self.min = x;
        }
        if x > self.max {
            self.max = x;
        }

        let x2 = x * x;
        self.sum = self.sum + x;
        self.sum_sq = self.sum_sq + x2;
        self.sum_cube = self.sum_cube + x2 * x;
        self.sum_quad = self.sum_quad + x2 * x2;
    }

    /// Add every sample of `values` in order.
    pub fn extend(&mut self, values: &[T]) {
        for &x in values {
            self.push(x);
        }
    }

    /// Fold another accumulator into this one.
    pub fn merge(&mut self, other: &Self) {
        self.count += other.count;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum = self.sum + other.sum;
        self.sum_sq = self.sum_sq + other.sum_sq;
        self.sum_cube = self.sum_cube + other.sum_cube;
        self.sum_quad = self.sum_quad + other.sum_quad;
    }

    /// Number of samples seen so far.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no sample has been pushed.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Divide the power sums by `n` and report the summary.
    pub fn finalize(&self) -> Result<MomentSummary<T>, DescriptiveError> {
        if self.count == 0 {
            return Err(DescriptiveError::EmptyColumn { column: 0 });
        }

        let n = T::from(self.count).unwrap_or_else(T::nan);
        Ok(MomentSummary {
            count: self.count,
            min: self.min,
            max: self.max,
            raw: RawMoments {
                m1: self.sum / n,
                m2: self.sum_sq / n,
                m3: self.sum_cube / n,
                m4: self.sum_quad / n,
            },
        })
    }
}

/// Accumulate extrema and raw moments of one column.
pub fn accumulate<T: Float>(values: &[T]) -> Result<MomentSummary<T>, DescriptiveError> {
    let mut acc = MomentAccumulator::new();
    acc.extend(values);
    acc.finalize()
}
