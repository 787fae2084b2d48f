//! Conversion of raw moments into derived statistics.
//!
//! ## Purpose
//!
//! This module turns the raw moments stored by Learn mode, together with a
//! sample count `n`, into mean, unbiased variance, skewness, sample excess
//! kurtosis and the bias-corrected G2 excess kurtosis.
//!
//! ## Design notes
//!
//! * **Pure**: Every function depends only on its arguments; repeated calls
//!   with the same inputs return bit-identical results.
//! * **Decoupled**: `n` is an explicit argument, so callers can re-derive
//!   statistics under a different sample count (e.g. subsample reweighting).
//! * **Per-statistic**: Each statistic is available on its own with its own
//!   minimum sample count; [`convert`] computes all of them at once.
//!
//! ## Key concepts
//!
//! Central moments follow from raw moments by binomial expansion:
//!
//! ```text
//! c2 = m2 - μ²
//! c3 = m3 - 3μ·m2 + 2μ³
//! c4 = m4 - 4μ·m3 + 6μ²·m2 - 3μ⁴
//! ```
//!
//! * variance  = n/(n-1) · c2
//! * skewness  = c3 / c2^1.5
//! * kurtosis  = c4 / c2² - 3
//! * G2        = (n-1)/((n-2)(n-3)) · ((n+1)·kurtosis + 6)
//!
//! ## Invariants
//!
//! * `variance` requires `n >= 2`, `kurtosis_g2` requires `n >= 4`.
//! * Zero variance yields non-finite skewness and kurtosis; these are returned,
//!   never replaced.
//!
//! ## Non-goals
//!
//! * This module does not accumulate samples (see `moments`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::moments::RawMoments;
use crate::primitives::errors::DescriptiveError;

/// Minimum sample count for the unbiased variance.
pub const MIN_SAMPLES_VARIANCE: usize = 2;

/// Minimum sample count for the G2 kurtosis estimator.
pub const MIN_SAMPLES_G2: usize = 4;

// ============================================================================
// Central Moments
// ============================================================================

/// Second to fourth (biased) central moments about the mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralMoments<T> {
    /// Second central moment.
    pub c2: T,
    /// Third central moment.
    pub c3: T,
    /// Fourth central moment.
    pub c4: T,
}

impl<T: Float> CentralMoments<T> {
    /// Expand raw moments about zero into central moments about the mean.
    pub fn from_raw(raw: &RawMoments<T>) -> Self {
        let mean = raw.m1;
        let mean2 = mean * mean;

        let c2 = raw.m2 - mean2;
        let c3 = raw.m3 - lit::<T>(3.0) * mean * raw.m2 + lit::<T>(2.0) * mean2 * mean;
        let c4 = raw.m4 - lit::<T>(4.0) * mean * raw.m3 + lit::<T>(6.0) * mean2 * raw.m2
            - lit::<T>(3.0) * mean2 * mean2;

        Self { c2, c3, c4 }
    }
}

// ============================================================================
// Derived Statistics
// ============================================================================

/// Statistics derived from raw moments and a sample count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStatistics<T> {
    /// Sample mean.
    pub mean: T,

    /// Unbiased sample variance.
    pub variance: T,

    /// Skewness from biased central moments.
    pub skewness: T,

    /// Sample excess kurtosis.
    pub kurtosis_sample: T,

    /// Bias-corrected excess kurtosis (G2).
    pub kurtosis_g2: T,
}

impl<T: Float> DerivedStatistics<T> {
    /// Values in order `[mean, variance, skewness, kurtosis_sample, kurtosis_g2]`.
    pub fn to_array(&self) -> [T; 5] {
        [
            self.mean,
            self.variance,
            self.skewness,
            self.kurtosis_sample,
            self.kurtosis_g2,
        ]
    }

    /// Standard deviation, `sqrt(variance)`.
    pub fn std_dev(&self) -> T {
        self.variance.sqrt()
    }
}

// ============================================================================
// Conversion Functions
// ============================================================================

/// Mean, which is the first raw moment.
#[inline]
pub fn mean<T: Float>(raw: &RawMoments<T>) -> T {
    raw.m1
}

/// Unbiased sample variance `n/(n-1) · c2`.
pub fn variance<T: Float>(n: usize, raw: &RawMoments<T>) -> Result<T, DescriptiveError> {
    check_samples(n, MIN_SAMPLES_VARIANCE)?;
    let n_t = count::<T>(n);
    Ok(n_t / (n_t - T::one()) * CentralMoments::from_raw(raw).c2)
}

/// Skewness `c3 / c2^1.5`.
pub fn skewness<T: Float>(raw: &RawMoments<T>) -> T {
    let c = CentralMoments::from_raw(raw);
    skewness_from(&c)
}

/// Sample excess kurtosis `c4 / c2² - 3`.
pub fn kurtosis_sample<T: Float>(raw: &RawMoments<T>) -> T {
    let c = CentralMoments::from_raw(raw);
    kurtosis_from(&c)
}

/// Bias-corrected excess kurtosis `(n-1)/((n-2)(n-3)) · ((n+1)·g2 + 6)`.
pub fn kurtosis_g2<T: Float>(n: usize, raw: &RawMoments<T>) -> Result<T, DescriptiveError> {
    check_samples(n, MIN_SAMPLES_G2)?;
    Ok(g2_from(n, kurtosis_sample(raw)))
}

/// Compute every derived statistic at once.
///
/// Requires `n >= 4` because the result includes G2.
pub fn convert<T: Float>(
    n: usize,
    raw: &RawMoments<T>,
) -> Result<DerivedStatistics<T>, DescriptiveError> {
    check_samples(n, MIN_SAMPLES_G2)?;

    let c = CentralMoments::from_raw(raw);
    let n_t = count::<T>(n);
    let kurtosis_sample = kurtosis_from(&c);

    Ok(DerivedStatistics {
        mean: raw.m1,
        variance: n_t / (n_t - T::one()) * c.c2,
        skewness: skewness_from(&c),
        kurtosis_sample,
        kurtosis_g2: g2_from(n, kurtosis_sample),
    })
}

// ============================================================================
// Helpers
// ============================================================================

#[inline]
fn skewness_from<T: Float>(c: &CentralMoments<T>) -> T {
    c.c3 / c.c2.powf(lit(1.5))
}

#[inline]
fn kurtosis_from<T: Float>(c: &CentralMoments<T>) -> T {
    c.c4 / (c.c2 * c.c2) - lit(3.0)
}

#[inline]
fn g2_from<T: Float>(n: usize, kurtosis_sample: T) -> T {
    let n_t = count::<T>(n);
    let one = T::one();
    let two = lit::<T>(2.0);
    let three = lit::<T>(3.0);
    (n_t - one) / ((n_t - two) * (n_t - three)) * ((n_t + one) * kurtosis_sample + lit(6.0))
}

#[inline]
fn check_samples(n: usize, min: usize) -> Result<(), DescriptiveError> {
    if n < min {
        return Err(DescriptiveError::TooFewSamples { got: n, min });
    }
    Ok(())
}

#[inline]
fn count<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

#[inline]
fn lit<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}
