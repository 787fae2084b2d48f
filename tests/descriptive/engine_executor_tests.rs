#![cfg(feature = "dev")]
//! Tests for the request executor.
//!
//! These tests verify the execution controller for:
//! - Learn and Evince dispatch on the reference dataset
//! - Statelessness (repeated and interleaved requests)
//! - Validation before any pass runs
//! - Injected custom pass functions
//!
//! ## Test Organization
//!
//! 1. **Learn Mode** - Extrema, raw moments, derived statistics
//! 2. **Evince Mode** - Reference outliers
//! 3. **Statelessness** - Mode is per request
//! 4. **Errors** - Validation failures and error mapping
//! 5. **Custom Passes** - Injected pass functions are used

use approx::{assert_abs_diff_eq, assert_relative_eq};

use descriptive::internals::algorithms::outliers::OutlierRecord;
use descriptive::internals::engine::executor::{
    evince_pass, learn_pass, DescriptiveConfig, DescriptiveExecutor, ExecutionMode, Request,
    Response,
};
use descriptive::internals::math::moments::MomentSummary;
use descriptive::internals::primitives::dataset::{Column, Dataset, OutlierParameters};
use descriptive::internals::primitives::errors::DescriptiveError;

// ============================================================================
// Helper Functions
// ============================================================================

fn reference_dataset() -> Dataset<f64> {
    Dataset::from_columns([
        (
            "Metric 1",
            vec![
                46.0, 47.0, 46.0, 46.0, 47.0, 47.0, 49.0, 47.0, 50.0, 46.0, 51.0, 48.0, 52.0, 48.0,
                52.0, 49.0, 53.0, 50.0, 53.0, 50.0, 53.0, 50.0, 54.0, 49.0, 52.0, 50.0, 52.0, 49.0,
                48.0, 48.0, 46.0, 47.0,
            ],
        ),
        (
            "Metric 2",
            vec![
                45.0, 49.0, 47.0, 46.0, 46.0, 49.0, 49.0, 45.0, 50.0, 46.0, 50.0, 48.0, 54.0, 47.0,
                52.0, 49.0, 54.0, 50.0, 54.0, 52.0, 53.0, 51.0, 54.0, 49.0, 52.0, 51.0, 52.0, 47.0,
                48.0, 50.0, 48.0, 47.0,
            ],
        ),
    ])
    .unwrap()
}

fn reference_parameters() -> Vec<OutlierParameters<f64>> {
    vec![
        OutlierParameters::new(49.2188, 1.5 * 5.98286f64.sqrt()),
        OutlierParameters::new(49.5, 1.5 * 7.54839f64.sqrt()),
    ]
}

fn derived_config() -> DescriptiveConfig<f64> {
    DescriptiveConfig {
        return_derived: true,
        ..Default::default()
    }
}

// ============================================================================
// Learn Mode Tests
// ============================================================================

/// Test Learn on the reference dataset.
///
/// Verifies extrema and that converted means match the reference values.
#[test]
fn test_learn_reference() {
    let ds = reference_dataset();
    let response =
        DescriptiveExecutor::run_with_config(Request::learn(&ds), &derived_config()).unwrap();

    assert_eq!(response.mode(), ExecutionMode::Learn);
    let learned = response.into_learn().unwrap();

    assert_eq!(learned.names, vec!["Metric 1", "Metric 2"]);
    assert_eq!(learned.sample_size, 32);
    assert_eq!(learned.summaries[0].min, 46.0);
    assert_eq!(learned.summaries[0].max, 54.0);
    assert_eq!(learned.summaries[1].min, 45.0);
    assert_eq!(learned.summaries[1].max, 54.0);

    let derived = learned.derived.unwrap();
    assert_abs_diff_eq!(derived[0].mean, 49.2188, epsilon = 1e-3);
    assert_abs_diff_eq!(derived[1].mean, 49.5, epsilon = 1e-3);
    assert_relative_eq!(derived[0].variance, 5.982862903225806, max_relative = 1e-10);
    assert_relative_eq!(derived[1].variance, 7.548387096774193, max_relative = 1e-10);
}

/// Test Learn without derived statistics.
#[test]
fn test_learn_without_derived() {
    let ds = reference_dataset();
    let learned = DescriptiveExecutor::learn(&ds, &DescriptiveConfig::default()).unwrap();

    assert!(learned.derived.is_none());
    assert_eq!(learned.summaries.len(), 2);
}

/// Test that derived statistics need at least four samples.
///
/// Without derivation the same dataset learns fine.
#[test]
fn test_learn_derived_too_few_samples() {
    let ds = Dataset::from_columns([("a", vec![1.0, 2.0, 3.0])]).unwrap();

    assert_eq!(
        DescriptiveExecutor::learn(&ds, &derived_config()),
        Err(DescriptiveError::TooFewSamples { got: 3, min: 4 })
    );
    assert!(DescriptiveExecutor::learn(&ds, &DescriptiveConfig::default()).is_ok());
}

/// Test that a constant column yields non-finite derived values, not an error.
#[test]
fn test_learn_zero_variance_column() {
    let ds = Dataset::from_columns([("flat", vec![7.0; 6])]).unwrap();
    let learned = DescriptiveExecutor::learn(&ds, &derived_config()).unwrap();

    let d = learned.derived.unwrap()[0];
    assert_eq!(d.variance, 0.0);
    assert!(d.skewness.is_nan());
}

// ============================================================================
// Evince Mode Tests
// ============================================================================

/// Test Evince on the reference dataset.
///
/// Verifies ten outliers in total, four in the first column.
#[test]
fn test_evince_reference() {
    let ds = reference_dataset();
    let params = reference_parameters();
    let response = DescriptiveExecutor::run_with_config(
        Request::evince(&ds, &params),
        &DescriptiveConfig::default(),
    )
    .unwrap();

    assert_eq!(response.mode(), ExecutionMode::Evince);
    let found = response.as_evince().unwrap();
    assert_eq!(found.n_rows(), 10);
    assert_eq!(found.records_for(0).count(), 4);
    assert_eq!(found.records_for(1).count(), 6);
}

// ============================================================================
// Statelessness Tests
// ============================================================================

/// Test that interleaved requests do not influence each other.
#[test]
fn test_interleaved_requests() {
    let ds = reference_dataset();
    let params = reference_parameters();
    let config = DescriptiveConfig::default();

    let evince_first = DescriptiveExecutor::evince(&ds, &params, &config).unwrap();
    let learn = DescriptiveExecutor::learn(&ds, &config).unwrap();
    let evince_again = DescriptiveExecutor::evince(&ds, &params, &config).unwrap();
    let learn_again = DescriptiveExecutor::learn(&ds, &config).unwrap();

    assert_eq!(evince_first, evince_again);
    assert_eq!(learn, learn_again);
}

/// Test request accessors.
#[test]
fn test_request_accessors() {
    let ds = reference_dataset();
    let params = reference_parameters();

    let learn = Request::learn(&ds);
    let evince = Request::evince(&ds, &params);

    assert_eq!(learn.mode(), ExecutionMode::Learn);
    assert_eq!(evince.mode(), ExecutionMode::Evince);
    assert_eq!(evince.dataset().n_columns(), 2);
    assert_eq!(ExecutionMode::Evince.to_string(), "Evince");
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test that an empty dataset is rejected in both modes.
#[test]
fn test_empty_dataset() {
    let ds = Dataset::<f64>::default();
    let config = DescriptiveConfig::default();

    assert_eq!(
        DescriptiveExecutor::learn(&ds, &config),
        Err(DescriptiveError::EmptyInput)
    );
    assert_eq!(
        DescriptiveExecutor::evince(&ds, &[], &config),
        Err(DescriptiveError::EmptyInput)
    );
}

/// Test Evince rejects a parameter count mismatch.
#[test]
fn test_evince_parameter_mismatch() {
    let ds = reference_dataset();
    let params = [OutlierParameters::new(49.0, 1.0)];

    let res = DescriptiveExecutor::run_with_config(
        Request::evince(&ds, &params),
        &DescriptiveConfig::default(),
    );
    assert!(matches!(
        res,
        Err(DescriptiveError::MismatchedParameters { .. })
    ));
}

/// Test the sequential Learn pass reports the index of an empty column.
#[test]
fn test_learn_pass_empty_column_index() {
    let ds = Dataset::new(vec![Column::new("a", Vec::<f64>::new())]).unwrap();

    assert_eq!(
        learn_pass(&ds),
        Err(DescriptiveError::EmptyColumn { column: 0 })
    );
}

// ============================================================================
// Custom Pass Tests
// ============================================================================

fn constant_learn_pass(ds: &Dataset<f64>) -> Result<Vec<MomentSummary<f64>>, DescriptiveError> {
    let mut summaries = learn_pass(ds)?;
    for s in &mut summaries {
        s.min = -1.0;
    }
    Ok(summaries)
}

fn empty_evince_pass(
    _ds: &Dataset<f64>,
    _params: &[OutlierParameters<f64>],
) -> Result<Vec<OutlierRecord<f64>>, DescriptiveError> {
    Ok(Vec::new())
}

/// Test that injected pass functions replace the defaults.
#[test]
fn test_custom_passes_used() {
    let ds = reference_dataset();
    let params = reference_parameters();
    let config = DescriptiveConfig {
        custom_learn_pass: Some(constant_learn_pass),
        custom_evince_pass: Some(empty_evince_pass),
        ..Default::default()
    };

    let learned = DescriptiveExecutor::learn(&ds, &config).unwrap();
    assert!(learned.summaries.iter().all(|s| s.min == -1.0));

    let found = DescriptiveExecutor::evince(&ds, &params, &config).unwrap();
    assert!(found.is_empty());
}

/// Test that the default passes agree with executor output.
#[test]
fn test_default_passes_match_executor() {
    let ds = reference_dataset();
    let params = reference_parameters();
    let config = DescriptiveConfig::default();

    let learned = DescriptiveExecutor::learn(&ds, &config).unwrap();
    assert_eq!(learned.summaries, learn_pass(&ds).unwrap());

    let found = DescriptiveExecutor::evince(&ds, &params, &config).unwrap();
    assert_eq!(found.records, evince_pass(&ds, &params).unwrap());

    // Response equality covers both variants
    let a = DescriptiveExecutor::run_with_config(Request::learn(&ds), &config).unwrap();
    assert_eq!(a, Response::Learn(learned));
}
