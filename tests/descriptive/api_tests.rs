#![cfg(feature = "dev")]
//! Tests for the high-level builder API.
//!
//! These tests verify the user-facing builder and engine for:
//! - Default and derived-statistics configurations
//! - Duplicate option detection
//! - Learn, Evince and generic execute entry points
//! - Development hooks (custom passes, parallel hint)
//!
//! ## Test Organization
//!
//! 1. **Builder Configuration** - Defaults and options
//! 2. **Duplicate Detection** - Options set twice
//! 3. **Execution** - End-to-end on the reference dataset
//! 4. **Development Hooks** - Custom passes reach the executor

use approx::assert_abs_diff_eq;

use descriptive::internals::algorithms::outliers::OutlierRecord;
use descriptive::internals::api::{
    Dataset, DescriptiveBuilder, DescriptiveError, OutlierParameters, Request, Response,
};

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

// ============================================================================
// Builder Configuration Tests
// ============================================================================

/// Test default builder settings.
#[test]
fn test_builder_defaults() {
    let builder = DescriptiveBuilder::<f64>::new();

    assert!(builder.return_derived.is_none());
    assert!(builder.duplicate_param.is_none());

    let model = builder.build().unwrap();
    assert!(!model.returns_derived());
    assert!(!model.config().parallel);
}

/// Test enabling derived statistics.
#[test]
fn test_builder_return_derived() {
    let model = DescriptiveBuilder::<f64>::default()
        .return_derived()
        .build()
        .unwrap();

    assert!(model.returns_derived());
}

// ============================================================================
// Duplicate Detection Tests
// ============================================================================

/// Test that setting an option twice fails at build time.
#[test]
fn test_duplicate_return_derived() {
    let res = DescriptiveBuilder::<f64>::new()
        .return_derived()
        .return_derived()
        .build();

    assert!(matches!(
        res,
        Err(DescriptiveError::DuplicateParameter {
            parameter: "return_derived"
        })
    ));
}

// ============================================================================
// Execution Tests
// ============================================================================

/// Test Learn then Evince on the reference dataset.
#[test]
fn test_reference_workflow() {
    let ds = reference_dataset();
    let model = DescriptiveBuilder::new().return_derived().build().unwrap();

    let learned = model.learn(&ds).unwrap();
    let derived = learned.derived.as_ref().unwrap();
    assert_abs_diff_eq!(derived[0].mean, 49.2188, epsilon = 1e-3);
    assert_abs_diff_eq!(derived[1].mean, 49.5, epsilon = 1e-3);

    let found = model.evince(&ds, &reference_parameters()).unwrap();
    assert_eq!(found.n_rows(), 10);
}

/// Test that Evince parameters can come from the learned statistics.
///
/// Uses mean and 1.5 standard deviations from a prior Learn.
#[test]
fn test_parameters_from_learned_statistics() {
    let ds = reference_dataset();
    let model = DescriptiveBuilder::new().return_derived().build().unwrap();

    let learned = model.learn(&ds).unwrap();
    let params: Vec<OutlierParameters<f64>> = learned
        .derived
        .unwrap()
        .iter()
        .map(|d| OutlierParameters::new(d.mean, 1.5 * d.std_dev()))
        .collect();

    let found = model.evince(&ds, &params).unwrap();
    assert_eq!(found.n_rows(), 10);
}

/// Test the generic execute entry point.
#[test]
fn test_execute_matches_direct_calls() {
    let ds = reference_dataset();
    let params = reference_parameters();
    let model = DescriptiveBuilder::new().build().unwrap();

    let learned = model.execute(Request::learn(&ds)).unwrap();
    assert_eq!(learned, Response::Learn(model.learn(&ds).unwrap()));

    let found = model.execute(Request::evince(&ds, &params)).unwrap();
    assert_eq!(
        found,
        Response::Evince(model.evince(&ds, &params).unwrap())
    );
}

/// Test that a failed request leaves the engine usable.
#[test]
fn test_failure_is_local() {
    let ds = reference_dataset();
    let model = DescriptiveBuilder::new().build().unwrap();

    let bad = [OutlierParameters::new(49.0, 0.0); 2];
    assert!(model.evince(&ds, &bad).is_err());
    assert_eq!(
        model.evince(&ds, &reference_parameters()).unwrap().n_rows(),
        10
    );
}

// ============================================================================
// Development Hook Tests
// ============================================================================

fn reversed_evince_pass(
    ds: &Dataset<f64>,
    params: &[OutlierParameters<f64>],
) -> Result<Vec<OutlierRecord<f64>>, DescriptiveError> {
    let mut records = Vec::new();
    for (column, (c, p)) in ds.columns().iter().zip(params).enumerate() {
        for (row, &x) in c.values().iter().enumerate().rev() {
            let relative_deviation = p.relative_deviation(x);
            if relative_deviation > 1.0 {
                records.push(OutlierRecord {
                    column,
                    row,
                    relative_deviation,
                });
            }
        }
    }
    Ok(records)
}

/// Test that builder dev hooks reach the executor.
#[test]
fn test_custom_pass_and_parallel_hint() {
    let ds = reference_dataset();
    let model = DescriptiveBuilder::new()
        .custom_evince_pass(reversed_evince_pass)
        .parallel(true)
        .build()
        .unwrap();

    assert!(model.config().parallel);

    let found = model.evince(&ds, &reference_parameters()).unwrap();
    assert_eq!(found.n_rows(), 10);
    assert_eq!(found.records[0].row, 22);
}
