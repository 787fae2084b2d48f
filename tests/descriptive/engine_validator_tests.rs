#![cfg(feature = "dev")]
//! Tests for input validation utilities.
//!
//! These tests verify the validation functions run before every request:
//! - Dataset shape (non-empty, equal lengths, at least one sample)
//! - Outlier parameter count and deviations
//! - Sample count minimums and builder duplicates
//!
//! ## Test Organization
//!
//! 1. **Dataset Validation** - Empty, ragged, zero-length
//! 2. **Parameter Validation** - Count and deviation checks
//! 3. **Sample Counts** - Minimum n per moment order
//! 4. **Builder Validation** - Duplicate options

use descriptive::internals::engine::validator::Validator;
use descriptive::internals::primitives::dataset::{Column, Dataset, OutlierParameters};
use descriptive::internals::primitives::errors::DescriptiveError;

// ============================================================================
// Helper Functions
// ============================================================================

fn make_valid_dataset() -> Dataset<f64> {
    Dataset::from_columns([("a", vec![1.0, 2.0, 3.0]), ("b", vec![4.0, 5.0, 6.0])]).unwrap()
}

// ============================================================================
// Dataset Validation Tests
// ============================================================================

/// Test a well-formed dataset passes.
#[test]
fn test_validate_dataset_ok() {
    assert!(Validator::validate_dataset(&make_valid_dataset()).is_ok());
}

/// Test validation rejects a dataset without columns.
#[test]
fn test_validate_empty_dataset() {
    let ds = Dataset::<f64>::default();

    assert_eq!(
        Validator::validate_dataset(&ds),
        Err(DescriptiveError::EmptyInput)
    );
}

/// Test validation rejects columns without samples.
#[test]
fn test_validate_empty_columns() {
    let ds = Dataset::new(vec![
        Column::new("a", Vec::<f64>::new()),
        Column::new("b", Vec::new()),
    ])
    .unwrap();

    assert!(matches!(
        Validator::validate_dataset(&ds),
        Err(DescriptiveError::EmptyColumn { column: 0 })
    ));
}

// ============================================================================
// Parameter Validation Tests
// ============================================================================

/// Test matching parameters pass.
#[test]
fn test_validate_parameters_ok() {
    let params = [
        OutlierParameters::new(2.0, 1.0),
        OutlierParameters::new(5.0, 0.5),
    ];
    assert!(Validator::validate_parameters(&make_valid_dataset(), &params).is_ok());
}

/// Test validation rejects a parameter count mismatch.
#[test]
fn test_validate_parameter_count() {
    let params = [OutlierParameters::new(2.0, 1.0); 3];

    assert_eq!(
        Validator::validate_parameters(&make_valid_dataset(), &params),
        Err(DescriptiveError::MismatchedParameters {
            columns: 2,
            parameters: 3
        })
    );
}

/// Test validation rejects a zero allowed deviation.
///
/// Verifies the reported column and value.
#[test]
fn test_validate_zero_deviation() {
    let params = [
        OutlierParameters::new(2.0, 0.0),
        OutlierParameters::new(5.0, 1.0),
    ];

    assert_eq!(
        Validator::validate_parameters(&make_valid_dataset(), &params),
        Err(DescriptiveError::InvalidDeviation {
            column: 0,
            value: 0.0
        })
    );
}

// ============================================================================
// Sample Count Tests
// ============================================================================

/// Test sample count boundaries.
#[test]
fn test_validate_sample_count() {
    assert!(Validator::validate_sample_count(4, 4).is_ok());
    assert_eq!(
        Validator::validate_sample_count(3, 4),
        Err(DescriptiveError::TooFewSamples { got: 3, min: 4 })
    );
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test duplicate detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());

    let err = Validator::validate_no_duplicates(Some("return_derived")).unwrap_err();
    assert_eq!(
        err,
        DescriptiveError::DuplicateParameter {
            parameter: "return_derived"
        }
    );
    assert!(err.to_string().contains("return_derived"));
}
