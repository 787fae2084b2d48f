//! Descriptive Statistics Examples
//!
//! This example walks through the two request modes on a two-column
//! measurement dataset:
//! - Learning extrema and raw moments
//! - Converting raw moments into derived statistics, also under another n
//! - Searching for outliers against nominal values and allowed deviations
//! - Reading outlier parameters from their table form
//!
//! Each scenario prints its result table.

#[cfg(feature = "std")]
use descriptive::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), DescriptiveError> {
    println!("{}", "=".repeat(80));
    println!("Descriptive Statistics - Learn and Evince Examples");
    println!("{}", "=".repeat(80));
    println!();

    let data = measurement_dataset()?;

    example_1_learn(&data)?;
    example_2_rederive(&data)?;
    example_3_evince(&data)?;
    example_4_parameter_table(&data)?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
fn measurement_dataset() -> Result<Dataset<f64>, DescriptiveError> {
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
}

#[cfg(feature = "std")]
/// Example 1: Learn
/// Extrema and raw moments, plus derived statistics for each column
fn example_1_learn(data: &Dataset<f64>) -> Result<(), DescriptiveError> {
    println!("Example 1: Learn");
    println!("{}", "-".repeat(80));

    let model = Descriptive::new().return_derived().build()?;
    let learned = model.learn(data)?;
    println!("{}", learned);

    // Expected means: Metric 1 = 49.21875, Metric 2 = 49.5
    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Re-deriving statistics
/// Raw moments are kept, so conversion can be repeated with any sample count
fn example_2_rederive(data: &Dataset<f64>) -> Result<(), DescriptiveError> {
    println!("Example 2: Re-deriving with another sample count");
    println!("{}", "-".repeat(80));

    let model = Descriptive::new().build()?;
    let learned = model.learn(data)?;

    for n in [learned.sample_size, 16, 8] {
        let d = learned.derive(0, n)?;
        println!(
            "n = {:>3}: mean {:.5}  variance {:.5}  skewness {:.5}  kurtosis {:.5}  G2 {:.5}",
            n, d.mean, d.variance, d.skewness, d.kurtosis_sample, d.kurtosis_g2
        );
    }

    match learned.derive(0, 3) {
        Ok(_) => println!("unexpected success for n = 3"),
        Err(e) => println!("n =   3: {}", e),
    }

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Evince
/// Flag samples further than 1.5 standard deviations from the nominal value
fn example_3_evince(data: &Dataset<f64>) -> Result<(), DescriptiveError> {
    println!("Example 3: Evince");
    println!("{}", "-".repeat(80));

    let params = [
        OutlierParameters::new(49.2188, 1.5 * 5.98286f64.sqrt()),
        OutlierParameters::new(49.5, 1.5 * 7.54839f64.sqrt()),
    ];

    let model = Descriptive::new().build()?;
    let found = model.execute(Request::evince(data, &params))?;
    if let Some(table) = found.as_evince() {
        println!("{}", table);
    }

    // Expected: 10 outliers, 4 in Metric 1 and 6 in Metric 2
    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Parameter table
/// Parameters supplied as a table with rows {nominal, allowed deviation}
fn example_4_parameter_table(data: &Dataset<f64>) -> Result<(), DescriptiveError> {
    println!("Example 4: Parameters from a table");
    println!("{}", "-".repeat(80));

    let table = Dataset::from_columns([("Metric 1", vec![50.0, 3.0]), ("Metric 2", vec![50.0, 4.0])])?;
    let params = OutlierParameters::from_table(&table)?;

    let model = Descriptive::new().build()?;
    let found = model.evince(data, &params)?;
    println!("{}", found);

    if let Some(max) = found.max_relative_deviation() {
        println!("Largest relative deviation: {:.4}", max);
    }

    println!();
    Ok(())
}
