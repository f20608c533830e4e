//! Chi-square uniformity over equal-width bins of `[0, 1)`.

use prng_core::types::{BinEntry, ValidationError};

use super::chi_square_decision;
use crate::result::TestResult;

/// Chi-square uniformity test with `bins` equal-width bins and
/// `E_i = n / bins`, decided at `bins - 1` degrees of freedom.
///
/// A value of exactly 1.0 is counted in the last bin.
///
/// # Errors
///
/// `ValidationError` when `bins < 2`.
///
/// # Examples
/// ```
/// use prng_validation::randomness::uniformity;
///
/// let values: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
/// let result = uniformity(&values, 10).unwrap();
/// assert_eq!(result.statistic, 0.0);
/// assert!(result.passed());
/// ```
pub fn uniformity(values: &[f64], bins: usize) -> Result<TestResult, ValidationError> {
    const NAME: &str = "Uniformity";

    if bins < 2 {
        return Err(ValidationError::OutOfRange {
            name: "bins",
            value: bins as f64,
            expected: ">= 2",
        });
    }
    if values.is_empty() {
        return Ok(TestResult::not_evaluable(NAME, "empty sequence"));
    }
    if let Some(outside) = values.iter().find(|v| !(0.0..=1.0).contains(*v)) {
        return Ok(TestResult::not_evaluable(
            NAME,
            format!("value {} outside [0, 1]", outside),
        ));
    }

    let mut counts = vec![0usize; bins];
    for value in values {
        let index = ((value * bins as f64) as usize).min(bins - 1);
        counts[index] += 1;
    }

    let expected = values.len() as f64 / bins as f64;
    let width = 1.0 / bins as f64;
    let table: Vec<BinEntry> = counts
        .into_iter()
        .enumerate()
        .map(|(i, observed)| {
            let lower = i as f64 * width;
            BinEntry::new(
                format!("[{:.2}, {:.2})", lower, lower + width),
                observed as f64,
                expected,
            )
        })
        .collect();

    Ok(chi_square_decision(NAME, table, bins - 1))
}
