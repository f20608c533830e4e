//! Runs above and below the median.
//!
//! Values equal to the median are dropped before classification; the
//! remaining values form a sequence of above/below signs whose maximal
//! constant stretches are the runs.

use prng_core::math::normal::two_sided_p_value;
use prng_core::math::tables::SIGNIFICANCE_LEVEL;
use prng_core::stats::median;
use prng_core::types::ValidationError;

use crate::result::{verdict_from, Auxiliary, TestResult, Threshold};

/// Expected mean run length of an independent sequence.
pub const EXPECTED_RUN_LENGTH: f64 = 2.0;

/// Above (`true`) / below (`false`) median signs, ties dropped.
fn signs(values: &[f64]) -> Option<Vec<bool>> {
    let m = median(values)?;
    Some(
        values
            .iter()
            .filter(|&&v| v != m)
            .map(|&v| v > m)
            .collect(),
    )
}

fn run_lengths(signs: &[bool]) -> Vec<usize> {
    let mut lengths = Vec::new();
    let mut iter = signs.iter();
    let Some(mut current) = iter.next() else {
        return lengths;
    };
    let mut length = 1;
    for sign in iter {
        if sign == current {
            length += 1;
        } else {
            lengths.push(length);
            current = sign;
            length = 1;
        }
    }
    lengths.push(length);
    lengths
}

/// Runs test: z-score of the number of runs against
/// `E[R] = 2 n1 n2 / (n1 + n2) + 1` and
/// `Var[R] = 2 n1 n2 (2 n1 n2 − n1 − n2) / ((n1 + n2)² (n1 + n2 − 1))`,
/// passing when the two-sided p-value exceeds 0.05.
///
/// Not evaluable when either side of the median is empty or the variance
/// is zero.
///
/// # Examples
/// ```
/// use prng_validation::randomness::runs;
///
/// // strictly alternating: far too many runs
/// let values: Vec<f64> = (0..100).map(|i| if i % 2 == 0 { 0.1 } else { 0.9 }).collect();
/// assert!(!runs(&values).passed());
/// ```
pub fn runs(values: &[f64]) -> TestResult {
    const NAME: &str = "Runs";

    let Some(signs) = signs(values) else {
        return TestResult::not_evaluable(NAME, "empty sequence");
    };
    let above = signs.iter().filter(|&&s| s).count();
    let below = signs.len() - above;
    if above == 0 || below == 0 {
        return TestResult::not_evaluable(NAME, "all values on one side of the median");
    }

    let runs = run_lengths(&signs).len();
    let (n1, n2) = (above as f64, below as f64);
    let n = n1 + n2;
    let expected = 2.0 * n1 * n2 / n + 1.0;
    let variance = 2.0 * n1 * n2 * (2.0 * n1 * n2 - n1 - n2) / (n * n * (n - 1.0));
    if variance <= 0.0 {
        return TestResult::not_evaluable(NAME, "zero variance of the run count");
    }

    let z = (runs as f64 - expected) / variance.sqrt();
    let p_value = two_sided_p_value(z);

    TestResult {
        name: NAME,
        statistic: z,
        threshold: Threshold::PValue(p_value),
        degrees_of_freedom: None,
        verdict: verdict_from(p_value > SIGNIFICANCE_LEVEL),
        auxiliary: Auxiliary::Runs {
            runs,
            above,
            below,
            expected,
            variance,
        },
    }
}

/// Run-length test: passes when the mean run length lies within
/// `tolerance` of 2.0.
///
/// # Errors
///
/// `ValidationError` when `tolerance` is not positive.
///
/// # Examples
/// ```
/// use prng_validation::randomness::run_length;
///
/// // median 0.5; runs: [0.1, 0.2] [0.8] [0.3] [0.9, 0.7] -> mean 1.5
/// let result = run_length(&[0.1, 0.2, 0.8, 0.5, 0.3, 0.9, 0.7], 0.5).unwrap();
/// assert_eq!(result.statistic, 1.5);
/// assert!(result.passed());
/// ```
pub fn run_length(values: &[f64], tolerance: f64) -> Result<TestResult, ValidationError> {
    const NAME: &str = "Run length";

    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(ValidationError::OutOfRange {
            name: "tolerance",
            value: tolerance,
            expected: "(0, +inf)",
        });
    }
    let Some(signs) = signs(values) else {
        return Ok(TestResult::not_evaluable(NAME, "empty sequence"));
    };
    let lengths = run_lengths(&signs);
    if lengths.is_empty() {
        return Ok(TestResult::not_evaluable(NAME, "every value equals the median"));
    }

    let mean_length = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    Ok(TestResult {
        name: NAME,
        statistic: mean_length,
        threshold: Threshold::Tolerance(tolerance),
        degrees_of_freedom: None,
        verdict: verdict_from((mean_length - EXPECTED_RUN_LENGTH).abs() <= tolerance),
        auxiliary: Auxiliary::RunLengths(lengths),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_lengths() {
        assert_eq!(run_lengths(&[true, true, false, true, false, false, false]), vec![2, 1, 1, 3]);
        assert!(run_lengths(&[]).is_empty());
    }

    #[test]
    fn test_constant_sequence_not_evaluable() {
        let values = vec![0.4; 50];
        assert!(!runs(&values).is_evaluable());
        assert!(!run_length(&values, 0.5).unwrap().is_evaluable());
    }

    #[test]
    fn test_runs_statistics() {
        // median 0.5 is dropped: signs - - + + - + give 4 runs
        let values = [0.1, 0.2, 0.8, 0.9, 0.5, 0.3, 0.7];
        let result = runs(&values);
        match result.auxiliary {
            Auxiliary::Runs {
                runs,
                above,
                below,
                expected,
                ..
            } => {
                assert_eq!((runs, above, below), (4, 3, 3));
                assert!((expected - 4.0).abs() < 1e-12);
            }
            other => panic!("unexpected auxiliary {:?}", other),
        }
        assert!(result.statistic.abs() < 1e-12);
        assert!(result.passed());
    }

    #[test]
    fn test_two_values_have_zero_variance() {
        assert!(!runs(&[0.1, 0.9]).is_evaluable());
    }

    #[test]
    fn test_sorted_sequence_fails_both() {
        let values: Vec<f64> = (0..200).map(|i| i as f64 / 200.0).collect();
        assert!(!runs(&values).passed());
        assert!(!run_length(&values, 0.5).unwrap().passed());
    }

    #[test]
    fn test_invalid_tolerance() {
        assert!(run_length(&[0.1, 0.9], -1.0).is_err());
    }
}
