//! Gap test.

use prng_core::types::{BinEntry, ValidationError};

use super::chi_square_over_valid;
use crate::result::TestResult;

/// Gap lengths `0..=4` get their own bucket; the last bucket is `>= 5`.
const GAP_BUCKETS: usize = 6;

fn validate_interval(alpha: f64, beta: f64) -> Result<(), ValidationError> {
    if !(alpha.is_finite() && beta.is_finite() && 0.0 <= alpha && alpha < beta && beta <= 1.0) {
        return Err(ValidationError::Ordering {
            constraint: "0 <= alpha < beta <= 1",
            detail: format!("alpha = {}, beta = {}", alpha, beta),
        });
    }
    Ok(())
}

/// Gap lengths between successive values in `[alpha, beta)`.
fn gap_lengths(values: &[f64], alpha: f64, beta: f64) -> Vec<usize> {
    let mut gaps = Vec::new();
    let mut last_hit: Option<usize> = None;
    for (i, value) in values.iter().enumerate() {
        if (alpha..beta).contains(value) {
            if let Some(previous) = last_hit {
                gaps.push(i - previous - 1);
            }
            last_hit = Some(i);
        }
    }
    gaps
}

/// Gap test on `[alpha, beta)` with `p = beta - alpha`.
///
/// Gaps of length `i` are expected `n (1 − p)^i p` times for `i < 5`;
/// the `>= 5` bucket takes the tail mass `n (1 − p)^5`. Categories with
/// expected count below 5 are dropped before the chi-square sum.
///
/// # Errors
///
/// `ValidationError` unless `0 <= alpha < beta <= 1`.
///
/// # Examples
/// ```
/// use prng_validation::randomness::gaps;
///
/// // every value is a hit: all gaps have length 0
/// let values = vec![0.25; 100];
/// let result = gaps(&values, 0.0, 0.5).unwrap();
/// assert!(!result.passed());
/// ```
pub fn gaps(values: &[f64], alpha: f64, beta: f64) -> Result<TestResult, ValidationError> {
    const NAME: &str = "Gaps";

    validate_interval(alpha, beta)?;
    let lengths = gap_lengths(values, alpha, beta);
    if lengths.is_empty() {
        return Ok(TestResult::not_evaluable(NAME, "fewer than two values in the gap interval"));
    }

    let mut observed = [0usize; GAP_BUCKETS];
    for length in &lengths {
        observed[(*length).min(GAP_BUCKETS - 1)] += 1;
    }

    let n = lengths.len() as f64;
    let p = beta - alpha;
    let q = 1.0 - p;
    let bins = observed
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            if i == GAP_BUCKETS - 1 {
                BinEntry::new(format!(">= {}", i), count as f64, n * q.powi(i as i32))
            } else {
                BinEntry::new(i.to_string(), count as f64, n * q.powi(i as i32) * p)
            }
        })
        .collect();

    Ok(chi_square_over_valid(NAME, bins))
}
