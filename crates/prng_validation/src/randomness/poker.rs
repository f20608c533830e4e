//! Poker test.
//!
//! Each value maps to a digit `floor(10 v)` (1.0 maps to 9); consecutive
//! groups of `k` digits are classified by how many distinct digits they
//! contain.

use prng_core::math::special::{falling_factorial, stirling_second_kind};
use prng_core::types::{BinEntry, ValidationError};

use super::chi_square_over_valid;
use crate::result::TestResult;

/// Number of digit buckets.
pub const POKER_DIGITS: usize = 10;

/// Minimum number of complete hands.
const MIN_HANDS: usize = 10;

/// Probability of exactly `r` distinct digits in a hand of `k`, for
/// `r = 1..=k` (index `r - 1`):
/// `S(k, r) · 10 (10 − 1) ... (10 − r + 1) / 10^k`.
///
/// # Examples
/// ```
/// use prng_validation::randomness::poker_probabilities;
///
/// let probabilities = poker_probabilities(5);
/// assert!((probabilities[4] - 0.3024).abs() < 1e-12);
/// assert!((probabilities.iter().sum::<f64>() - 1.0).abs() < 1e-12);
/// ```
pub fn poker_probabilities(hand_size: usize) -> Vec<f64> {
    let total = (POKER_DIGITS as f64).powi(hand_size as i32);
    (1..=hand_size)
        .map(|r| {
            stirling_second_kind(hand_size, r) * falling_factorial(POKER_DIGITS as u64, r as u64) / total
        })
        .collect()
}

fn distinct_digits(hand: &[f64]) -> usize {
    let mut seen = [false; POKER_DIGITS];
    for value in hand {
        let digit = ((value * POKER_DIGITS as f64) as usize).min(POKER_DIGITS - 1);
        seen[digit] = true;
    }
    seen.iter().filter(|&&s| s).count()
}

/// Poker test with hands of `hand_size` values.
///
/// Leftover values that do not fill a hand are ignored. Fewer than 10
/// hands is not evaluable (statistic 0, not passed).
///
/// # Errors
///
/// `ValidationError` unless `2 <= hand_size <= 10`.
///
/// # Examples
/// ```
/// use prng_validation::randomness::poker;
///
/// let result = poker(&[0.5; 49], 5).unwrap();
/// assert_eq!(result.statistic, 0.0);
/// assert!(!result.passed());
/// ```
pub fn poker(values: &[f64], hand_size: usize) -> Result<TestResult, ValidationError> {
    const NAME: &str = "Poker";

    if !(2..=POKER_DIGITS).contains(&hand_size) {
        return Err(ValidationError::OutOfRange {
            name: "hand_size",
            value: hand_size as f64,
            expected: "[2, 10]",
        });
    }
    let hands = values.len() / hand_size;
    if hands < MIN_HANDS {
        return Ok(TestResult::not_evaluable(
            NAME,
            format!("{} hands; at least {} required", hands, MIN_HANDS),
        ));
    }
    if values.iter().any(|v| !(0.0..=1.0).contains(v)) {
        return Ok(TestResult::not_evaluable(NAME, "values outside [0, 1]"));
    }

    let mut observed = vec![0usize; hand_size];
    for hand in values.chunks_exact(hand_size) {
        observed[distinct_digits(hand) - 1] += 1;
    }

    let bins = observed
        .into_iter()
        .zip(poker_probabilities(hand_size))
        .enumerate()
        .map(|(i, (count, probability))| {
            BinEntry::new(format!("{} distinct", i + 1), count as f64, hands as f64 * probability)
        })
        .collect();

    Ok(chi_square_over_valid(NAME, bins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_five_card_probabilities() {
        let p = poker_probabilities(5);
        let expected = [0.0001, 0.0135, 0.18, 0.504, 0.3024];
        for (got, want) in p.iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_distinct_digits() {
        assert_eq!(distinct_digits(&[0.11, 0.12, 0.55, 0.99, 1.0]), 3);
        assert_eq!(distinct_digits(&[0.0, 0.1, 0.2, 0.3, 0.4]), 5);
    }

    #[test]
    fn test_all_identical_hands_fail() {
        let result = poker(&[0.42; 500], 5).unwrap();
        assert!(result.is_evaluable());
        assert!(!result.passed());
    }

    #[test]
    fn test_hand_size_bounds() {
        assert!(poker(&[0.5; 100], 1).is_err());
        assert!(poker(&[0.5; 100], 11).is_err());
    }
}
