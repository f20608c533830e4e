//! Sample summaries.
//!
//! [`SampleSummary`] reports the count, mean, sample variance (n − 1
//! denominator) and mode of a sample. The mode is classified rather than
//! forced: continuous samples rarely repeat a value, so "every value is
//! unique" is a normal outcome.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of the most frequent value(s) in a sample.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ModeClass {
    /// Exactly one value occurs most often (and more than once).
    Single(f64),
    /// Several values tie for the highest frequency, sorted ascending.
    Multimodal(Vec<f64>),
    /// No value occurs more than once.
    AllUnique,
}

/// Summary statistics of a non-empty sample.
///
/// # Examples
///
/// ```rust
/// use prng_core::stats::{ModeClass, SampleSummary};
///
/// let summary = SampleSummary::from_values(&[1.0, 2.0, 2.0, 3.0]).unwrap();
/// assert_eq!(summary.count, 4);
/// assert!((summary.mean - 2.0).abs() < 1e-12);
/// assert!((summary.variance - 2.0 / 3.0).abs() < 1e-12);
/// assert_eq!(summary.mode, ModeClass::Single(2.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SampleSummary {
    /// Number of values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample variance with n − 1 denominator (`0.0` for a single value).
    pub variance: f64,
    /// Mode classification.
    pub mode: ModeClass,
}

impl SampleSummary {
    /// Summarises `values`, returning `None` for an empty slice.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mean = mean(values)?;
        let variance = sample_variance(values)?;
        Some(Self {
            count: values.len(),
            mean,
            variance,
            mode: classify_mode(values),
        })
    }
}

/// Arithmetic mean, `None` for an empty slice.
#[inline]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance with n − 1 denominator.
///
/// Returns `None` for an empty slice and `0.0` for a single value.
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    if values.len() < 2 {
        return Some(0.0);
    }
    let sum_sq: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    Some(sum_sq / (values.len() - 1) as f64)
}

/// Sample median, `None` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use prng_core::stats::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

fn classify_mode(values: &[f64]) -> ModeClass {
    let mut frequencies: HashMap<u64, usize> = HashMap::new();
    for value in values {
        // +0.0 and -0.0 are the same observation
        let key = if *value == 0.0 { 0 } else { value.to_bits() };
        *frequencies.entry(key).or_insert(0) += 1;
    }

    let max_frequency = frequencies.values().copied().max().unwrap_or(0);
    if max_frequency <= 1 {
        return ModeClass::AllUnique;
    }

    let mut modes: Vec<f64> = frequencies
        .iter()
        .filter(|(_, count)| **count == max_frequency)
        .map(|(&bits, _)| f64::from_bits(bits))
        .collect();
    modes.sort_by(f64::total_cmp);

    match modes.as_slice() {
        [single] => ModeClass::Single(*single),
        _ => ModeClass::Multimodal(modes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_sample_has_no_summary() {
        assert!(SampleSummary::from_values(&[]).is_none());
        assert!(mean(&[]).is_none());
        assert!(median(&[]).is_none());
    }

    #[test]
    fn test_single_value_variance_is_zero() {
        let summary = SampleSummary::from_values(&[4.2]).unwrap();
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.mode, ModeClass::AllUnique);
    }

    #[test]
    fn test_variance_uses_n_minus_one() {
        let variance = sample_variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_relative_eq!(variance, 32.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_multimodal_sorted() {
        let summary = SampleSummary::from_values(&[3.0, 1.0, 3.0, 1.0, 2.0]).unwrap();
        assert_eq!(summary.mode, ModeClass::Multimodal(vec![1.0, 3.0]));
    }

    #[test]
    fn test_all_unique() {
        let summary = SampleSummary::from_values(&[0.1, 0.2, 0.3]).unwrap();
        assert_eq!(summary.mode, ModeClass::AllUnique);
    }

    #[test]
    fn test_signed_zero_counted_together() {
        let summary = SampleSummary::from_values(&[0.0, -0.0, 1.0]).unwrap();
        assert_eq!(summary.mode, ModeClass::Single(0.0));
    }
}
