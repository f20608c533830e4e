//! Frequency tables for rendering samples.
//!
//! Discrete samples are grouped by integer value. Continuous samples use
//! `clamp(floor(sqrt(n)), 5, 20)` equal-width bins over `[min, max]`, the last
//! bin closed on the right.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest number of bins for a continuous histogram.
pub const MIN_CONTINUOUS_BINS: usize = 5;

/// Largest number of bins for a continuous histogram.
pub const MAX_CONTINUOUS_BINS: usize = 20;

/// One bar of a histogram.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistogramBin {
    /// Display label, `"k"` for discrete or `"[lo, hi)"` for continuous bins.
    pub label: String,
    /// Inclusive lower edge.
    pub lower: f64,
    /// Upper edge (exclusive except for the last continuous bin).
    pub upper: f64,
    /// Number of values in the bin.
    pub count: usize,
}

/// Builds a histogram of `values`.
///
/// # Arguments
///
/// * `values` - Sample to tabulate (non-finite values are ignored)
/// * `discrete` - Group by integer value instead of equal-width bins
///
/// # Examples
///
/// ```rust
/// use prng_core::stats::histogram;
///
/// let bars = histogram(&[0.0, 1.0, 1.0, 3.0], true);
/// let counts: Vec<usize> = bars.iter().map(|b| b.count).collect();
/// assert_eq!(counts, vec![1, 2, 1]);
/// assert_eq!(bars[2].label, "3");
/// ```
pub fn histogram(values: &[f64], discrete: bool) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Vec::new();
    }
    if discrete {
        discrete_histogram(&finite)
    } else {
        continuous_histogram(&finite)
    }
}

fn discrete_histogram(values: &[f64]) -> Vec<HistogramBin> {
    let mut keys: Vec<i64> = values.iter().map(|v| v.trunc() as i64).collect();
    keys.sort_unstable();

    let mut bins: Vec<HistogramBin> = Vec::new();
    for key in keys {
        match bins.last_mut() {
            Some(bin) if bin.lower == key as f64 => bin.count += 1,
            _ => bins.push(HistogramBin {
                label: key.to_string(),
                lower: key as f64,
                upper: key as f64 + 1.0,
                count: 1,
            }),
        }
    }
    bins
}

fn continuous_histogram(values: &[f64]) -> Vec<HistogramBin> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range == 0.0 {
        return vec![HistogramBin {
            label: format!("{:.4}", min),
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }

    let n_bins = ((values.len() as f64).sqrt() as usize).clamp(MIN_CONTINUOUS_BINS, MAX_CONTINUOUS_BINS);
    let width = range / n_bins as f64;

    let mut counts = vec![0usize; n_bins];
    for value in values {
        let index = (((value - min) / width) as usize).min(n_bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lower = min + i as f64 * width;
            let upper = if i == n_bins - 1 { max } else { lower + width };
            HistogramBin {
                label: format!("[{:.4}, {:.4})", lower, upper),
                lower,
                upper,
                count,
            }
        })
        .collect()
}
