//! Binned chi-square goodness of fit.

use std::collections::HashMap;

use prng_core::math::tables::chi_square_critical_value;
use prng_core::types::BinEntry;
use prng_variables::DistributionParams;
use tracing::{debug, warn};

use super::GoodnessError;
use crate::randomness::MIN_EXPECTED;
use crate::result::{verdict_from, Auxiliary, TestResult, Threshold};

const NAME: &str = "Chi-square";

/// Minimum sample size for the chi-square fit.
const MIN_SAMPLES: usize = 5;

/// Integer support points match samples within this distance.
const SUPPORT_TOLERANCE: f64 = 1e-9;

/// Number of equal-width bins for `n` continuous samples:
/// `max(3, round(sqrt(n)))`.
///
/// # Examples
/// ```
/// use prng_validation::goodness::gof_bin_count;
///
/// assert_eq!(gof_bin_count(4), 3);
/// assert_eq!(gof_bin_count(100), 10);
/// assert_eq!(gof_bin_count(110), 10);
/// ```
pub fn gof_bin_count(n: usize) -> usize {
    ((n as f64).sqrt().round() as usize).max(3)
}

/// Observed and expected bin table of `samples` under `params`.
///
/// Continuous models use [`gof_bin_count`] equal-width bins over
/// `[min, max]` (the last bin closed) with expected count
/// `N (F(hi) − F(lo))`; discrete models use one bin per integer from
/// `floor(min)` to `ceil(max)` with expected count `N · pmf(x)`.
///
/// Returns `None` for empty input or non-finite samples, and for a
/// continuous sample with zero range.
///
/// # Errors
///
/// `GoodnessError::Variable` when the model CDF cannot be evaluated.
pub fn fit_bins(samples: &[f64], params: &DistributionParams) -> Result<Option<Vec<BinEntry>>, GoodnessError> {
    if samples.is_empty() || samples.iter().any(|v| !v.is_finite()) {
        return Ok(None);
    }
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let n = samples.len() as f64;

    if !params.is_continuous() {
        let mut counts: HashMap<i64, usize> = HashMap::new();
        for v in samples {
            let rounded = v.round();
            if (v - rounded).abs() < SUPPORT_TOLERANCE {
                *counts.entry(rounded as i64).or_default() += 1;
            }
        }
        let lo = min.floor() as i64;
        let hi = max.ceil() as i64;
        let bins = (lo..=hi)
            .map(|k| {
                let observed = counts.get(&k).copied().unwrap_or(0);
                BinEntry::new(k.to_string(), observed as f64, n * params.probability(k as f64))
            })
            .collect();
        return Ok(Some(bins));
    }

    let range = max - min;
    if range <= 0.0 {
        return Ok(None);
    }
    let k = gof_bin_count(samples.len());
    let width = range / k as f64;

    let mut observed = vec![0usize; k];
    for v in samples {
        let index = (((v - min) / width) as usize).min(k - 1);
        observed[index] += 1;
    }

    let mut bins = Vec::with_capacity(k);
    for (i, count) in observed.into_iter().enumerate() {
        let lower = min + i as f64 * width;
        let upper = if i == k - 1 { max } else { lower + width };
        let probability = params.cdf(upper)? - params.cdf(lower)?;
        bins.push(BinEntry::new(
            format!("[{:.4}, {:.4})", lower, upper),
            count as f64,
            n * probability,
        ));
    }
    Ok(Some(bins))
}

/// Combined label of two adjacent bins.
///
/// Interval labels `[a, b)` and `[c, d)` give `[a, d)`; point labels `a`
/// (or ranges `a - b`) give `a - d`.
fn merge_labels(left: &str, right: &str) -> String {
    match (left.split_once(','), right.split_once(',')) {
        (Some((lower, _)), Some((_, upper))) => format!("{},{}", lower, upper),
        _ => {
            let first = left.split(" - ").next().unwrap_or(left);
            let last = right.rsplit(" - ").next().unwrap_or(right);
            format!("{} - {}", first, last)
        }
    }
}

/// Merges bins with expected count below 5 into their neighbours.
///
/// One forward pass: a deficient bin absorbs its right neighbour and is
/// emitted. A deficient trailing bin is then folded back into the bin
/// before it. Observed and expected totals are conserved.
///
/// Each deficient bin absorbs at most one neighbour, so a merged pair can
/// still fall short of the threshold. This is not greedy accumulation:
/// expected counts `[1, 1, 1, 1, 10, 10]` become `[2, 2, 10, 10]`, not
/// `[14, 10]`.
///
/// # Examples
/// ```
/// use prng_core::types::BinEntry;
/// use prng_validation::goodness::merge_small_bins;
///
/// let bins = vec![
///     BinEntry::new("0", 1.0, 2.0),
///     BinEntry::new("1", 3.0, 2.0),
///     BinEntry::new("2", 9.0, 10.0),
///     BinEntry::new("3", 2.0, 1.0),
/// ];
/// let merged = merge_small_bins(bins);
///
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0].expected(), 4.0);
/// assert_eq!(merged[1].expected(), 11.0);
/// assert_eq!(merged[1].label(), "2 - 3");
/// ```
pub fn merge_small_bins(bins: Vec<BinEntry>) -> Vec<BinEntry> {
    let before = bins.len();
    let mut merged: Vec<BinEntry> = Vec::with_capacity(before);
    let mut iter = bins.into_iter();

    while let Some(mut bin) = iter.next() {
        if bin.expected() < MIN_EXPECTED {
            if let Some(next) = iter.next() {
                let label = merge_labels(bin.label(), next.label());
                bin.absorb(next, label);
            }
        }
        merged.push(bin);
    }

    if merged.len() > 1 && merged.last().is_some_and(|b| b.expected() < MIN_EXPECTED) {
        if let Some(trailing) = merged.pop() {
            if let Some(previous) = merged.last_mut() {
                let label = merge_labels(previous.label(), trailing.label());
                previous.absorb(trailing, label);
            }
        }
    }

    debug!(before, after = merged.len(), "chi-square bins merged");
    merged
}

/// Chi-square goodness-of-fit test of `samples` against `params`.
///
/// Degrees of freedom are `bins − estimated − 1` after merging; the test
/// passes when the statistic is below the 5% critical value.
///
/// # Errors
///
/// `GoodnessError::Variable` when the model CDF cannot be evaluated.
///
/// # Examples
/// ```
/// use prng_validation::goodness::chi_square_fit;
/// use prng_variables::DistributionParams;
///
/// let params = DistributionParams::uniform(0.0, 1.0).unwrap();
/// let samples: Vec<f64> = (0..400).map(|i| (i as f64 + 0.5) / 400.0).collect();
/// let result = chi_square_fit(&samples, &params, 0).unwrap();
///
/// assert_eq!(result.degrees_of_freedom, Some(19));
/// assert!(result.passed());
/// ```
pub fn chi_square_fit(
    samples: &[f64],
    params: &DistributionParams,
    estimated: usize,
) -> Result<TestResult, GoodnessError> {
    if samples.len() < MIN_SAMPLES {
        warn!(n = samples.len(), "chi-square fit on too few samples");
        return Ok(TestResult::not_evaluable(
            NAME,
            format!("{} samples; at least {} required", samples.len(), MIN_SAMPLES),
        ));
    }
    let Some(bins) = fit_bins(samples, params)? else {
        warn!(distribution = params.model().name(), "chi-square fit on degenerate samples");
        return Ok(TestResult::not_evaluable(NAME, "non-finite samples or zero range"));
    };

    let bins = merge_small_bins(bins);
    let df = bins.len().saturating_sub(estimated + 1);
    let Some(critical) = chi_square_critical_value(df) else {
        return Ok(TestResult::not_evaluable(
            NAME,
            format!("{} bins after merging leave no degrees of freedom", bins.len()),
        ));
    };

    let statistic: f64 = bins.iter().map(BinEntry::chi_term).sum();
    debug!(
        distribution = params.model().name(),
        statistic, df, critical, "chi-square fit computed"
    );

    Ok(TestResult {
        name: NAME,
        statistic,
        threshold: Threshold::CriticalValue(critical),
        degrees_of_freedom: Some(df),
        verdict: verdict_from(statistic < critical),
        auxiliary: Auxiliary::Bins(bins),
    })
}
