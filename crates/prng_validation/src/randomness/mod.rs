//! Randomness battery: tests on the raw normalised sequence.
//!
//! Every chi-square based test decides on the upper-tail p-value of the
//! chi-square distribution at its degrees of freedom: pass when
//! `p > 0.05`.

mod gaps;
mod mean_variance;
mod poker;
mod runs;
mod uniformity;

pub use gaps::gaps;
pub use mean_variance::mean_variance;
pub use poker::{poker, poker_probabilities, POKER_DIGITS};
pub use runs::{run_length, runs, EXPECTED_RUN_LENGTH};
pub use uniformity::uniformity;

use prng_core::math::special::chi_square_survival;
use prng_core::math::tables::SIGNIFICANCE_LEVEL;
use prng_core::types::{BinEntry, ValidationError};
use tracing::debug;

use crate::result::{verdict_from, Auxiliary, TestResult, Threshold};

/// Smallest expected count for a category to enter a chi-square sum.
pub const MIN_EXPECTED: f64 = 5.0;

/// Default number of uniformity bins.
pub const DEFAULT_UNIFORMITY_BINS: usize = 10;

/// Default gap interval `[α, β)`.
pub const DEFAULT_GAP_INTERVAL: (f64, f64) = (0.0, 0.5);

/// Default poker hand size.
pub const DEFAULT_POKER_HAND: usize = 5;

/// Default run-length tolerance around the expected mean of 2.0.
pub const DEFAULT_RUN_LENGTH_TOLERANCE: f64 = 0.5;

/// Randomness battery configuration.
///
/// # Examples
///
/// ```rust
/// use prng_validation::randomness::BatteryConfig;
///
/// let config = BatteryConfig::builder()
///     .gap_interval(0.2, 0.7)
///     .poker_hand_size(4)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.gap_interval(), (0.2, 0.7));
/// assert_eq!(config.uniformity_bins(), 10);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BatteryConfig {
    uniformity_bins: usize,
    gap_interval: (f64, f64),
    poker_hand_size: usize,
    run_length_tolerance: f64,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            uniformity_bins: DEFAULT_UNIFORMITY_BINS,
            gap_interval: DEFAULT_GAP_INTERVAL,
            poker_hand_size: DEFAULT_POKER_HAND,
            run_length_tolerance: DEFAULT_RUN_LENGTH_TOLERANCE,
        }
    }
}

impl BatteryConfig {
    /// Creates a builder starting from the defaults.
    #[inline]
    pub fn builder() -> BatteryConfigBuilder {
        BatteryConfigBuilder::default()
    }

    /// Number of equal-width uniformity bins.
    #[inline]
    pub fn uniformity_bins(&self) -> usize {
        self.uniformity_bins
    }

    /// Gap interval `[α, β)`.
    #[inline]
    pub fn gap_interval(&self) -> (f64, f64) {
        self.gap_interval
    }

    /// Values per poker hand.
    #[inline]
    pub fn poker_hand_size(&self) -> usize {
        self.poker_hand_size
    }

    /// Allowed deviation of the mean run length from 2.0.
    #[inline]
    pub fn run_length_tolerance(&self) -> f64 {
        self.run_length_tolerance
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if:
    /// - fewer than 2 uniformity bins
    /// - the gap interval is not `0 <= α < β <= 1`
    /// - the poker hand size is outside `2..=10`
    /// - the run-length tolerance is not positive
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.uniformity_bins < 2 {
            return Err(ValidationError::OutOfRange {
                name: "uniformity_bins",
                value: self.uniformity_bins as f64,
                expected: ">= 2",
            });
        }
        let (alpha, beta) = self.gap_interval;
        if !(0.0..1.0).contains(&alpha) || !(alpha < beta && beta <= 1.0) {
            return Err(ValidationError::Ordering {
                constraint: "0 <= alpha < beta <= 1",
                detail: format!("alpha = {}, beta = {}", alpha, beta),
            });
        }
        if !(2..=POKER_DIGITS).contains(&self.poker_hand_size) {
            return Err(ValidationError::OutOfRange {
                name: "poker_hand_size",
                value: self.poker_hand_size as f64,
                expected: "2..=10",
            });
        }
        if !(self.run_length_tolerance.is_finite() && self.run_length_tolerance > 0.0) {
            return Err(ValidationError::OutOfRange {
                name: "run_length_tolerance",
                value: self.run_length_tolerance,
                expected: "(0, +inf)",
            });
        }
        Ok(())
    }
}

/// Builder for [`BatteryConfig`], validated on [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct BatteryConfigBuilder {
    config: BatteryConfig,
}

impl BatteryConfigBuilder {
    /// Sets the number of uniformity bins.
    #[inline]
    pub fn uniformity_bins(mut self, bins: usize) -> Self {
        self.config.uniformity_bins = bins;
        self
    }

    /// Sets the gap interval `[α, β)`.
    #[inline]
    pub fn gap_interval(mut self, alpha: f64, beta: f64) -> Self {
        self.config.gap_interval = (alpha, beta);
        self
    }

    /// Sets the poker hand size.
    #[inline]
    pub fn poker_hand_size(mut self, size: usize) -> Self {
        self.config.poker_hand_size = size;
        self
    }

    /// Sets the run-length tolerance.
    #[inline]
    pub fn run_length_tolerance(mut self, tolerance: f64) -> Self {
        self.config.run_length_tolerance = tolerance;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// See [`BatteryConfig::validate`].
    pub fn build(self) -> Result<BatteryConfig, ValidationError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Results of the full randomness battery, in a fixed order.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomnessReport {
    results: Vec<TestResult>,
}

impl RandomnessReport {
    /// Individual results: mean/variance, uniformity, runs, run length,
    /// gaps, poker.
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Result of the named test.
    pub fn get(&self, name: &str) -> Option<&TestResult> {
        self.results.iter().find(|r| r.name == name)
    }

    /// Number of decided tests that passed.
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    /// Consumes the report.
    pub fn into_results(self) -> Vec<TestResult> {
        self.results
    }
}

/// Runs every randomness test on `values`.
///
/// # Errors
///
/// `ValidationError` when `config` is invalid. Degenerate input yields
/// not-evaluable results rather than errors.
pub fn run_battery(values: &[f64], config: &BatteryConfig) -> Result<RandomnessReport, ValidationError> {
    config.validate()?;
    let (alpha, beta) = config.gap_interval;
    let results = vec![
        mean_variance(values),
        uniformity(values, config.uniformity_bins)?,
        runs(values),
        run_length(values, config.run_length_tolerance)?,
        gaps(values, alpha, beta)?,
        poker(values, config.poker_hand_size)?,
    ];
    debug!(
        n = values.len(),
        passed = results.iter().filter(|r| r.passed()).count(),
        "randomness battery finished"
    );
    Ok(RandomnessReport { results })
}

/// Chi-square decision over `bins`, keeping only categories with
/// expected count ≥ 5. Not evaluable with fewer than two such categories.
pub(crate) fn chi_square_over_valid(name: &'static str, bins: Vec<BinEntry>) -> TestResult {
    let valid: Vec<BinEntry> = bins
        .into_iter()
        .filter(|bin| bin.expected() >= MIN_EXPECTED)
        .collect();
    if valid.len() < 2 {
        return TestResult::not_evaluable(
            name,
            format!(
                "{} categories with expected count >= {}; at least 2 required",
                valid.len(),
                MIN_EXPECTED
            ),
        );
    }
    let df = valid.len() - 1;
    chi_square_decision(name, valid, df)
}

/// Chi-square decision on the upper-tail p-value.
pub(crate) fn chi_square_decision(name: &'static str, bins: Vec<BinEntry>, df: usize) -> TestResult {
    let statistic: f64 = bins.iter().map(BinEntry::chi_term).sum();
    let p_value = chi_square_survival(statistic, df);
    TestResult {
        name,
        statistic,
        threshold: Threshold::PValue(p_value),
        degrees_of_freedom: Some(df),
        verdict: verdict_from(p_value > SIGNIFICANCE_LEVEL),
        auxiliary: Auxiliary::Bins(bins),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BatteryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.poker_hand_size(), 5);
        assert_eq!(config.run_length_tolerance(), 0.5);
    }

    #[test]
    fn test_builder_rejects_invalid() {
        assert!(BatteryConfig::builder().uniformity_bins(1).build().is_err());
        assert!(BatteryConfig::builder().gap_interval(0.5, 0.5).build().is_err());
        assert!(BatteryConfig::builder().gap_interval(-0.1, 0.5).build().is_err());
        assert!(BatteryConfig::builder().gap_interval(0.2, 1.1).build().is_err());
        assert!(BatteryConfig::builder().poker_hand_size(11).build().is_err());
        assert!(BatteryConfig::builder().run_length_tolerance(0.0).build().is_err());
    }

    #[test]
    fn test_chi_square_over_valid_drops_small_categories() {
        let bins = vec![
            BinEntry::new("a", 12.0, 10.0),
            BinEntry::new("b", 8.0, 10.0),
            BinEntry::new("c", 3.0, 1.0),
        ];
        let result = chi_square_over_valid("t", bins);
        assert_eq!(result.degrees_of_freedom, Some(1));
        assert!((result.statistic - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_chi_square_over_valid_needs_two_categories() {
        let result = chi_square_over_valid("t", vec![BinEntry::new("a", 12.0, 10.0)]);
        assert!(!result.is_evaluable());
    }

    #[test]
    fn test_empty_input_battery() {
        let report = run_battery(&[], &BatteryConfig::default()).unwrap();
        assert_eq!(report.results().len(), 6);
        assert_eq!(report.passed_count(), 0);
        assert!(report.results().iter().all(|r| !r.passed()));
    }
}
