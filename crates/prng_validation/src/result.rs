//! Structured test results shared by both batteries.

use prng_core::types::BinEntry;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a test.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verdict {
    /// The decision rule accepted the sample.
    Passed,
    /// The decision rule rejected the sample.
    Failed,
    /// The input is too degenerate to decide (fail-closed).
    NotEvaluable {
        /// Why no decision was possible
        reason: String,
    },
    /// Reported for information; no decision rule applies.
    Informational,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => f.write_str("PASS"),
            Verdict::Failed => f.write_str("FAIL"),
            Verdict::NotEvaluable { .. } => f.write_str("---"),
            Verdict::Informational => f.write_str("INFO"),
        }
    }
}

/// What the statistic was compared against.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Threshold {
    /// Upper-tail p-value; pass when above the significance level.
    PValue(f64),
    /// Critical value; pass when the statistic is below it.
    CriticalValue(f64),
    /// Maximum absolute deviation from an expected value.
    Tolerance(f64),
    /// No threshold applies.
    None,
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::PValue(p) => write!(f, "p = {:.4}", p),
            Threshold::CriticalValue(c) => write!(f, "crit = {:.4}", c),
            Threshold::Tolerance(t) => write!(f, "tol = {:.4}", t),
            Threshold::None => f.write_str("-"),
        }
    }
}

/// Test-specific detail attached to a result.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Auxiliary {
    /// Nothing beyond the statistic.
    None,
    /// Sample moments against the uniform(0,1) moments.
    Moments {
        /// Sample mean
        mean: f64,
        /// Sample variance (n − 1)
        variance: f64,
        /// Expected mean, 1/2
        expected_mean: f64,
        /// Expected variance, 1/12
        expected_variance: f64,
    },
    /// Bin table of a chi-square statistic.
    Bins(Vec<BinEntry>),
    /// Runs above and below the median.
    Runs {
        /// Observed number of runs
        runs: usize,
        /// Values above the median
        above: usize,
        /// Values below the median
        below: usize,
        /// Expected number of runs
        expected: f64,
        /// Variance of the number of runs
        variance: f64,
    },
    /// Lengths of consecutive runs, in order.
    RunLengths(Vec<usize>),
    /// Kolmogorov–Smirnov deviations.
    Deviations {
        /// `max((i + 1)/N − F(x_i))`
        d_plus: f64,
        /// `max(F(x_i) − i/N)`
        d_minus: f64,
    },
}

/// Result of one statistical test.
///
/// # Examples
/// ```
/// use prng_validation::{Auxiliary, TestResult, Threshold, Verdict};
///
/// let result = TestResult::not_evaluable("Poker", "fewer than 10 hands");
/// assert!(!result.passed());
/// assert_eq!(result.statistic, 0.0);
/// assert_eq!(result.verdict.to_string(), "---");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TestResult {
    /// Test name.
    pub name: &'static str,
    /// Test statistic (`0.0` when not evaluable).
    pub statistic: f64,
    /// Comparison threshold.
    pub threshold: Threshold,
    /// Degrees of freedom of a chi-square reference distribution.
    pub degrees_of_freedom: Option<usize>,
    /// Outcome.
    pub verdict: Verdict,
    /// Test-specific detail.
    pub auxiliary: Auxiliary,
}

impl TestResult {
    /// A result for input too degenerate to decide.
    pub fn not_evaluable(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            statistic: 0.0,
            threshold: Threshold::None,
            degrees_of_freedom: None,
            verdict: Verdict::NotEvaluable {
                reason: reason.into(),
            },
            auxiliary: Auxiliary::None,
        }
    }

    /// Whether the test passed.
    #[inline]
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }

    /// Whether a decision could be made.
    #[inline]
    pub fn is_evaluable(&self) -> bool {
        !matches!(self.verdict, Verdict::NotEvaluable { .. })
    }
}

pub(crate) fn verdict_from(passed: bool) -> Verdict {
    if passed {
        Verdict::Passed
    } else {
        Verdict::Failed
    }
}
