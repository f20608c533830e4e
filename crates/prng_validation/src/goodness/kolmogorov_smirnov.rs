//! One-sample Kolmogorov–Smirnov test.

use prng_core::math::tables::ks_critical_value;
use prng_variables::DistributionParams;
use tracing::debug;

use super::GoodnessError;
use crate::result::{verdict_from, Auxiliary, TestResult, Threshold};

/// Kolmogorov–Smirnov test of `samples` against a continuous model.
///
/// With the samples sorted, `D+ = max((i + 1)/N − F(x_i))` and
/// `D− = max(F(x_i) − i/N)`, both floored at 0; the test passes when
/// `D = max(D+, D−)` is below the 5% critical value for `N`.
///
/// # Errors
///
/// `GoodnessError::NotContinuous` for discrete models.
///
/// # Examples
/// ```
/// use prng_validation::goodness::kolmogorov_smirnov;
/// use prng_validation::Auxiliary;
/// use prng_variables::DistributionParams;
///
/// let params = DistributionParams::uniform(0.0, 1.0).unwrap();
/// let result = kolmogorov_smirnov(&[0.1, 0.3, 0.5, 0.7, 0.9], &params).unwrap();
///
/// assert!((result.statistic - 0.1).abs() < 1e-12);
/// assert!(result.passed());
/// ```
pub fn kolmogorov_smirnov(samples: &[f64], params: &DistributionParams) -> Result<TestResult, GoodnessError> {
    const NAME: &str = "Kolmogorov-Smirnov";

    if !params.is_continuous() {
        return Err(GoodnessError::NotContinuous {
            distribution: params.model().name(),
        });
    }
    let Some(critical) = ks_critical_value(samples.len()) else {
        return Ok(TestResult::not_evaluable(NAME, "empty sample"));
    };
    if samples.iter().any(|v| v.is_nan()) {
        return Ok(TestResult::not_evaluable(NAME, "NaN in sample"));
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len() as f64;

    let mut d_plus = 0.0_f64;
    let mut d_minus = 0.0_f64;
    for (i, x) in sorted.iter().enumerate() {
        let f = params.cdf(*x)?;
        d_plus = d_plus.max((i + 1) as f64 / n - f);
        d_minus = d_minus.max(f - i as f64 / n);
    }
    let statistic = d_plus.max(d_minus);
    debug!(
        distribution = params.model().name(),
        n = sorted.len(),
        statistic,
        critical,
        "Kolmogorov-Smirnov computed"
    );

    Ok(TestResult {
        name: NAME,
        statistic,
        threshold: Threshold::CriticalValue(critical),
        degrees_of_freedom: None,
        verdict: verdict_from(statistic < critical),
        auxiliary: Auxiliary::Deviations { d_plus, d_minus },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discrete_model_rejected() {
        let params = DistributionParams::binomial(10, 0.5).unwrap();
        assert_eq!(
            kolmogorov_smirnov(&[1.0, 2.0], &params),
            Err(GoodnessError::NotContinuous {
                distribution: "Binomial"
            })
        );
    }

    #[test]
    fn test_empty_not_evaluable() {
        let params = DistributionParams::exponential(1.0).unwrap();
        assert!(!kolmogorov_smirnov(&[], &params).unwrap().is_evaluable());
    }

    #[test]
    fn test_deviations_of_single_point() {
        let params = DistributionParams::uniform(0.0, 1.0).unwrap();
        let result = kolmogorov_smirnov(&[0.25], &params).unwrap();
        match result.auxiliary {
            Auxiliary::Deviations { d_plus, d_minus } => {
                assert_relative_eq!(d_plus, 0.75, epsilon = 1e-12);
                assert_relative_eq!(d_minus, 0.25, epsilon = 1e-12);
            }
            other => panic!("unexpected auxiliary {:?}", other),
        }
        // 0.75 against the n = 1 critical value 0.975
        assert!(result.passed());
    }

    #[test]
    fn test_shifted_sample_fails() {
        let params = DistributionParams::normal(0.0, 1.0).unwrap();
        let samples: Vec<f64> = (0..100).map(|i| 3.0 + i as f64 / 100.0).collect();
        assert!(!kolmogorov_smirnov(&samples, &params).unwrap().passed());
    }
}
