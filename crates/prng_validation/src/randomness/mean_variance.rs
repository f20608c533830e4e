//! Sample moments against the uniform(0,1) moments.

use prng_core::stats::{mean, sample_variance};

use crate::result::{Auxiliary, TestResult, Threshold, Verdict};

const EXPECTED_MEAN: f64 = 0.5;
const EXPECTED_VARIANCE: f64 = 1.0 / 12.0;

/// Compares the sample mean and variance with 1/2 and 1/12.
///
/// Reported only: the verdict is [`Verdict::Informational`]. The statistic
/// is the sample mean; both moments are in the auxiliary data.
///
/// # Examples
/// ```
/// use prng_validation::randomness::mean_variance;
/// use prng_validation::Auxiliary;
///
/// let result = mean_variance(&[0.0, 0.5, 1.0]);
/// assert!((result.statistic - 0.5).abs() < 1e-12);
/// assert!(matches!(result.auxiliary, Auxiliary::Moments { variance, .. } if (variance - 0.25).abs() < 1e-12));
/// ```
pub fn mean_variance(values: &[f64]) -> TestResult {
    const NAME: &str = "Mean/variance";

    let (Some(m), Some(v)) = (mean(values), sample_variance(values)) else {
        return TestResult::not_evaluable(NAME, "empty sequence");
    };

    TestResult {
        name: NAME,
        statistic: m,
        threshold: Threshold::None,
        degrees_of_freedom: None,
        verdict: Verdict::Informational,
        auxiliary: Auxiliary::Moments {
            mean: m,
            variance: v,
            expected_mean: EXPECTED_MEAN,
            expected_variance: EXPECTED_VARIANCE,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_not_evaluable() {
        assert!(!mean_variance(&[]).is_evaluable());
    }

    #[test]
    fn test_reports_expected_moments() {
        let result = mean_variance(&[0.25, 0.75]);
        assert_eq!(result.verdict, Verdict::Informational);
        match result.auxiliary {
            Auxiliary::Moments {
                expected_mean,
                expected_variance,
                ..
            } => {
                assert_eq!(expected_mean, 0.5);
                assert_eq!(expected_variance, 1.0 / 12.0);
            }
            other => panic!("unexpected auxiliary {:?}", other),
        }
    }
}
