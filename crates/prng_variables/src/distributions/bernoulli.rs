//! Bernoulli distribution.

use prng_core::types::error::ensure_probability;

use super::SUPPORT_TOLERANCE;
use crate::error::VariableError;
use crate::stream::UniformStream;
use crate::variable::RandomVariable;

/// Parameters of Bernoulli(p), with `p ∈ [0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BernoulliParams {
    p: f64,
}

impl BernoulliParams {
    /// Validates `p ∈ [0, 1]`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` outside `[0, 1]`.
    pub fn new(p: f64) -> Result<Self, VariableError> {
        Ok(Self {
            p: ensure_probability("p", p)?,
        })
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

/// Bernoulli(p): `1` when `r ≤ p`, else `0`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bernoulli;

impl RandomVariable for Bernoulli {
    type Params = BernoulliParams;

    fn name() -> &'static str {
        "Bernoulli"
    }

    fn is_continuous() -> bool {
        false
    }

    fn generate(stream: &mut UniformStream<'_>, params: &BernoulliParams) -> Result<f64, VariableError> {
        let r = stream.take_exact(1)?[0];
        Ok(if r <= params.p { 1.0 } else { 0.0 })
    }

    fn probability(x: f64, params: &BernoulliParams) -> f64 {
        if (x - 1.0).abs() < SUPPORT_TOLERANCE {
            params.p
        } else if x.abs() < SUPPORT_TOLERANCE {
            1.0 - params.p
        } else {
            0.0
        }
    }

    fn cdf(x: f64, params: &BernoulliParams) -> Result<f64, VariableError> {
        Ok(if x < 0.0 {
            0.0
        } else if x < 1.0 {
            1.0 - params.p
        } else {
            1.0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        let params = BernoulliParams::new(0.5).unwrap();
        let values = [0.5, 0.500_000_1];
        let mut stream = UniformStream::new(&values).unwrap();
        assert_eq!(Bernoulli::generate(&mut stream, &params).unwrap(), 1.0);
        assert_eq!(Bernoulli::generate(&mut stream, &params).unwrap(), 0.0);
    }

    #[test]
    fn test_mass_and_cdf() {
        let params = BernoulliParams::new(0.3).unwrap();
        assert_eq!(Bernoulli::probability(1.0, &params), 0.3);
        assert_eq!(Bernoulli::probability(0.0, &params), 0.7);
        assert_eq!(Bernoulli::probability(0.5, &params), 0.0);
        assert_eq!(Bernoulli::cdf(-0.1, &params).unwrap(), 0.0);
        assert_eq!(Bernoulli::cdf(0.5, &params).unwrap(), 0.7);
        assert_eq!(Bernoulli::cdf(1.0, &params).unwrap(), 1.0);
    }

    #[test]
    fn test_rejects_out_of_range_probability() {
        assert!(BernoulliParams::new(1.1).is_err());
        assert!(BernoulliParams::new(-0.1).is_err());
        assert!(BernoulliParams::new(0.0).is_ok());
        assert!(BernoulliParams::new(1.0).is_ok());
    }
}
