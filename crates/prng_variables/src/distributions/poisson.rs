//! Poisson distribution by the multiplicative method.

use prng_core::math::special::{ln_factorial, regularised_lower_gamma};
use prng_core::types::error::ensure_positive;

use super::support_point;
use crate::error::VariableError;
use crate::stream::UniformStream;
use crate::variable::RandomVariable;

/// Parameters of Poisson(λ), with `λ > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoissonParams {
    lambda: f64,
}

impl PoissonParams {
    /// Validates `λ > 0`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a non-positive or non-finite mean.
    pub fn new(lambda: f64) -> Result<Self, VariableError> {
        Ok(Self {
            lambda: ensure_positive("lambda", lambda)?,
        })
    }

    /// Mean λ.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

/// Poisson(λ): multiply uniforms until the running product drops below
/// `e^-λ`; the sample is the number of factors minus one.
///
/// The product is tracked as a sum of logarithms compared against `-λ`, so
/// means beyond the range of `e^-λ` still terminate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Poisson;

impl RandomVariable for Poisson {
    type Params = PoissonParams;

    fn name() -> &'static str {
        "Poisson"
    }

    fn is_continuous() -> bool {
        false
    }

    fn generate(stream: &mut UniformStream<'_>, params: &PoissonParams) -> Result<f64, VariableError> {
        let threshold = -params.lambda;
        // draw on a copy so an exhausted draw consumes nothing
        let mut draft = *stream;
        let mut log_product = 0.0;
        let mut count: u64 = 0;
        while log_product >= threshold {
            match draft.next_uniform() {
                Some(r) => {
                    log_product += r.ln();
                    count += 1;
                }
                None => {
                    return Err(VariableError::StreamExhausted {
                        needed: stream.remaining() + 1,
                        remaining: stream.remaining(),
                    })
                }
            }
        }
        *stream = draft;
        Ok((count - 1) as f64)
    }

    fn probability(x: f64, params: &PoissonParams) -> f64 {
        match support_point(x) {
            Some(k) => (k as f64 * params.lambda.ln() - params.lambda - ln_factorial(k)).exp(),
            None => 0.0,
        }
    }

    fn cdf(x: f64, params: &PoissonParams) -> Result<f64, VariableError> {
        if x < 0.0 {
            return Ok(0.0);
        }
        if x.is_infinite() {
            return Ok(1.0);
        }
        // P(X <= k) = Q(k + 1, λ)
        let shape = x.floor() + 1.0;
        Ok((1.0 - regularised_lower_gamma(shape, params.lambda)).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_multiplicative_method() {
        // λ = 1: threshold e^-1 ≈ 0.3679; 0.9 * 0.8 = 0.72, * 0.4 = 0.288 < threshold
        let params = PoissonParams::new(1.0).unwrap();
        let values = [0.9, 0.8, 0.4, 0.1];
        let mut stream = UniformStream::new(&values).unwrap();
        assert_eq!(Poisson::generate(&mut stream, &params).unwrap(), 2.0);
        assert_eq!(stream.remaining(), 1);
        // 0.1 < threshold at once: zero events
        assert_eq!(Poisson::generate(&mut stream, &params).unwrap(), 0.0);
    }

    #[test]
    fn test_exhausted_draw_consumes_nothing() {
        let params = PoissonParams::new(5.0).unwrap();
        let values = [0.9, 0.9, 0.9];
        let mut stream = UniformStream::new(&values).unwrap();
        assert!(matches!(
            Poisson::generate(&mut stream, &params),
            Err(VariableError::StreamExhausted { remaining: 3, .. })
        ));
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_mass_and_cdf() {
        let params = PoissonParams::new(2.0).unwrap();
        let e2 = (-2.0_f64).exp();
        assert_relative_eq!(Poisson::probability(0.0, &params), e2, epsilon = 1e-12);
        assert_relative_eq!(Poisson::probability(3.0, &params), e2 * 8.0 / 6.0, epsilon = 1e-12);
        assert_eq!(Poisson::probability(1.5, &params), 0.0);
        assert_relative_eq!(Poisson::cdf(1.7, &params).unwrap(), 3.0 * e2, epsilon = 1e-9);
        assert_eq!(Poisson::cdf(-0.5, &params).unwrap(), 0.0);
    }

    #[test]
    fn test_mass_sums_to_cdf() {
        let params = PoissonParams::new(4.5).unwrap();
        let total: f64 = (0..=10).map(|k| Poisson::probability(k as f64, &params)).sum();
        assert_relative_eq!(total, Poisson::cdf(10.0, &params).unwrap(), epsilon = 1e-9);
    }

    #[test]
    fn test_large_mean_draws_terminate() {
        // ln 0.3 ≈ -1.204: 665 factors pass -800, so each draw is 664
        let params = PoissonParams::new(800.0).unwrap();
        let values = [0.3; 2_000];
        let mut stream = UniformStream::new(&values).unwrap();
        assert_eq!(Poisson::generate(&mut stream, &params).unwrap(), 664.0);
        assert_eq!(stream.position(), 665);
    }

    #[test]
    fn test_large_mean_cdf() {
        let params = PoissonParams::new(800.0).unwrap();
        let at_mean = Poisson::cdf(800.0, &params).unwrap();
        assert!(at_mean > 0.5 && at_mean < 0.52, "cdf at mean {}", at_mean);
        assert_relative_eq!(Poisson::cdf(1e6, &params).unwrap(), 1.0, epsilon = 1e-12);
        assert_eq!(Poisson::cdf(f64::INFINITY, &params).unwrap(), 1.0);
        assert!(Poisson::cdf(500.0, &params).unwrap() < 1e-20);
        assert!(Poisson::probability(800.0, &params) > 0.0139);
    }
}
