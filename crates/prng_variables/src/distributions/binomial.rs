//! Binomial distribution as a count of Bernoulli successes.

use prng_core::math::special::ln_factorial;
use prng_core::types::error::{ensure_natural, ensure_probability};

use super::support_point;
use crate::error::VariableError;
use crate::stream::UniformStream;
use crate::variable::RandomVariable;

/// Parameters of Binomial(n, p), with `n ≥ 1` and `p ∈ [0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinomialParams {
    n: u32,
    p: f64,
}

impl BinomialParams {
    /// Validates the trial count and probability.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for `n == 0` or `p` outside `[0, 1]`.
    pub fn new(n: u32, p: f64) -> Result<Self, VariableError> {
        ensure_natural("n", u64::from(n))?;
        Ok(Self {
            n,
            p: ensure_probability("p", p)?,
        })
    }

    /// Number of trials.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    fn mass(&self, k: u64) -> f64 {
        let n = u64::from(self.n);
        if k > n {
            return 0.0;
        }
        if self.p == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if k == n { 1.0 } else { 0.0 };
        }
        // ln C(n,k) + k ln p + (n-k) ln(1-p)
        (ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
            + k as f64 * self.p.ln()
            + (n - k) as f64 * (-self.p).ln_1p())
        .exp()
    }
}

/// Binomial(n, p): successes (`r ≤ p`) over `n` uniforms.
#[derive(Clone, Copy, Debug, Default)]
pub struct Binomial;

impl RandomVariable for Binomial {
    type Params = BinomialParams;

    fn name() -> &'static str {
        "Binomial"
    }

    fn is_continuous() -> bool {
        false
    }

    fn generate(stream: &mut UniformStream<'_>, params: &BinomialParams) -> Result<f64, VariableError> {
        let trials = stream.take_exact(params.n as usize)?;
        Ok(trials.iter().filter(|&&r| r <= params.p).count() as f64)
    }

    fn probability(x: f64, params: &BinomialParams) -> f64 {
        support_point(x).map_or(0.0, |k| params.mass(k))
    }

    fn cdf(x: f64, params: &BinomialParams) -> Result<f64, VariableError> {
        if x < 0.0 {
            return Ok(0.0);
        }
        if x >= f64::from(params.n) {
            return Ok(1.0);
        }
        let upper = x.floor() as u64;
        Ok((0..=upper).map(|k| params.mass(k)).sum::<f64>().min(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_counts_successes() {
        let params = BinomialParams::new(4, 0.5).unwrap();
        let values = [0.1, 0.6, 0.5, 0.9, 0.2];
        let mut stream = UniformStream::new(&values).unwrap();
        assert_eq!(Binomial::generate(&mut stream, &params).unwrap(), 2.0);
        assert_eq!(stream.remaining(), 1);
        assert!(Binomial::generate(&mut stream, &params).is_err());
        assert_eq!(stream.remaining(), 1);
    }

    #[test]
    fn test_mass_reference() {
        let params = BinomialParams::new(5, 0.4).unwrap();
        // C(5,2) 0.4² 0.6³ = 10 * 0.16 * 0.216
        assert_relative_eq!(Binomial::probability(2.0, &params), 0.3456, epsilon = 1e-12);
        assert_eq!(Binomial::probability(6.0, &params), 0.0);
        assert_eq!(Binomial::probability(2.5, &params), 0.0);
    }

    #[test]
    fn test_mass_sums_to_one() {
        let params = BinomialParams::new(12, 0.35).unwrap();
        let total: f64 = (0..=12).map(|k| Binomial::probability(k as f64, &params)).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            Binomial::cdf(11.5, &params).unwrap(),
            1.0 - Binomial::probability(12.0, &params),
            epsilon = 1e-12
        );
        assert_eq!(Binomial::cdf(12.0, &params).unwrap(), 1.0);
    }

    #[test]
    fn test_degenerate_probabilities() {
        let never = BinomialParams::new(6, 0.0).unwrap();
        assert_eq!(Binomial::probability(0.0, &never), 1.0);
        assert_eq!(Binomial::probability(1.0, &never), 0.0);
        let always = BinomialParams::new(6, 1.0).unwrap();
        assert_eq!(Binomial::probability(6.0, &always), 1.0);
        assert_eq!(Binomial::probability(5.0, &always), 0.0);
        assert_eq!(Binomial::cdf(5.5, &always).unwrap(), 0.0);
    }

    #[test]
    fn test_large_trial_count_mass_is_finite() {
        let params = BinomialParams::new(2_000, 0.5).unwrap();
        assert_relative_eq!(Binomial::probability(1_000.0, &params), 0.017_839, max_relative = 1e-4);
        assert_relative_eq!(Binomial::cdf(1_000.0, &params).unwrap(), 0.508_92, max_relative = 1e-3);
        assert_eq!(Binomial::cdf(f64::INFINITY, &params).unwrap(), 1.0);
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(BinomialParams::new(0, 0.5).is_err());
        assert!(BinomialParams::new(3, 1.5).is_err());
    }
}
