//! Erlang distribution: sum of `k` exponentials with rate λ.

use prng_core::math::special::{ln_factorial, regularised_lower_gamma};
use prng_core::types::error::{ensure_natural, ensure_positive};

use crate::error::VariableError;
use crate::stream::UniformStream;
use crate::variable::RandomVariable;

/// Parameters of Erlang(k, λ), with `k ≥ 1` and `λ > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErlangParams {
    k: u32,
    lambda: f64,
}

impl ErlangParams {
    /// Validates the shape and rate.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for `k == 0` or a non-positive rate.
    pub fn new(k: u32, lambda: f64) -> Result<Self, VariableError> {
        ensure_natural("k", u64::from(k))?;
        Ok(Self {
            k,
            lambda: ensure_positive("lambda", lambda)?,
        })
    }

    /// Shape k.
    pub fn k(&self) -> u32 {
        self.k
    }

    /// Rate λ.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

/// Erlang(k, λ) by convolution: `-ln(Π r) / λ` over `k` uniforms,
/// evaluated as `-Σ ln r / λ`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Erlang;

impl RandomVariable for Erlang {
    type Params = ErlangParams;

    fn name() -> &'static str {
        "Erlang"
    }

    fn is_continuous() -> bool {
        true
    }

    fn generate(stream: &mut UniformStream<'_>, params: &ErlangParams) -> Result<f64, VariableError> {
        let log_product: f64 = stream.take_exact(params.k as usize)?.iter().map(|r| r.ln()).sum();
        Ok(-log_product / params.lambda)
    }

    fn probability(x: f64, params: &ErlangParams) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        let k = f64::from(params.k);
        if x == 0.0 {
            return if params.k == 1 { params.lambda } else { 0.0 };
        }
        (k * params.lambda.ln() + (k - 1.0) * x.ln()
            - params.lambda * x
            - ln_factorial(u64::from(params.k) - 1))
        .exp()
    }

    fn cdf(x: f64, params: &ErlangParams) -> Result<f64, VariableError> {
        if x <= 0.0 {
            return Ok(0.0);
        }
        Ok(regularised_lower_gamma(f64::from(params.k), params.lambda * x).clamp(0.0, 1.0))
    }
}
