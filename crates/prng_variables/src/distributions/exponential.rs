//! Exponential distribution with rate λ.

use prng_core::types::error::ensure_positive;

use crate::error::VariableError;
use crate::stream::UniformStream;
use crate::variable::RandomVariable;

/// Parameters of Exponential(λ), with `λ > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialParams {
    lambda: f64,
}

impl ExponentialParams {
    /// Validates `λ > 0`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a non-positive or non-finite rate.
    pub fn new(lambda: f64) -> Result<Self, VariableError> {
        Ok(Self {
            lambda: ensure_positive("lambda", lambda)?,
        })
    }

    /// Rate λ.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

/// Exponential(λ) by inverse transform. A uniform of exactly 1 yields `+inf`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Exponential;

impl RandomVariable for Exponential {
    type Params = ExponentialParams;

    fn name() -> &'static str {
        "Exponential"
    }

    fn is_continuous() -> bool {
        true
    }

    fn generate(stream: &mut UniformStream<'_>, params: &ExponentialParams) -> Result<f64, VariableError> {
        let r = stream.take_exact(1)?[0];
        Ok(-(1.0 - r).ln() / params.lambda)
    }

    fn probability(x: f64, params: &ExponentialParams) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        params.lambda * (-params.lambda * x).exp()
    }

    fn cdf(x: f64, params: &ExponentialParams) -> Result<f64, VariableError> {
        if x <= 0.0 {
            return Ok(0.0);
        }
        Ok(1.0 - (-params.lambda * x).exp())
    }
}
