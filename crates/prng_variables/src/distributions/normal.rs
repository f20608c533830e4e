//! Normal distribution by the twelve-uniform (Irwin–Hall) approximation.

use prng_core::math::normal::{norm_cdf, norm_pdf};
use prng_core::types::error::{ensure_finite, ensure_positive};

use crate::error::VariableError;
use crate::stream::UniformStream;
use crate::variable::RandomVariable;

/// Uniforms consumed per Normal draw.
pub const NORMAL_UNIFORMS_PER_DRAW: usize = 12;

/// Parameters of Normal(μ, σ), with `σ > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalParams {
    mean: f64,
    std_dev: f64,
}

impl NormalParams {
    /// Validates a finite mean and `σ > 0`.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a non-finite mean or non-positive σ.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self, VariableError> {
        Ok(Self {
            mean: ensure_finite("mean", mean)?,
            std_dev: ensure_positive("std_dev", std_dev)?,
        })
    }

    /// Mean μ.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation σ.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

/// Normal(μ, σ): `(Σ₁₂ r - 6) σ + μ`, supported on `[μ - 6σ, μ + 6σ]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Normal;

impl RandomVariable for Normal {
    type Params = NormalParams;

    fn name() -> &'static str {
        "Normal"
    }

    fn is_continuous() -> bool {
        true
    }

    fn generate(stream: &mut UniformStream<'_>, params: &NormalParams) -> Result<f64, VariableError> {
        let sum: f64 = stream.take_exact(NORMAL_UNIFORMS_PER_DRAW)?.iter().sum();
        Ok((sum - 6.0) * params.std_dev + params.mean)
    }

    fn probability(x: f64, params: &NormalParams) -> f64 {
        norm_pdf((x - params.mean) / params.std_dev) / params.std_dev
    }

    fn cdf(x: f64, params: &NormalParams) -> Result<f64, VariableError> {
        Ok(norm_cdf((x - params.mean) / params.std_dev))
    }
}
