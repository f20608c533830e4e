//! Continuous uniform distribution on `[a, b]`.

use prng_core::types::error::ensure_finite;
use prng_core::types::ValidationError;

use crate::error::VariableError;
use crate::stream::UniformStream;
use crate::variable::RandomVariable;

/// Parameters of Uniform(a, b), with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformParams {
    a: f64,
    b: f64,
}

impl UniformParams {
    /// Validates `a < b`, both finite.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for non-finite bounds or `a >= b`.
    pub fn new(a: f64, b: f64) -> Result<Self, VariableError> {
        ensure_finite("a", a)?;
        ensure_finite("b", b)?;
        if a >= b {
            return Err(ValidationError::Ordering {
                constraint: "a < b",
                detail: format!("a = {}, b = {}", a, b),
            }
            .into());
        }
        Ok(Self { a, b })
    }

    /// Lower bound.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Upper bound.
    pub fn b(&self) -> f64 {
        self.b
    }
}

/// Uniform(a, b) by scaling a single uniform.
#[derive(Clone, Copy, Debug, Default)]
pub struct Uniform;

impl RandomVariable for Uniform {
    type Params = UniformParams;

    fn name() -> &'static str {
        "Uniform"
    }

    fn is_continuous() -> bool {
        true
    }

    fn generate(stream: &mut UniformStream<'_>, params: &UniformParams) -> Result<f64, VariableError> {
        let r = stream.take_exact(1)?[0];
        Ok(params.a + (params.b - params.a) * r)
    }

    fn probability(x: f64, params: &UniformParams) -> f64 {
        if (params.a..=params.b).contains(&x) {
            1.0 / (params.b - params.a)
        } else {
            0.0
        }
    }

    fn cdf(x: f64, params: &UniformParams) -> Result<f64, VariableError> {
        Ok(((x - params.a) / (params.b - params.a)).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_interval_is_identity() {
        let params = UniformParams::new(0.0, 1.0).unwrap();
        let values = [0.37];
        let mut stream = UniformStream::new(&values).unwrap();
        assert_eq!(Uniform::generate(&mut stream, &params).unwrap(), 0.37);
    }

    #[test]
    fn test_scaled_draw() {
        let params = UniformParams::new(2.0, 6.0).unwrap();
        let values = [0.25];
        let mut stream = UniformStream::new(&values).unwrap();
        assert_relative_eq!(Uniform::generate(&mut stream, &params).unwrap(), 3.0);
    }

    #[test]
    fn test_density_and_cdf() {
        let params = UniformParams::new(2.0, 6.0).unwrap();
        assert_relative_eq!(Uniform::probability(3.0, &params), 0.25);
        assert_eq!(Uniform::probability(7.0, &params), 0.0);
        assert_relative_eq!(Uniform::cdf(5.0, &params).unwrap(), 0.75);
        assert_eq!(Uniform::cdf(-1.0, &params).unwrap(), 0.0);
        assert_eq!(Uniform::cdf(10.0, &params).unwrap(), 1.0);
    }

    #[test]
    fn test_rejects_reversed_bounds() {
        assert!(matches!(
            UniformParams::new(1.0, 1.0),
            Err(VariableError::InvalidParameter(ValidationError::Ordering { .. }))
        ));
    }
}
