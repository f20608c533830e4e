//! The `RandomVariable` trait.
//!
//! Implementors are parameter-free unit structs: parameters travel with
//! every call as the associated, already validated `Params` type. Because
//! validation happens when `Params` is built, `generate` can only fail on
//! stream exhaustion.

use crate::error::VariableError;
use crate::stream::UniformStream;

/// A distribution sampled from a uniform(0,1) stream.
///
/// # Examples
///
/// ```
/// use prng_variables::distributions::{Bernoulli, BernoulliParams};
/// use prng_variables::{RandomVariable, UniformStream};
///
/// let params = BernoulliParams::new(0.5).unwrap();
///
/// let low = [0.3];
/// assert_eq!(Bernoulli::generate(&mut UniformStream::new(&low).unwrap(), &params).unwrap(), 1.0);
///
/// let high = [0.7];
/// assert_eq!(Bernoulli::generate(&mut UniformStream::new(&high).unwrap(), &params).unwrap(), 0.0);
/// ```
pub trait RandomVariable {
    /// Validated parameter set.
    type Params: Clone;

    /// Distribution name for reports and logs.
    fn name() -> &'static str;

    /// Whether the distribution is continuous (density) or discrete (mass).
    fn is_continuous() -> bool;

    /// Draws one value.
    ///
    /// # Errors
    ///
    /// `StreamExhausted` when the stream cannot supply the whole draw; the
    /// cursor is then left unchanged.
    fn generate(stream: &mut UniformStream<'_>, params: &Self::Params) -> Result<f64, VariableError>;

    /// Density (continuous) or probability mass (discrete) at `x`.
    fn probability(x: f64, params: &Self::Params) -> f64;

    /// Cumulative distribution function at `x`.
    ///
    /// # Errors
    ///
    /// `CdfUnsupported` unless the distribution provides one.
    fn cdf(_x: f64, _params: &Self::Params) -> Result<f64, VariableError> {
        Err(VariableError::CdfUnsupported {
            distribution: Self::name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PointMass;

    impl RandomVariable for PointMass {
        type Params = f64;

        fn name() -> &'static str {
            "Point mass"
        }

        fn is_continuous() -> bool {
            false
        }

        fn generate(stream: &mut UniformStream<'_>, params: &f64) -> Result<f64, VariableError> {
            stream.take_exact(1)?;
            Ok(*params)
        }

        fn probability(x: f64, params: &f64) -> f64 {
            if x == *params {
                1.0
            } else {
                0.0
            }
        }
    }

    #[test]
    fn test_default_cdf_is_unsupported() {
        assert_eq!(
            PointMass::cdf(0.0, &1.0),
            Err(VariableError::CdfUnsupported {
                distribution: "Point mass"
            })
        );
    }

    #[test]
    fn test_custom_variable_draws() {
        let values = [0.9];
        let mut stream = UniformStream::new(&values).unwrap();
        assert_eq!(PointMass::generate(&mut stream, &4.0).unwrap(), 4.0);
        assert_eq!(PointMass::probability(4.0, &4.0), 1.0);
    }
}
