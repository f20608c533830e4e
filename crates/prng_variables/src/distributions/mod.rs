//! The eight supported distributions.
//!
//! Each module holds a parameter type whose constructor performs every
//! range, positivity and ordering check, and a unit struct implementing
//! [`RandomVariable`](crate::RandomVariable).

mod bernoulli;
mod binomial;
mod erlang;
mod exponential;
mod normal;
mod poisson;
mod triangular;
mod uniform;

pub use bernoulli::{Bernoulli, BernoulliParams};
pub use binomial::{Binomial, BinomialParams};
pub use erlang::{Erlang, ErlangParams};
pub use exponential::{Exponential, ExponentialParams};
pub use normal::{Normal, NormalParams, NORMAL_UNIFORMS_PER_DRAW};
pub use poisson::{Poisson, PoissonParams};
pub use triangular::{Triangular, TriangularParams};
pub use uniform::{Uniform, UniformParams};

/// Tolerance for matching a real `x` against an integer support point.
pub(crate) const SUPPORT_TOLERANCE: f64 = 1e-9;

/// Non-negative integer nearest to `x`, if `x` is within tolerance of one.
pub(crate) fn support_point(x: f64) -> Option<u64> {
    let rounded = x.round();
    if !x.is_finite() || rounded < 0.0 || (x - rounded).abs() >= SUPPORT_TOLERANCE {
        return None;
    }
    Some(rounded as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_point() {
        assert_eq!(support_point(3.0), Some(3));
        assert_eq!(support_point(2.999_999_999_9), Some(3));
        assert_eq!(support_point(2.5), None);
        assert_eq!(support_point(-1.0), None);
        assert_eq!(support_point(f64::NAN), None);
    }
}
