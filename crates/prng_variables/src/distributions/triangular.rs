//! Triangular distribution on `[a, b]` with mode `c`.

use prng_core::types::error::ensure_finite;
use prng_core::types::ValidationError;

use super::SUPPORT_TOLERANCE;
use crate::error::VariableError;
use crate::stream::UniformStream;
use crate::variable::RandomVariable;

/// Parameters of Triangular(a, b, c), with `a < b` and `a ≤ c ≤ b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangularParams {
    a: f64,
    b: f64,
    c: f64,
}

impl TriangularParams {
    /// Validates the bounds and mode.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for non-finite values, `a >= b`, or a mode outside
    /// `[a, b]`.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, VariableError> {
        ensure_finite("a", a)?;
        ensure_finite("b", b)?;
        ensure_finite("c", c)?;
        if a >= b {
            return Err(ValidationError::Ordering {
                constraint: "a < b",
                detail: format!("a = {}, b = {}", a, b),
            }
            .into());
        }
        if c < a || c > b {
            return Err(ValidationError::Ordering {
                constraint: "a <= c <= b",
                detail: format!("a = {}, c = {}, b = {}", a, c, b),
            }
            .into());
        }
        Ok(Self { a, b, c })
    }

    /// Lower bound.
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Upper bound.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Mode.
    pub fn c(&self) -> f64 {
        self.c
    }
}

/// Triangular(a, b, c) by piecewise inverse transform, split at
/// `F(c) = (c - a) / (b - a)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Triangular;

impl RandomVariable for Triangular {
    type Params = TriangularParams;

    fn name() -> &'static str {
        "Triangular"
    }

    fn is_continuous() -> bool {
        true
    }

    fn generate(stream: &mut UniformStream<'_>, params: &TriangularParams) -> Result<f64, VariableError> {
        let r = stream.take_exact(1)?[0];
        let TriangularParams { a, b, c } = *params;
        let split = (c - a) / (b - a);
        if r < split {
            Ok(a + (r * (b - a) * (c - a)).sqrt())
        } else {
            Ok(b - ((1.0 - r) * (b - a) * (b - c)).sqrt())
        }
    }

    fn probability(x: f64, params: &TriangularParams) -> f64 {
        let TriangularParams { a, b, c } = *params;
        if x < a || x > b {
            0.0
        } else if (x - c).abs() < SUPPORT_TOLERANCE {
            2.0 / (b - a)
        } else if x < c {
            2.0 * (x - a) / ((b - a) * (c - a))
        } else {
            2.0 * (b - x) / ((b - a) * (b - c))
        }
    }

    fn cdf(x: f64, params: &TriangularParams) -> Result<f64, VariableError> {
        let TriangularParams { a, b, c } = *params;
        Ok(if x <= a {
            0.0
        } else if x >= b {
            1.0
        } else if x <= c {
            (x - a).powi(2) / ((b - a) * (c - a))
        } else {
            1.0 - (b - x).powi(2) / ((b - a) * (b - c))
        })
    }
}
