//! Error types for parameter validation.
//!
//! This module provides:
//! - `ValidationError`: rejected user or configuration parameters
//! - `ensure_*` helpers used by every layer before any computation starts

use thiserror::Error;

/// Parameter validation errors.
///
/// Every layer validates its numeric inputs before generating values,
/// consuming a uniform stream or running a statistical test. A rejected
/// parameter is always reported, never silently coerced.
///
/// # Variants
/// - `NotNatural`: an integer parameter that must be strictly positive
/// - `OutOfRange`: a real parameter outside its admissible range
/// - `Ordering`: a relation between parameters does not hold
/// - `Empty`: a list parameter with no elements
///
/// # Examples
/// ```
/// use prng_core::types::ValidationError;
///
/// let err = ValidationError::NotNatural { name: "modulus", value: "0".to_string() };
/// assert_eq!(format!("{}", err), "Parameter 'modulus' must be a natural number, got 0");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Integer parameter is not a natural number (strictly positive).
    #[error("Parameter '{name}' must be a natural number, got {value}")]
    NotNatural {
        /// Parameter name
        name: &'static str,
        /// Offending value, rendered
        value: String,
    },

    /// Real parameter outside its admissible range.
    #[error("Parameter '{name}' = {value} is out of range: expected {expected}")]
    OutOfRange {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
        /// Human-readable admissible range
        expected: &'static str,
    },

    /// Ordering constraint between several parameters violated.
    #[error("Constraint {constraint} violated: {detail}")]
    Ordering {
        /// The constraint, e.g. `a < b`
        constraint: &'static str,
        /// Actual values involved
        detail: String,
    },

    /// A list parameter is empty.
    #[error("Parameter '{name}' must not be empty")]
    Empty {
        /// Parameter name
        name: &'static str,
    },
}

/// Checks that an integer parameter is a natural number.
///
/// # Errors
///
/// Returns [`ValidationError::NotNatural`] when `value == 0`.
///
/// # Examples
/// ```
/// use prng_core::types::error::ensure_natural;
///
/// assert_eq!(ensure_natural("seed", 7), Ok(7));
/// assert!(ensure_natural("seed", 0).is_err());
/// ```
#[inline]
pub fn ensure_natural(name: &'static str, value: u64) -> Result<u64, ValidationError> {
    if value == 0 {
        return Err(ValidationError::NotNatural {
            name,
            value: value.to_string(),
        });
    }
    Ok(value)
}

/// Checks that a real parameter is finite and strictly positive.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfRange`] for zero, negative or
/// non-finite values.
#[inline]
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::OutOfRange {
            name,
            value,
            expected: "(0, +inf)",
        });
    }
    Ok(value)
}

/// Checks that a real parameter is finite.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfRange`] for NaN or infinite values.
#[inline]
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::OutOfRange {
            name,
            value,
            expected: "a finite number",
        });
    }
    Ok(value)
}

/// Checks that a real parameter is a probability in `[0, 1]`.
///
/// # Errors
///
/// Returns [`ValidationError::OutOfRange`] outside `[0, 1]` or for NaN.
#[inline]
pub fn ensure_probability(name: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            name,
            value,
            expected: "[0, 1]",
        });
    }
    Ok(value)
}

/// Checks that a real parameter holds a strictly positive integer and
/// returns it as `u32`.
///
/// # Errors
///
/// Returns [`ValidationError::NotNatural`] for fractional, non-positive or
/// too large values.
///
/// # Examples
/// ```
/// use prng_core::types::error::ensure_positive_integer;
///
/// assert_eq!(ensure_positive_integer("k", 3.0), Ok(3));
/// assert!(ensure_positive_integer("k", 2.5).is_err());
/// assert!(ensure_positive_integer("k", 0.0).is_err());
/// ```
#[inline]
pub fn ensure_positive_integer(name: &'static str, value: f64) -> Result<u32, ValidationError> {
    if !value.is_finite() || value < 1.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(ValidationError::NotNatural {
            name,
            value: value.to_string(),
        });
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_natural_display() {
        let err = ValidationError::NotNatural {
            name: "seed",
            value: "0".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Parameter 'seed' must be a natural number, got 0"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = ValidationError::OutOfRange {
            name: "p",
            value: 1.5,
            expected: "[0, 1]",
        };
        assert_eq!(
            format!("{}", err),
            "Parameter 'p' = 1.5 is out of range: expected [0, 1]"
        );
    }

    #[test]
    fn test_ordering_display() {
        let err = ValidationError::Ordering {
            constraint: "a < b",
            detail: "a=3, b=1".to_string(),
        };
        assert_eq!(format!("{}", err), "Constraint a < b violated: a=3, b=1");
    }

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("lambda", 2.0), Ok(2.0));
        assert!(ensure_positive("lambda", 0.0).is_err());
        assert!(ensure_positive("lambda", -1.0).is_err());
        assert!(ensure_positive("lambda", f64::NAN).is_err());
        assert!(ensure_positive("lambda", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_probability_bounds_inclusive() {
        assert_eq!(ensure_probability("p", 0.0), Ok(0.0));
        assert_eq!(ensure_probability("p", 1.0), Ok(1.0));
        assert!(ensure_probability("p", -0.01).is_err());
        assert!(ensure_probability("p", 1.01).is_err());
        assert!(ensure_probability("p", f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_positive_integer() {
        assert_eq!(ensure_positive_integer("n", 10.0), Ok(10));
        assert!(ensure_positive_integer("n", -3.0).is_err());
        assert!(ensure_positive_integer("n", 1e12).is_err());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = ValidationError::Empty { name: "seeds" };
        let _: &dyn std::error::Error = &err;
    }
}
