//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: cumulative distribution function Φ(x)
//! - `norm_pdf`: probability density function φ(x)
//! - `two_sided_p_value`: `P(|Z| >= |z|)` for a z-score
//!
//! The CDF and PDF are generic over `T: Float` so that `f32` callers work
//! without conversions.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Abramowitz and Stegun 7.1.26 coefficients.
const ERFC_A: [f64; 5] = [
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];
const ERFC_P: f64 = 0.327_591_1;

#[inline]
fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Complementary error function, maximum absolute error 1.5e-7.
#[inline]
fn erfc<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();
    let t = one / (one + constant::<T>(ERFC_P) * abs_x);

    // Horner evaluation of a1 t + a2 t² + ... + a5 t⁵
    let poly = ERFC_A
        .iter()
        .rev()
        .fold(T::zero(), |acc, &a| acc * t + constant::<T>(a))
        * t;

    let erfc_abs = poly * (-abs_x * abs_x).exp();
    if x < T::zero() {
        constant::<T>(2.0) - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = erfc(-x / sqrt(2)) / 2, accurate to about 1e-7.
///
/// # Examples
/// ```
/// use prng_core::math::normal::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let arg = -x / constant::<T>(std::f64::consts::SQRT_2);
    constant::<T>(0.5) * erfc(arg)
}

/// Standard normal probability density function.
///
/// φ(x) = exp(-x² / 2) / sqrt(2π)
///
/// # Examples
/// ```
/// use prng_core::math::normal::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.398_942_280_4).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    constant::<T>(FRAC_1_SQRT_2PI) * (constant::<T>(-0.5) * x * x).exp()
}

/// Two-sided p-value of a standard normal z-score.
///
/// # Examples
/// ```
/// use prng_core::math::normal::two_sided_p_value;
///
/// assert!((two_sided_p_value(1.96) - 0.05).abs() < 1e-3);
/// assert!((two_sided_p_value(0.0) - 1.0).abs() < 1e-7);
/// ```
#[inline]
pub fn two_sided_p_value(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    (2.0 * norm_cdf(-z.abs())).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(1.0_f64), 0.841_344_746_068_542_9, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.158_655_253_931_457_07, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.977_249_868_051_820_8, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [-3.0, -1.5, -0.5, 0.0, 0.5, 1.5, 3.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_norm_cdf_bounds() {
        for i in -100..=100 {
            let value = norm_cdf(i as f64 * 0.1);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(1.0_f64), 0.241_970_724_519_143_37, epsilon = 1e-10);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.053_990_966_513_188_06, epsilon = 1e-10);
    }

    #[test]
    fn test_norm_f32_compatibility() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-5);
        assert!((norm_pdf(0.0_f32) - 0.398_942_3).abs() < 1e-5);
    }

    #[test]
    fn test_two_sided_p_value_symmetry() {
        assert_relative_eq!(two_sided_p_value(2.5), two_sided_p_value(-2.5), epsilon = 1e-15);
        assert!(two_sided_p_value(f64::NAN).is_nan());
        assert!(two_sided_p_value(10.0) < 1e-10);
    }
}
