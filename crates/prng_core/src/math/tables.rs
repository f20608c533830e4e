//! Critical values at the 5% significance level.
//!
//! The goodness-of-fit battery decides on tabulated critical values rather
//! than exact p-values:
//! - chi-square: table for 1–30 degrees of freedom, Wilson–Hilferty beyond
//! - Kolmogorov–Smirnov: table for N ≤ 35, `1.36 / sqrt(N)` beyond

/// Significance level used by every test in the workspace.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Upper 5% point of the standard normal distribution.
const Z_95: f64 = 1.645;

/// χ²(df) upper 5% points for df = 1..=30.
const CHI_SQUARE_05: [f64; 30] = [
    3.841, 5.991, 7.815, 9.488, 11.070, 12.592, 14.067, 15.507, 16.919, 18.307, //
    19.675, 21.026, 22.362, 23.685, 24.996, 26.296, 27.587, 28.869, 30.144, 31.410, //
    32.671, 33.924, 35.172, 36.415, 37.652, 38.885, 40.113, 41.337, 42.557, 43.773,
];

/// Two-sided Kolmogorov–Smirnov critical values for N = 1..=35.
const KS_05: [f64; 35] = [
    0.975, 0.842, 0.708, 0.624, 0.565, 0.521, 0.486, 0.457, 0.432, 0.410, //
    0.391, 0.375, 0.361, 0.349, 0.338, 0.328, 0.318, 0.309, 0.301, 0.294, //
    0.287, 0.281, 0.275, 0.269, 0.264, 0.259, 0.254, 0.250, 0.246, 0.242, //
    0.238, 0.234, 0.231, 0.227, 0.224,
];

/// Chi-square critical value at α = 0.05 for `df` degrees of freedom.
///
/// Tabulated for `df <= 30`; larger values use the Wilson–Hilferty
/// approximation `df (1 - 2/(9 df) + z sqrt(2/(9 df)))³` with `z = 1.645`.
///
/// # Returns
///
/// `None` when `df == 0`.
///
/// # Examples
/// ```
/// use prng_core::math::tables::chi_square_critical_value;
///
/// assert_eq!(chi_square_critical_value(1), Some(3.841));
/// assert_eq!(chi_square_critical_value(0), None);
/// // Wilson–Hilferty for df = 40 (exact 55.758)
/// let approx = chi_square_critical_value(40).unwrap();
/// assert!((approx - 55.758).abs() < 0.1);
/// ```
pub fn chi_square_critical_value(df: usize) -> Option<f64> {
    match df {
        0 => None,
        1..=30 => Some(CHI_SQUARE_05[df - 1]),
        _ => {
            let k = df as f64;
            let h = 2.0 / (9.0 * k);
            Some(k * (1.0 - h + Z_95 * h.sqrt()).powi(3))
        }
    }
}

/// Kolmogorov–Smirnov critical value at α = 0.05 for a sample of size `n`.
///
/// # Returns
///
/// `None` when `n == 0`.
///
/// # Examples
/// ```
/// use prng_core::math::tables::ks_critical_value;
///
/// assert_eq!(ks_critical_value(10), Some(0.410));
/// let large = ks_critical_value(100).unwrap();
/// assert!((large - 0.136).abs() < 1e-12);
/// ```
pub fn ks_critical_value(n: usize) -> Option<f64> {
    match n {
        0 => None,
        1..=35 => Some(KS_05[n - 1]),
        _ => Some(1.36 / (n as f64).sqrt()),
    }
}
