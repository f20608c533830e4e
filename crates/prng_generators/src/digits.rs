//! Middle-digit extraction for the digit-extraction family.
//!
//! A product of two `L`-digit numbers has at most `2L` digits. Left-padding
//! it to exactly `2L` digits and keeping the `L` digits that start at offset
//! `floor(L / 2)` is the same as `floor(x / 10^(L - floor(L / 2))) mod 10^L`,
//! which is what [`middle_digits`] computes in `u128`.

use crate::error::GeneratorError;

/// Widest supported digit count: `(10^19)² = 10^38` still fits in `u128`.
pub const MAX_DIGIT_WIDTH: u32 = 19;

/// Number of decimal digits of `n` (`0` has one digit).
///
/// # Examples
/// ```
/// use prng_generators::digit_count;
///
/// assert_eq!(digit_count(0), 1);
/// assert_eq!(digit_count(5735), 4);
/// assert_eq!(digit_count(u64::MAX), 20);
/// ```
#[inline]
pub fn digit_count(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

#[inline]
fn pow10(exponent: u32) -> u128 {
    10u128.pow(exponent)
}

/// Middle `width` digits of `product` left-padded to `2 * width` digits.
///
/// # Errors
///
/// `Overflow` when `width` is zero or exceeds [`MAX_DIGIT_WIDTH`], or when
/// `product` has more than `2 * width` digits.
///
/// # Examples
/// ```
/// use prng_generators::middle_digits;
///
/// // 5735² = 32890225 -> "32[8902]25"
/// assert_eq!(middle_digits(32_890_225, 4).unwrap(), 8902);
/// // 123² = 15129 -> "0[151]29"
/// assert_eq!(middle_digits(15_129, 3).unwrap(), 151);
/// ```
pub fn middle_digits(product: u128, width: u32) -> Result<u64, GeneratorError> {
    if width == 0 || width > MAX_DIGIT_WIDTH {
        return Err(GeneratorError::Overflow(format!(
            "digit width {} outside 1..={}",
            width, MAX_DIGIT_WIDTH
        )));
    }
    if product >= pow10(2 * width) {
        return Err(GeneratorError::Overflow(format!(
            "product {} has more than {} digits",
            product,
            2 * width
        )));
    }

    let shift = width - width / 2;
    let middle = (product / pow10(shift)) % pow10(width);
    // middle < 10^19 < u64::MAX
    u64::try_from(middle).map_err(|_| GeneratorError::Overflow(format!("middle digits {}", middle)))
}

/// `10^width` as `f64`, the digit-family divisor.
#[inline]
pub(crate) fn digit_divisor(width: u32) -> f64 {
    pow10(width) as f64
}

/// Largest value with `width` digits, plus one.
#[inline]
pub(crate) fn digit_limit(width: u32) -> u128 {
    pow10(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count_boundaries() {
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99), 2);
        assert_eq!(digit_count(100), 3);
        assert_eq!(digit_count(9_999_999_999_999_999_999), 19);
    }

    #[test]
    fn test_middle_digits_even_width() {
        // 1234 * 5678 = 7006652 -> "07006652" -> "0066"
        assert_eq!(middle_digits(7_006_652, 4).unwrap(), 66);
    }

    #[test]
    fn test_middle_digits_odd_width() {
        // 54321² = 2950771041 -> "2950771041" -> offset 2 -> "50771"
        assert_eq!(middle_digits(2_950_771_041, 5).unwrap(), 50_771);
    }

    #[test]
    fn test_middle_digits_single_digit() {
        // 7² = 49 -> "49", offset 0 -> "4"
        assert_eq!(middle_digits(49, 1).unwrap(), 4);
        // 3² = 9 -> "09" -> "0"
        assert_eq!(middle_digits(9, 1).unwrap(), 0);
    }

    #[test]
    fn test_middle_digits_max_width() {
        let seed: u128 = 9_999_999_999_999_999_999;
        let result = middle_digits(seed * seed, MAX_DIGIT_WIDTH).unwrap();
        assert!(result < 10_000_000_000_000_000_000);
    }

    #[test]
    fn test_middle_digits_rejects_oversized() {
        assert!(matches!(
            middle_digits(100_000_000, 4),
            Err(GeneratorError::Overflow(_))
        ));
        assert!(matches!(middle_digits(1, 0), Err(GeneratorError::Overflow(_))));
        assert!(matches!(middle_digits(1, 20), Err(GeneratorError::Overflow(_))));
    }
}
