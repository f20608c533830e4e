//! Chi-square categories.
//!
//! A [`BinEntry`] holds the observed and expected frequency of one category
//! together with its contribution `(O - E)² / E` to the chi-square statistic.
//! The contribution is derived state and is recomputed on every mutation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One category (bin) of a chi-square computation.
///
/// # Examples
///
/// ```rust
/// use prng_core::types::BinEntry;
///
/// let mut bin = BinEntry::new("[0.0, 0.1)", 12.0, 10.0);
/// assert!((bin.chi_term() - 0.4).abs() < 1e-12);
///
/// bin.set_observed(10.0);
/// assert_eq!(bin.chi_term(), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinEntry {
    label: String,
    observed: f64,
    expected: f64,
    chi_term: f64,
}

impl BinEntry {
    /// Creates a bin and computes its chi-square term.
    pub fn new(label: impl Into<String>, observed: f64, expected: f64) -> Self {
        Self {
            label: label.into(),
            observed,
            expected,
            chi_term: chi_term(observed, expected),
        }
    }

    /// Returns the category label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the observed frequency.
    #[inline]
    pub fn observed(&self) -> f64 {
        self.observed
    }

    /// Returns the expected frequency.
    #[inline]
    pub fn expected(&self) -> f64 {
        self.expected
    }

    /// Returns `(O - E)² / E`, or `0.0` when `E <= 0`.
    #[inline]
    pub fn chi_term(&self) -> f64 {
        self.chi_term
    }

    /// Replaces the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Replaces the observed frequency and recomputes the chi-square term.
    pub fn set_observed(&mut self, observed: f64) {
        self.observed = observed;
        self.chi_term = chi_term(self.observed, self.expected);
    }

    /// Replaces the expected frequency and recomputes the chi-square term.
    pub fn set_expected(&mut self, expected: f64) {
        self.expected = expected;
        self.chi_term = chi_term(self.observed, self.expected);
    }

    /// Absorbs `other` into `self`, summing both frequencies and taking
    /// `label` as the combined label.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prng_core::types::BinEntry;
    ///
    /// let mut left = BinEntry::new("0", 1.0, 2.0);
    /// left.absorb(BinEntry::new("1", 4.0, 3.0), "0 - 1");
    /// assert_eq!(left.observed(), 5.0);
    /// assert_eq!(left.expected(), 5.0);
    /// assert_eq!(left.label(), "0 - 1");
    /// ```
    pub fn absorb(&mut self, other: BinEntry, label: impl Into<String>) {
        self.label = label.into();
        self.observed += other.observed;
        self.expected += other.expected;
        self.chi_term = chi_term(self.observed, self.expected);
    }
}

#[inline]
fn chi_term(observed: f64, expected: f64) -> f64 {
    if expected > 0.0 {
        let diff = observed - expected;
        diff * diff / expected
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_chi_term_on_construction() {
        let bin = BinEntry::new("a", 7.0, 5.0);
        assert_relative_eq!(bin.chi_term(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_expected_gives_zero_term() {
        let bin = BinEntry::new("empty", 3.0, 0.0);
        assert_eq!(bin.chi_term(), 0.0);
    }

    #[test]
    fn test_setters_recompute_term() {
        let mut bin = BinEntry::new("a", 7.0, 5.0);
        bin.set_expected(7.0);
        assert_eq!(bin.chi_term(), 0.0);
        bin.set_observed(9.0);
        assert_relative_eq!(bin.chi_term(), 4.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_absorb_sums_frequencies() {
        let mut bin = BinEntry::new("[0, 1)", 2.0, 2.5);
        bin.absorb(BinEntry::new("[1, 2)", 6.0, 4.5), "[0, 2)");
        assert_eq!(bin.observed(), 8.0);
        assert_eq!(bin.expected(), 7.0);
        assert_relative_eq!(bin.chi_term(), 1.0 / 7.0, epsilon = 1e-12);
    }
}
