//! Mathematical building blocks for the test batteries and distributions.
//!
//! - [`special`]: log-gamma, incomplete gamma, chi-square tail, combinatorics
//! - [`normal`]: standard normal CDF/PDF and two-sided p-values
//! - [`tables`]: tabulated critical values at the 5% significance level

pub mod normal;
pub mod special;
pub mod tables;
