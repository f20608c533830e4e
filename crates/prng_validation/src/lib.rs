//! # prng_validation: Statistical Test Batteries
//!
//! ## Randomness battery (raw uniform stream)
//!
//! | Test | Statistic | Decision |
//! |------|-----------|----------|
//! | Mean/variance | sample mean, variance | reported only |
//! | Uniformity | χ² over 10 equal bins | p > 0.05 |
//! | Runs | runs above/below the median, z-score | two-sided p > 0.05 |
//! | Run length | mean run length | within 0.5 of 2.0 |
//! | Gaps | χ² over gap lengths {0..4, ≥5} | p > 0.05 |
//! | Poker | χ² over distinct digits per hand | p > 0.05 |
//!
//! ## Goodness-of-fit battery (transformed samples)
//!
//! | Test | Statistic | Decision |
//! |------|-----------|----------|
//! | Chi-square | binned χ² with small-bin merging | χ² < critical value |
//! | Kolmogorov–Smirnov | `max(D+, D−)` (continuous only) | D < critical value |
//!
//! Degenerate input (too few values, zero variance, too few valid
//! categories) never raises: the result carries
//! [`Verdict::NotEvaluable`] and `passed()` is `false`.
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_validation::randomness::{run_battery, BatteryConfig};
//!
//! let values: Vec<f64> = (0..1000).map(|i| ((i * 7919) % 1000) as f64 / 1000.0).collect();
//! let report = run_battery(&values, &BatteryConfig::default()).unwrap();
//!
//! assert_eq!(report.results().len(), 6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod goodness;
pub mod randomness;
mod result;

pub use result::{Auxiliary, TestResult, Threshold, Verdict};
