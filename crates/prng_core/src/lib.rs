//! # prng_core: Numeric Foundation for the PRNG Workbench
//!
//! ## Foundation Layer Role
//!
//! prng_core is the bottom layer of the workspace. It provides:
//! - Error types shared by every layer (`types::error`)
//! - Chi-square bins with derived `(O - E)² / E` terms (`types::bin`)
//! - Special functions: log-gamma, regularised incomplete gamma, chi-square
//!   upper tail, standard normal CDF/PDF, combinatorics (`math`)
//! - Critical-value tables at α = 0.05 (`math::tables`)
//! - Descriptive statistics and histograms (`stats`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other prng_* crates, with minimal
//! external dependencies:
//! - num-traits: generic floating point for the normal distribution helpers
//! - thiserror: error derivation
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use prng_core::math::special::chi_square_survival;
//! use prng_core::math::tables::chi_square_critical_value;
//!
//! // The 5% critical value with 9 degrees of freedom
//! let critical = chi_square_critical_value(9).unwrap();
//! assert!((critical - 16.919).abs() < 1e-9);
//!
//! // ... and its upper-tail probability
//! let p = chi_square_survival(critical, 9);
//! assert!((p - 0.05).abs() < 1e-3);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for bins, summaries and histograms

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod stats;
pub mod types;
