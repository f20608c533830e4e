//! Descriptive statistics for generated and transformed samples.
//!
//! - [`summary`]: mean, sample variance and mode classification
//! - [`histogram`]: frequency tables for discrete and continuous samples

pub mod histogram;
pub mod summary;

pub use histogram::{histogram, HistogramBin};
pub use summary::{mean, median, sample_variance, ModeClass, SampleSummary};
