//! Goodness-of-fit battery: transformed samples against a theoretical model.
//!
//! The chi-square test applies to every model; Kolmogorov–Smirnov only to
//! continuous ones, and asking for it on a discrete model is an error
//! rather than a not-evaluable result.

mod chi_square;
mod kolmogorov_smirnov;

pub use chi_square::{chi_square_fit, fit_bins, gof_bin_count, merge_small_bins};
pub use kolmogorov_smirnov::kolmogorov_smirnov;

use prng_variables::{DistributionParams, VariableError};
use thiserror::Error;

use crate::result::TestResult;

/// Goodness-of-fit errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GoodnessError {
    /// The test needs a continuous model.
    #[error("{distribution} is discrete; the Kolmogorov–Smirnov test needs a continuous model")]
    NotContinuous {
        /// Distribution name
        distribution: &'static str,
    },

    /// Evaluating the model failed.
    #[error(transparent)]
    Variable(#[from] VariableError),
}

/// Results of the goodness-of-fit battery for one model.
#[derive(Clone, Debug, PartialEq)]
pub struct GoodnessReport {
    chi_square: TestResult,
    kolmogorov_smirnov: Option<TestResult>,
}

impl GoodnessReport {
    /// Binned chi-square result.
    pub fn chi_square(&self) -> &TestResult {
        &self.chi_square
    }

    /// Kolmogorov–Smirnov result; `None` for discrete models.
    pub fn kolmogorov_smirnov(&self) -> Option<&TestResult> {
        self.kolmogorov_smirnov.as_ref()
    }

    /// Every result that was computed, chi-square first.
    pub fn results(&self) -> impl Iterator<Item = &TestResult> {
        std::iter::once(&self.chi_square).chain(self.kolmogorov_smirnov.as_ref())
    }

    /// Whether every computed test passed.
    pub fn all_passed(&self) -> bool {
        self.results().all(TestResult::passed)
    }
}

/// Runs chi-square, and Kolmogorov–Smirnov when the model is continuous.
///
/// `estimated` is the number of model parameters fitted from `samples`
/// (0 when the parameters were supplied).
///
/// # Errors
///
/// `GoodnessError::Variable` when the model cannot be evaluated.
///
/// # Examples
/// ```
/// use prng_validation::goodness::run_goodness;
/// use prng_variables::DistributionParams;
///
/// let params = DistributionParams::poisson(3.0).unwrap();
/// let samples = [1.0, 2.0, 3.0, 3.0, 4.0];
/// let report = run_goodness(&samples, &params, 0).unwrap();
///
/// assert!(report.kolmogorov_smirnov().is_none());
/// ```
pub fn run_goodness(
    samples: &[f64],
    params: &DistributionParams,
    estimated: usize,
) -> Result<GoodnessReport, GoodnessError> {
    let chi_square = chi_square_fit(samples, params, estimated)?;
    let kolmogorov_smirnov = if params.is_continuous() {
        Some(kolmogorov_smirnov(samples, params)?)
    } else {
        None
    };
    Ok(GoodnessReport {
        chi_square,
        kolmogorov_smirnov,
    })
}
