//! Static dispatch over the eight distributions.
//!
//! [`DistributionModel`] is the parameter-free model choice (what a user
//! picks from a list); [`DistributionParams`] carries one validated
//! parameter set and knows its own model. Asking a model to draw with
//! another model's parameters is a `ParameterMismatch`.

use std::fmt;
use std::str::FromStr;

use prng_core::types::error::ensure_positive_integer;

use crate::distributions::{
    Bernoulli, BernoulliParams, Binomial, BinomialParams, Erlang, ErlangParams, Exponential,
    ExponentialParams, Normal, NormalParams, Poisson, PoissonParams, Triangular, TriangularParams,
    Uniform, UniformParams,
};
use crate::error::VariableError;
use crate::stream::UniformStream;
use crate::variable::RandomVariable;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameter-free distribution choice.
///
/// # Examples
/// ```
/// use prng_variables::DistributionModel;
///
/// let model: DistributionModel = "erlang".parse().unwrap();
/// assert_eq!(model.name(), "Erlang");
/// assert!(model.is_continuous());
/// assert_eq!(model.parameter_names(), &["k", "lambda"]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistributionModel {
    /// Continuous uniform.
    Uniform,
    /// Exponential.
    Exponential,
    /// Normal (twelve-uniform approximation).
    Normal,
    /// Erlang.
    Erlang,
    /// Bernoulli.
    Bernoulli,
    /// Poisson.
    Poisson,
    /// Binomial.
    Binomial,
    /// Triangular.
    Triangular,
}

impl DistributionModel {
    /// All models in display order.
    pub const ALL: [DistributionModel; 8] = [
        DistributionModel::Uniform,
        DistributionModel::Exponential,
        DistributionModel::Normal,
        DistributionModel::Erlang,
        DistributionModel::Bernoulli,
        DistributionModel::Poisson,
        DistributionModel::Binomial,
        DistributionModel::Triangular,
    ];

    /// Distribution name.
    pub fn name(&self) -> &'static str {
        match self {
            DistributionModel::Uniform => Uniform::name(),
            DistributionModel::Exponential => Exponential::name(),
            DistributionModel::Normal => Normal::name(),
            DistributionModel::Erlang => Erlang::name(),
            DistributionModel::Bernoulli => Bernoulli::name(),
            DistributionModel::Poisson => Poisson::name(),
            DistributionModel::Binomial => Binomial::name(),
            DistributionModel::Triangular => Triangular::name(),
        }
    }

    /// Whether the model is continuous.
    pub fn is_continuous(&self) -> bool {
        match self {
            DistributionModel::Uniform => Uniform::is_continuous(),
            DistributionModel::Exponential => Exponential::is_continuous(),
            DistributionModel::Normal => Normal::is_continuous(),
            DistributionModel::Erlang => Erlang::is_continuous(),
            DistributionModel::Bernoulli => Bernoulli::is_continuous(),
            DistributionModel::Poisson => Poisson::is_continuous(),
            DistributionModel::Binomial => Binomial::is_continuous(),
            DistributionModel::Triangular => Triangular::is_continuous(),
        }
    }

    /// Names of the raw parameter values, in the order
    /// [`DistributionParams::from_values`] expects them.
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            DistributionModel::Uniform => &["a", "b"],
            DistributionModel::Exponential => &["lambda"],
            DistributionModel::Normal => &["mean", "std_dev"],
            DistributionModel::Erlang => &["k", "lambda"],
            DistributionModel::Bernoulli => &["p"],
            DistributionModel::Poisson => &["lambda"],
            DistributionModel::Binomial => &["n", "p"],
            DistributionModel::Triangular => &["a", "b", "c"],
        }
    }

    /// Draws one value with `params`.
    ///
    /// # Errors
    ///
    /// `ParameterMismatch` when `params` belong to another model, otherwise
    /// as [`RandomVariable::generate`].
    pub fn generate(
        &self,
        stream: &mut UniformStream<'_>,
        params: &DistributionParams,
    ) -> Result<f64, VariableError> {
        self.check(params)?;
        params.generate(stream)
    }

    /// Density or mass at `x`.
    ///
    /// # Errors
    ///
    /// `ParameterMismatch` when `params` belong to another model.
    pub fn probability(&self, x: f64, params: &DistributionParams) -> Result<f64, VariableError> {
        self.check(params)?;
        Ok(params.probability(x))
    }

    /// Cumulative distribution at `x`.
    ///
    /// # Errors
    ///
    /// `ParameterMismatch` when `params` belong to another model, or
    /// `CdfUnsupported`.
    pub fn cdf(&self, x: f64, params: &DistributionParams) -> Result<f64, VariableError> {
        self.check(params)?;
        params.cdf(x)
    }

    fn check(&self, params: &DistributionParams) -> Result<(), VariableError> {
        let supplied = params.model();
        if supplied != *self {
            return Err(VariableError::ParameterMismatch {
                model: self.name(),
                supplied: supplied.name(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for DistributionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistributionModel::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Unknown distribution '{}'. Valid options: uniform, exponential, normal, erlang, bernoulli, poisson, binomial, triangular",
                    s
                )
            })
    }
}

/// One validated parameter set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DistributionParams {
    /// Uniform(a, b)
    Uniform(UniformParams),
    /// Exponential(λ)
    Exponential(ExponentialParams),
    /// Normal(μ, σ)
    Normal(NormalParams),
    /// Erlang(k, λ)
    Erlang(ErlangParams),
    /// Bernoulli(p)
    Bernoulli(BernoulliParams),
    /// Poisson(λ)
    Poisson(PoissonParams),
    /// Binomial(n, p)
    Binomial(BinomialParams),
    /// Triangular(a, b, c)
    Triangular(TriangularParams),
}

impl DistributionParams {
    /// Uniform(a, b).
    ///
    /// # Errors
    ///
    /// See [`UniformParams::new`].
    pub fn uniform(a: f64, b: f64) -> Result<Self, VariableError> {
        UniformParams::new(a, b).map(Self::Uniform)
    }

    /// Exponential(λ).
    ///
    /// # Errors
    ///
    /// See [`ExponentialParams::new`].
    pub fn exponential(lambda: f64) -> Result<Self, VariableError> {
        ExponentialParams::new(lambda).map(Self::Exponential)
    }

    /// Normal(μ, σ).
    ///
    /// # Errors
    ///
    /// See [`NormalParams::new`].
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self, VariableError> {
        NormalParams::new(mean, std_dev).map(Self::Normal)
    }

    /// Erlang(k, λ).
    ///
    /// # Errors
    ///
    /// See [`ErlangParams::new`].
    pub fn erlang(k: u32, lambda: f64) -> Result<Self, VariableError> {
        ErlangParams::new(k, lambda).map(Self::Erlang)
    }

    /// Bernoulli(p).
    ///
    /// # Errors
    ///
    /// See [`BernoulliParams::new`].
    pub fn bernoulli(p: f64) -> Result<Self, VariableError> {
        BernoulliParams::new(p).map(Self::Bernoulli)
    }

    /// Poisson(λ).
    ///
    /// # Errors
    ///
    /// See [`PoissonParams::new`].
    pub fn poisson(lambda: f64) -> Result<Self, VariableError> {
        PoissonParams::new(lambda).map(Self::Poisson)
    }

    /// Binomial(n, p).
    ///
    /// # Errors
    ///
    /// See [`BinomialParams::new`].
    pub fn binomial(n: u32, p: f64) -> Result<Self, VariableError> {
        BinomialParams::new(n, p).map(Self::Binomial)
    }

    /// Triangular(a, b, c).
    ///
    /// # Errors
    ///
    /// See [`TriangularParams::new`].
    pub fn triangular(a: f64, b: f64, c: f64) -> Result<Self, VariableError> {
        TriangularParams::new(a, b, c).map(Self::Triangular)
    }

    /// Builds parameters for `model` from raw values ordered as
    /// [`DistributionModel::parameter_names`].
    ///
    /// Integer parameters (`k`, `n`) must hold whole positive values.
    ///
    /// # Errors
    ///
    /// `ParameterCount` for the wrong number of values, otherwise the
    /// model's own validation error.
    ///
    /// # Examples
    /// ```
    /// use prng_variables::{DistributionModel, DistributionParams};
    ///
    /// let params = DistributionParams::from_values(DistributionModel::Binomial, &[10.0, 0.3]).unwrap();
    /// assert_eq!(params.model(), DistributionModel::Binomial);
    /// assert!(DistributionParams::from_values(DistributionModel::Binomial, &[2.5, 0.3]).is_err());
    /// ```
    pub fn from_values(model: DistributionModel, values: &[f64]) -> Result<Self, VariableError> {
        let expected = model.parameter_names().len();
        if values.len() != expected {
            return Err(VariableError::ParameterCount {
                distribution: model.name(),
                expected,
                got: values.len(),
            });
        }
        match model {
            DistributionModel::Uniform => Self::uniform(values[0], values[1]),
            DistributionModel::Exponential => Self::exponential(values[0]),
            DistributionModel::Normal => Self::normal(values[0], values[1]),
            DistributionModel::Erlang => {
                Self::erlang(ensure_positive_integer("k", values[0])?, values[1])
            }
            DistributionModel::Bernoulli => Self::bernoulli(values[0]),
            DistributionModel::Poisson => Self::poisson(values[0]),
            DistributionModel::Binomial => {
                Self::binomial(ensure_positive_integer("n", values[0])?, values[1])
            }
            DistributionModel::Triangular => Self::triangular(values[0], values[1], values[2]),
        }
    }

    /// Model these parameters belong to.
    pub fn model(&self) -> DistributionModel {
        match self {
            DistributionParams::Uniform(_) => DistributionModel::Uniform,
            DistributionParams::Exponential(_) => DistributionModel::Exponential,
            DistributionParams::Normal(_) => DistributionModel::Normal,
            DistributionParams::Erlang(_) => DistributionModel::Erlang,
            DistributionParams::Bernoulli(_) => DistributionModel::Bernoulli,
            DistributionParams::Poisson(_) => DistributionModel::Poisson,
            DistributionParams::Binomial(_) => DistributionModel::Binomial,
            DistributionParams::Triangular(_) => DistributionModel::Triangular,
        }
    }

    /// Draws one value.
    ///
    /// # Errors
    ///
    /// `StreamExhausted` when the stream cannot supply the whole draw.
    pub fn generate(&self, stream: &mut UniformStream<'_>) -> Result<f64, VariableError> {
        match self {
            DistributionParams::Uniform(p) => Uniform::generate(stream, p),
            DistributionParams::Exponential(p) => Exponential::generate(stream, p),
            DistributionParams::Normal(p) => Normal::generate(stream, p),
            DistributionParams::Erlang(p) => Erlang::generate(stream, p),
            DistributionParams::Bernoulli(p) => Bernoulli::generate(stream, p),
            DistributionParams::Poisson(p) => Poisson::generate(stream, p),
            DistributionParams::Binomial(p) => Binomial::generate(stream, p),
            DistributionParams::Triangular(p) => Triangular::generate(stream, p),
        }
    }

    /// Density or mass at `x`.
    pub fn probability(&self, x: f64) -> f64 {
        match self {
            DistributionParams::Uniform(p) => Uniform::probability(x, p),
            DistributionParams::Exponential(p) => Exponential::probability(x, p),
            DistributionParams::Normal(p) => Normal::probability(x, p),
            DistributionParams::Erlang(p) => Erlang::probability(x, p),
            DistributionParams::Bernoulli(p) => Bernoulli::probability(x, p),
            DistributionParams::Poisson(p) => Poisson::probability(x, p),
            DistributionParams::Binomial(p) => Binomial::probability(x, p),
            DistributionParams::Triangular(p) => Triangular::probability(x, p),
        }
    }

    /// Cumulative distribution at `x`.
    ///
    /// # Errors
    ///
    /// `CdfUnsupported` for a distribution without a CDF.
    pub fn cdf(&self, x: f64) -> Result<f64, VariableError> {
        match self {
            DistributionParams::Uniform(p) => Uniform::cdf(x, p),
            DistributionParams::Exponential(p) => Exponential::cdf(x, p),
            DistributionParams::Normal(p) => Normal::cdf(x, p),
            DistributionParams::Erlang(p) => Erlang::cdf(x, p),
            DistributionParams::Bernoulli(p) => Bernoulli::cdf(x, p),
            DistributionParams::Poisson(p) => Poisson::cdf(x, p),
            DistributionParams::Binomial(p) => Binomial::cdf(x, p),
            DistributionParams::Triangular(p) => Triangular::cdf(x, p),
        }
    }

    /// Whether the underlying model is continuous.
    pub fn is_continuous(&self) -> bool {
        self.model().is_continuous()
    }
}
