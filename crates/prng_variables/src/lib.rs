//! # prng_variables: Distribution Transform Layer
//!
//! Stateless transformers that consume a uniform(0,1) stream and emit
//! samples of a target distribution:
//!
//! | Distribution | Uniforms per draw | Method |
//! |--------------|-------------------|--------|
//! | Uniform(a, b) | 1 | `a + (b - a) r` |
//! | Exponential(λ) | 1 | `-ln(1 - r) / λ` |
//! | Normal(μ, σ) | 12 | `(Σ r - 6) σ + μ` |
//! | Erlang(k, λ) | k | `-ln(Π r) / λ` |
//! | Bernoulli(p) | 1 | `1 if r ≤ p` |
//! | Poisson(λ) | variable | multiply until `Π r < e^-λ` |
//! | Binomial(n, p) | n | count of `r ≤ p` |
//! | Triangular(a, b, c) | 1 | piecewise inverse CDF |
//!
//! ## Design
//!
//! - Distributions are unit structs implementing [`RandomVariable`] with an
//!   associated, pre-validated parameter type; [`DistributionModel`] and
//!   [`DistributionParams`] dispatch over them statically
//! - A draw either consumes every uniform it needs or none: on exhaustion
//!   the [`UniformStream`] cursor is left where the draw started
//! - [`sample_all`] keeps drawing until the stream cannot satisfy a whole
//!   draw, keeping every completed sample
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_variables::{DistributionParams, UniformStream};
//!
//! let uniforms = [0.5, 0.25];
//! let mut stream = UniformStream::new(&uniforms).unwrap();
//! let params = DistributionParams::exponential(2.0).unwrap();
//!
//! let x = params.generate(&mut stream).unwrap();
//! assert!((x - 0.5_f64.ln().abs() / 2.0).abs() < 1e-12);
//! assert_eq!(stream.remaining(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distributions;
mod error;
mod model;
mod sampling;
mod stream;
mod variable;

pub use error::VariableError;
pub use model::{DistributionModel, DistributionParams};
pub use sampling::{sample_all, SampleRun};
pub use stream::UniformStream;
pub use variable::RandomVariable;
