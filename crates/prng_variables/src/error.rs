//! Error types for distribution transforms.

use prng_core::types::ValidationError;
use thiserror::Error;

/// Distribution transform errors.
///
/// Stream exhaustion is kept distinct from validation so that a sampling
/// loop can stop on it while keeping the samples already drawn.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VariableError {
    /// A distribution parameter or a stream value failed validation.
    #[error(transparent)]
    InvalidParameter(#[from] ValidationError),

    /// The stream cannot supply a whole draw.
    #[error("Uniform stream exhausted: draw needs at least {needed} values, {remaining} remain")]
    StreamExhausted {
        /// Minimum number of uniforms the draw required
        needed: usize,
        /// Uniforms left in the stream
        remaining: usize,
    },

    /// Parameters of one distribution were supplied to another.
    #[error("{supplied} parameters cannot be used with the {model} model")]
    ParameterMismatch {
        /// Model asked to draw
        model: &'static str,
        /// Distribution the parameters belong to
        supplied: &'static str,
    },

    /// Wrong number of raw parameter values.
    #[error("{distribution} expects {expected} parameter(s), got {got}")]
    ParameterCount {
        /// Distribution name
        distribution: &'static str,
        /// Required count
        expected: usize,
        /// Supplied count
        got: usize,
    },

    /// The distribution has no CDF.
    #[error("CDF is not available for the {distribution} distribution")]
    CdfUnsupported {
        /// Distribution name
        distribution: &'static str,
    },
}
