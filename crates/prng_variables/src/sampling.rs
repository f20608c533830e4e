//! Draining a uniform stream into samples.

use tracing::debug;

use crate::error::VariableError;
use crate::model::DistributionParams;
use crate::stream::UniformStream;

/// Samples drawn from one pass over a uniform stream.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleRun {
    /// Samples in draw order.
    pub samples: Vec<f64>,
    /// Uniforms consumed by the completed draws.
    pub consumed: usize,
    /// Uniforms left over because they could not complete a draw.
    pub leftover: usize,
}

/// Draws from `params` until the stream cannot satisfy a whole draw.
///
/// Exhaustion ends the loop and keeps every completed sample; the partial
/// draw consumes nothing.
///
/// # Errors
///
/// Any error other than `StreamExhausted` (none for validated parameters).
///
/// # Examples
/// ```
/// use prng_variables::{sample_all, DistributionParams, UniformStream};
///
/// let uniforms = vec![0.5; 30];
/// let params = DistributionParams::normal(0.0, 1.0).unwrap();
/// let run = sample_all(&params, UniformStream::new(&uniforms).unwrap()).unwrap();
///
/// assert_eq!(run.samples.len(), 2);
/// assert_eq!(run.consumed, 24);
/// assert_eq!(run.leftover, 6);
/// ```
pub fn sample_all(
    params: &DistributionParams,
    mut stream: UniformStream<'_>,
) -> Result<SampleRun, VariableError> {
    let mut samples = Vec::new();
    loop {
        match params.generate(&mut stream) {
            Ok(value) => samples.push(value),
            Err(VariableError::StreamExhausted { .. }) => break,
            Err(err) => return Err(err),
        }
    }

    debug!(
        distribution = params.model().name(),
        samples = samples.len(),
        consumed = stream.position(),
        leftover = stream.remaining(),
        "uniform stream drained"
    );

    Ok(SampleRun {
        samples,
        consumed: stream.position(),
        leftover: stream.remaining(),
    })
}
