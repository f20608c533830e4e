//! Sample command implementation
//!
//! Transforms a generated uniform sequence into samples of a target
//! distribution.

use prng_core::stats::{histogram, HistogramBin, SampleSummary};
use prng_generators::Sequence;
use prng_variables::{sample_all, DistributionModel, DistributionParams, SampleRun, UniformStream};
use serde::Serialize;
use tracing::{info, warn};

use super::{generate, DistributionArgs, GeneratorArgs};
use crate::config::Settings;
use crate::output::{self, OutputFormat};
use crate::Result;

/// Samples with their summary, as printed by `sample`.
#[derive(Debug, Serialize)]
pub struct SampleReport {
    /// Target distribution
    pub distribution: DistributionModel,
    /// Samples in draw order
    pub samples: Vec<f64>,
    /// Uniforms consumed by complete draws
    pub consumed: usize,
    /// Uniforms left over
    pub leftover: usize,
    /// Summary statistics, absent when no sample was drawn
    pub summary: Option<SampleSummary>,
    /// Frequency table
    pub histogram: Vec<HistogramBin>,
}

/// Draws samples of `params` from the normalised values of `sequence`.
pub fn draw(sequence: &Sequence, params: &DistributionParams) -> Result<SampleRun> {
    let stream = UniformStream::new(sequence.values())?;
    let run = sample_all(params, stream)?;
    if run.samples.is_empty() {
        warn!(
            uniforms = sequence.len(),
            distribution = params.model().name(),
            "Sequence too short for a single draw"
        );
    }
    info!(
        distribution = params.model().name(),
        samples = run.samples.len(),
        leftover = run.leftover,
        "Sampling complete"
    );
    Ok(run)
}

/// Generates, then samples, per the command arguments.
pub fn samples(
    generator: &GeneratorArgs,
    distribution: &DistributionArgs,
    settings: &Settings,
) -> Result<(DistributionParams, SampleRun)> {
    let params = distribution.to_params()?;
    let sequence = generate::sequence(generator, settings)?;
    let run = draw(&sequence, &params)?;
    Ok((params, run))
}

/// Run the sample command
pub fn run(
    generator: &GeneratorArgs,
    distribution: &DistributionArgs,
    settings: &Settings,
    format: OutputFormat,
) -> Result<()> {
    let (params, run) = samples(generator, distribution, settings)?;
    let report = SampleReport {
        distribution: params.model(),
        summary: SampleSummary::from_values(&run.samples),
        histogram: histogram(&run.samples, !params.is_continuous()),
        samples: run.samples,
        consumed: run.consumed,
        leftover: run.leftover,
    };

    match format {
        OutputFormat::Table => {
            println!(
                "{} samples: {} drawn, {} uniforms consumed, {} left over",
                report.distribution.name(),
                report.samples.len(),
                report.consumed,
                report.leftover
            );
            print!(
                "{}",
                output::sample_table(report.summary.as_ref(), &report.histogram)
            );
        }
        OutputFormat::Json => output::print_json(&report)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use prng_generators::{generate, GeneratorParams, Termination};

    #[test]
    fn test_full_period_stream_summary() {
        // every residue of 16 once: uniforms r/15 average 0.5
        let params = GeneratorParams::Linear {
            seed: 7,
            multiplier: 5,
            increment: 3,
            modulus: 16,
        };
        let sequence = generate(&params, Termination::Count(16)).unwrap();
        let run = draw(&sequence, &DistributionParams::uniform(2.0, 4.0).unwrap()).unwrap();
        let summary = SampleSummary::from_values(&run.samples).unwrap();
        assert_eq!(summary.count, 16);
        assert_relative_eq!(summary.mean, 3.0, epsilon = 1e-12);
        // uniforms r/15, r = 0..15: variance 4 * (16*17/12) / 225
        assert_relative_eq!(summary.variance, 4.0 * (16.0 * 17.0 / 12.0) / 225.0, epsilon = 1e-12);
    }

    #[test]
    fn test_draw_from_generated_sequence() {
        let params = GeneratorParams::Linear {
            seed: 1,
            multiplier: 21,
            increment: 3,
            modulus: 1_000,
        };
        let sequence = generate(&params, Termination::Count(100)).unwrap();
        let run = draw(&sequence, &DistributionParams::normal(0.0, 1.0).unwrap()).unwrap();
        assert_eq!(run.samples.len(), 8);
        assert_eq!(run.leftover, 4);
    }

    #[test]
    fn test_raw_values_rejected_as_uniforms() {
        let params = GeneratorParams::Quadratic {
            seed: 3,
            a: 2,
            b: 3,
            c: 1,
            modulus: 97,
            normalisation: prng_generators::QcgNormalisation::Raw,
        };
        let sequence = generate(&params, Termination::Count(10)).unwrap();
        let result = draw(&sequence, &DistributionParams::uniform(0.0, 1.0).unwrap());
        assert!(result.is_err());
    }
}
