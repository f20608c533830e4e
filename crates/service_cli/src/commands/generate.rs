//! Generate command implementation
//!
//! Runs one generator and prints its sequence.

use prng_generators::{generate, Sequence};
use tracing::info;

use super::GeneratorArgs;
use crate::config::Settings;
use crate::output::{self, OutputFormat};
use crate::Result;

/// Generates the sequence described by `args`.
pub fn sequence(args: &GeneratorArgs, settings: &Settings) -> Result<Sequence> {
    let params = args.to_params()?;
    let termination = args.termination(settings);
    info!(algorithm = params.algorithm().code(), ?termination, "Generating sequence");

    let sequence = generate(&params, termination)?;
    info!(
        length = sequence.len(),
        stop = %output::stop_reason(sequence.stop_reason()),
        "Generation complete"
    );
    Ok(sequence)
}

/// Run the generate command
pub fn run(args: &GeneratorArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let sequence = sequence(args, settings)?;
    match format {
        OutputFormat::Table => print!("{}", output::sequence_table(&sequence)),
        OutputFormat::Json => output::print_json(&sequence)?,
    }
    Ok(())
}
