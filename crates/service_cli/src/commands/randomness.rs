//! Test command implementation
//!
//! Runs the randomness battery on a generated sequence.

use prng_validation::randomness::run_battery;
use tracing::info;

use super::{generate, GeneratorArgs};
use crate::config::Settings;
use crate::output::{self, OutputFormat};
use crate::Result;

/// Run the test command
pub fn run(args: &GeneratorArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let sequence = generate::sequence(args, settings)?;
    let report = run_battery(sequence.values(), &settings.battery_config()?)?;
    info!(
        passed = report.passed_count(),
        total = report.results().len(),
        "Randomness battery complete"
    );

    match format {
        OutputFormat::Table => {
            let title = format!(
                "Randomness battery: {} values from {}",
                sequence.len(),
                sequence.algorithm().name()
            );
            print!("{}", output::results_table(&title, report.results()));
        }
        OutputFormat::Json => output::print_json(report.results())?,
    }
    Ok(())
}
