//! Batch command implementation
//!
//! Runs independent jobs from a TOML job file on a bounded worker pool.
//! A failing job is reported in its own outcome and never stops the
//! others, unless `--fail-fast` is given: the first failure then cancels
//! every generation still running or not yet started.
//!
//! ```toml
//! [[jobs]]
//! name = "lcg-normal"
//! count = 1200
//!
//! [jobs.generator]
//! algorithm = "linear"
//! seed = 1
//! multiplier = 1103515245
//! increment = 12345
//! modulus = 2147483648
//!
//! [jobs.fit]
//! distribution = "normal"
//! params = [0.0, 1.0]
//! ```

use std::path::Path;

use prng_generators::{generate_cancellable, CancellationToken, GeneratorParams, RunOutcome, StopReason};
use prng_validation::goodness::run_goodness;
use prng_validation::randomness::{run_battery, BatteryConfig};
use prng_validation::TestResult;
use prng_variables::{DistributionModel, DistributionParams};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{sample, termination};
use crate::config::Settings;
use crate::output::{self, OutputFormat};
use crate::{CliError, Result};

/// Contents of a job file.
#[derive(Debug, Clone, Deserialize)]
pub struct JobFile {
    /// Jobs in file order
    pub jobs: Vec<Job>,
}

/// One generation with its follow-up tests.
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
    /// Job name for reports
    pub name: String,
    /// Generator parameters, tagged by `algorithm`
    pub generator: GeneratorParams,
    /// Fixed count; stop at the first repeat when absent
    #[serde(default)]
    pub count: Option<usize>,
    /// Run the randomness battery on the sequence
    #[serde(default = "default_battery")]
    pub battery: bool,
    /// Sample a distribution and test its fit
    #[serde(default)]
    pub fit: Option<FitJob>,
}

fn default_battery() -> bool {
    true
}

/// Distribution to sample and fit.
#[derive(Debug, Clone, Deserialize)]
pub struct FitJob {
    /// Target distribution
    pub distribution: DistributionModel,
    /// Parameters in the model's order
    pub params: Vec<f64>,
}

/// Final state of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Every step ran
    Completed,
    /// Generation was cancelled after another job failed
    Cancelled,
    /// A step returned an error
    Failed,
}

/// Result of one job.
#[derive(Debug, Clone, Serialize)]
pub struct JobOutcome {
    /// Job name
    pub name: String,
    /// Final state
    pub status: JobStatus,
    /// Number of generated values
    pub length: usize,
    /// Why generation stopped
    pub stop_reason: Option<StopReason>,
    /// Randomness battery results
    pub randomness: Vec<TestResult>,
    /// Goodness-of-fit results
    pub goodness: Vec<TestResult>,
    /// Error message of a failed job
    pub error: Option<String>,
}

impl JobOutcome {
    fn new(name: &str, status: JobStatus) -> Self {
        Self {
            name: name.to_string(),
            status,
            length: 0,
            stop_reason: None,
            randomness: Vec::new(),
            goodness: Vec::new(),
            error: None,
        }
    }
}

/// Reads and parses a job file.
pub fn load_jobs(path: &Path) -> Result<JobFile> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn execute(job: &Job, settings: &Settings, battery: &BatteryConfig, token: &CancellationToken) -> Result<JobOutcome> {
    let outcome = generate_cancellable(&job.generator, termination(job.count, settings), token)?;
    let sequence = match outcome {
        RunOutcome::Completed(sequence) => sequence,
        RunOutcome::Cancelled { produced } => {
            info!(job = %job.name, produced, "Job cancelled");
            return Ok(JobOutcome::new(&job.name, JobStatus::Cancelled));
        }
    };

    let mut outcome = JobOutcome::new(&job.name, JobStatus::Completed);
    outcome.length = sequence.len();
    outcome.stop_reason = Some(sequence.stop_reason());

    if job.battery {
        outcome.randomness = run_battery(sequence.values(), battery)?.into_results();
    }
    if let Some(fit) = &job.fit {
        let params = DistributionParams::from_values(fit.distribution, &fit.params)?;
        let run = sample::draw(&sequence, &params)?;
        outcome.goodness = run_goodness(&run.samples, &params, 0)?.results().cloned().collect();
    }
    Ok(outcome)
}

/// Runs every job on a pool of `settings.workers` threads.
///
/// Outcomes keep the order of `jobs`.
pub fn run_jobs(jobs: &[Job], settings: &Settings, fail_fast: bool) -> Result<Vec<JobOutcome>> {
    let battery = settings.battery_config()?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(settings.workers)
        .build()?;
    let token = CancellationToken::new();

    info!(jobs = jobs.len(), workers = settings.workers, "Running batch");
    let outcomes = pool.install(|| {
        jobs.par_iter()
            .map(|job| match execute(job, settings, &battery, &token) {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!(job = %job.name, error = %err, "Job failed");
                    if fail_fast {
                        token.cancel();
                    }
                    let mut outcome = JobOutcome::new(&job.name, JobStatus::Failed);
                    outcome.error = Some(err.to_string());
                    outcome
                }
            })
            .collect::<Vec<_>>()
    });
    Ok(outcomes)
}

/// Run the batch command
pub fn run(path: &Path, fail_fast: bool, settings: &Settings, format: OutputFormat) -> Result<()> {
    let file = load_jobs(path)?;
    let outcomes = run_jobs(&file.jobs, settings, fail_fast)?;

    let failed = outcomes.iter().filter(|o| o.status == JobStatus::Failed).count();
    info!(jobs = outcomes.len(), failed, "Batch complete");

    match format {
        OutputFormat::Table => {
            for outcome in &outcomes {
                println!(
                    "== {} [{:?}] {} values",
                    outcome.name, outcome.status, outcome.length
                );
                if let Some(error) = &outcome.error {
                    println!("error: {}", error);
                }
                if !outcome.randomness.is_empty() {
                    print!("{}", output::results_table("Randomness", &outcome.randomness));
                }
                if !outcome.goodness.is_empty() {
                    print!("{}", output::results_table("Goodness of fit", &outcome.goodness));
                }
            }
        }
        OutputFormat::Json => output::print_json(&outcomes)?,
    }
    Ok(())
}
