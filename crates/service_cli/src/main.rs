//! prng CLI - Pseudo-random Number Generator Workbench
//!
//! Operational entry point for the generator engine, the distribution
//! transforms and the statistical test batteries.
//!
//! # Commands
//!
//! - `prng generate -a lcg -s 7 --multiplier 5 --increment 3 -m 16` - Print a sequence
//! - `prng test ...` - Run the randomness battery on a sequence
//! - `prng sample ... -d normal --params 0,1` - Transform a sequence into samples
//! - `prng fit ... -d normal --params 0,1` - Goodness of fit of those samples
//! - `prng batch -j jobs.toml` - Run a job file on a worker pool
//! - `prng check` - Check settings and the engine
//!
//! # Architecture
//!
//! As the service layer, this crate owns argument parsing, settings,
//! logging and rendering; every computation is delegated to the library
//! crates.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::{DistributionArgs, GeneratorArgs};
use config::Settings;
use output::OutputFormat;

/// PRNG workbench CLI
#[derive(Parser)]
#[command(name = "prng")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file path (default: prng.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sequence
    Generate {
        #[command(flatten)]
        generator: GeneratorArgs,
    },

    /// Run the randomness battery on a generated sequence
    Test {
        #[command(flatten)]
        generator: GeneratorArgs,
    },

    /// Transform a generated sequence into distribution samples
    Sample {
        #[command(flatten)]
        generator: GeneratorArgs,

        #[command(flatten)]
        distribution: DistributionArgs,
    },

    /// Test the goodness of fit of transformed samples
    Fit {
        #[command(flatten)]
        generator: GeneratorArgs,

        #[command(flatten)]
        distribution: DistributionArgs,
    },

    /// Run the jobs of a TOML job file in parallel
    Batch {
        /// Path to the job file
        #[arg(short, long)]
        jobs: PathBuf,

        /// Cancel outstanding generations after the first failed job
        #[arg(long)]
        fail_fast: bool,
    },

    /// Check settings and the generator engine
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; RUST_LOG overrides the default level
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "Settings loaded");

    match &cli.command {
        Commands::Generate { generator } => commands::generate::run(generator, &settings, cli.format),
        Commands::Test { generator } => commands::randomness::run(generator, &settings, cli.format),
        Commands::Sample {
            generator,
            distribution,
        } => commands::sample::run(generator, distribution, &settings, cli.format),
        Commands::Fit {
            generator,
            distribution,
        } => commands::fit::run(generator, distribution, &settings, cli.format),
        Commands::Batch { jobs, fail_fast } => {
            commands::batch::run(jobs, *fail_fast, &settings, cli.format)
        }
        Commands::Check => commands::check::run(&settings, cli.format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "prng", "generate", "-a", "lcg", "-s", "7", "--multiplier", "5", "--increment", "3", "-m",
            "16", "-n", "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate { generator } => {
                assert_eq!(generator.count, Some(5));
                assert!(generator.to_params().is_ok());
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_fit_with_global_format() {
        let cli = Cli::try_parse_from([
            "prng", "fit", "-a", "bbs", "-s", "3", "--p", "7", "--q", "11", "-d", "normal",
            "--params", "-1,2", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Fit { distribution, .. } => {
                assert_eq!(distribution.params, "-1,2");
            }
            _ => panic!("expected fit"),
        }
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert!(Cli::try_parse_from(["prng", "generate", "-a", "xorshift"]).is_err());
    }
}
