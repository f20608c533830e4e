//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Argument groups shared
//! between commands live here.

pub mod batch;
pub mod check;
pub mod fit;
pub mod generate;
pub mod randomness;
pub mod sample;

use std::str::FromStr;

use clap::Args;
use prng_core::types::error::ensure_natural;
use prng_generators::{Algorithm, GeneratorParams, QcgNormalisation, Termination};
use prng_variables::{DistributionModel, DistributionParams};

use crate::config::Settings;
use crate::{CliError, Result};

/// Generator selection and parameters.
#[derive(Args, Debug, Clone)]
pub struct GeneratorArgs {
    /// Algorithm code or name (msm, mpm, cmm, lcg, mcg, acg, qcg, bbs)
    #[arg(short, long)]
    pub algorithm: Algorithm,

    /// Seed (every algorithm except acg)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Second seed (mpm)
    #[arg(long)]
    pub seed2: Option<u64>,

    /// Comma-separated seed window, oldest first (acg)
    #[arg(long)]
    pub seeds: Option<String>,

    /// Multiplier constant (cmm)
    #[arg(long)]
    pub constant: Option<u64>,

    /// Multiplier (lcg, mcg)
    #[arg(long)]
    pub multiplier: Option<u64>,

    /// Increment (lcg)
    #[arg(long)]
    pub increment: Option<u64>,

    /// Modulus (lcg, mcg, acg, qcg)
    #[arg(short, long)]
    pub modulus: Option<u64>,

    /// Quadratic coefficient (qcg)
    #[arg(long)]
    pub a: Option<u64>,

    /// Linear coefficient (qcg)
    #[arg(long)]
    pub b: Option<u64>,

    /// Constant term (qcg)
    #[arg(long)]
    pub c: Option<u64>,

    /// First prime, 3 mod 4 (bbs)
    #[arg(long)]
    pub p: Option<u64>,

    /// Second prime, 3 mod 4 (bbs)
    #[arg(long)]
    pub q: Option<u64>,

    /// Keep raw qcg values instead of dividing by m - 1
    #[arg(long)]
    pub raw: bool,

    /// Produce exactly this many values instead of stopping at the first repeat
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
}

fn required(value: Option<u64>, flag: &str, algorithm: Algorithm) -> Result<u64> {
    value.ok_or_else(|| {
        CliError::InvalidArgument(format!("--{} is required for {}", flag, algorithm.code()))
    })
}

impl GeneratorArgs {
    /// Parameter set for the selected algorithm.
    pub fn to_params(&self) -> Result<GeneratorParams> {
        let algorithm = self.algorithm;
        let seed = || required(self.seed, "seed", algorithm);
        let modulus = || required(self.modulus, "modulus", algorithm);

        let params = match algorithm {
            Algorithm::MidSquare => GeneratorParams::MidSquare { seed: seed()? },
            Algorithm::MidProduct => GeneratorParams::MidProduct {
                seed1: seed()?,
                seed2: required(self.seed2, "seed2", algorithm)?,
            },
            Algorithm::ConstantMultiplier => GeneratorParams::ConstantMultiplier {
                seed: seed()?,
                constant: required(self.constant, "constant", algorithm)?,
            },
            Algorithm::Linear => GeneratorParams::Linear {
                seed: seed()?,
                multiplier: required(self.multiplier, "multiplier", algorithm)?,
                increment: required(self.increment, "increment", algorithm)?,
                modulus: modulus()?,
            },
            Algorithm::Multiplicative => GeneratorParams::Multiplicative {
                seed: seed()?,
                multiplier: required(self.multiplier, "multiplier", algorithm)?,
                modulus: modulus()?,
            },
            Algorithm::Additive => {
                let list = self.seeds.as_deref().ok_or_else(|| {
                    CliError::InvalidArgument("--seeds is required for acg".to_string())
                })?;
                GeneratorParams::Additive {
                    seeds: parse_seed_list(list)?,
                    modulus: modulus()?,
                }
            }
            Algorithm::Quadratic => GeneratorParams::Quadratic {
                seed: seed()?,
                a: required(self.a, "a", algorithm)?,
                b: required(self.b, "b", algorithm)?,
                c: required(self.c, "c", algorithm)?,
                modulus: modulus()?,
                normalisation: if self.raw {
                    QcgNormalisation::Raw
                } else {
                    QcgNormalisation::Unit
                },
            },
            Algorithm::BlumBlumShub => GeneratorParams::BlumBlumShub {
                seed: seed()?,
                p: required(self.p, "p", algorithm)?,
                q: required(self.q, "q", algorithm)?,
            },
        };
        Ok(params)
    }

    /// Termination policy: a fixed count when `--count` is given, otherwise
    /// stop at the first repeat within the configured cap.
    pub fn termination(&self, settings: &Settings) -> Termination {
        termination(self.count, settings)
    }
}

/// Termination policy for an optional fixed count.
pub fn termination(count: Option<usize>, settings: &Settings) -> Termination {
    match count {
        Some(count) => Termination::Count(count),
        None => Termination::UntilCycle {
            cap: settings.iteration_cap,
        },
    }
}

/// Target distribution and its parameters.
#[derive(Args, Debug, Clone)]
pub struct DistributionArgs {
    /// Distribution (uniform, exponential, normal, erlang, bernoulli, poisson, binomial, triangular)
    #[arg(short, long)]
    pub distribution: DistributionModel,

    /// Comma-separated parameters, e.g. "0,1" for normal (mean, standard deviation)
    #[arg(long, allow_hyphen_values = true)]
    pub params: String,
}

impl DistributionArgs {
    /// Validated parameter set.
    pub fn to_params(&self) -> Result<DistributionParams> {
        let values = parse_list::<f64>(&self.params, "number")?;
        Ok(DistributionParams::from_values(self.distribution, &values)?)
    }
}

/// Parses a comma-separated list; rows may be split across lines.
fn parse_list<T: FromStr>(input: &str, what: &str) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input.as_bytes());

    let mut values = Vec::new();
    for record in reader.records() {
        for field in record?.iter() {
            let value = field
                .parse::<T>()
                .map_err(|_| CliError::InvalidArgument(format!("'{}' is not a valid {}", field, what)))?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Parses a comma-separated list of natural-number seeds.
pub fn parse_seed_list(input: &str) -> Result<Vec<u64>> {
    let seeds = parse_list::<u64>(input, "natural number")?;
    for seed in &seeds {
        ensure_natural("seeds", *seed)?;
    }
    Ok(seeds)
}
