//! Layered settings.
//!
//! Sources, lowest priority first: built-in defaults, a TOML file
//! (`prng.toml` unless `--config` names another), then `PRNG__`-prefixed
//! environment variables with `__` between nested keys, e.g.
//! `PRNG__BATTERY__POKER_HAND_SIZE=4`.

use std::path::Path;

use config::{Config, Environment, File};
use prng_core::types::ValidationError;
use prng_generators::DEFAULT_ITERATION_CAP;
use prng_validation::randomness::{
    BatteryConfig, DEFAULT_GAP_INTERVAL, DEFAULT_POKER_HAND, DEFAULT_RUN_LENGTH_TOLERANCE,
    DEFAULT_UNIFORMITY_BINS,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings file read when `--config` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "prng.toml";

/// Settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Settings file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid iteration cap: {0}. Must be at least 1")]
    InvalidIterationCap(usize),

    #[error("Invalid worker count: {0}. Must be at least 1")]
    InvalidWorkers(usize),

    #[error("Invalid battery settings: {0}")]
    Battery(#[from] ValidationError),
}

/// Randomness battery settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatterySettings {
    /// Uniformity bin count
    pub uniformity_bins: usize,
    /// Lower end of the gap interval
    pub gap_alpha: f64,
    /// Upper end of the gap interval (exclusive)
    pub gap_beta: f64,
    /// Poker hand size
    pub poker_hand_size: usize,
    /// Allowed deviation of the mean run length from 2.0
    pub run_length_tolerance: f64,
}

impl Default for BatterySettings {
    fn default() -> Self {
        Self {
            uniformity_bins: DEFAULT_UNIFORMITY_BINS,
            gap_alpha: DEFAULT_GAP_INTERVAL.0,
            gap_beta: DEFAULT_GAP_INTERVAL.1,
            poker_hand_size: DEFAULT_POKER_HAND,
            run_length_tolerance: DEFAULT_RUN_LENGTH_TOLERANCE,
        }
    }
}

/// CLI settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Cap for cycle-terminated runs
    pub iteration_cap: usize,
    /// Worker threads for `batch`
    pub workers: usize,
    /// Randomness battery
    pub battery: BatterySettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            iteration_cap: DEFAULT_ITERATION_CAP,
            workers: num_cpus::get(),
            battery: BatterySettings::default(),
        }
    }
}

impl Settings {
    /// Loads settings from every source and validates them.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let file = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(SettingsError::FileNotFound(path.display().to_string()));
                }
                File::from(path).required(true)
            }
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        let settings: Settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix("PRNG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.iteration_cap == 0 {
            return Err(SettingsError::InvalidIterationCap(self.iteration_cap));
        }
        if self.workers == 0 {
            return Err(SettingsError::InvalidWorkers(self.workers));
        }
        self.battery_config()?;
        Ok(())
    }

    /// Battery configuration built from these settings.
    pub fn battery_config(&self) -> Result<BatteryConfig, ValidationError> {
        BatteryConfig::builder()
            .uniformity_bins(self.battery.uniformity_bins)
            .gap_interval(self.battery.gap_alpha, self.battery.gap_beta)
            .poker_hand_size(self.battery.poker_hand_size)
            .run_length_tolerance(self.battery.run_length_tolerance)
            .build()
    }
}
