//! Rendering of command results.
//!
//! Tables go to stdout as plain text; `--format json` prints one pretty
//! JSON document per command instead. Logs always go to stderr.

use std::fmt::Write;

use clap::ValueEnum;
use prng_core::stats::{HistogramBin, ModeClass, SampleSummary};
use prng_generators::{Sequence, StopReason};
use prng_validation::{Auxiliary, TestResult};
use serde::Serialize;

use crate::Result;

/// Output format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Describes why a sequence stopped.
pub fn stop_reason(reason: StopReason) -> String {
    match reason {
        StopReason::CycleDetected { repeated } => format!("cycle detected (raw value {} repeated)", repeated),
        StopReason::CountReached => "requested count reached".to_string(),
    }
}

/// Index, raw value and normalised value of every element.
pub fn sequence_table(sequence: &Sequence) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}), {} values, divisor {}",
        sequence.algorithm().name(),
        sequence.algorithm().code(),
        sequence.len(),
        sequence.divisor()
    );
    let _ = writeln!(out, "{:>8}  {:>20}  {:>12}", "#", "raw", "value");
    for (i, (raw, value)) in sequence.raw().iter().zip(sequence.values()).enumerate() {
        let _ = writeln!(out, "{:>8}  {:>20}  {:>12.6}", i + 1, raw, value);
    }
    let _ = writeln!(out, "stopped: {}", stop_reason(sequence.stop_reason()));
    out
}

/// One row per test result.
pub fn results_table(title: &str, results: &[TestResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(
        out,
        "{:<20}  {:>14}  {:>22}  {:>4}  {:<5}",
        "test", "statistic", "threshold", "df", "result"
    );
    for result in results {
        let df = result
            .degrees_of_freedom
            .map_or_else(|| "-".to_string(), |df| df.to_string());
        let _ = writeln!(
            out,
            "{:<20}  {:>14.6}  {:>22}  {:>4}  {:<5}",
            result.name,
            result.statistic,
            result.threshold.to_string(),
            df,
            result.verdict.to_string()
        );
        if let Some(detail) = auxiliary_line(&result.auxiliary) {
            let _ = writeln!(out, "{:<20}  {}", "", detail);
        }
    }
    out
}

fn auxiliary_line(auxiliary: &Auxiliary) -> Option<String> {
    match auxiliary {
        Auxiliary::None | Auxiliary::Bins(_) | Auxiliary::RunLengths(_) => None,
        Auxiliary::Moments {
            mean,
            variance,
            expected_mean,
            expected_variance,
        } => Some(format!(
            "mean {:.6} (expected {:.6}), variance {:.6} (expected {:.6})",
            mean, expected_mean, variance, expected_variance
        )),
        Auxiliary::Runs {
            runs,
            above,
            below,
            expected,
            ..
        } => Some(format!(
            "{} runs (expected {:.2}), {} above / {} below the median",
            runs, expected, above, below
        )),
        Auxiliary::Deviations { d_plus, d_minus } => {
            Some(format!("D+ = {:.6}, D- = {:.6}", d_plus, d_minus))
        }
    }
}

/// Sample summary and histogram.
pub fn sample_table(summary: Option<&SampleSummary>, histogram: &[HistogramBin]) -> String {
    let mut out = String::new();
    let Some(summary) = summary else {
        let _ = writeln!(out, "no samples");
        return out;
    };
    let mode = match &summary.mode {
        ModeClass::Single(value) => format!("{}", value),
        ModeClass::Multimodal(values) => format!("multimodal {:?}", values),
        ModeClass::AllUnique => "none (all values unique)".to_string(),
    };
    let _ = writeln!(out, "count     {}", summary.count);
    let _ = writeln!(out, "mean      {:.6}", summary.mean);
    let _ = writeln!(out, "variance  {:.6}", summary.variance);
    let _ = writeln!(out, "mode      {}", mode);

    let widest = histogram.iter().map(|bin| bin.count).max().unwrap_or(0).max(1);
    for bin in histogram {
        let bar = "#".repeat(bin.count * 40 / widest);
        let _ = writeln!(out, "{:>24}  {:>6}  {}", bin.label, bin.count, bar);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use prng_generators::{generate, GeneratorParams, Termination};
    use prng_validation::randomness::{run_battery, BatteryConfig};

    #[test]
    fn test_sequence_table_lists_every_value() {
        let params = GeneratorParams::Linear {
            seed: 7,
            multiplier: 5,
            increment: 3,
            modulus: 16,
        };
        let sequence = generate(&params, Termination::Count(5)).unwrap();
        let table = sequence_table(&sequence);
        assert!(table.contains("0.400000"));
        assert!(table.contains("requested count reached"));
        assert_eq!(table.lines().count(), 1 + 1 + 5 + 1);
    }

    #[test]
    fn test_results_table_marks_not_evaluable() {
        let report = run_battery(&[], &BatteryConfig::default()).unwrap();
        let table = results_table("Randomness", report.results());
        assert!(table.contains("---"));
        assert!(table.contains("Poker"));
    }

    #[test]
    fn test_sample_table_without_samples() {
        assert_eq!(sample_table(None, &[]), "no samples\n");
    }

    #[test]
    fn test_stop_reason_text() {
        assert_eq!(
            stop_reason(StopReason::CycleDetected { repeated: 4 }),
            "cycle detected (raw value 4 repeated)"
        );
    }
}
