//! Public re-exports reachable from the crate root.

#[test]
fn test_root_exports() {
    use prng_validation::{Auxiliary, TestResult, Threshold, Verdict};

    let result = TestResult::not_evaluable("Runs", "empty sequence");
    assert_eq!(result.threshold, Threshold::None);
    assert_eq!(result.auxiliary, Auxiliary::None);
    assert!(matches!(result.verdict, Verdict::NotEvaluable { .. }));
}

#[test]
fn test_battery_exports() {
    use prng_validation::goodness::{gof_bin_count, GoodnessError, GoodnessReport};
    use prng_validation::randomness::{
        poker_probabilities, BatteryConfig, RandomnessReport, EXPECTED_RUN_LENGTH, MIN_EXPECTED,
        POKER_DIGITS,
    };

    assert_eq!(gof_bin_count(9), 3);
    assert_eq!(POKER_DIGITS, 10);
    assert_eq!(EXPECTED_RUN_LENGTH, 2.0);
    assert_eq!(MIN_EXPECTED, 5.0);
    assert_eq!(poker_probabilities(BatteryConfig::default().poker_hand_size()).len(), 5);

    fn assert_types<T, U, V>() {}
    assert_types::<GoodnessError, GoodnessReport, RandomnessReport>();
}
