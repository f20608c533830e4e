//! Public re-exports reachable from the crate root.

#[test]
fn test_root_exports() {
    use prng_generators::{
        digit_count, generate, middle_digits, Algorithm, CancellationToken, GeneratorParams,
        Termination, DEFAULT_ITERATION_CAP, MAX_DIGIT_WIDTH,
    };

    assert_eq!(digit_count(12_345), 5);
    assert_eq!(middle_digits(32_890_225, 4).unwrap(), 8902);
    assert_eq!(MAX_DIGIT_WIDTH, 19);
    assert_eq!(
        Termination::default(),
        Termination::UntilCycle {
            cap: DEFAULT_ITERATION_CAP
        }
    );
    assert!(!CancellationToken::new().is_cancelled());

    let params = GeneratorParams::MidSquare { seed: 5735 };
    assert_eq!(params.algorithm(), Algorithm::MidSquare);
    assert!(generate(&params, Termination::Count(3)).is_ok());
}
