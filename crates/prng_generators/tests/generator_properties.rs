//! Property tests across the generator families.

use prng_generators::{
    generate, Algorithm, Generator, GeneratorError, GeneratorParams, QcgNormalisation,
    StopReason, Termination,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn modular_params() -> impl Strategy<Value = GeneratorParams> {
    prop_oneof![
        (1u64..10_000, 1u64..10_000, 1u64..10_000, 2u64..5_000).prop_map(
            |(seed, multiplier, increment, modulus)| GeneratorParams::Linear {
                seed,
                multiplier,
                increment,
                modulus,
            }
        ),
        (1u64..10_000, 1u64..10_000, 2u64..5_000).prop_map(|(seed, multiplier, modulus)| {
            GeneratorParams::Multiplicative {
                seed,
                multiplier,
                modulus,
            }
        }),
        (prop::collection::vec(1u64..1_000, 1..5), 2u64..200)
            .prop_map(|(seeds, modulus)| GeneratorParams::Additive { seeds, modulus }),
        (1u64..1_000, 1u64..50, 1u64..50, 1u64..50, 2u64..5_000).prop_map(
            |(seed, a, b, c, modulus)| GeneratorParams::Quadratic {
                seed,
                a,
                b,
                c,
                modulus,
                normalisation: QcgNormalisation::Unit,
            }
        ),
    ]
}

fn digit_params() -> impl Strategy<Value = GeneratorParams> {
    prop_oneof![
        (1u64..10_000).prop_map(|seed| GeneratorParams::MidSquare { seed }),
        (1_000u64..10_000, 1u64..10_000)
            .prop_map(|(seed1, seed2)| GeneratorParams::MidProduct { seed1, seed2 }),
        (1_000u64..10_000, 1u64..10_000)
            .prop_map(|(seed, constant)| GeneratorParams::ConstantMultiplier { seed, constant }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_identical_params_give_identical_sequences(params in modular_params()) {
        let first = generate(&params, Termination::Count(200)).unwrap();
        let second = generate(&params, Termination::Count(200)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_modular_values_in_closed_unit(params in modular_params()) {
        let sequence = generate(&params, Termination::Count(500)).unwrap();
        for value in sequence.values() {
            prop_assert!((0.0..=1.0).contains(value), "value {} out of [0, 1]", value);
        }
    }

    #[test]
    fn prop_digit_values_in_half_open_unit(params in digit_params()) {
        let sequence = generate(&params, Termination::default()).unwrap();
        for value in sequence.values() {
            prop_assert!((0.0..1.0).contains(value), "value {} out of [0, 1)", value);
        }
    }

    #[test]
    fn prop_cycle_runs_have_no_repeats(params in modular_params()) {
        let sequence = generate(&params, Termination::default()).unwrap();
        let distinct: HashSet<u64> = sequence.raw().iter().copied().collect();
        prop_assert_eq!(distinct.len(), sequence.len());
        match sequence.stop_reason() {
            StopReason::CycleDetected { repeated } => prop_assert!(distinct.contains(&repeated)),
            StopReason::CountReached => prop_assert!(false, "cycle run stopped on count"),
        }
    }

    #[test]
    fn prop_bounds_match_values(params in modular_params()) {
        let bounds = Generator::initialise(&params).unwrap().bounds();
        let sequence = generate(&params, Termination::Count(100)).unwrap();
        prop_assert!(sequence.values().iter().all(|v| bounds.contains(*v)));
    }
}

#[test]
fn test_qcg_raw_mode_returns_residues() {
    let params = GeneratorParams::Quadratic {
        seed: 5,
        a: 3,
        b: 7,
        c: 1,
        modulus: 97,
        normalisation: QcgNormalisation::Raw,
    };
    let sequence = generate(&params, Termination::Count(50)).unwrap();
    for (raw, value) in sequence.raw().iter().zip(sequence.values()) {
        assert_eq!(*raw as f64, *value);
        assert!(*raw < 97);
    }
}

#[test]
fn test_blum_blum_shub_values_in_unit_interval() {
    let params = GeneratorParams::BlumBlumShub {
        seed: 101,
        p: 499,
        q: 547,
    };
    let sequence = generate(&params, Termination::default()).unwrap();
    assert!(!sequence.is_empty());
    assert_eq!(sequence.algorithm(), Algorithm::BlumBlumShub);
    assert!(sequence.values().iter().all(|v| (0.0..=1.0).contains(v)));
}

#[test]
fn test_bbs_product_overflow() {
    let p = 4_294_967_291; // largest prime below 2^32
    let q = 2_305_843_009_213_693_951; // 2^61 - 1
    let err = Generator::initialise(&GeneratorParams::BlumBlumShub { seed: 2, p, q })
        .unwrap_err();
    assert!(matches!(err, GeneratorError::Overflow(_)));
}
