// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Behavior of [`BoundedValue`] seen from outside the crate, through the public API only.

use bounded_value::{BoundedValue, ClampStatus, DecibelSteps, Decibels, db_steps, decibels};

type Signed = BoundedValue<i8, -10, 10>;
type Wide = BoundedValue<u128, 5, 18_446_744_073_709_551_616>;
type Ratio = BoundedValue<f32, -1, 1>;
type Index = BoundedValue<usize, 0, 7>;
type FullByte = BoundedValue<u8, 0, 255>;
type FullSignedByte = BoundedValue<i8, -128, 127>;

mod integral_storage {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(10_i32, 10 ; "in range")]
    #[test_case(1000_i32, 1000 ; "at max")]
    #[test_case(0_i32, 0 ; "at min")]
    #[test_case(-1_i32, 0 ; "just below min")]
    #[test_case(1001_i32, 1000 ; "just above max")]
    fn test_decibel_steps_from_i32(arg: i32, expected: i32) {
        assert_eq!(DecibelSteps::new(arg).value(), expected);
    }

    #[test]
    fn test_decibel_steps_from_extremes_of_wider_types() {
        assert_eq!(DecibelSteps::new(u64::MAX).value(), 1000);
        assert_eq!(DecibelSteps::new(i64::MIN).value(), 0);
        assert_eq!(DecibelSteps::new(u128::MAX).value(), 1000);
        assert_eq!(DecibelSteps::new(i128::MIN).value(), 0);
        assert_eq!(DecibelSteps::new(usize::MAX).value(), 1000);
        assert_eq!(DecibelSteps::new(isize::MIN).value(), 0);
    }

    #[test]
    fn test_decibel_steps_from_narrower_types() {
        assert_eq!(DecibelSteps::new(u8::MAX).value(), 255);
        assert_eq!(DecibelSteps::new(i8::MIN).value(), 0);
        assert_eq!(DecibelSteps::new(u16::MAX).value(), 1000);
        assert_eq!(DecibelSteps::new(i16::MIN).value(), 0);
    }

    #[test]
    fn test_signed_storage_with_negative_bounds() {
        assert_eq!(Signed::new(-128_i8).value(), -10);
        assert_eq!(Signed::new(127_i8).value(), 10);
        assert_eq!(Signed::new(-3_i64).value(), -3);
        assert_eq!(Signed::new(u64::MAX).value(), 10);
        assert_eq!(Signed::new(0_u8).value(), 0);
    }

    #[test]
    fn test_bounds_beyond_i64() {
        assert_eq!(Wide::new(0_u8).value(), 5);
        assert_eq!(Wide::new(u64::MAX).value(), u128::from(u64::MAX));
        assert_eq!(Wide::new(u128::MAX).value(), 18_446_744_073_709_551_616);
        assert_eq!(Wide::new(i128::MIN).value(), 5);
    }

    #[test_case(-5_i8, 0, ClampStatus::BelowMin ; "negative input")]
    #[test_case(i8::MIN, 0, ClampStatus::BelowMin ; "most negative input")]
    #[test_case(0_i8, 0, ClampStatus::Within ; "zero")]
    #[test_case(i8::MAX, 127, ClampStatus::Within ; "largest input")]
    fn test_storage_end_is_lower_bound(arg: i8, expected: u8, status: ClampStatus) {
        assert_eq!(FullByte::new(arg).value(), expected);
        assert_eq!(FullByte::clamp_status_of(arg), status);
    }

    #[test_case(u64::MAX, 127, ClampStatus::AboveMax ; "largest input")]
    #[test_case(128_u64, 127, ClampStatus::AboveMax ; "one past upper bound")]
    #[test_case(127_u64, 127, ClampStatus::Within ; "at upper bound")]
    #[test_case(0_u64, 0, ClampStatus::Within ; "zero")]
    fn test_storage_end_is_upper_bound(arg: u64, expected: i8, status: ClampStatus) {
        assert_eq!(FullSignedByte::new(arg).value(), expected);
        assert_eq!(FullSignedByte::clamp_status_of(arg), status);
    }

    #[test]
    fn test_pointer_sized_storage() {
        assert_eq!(Index::new(-1).value(), 0);
        assert_eq!(Index::new(3_u8).value(), 3);
        assert_eq!(Index::new(i128::MAX).value(), 7);
    }
}

mod floating_point_storage {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decibels_examples() {
        assert_eq!(Decibels::new(-10.5).value(), -10.5);
        assert_eq!(Decibels::new(-10).value(), -10.0);
        assert_eq!(Decibels::new(f64::MAX).value(), 0.0);
        assert_eq!(Decibels::new(f64::MIN).value(), -100.0);
        assert_eq!(Decibels::new(0.0).value(), 0.0);
        assert_eq!(Decibels::new(-100.0).value(), -100.0);
    }

    #[test]
    fn test_decibels_from_non_finite() {
        assert_eq!(Decibels::new(f64::INFINITY).value(), 0.0);
        assert_eq!(Decibels::new(f64::NEG_INFINITY).value(), -100.0);
        assert_eq!(Decibels::new(f32::NAN).value(), -100.0);
    }

    #[test]
    fn test_integral_input_widens_without_fractional_artifacts() {
        for arg in -100_i32..=0 {
            let it = Decibels::new(arg).value();
            assert_eq!(it, f64::from(arg));
            assert_eq!(it.fract(), 0.0);
        }
        assert_eq!(Decibels::new(i128::MIN).value(), -100.0);
        assert_eq!(Decibels::new(u64::MAX).value(), 0.0);
        assert_eq!(Decibels::new(200_u8).value(), 0.0);
    }

    #[test]
    fn test_narrow_float_storage() {
        assert_eq!(Ratio::new(f64::MAX).value(), 1.0);
        assert_eq!(Ratio::new(-0.25_f64).value(), -0.25);
        assert_eq!(Ratio::new(i64::MIN).value(), -1.0);
        assert_eq!(Ratio::new(f32::MIN_POSITIVE).value(), f32::MIN_POSITIVE);
    }
}

mod invariants {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_value_always_within_bounds() {
        let inputs = [
            i64::MIN,
            i64::from(i32::MIN),
            -1001,
            -1,
            0,
            1,
            999,
            1000,
            1001,
            i64::from(i32::MAX),
            i64::MAX,
        ];
        for arg in inputs {
            let steps = DecibelSteps::new(arg).value();
            assert!((0..=1000).contains(&steps), "{arg} -> {steps}");

            let signed = Signed::new(arg).value();
            assert!((-10..=10).contains(&signed), "{arg} -> {signed}");

            #[allow(clippy::cast_precision_loss)]
            let decibels = Decibels::new(arg as f64).value();
            assert!((-100.0..=0.0).contains(&decibels), "{arg} -> {decibels}");
        }
    }

    #[test]
    fn test_boundary_idempotence() {
        assert_eq!(DecibelSteps::new(DecibelSteps::lower_bound()).value(), 0);
        assert_eq!(DecibelSteps::new(DecibelSteps::upper_bound()).value(), 1000);
        assert_eq!(Decibels::new(Decibels::lower_bound()).value(), -100.0);
        assert_eq!(Decibels::new(Decibels::upper_bound()).value(), 0.0);
        assert_eq!(
            DecibelSteps::clamp_status_of(DecibelSteps::upper_bound()),
            ClampStatus::Within
        );
    }

    #[test]
    fn test_reconstructing_from_value_is_identity() {
        for arg in [-7_i64, 0, 3, 9_999] {
            let first = Signed::new(arg);
            let second = Signed::new(first.value());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_set_keeps_invariant() {
        let mut it = Decibels::new(-50);
        it.set(10_u32);
        assert!(it.is_at_upper_bound());
        it.set(-1e300);
        assert!(it.is_at_lower_bound());
        it.set(-42);
        assert_eq!(it.value(), -42.0);
    }
}

mod literal_sugar {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_macros_match_constructors() {
        assert_eq!(db_steps!(10), DecibelSteps::new(10));
        assert_eq!(db_steps!(5000), DecibelSteps::new(1000));
        assert_eq!(decibels!(-10.5), Decibels::new(-10.5));
        assert_eq!(decibels!(-10), Decibels::new(-10.0));
    }
}
