// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::NumericPrimitive;

/// Returns `true` iff the primitive `T` can represent both `min` and `max`, and
/// `min <= max`.
///
/// This is a `const fn`, so it is evaluated at compile time when it is used to define a
/// constant. [`BoundedValue`] does exactly that, for its storage type, the first time an
/// instantiation is constructed or mutated. It is also consulted for the input type
/// during clamping, to decide which type the comparison happens in.
///
/// ```rust
/// use bounded_value::can_contain_bounds;
///
/// const I32_HOLDS_DECIBEL_STEPS: bool = can_contain_bounds::<i32>(0, 1000);
/// assert!(I32_HOLDS_DECIBEL_STEPS);
///
/// // -128 is not representable by u8.
/// assert!(!can_contain_bounds::<u8>(-128, 127));
///
/// // Inverted bounds are never valid.
/// assert!(!can_contain_bounds::<f64>(0, -100));
/// ```
///
/// [`BoundedValue`]: crate::BoundedValue
#[must_use]
pub const fn can_contain_bounds<T: NumericPrimitive>(min: i128, max: i128) -> bool {
    T::LOWEST_BOUND <= min && max <= T::HIGHEST_BOUND && min <= max
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 1000, true ; "decibel steps")]
    #[test_case(-100, 0, true ; "decibels")]
    #[test_case(i128::from(i32::MIN), i128::from(i32::MAX), true ; "full range")]
    #[test_case(-1, 0, true ; "just above lower end")]
    #[test_case(0, i128::from(i32::MAX) + 1, false ; "max one past upper end")]
    #[test_case(i128::from(i32::MIN) - 1, 0, false ; "min one past lower end")]
    #[test_case(5, 5, true ; "degenerate interval")]
    #[test_case(6, 5, false ; "inverted")]
    fn test_can_contain_bounds_i32(min: i128, max: i128, expected: bool) {
        assert_eq!(can_contain_bounds::<i32>(min, max), expected);
    }

    #[test]
    fn test_unsigned_storage_rejects_negative_bounds() {
        assert!(!can_contain_bounds::<u8>(-128, 127));
        assert!(!can_contain_bounds::<u64>(-1, 10));
        assert!(!can_contain_bounds::<usize>(-100, 0));
        assert!(can_contain_bounds::<u8>(0, 255));
        assert!(!can_contain_bounds::<u8>(0, 256));
    }

    #[test]
    fn test_floats_contain_any_ordered_bounds() {
        assert!(can_contain_bounds::<f32>(i128::MIN, i128::MAX));
        assert!(can_contain_bounds::<f64>(-100, 0));
        assert!(!can_contain_bounds::<f64>(0, -100));
    }

    #[test]
    fn test_wide_storage() {
        assert!(can_contain_bounds::<i128>(i128::MIN, i128::MAX));
        assert!(can_contain_bounds::<u128>(0, i128::MAX));
        assert!(!can_contain_bounds::<u128>(-1, 0));
    }

    #[test]
    fn test_usable_in_const_context() {
        const IS_VALID: bool = can_contain_bounds::<i16>(-100, 100);
        const IS_NOT_VALID: bool = can_contain_bounds::<i8>(-100, 1000);
        assert!(IS_VALID);
        assert!(!IS_NOT_VALID);
    }
}
