// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Primitive storage / input types - see [`NumericPrimitive`].

use super::{AssignableFrom, FloatingPoint, Integral, NumericKind, sealed::Sealed};
use num_traits::{Bounded, NumCast, Zero};
use std::fmt::Debug;

/// Every Rust arithmetic primitive that can be used as the storage type of a
/// [`BoundedValue`] or as the input to one.
///
/// ## Bound projection
///
/// Bounds are `i128` const generic parameters, so each primitive also describes its own
/// representable range projected onto `i128`:
///
/// - [`LOWEST_BOUND`]: the most negative value (the lowest finite value for floats),
///   saturated to [`i128::MIN`].
/// - [`HIGHEST_BOUND`]: the largest value, saturated to [`i128::MAX`].
///
/// The saturation is exact for the purpose of the representability check, since a bound
/// can never lie outside of `i128` in the first place. That makes every float type, and
/// the upper end of [`u128`], able to hold any bound.
///
/// This trait is sealed, the set of implementations is fixed.
///
/// [`BoundedValue`]: crate::BoundedValue
/// [`LOWEST_BOUND`]: Self::LOWEST_BOUND
/// [`HIGHEST_BOUND`]: Self::HIGHEST_BOUND
pub trait NumericPrimitive:
    Sealed + Copy + PartialOrd + Debug + NumCast + Bounded + Zero + Send + Sync + 'static
{
    /// [`Integral`] or [`FloatingPoint`].
    type Kind: NumericKind;

    /// Name of the primitive, used in log events.
    const TYPE_NAME: &'static str;

    const LOWEST_BOUND: i128;

    const HIGHEST_BOUND: i128;

    /// Convert a bound into `Self`. Only call this with a bound that `Self` can represent,
    /// which is what [`can_contain_bounds`] guarantees.
    ///
    /// [`can_contain_bounds`]: crate::can_contain_bounds
    fn from_bound(bound: i128) -> Self;

    /// Only floats can be NaN.
    fn is_nan(self) -> bool { false }
}

macro_rules! impl_integral_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sealed for $t {}

            impl NumericPrimitive for $t {
                type Kind = Integral;

                const TYPE_NAME: &'static str = stringify!($t);

                #[allow(trivial_numeric_casts, clippy::cast_lossless, clippy::cast_possible_wrap)]
                const LOWEST_BOUND: i128 = <$t>::MIN as i128;

                #[allow(
                    trivial_numeric_casts,
                    clippy::cast_lossless,
                    clippy::cast_possible_wrap,
                    clippy::cast_sign_loss
                )]
                const HIGHEST_BOUND: i128 = if (<$t>::MAX as u128) > (i128::MAX as u128) {
                    i128::MAX
                } else {
                    <$t>::MAX as i128
                };

                #[allow(
                    trivial_numeric_casts,
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_possible_wrap
                )]
                fn from_bound(bound: i128) -> Self { bound as $t }
            }
        )*
    };
}

macro_rules! impl_floating_point_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sealed for $t {}

            impl NumericPrimitive for $t {
                type Kind = FloatingPoint;

                const TYPE_NAME: &'static str = stringify!($t);

                const LOWEST_BOUND: i128 = i128::MIN;

                const HIGHEST_BOUND: i128 = i128::MAX;

                #[allow(clippy::cast_precision_loss)]
                fn from_bound(bound: i128) -> Self { bound as $t }

                fn is_nan(self) -> bool { <$t>::is_nan(self) }
            }
        )*
    };
}

impl_integral_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_floating_point_primitive!(f32, f64);

/// Convert `arg` from `U` to `S`. When `arg` lies outside of the range of `S` the result
/// saturates to the lowest or highest value of `S`, instead of wrapping around like an
/// `as` cast would.
///
/// The same kind rule as [`BoundedValue`] applies, see [`AssignableFrom`]. Only floats
/// can be NaN, and since a float can only be cast into a float, NaN is passed through
/// unchanged. It is up to the caller to deal with it.
///
/// ```rust
/// use bounded_value::saturating_cast;
///
/// assert_eq!(saturating_cast::<u8, i64>(300), u8::MAX);
/// assert_eq!(saturating_cast::<u8, i64>(-5), 0);
/// assert_eq!(saturating_cast::<i16, u8>(42), 42);
/// assert_eq!(saturating_cast::<f64, i32>(-10), -10.0);
/// assert!(saturating_cast::<f32, f64>(f64::NAN).is_nan());
/// ```
///
/// ```rust,compile_fail
/// use bounded_value::saturating_cast;
/// let it = saturating_cast::<i32, f64>(f64::NAN); // Won't compile!
/// ```
///
/// [`BoundedValue`]: crate::BoundedValue
pub fn saturating_cast<S, U>(arg: U) -> S
where
    S: NumericPrimitive,
    U: NumericPrimitive,
    S::Kind: AssignableFrom<U::Kind>,
{
    match <S as NumCast>::from(arg) {
        Some(it) => it,
        None if arg < U::zero() => <S as Bounded>::min_value(),
        None => <S as Bounded>::max_value(),
    }
}
