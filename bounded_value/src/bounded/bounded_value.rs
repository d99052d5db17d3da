// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AssignableFrom, ClampStatus, NumericKind, NumericPrimitive,
            can_contain_bounds, clamp_into};
use std::fmt::{Debug, Formatter, Result};

/// A number of storage type `S` that is guaranteed to lie in the closed interval
/// `[MIN, MAX]`.
///
/// The bounds are part of the type, they are not stored per instance. Every instance of
/// `BoundedValue<f64, -100, 0>` shares the same bounds, and is exactly as big as an
/// [`f64`].
///
/// # Construction never fails
///
/// Any input is accepted and clamped, via [`new()`] or [`set()`]:
///
/// - below `MIN` becomes `MIN`,
/// - above `MAX` becomes `MAX`,
/// - anything else (boundary values included) is kept as is,
/// - NaN becomes `MIN`.
///
/// There is no "rejected" input, only "transformed" input. All contract violations are
/// caught by the compiler instead.
///
/// ```rust
/// use bounded_value::BoundedValue;
///
/// type Gain = BoundedValue<f64, -100, 0>;
///
/// assert_eq!(Gain::new(-10.5).value(), -10.5);
/// assert_eq!(Gain::new(-10).value(), -10.0); // Integral input widens into f64.
/// assert_eq!(Gain::new(f64::MAX).value(), 0.0);
/// assert_eq!(Gain::new(f64::MIN).value(), -100.0);
///
/// let mut gain = Gain::new(0.0);
/// gain.set(-250_i64);
/// assert_eq!(gain.value(), -100.0);
/// ```
///
/// # Compile time errors
///
/// **❌ Fractional input into integral storage**
///
/// ```rust,compile_fail
/// use bounded_value::BoundedValue;
/// let steps = BoundedValue::<i32, 0, 1000>::new(10.0); // Won't compile!
/// ```
///
/// ```rust,compile_fail
/// use bounded_value::BoundedValue;
/// let mut steps = BoundedValue::<u16, 0, 1000>::new(10);
/// steps.set(2.5_f32); // Won't compile!
/// ```
///
/// Convert explicitly, and the rounding policy becomes visible at the call site:
///
/// ```rust
/// use bounded_value::BoundedValue;
/// let steps = BoundedValue::<i32, 0, 1000>::new(10.7_f64.round() as i64);
/// assert_eq!(steps.value(), 11);
/// ```
///
/// **❌ Storage type can't represent the bounds**
///
/// ```rust,compile_fail
/// use bounded_value::BoundedValue;
/// // -128 is not a valid u8.
/// let it = BoundedValue::<u8, -128, 127>::new(128_u8); // Won't compile!
/// ```
///
/// **❌ Inverted bounds**
///
/// ```rust,compile_fail
/// use bounded_value::BoundedValue;
/// let it = BoundedValue::<i32, 10, 0>::new(5); // Won't compile!
/// ```
///
/// # Trait implementations
///
/// [`Clone`], [`Copy`], [`PartialEq`] and [`PartialOrd`] are always available. [`Eq`],
/// [`Ord`] and [`Hash`] are available when `S` has them, which is the case for integral
/// storage. [`Debug`] prints the value along with its bounds. There is deliberately no
/// [`Default`], since `S::default()` might lie outside `[MIN, MAX]`.
///
/// [`new()`]: Self::new
/// [`set()`]: Self::set
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoundedValue<S, const MIN: i128, const MAX: i128> {
    value: S,
}

impl<S, const MIN: i128, const MAX: i128> BoundedValue<S, MIN, MAX>
where
    S: NumericPrimitive,
{
    /// Evaluated once per instantiation. Referencing it from a function turns a storage
    /// type that can't hold the bounds (or `MIN > MAX`) into a build error.
    const BOUNDS_ARE_REPRESENTABLE: () = assert!(
        can_contain_bounds::<S>(MIN, MAX),
        "BoundedValue: the storage type can't represent MIN and MAX, or MIN > MAX"
    );

    /// The lower bound, as declared.
    pub const LOWER_BOUND: i128 = MIN;

    /// The upper bound, as declared.
    pub const UPPER_BOUND: i128 = MAX;

    /// Create a new instance from `arg`, clamped into `[MIN, MAX]`.
    ///
    /// `arg` can be any primitive whose kind is assignable to the storage kind, see
    /// [`AssignableFrom`].
    #[must_use]
    pub fn new<U>(arg: U) -> Self
    where
        U: NumericPrimitive,
        S::Kind: AssignableFrom<U::Kind>,
    {
        let () = Self::BOUNDS_ARE_REPRESENTABLE;
        Self {
            value: Self::clamp_and_trace(arg),
        }
    }

    /// Replace the value with `arg`, clamped into `[MIN, MAX]`. Same contract as
    /// [`new()`](Self::new).
    pub fn set<U>(&mut self, arg: U)
    where
        U: NumericPrimitive,
        S::Kind: AssignableFrom<U::Kind>,
    {
        let () = Self::BOUNDS_ARE_REPRESENTABLE;
        self.value = Self::clamp_and_trace(arg);
    }

    /// Consume `self`, [`set()`](Self::set) `arg` and return the result.
    #[must_use]
    pub fn with<U>(mut self, arg: U) -> Self
    where
        U: NumericPrimitive,
        S::Kind: AssignableFrom<U::Kind>,
    {
        self.set(arg);
        self
    }

    /// The current value, always in `[MIN, MAX]`.
    #[must_use]
    pub const fn value(&self) -> S { self.value }

    /// `MIN` converted into the storage type.
    #[must_use]
    pub fn lower_bound() -> S {
        let () = Self::BOUNDS_ARE_REPRESENTABLE;
        S::from_bound(MIN)
    }

    /// `MAX` converted into the storage type.
    #[must_use]
    pub fn upper_bound() -> S {
        let () = Self::BOUNDS_ARE_REPRESENTABLE;
        S::from_bound(MAX)
    }

    #[must_use]
    pub fn is_at_lower_bound(&self) -> bool { self.value == Self::lower_bound() }

    #[must_use]
    pub fn is_at_upper_bound(&self) -> bool { self.value == Self::upper_bound() }

    /// Report what [`new()`](Self::new) or [`set()`](Self::set) would do with `arg`,
    /// without creating an instance. This is a query, not a validation step: every `arg`
    /// is still accepted by the constructor.
    #[must_use]
    pub fn clamp_status_of<U>(arg: U) -> ClampStatus
    where
        U: NumericPrimitive,
        S::Kind: AssignableFrom<U::Kind>,
    {
        let () = Self::BOUNDS_ARE_REPRESENTABLE;
        let (_, status) = clamp_into::<S, U, MIN, MAX>(arg);
        status
    }

    fn clamp_and_trace<U>(arg: U) -> S
    where
        U: NumericPrimitive,
        S::Kind: AssignableFrom<U::Kind>,
    {
        let (it, status) = clamp_into::<S, U, MIN, MAX>(arg);

        // % is Display, ? is Debug.
        match status {
            ClampStatus::Within => {}
            ClampStatus::NotANumber => {
                tracing::warn!(
                    message = "NaN input replaced by the lower bound",
                    storage = %S::TYPE_NAME,
                    input = %U::TYPE_NAME,
                    min = MIN,
                    max = MAX,
                );
            }
            ClampStatus::BelowMin | ClampStatus::AboveMax => {
                let input_kind = <U::Kind as NumericKind>::NAME;
                tracing::trace!(
                    message = "Out of range input clamped",
                    storage = %S::TYPE_NAME,
                    input = %U::TYPE_NAME,
                    input_kind = %input_kind,
                    arg = ?arg,
                    clamped = ?it,
                    status = ?status,
                    min = MIN,
                    max = MAX,
                );
            }
        }

        it
    }
}

impl<S: Debug, const MIN: i128, const MAX: i128> Debug for BoundedValue<S, MIN, MAX> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:?} in [{MIN}, {MAX}]", self.value)
    }
}
