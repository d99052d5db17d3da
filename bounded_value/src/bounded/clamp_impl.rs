// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The clamping algorithm behind [`BoundedValue`] - see [`clamp_into()`].
//!
//! [`BoundedValue`]: crate::BoundedValue

use crate::{AssignableFrom, NumericPrimitive, can_contain_bounds, saturating_cast};
use num_traits::{NumCast, Zero};
use std::cmp::Ordering;

/// Where a value sits relative to a closed interval `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClampStatus {
    /// `lo <= value <= hi`, boundary values included. The value is kept as is.
    Within,
    /// `value < lo`. The value is replaced by `lo`.
    BelowMin,
    /// `value > hi`. The value is replaced by `hi`.
    AboveMax,
    /// The value is NaN and can't be ordered. It is replaced by `lo`.
    NotANumber,
}

impl ClampStatus {
    /// Classify `arg` against `[lo, hi]`. The caller guarantees `lo <= hi`.
    #[must_use]
    pub fn classify<T: PartialOrd>(arg: &T, lo: &T, hi: &T) -> Self {
        match (arg.partial_cmp(lo), arg.partial_cmp(hi)) {
            (None, _) | (_, None) => ClampStatus::NotANumber,
            (Some(Ordering::Less), _) => ClampStatus::BelowMin,
            (_, Some(Ordering::Greater)) => ClampStatus::AboveMax,
            _ => ClampStatus::Within,
        }
    }

    #[must_use]
    pub fn is_clamped(self) -> bool { self != ClampStatus::Within }
}

/// Clamp `arg` into `[lo, hi]`.
///
/// - `arg < lo` yields `lo`.
/// - `arg > hi` yields `hi`.
/// - Otherwise `arg` is returned unchanged. A value equal to a boundary stays exactly that
///   boundary.
/// - NaN yields `lo`, so the result is always inside the interval.
///
/// ```rust
/// use bounded_value::{ClampStatus, clamp_inclusive};
///
/// assert_eq!(clamp_inclusive(-5, 0, 1000), (0, ClampStatus::BelowMin));
/// assert_eq!(clamp_inclusive(1000, 0, 1000), (1000, ClampStatus::Within));
/// assert_eq!(clamp_inclusive(f64::NAN, -100.0, 0.0), (-100.0, ClampStatus::NotANumber));
/// ```
#[must_use]
pub fn clamp_inclusive<T: PartialOrd>(arg: T, lo: T, hi: T) -> (T, ClampStatus) {
    let status = ClampStatus::classify(&arg, &lo, &hi);
    let it = match status {
        ClampStatus::Within => arg,
        ClampStatus::BelowMin | ClampStatus::NotANumber => lo,
        ClampStatus::AboveMax => hi,
    };
    (it, status)
}

/// Convert `arg` of input type `U` into storage type `S`, clamped into `[MIN, MAX]`.
///
/// The comparison happens in whichever type is known to hold both bounds:
///
/// ```text
///                     ┌───────────────────────────────┐
///                     │ can U represent MIN and MAX?  │
///                     └───────┬───────────────┬───────┘
///                         yes │               │ no
///                             ▼               ▼
///          clamp(arg, MIN as U, MAX as U)   does arg fit in S?
///                             │               │ yes           │ no
///                             ▼               ▼               ▼
///                 saturating_cast::<S>(..)   clamp(arg as S,  MIN if arg < 0,
///                                            MIN as S,        MAX otherwise
///                                            MAX as S)
/// ```
///
/// Clamping never overflows: in the left branch the clamped value lies in `[MIN, MAX]`,
/// which `S` holds, so the final cast is lossless for integers. In the right branch an
/// `arg` that `S` can't hold lies beyond one end of `S`, and `S` holds the bounds, so
/// `arg` is beyond the nearest bound too. It is reported as [`ClampStatus::BelowMin`] or
/// [`ClampStatus::AboveMax`] even when that end of `S` is itself the bound.
///
/// Both branches agree whenever both are numerically valid.
#[must_use]
pub fn clamp_into<S, U, const MIN: i128, const MAX: i128>(arg: U) -> (S, ClampStatus)
where
    S: NumericPrimitive,
    U: NumericPrimitive,
    S::Kind: AssignableFrom<U::Kind>,
{
    if const { can_contain_bounds::<U>(MIN, MAX) } {
        let (clamped, status) =
            clamp_inclusive(arg, U::from_bound(MIN), U::from_bound(MAX));
        (saturating_cast(clamped), status)
    } else {
        let (lo, hi) = (S::from_bound(MIN), S::from_bound(MAX));
        match <S as NumCast>::from(arg) {
            Some(it) => clamp_inclusive(it, lo, hi),
            None if arg < <U as Zero>::zero() => (lo, ClampStatus::BelowMin),
            None => (hi, ClampStatus::AboveMax),
        }
    }
}
