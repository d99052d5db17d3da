// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Numeric kinds and the assignment-compatibility rule between them - see
//! [`AssignableFrom`].

use super::sealed::Sealed;

/// Marker for every integer primitive, signed or unsigned, of any width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Integral;

/// Marker for every floating point primitive ([`f32`], [`f64`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatingPoint;

/// A numeric kind. Only [`Integral`] and [`FloatingPoint`] implement this trait, and it
/// is sealed so that downstream crates can't add a third kind.
pub trait NumericKind: Sealed + Copy + 'static {
    /// Human readable name, used in log events.
    const NAME: &'static str;
}

impl Sealed for Integral {}
impl Sealed for FloatingPoint {}

impl NumericKind for Integral {
    const NAME: &'static str = "integral";
}

impl NumericKind for FloatingPoint {
    const NAME: &'static str = "floating point";
}

/// Storage kind `Self` accepts input of kind `SourceKind`.
///
/// The complete set of implementations is:
///
/// | Storage kind      | Input kind        | Allowed |
/// |-------------------|-------------------|---------|
/// | [`Integral`]      | [`Integral`]      | yes     |
/// | [`FloatingPoint`] | [`FloatingPoint`] | yes     |
/// | [`FloatingPoint`] | [`Integral`]      | yes     |
/// | [`Integral`]      | [`FloatingPoint`] | **no**  |
///
/// The missing row is the point of this trait. A fractional value is never silently
/// truncated into integral storage; the caller has to convert it explicitly first, or the
/// program does not compile.
///
/// ```rust,compile_fail
/// use bounded_value::{AssignableFrom, FloatingPoint, Integral, NumericKind};
///
/// fn requires<S: AssignableFrom<U>, U: NumericKind>() {}
/// requires::<Integral, FloatingPoint>(); // Won't compile!
/// ```
pub trait AssignableFrom<SourceKind: NumericKind>: NumericKind {}

impl AssignableFrom<Integral> for Integral {}
impl AssignableFrom<FloatingPoint> for FloatingPoint {}
impl AssignableFrom<Integral> for FloatingPoint {}
