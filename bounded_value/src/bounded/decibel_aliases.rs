// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Example instantiations of [`BoundedValue`] for audio gain, along with literal sugar
//! macros to create them.

use crate::BoundedValue;

/// Audio gain in decibels, from -100 dB (silence) to 0 dB (unity gain).
pub type Decibels = BoundedValue<f64, -100, 0>;

/// Integral representation of a gain setting, in steps from 0 to 1000.
pub type DecibelSteps = BoundedValue<i32, 0, 1000>;

/// Create a [`DecibelSteps`] from an unsuffixed, non negative integer literal.
///
/// The literal is typed as [`u64`] before it reaches the constructor, so anything other
/// than a non negative integer literal is a compile error.
///
/// ```rust
/// use bounded_value::db_steps;
///
/// assert_eq!(db_steps!(10).value(), 10);
/// assert_eq!(db_steps!(1_000_000).value(), 1000);
/// ```
///
/// ```rust,compile_fail
/// use bounded_value::db_steps;
/// let it = db_steps!(10.3); // Won't compile!
/// ```
///
/// ```rust,compile_fail
/// use bounded_value::db_steps;
/// let it = db_steps!(-10); // Won't compile!
/// ```
#[macro_export]
macro_rules! db_steps {
    (
        $arg_lit: literal
    ) => {{
        let it: u64 = $arg_lit;
        $crate::DecibelSteps::new(it)
    }};
}

/// Create a [`Decibels`] from any numeric literal, integral or fractional.
///
/// ```rust
/// use bounded_value::decibels;
///
/// assert_eq!(decibels!(-10.5).value(), -10.5);
/// assert_eq!(decibels!(-10).value(), -10.0);
/// assert_eq!(decibels!(12).value(), 0.0);
/// ```
#[macro_export]
macro_rules! decibels {
    (
        $arg_lit: literal
    ) => {
        $crate::Decibels::new($arg_lit)
    };
}
