// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # bounded_value
//!
//! A numeric value that can never leave a closed interval `[MIN, MAX]` chosen at compile
//! time. Out of range input is clamped to the nearest bound, never rejected.
//!
//! ```rust
//! use bounded_value::BoundedValue;
//!
//! type Percent = BoundedValue<u8, 0, 100>;
//!
//! let mut it = Percent::new(250_i32);
//! assert_eq!(it.value(), 100);
//!
//! it.set(-3_i64);
//! assert_eq!(it.value(), 0);
//! ```
//!
//! Mistakes are caught by the compiler rather than at runtime:
//! - Bounds that the storage type can't represent, eg: `BoundedValue<u8, -1, 10>`.
//! - Fractional input into integral storage, eg: `BoundedValue::<i32, 0, 10>::new(2.5)`.
//!
//! There are two ready made instantiations for audio gain, [`Decibels`] and
//! [`DecibelSteps`], and the [`decibels!`] and [`db_steps!`] macros to create them from
//! literals.
//!
//! # Logging
//!
//! Every clamp is recorded as a [`tracing::trace!`] event, and NaN input as a
//! [`tracing::warn!`] event. Nothing is printed unless a subscriber is installed, see
//! [`mod@log`].
//!
//! # Modules
//!
//! | Module          | What's in it                                                   |
//! |-----------------|----------------------------------------------------------------|
//! | [`mod@numeric`] | Numeric kinds, primitives, and bounds representability         |
//! | [`mod@bounded`] | [`BoundedValue`], the clamping algorithm, and decibel aliases  |
//! | [`mod@common`]  | Errors, and parsing user supplied text into numbers            |
//! | [`mod@demo`]    | The `bounded_demo` command line interface                      |
//! | [`mod@log`]     | [`tracing`] subscriber setup                                   |

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod bounded;
pub mod common;
pub mod demo;
pub mod log;
pub mod numeric;

// Re-export.
pub use bounded::*;
pub use common::*;
pub use demo::*;
pub use log::*;
pub use numeric::*;
