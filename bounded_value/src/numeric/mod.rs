// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Compile-time predicates over Rust's arithmetic primitives.
//!
//! | Predicate                | Where                             | Checked            |
//! |--------------------------|-----------------------------------|--------------------|
//! | Bounds representability  | [`can_contain_bounds()`]          | const evaluation   |
//! | Assignment compatibility | [`AssignableFrom`] on the kinds   | trait resolution   |
//!
//! Both predicates are resolved before the program runs, so [`BoundedValue`] has no
//! runtime failure mode.
//!
//! [`BoundedValue`]: crate::BoundedValue

// Attach sources.
pub mod bounds_representable;
pub mod numeric_kind;
pub mod numeric_primitive;

// Re-export.
pub use bounds_representable::*;
pub use numeric_kind::*;
pub use numeric_primitive::*;

pub(crate) mod sealed {
    pub trait Sealed {}
}
