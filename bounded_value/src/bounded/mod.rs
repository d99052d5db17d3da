// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The bounded value construct - see [`BoundedValue`].
//!
//! ```text
//! ┌──────────────┐  new(arg) / set(arg)  ┌──────────────────────────┐
//! │ arg: U       ├──────────────────────►│ BoundedValue<S, MIN, MAX>│
//! │ (any prim.)  │   clamp_into()        │ MIN <= value() <= MAX    │
//! └──────────────┘                       └──────────────────────────┘
//!        ▲                                             ▲
//!        │ S::Kind: AssignableFrom<U::Kind>            │ can_contain_bounds::<S>()
//!        │ (trait resolution)                          │ (const evaluation)
//! ```

// Attach sources.
pub mod bounded_value;
pub mod clamp_impl;
pub mod decibel_aliases;

// Re-export.
pub use bounded_value::*;
pub use clamp_impl::*;
pub use decibel_aliases::*;
