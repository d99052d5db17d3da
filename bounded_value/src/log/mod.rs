// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Structured logging for this crate, built on [`tracing`] and [`tracing_subscriber`].
//!
//! Logging is **disabled** unless a subscriber is installed. The library only emits
//! events, and the binary (or a test) decides where they go:
//! - [`try_initialize_logging_global()`] for apps.
//! - [`try_initialize_logging_thread_local()`] for tests.

// Attach sources.
pub mod log_public_api;
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use log_public_api::*;
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
