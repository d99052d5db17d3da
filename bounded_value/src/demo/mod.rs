// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything behind the `bounded_demo` binary, kept in the library so it can be tested.

// Attach sources.
pub mod clap_config;
pub mod run_command;
pub mod scenarios;

// Re-export.
pub use clap_config::*;
pub use run_command::*;
pub use scenarios::*;
