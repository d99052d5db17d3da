// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::TracingConfig;
use crate::CommonResult;
use tracing::subscriber::DefaultGuard;

/// Log file name used by `bounded_demo --log-file` when no path is given.
pub const DEFAULT_LOG_FILE_NAME: &str = "bounded_value.log";

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Logging is **DISABLED** by **default**. With [`tracing_core::LevelFilter::OFF`]
///   nothing is installed, and the [`tracing::trace!`] events that record clamping cost
///   next to nothing.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> CommonResult<()> {
    let it: TracingConfig = options.into();
    it.install_global()
}

/// Thread local subscriber, which you can assign differently to different threads.
/// - This is great for tests.
/// - Returns [`None`] if the level filter is off, or there is nowhere to write to.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> CommonResult<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();
    it.install_thread_local()
}
