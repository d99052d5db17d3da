// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::tracing_init::try_create_layers;
use crate::{BoundedValueErrorCouldNot, CommonResult, ok};
use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// This configuration also allows you to set the log level.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level_filter`: [`LevelFilter`] - The log level to use for tracing.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// The `String` is the file path to use for the log file. Eg: `/tmp/bounded_demo.log` or
/// `bounded_demo.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    /// Log to stderr, so that the program's own output on stdout stays clean.
    #[must_use]
    pub fn new_display(level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
            level_filter,
        }
    }

    #[must_use]
    pub fn new_file(level_filter: LevelFilter, file_path: impl Into<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(file_path.into()),
            level_filter,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Install a global default subscriber, which once set, can't be unset or changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created, or if a global subscriber has
    /// already been installed.
    pub fn install_global(self) -> CommonResult<()> {
        let Some(layers) = try_create_layers(self)? else {
            return ok!();
        };

        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|_| BoundedValueErrorCouldNot::InstallTracingSubscriber)?;

        ok!()
    }

    /// Install a subscriber for the current thread only. It is removed when the returned
    /// guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file can't be created.
    pub fn install_thread_local(self) -> CommonResult<Option<DefaultGuard>> {
        let Some(layers) = try_create_layers(self)? else {
            return Ok(None);
        };

        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(Some(tracing::subscriber::set_default(subscriber)))
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self { Self::new_display(level_filter) }
}

impl From<(LevelFilter, WriterConfig)> for TracingConfig {
    fn from((level_filter, writer_config): (LevelFilter, WriterConfig)) -> Self {
        Self {
            writer_config,
            level_filter,
        }
    }
}
