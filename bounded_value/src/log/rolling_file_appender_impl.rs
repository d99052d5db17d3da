// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BoundedValueErrorCouldNot, CommonResult};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Create a file appender that never rotates, writing to exactly `path_str`. A bare file
/// name is created in the current folder.
///
/// # Errors
///
/// Returns [`BoundedValueErrorCouldNot::UseLogFilePath`] if `path_str` has no file name,
/// or if the file can't be created.
pub fn try_create(path_str: &str) -> CommonResult<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let could_not_use_path = || BoundedValueErrorCouldNot::UseLogFilePath {
        path: path_str.into(),
    };

    let file_name = path.file_name().ok_or_else(could_not_use_path)?;

    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .map_err(|_| could_not_use_path())?;

    Ok(appender)
}
