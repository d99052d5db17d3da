// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors for the fallible edges of this crate: logging setup and turning user supplied
//! text into numbers. [`BoundedValue`] itself never fails.
//!
//! [`BoundedValue`]: crate::BoundedValue

/// Type alias to make it easy to work with [`miette::Result`].
pub type CommonResult<T> = miette::Result<T>;

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

#[derive(thiserror::Error, Debug, miette::Diagnostic, PartialEq, Eq)]
pub enum BoundedValueErrorCouldNot {
    #[error("🔢 Could not parse '{input}' as a number")]
    #[diagnostic(
        code(bounded_value::parse_number),
        help("Use a decimal number such as `-10`, `42` or `-10.5`")
    )]
    ParseNumber { input: String },

    #[error("✂️ Could not accept fractional input '{input}' into integral storage")]
    #[diagnostic(
        code(bounded_value::accept_fractional_into_integral),
        help("Round the value to an integer explicitly before passing it in")
    )]
    AcceptFractionalIntoIntegral { input: String },

    #[error("📄 Could not use '{path}' as a log file path")]
    #[diagnostic(
        code(bounded_value::use_log_file_path),
        help("The path needs a parent folder and a file name")
    )]
    UseLogFilePath { path: String },

    #[error("📡 Could not install the tracing subscriber")]
    #[diagnostic(code(bounded_value::install_tracing_subscriber))]
    InstallTracingSubscriber,
}
