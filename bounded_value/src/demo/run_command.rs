// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CLIArg, CLICommand, run_scenarios};
use crate::{CommonResult, DecibelSteps, Decibels, TracingConfig, WriterConfig,
            parse_floating_point, parse_integral};
use tracing_core::LevelFilter;

/// Turn the global options into a [`TracingConfig`]. Logs go to stderr, unless a log
/// file is given, so the command output on stdout stays clean.
#[must_use]
pub fn tracing_config_from(cli_arg: &CLIArg) -> TracingConfig {
    let level_filter: LevelFilter = cli_arg.global_options.log_level.into();
    match &cli_arg.global_options.log_file {
        Some(path) => TracingConfig::new_file(level_filter, path.clone()),
        None => TracingConfig::new_display(level_filter),
    }
}

/// Run the command and return what should be printed to stdout.
///
/// # Errors
///
/// Returns an error if the value passed to `decibels` or `decibel-steps` can't be
/// parsed.
pub fn try_run_command(cli_arg: &CLIArg) -> CommonResult<Vec<String>> {
    let lines = match &cli_arg.command {
        CLICommand::Scenarios => {
            let outcomes = run_scenarios();
            let passed = outcomes.iter().filter(|it| it.is_pass()).count();

            // % is Display, ? is Debug.
            tracing::info!(message = "Ran scenarios", passed = passed, total = outcomes.len());

            let mut lines: Vec<String> = outcomes.iter().map(ToString::to_string).collect();
            lines.push(format!("{passed} / {} passed", outcomes.len()));
            lines
        }
        CLICommand::Decibels { value } => {
            let arg = parse_floating_point(value)?;
            let status = Decibels::clamp_status_of(arg);
            let it = Decibels::new(arg);
            vec![format!("{it:?} ({status:?})")]
        }
        CLICommand::DecibelSteps { value } => {
            let arg = parse_integral(value)?;
            let status = DecibelSteps::clamp_status_of(arg);
            let it = DecibelSteps::new(arg);
            vec![format!("{it:?} ({status:?})")]
        }
    };

    Ok(lines)
}
