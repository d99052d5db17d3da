// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command line front end for the decibel aliases. Run `bounded_demo --help` for usage.

use bounded_value::{CLIArg, CommonResult, ok, tracing_config_from,
                    try_initialize_logging_global, try_run_command};
use clap::Parser;

fn main() -> CommonResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    try_initialize_logging_global(tracing_config_from(&cli_arg))?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "Start bounded_demo", cli_arg = ?cli_arg);

    let result = try_run_command(&cli_arg);

    match result {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            tracing::debug!(message = "Stop bounded_demo");
            ok!()
        }
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run bounded_demo due to the following problem",
                error = ?error
            );
            Err(error)
        }
    }
}
