// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::DEFAULT_LOG_FILE_NAME;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_core::LevelFilter;

#[derive(Debug, Parser)]
#[command(bin_name = "bounded_demo")]
#[command(about = "📏 Clamp numbers into the decibel aliases, and check the examples")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        value_enum,
        default_value_t = LogLevel::Off,
        help = "How much to log. Clamping is logged at `trace`, NaN input at `warn`"
    )]
    pub log_level: LogLevel,

    #[arg(
        global = true,
        long,
        short = 'f',
        value_name = "path",
        num_args = 0..=1,
        default_missing_value = DEFAULT_LOG_FILE_NAME,
        help = "Log to this file instead of stderr, `bounded_value.log` if no path is given"
    )]
    pub log_file: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(about = "🧪 Run the example scenarios and report each result")]
    Scenarios,

    #[clap(about = "🔊 Clamp a number into Decibels, [-100, 0] stored as f64\n💡 Eg: `bounded_demo decibels -10.5`")]
    Decibels {
        #[arg(allow_negative_numbers = true, help = "Integral or fractional number")]
        value: String,
    },

    #[clap(about = "🎚️ Clamp an integer into DecibelSteps, [0, 1000] stored as i32\n💡 Eg: `bounded_demo decibel-steps 1200`")]
    DecibelSteps {
        #[arg(allow_negative_numbers = true, help = "Integral number, fractions are rejected")]
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(it: LogLevel) -> Self {
        match it {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}
