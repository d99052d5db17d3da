// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DecibelSteps, Decibels};
use std::fmt::{Display, Formatter, Result};

/// The result of constructing one of the decibel aliases from one input, along with the
/// value it is expected to produce.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub alias: &'static str,
    pub input: &'static str,
    pub actual: String,
    pub expected: String,
}

impl ScenarioOutcome {
    fn new(
        alias: &'static str,
        input: &'static str,
        actual: impl std::fmt::Debug,
        expected: impl std::fmt::Debug,
    ) -> Self {
        Self {
            alias,
            input,
            actual: format!("{actual:?}"),
            expected: format!("{expected:?}"),
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool { self.actual == self.expected }
}

impl Display for ScenarioOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let sigil = if self.is_pass() { "✅" } else { "❌" };
        write!(
            f,
            "{sigil} {alias}::new({input}) → {actual} (expected {expected})",
            alias = self.alias,
            input = self.input,
            actual = self.actual,
            expected = self.expected,
        )
    }
}

/// Construct both decibel aliases from in range, boundary, and extreme inputs.
#[must_use]
pub fn run_scenarios() -> Vec<ScenarioOutcome> {
    vec![
        // Integral storage.
        ScenarioOutcome::new("DecibelSteps", "10", DecibelSteps::new(10).value(), 10),
        ScenarioOutcome::new(
            "DecibelSteps",
            "u64::MAX",
            DecibelSteps::new(u64::MAX).value(),
            1000,
        ),
        ScenarioOutcome::new(
            "DecibelSteps",
            "i64::MIN",
            DecibelSteps::new(i64::MIN).value(),
            0,
        ),
        ScenarioOutcome::new("DecibelSteps", "1000", DecibelSteps::new(1000).value(), 1000),
        ScenarioOutcome::new("DecibelSteps", "0", DecibelSteps::new(0).value(), 0),
        // Floating point storage.
        ScenarioOutcome::new("Decibels", "-10.5", Decibels::new(-10.5).value(), -10.5),
        ScenarioOutcome::new("Decibels", "-10", Decibels::new(-10).value(), -10.0),
        ScenarioOutcome::new("Decibels", "f64::MAX", Decibels::new(f64::MAX).value(), 0.0),
        ScenarioOutcome::new(
            "Decibels",
            "f64::MIN",
            Decibels::new(f64::MIN).value(),
            -100.0,
        ),
        ScenarioOutcome::new("Decibels", "0.0", Decibels::new(0.0).value(), 0.0),
        ScenarioOutcome::new("Decibels", "-100.0", Decibels::new(-100.0).value(), -100.0),
    ]
}
