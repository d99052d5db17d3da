// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turn user supplied text into a primitive that can be handed to
//! [`BoundedValue::new()`].
//!
//! Text has no static type, so the compile time rule "no fractional input into integral
//! storage" is applied here at runtime, at the edge of the program, with
//! [`BoundedValueErrorCouldNot::AcceptFractionalIntoIntegral`]. Once parsed, the value
//! goes through the same statically checked constructor as any other value.
//!
//! [`BoundedValue::new()`]: crate::BoundedValue::new

use super::{BoundedValueErrorCouldNot, CommonResult};
use std::num::IntErrorKind;

/// Parse `input` as an integer, for integral storage.
///
/// - Integers beyond the range of [`i128`] saturate, the bounded value clamps them anyway.
/// - Anything that only parses as a float (`10.3`, `1e3`, `nan`) is rejected with
///   [`BoundedValueErrorCouldNot::AcceptFractionalIntoIntegral`].
///
/// # Errors
///
/// Returns an error if:
/// - `input` is not a number at all.
/// - `input` is a floating point number.
pub fn parse_integral(input: &str) -> CommonResult<i128> {
    let trimmed = input.trim();

    let result = match trimmed.parse::<i128>() {
        Ok(it) => Ok(it),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i128::MAX),
            IntErrorKind::NegOverflow => Ok(i128::MIN),
            _ if trimmed.parse::<f64>().is_ok() => {
                Err(BoundedValueErrorCouldNot::AcceptFractionalIntoIntegral {
                    input: trimmed.into(),
                })
            }
            _ => Err(BoundedValueErrorCouldNot::ParseNumber {
                input: trimmed.into(),
            }),
        },
    };

    // % is Display, ? is Debug.
    tracing::debug!(message = "parse integral", input = %trimmed, result = ?result);

    Ok(result?)
}

/// Parse `input` as a float, for floating point storage. Integers are accepted too, since
/// integral input widens into floating point storage.
///
/// # Errors
///
/// Returns an error if `input` is not a number.
pub fn parse_floating_point(input: &str) -> CommonResult<f64> {
    let trimmed = input.trim();

    let result =
        trimmed
            .parse::<f64>()
            .map_err(|_| BoundedValueErrorCouldNot::ParseNumber {
                input: trimmed.into(),
            });

    // % is Display, ? is Debug.
    tracing::debug!(message = "parse floating point", input = %trimmed, result = ?result);

    Ok(result?)
}
