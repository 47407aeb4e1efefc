// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by the scale planners and the color mapper.

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Errors returned when a legend scale cannot be computed.
///
/// All of these are deterministic: retrying with the same request reproduces the error,
/// so callers are expected to fall back to a default scale instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleError {
    /// Non-finite bounds, `min > max`, or a non-positive minimum on a log scale.
    InvalidRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// The requested range has zero span.
    ///
    /// Callers should present a single-value legend instead.
    DegenerateRange {
        /// The single value both bounds collapsed to.
        value: f64,
    },
    /// The scheme name is not registered and no custom spectrum was supplied.
    UnknownColorScheme {
        /// The unresolved scheme name.
        name: String,
    },
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "invalid scale range [{min}, {max}]")
            }
            Self::DegenerateRange { value } => {
                write!(f, "scale range has zero span at {value}")
            }
            Self::UnknownColorScheme { name } => {
                write!(f, "unknown color scheme: {name}")
            }
        }
    }
}

impl core::error::Error for ScaleError {}
