// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! "Nice" step selection for linear legends.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ScaleError;

/// Mantissas of the canonical step set `{1, 2, 2.5, 5} x 10^k`.
pub const NICE_MANTISSAS: [f64; 4] = [1.0, 2.0, 2.5, 5.0];

/// Returns the nice step for dividing `span` into about `target_count` intervals.
///
/// The step is the candidate from `{1, 2, 2.5, 5} x 10^k` minimizing
/// `|span / step - target_count|`. Ties go to the larger (coarser) step. A `target_count`
/// of zero is treated as one.
///
/// Fails with [`ScaleError::InvalidRange`] when `span` is not a positive finite number.
pub fn nice_step(span: f64, target_count: usize) -> Result<f64, ScaleError> {
    if !span.is_finite() || span <= 0.0 {
        return Err(ScaleError::InvalidRange {
            min: 0.0,
            max: span,
        });
    }
    let target = target_count.max(1) as f64;
    let rough = span / target;
    let decade = decade_of(rough);

    // Ratios this close are treated as ties.
    let tie_eps = target * 1e-9;
    let mut best: Option<(f64, f64)> = None;
    for k in decade.saturating_sub(1)..=decade.saturating_add(1) {
        for &m in &NICE_MANTISSAS {
            let step = scaled(m, k);
            if !step.is_finite() || step <= 0.0 {
                continue;
            }
            let err = (span / step - target).abs();
            best = match best {
                None => Some((step, err)),
                Some((best_step, best_err)) => {
                    if err < best_err - tie_eps
                        || ((err - best_err).abs() <= tie_eps && step > best_step)
                    {
                        Some((step, err))
                    } else {
                        Some((best_step, best_err))
                    }
                }
            };
        }
    }

    let (step, err) = best.ok_or(ScaleError::InvalidRange {
        min: 0.0,
        max: span,
    })?;
    tracing::trace!(span, target, step, err, "selected nice step");
    Ok(step)
}

/// Returns `floor(log10(x))` as an integer, saturating at the `i32` range.
pub(crate) fn decade_of(x: f64) -> i32 {
    let e = snap(x.log10())
        .floor()
        .clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        e as i32
    }
}

/// Powers of ten that are exact in an `f64`.
const EXACT_POWERS: [f64; 23] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15,
    1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Returns the `f64` nearest to `10^k`.
///
/// Overflows to infinity above `1e308` and underflows to zero below the subnormals.
pub(crate) fn pow10(k: i32) -> f64 {
    scaled(1.0, k)
}

/// Returns the `f64` nearest to `m x 10^k`, so values like `0.2`, `2.5e-40` and `1e-303`
/// equal their literals.
pub(crate) fn scaled(m: f64, k: i32) -> f64 {
    let exact = usize::try_from(k.unsigned_abs())
        .ok()
        .and_then(|i| EXACT_POWERS.get(i));
    match exact {
        Some(p) if k >= 0 => m * p,
        Some(p) => m / p,
        // `str::parse` rounds correctly; a finite mantissa always parses.
        None => alloc::format!("{m}e{k}").parse().unwrap_or(f64::NAN),
    }
}

/// Rounds `x` to the nearest integer when it is within `1e-9` of it.
///
/// Keeps ratios such as `0.3 / 0.1` from landing just below an integer before `floor`.
pub(crate) fn snap(x: f64) -> f64 {
    let r = x.round();
    if (x - r).abs() < 1e-9 { r } else { x }
}
