// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping tick bands to spectrum colors.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;

use crate::error::ScaleError;
use crate::request::{ColorSchemeRef, SchemeFamily};
use crate::spectrum::{Spectrum, SpectrumRegistry};
use crate::ticks::TickSet;

/// One colored interval between two adjacent ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBand {
    /// Lower tick.
    pub lower: f64,
    /// Upper tick.
    pub upper: f64,
    /// Fill color.
    pub color: Color,
}

/// Assigns one color per band of `ticks`.
///
/// Sequential schemes sample the spectrum evenly from the lowest band to the highest.
/// Divergent schemes split the bands at the scheme pivot and map each side onto its half
/// of the spectrum, so the outermost bands get the saturated ends. When no tick sits on the
/// pivot, a boundary is inserted there and one extra band is returned.
///
/// Fails with [`ScaleError::UnknownColorScheme`] when the scheme cannot be resolved.
pub fn map_colors(
    ticks: &TickSet,
    scheme: &ColorSchemeRef,
    registry: &SpectrumRegistry,
) -> Result<Vec<ColorBand>, ScaleError> {
    let spectrum = registry.resolve(scheme)?;
    let bands = match scheme.family {
        SchemeFamily::Sequential => sequential(ticks.values(), scheme.reversed, &*spectrum),
        SchemeFamily::Divergent => {
            let (split, at) = split_at_pivot(ticks, scheme.pivot);
            divergent(split.values(), at, scheme.reversed, &*spectrum)
        }
    };
    tracing::debug!(
        scheme = %scheme.name,
        family = ?scheme.family,
        bands = bands.len(),
        "mapped colors"
    );
    Ok(bands)
}

fn sequential(bounds: &[f64], reversed: bool, spectrum: &dyn Spectrum) -> Vec<ColorBand> {
    let n = bounds.len().saturating_sub(1);
    bounds
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            let t = if n == 1 {
                0.5
            } else {
                i as f32 / (n - 1) as f32
            };
            band(w[0], w[1], spectrum, t, reversed)
        })
        .collect()
}

/// Returns the band boundaries with the pivot present (when inside the range) and the
/// index of the pivot boundary.
///
/// A pivot at or below the first tick yields index 0; at or above the last tick, the last
/// index.
fn split_at_pivot(ticks: &TickSet, pivot: f64) -> (TickSet, usize) {
    let values = ticks.values();
    let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
        return (ticks.clone(), 0);
    };
    let tol = 1e-9 * (last - first).abs();
    if let Some(idx) = values.iter().position(|&v| (v - pivot).abs() <= tol) {
        return (ticks.clone(), idx);
    }
    if pivot <= first {
        return (ticks.clone(), 0);
    }
    if pivot >= last {
        return (ticks.clone(), values.len() - 1);
    }
    let split = ticks.with_boundary(pivot);
    let idx = split.values().partition_point(|&v| v < pivot);
    (split, idx)
}

fn divergent(
    bounds: &[f64],
    pivot_idx: usize,
    reversed: bool,
    spectrum: &dyn Spectrum,
) -> Vec<ColorBand> {
    let total = bounds.len().saturating_sub(1);
    let below = pivot_idx.min(total);
    let above = total - below;
    bounds
        .windows(2)
        .enumerate()
        .map(|(i, w)| {
            let t = if i < below {
                0.5 * i as f32 / below as f32
            } else {
                let j = i - below;
                1.0 - 0.5 * (above - 1 - j) as f32 / above as f32
            };
            band(w[0], w[1], spectrum, t, reversed)
        })
        .collect()
}

fn band(lower: f64, upper: f64, spectrum: &dyn Spectrum, t: f32, reversed: bool) -> ColorBand {
    let t = if reversed { 1.0 - t } else { t };
    ColorBand {
        lower,
        upper,
        color: spectrum.sample(t),
    }
}
