// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logarithmic tick planning.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ScaleError;
use crate::nice::{decade_of, pow10, scaled, snap};
use crate::request::{ScaleMode, ScaleRequest};
use crate::ticks::{TickSet, TickVec, merge_close, tick_vec};

/// Subdivisions used inside a decade when the range spans fewer than two decades.
const SUBDIVISIONS: [f64; 3] = [1.0, 2.0, 5.0];

/// Plans power-of-ten ticks covering the request's (positive) range.
///
/// - One tick per decade when they fit within the tick target.
/// - Ranges narrower than two decades get `{1, 2, 5} x 10^k` ticks trimmed to the data,
///   unless that would exceed the target by more than one.
/// - Wide ranges skip decades with a constant stride so the target is not exceeded.
///
/// Exact limits substitute the literal bound for the boundary tick, as for linear plans.
///
/// Errors:
/// - [`ScaleError::InvalidRange`] for non-finite bounds, `min > max`, or `min <= 0`.
/// - [`ScaleError::DegenerateRange`] when `min == max`.
pub fn plan_log(req: &ScaleRequest) -> Result<TickSet, ScaleError> {
    let (min, max) = req.resolved_bounds();
    if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
        return Err(ScaleError::InvalidRange { min, max });
    }
    if min == max {
        return Err(ScaleError::DegenerateRange { value: min });
    }

    let target = req.target();
    // Decade ticks stay within the normal f64 range; the pins below cover subnormal or
    // near-overflow bounds.
    let decade_min = decade_of(min).clamp(f64::MIN_10_EXP, f64::MAX_10_EXP - 1);
    let decade_max = ceil_decade(max).max(decade_min + 1).min(f64::MAX_10_EXP);
    let decades = decade_max - decade_min;
    let decade_ticks = usize::try_from(decades).map_or(usize::MAX, |d| d.saturating_add(1));

    let mut values = if decades < 2 {
        subdivided(min, max, decade_min, decade_max, target)
            .unwrap_or_else(|| every_decade(decade_min, decade_max, 1))
    } else if decade_ticks <= target {
        every_decade(decade_min, decade_max, 1)
    } else {
        let intervals = i32::try_from(target - 1).unwrap_or(i32::MAX).max(1);
        let stride = (decades + intervals - 1) / intervals;
        every_decade(decade_min, decade_max, stride)
    };

    let last = values.len() - 1;
    values[0] = values[0].min(min);
    values[last] = values[last].max(max);
    if req.exact_min {
        values[0] = min;
    }
    if req.exact_max {
        values[last] = max;
    }
    merge_close(&mut values, req.exact_min, req.exact_max, |a, b| {
        b.log10() - a.log10() < 1e-9
    });
    if values.len() < 2 {
        values = tick_vec([min, max]);
    }

    tracing::debug!(
        min,
        max,
        decade_min,
        decade_max,
        ticks = values.len(),
        "planned log ticks"
    );
    Ok(TickSet::new(values, ScaleMode::Logarithmic, None))
}

fn ceil_decade(x: f64) -> i32 {
    let e = snap(x.log10())
        .ceil()
        .clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        e as i32
    }
}

/// Powers of ten from `decade_min` in steps of `stride`, ending at the first one
/// `>= decade_max`.
fn every_decade(decade_min: i32, decade_max: i32, stride: i32) -> TickVec {
    let stride = stride.max(1);
    let mut out = TickVec::new();
    let mut e = decade_min;
    loop {
        out.push(pow10(e));
        if e >= decade_max {
            break;
        }
        e = e.saturating_add(stride);
    }
    out
}

/// `{1, 2, 5} x 10^k` ticks tightly covering `[min, max]`, or `None` if there would be more
/// than `target + 1` of them.
fn subdivided(
    min: f64,
    max: f64,
    decade_min: i32,
    decade_max: i32,
    target: usize,
) -> Option<TickVec> {
    let mut candidates: Vec<f64> = (decade_min..decade_max)
        .flat_map(|e| SUBDIVISIONS.iter().map(move |&m| scaled(m, e)))
        .collect();
    candidates.push(pow10(decade_max));

    let tol = 1e-9;
    let lower = candidates
        .iter()
        .rposition(|&c| c <= min * (1.0 + tol))
        .unwrap_or(0);
    let upper = candidates
        .iter()
        .position(|&c| c >= max * (1.0 - tol))
        .unwrap_or(candidates.len() - 1);
    if upper <= lower {
        return None;
    }
    let picked = &candidates[lower..=upper];
    if picked.len() > target.saturating_add(1) {
        return None;
    }
    Some(tick_vec(picked.iter().copied()))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn ticks(req: &ScaleRequest) -> Vec<f64> {
        plan_log(req).unwrap().values().to_vec()
    }

    #[test]
    fn one_tick_per_decade() {
        let req = ScaleRequest::log(1.0, 10_000.0).with_target_ticks(5);
        assert_eq!(ticks(&req), [1.0, 10.0, 100.0, 1000.0, 10_000.0]);
    }

    #[test]
    fn decades_round_outward() {
        let req = ScaleRequest::log(3.0, 420.0).with_target_ticks(10);
        assert_eq!(ticks(&req), [1.0, 10.0, 100.0, 1000.0]);
    }

    #[test]
    fn narrow_ranges_use_two_and_five_subdivisions() {
        let req = ScaleRequest::log(3.0, 8.0).with_target_ticks(5);
        assert_eq!(ticks(&req), [2.0, 5.0, 10.0]);

        let req = ScaleRequest::log(0.15, 0.9).with_target_ticks(5);
        assert_eq!(ticks(&req), [0.1, 0.2, 0.5, 1.0]);
    }

    #[test]
    fn subdivisions_yield_to_a_small_target() {
        let req = ScaleRequest::log(1.5, 9.0).with_target_ticks(2);
        assert_eq!(ticks(&req), [1.0, 10.0]);
    }

    #[test]
    fn wide_ranges_stride_over_decades() {
        let req = ScaleRequest::log(1e-10, 1e10).with_target_ticks(5);
        assert_eq!(ticks(&req), [1e-10, 1e-5, 1.0, 1e5, 1e10]);

        let req = ScaleRequest::log(1e-3, 2e7).with_target_ticks(4);
        let v = ticks(&req);
        assert!(v.len() <= 4, "{v:?}");
        assert_eq!(v[0], 1e-3);
        assert!(*v.last().unwrap() >= 2e7);
    }

    #[test]
    fn exact_limits_substitute_literal_bounds() {
        let req = ScaleRequest::log(3.0, 420.0)
            .with_target_ticks(10)
            .with_exact(true, true);
        assert_eq!(ticks(&req), [3.0, 10.0, 100.0, 420.0]);

        let req = ScaleRequest::log(3.0, 8.0)
            .with_target_ticks(5)
            .with_exact(true, true);
        assert_eq!(ticks(&req), [3.0, 5.0, 8.0]);
    }

    #[test]
    fn exact_bound_on_a_decade_merges() {
        let req = ScaleRequest::log(10.0, 1000.0).with_exact(true, true);
        assert_eq!(ticks(&req), [10.0, 100.0, 1000.0]);
    }

    #[test]
    fn non_positive_minimum_is_invalid() {
        for min in [0.0, -5.0] {
            assert!(matches!(
                plan_log(&ScaleRequest::log(min, 10.0)),
                Err(ScaleError::InvalidRange { .. })
            ));
        }
        assert_eq!(
            plan_log(&ScaleRequest::log(7.0, 7.0)),
            Err(ScaleError::DegenerateRange { value: 7.0 })
        );
    }

    #[test]
    fn clamped_minimum_plans_with_strides() {
        let req = ScaleRequest::log(0.0, 200.0).clamped_for_log();
        let set = plan_log(&req).unwrap();
        assert!(set.len() <= req.target());
        assert!(set.values()[0] <= f64::MIN_POSITIVE);
        assert!(set.values().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn subnormal_minimum_keeps_ticks_positive() {
        for (min, max) in [(5e-324, 1.0), (1e-310, 200.0), (f64::MIN_POSITIVE, 1e-300)] {
            let v = ticks(&ScaleRequest::log(min, max));
            assert!(v.iter().all(|&t| t > 0.0), "{v:?}");
            assert!(v.windows(2).all(|w| w[0] < w[1]), "{v:?}");
            assert_eq!(v[0], min);
            assert!(*v.last().unwrap() >= max);
        }
    }

    #[test]
    fn near_overflow_maximum_stays_finite() {
        let v = ticks(&ScaleRequest::log(1e300, f64::MAX));
        assert!(v.iter().all(|t| t.is_finite()), "{v:?}");
        assert_eq!(*v.last().unwrap(), f64::MAX);
    }

    #[test]
    fn far_decades_equal_their_literals() {
        let req = ScaleRequest::log(1e-300, 1e-280);
        assert_eq!(
            ticks(&req),
            [
                1e-300, 1e-298, 1e-296, 1e-294, 1e-292, 1e-290, 1e-288, 1e-286, 1e-284, 1e-282,
                1e-280
            ]
        );
    }

    #[test]
    fn planning_is_idempotent() {
        let req = ScaleRequest::log(0.02, 31.0).with_exact(false, true);
        assert_eq!(plan_log(&req), plan_log(&req));
    }
}
