// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear tick planning.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ScaleError;
use crate::nice::{nice_step, snap};
use crate::request::{ScaleMode, ScaleRequest};
use crate::ticks::{TickSet, merge_close, tick_vec};

/// Plans evenly spaced nice ticks covering the request's range.
///
/// The first tick is the largest step multiple `<= min` and the last the smallest step
/// multiple `>= max`. With `exact_min`/`exact_max` the corresponding boundary tick is the
/// literal requested value instead, which may leave an irregular first or last band.
///
/// Errors:
/// - [`ScaleError::InvalidRange`] for non-finite bounds or `min > max`.
/// - [`ScaleError::DegenerateRange`] when `min == max`.
pub fn plan_linear(req: &ScaleRequest) -> Result<TickSet, ScaleError> {
    let (min, max) = req.resolved_bounds();
    if !min.is_finite() || !max.is_finite() || min > max {
        return Err(ScaleError::InvalidRange { min, max });
    }
    let span = max - min;
    if span == 0.0 {
        return Err(ScaleError::DegenerateRange { value: min });
    }
    if !span.is_finite() {
        return Err(ScaleError::InvalidRange { min, max });
    }

    let step = nice_step(span, req.target() - 1)?;
    let lo = snap(min / step).floor();
    let hi = snap(max / step).ceil();

    // Targets are capped, so a plan never comes near this.
    let n_f = (hi - lo).max(1.0).min(10_000.0);
    let n = {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "integral, positive and capped at 10k"
        )]
        {
            n_f as u64
        }
    };
    let mut values = tick_vec((0..=n).map(|i| (lo + i as f64) * step));

    // Near the f64 limits the outer grid multiple can overflow.
    let last = values.len() - 1;
    if !values[0].is_finite() {
        values[0] = min;
    }
    if !values[last].is_finite() {
        values[last] = max;
    }
    // Grid multiples can miss the bounds by rounding noise (0.3 / 0.1 snaps to 3, but
    // 3.0 * 0.1 > 0.3); pin them so the range is always covered.
    values[0] = values[0].min(min);
    values[last] = values[last].max(max);

    if req.exact_min {
        values[0] = min;
    }
    if req.exact_max {
        values[last] = max;
    }
    let eps = step * 1e-9;
    merge_close(&mut values, req.exact_min, req.exact_max, |a, b| b - a < eps);
    if values.len() < 2 {
        values = tick_vec([min, max]);
    }

    tracing::debug!(min, max, step, ticks = values.len(), "planned linear ticks");
    Ok(TickSet::new(values, ScaleMode::Linear, Some(step)))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;
    use crate::request::MAX_TARGET_TICKS;

    fn ticks(req: &ScaleRequest) -> Vec<f64> {
        plan_linear(req).unwrap().values().to_vec()
    }

    fn assert_strictly_increasing(v: &[f64]) {
        assert!(v.windows(2).all(|w| w[0] < w[1]), "not increasing: {v:?}");
    }

    #[test]
    fn zero_to_hundred_in_twenties() {
        let req = ScaleRequest::new(0.0, 100.0)
            .with_target_ticks(6)
            .with_exact(true, true);
        assert_eq!(ticks(&req), [0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn rounded_bounds_cover_the_data() {
        let req = ScaleRequest::new(3.7, 96.2).with_target_ticks(6);
        let set = plan_linear(&req).unwrap();
        let v = set.values();
        assert_strictly_increasing(v);
        assert!(v[0] <= 3.7);
        assert!(*v.last().unwrap() >= 96.2);
        assert_eq!(v[0], 0.0);
        assert_eq!(*v.last().unwrap(), 100.0);
        assert_eq!(set.step(), Some(20.0));
    }

    #[test]
    fn exact_limits_keep_irregular_end_bands() {
        let req = ScaleRequest::new(3.0, 97.0)
            .with_target_ticks(6)
            .with_exact(true, true);
        let v = ticks(&req);
        assert_eq!(v, [3.0, 20.0, 40.0, 60.0, 80.0, 97.0]);
    }

    #[test]
    fn exact_limit_near_a_grid_value_replaces_it() {
        let req = ScaleRequest::new(0.0, 100.0 + 1e-12)
            .with_target_ticks(6)
            .with_exact(false, true);
        let v = ticks(&req);
        assert_eq!(v.len(), 6);
        assert_eq!(*v.last().unwrap(), 100.0 + 1e-12);
        assert_strictly_increasing(&v);
    }

    #[test]
    fn decimal_steps_do_not_gain_extra_ticks() {
        let req = ScaleRequest::new(0.3, 0.9).with_target_ticks(7);
        let set = plan_linear(&req).unwrap();
        assert_eq!(set.step(), Some(0.1));
        assert_eq!(set.len(), 7);
        assert!(set.values()[0] <= 0.3);
        assert!(*set.values().last().unwrap() >= 0.9);
    }

    #[test]
    fn negative_ranges_are_supported() {
        let req = ScaleRequest::new(-42.0, -3.0).with_target_ticks(5);
        let v = ticks(&req);
        assert_strictly_increasing(&v);
        assert!(v[0] <= -42.0);
        assert!(*v.last().unwrap() >= -3.0);
    }

    #[test]
    fn degenerate_and_invalid_ranges_fail() {
        assert_eq!(
            plan_linear(&ScaleRequest::new(5.0, 5.0)),
            Err(ScaleError::DegenerateRange { value: 5.0 })
        );
        assert!(matches!(
            plan_linear(&ScaleRequest::new(5.0, 1.0)),
            Err(ScaleError::InvalidRange { .. })
        ));
        assert!(matches!(
            plan_linear(&ScaleRequest::new(f64::NAN, 1.0)),
            Err(ScaleError::InvalidRange { .. })
        ));
        assert!(matches!(
            plan_linear(&ScaleRequest::new(-f64::MAX, f64::MAX)),
            Err(ScaleError::InvalidRange { .. })
        ));
    }

    #[test]
    fn ranges_at_the_f64_limits_stay_finite() {
        for (min, max) in [(0.0, f64::MAX), (-f64::MAX, 0.0)] {
            let v = ticks(&ScaleRequest::new(min, max).with_target_ticks(6));
            assert!(v.iter().all(|t| t.is_finite()), "{v:?}");
            assert_strictly_increasing(&v);
            assert_eq!(v[0], min.min(0.0));
            assert_eq!(*v.last().unwrap(), max.max(0.0));
        }
    }

    #[test]
    fn huge_targets_keep_a_regular_grid() {
        let set = plan_linear(&ScaleRequest::new(0.0, 1.0).with_target_ticks(20_001)).unwrap();
        let step = set.step().unwrap();
        let v = set.values();
        assert!(v.len() <= MAX_TARGET_TICKS + 1, "{} ticks", v.len());
        assert_eq!(v[0], 0.0);
        assert!(*v.last().unwrap() >= 1.0);
        assert!(
            v.windows(2).all(|w| ((w[1] - w[0]) - step).abs() < step * 1e-6),
            "irregular band in {v:?}"
        );
    }

    #[test]
    fn symmetric_requests_put_zero_on_a_tick() {
        let req = ScaleRequest::new(-3.0, 17.0)
            .with_target_ticks(9)
            .with_symmetric(true);
        let v = ticks(&req);
        assert_eq!(v[0], -v[v.len() - 1]);
        assert!(v.contains(&0.0));
    }

    #[test]
    fn planning_is_idempotent() {
        let req = ScaleRequest::new(-1.234, 56.78).with_exact(true, false);
        assert_eq!(plan_linear(&req), plan_linear(&req));
    }

    #[test]
    fn ticks_always_cover_range_across_targets() {
        for target in 2..=25 {
            for &(min, max) in &[(0.0, 1.0), (-7.5, 2.25), (1e-6, 3e-6), (123.0, 98765.0)] {
                let req = ScaleRequest::new(min, max).with_target_ticks(target);
                let v = ticks(&req);
                assert!(v.len() >= 2);
                assert_strictly_increasing(&v);
                assert!(v[0] <= min && *v.last().unwrap() >= max, "{min} {max} {v:?}");
            }
        }
    }
}
