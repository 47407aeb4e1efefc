// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planned tick sequences.

use smallvec::SmallVec;

use crate::request::ScaleMode;

/// Inline capacity for tick storage; covers the usual 3..=25 tick targets without allocating.
pub(crate) type TickVec = SmallVec<[f64; 26]>;

/// An ordered, strictly increasing sequence of legend tick values.
///
/// Adjacent ticks bound one color band, so `len() - 1` is the band count.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSet {
    values: TickVec,
    mode: ScaleMode,
    step: Option<f64>,
}

impl TickSet {
    pub(crate) fn new(
        values: impl IntoIterator<Item = f64>,
        mode: ScaleMode,
        step: Option<f64>,
    ) -> Self {
        Self {
            values: values.into_iter().collect(),
            mode,
            step,
        }
    }

    /// Returns the tick values in increasing order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of ticks.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no ticks.
    ///
    /// Planned tick sets always hold at least two values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of bands between ticks.
    pub fn band_count(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// The scale mode this set was planned for.
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// The nice step of a linear plan (`None` for log plans).
    pub fn step(&self) -> Option<f64> {
        self.step
    }

    /// The first tick (the legend's effective minimum).
    pub fn effective_min(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// The last tick (the legend's effective maximum).
    pub fn effective_max(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Returns the smallest gap between adjacent ticks.
    pub fn min_increment(&self) -> Option<f64> {
        self.values
            .windows(2)
            .map(|w| w[1] - w[0])
            .reduce(f64::min)
    }

    /// Returns a copy with `v` inserted as an extra boundary.
    ///
    /// Values outside the current range, or already present, leave the set unchanged.
    pub(crate) fn with_boundary(&self, v: f64) -> Self {
        let mut out = self.clone();
        let idx = self.values.partition_point(|&t| t < v);
        if idx == 0 || idx >= self.values.len() || self.values[idx] == v {
            return out;
        }
        out.values.insert(idx, v);
        out
    }
}

/// Drops ticks that `too_close` reports as colliding with their predecessor.
///
/// `keep_first`/`keep_last` mark exact-constrained boundaries: when they collide with a
/// neighbor it is the neighbor that goes.
pub(crate) fn merge_close(
    values: &mut TickVec,
    keep_first: bool,
    keep_last: bool,
    too_close: impl Fn(f64, f64) -> bool,
) {
    let mut i = 1;
    while i < values.len() {
        if too_close(values[i - 1], values[i]) {
            let last = i == values.len() - 1;
            if last && keep_last && !(i == 1 && keep_first) {
                values.remove(i - 1);
            } else {
                values.remove(i);
            }
        } else {
            i += 1;
        }
    }
}

pub(crate) fn tick_vec(values: impl IntoIterator<Item = f64>) -> TickVec {
    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn merge_keeps_exact_boundaries() {
        let mut v = tick_vec([3.0, 3.0 + 1e-12, 20.0, 40.0, 40.0 + 1e-12]);
        merge_close(&mut v, true, true, |a, b| b - a < 1e-9);
        assert_eq!(v.as_slice(), &[3.0, 20.0, 40.0 + 1e-12]);
    }

    #[test]
    fn boundary_is_inserted_in_order() {
        let set = TickSet::new([-10.0, -4.0, 2.0, 8.0], ScaleMode::Linear, Some(6.0));
        let split = set.with_boundary(0.0);
        assert_eq!(split.values(), &[-10.0, -4.0, 0.0, 2.0, 8.0]);
        assert_eq!(split.band_count(), 4);
        assert_eq!(set.with_boundary(20.0), set);
        assert_eq!(set.with_boundary(2.0), set);
    }
}
