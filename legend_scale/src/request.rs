// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale requests: what the host asks the engine to plan.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use crate::spectrum::Spectrum;

/// Default number of ticks the planners aim for (15 intervals).
pub const DEFAULT_TARGET_TICKS: usize = 16;

/// Lowest tick target the planners accept; smaller values are clamped up.
pub const MIN_TARGET_TICKS: usize = 2;

/// Highest tick target the planners accept; larger values are clamped down.
pub const MAX_TARGET_TICKS: usize = 1000;

/// How tick values are distributed along the legend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    /// Evenly spaced "nice" increments.
    #[default]
    Linear,
    /// Powers of ten (with 2/5 subdivisions for narrow ranges).
    Logarithmic,
}

/// Color scheme families.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SchemeFamily {
    /// One monotone ramp from the low to the high end.
    #[default]
    Sequential,
    /// Two ramps meeting at a neutral pivot value.
    Divergent,
}

/// A reference to a color scheme, resolved against a
/// [`SpectrumRegistry`](crate::SpectrumRegistry) at mapping time.
#[derive(Clone)]
pub struct ColorSchemeRef {
    /// Scheme family.
    pub family: SchemeFamily,
    /// Registered scheme name (e.g. `"Rainbow"`).
    pub name: String,
    /// Whether the ramp runs high-to-low.
    pub reversed: bool,
    /// Mirror value for divergent schemes.
    ///
    /// Ignored for sequential schemes.
    pub pivot: f64,
    /// Optional user-defined spectrum.
    ///
    /// When present it takes precedence over the registry lookup by `name`.
    pub custom: Option<Arc<dyn Spectrum + Send + Sync>>,
}

impl fmt::Debug for ColorSchemeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorSchemeRef")
            .field("family", &self.family)
            .field("name", &self.name)
            .field("reversed", &self.reversed)
            .field("pivot", &self.pivot)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl ColorSchemeRef {
    /// A sequential scheme by name.
    pub fn sequential(name: impl Into<String>) -> Self {
        Self {
            family: SchemeFamily::Sequential,
            name: name.into(),
            reversed: false,
            pivot: 0.0,
            custom: None,
        }
    }

    /// A divergent scheme by name, pivoting at zero.
    pub fn divergent(name: impl Into<String>) -> Self {
        Self {
            family: SchemeFamily::Divergent,
            ..Self::sequential(name)
        }
    }

    /// Sets whether the ramp is reversed.
    pub fn with_reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    /// Sets the divergent pivot value.
    pub fn with_pivot(mut self, pivot: f64) -> Self {
        self.pivot = pivot;
        self
    }

    /// Supplies a user-defined spectrum for this scheme.
    pub fn with_custom(mut self, spectrum: impl Spectrum + Send + Sync + 'static) -> Self {
        self.custom = Some(Arc::new(spectrum));
        self
    }
}

impl Default for ColorSchemeRef {
    fn default() -> Self {
        Self::sequential("Rainbow")
    }
}

/// A request for a legend scale.
#[derive(Clone, Debug)]
pub struct ScaleRequest {
    /// Lower data bound.
    pub min: f64,
    /// Upper data bound.
    pub max: f64,
    /// Tick distribution.
    pub mode: ScaleMode,
    /// Force the first tick to equal `min` exactly.
    pub exact_min: bool,
    /// Force the last tick to equal `max` exactly.
    pub exact_max: bool,
    /// Number of ticks to aim for, read through [`ScaleRequest::target`].
    pub target_tick_count: usize,
    /// Color scheme for the bands.
    pub color_scheme: ColorSchemeRef,
    /// Mirror the range around the scheme pivot before planning.
    pub symmetric: bool,
}

impl ScaleRequest {
    /// Creates a linear request over `[min, max]` with default options.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            mode: ScaleMode::Linear,
            exact_min: false,
            exact_max: false,
            target_tick_count: DEFAULT_TARGET_TICKS,
            color_scheme: ColorSchemeRef::default(),
            symmetric: false,
        }
    }

    /// Creates a log request over `[min, max]` with default options.
    pub fn log(min: f64, max: f64) -> Self {
        Self::new(min, max).with_mode(ScaleMode::Logarithmic)
    }

    /// Sets the scale mode.
    pub fn with_mode(mut self, mode: ScaleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the exact-limit flags.
    pub fn with_exact(mut self, exact_min: bool, exact_max: bool) -> Self {
        self.exact_min = exact_min;
        self.exact_max = exact_max;
        self
    }

    /// Sets the tick target, clamped to at least [`MIN_TARGET_TICKS`].
    pub fn with_target_ticks(mut self, count: usize) -> Self {
        self.target_tick_count = count.max(MIN_TARGET_TICKS);
        self
    }

    /// Sets the color scheme.
    pub fn with_color_scheme(mut self, scheme: ColorSchemeRef) -> Self {
        self.color_scheme = scheme;
        self
    }

    /// Enables or disables mirroring around the scheme pivot.
    pub fn with_symmetric(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    /// Returns the tick target, clamped to [`MIN_TARGET_TICKS`]..=[`MAX_TARGET_TICKS`].
    pub fn target(&self) -> usize {
        self.target_tick_count.clamp(MIN_TARGET_TICKS, MAX_TARGET_TICKS)
    }

    /// Swaps reversed bounds, carrying the exact flags along with them.
    ///
    /// The planners reject `min > max`; hosts that read bounds from user input can call this
    /// first.
    pub fn sorted(mut self) -> Self {
        if self.min > self.max {
            core::mem::swap(&mut self.min, &mut self.max);
            core::mem::swap(&mut self.exact_min, &mut self.exact_max);
        }
        self
    }

    /// Replaces a non-positive minimum with the smallest positive `f64`.
    ///
    /// Log planning requires `min > 0`.
    pub fn clamped_for_log(mut self) -> Self {
        if self.min <= 0.0 {
            self.min = f64::MIN_POSITIVE;
        }
        self
    }

    /// Returns the bounds after applying `symmetric` (if enabled).
    ///
    /// The mirrored range is `[p - h, p + h]` where `p` is the scheme pivot and `h` the larger
    /// distance from the pivot to either bound.
    pub fn resolved_bounds(&self) -> (f64, f64) {
        if !self.symmetric {
            return (self.min, self.max);
        }
        let pivot = self.color_scheme.pivot;
        let half = (self.max - pivot).abs().max((self.min - pivot).abs());
        (pivot - half, pivot + half)
    }
}
