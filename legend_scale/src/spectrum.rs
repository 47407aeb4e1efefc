// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color spectra: maps from a normalized position to a color.
//!
//! Built-in and user-defined spectra share one capability, [`Spectrum`]. Any
//! `Fn(f32) -> Color` is a spectrum, and [`ControlPoints`] covers the common
//! "list of colors at positions" case.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use peniko::Color;
use peniko::color::palette::css;

use crate::error::ScaleError;
use crate::request::ColorSchemeRef;

/// A monotone parametrization from `[0, 1]` to colors.
///
/// Implementations should clamp `t` into `[0, 1]`.
pub trait Spectrum {
    /// Samples the spectrum at `t`.
    fn sample(&self, t: f32) -> Color;
}

impl<F> Spectrum for F
where
    F: Fn(f32) -> Color,
{
    fn sample(&self, t: f32) -> Color {
        self(t.clamp(0.0, 1.0))
    }
}

/// A user-defined spectrum given as colors at increasing positions.
///
/// Colors are interpolated linearly (per sRGB channel) between neighboring points.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlPoints {
    points: Vec<(f32, Color)>,
}

impl ControlPoints {
    /// Creates a spectrum from `(position, color)` pairs.
    ///
    /// Points are sorted by position. Returns `None` when fewer than two points are given or
    /// a position is not finite.
    pub fn new(points: impl IntoIterator<Item = (f32, Color)>) -> Option<Self> {
        let mut points: Vec<(f32, Color)> = points.into_iter().collect();
        if points.len() < 2 || points.iter().any(|(t, _)| !t.is_finite()) {
            return None;
        }
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        Some(Self { points })
    }

    /// Creates a spectrum with colors spread evenly over `[0, 1]`.
    pub fn evenly_spaced(colors: impl IntoIterator<Item = Color>) -> Option<Self> {
        let colors: Vec<Color> = colors.into_iter().collect();
        let last = colors.len().checked_sub(1)?;
        Self::new(
            colors
                .into_iter()
                .enumerate()
                .map(|(i, c)| (i as f32 / last.max(1) as f32, c)),
        )
    }

    /// Returns the control points in position order.
    pub fn points(&self) -> &[(f32, Color)] {
        &self.points
    }
}

impl Spectrum for ControlPoints {
    fn sample(&self, t: f32) -> Color {
        sample_palette(&self.points, t)
    }
}

/// Linearly interpolates two colors per channel.
pub(crate) fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let [ar, ag, ab, aa] = a.components;
    let [br, bg, bb, ba] = b.components;
    Color::new([
        ar + (br - ar) * t,
        ag + (bg - ag) * t,
        ab + (bb - ab) * t,
        aa + (ba - aa) * t,
    ])
}

fn sample_palette(palette: &[(f32, Color)], t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let (Some(&(t_first, c_first)), Some(&(t_last, c_last))) = (palette.first(), palette.last())
    else {
        return css::BLACK;
    };
    if t <= t_first {
        return c_first;
    }
    if t >= t_last {
        return c_last;
    }
    for w in palette.windows(2) {
        let (t0, c0) = w[0];
        let (t1, c1) = w[1];
        if t >= t0 && t <= t1 {
            if t1 <= t0 {
                return c1;
            }
            return lerp_color(c0, c1, (t - t0) / (t1 - t0));
        }
    }
    c_last
}

/// A named collection of spectra.
///
/// Scheme references are resolved against a registry by name; see
/// [`SpectrumRegistry::with_builtins`] for the names available out of the box.
#[derive(Clone, Default)]
pub struct SpectrumRegistry {
    entries: HashMap<String, Arc<dyn Spectrum + Send + Sync>>,
}

impl fmt::Debug for SpectrumRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("SpectrumRegistry")
            .field("names", &names)
            .finish()
    }
}

impl SpectrumRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in schemes.
    ///
    /// Sequential: `Rainbow`, `Viridis`, `Plasma`, `Turbo`, `Heat`, `Grayscale`, `Cbs-cool`,
    /// `Cbs-warm`. Divergent: `Symmetric`, `RdBu`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("Rainbow", |t| sample_palette(&RAINBOW, t));
        registry.register("Viridis", |t| sample_palette(&VIRIDIS, t));
        registry.register("Plasma", |t| sample_palette(&PLASMA, t));
        registry.register("Turbo", |t| sample_palette(&TURBO, t));
        registry.register("Heat", |t| sample_palette(&HEAT, t));
        registry.register("Grayscale", |t: f32| Color::new([t, t, t, 1.0]));
        registry.register("Cbs-cool", |t| sample_palette(&CBS_COOL, t));
        registry.register("Cbs-warm", |t| sample_palette(&CBS_WARM, t));
        registry.register("Symmetric", symmetric);
        registry.register("RdBu", |t| sample_palette(&RD_BU, t));
        registry
    }

    /// Registers (or replaces) a spectrum under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        spectrum: impl Spectrum + Send + Sync + 'static,
    ) -> &mut Self {
        self.entries.insert(name.into(), Arc::new(spectrum));
        self
    }

    /// Looks up a spectrum by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Spectrum + Send + Sync>> {
        self.entries.get(name).cloned()
    }

    /// Returns `true` if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Resolves the spectrum for `scheme`: its custom spectrum if any, else the registered
    /// one with the same name.
    pub fn resolve(
        &self,
        scheme: &ColorSchemeRef,
    ) -> Result<Arc<dyn Spectrum + Send + Sync>, ScaleError> {
        if let Some(custom) = &scheme.custom {
            return Ok(Arc::clone(custom));
        }
        self.get(&scheme.name)
            .ok_or_else(|| ScaleError::UnknownColorScheme {
                name: scheme.name.clone(),
            })
    }
}

/// Neutral color at the divergent pivot.
pub const NEUTRAL: Color = css::WHITE;

const SYMMETRIC_LOW: Color = Color::from_rgb8(0x00, 0x00, 0x7f);
const SYMMETRIC_LOW_LIGHT: Color = Color::from_rgb8(0x99, 0xbb, 0xff);
const SYMMETRIC_HIGH_LIGHT: Color = Color::from_rgb8(0xff, 0xbb, 0x99);
const SYMMETRIC_HIGH: Color = Color::from_rgb8(0x7f, 0x00, 0x00);

/// Dark blue to light blue below 0.5, neutral at 0.5, light red to dark red above.
fn symmetric(t: f32) -> Color {
    if t < 0.5 {
        lerp_color(SYMMETRIC_LOW, SYMMETRIC_LOW_LIGHT, t / 0.5)
    } else if t > 0.5 {
        lerp_color(SYMMETRIC_HIGH_LIGHT, SYMMETRIC_HIGH, (t - 0.5) / 0.5)
    } else {
        NEUTRAL
    }
}

const RAINBOW: [(f32, Color); 5] = [
    (0.0, Color::from_rgb8(0x00, 0x00, 0xff)),
    (0.25, Color::from_rgb8(0x00, 0xff, 0xff)),
    (0.5, Color::from_rgb8(0x00, 0xff, 0x00)),
    (0.75, Color::from_rgb8(0xff, 0xff, 0x00)),
    (1.0, Color::from_rgb8(0xff, 0x00, 0x00)),
];

const VIRIDIS: [(f32, Color); 6] = [
    (0.0, Color::new([0.267, 0.004, 0.329, 1.0])),
    (0.25, Color::new([0.282, 0.140, 0.458, 1.0])),
    (0.5, Color::new([0.204, 0.286, 0.469, 1.0])),
    (0.6, Color::new([0.128, 0.400, 0.369, 1.0])),
    (0.75, Color::new([0.527, 0.510, 0.149, 1.0])),
    (1.0, Color::new([0.993, 0.906, 0.144, 1.0])),
];

const PLASMA: [(f32, Color); 6] = [
    (0.0, Color::new([0.050, 0.030, 0.530, 1.0])),
    (0.25, Color::new([0.275, 0.005, 0.610, 1.0])),
    (0.5, Color::new([0.553, 0.027, 0.416, 1.0])),
    (0.6, Color::new([0.764, 0.190, 0.217, 1.0])),
    (0.75, Color::new([0.960, 0.380, 0.113, 1.0])),
    (1.0, Color::new([0.940, 0.975, 0.131, 1.0])),
];

const TURBO: [(f32, Color); 7] = [
    (0.0, Color::new([0.180, 0.070, 0.450, 1.0])),
    (0.2, Color::new([0.000, 0.300, 0.740, 1.0])),
    (0.4, Color::new([0.000, 0.780, 0.870, 1.0])),
    (0.5, Color::new([0.000, 0.980, 0.600, 1.0])),
    (0.6, Color::new([0.850, 0.970, 0.110, 1.0])),
    (0.8, Color::new([0.970, 0.430, 0.000, 1.0])),
    (1.0, Color::new([0.880, 0.000, 0.000, 1.0])),
];

const HEAT: [(f32, Color); 5] = [
    (0.0, Color::new([0.0, 0.0, 0.0, 1.0])),
    (0.25, Color::new([0.5, 0.0, 0.0, 1.0])),
    (0.5, Color::new([1.0, 0.0, 0.0, 1.0])),
    (0.75, Color::new([1.0, 0.5, 0.0, 1.0])),
    (1.0, Color::new([1.0, 1.0, 0.0, 1.0])),
];

// ColorBrewer Blues / Reds, light to dark.
const CBS_COOL: [(f32, Color); 5] = [
    (0.0, Color::from_rgb8(0xef, 0xf3, 0xff)),
    (0.25, Color::from_rgb8(0xbd, 0xd7, 0xe7)),
    (0.5, Color::from_rgb8(0x6b, 0xae, 0xd6)),
    (0.75, Color::from_rgb8(0x31, 0x82, 0xbd)),
    (1.0, Color::from_rgb8(0x08, 0x51, 0x9c)),
];

const CBS_WARM: [(f32, Color); 5] = [
    (0.0, Color::from_rgb8(0xfe, 0xe5, 0xd9)),
    (0.25, Color::from_rgb8(0xfc, 0xae, 0x91)),
    (0.5, Color::from_rgb8(0xfb, 0x6a, 0x4a)),
    (0.75, Color::from_rgb8(0xde, 0x2d, 0x26)),
    (1.0, Color::from_rgb8(0xa5, 0x0f, 0x15)),
];

const RD_BU: [(f32, Color); 7] = [
    (0.0, Color::from_rgb8(0xb2, 0x18, 0x2b)),
    (1.0 / 6.0, Color::from_rgb8(0xef, 0x8a, 0x62)),
    (2.0 / 6.0, Color::from_rgb8(0xfd, 0xdb, 0xc7)),
    (0.5, Color::from_rgb8(0xf7, 0xf7, 0xf7)),
    (4.0 / 6.0, Color::from_rgb8(0xd1, 0xe5, 0xf0)),
    (5.0 / 6.0, Color::from_rgb8(0x67, 0xa9, 0xcf)),
    (1.0, Color::from_rgb8(0x21, 0x66, 0xac)),
];

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn builtins_are_registered() {
        let registry = SpectrumRegistry::with_builtins();
        for name in [
            "Rainbow",
            "Viridis",
            "Plasma",
            "Turbo",
            "Heat",
            "Grayscale",
            "Cbs-cool",
            "Cbs-warm",
            "Symmetric",
            "RdBu",
        ] {
            assert!(registry.contains(name), "missing {name}");
        }
        assert!(registry.get("Jet").is_none());
    }

    #[test]
    fn samples_clamp_out_of_range_positions() {
        let registry = SpectrumRegistry::with_builtins();
        let rainbow = registry.get("Rainbow").unwrap();
        assert_eq!(rainbow.sample(-1.0), rainbow.sample(0.0));
        assert_eq!(rainbow.sample(2.0), rainbow.sample(1.0));
        assert_eq!(rainbow.sample(0.0).to_rgba8().b, 0xff);
        assert_eq!(rainbow.sample(1.0).to_rgba8().r, 0xff);
    }

    #[test]
    fn symmetric_is_neutral_at_the_middle_and_saturated_at_the_ends() {
        assert_eq!(symmetric(0.5), NEUTRAL);
        assert_eq!(symmetric(0.0), SYMMETRIC_LOW);
        assert_eq!(symmetric(1.0), SYMMETRIC_HIGH);
        assert_ne!(symmetric(0.0), symmetric(1.0));
    }

    #[test]
    fn control_points_interpolate_between_neighbors() {
        let spectrum = ControlPoints::new(vec![
            (1.0, css::WHITE),
            (0.0, css::BLACK),
        ])
        .unwrap();
        assert_eq!(spectrum.points()[0].1, css::BLACK);
        let mid = spectrum.sample(0.5).to_rgba8();
        assert!((i32::from(mid.r) - 128).abs() <= 1);
        assert_eq!(mid.r, mid.g);
        assert!(ControlPoints::new(vec![(0.0, css::BLACK)]).is_none());
    }

    #[test]
    fn evenly_spaced_points_cover_unit_interval() {
        let spectrum =
            ControlPoints::evenly_spaced([css::BLACK, css::WHITE, css::BLACK]).unwrap();
        let positions: std::vec::Vec<f32> = spectrum.points().iter().map(|p| p.0).collect();
        assert_eq!(positions, [0.0, 0.5, 1.0]);
        assert_eq!(spectrum.sample(0.5), css::WHITE);
    }

    #[test]
    fn custom_spectrum_wins_over_registry() {
        let registry = SpectrumRegistry::with_builtins();
        let scheme = ColorSchemeRef::sequential("Rainbow").with_custom(|_t: f32| css::WHITE);
        assert_eq!(registry.resolve(&scheme).unwrap().sample(0.0), css::WHITE);

        let unknown = ColorSchemeRef::sequential("Jet");
        assert_eq!(
            registry.resolve(&unknown).err(),
            Some(ScaleError::UnknownColorScheme {
                name: "Jet".into()
            })
        );
    }

    #[test]
    fn closures_are_spectra() {
        let mut registry = SpectrumRegistry::new();
        registry.register("Flat", |_t: f32| css::WHITE);
        assert_eq!(registry.get("Flat").unwrap().sample(0.3), css::WHITE);
    }
}
