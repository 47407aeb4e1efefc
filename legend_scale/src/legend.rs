// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend assembly: ticks, band colors, label format and outside-limit colors together.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::color_map::{ColorBand, map_colors};
use crate::error::ScaleError;
use crate::format::TickFormat;
use crate::linear::plan_linear;
use crate::log::plan_log;
use crate::request::{ScaleMode, ScaleRequest, SchemeFamily};
use crate::spectrum::SpectrumRegistry;
use crate::ticks::TickSet;

/// Dark blue used for values below a legend.
pub const OUTSIDE_LOW: Color = Color::from_rgb8(0x00, 0x00, 0x80);
/// Dark red used for values above a legend.
pub const OUTSIDE_HIGH: Color = Color::from_rgb8(0x80, 0x00, 0x00);
/// Light grey used below one-signed sequential legends.
pub const OUTSIDE_MUTED: Color = Color::from_rgb8(0xcc, 0xcc, 0xcc);

/// Colors for values outside the legend range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutsideColors {
    /// Color for values below the first tick.
    pub below: Color,
    /// Color for values above the last tick.
    pub above: Color,
}

impl OutsideColors {
    /// Picks outside colors for `req`.
    ///
    /// Sequential, non-reversed legends whose range does not cross zero get a muted grey
    /// below; everything else gets dark blue below and dark red above. Reversed schemes swap
    /// the pair.
    pub fn for_request(req: &ScaleRequest) -> Self {
        let scheme = &req.color_scheme;
        let (min, max) = req.resolved_bounds();
        let one_signed = min * max >= 0.0;
        let below = if scheme.family == SchemeFamily::Sequential && one_signed && !scheme.reversed
        {
            OUTSIDE_MUTED
        } else {
            OUTSIDE_LOW
        };
        let mut out = Self {
            below,
            above: OUTSIDE_HIGH,
        };
        if scheme.reversed {
            core::mem::swap(&mut out.below, &mut out.above);
        }
        out
    }
}

/// A legend swatch: a label and its fill.
#[derive(Clone, Debug)]
pub struct LegendItem {
    /// Band label, e.g. `"0 .. 20"`.
    pub label: String,
    /// Swatch fill.
    pub fill: Brush,
}

impl LegendItem {
    /// Convenience constructor for a solid-color swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            fill: Brush::Solid(color),
        }
    }
}

/// A computed legend scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    /// Tick values (band boundaries).
    pub ticks: TickSet,
    /// One color per band, lowest first.
    pub bands: Vec<ColorBand>,
    /// Label format for the ticks.
    pub format: TickFormat,
    /// Colors for values outside the tick range.
    pub outside: OutsideColors,
}

impl Legend {
    /// Computes ticks and colors for `req`.
    ///
    /// Divergent schemes may add a tick at the pivot; `ticks` always matches the band
    /// boundaries.
    pub fn compute(req: &ScaleRequest, registry: &SpectrumRegistry) -> Result<Self, ScaleError> {
        let planned = match req.mode {
            ScaleMode::Linear => plan_linear(req)?,
            ScaleMode::Logarithmic => plan_log(req)?,
        };
        let bands = map_colors(&planned, &req.color_scheme, registry)?;
        let ticks = if bands.len() == planned.band_count() {
            planned
        } else {
            let boundaries = bands
                .iter()
                .map(|b| b.lower)
                .chain(bands.last().map(|b| b.upper));
            TickSet::new(boundaries, planned.mode(), planned.step())
        };
        let format = TickFormat::for_ticks(&ticks);
        let outside = OutsideColors::for_request(req);
        tracing::debug!(
            ticks = ticks.len(),
            bands = bands.len(),
            decimals = format.decimals,
            "computed legend"
        );
        Ok(Self {
            ticks,
            bands,
            format,
            outside,
        })
    }

    /// Returns one formatted label per tick.
    pub fn labels(&self) -> Vec<String> {
        self.ticks
            .values()
            .iter()
            .map(|&v| self.format.format(v))
            .collect()
    }

    /// Returns one swatch per band, labeled `"lower .. upper"`.
    pub fn items(&self) -> Vec<LegendItem> {
        self.bands
            .iter()
            .map(|b| {
                let label = format!(
                    "{} .. {}",
                    self.format.format(b.lower),
                    self.format.format(b.upper)
                );
                LegendItem::solid(label, b.color)
            })
            .collect()
    }

    /// Returns the color for `value`, using the outside colors beyond the tick range.
    pub fn color_for(&self, value: f64) -> Color {
        match (self.bands.first(), self.bands.last()) {
            (Some(first), _) if value < first.lower => self.outside.below,
            (_, Some(last)) if value > last.upper => self.outside.above,
            _ => {
                let idx = self.bands.partition_point(|b| b.upper < value);
                self.bands
                    .get(idx)
                    .map_or(css::TRANSPARENT, |b| b.color)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::request::ColorSchemeRef;

    #[test]
    fn outside_colors_follow_scheme_and_sign() {
        let req = ScaleRequest::new(0.0, 10.0);
        let out = OutsideColors::for_request(&req);
        assert_eq!(out.below, OUTSIDE_MUTED);
        assert_eq!(out.above, OUTSIDE_HIGH);

        let req = ScaleRequest::new(-1.0, 10.0);
        assert_eq!(OutsideColors::for_request(&req).below, OUTSIDE_LOW);

        let req = ScaleRequest::new(0.0, 10.0)
            .with_color_scheme(ColorSchemeRef::sequential("Rainbow").with_reversed(true));
        let out = OutsideColors::for_request(&req);
        assert_eq!(out.below, OUTSIDE_HIGH);
        assert_eq!(out.above, OUTSIDE_LOW);

        let req = ScaleRequest::new(1.0, 10.0)
            .with_color_scheme(ColorSchemeRef::divergent("Symmetric"));
        assert_eq!(OutsideColors::for_request(&req).below, OUTSIDE_LOW);
    }

    #[test]
    fn items_label_each_band() {
        let registry = SpectrumRegistry::with_builtins();
        let req = ScaleRequest::new(0.0, 100.0)
            .with_target_ticks(6)
            .with_exact(true, true);
        let legend = Legend::compute(&req, &registry).unwrap();
        let items = legend.items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].label, "0 .. 20");
        assert_eq!(items[4].label, "80 .. 100");
        assert_eq!(items[0].fill, Brush::Solid(legend.bands[0].color));
        assert_eq!(legend.labels(), ["0", "20", "40", "60", "80", "100"]);
    }

    #[test]
    fn color_lookup_uses_bands_and_outside_colors() {
        let registry = SpectrumRegistry::with_builtins();
        let req = ScaleRequest::new(0.0, 100.0)
            .with_target_ticks(6)
            .with_exact(true, true);
        let legend = Legend::compute(&req, &registry).unwrap();
        assert_eq!(legend.color_for(-1.0), legend.outside.below);
        assert_eq!(legend.color_for(101.0), legend.outside.above);
        assert_eq!(legend.color_for(10.0), legend.bands[0].color);
        assert_eq!(legend.color_for(20.0), legend.bands[0].color);
        assert_eq!(legend.color_for(99.0), legend.bands[4].color);
    }
}
