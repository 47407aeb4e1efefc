// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend scales for contour plots.
//!
//! Given a data range and a scale mode, this crate plans a small set of human-readable tick
//! values and assigns each band between adjacent ticks a color from a spectrum:
//! - **Planners** ([`plan_linear`], [`plan_log`]) pick "nice" ticks that cover the range, or
//!   pin the first/last tick to the exact data limits on request.
//! - **Spectra** ([`Spectrum`], [`SpectrumRegistry`]) map `[0, 1]` to colors; built-in and
//!   user-defined spectra work the same way.
//! - **Color mapping** ([`map_colors`]) handles sequential schemes and divergent schemes
//!   mirrored around a pivot.
//! - [`Legend::compute`] runs the whole pipeline and adds a label format and outside-limit
//!   colors.
//!
//! Everything here is pure and synchronous. Rendering and persistence are left to the host.
//!
//! ```
//! use legend_scale::{Legend, ScaleRequest, SpectrumRegistry};
//!
//! let registry = SpectrumRegistry::with_builtins();
//! let req = ScaleRequest::new(0.0, 100.0)
//!     .with_target_ticks(6)
//!     .with_exact(true, true);
//! let legend = Legend::compute(&req, &registry).unwrap();
//! assert_eq!(legend.ticks.values(), &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
//! assert_eq!(legend.bands.len(), 5);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod color_map;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod legend;
mod linear;
mod log;
mod nice;
mod request;
mod spectrum;
mod ticks;

pub use color_map::{ColorBand, map_colors};
pub use error::ScaleError;
pub use format::{MAX_DECIMALS, Notation, TickFormat, significant_digits};
pub use legend::{Legend, LegendItem, OUTSIDE_HIGH, OUTSIDE_LOW, OUTSIDE_MUTED, OutsideColors};
pub use linear::plan_linear;
pub use log::plan_log;
pub use nice::{NICE_MANTISSAS, nice_step};
pub use request::{
    ColorSchemeRef, DEFAULT_TARGET_TICKS, MAX_TARGET_TICKS, MIN_TARGET_TICKS, ScaleMode,
    ScaleRequest, SchemeFamily,
};
pub use spectrum::{ControlPoints, NEUTRAL, Spectrum, SpectrumRegistry};
pub use ticks::TickSet;
