// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend scale demos for `legend_scale`.
//!
//! Writes `legend_scale_demo.html` (one SVG legend per section) and
//! `legend_scale_demo_settings.json` (the settings saved by the recall demo) to the working
//! directory. Set `RUST_LOG=debug` to follow the planners.

mod html;
mod svg;

use std::error::Error;

use legend_scale::{
    ColorSchemeRef, ControlPoints, Legend, ScaleRequest, SpectrumRegistry, TickFormat,
};
use legend_scale_store::{FieldKey, JsonFileStore, LegendManager};
use peniko::Color;

const REPORT_PATH: &str = "legend_scale_demo.html";
const SETTINGS_PATH: &str = "legend_scale_demo_settings.json";

fn main() -> Result<(), Box<dyn Error>> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let registry = SpectrumRegistry::with_builtins();
    let mut sections = vec![
        legend_section(
            "Linear, exact limits",
            ScaleRequest::new(0.0, 100.0)
                .with_target_ticks(6)
                .with_exact(true, true),
            &registry,
        ),
        legend_section(
            "Linear, rounded limits",
            ScaleRequest::new(3.7, 96.2)
                .with_target_ticks(6)
                .with_color_scheme(ColorSchemeRef::sequential("Viridis")),
            &registry,
        ),
        legend_section(
            "Linear, irregular end bands",
            ScaleRequest::new(3.0, 97.0)
                .with_target_ticks(6)
                .with_exact(true, true)
                .with_color_scheme(ColorSchemeRef::sequential("Cbs-cool")),
            &registry,
        ),
        legend_section(
            "Log, one tick per decade",
            ScaleRequest::log(1.0, 10_000.0)
                .with_target_ticks(5)
                .with_color_scheme(ColorSchemeRef::sequential("Plasma")),
            &registry,
        ),
        legend_section(
            "Log, narrow range",
            ScaleRequest::log(0.15, 0.9)
                .with_target_ticks(5)
                .with_color_scheme(ColorSchemeRef::sequential("Heat")),
            &registry,
        ),
        legend_section(
            "Log, strided decades",
            ScaleRequest::log(1e-10, 1e10)
                .with_target_ticks(5)
                .with_color_scheme(ColorSchemeRef::sequential("Turbo")),
            &registry,
        ),
        legend_section(
            "Symmetric around zero",
            ScaleRequest::new(-3.0, 17.0)
                .with_target_ticks(9)
                .with_symmetric(true)
                .with_color_scheme(ColorSchemeRef::divergent("Symmetric")),
            &registry,
        ),
        legend_section(
            "Divergent, pivot between ticks",
            ScaleRequest::new(-10.0, 10.0)
                .with_target_ticks(5)
                .with_color_scheme(ColorSchemeRef::divergent("RdBu").with_pivot(1.0)),
            &registry,
        ),
        legend_section(
            "Reversed",
            ScaleRequest::new(0.0, 1.0)
                .with_color_scheme(ColorSchemeRef::sequential("Cbs-warm").with_reversed(true)),
            &registry,
        ),
    ];
    if let Some(sunset) = sunset() {
        sections.push(legend_section(
            "Custom control points",
            ScaleRequest::new(-0.5, 2.5)
                .with_target_ticks(7)
                .with_color_scheme(ColorSchemeRef::sequential("Sunset").with_custom(sunset)),
            &registry,
        ));
    }
    sections.push(legend_section("Degenerate range", ScaleRequest::new(4.0, 4.0), &registry));
    sections.push(recall_section()?);

    let html = html::render_report("Legend scale demo", &sections);
    std::fs::write(REPORT_PATH, html)?;
    tracing::info!(path = REPORT_PATH, sections = sections.len(), "wrote report");
    Ok(())
}

fn legend_section(
    title: &'static str,
    req: ScaleRequest,
    registry: &SpectrumRegistry,
) -> html::HtmlSection {
    match Legend::compute(&req, registry) {
        Ok(legend) => html::HtmlSection {
            title,
            description: describe(&req, &legend),
            svg: svg::legend_svg(&legend),
        },
        Err(err) => {
            tracing::warn!(title, error = %err, "legend not computed");
            html::HtmlSection {
                title,
                description: format!("No legend: {err}."),
                svg: String::new(),
            }
        }
    }
}

fn describe(req: &ScaleRequest, legend: &Legend) -> String {
    let TickFormat { notation, decimals } = legend.format;
    format!(
        "Data {} .. {} with {} ({:?}), target {} ticks: {} ticks, {:?} labels with {} decimals.",
        req.min,
        req.max,
        req.color_scheme.name,
        req.color_scheme.family,
        req.target(),
        legend.ticks.len(),
        notation,
        decimals,
    )
}

fn sunset() -> Option<ControlPoints> {
    ControlPoints::new([
        (0.0, Color::from_rgb8(0x2d, 0x1e, 0x5f)),
        (0.4, Color::from_rgb8(0xc0, 0x39, 0x6b)),
        (0.7, Color::from_rgb8(0xf4, 0x8c, 0x3a)),
        (1.0, Color::from_rgb8(0xfc, 0xe9, 0x8f)),
    ])
}

/// Applies a request through a file-backed store, then recalls it from a fresh store.
fn recall_section() -> Result<html::HtmlSection, Box<dyn Error>> {
    let key = FieldKey::from_parts("S", "Mises").with_step("Step-1");
    let req = ScaleRequest::new(12.5, 318.0)
        .with_target_ticks(8)
        .with_exact(false, true)
        .with_color_scheme(ColorSchemeRef::sequential("Rainbow"));

    let manager = LegendManager::new(JsonFileStore::open(SETTINGS_PATH));
    manager.apply(&key, &req)?;

    let reopened = LegendManager::new(JsonFileStore::open(SETTINGS_PATH));
    let Some(recalled) = reopened.recall(&key) else {
        return Ok(html::HtmlSection {
            title: "Recalled settings",
            description: format!("Nothing saved for {key}."),
            svg: String::new(),
        });
    };
    let legend = recalled?;
    Ok(html::HtmlSection {
        title: "Recalled settings",
        description: format!(
            "Saved for \"{key}\" in {SETTINGS_PATH}, then recalled: {}",
            describe(&req, &legend)
        ),
        svg: svg::legend_svg(&legend),
    })
}
