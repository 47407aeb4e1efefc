// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG rendering of legends for `legend_scale_demo`.

use legend_scale::{Legend, LegendItem};
use peniko::Brush;
use peniko::color::palette::css;

const SWATCH_W: f64 = 28.0;
const SWATCH_H: f64 = 18.0;
const OUTSIDE_H: f64 = 8.0;
const FONT_SIZE: f64 = 11.0;
const PAD: f64 = 6.0;
const WIDTH: f64 = 240.0;

/// Renders a vertical legend: highest band on top, with the outside colors as thin bars
/// above and below.
pub(crate) fn legend_svg(legend: &Legend) -> String {
    let items = legend.items();
    let height = 2.0 * (OUTSIDE_H + PAD) + SWATCH_H * items.len() as f64;
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {WIDTH} {height}" width="{WIDTH}" height="{height}">"#
    ));
    out.push('\n');

    write_rect(&mut out, 0.0, 0.0, OUTSIDE_H, &Brush::Solid(legend.outside.above));
    let top = OUTSIDE_H + PAD;
    for (row, item) in items.iter().rev().enumerate() {
        let y = top + SWATCH_H * row as f64;
        write_item(&mut out, y, item);
    }
    let bottom = top + SWATCH_H * items.len() as f64 + PAD;
    write_rect(&mut out, 0.0, bottom, OUTSIDE_H, &Brush::Solid(legend.outside.below));

    out.push_str("</svg>\n");
    out
}

fn write_item(out: &mut String, y: f64, item: &LegendItem) {
    write_rect(out, 0.0, y, SWATCH_H, &item.fill);
    out.push_str(&format!(
        r#"<text x="{}" y="{}" font-size="{FONT_SIZE}" dominant-baseline="middle""#,
        SWATCH_W + PAD,
        y + SWATCH_H / 2.0,
    ));
    write_paint_attr(out, "fill", &Brush::Solid(css::BLACK));
    out.push('>');
    out.push_str(&escape_xml(&item.label));
    out.push_str("</text>\n");
}

fn write_rect(out: &mut String, x: f64, y: f64, h: f64, fill: &Brush) {
    out.push_str(&format!(
        r#"<rect x="{x}" y="{y}" width="{SWATCH_W}" height="{h}""#
    ));
    write_paint_attr(out, "fill", fill);
    out.push_str("/>\n");
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
