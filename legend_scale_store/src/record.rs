// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use legend_scale::{ColorSchemeRef, ScaleMode, ScaleRequest, SchemeFamily};
use serde::{Deserialize, Serialize};

/// Scheme used when a record names none.
pub const DEFAULT_COLORMAP: &str = "Rainbow";

/// Interval count used when a record has no `guide`.
pub const DEFAULT_GUIDE: usize = 15;

/// Persisted color scheme family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoredFamily {
    /// See [`SchemeFamily::Sequential`].
    Sequential,
    /// See [`SchemeFamily::Divergent`].
    Divergent,
}

impl From<SchemeFamily> for StoredFamily {
    fn from(family: SchemeFamily) -> Self {
        match family {
            SchemeFamily::Sequential => Self::Sequential,
            SchemeFamily::Divergent => Self::Divergent,
        }
    }
}

impl From<StoredFamily> for SchemeFamily {
    fn from(family: StoredFamily) -> Self {
        match family {
            StoredFamily::Sequential => Self::Sequential,
            StoredFamily::Divergent => Self::Divergent,
        }
    }
}

/// The last-used legend settings for one field.
///
/// Field names match the on-disk format of existing settings files. Records written before
/// `family`, `pivot` and `symmetric` existed are read with those inferred from the scheme
/// name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSettings {
    /// Upper data bound.
    pub max_value: f64,
    /// Lower data bound.
    pub min_value: f64,
    /// Target number of intervals (one less than the tick target).
    #[serde(default = "default_guide")]
    pub guide: usize,
    /// Whether the color ramp runs high-to-low.
    #[serde(default)]
    pub reverse: bool,
    /// Whether the last tick equals `max_value` exactly.
    #[serde(default)]
    pub max_exact: bool,
    /// Whether the first tick equals `min_value` exactly.
    #[serde(default)]
    pub min_exact: bool,
    /// Scheme name; `None` means [`DEFAULT_COLORMAP`].
    #[serde(default)]
    pub colormap: Option<String>,
    /// Whether ticks are logarithmic.
    #[serde(default)]
    pub log: bool,
    /// Scheme family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<StoredFamily>,
    /// Divergent pivot.
    #[serde(default)]
    pub pivot: f64,
    /// Whether the range is mirrored around the pivot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symmetric: Option<bool>,
}

fn default_guide() -> usize {
    DEFAULT_GUIDE
}

impl FieldSettings {
    /// Captures the persistable parts of `req`.
    ///
    /// Custom spectra are stored by name only.
    pub fn from_request(req: &ScaleRequest) -> Self {
        let scheme = &req.color_scheme;
        Self {
            max_value: req.max,
            min_value: req.min,
            guide: req.target() - 1,
            reverse: scheme.reversed,
            max_exact: req.exact_max,
            min_exact: req.exact_min,
            colormap: Some(scheme.name.clone()),
            log: req.mode == ScaleMode::Logarithmic,
            family: Some(scheme.family.into()),
            pivot: scheme.pivot,
            symmetric: Some(req.symmetric),
        }
    }

    /// Rebuilds the request this record was saved from.
    pub fn to_request(&self) -> ScaleRequest {
        let name = self.colormap.as_deref().unwrap_or(DEFAULT_COLORMAP);
        let family = self.family.map_or_else(|| infer_family(name), SchemeFamily::from);
        let symmetric = self
            .symmetric
            .unwrap_or(family == SchemeFamily::Divergent && name == "Symmetric");
        let scheme = match family {
            SchemeFamily::Sequential => ColorSchemeRef::sequential(name),
            SchemeFamily::Divergent => ColorSchemeRef::divergent(name),
        }
        .with_reversed(self.reverse)
        .with_pivot(self.pivot);
        let mode = if self.log {
            ScaleMode::Logarithmic
        } else {
            ScaleMode::Linear
        };
        ScaleRequest::new(self.min_value, self.max_value)
            .with_mode(mode)
            .with_exact(self.min_exact, self.max_exact)
            .with_target_ticks(self.guide.saturating_add(1))
            .with_color_scheme(scheme)
            .with_symmetric(symmetric)
    }
}

fn infer_family(name: &str) -> SchemeFamily {
    match name {
        "Symmetric" | "RdBu" => SchemeFamily::Divergent,
        _ => SchemeFamily::Sequential,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_survives_a_record() {
        let req = ScaleRequest::log(0.5, 300.0)
            .with_exact(true, false)
            .with_target_ticks(8)
            .with_color_scheme(ColorSchemeRef::sequential("Viridis").with_reversed(true));
        let back = FieldSettings::from_request(&req).to_request();
        assert_eq!((back.min, back.max), (0.5, 300.0));
        assert_eq!(back.mode, ScaleMode::Logarithmic);
        assert!(back.exact_min && !back.exact_max);
        assert_eq!(back.target(), 8);
        assert_eq!(back.color_scheme.name, "Viridis");
        assert!(back.color_scheme.reversed);
        assert!(!back.symmetric);
    }

    #[test]
    fn legacy_records_use_on_disk_names() {
        let json = r#"{
            "colormap": "Symmetric",
            "guide": 15,
            "log": false,
            "maxExact": true,
            "maxValue": 250.0,
            "minExact": false,
            "minValue": -40.0,
            "reverse": false
        }"#;
        let record: FieldSettings = serde_json::from_str(json).unwrap();
        assert_eq!(record.guide, 15);
        assert!(record.max_exact);
        let req = record.to_request();
        assert_eq!(req.color_scheme.family, SchemeFamily::Divergent);
        assert!(req.symmetric);
        assert_eq!(req.target(), 16);
    }

    #[test]
    fn missing_colormap_falls_back_to_rainbow() {
        let json = r#"{"maxValue": 1.0, "minValue": 0.0, "colormap": null}"#;
        let record: FieldSettings = serde_json::from_str(json).unwrap();
        let req = record.to_request();
        assert_eq!(req.color_scheme.name, DEFAULT_COLORMAP);
        assert_eq!(req.color_scheme.family, SchemeFamily::Sequential);
        assert_eq!(req.target(), DEFAULT_GUIDE + 1);
    }

    #[test]
    fn serialized_names_are_camel_case() {
        let record = FieldSettings::from_request(&ScaleRequest::new(0.0, 1.0));
        let value = serde_json::to_value(&record).unwrap();
        for key in ["maxValue", "minValue", "guide", "maxExact", "minExact", "family"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["family"], "sequential");
    }
}
