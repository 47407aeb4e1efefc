// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a field output, used as the settings key.
///
/// Keys are trimmed, so they never collide with the reserved `" meta"` entry of
/// [`JsonFileStore`](crate::JsonFileStore).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey(String);

impl FieldKey {
    /// Creates a key from an arbitrary identifier.
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(key.as_ref().trim().to_string())
    }

    /// Builds a key from a field name and an optional component (e.g. `"S"`, `"Mises"`).
    ///
    /// Empty parts are skipped, so `from_parts("U", "")` is just `"U"`.
    pub fn from_parts(name: &str, component: &str) -> Self {
        let parts: Vec<&str> = [name.trim(), component.trim()]
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect();
        Self(parts.join(" "))
    }

    /// Narrows the key to one analysis step or frame.
    pub fn with_step(self, step: &str) -> Self {
        let step = step.trim();
        if step.is_empty() {
            return self;
        }
        Self(format!("{} @ {step}", self.0))
    }

    /// Returns the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}
