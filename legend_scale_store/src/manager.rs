// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use legend_scale::{Legend, ScaleError, ScaleRequest, SpectrumRegistry};

use crate::error::ManagerError;
use crate::key::FieldKey;
use crate::record::FieldSettings;
use crate::store::SettingsStore;

/// Computes legends and remembers the last request per field.
#[derive(Debug)]
pub struct LegendManager<S> {
    store: S,
    registry: SpectrumRegistry,
}

impl<S: SettingsStore> LegendManager<S> {
    /// Creates a manager over `store` with the built-in spectra.
    pub fn new(store: S) -> Self {
        Self {
            store,
            registry: SpectrumRegistry::with_builtins(),
        }
    }

    /// Replaces the spectrum registry.
    ///
    /// Recalled records name their scheme only, so custom spectra that should survive a
    /// recall need to be registered here.
    pub fn with_registry(mut self, registry: SpectrumRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Returns the settings store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the spectrum registry.
    pub fn registry(&self) -> &SpectrumRegistry {
        &self.registry
    }

    /// Computes the legend for `req` without touching the store.
    pub fn compute(&self, req: &ScaleRequest) -> Result<Legend, ScaleError> {
        Legend::compute(req, &self.registry)
    }

    /// Computes the legend for `req` and saves it as the last-used settings for `key`.
    ///
    /// The record is saved even when the computation fails; it is validated again on recall.
    pub fn apply(&self, key: &FieldKey, req: &ScaleRequest) -> Result<Legend, ManagerError> {
        let legend = self.compute(req);
        if let Err(err) = &legend {
            tracing::debug!(key = %key, error = %err, "legend computation failed; saving anyway");
        }
        self.store.save(key, &FieldSettings::from_request(req))?;
        Ok(legend?)
    }

    /// Recomputes the legend last applied for `key`.
    ///
    /// Returns `None` when nothing was saved for `key`.
    pub fn recall(&self, key: &FieldKey) -> Option<Result<Legend, ScaleError>> {
        let record = self.store.load(key)?;
        tracing::debug!(key = %key, "recalling saved settings");
        Some(self.compute(&record.to_request()))
    }
}
