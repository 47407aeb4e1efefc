// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::StoreError;
use crate::key::FieldKey;
use crate::record::FieldSettings;

/// Keyed persistence of last-used legend settings.
///
/// A missing key is `None`, never an error. Saving overwrites (last write wins) and stores
/// the record as given, without validating it.
pub trait SettingsStore {
    /// Returns the record saved under `key`, if any.
    fn load(&self, key: &FieldKey) -> Option<FieldSettings>;

    /// Saves `record` under `key`.
    fn save(&self, key: &FieldKey, record: &FieldSettings) -> Result<(), StoreError>;
}

impl<S: SettingsStore + ?Sized> SettingsStore for &S {
    fn load(&self, key: &FieldKey) -> Option<FieldSettings> {
        (**self).load(key)
    }

    fn save(&self, key: &FieldKey, record: &FieldSettings) -> Result<(), StoreError> {
        (**self).save(key, record)
    }
}

impl<S: SettingsStore + ?Sized> SettingsStore for Arc<S> {
    fn load(&self, key: &FieldKey) -> Option<FieldSettings> {
        (**self).load(key)
    }

    fn save(&self, key: &FieldKey, record: &FieldSettings) -> Result<(), StoreError> {
        (**self).save(key, record)
    }
}

/// A process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<FieldKey, FieldSettings>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of saved records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Returns `true` if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self, key: &FieldKey) -> Option<FieldSettings> {
        self.records.lock().get(key).cloned()
    }

    fn save(&self, key: &FieldKey, record: &FieldSettings) -> Result<(), StoreError> {
        self.records.lock().insert(key.clone(), record.clone());
        tracing::debug!(key = %key, "saved settings in memory");
        Ok(())
    }
}
