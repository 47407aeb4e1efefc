// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Settings persisted as one JSON document.
//!
//! The document maps each field key to its [`FieldSettings`] and carries one reserved
//! `" meta"` entry:
//!
//! ```json
//! {
//!   " meta": {
//!     "description": "Recently used legend settings by field output",
//!     "ignore": false
//!   },
//!   "S Mises": {
//!     "colormap": "Rainbow",
//!     "guide": 15,
//!     ...
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;
use crate::key::FieldKey;
use crate::record::FieldSettings;
use crate::store::SettingsStore;

/// Reserved document key holding [`StoreMeta`].
pub const META_KEY: &str = " meta";

const DESCRIPTION: &str = "Recently used legend settings by field output";

/// Store-wide options kept in the `" meta"` entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreMeta {
    /// Disables recall and stops saves from reaching the disk.
    #[serde(default)]
    pub ignore: bool,
    /// Human-readable note for anyone opening the file.
    #[serde(default = "default_description")]
    pub description: String,
}

impl Default for StoreMeta {
    fn default() -> Self {
        Self {
            ignore: false,
            description: default_description(),
        }
    }
}

fn default_description() -> String {
    DESCRIPTION.to_string()
}

#[derive(Clone, Debug, Default)]
struct Document {
    meta: StoreMeta,
    records: BTreeMap<FieldKey, FieldSettings>,
}

/// A [`SettingsStore`] backed by a JSON file.
///
/// The file is read once on open. Every save rewrites the whole document through a sibling
/// temporary file and a rename, while holding the store lock.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    doc: Mutex<Document>,
}

impl JsonFileStore {
    /// Opens the store at `path`.
    ///
    /// A missing file starts an empty store. An unreadable or malformed file also starts
    /// empty (with a warning); it is replaced on the next save. Malformed records are skipped.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = read_document(&path);
        tracing::debug!(
            path = %path.display(),
            records = doc.records.len(),
            ignore = doc.meta.ignore,
            "opened settings store"
        );
        Self {
            path,
            doc: Mutex::new(doc),
        }
    }

    /// Opens the store at [`default_path`].
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::open(default_path()?))
    }

    /// Returns the settings file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the current store options.
    pub fn meta(&self) -> StoreMeta {
        self.doc.lock().meta.clone()
    }

    /// Sets the `ignore` flag and writes it to disk.
    ///
    /// The flag is left unchanged when the write fails.
    pub fn set_ignore(&self, ignore: bool) -> Result<(), StoreError> {
        let mut doc = self.doc.lock();
        let mut next = doc.clone();
        next.meta.ignore = ignore;
        write_document(&self.path, &next)?;
        *doc = next;
        Ok(())
    }

    /// Returns the keys with saved records, in order.
    pub fn keys(&self) -> Vec<FieldKey> {
        self.doc.lock().records.keys().cloned().collect()
    }
}

impl SettingsStore for JsonFileStore {
    fn load(&self, key: &FieldKey) -> Option<FieldSettings> {
        let doc = self.doc.lock();
        if doc.meta.ignore {
            return None;
        }
        doc.records.get(key).cloned()
    }

    fn save(&self, key: &FieldKey, record: &FieldSettings) -> Result<(), StoreError> {
        let mut doc = self.doc.lock();
        if doc.meta.ignore {
            doc.records.insert(key.clone(), record.clone());
            tracing::debug!(key = %key, "settings store ignored; not writing");
            return Ok(());
        }
        // Memory only changes once the file does.
        let mut next = doc.clone();
        next.records.insert(key.clone(), record.clone());
        write_document(&self.path, &next)?;
        *doc = next;
        tracing::debug!(key = %key, path = %self.path.display(), "saved settings");
        Ok(())
    }
}

/// Returns `<config dir>/legend_scale/settings.json`.
pub fn default_path() -> Result<PathBuf, StoreError> {
    let dir = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
    Ok(dir.join("legend_scale").join("settings.json"))
}

fn read_document(path: &Path) -> Document {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Document::default(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "cannot read settings file");
            return Document::default();
        }
    };
    let entries: BTreeMap<String, Value> = match serde_json::from_str(&text) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "malformed settings file");
            return Document::default();
        }
    };

    let mut doc = Document::default();
    for (name, value) in entries {
        if name == META_KEY {
            match serde_json::from_value(value) {
                Ok(meta) => doc.meta = meta,
                Err(err) => tracing::warn!(error = %err, "malformed settings meta entry"),
            }
            continue;
        }
        match serde_json::from_value::<FieldSettings>(value) {
            Ok(record) => {
                doc.records.insert(FieldKey::new(&name), record);
            }
            Err(err) => {
                tracing::warn!(key = %name, error = %err, "skipping malformed settings record");
            }
        }
    }
    doc
}

fn write_document(path: &Path, doc: &Document) -> Result<(), StoreError> {
    let mut entries: BTreeMap<String, Value> = BTreeMap::new();
    entries.insert(META_KEY.to_string(), serde_json::to_value(&doc.meta)?);
    for (key, record) in &doc.records {
        entries.insert(key.as_str().to_string(), serde_json::to_value(record)?);
    }
    let json = serde_json::to_string_pretty(&entries)?;

    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, json.as_bytes()).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
