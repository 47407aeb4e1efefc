// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-field persistence of legend settings.
//!
//! Hosts remember the last legend a user chose for each field output and bring it back
//! when that field is shown again:
//! - [`FieldKey`] identifies a field output.
//! - [`FieldSettings`] is the persisted record.
//! - [`SettingsStore`] is the storage seam, with an in-memory ([`MemoryStore`]) and a
//!   JSON-file ([`JsonFileStore`]) implementation.
//! - [`LegendManager`] ties a store to [`legend_scale`]: compute, apply (compute + save) and
//!   recall.
//!
//! ```
//! use legend_scale::ScaleRequest;
//! use legend_scale_store::{FieldKey, LegendManager, MemoryStore};
//!
//! let manager = LegendManager::new(MemoryStore::new());
//! let key = FieldKey::from_parts("S", "Mises");
//! let applied = manager.apply(&key, &ScaleRequest::new(0.0, 250.0)).unwrap();
//! let recalled = manager.recall(&key).unwrap().unwrap();
//! assert_eq!(recalled, applied);
//! ```

mod error;
mod json_store;
mod key;
mod manager;
mod record;
mod store;

pub use error::{ManagerError, StoreError};
pub use json_store::{JsonFileStore, META_KEY, StoreMeta, default_path};
pub use key::FieldKey;
pub use manager::LegendManager;
pub use record::{DEFAULT_COLORMAP, DEFAULT_GUIDE, FieldSettings, StoredFamily};
pub use store::{MemoryStore, SettingsStore};
