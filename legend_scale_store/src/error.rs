// Copyright 2025 the Legend Scale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for settings persistence.

use std::fmt;
use std::path::PathBuf;

use legend_scale::ScaleError;

/// Errors that can occur while persisting settings.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the settings file failed.
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
    /// The settings document could not be serialized.
    Json(serde_json::Error),
    /// The platform has no per-user configuration directory.
    NoConfigDir,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "settings file '{}': {source}", path.display())
            }
            Self::Json(err) => write!(f, "settings serialization failed: {err}"),
            Self::NoConfigDir => write!(f, "no configuration directory available"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::NoConfigDir => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Errors returned by [`LegendManager::apply`](crate::LegendManager::apply).
#[derive(Debug)]
pub enum ManagerError {
    /// The legend could not be computed from the request.
    Scale(ScaleError),
    /// The settings could not be saved.
    Store(StoreError),
}

impl fmt::Display for ManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scale(err) => write!(f, "legend computation failed: {err}"),
            Self::Store(err) => write!(f, "saving settings failed: {err}"),
        }
    }
}

impl std::error::Error for ManagerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scale(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ScaleError> for ManagerError {
    fn from(err: ScaleError) -> Self {
        Self::Scale(err)
    }
}

impl From<StoreError> for ManagerError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
