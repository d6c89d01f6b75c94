//! Storage layer: a JSON-file key-value slot standing in for browser local
//! storage, plus the fixed-key helpers for measurements and theme.
//!
//! Reads are fail-soft: absent or corrupt data degrades to "no data" and is
//! logged, never propagated. Writes rewrite the whole file and report
//! failures to the caller.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;
use crate::models::{Measurement, Theme};

/// Key under which the measurement collection is persisted.
pub const MEASUREMENTS_KEY: &str = "medidas";
/// Key under which the theme preference is persisted.
pub const THEME_KEY: &str = "theme";

/// A process-local, single-writer string key-value slot backed by one JSON
/// file. No cross-process coordination: the design assumes a single active
/// session.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    /// Open the slot at `path`. A missing or unparseable file yields an
    /// empty slot rather than an error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "store file unparseable, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "store file unreadable, starting empty");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set `key` to `value` and rewrite the backing file. Full overwrite,
    /// not incremental.
    pub fn set_item(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.entries.insert(key.to_string(), value.into());
        self.persist()
    }

    pub fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

// ─── Fixed-key helpers ───────────────────────────────────────────────────────

/// Load the measurement collection. Absent or corrupt data is not an error:
/// it degrades to an empty collection.
pub fn load_measurements(store: &LocalStore) -> Vec<Measurement> {
    match store.get_item(MEASUREMENTS_KEY) {
        None => vec![],
        Some(raw) => match serde_json::from_str(raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "stored measurements unparseable, starting empty");
                vec![]
            }
        },
    }
}

/// Serialize the full collection and overwrite the stored value.
pub fn save_measurements(store: &mut LocalStore, items: &[Measurement]) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    store.set_item(MEASUREMENTS_KEY, raw)
}

/// Load the theme preference, if one was persisted and is recognized.
pub fn load_theme(store: &LocalStore) -> Option<Theme> {
    let raw = store.get_item(THEME_KEY)?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(_) => {
            warn!(value = raw, "stored theme unrecognized, ignoring");
            None
        }
    }
}

pub fn save_theme(store: &mut LocalStore, theme: Theme) -> Result<()> {
    store.set_item(THEME_KEY, theme.to_string())
}
