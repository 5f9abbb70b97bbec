//! Persistence for the rotation store document.

use super::RotationStore;
use crate::error::{GarbError, Result};
use crate::fs::atomic_write_file;
use std::path::PathBuf;

/// Access to the persisted rotation store document.
///
/// The engine reaches persistence only through this trait so tests can
/// substitute an in-memory fake and count writes.
pub trait StoreBackend {
    /// Load the store. A missing document is not an error: it loads as the
    /// default empty store.
    fn load(&self) -> Result<RotationStore>;

    /// Persist the store, replacing the previous document wholesale.
    fn save(&mut self, store: &RotationStore) -> Result<()>;
}

/// File-backed [`StoreBackend`] over a single JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl StoreBackend for JsonFileStore {
    fn load(&self) -> Result<RotationStore> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RotationStore::default());
            }
            Err(e) => {
                return Err(GarbError::FileSystem(format!(
                    "failed to read rotation store '{}': {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_str(&content).map_err(|e| {
            GarbError::CacheCorrupt(format!(
                "failed to parse rotation store '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&mut self, store: &RotationStore) -> Result<()> {
        let content = serde_json::to_string_pretty(store).map_err(|e| {
            GarbError::CacheCorrupt(format!("failed to serialize rotation store: {}", e))
        })?;
        atomic_write_file(&self.path, &content)
    }
}
