//! Configuration collaborator for garb.
//!
//! The configuration document (`.garb/config.yaml`) carries the wardrobe
//! root path, the user's excluded categories, and the recorded snapshot of
//! known categories/files that change detection diffs against. The engine
//! reaches it only through the [`ConfigStore`] trait so tests can substitute
//! an in-memory fake.

mod model;
mod operations;

pub use model::Config;
pub use operations::{validate_category_name, validate_file_name};

use crate::error::Result;
use crate::fs::atomic_write_file;
use std::path::PathBuf;

/// Access to the persisted configuration document.
pub trait ConfigStore {
    /// Load the configuration. "No configuration yet" is a
    /// `GarbError::Config` error, not a silent default.
    fn load(&self) -> Result<Config>;

    /// Persist the configuration, replacing the previous document wholesale.
    fn save(&self, config: &Config) -> Result<()>;
}

/// File-backed [`ConfigStore`] over a YAML document.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Config> {
        Config::load(&self.path)
    }

    fn save(&self, config: &Config) -> Result<()> {
        atomic_write_file(&self.path, &config.to_yaml()?)
    }
}
