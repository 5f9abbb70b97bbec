//! State directory resolution for garb.
//!
//! garb keeps its two state documents in a `.garb/` directory created by
//! `garb init`: `config.yaml` (the configuration document) and
//! `rotation.json` (the rotation store). Commands may be invoked from
//! anywhere below the directory that holds `.garb/`; this module walks up
//! from the current working directory to find it.

use crate::error::{GarbError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the garb state directory.
pub const STATE_DIR: &str = ".garb";

/// Filename of the configuration document inside the state directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Filename of the rotation store document inside the state directory.
pub const STORE_FILE: &str = "rotation.json";

/// Resolved paths for garb state. All paths are absolute.
#[derive(Debug, Clone)]
pub struct GarbContext {
    /// Directory that contains the `.garb/` state directory.
    pub base_dir: PathBuf,

    /// Absolute path to the state directory (`{base_dir}/.garb`).
    pub state_dir: PathBuf,

    /// Absolute path to the configuration document.
    pub config_path: PathBuf,

    /// Absolute path to the rotation store document.
    pub store_path: PathBuf,
}

impl GarbContext {
    /// Resolve the context from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            GarbError::FileSystem(format!("failed to get current working directory: {}", e))
        })?;
        Self::resolve_from(&cwd)
    }

    /// Resolve the context starting from a specific directory, walking up
    /// until a `.garb/` directory is found.
    pub fn resolve_from<P: AsRef<Path>>(start: P) -> Result<Self> {
        let mut dir = start.as_ref().to_path_buf();
        loop {
            let candidate = dir.join(STATE_DIR);
            if candidate.is_dir() {
                return Ok(Self::at(&dir));
            }
            if !dir.pop() {
                return Err(GarbError::Config(format!(
                    "no {} directory found from '{}' upward. Run 'garb init' first.",
                    STATE_DIR,
                    start.as_ref().display()
                )));
            }
        }
    }

    /// Build the context for a known base directory without checking that the
    /// state directory exists. Used by `garb init` before anything is created.
    pub fn at<P: AsRef<Path>>(base_dir: P) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let state_dir = base_dir.join(STATE_DIR);
        let config_path = state_dir.join(CONFIG_FILE);
        let store_path = state_dir.join(STORE_FILE);
        Self {
            base_dir,
            state_dir,
            config_path,
            store_path,
        }
    }

    /// Whether the state directory has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.config_path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolves_from_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(STATE_DIR)).unwrap();

        let ctx = GarbContext::resolve_from(temp_dir.path()).unwrap();
        assert_eq!(ctx.base_dir, temp_dir.path());
        assert_eq!(ctx.config_path, temp_dir.path().join(".garb/config.yaml"));
        assert_eq!(ctx.store_path, temp_dir.path().join(".garb/rotation.json"));
    }

    #[test]
    fn resolves_from_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(STATE_DIR)).unwrap();
        let nested = temp_dir.path().join("summer").join("beach");
        fs::create_dir_all(&nested).unwrap();

        let ctx = GarbContext::resolve_from(&nested).unwrap();
        assert_eq!(ctx.base_dir, temp_dir.path());
    }

    #[test]
    fn errors_when_not_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let err = GarbContext::resolve_from(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("garb init"));
    }
}
