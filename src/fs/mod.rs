//! Atomic filesystem operations for garb.
//!
//! Both state documents (the configuration file and the rotation store) are
//! overwritten wholesale on every mutation, so a crash mid-write must never
//! leave a half-written document behind. All writes follow the same pattern:
//!
//! 1. Write content to a temporary file in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Atomically rename it over the original file
//!
//! Source and destination are always in the same directory, so the rename is
//! atomic on POSIX. On crash, a temporary file named `.{filename}.tmp` may
//! remain; it is overwritten by the next successful write.

use crate::error::{GarbError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file.
///
/// Writes the content to a temporary file, syncs it to disk, then atomically
/// replaces the target file, creating parent directories as needed.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Atomically write bytes to a file.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            GarbError::FileSystem(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    replace(&temp_path, path)
}

/// Temporary file path in the same directory as the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| GarbError::FileSystem(format!("invalid file path '{}'", target.display())))?;
    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync it to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        GarbError::FileSystem(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        GarbError::FileSystem(format!("failed to write temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        GarbError::FileSystem(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

/// Replace the target file with the freshly written temporary file.
#[cfg(unix)]
fn replace(source: &Path, target: &Path) -> Result<()> {
    // rename() is atomic on POSIX and replaces an existing destination.
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        GarbError::FileSystem(format!("failed to replace '{}': {}", target.display(), e))
    })?;

    // Sync the directory entry as well so the rename itself is durable.
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

#[cfg(not(unix))]
fn replace(source: &Path, target: &Path) -> Result<()> {
    // Windows rename() fails when the destination exists.
    if target.exists() {
        fs::remove_file(target).map_err(|e| {
            let _ = fs::remove_file(source);
            GarbError::FileSystem(format!("failed to remove '{}': {}", target.display(), e))
        })?;
    }
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        GarbError::FileSystem(format!("failed to replace '{}': {}", target.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        atomic_write_file(&path, "{\"categories\":{}}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"categories\":{}}");
    }

    #[test]
    fn replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        fs::write(&path, "old").unwrap();

        atomic_write_file(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("cfg.yaml");

        atomic_write_file(&path, "root: /wardrobe\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "root: /wardrobe\n");
    }

    #[test]
    fn cleans_up_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        atomic_write_file(&path, "content").unwrap();

        assert!(!temp_dir.path().join(".store.json.tmp").exists());
    }

    #[test]
    fn temp_path_stays_in_same_directory() {
        let temp = temp_path_for(Path::new("/some/dir/file.json")).unwrap();
        assert_eq!(temp.parent().unwrap(), Path::new("/some/dir"));
        let name = temp.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with('.') && name.ends_with(".tmp"));
    }
}
