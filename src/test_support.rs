//! Shared test fixtures: tempdir wardrobes, cwd guard, and in-memory
//! collaborator fakes.

use crate::config::{Config, ConfigStore};
use crate::error::Result;
use crate::rotation::Engine;
use crate::store::{RotationStore, StoreBackend};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Changes the process working directory and restores it on drop.
///
/// The process cwd is global and not thread-safe; this also holds a lock so
/// tests don't race even if a #[serial] annotation is missed.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A tempdir wardrobe with helpers for laying out categories and outfits.
pub(crate) struct Wardrobe {
    temp: TempDir,
}

impl Wardrobe {
    pub(crate) fn new() -> Self {
        Self {
            temp: TempDir::new().unwrap(),
        }
    }

    pub(crate) fn root(&self) -> &Path {
        self.temp.path()
    }

    pub(crate) fn add_category(&self, name: &str, files: &[&str]) -> &Self {
        let dir = self.root().join(name);
        fs::create_dir_all(&dir).unwrap();
        for file in files {
            fs::write(dir.join(file), b"").unwrap();
        }
        self
    }

    pub(crate) fn add_file(&self, category: &str, file: &str) {
        fs::write(self.root().join(category).join(file), b"").unwrap();
    }

    pub(crate) fn remove_file(&self, category: &str, file: &str) {
        fs::remove_file(self.root().join(category).join(file)).unwrap();
    }

    pub(crate) fn remove_category(&self, name: &str) {
        fs::remove_dir_all(self.root().join(name)).unwrap();
    }
}

/// In-memory [`ConfigStore`] fake. Clones share the same document, so a
/// test can keep a handle and observe saves made through the engine.
#[derive(Clone)]
pub(crate) struct MemConfigStore {
    config: Rc<RefCell<Config>>,
}

impl MemConfigStore {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            config: Rc::new(RefCell::new(config)),
        }
    }

    pub(crate) fn current(&self) -> Config {
        self.config.borrow().clone()
    }
}

impl ConfigStore for MemConfigStore {
    fn load(&self) -> Result<Config> {
        Ok(self.config.borrow().clone())
    }

    fn save(&self, config: &Config) -> Result<()> {
        *self.config.borrow_mut() = config.clone();
        Ok(())
    }
}

#[derive(Default)]
struct MemStoreInner {
    store: RotationStore,
    save_count: usize,
}

/// In-memory [`StoreBackend`] fake that counts saves, for the
/// "no write on no-op" assertions.
#[derive(Clone, Default)]
pub(crate) struct MemStoreBackend {
    inner: Rc<RefCell<MemStoreInner>>,
}

impl MemStoreBackend {
    pub(crate) fn save_count(&self) -> usize {
        self.inner.borrow().save_count
    }

    pub(crate) fn current(&self) -> RotationStore {
        self.inner.borrow().store.clone()
    }
}

impl StoreBackend for MemStoreBackend {
    fn load(&self) -> Result<RotationStore> {
        Ok(self.inner.borrow().store.clone())
    }

    fn save(&mut self, store: &RotationStore) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        inner.store = store.clone();
        inner.save_count += 1;
        Ok(())
    }
}

/// An engine over in-memory collaborators pointed at a tempdir wardrobe,
/// plus handles to both fakes for inspection.
pub(crate) fn engine_for(
    wardrobe: &Wardrobe,
) -> (
    Engine<MemConfigStore, MemStoreBackend>,
    MemConfigStore,
    MemStoreBackend,
) {
    let config = MemConfigStore::new(Config::for_root(wardrobe.root()));
    let store = MemStoreBackend::default();
    (
        Engine::new(config.clone(), store.clone()),
        config,
        store,
    )
}
