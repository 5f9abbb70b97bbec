//! Engine-side sync operations: detect changes and apply them.

use super::ChangeSet;
use crate::config::ConfigStore;
use crate::error::Result;
use crate::rotation::Engine;
use crate::scanner;
use crate::store::StoreBackend;

impl<C: ConfigStore, S: StoreBackend> Engine<C, S> {
    /// Diff the live wardrobe against the snapshot recorded in the
    /// configuration document.
    pub fn detect_changes(&mut self) -> Result<ChangeSet> {
        let config = self.load_config()?;
        let current =
            scanner::scan_all_files(&config.wardrobe_root, &config.excluded_categories)?;
        Ok(ChangeSet::between(
            &current,
            &config.known_category_files,
            &config.known_categories,
        ))
    }

    /// Apply a change-set: replace the recorded snapshot and, when any
    /// category was deleted, cascade-reset the rotation store.
    ///
    /// The re-scan here is authoritative; the snapshot (both the coarse name
    /// set and the detailed per-file map) is replaced in full, never merged.
    /// The cascade reset discards every category's record, not just the
    /// deleted ones — a consequence of the single-document store model,
    /// preserved intentionally. When nothing was deleted the store is left
    /// untouched even if files were added or changed.
    pub fn reconcile(&mut self, changes: &ChangeSet) -> Result<()> {
        let mut config = self.load_config()?;
        let current =
            scanner::scan_all_files(&config.wardrobe_root, &config.excluded_categories)?;

        config.known_categories = current.keys().cloned().collect();
        config.known_category_files = current;
        self.save_config(&config)?;

        if !changes.deleted_categories.is_empty() {
            let store = self.load_store()?;
            self.save_store(&store.cleared())?;
        }

        Ok(())
    }
}
