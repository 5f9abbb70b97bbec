//! Reset operations: direct mutators of the rotation store, independent of
//! selection.

use super::Engine;
use crate::config::{ConfigStore, validate_category_name};
use crate::error::Result;
use crate::scanner;
use crate::store::{RotationRecord, StoreBackend};
use chrono::Utc;

impl<C: ConfigStore, S: StoreBackend> Engine<C, S> {
    /// Reset one category's rotation state.
    ///
    /// The record is replaced with an empty one whose total is 0; the total
    /// is deliberately not re-derived from the filesystem here and will be
    /// corrected on the next selection or count. Always writes, even when no
    /// prior record existed, which keeps the reset idempotent and observable.
    pub fn reset_category(&mut self, category: &str) -> Result<()> {
        validate_category_name(category)?;
        let store = self.load_store()?;
        let next = store.updating(
            category,
            RotationRecord {
                worn_outfits: Default::default(),
                total_outfits: 0,
                last_updated: Utc::now(),
            },
        );
        self.save_store(&next)
    }

    /// Reset every category by discarding all records outright.
    ///
    /// This is the service-level reset: the store is replaced with an empty
    /// document that keeps the original header fields. It is distinct from
    /// the value-level `RotationStore::reset_all`, which clears worn sets
    /// while preserving per-category totals.
    pub fn reset_all_categories(&mut self) -> Result<()> {
        let store = self.load_store()?;
        self.save_store(&store.cleared())
    }

    /// Truncate a category's worn set to at most `keep_worn_count` members.
    ///
    /// No-op (no write) whenever `keep_worn_count` is at least the current
    /// file count — equality included. Otherwise the total is refreshed from
    /// disk and an unspecified `keep_worn_count`-sized subset of the worn set
    /// is kept. Returns whether a write occurred.
    pub fn partial_reset(&mut self, category: &str, keep_worn_count: usize) -> Result<bool> {
        validate_category_name(category)?;
        let config = self.load_config()?;

        let files = scanner::scan_category_files(&config.wardrobe_root, category)?;
        if keep_worn_count >= files.len() {
            return Ok(false);
        }

        let store = self.load_store()?;
        let mut record = store
            .record(category)
            .cloned()
            .unwrap_or_else(|| RotationRecord::fresh(files.len() as u32));

        // Which members survive is unspecified; BTreeSet iteration just makes
        // it stable within a run.
        record.worn_outfits = record
            .worn_outfits
            .into_iter()
            .take(keep_worn_count)
            .collect();
        record.total_outfits = files.len() as u32;
        record.last_updated = Utc::now();

        let next = store.updating(category, record);
        self.save_store(&next)?;
        Ok(true)
    }
}
