//! Rotation engine for garb.
//!
//! The engine ties the scanner, the configuration collaborator, and the
//! rotation store together. Every public operation follows the same shape:
//! load configuration, re-scan the relevant part of the wardrobe, load the
//! store, compute, and save the store back only if state actually changed.
//!
//! # Single Writer
//!
//! Every mutating operation takes `&mut self`, so one engine value is the one
//! logical writer to the store document. There is no optimistic-concurrency
//! check and no file lock; serialization is the owner's responsibility.
//!
//! # Auto-Reset
//!
//! Selecting from a category whose rotation is complete writes a fresh
//! record (nothing worn, total refreshed from disk) before drawing from the
//! full pool again. This is the only place auto-reset happens; it is an
//! ordinary success, not an error, and callers observe it through the
//! progress accessors.

mod resets;

use crate::config::{Config, ConfigStore, validate_category_name, validate_file_name};
use crate::error::{GarbError, Result};
use crate::scanner::{self, CategoryInfo, CategoryRef, CategoryState, OutfitRef};
use crate::store::{RotationRecord, RotationStore, StoreBackend};
use chrono::Utc;
use rand::seq::IndexedRandom;

/// Scanner view of one category joined with its rotation progress.
#[derive(Debug, Clone)]
pub struct CategoryStatus {
    pub info: CategoryInfo,
    /// Outfits worn in the current cycle, per the fresh-pool convention:
    /// 0 immediately after a rotation completes.
    pub worn: u32,
    pub total: u32,
    pub available: u32,
}

/// The rotation engine, generic over its two persistence collaborators.
pub struct Engine<C: ConfigStore, S: StoreBackend> {
    config: C,
    store: S,
}

impl<C: ConfigStore, S: StoreBackend> Engine<C, S> {
    pub fn new(config: C, store: S) -> Self {
        Self { config, store }
    }

    pub(crate) fn load_config(&self) -> Result<Config> {
        self.config.load()
    }

    pub(crate) fn save_config(&self, config: &Config) -> Result<()> {
        self.config.save(config)
    }

    pub(crate) fn load_store(&self) -> Result<RotationStore> {
        self.store.load()
    }

    pub(crate) fn save_store(&mut self, store: &RotationStore) -> Result<()> {
        self.store.save(store)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Pick one unworn outfit from a category, uniformly at random.
    ///
    /// If the category's rotation is already complete, a fresh record is
    /// written first and the draw happens over the full pool. Picking does
    /// not itself mark the outfit worn, and the incomplete branch writes
    /// nothing. A category with no qualifying files yields `None`.
    pub fn select_one(&mut self, category: &str) -> Result<Option<OutfitRef>> {
        validate_category_name(category)?;
        let config = self.load_config()?;

        let files = scanner::scan_category_files(&config.wardrobe_root, category)?;
        if files.is_empty() {
            return Ok(None);
        }

        let store = self.load_store()?;
        let record = store
            .record(category)
            .cloned()
            .unwrap_or_else(|| RotationRecord::fresh(files.len() as u32));

        let pool: Vec<&String> = if record.is_rotation_complete() {
            // Reset before selecting so the store reflects the new cycle
            // even if the caller never marks anything worn.
            let fresh = RotationRecord::fresh(files.len() as u32);
            let next = store.updating(category, fresh);
            self.save_store(&next)?;
            files.iter().collect()
        } else {
            files
                .iter()
                .filter(|f| !record.worn_outfits.contains(*f))
                .collect()
        };

        let mut rng = rand::rng();
        let chosen = pool.choose(&mut rng).map(|f| {
            OutfitRef::new(
                (*f).clone(),
                CategoryRef::new(category, config.wardrobe_root.join(category)),
            )
        });
        Ok(chosen)
    }

    /// Pick one unworn outfit across all eligible categories.
    ///
    /// Two-stage uniform choice: first a category with at least one unworn
    /// outfit, then a file within it. Categories get equal selection weight
    /// regardless of size, so this is deliberately not uniform over the
    /// flattened pool. Never auto-resets; when every category is exhausted
    /// the result is `None`.
    pub fn select_across(&mut self) -> Result<Option<OutfitRef>> {
        let config = self.load_config()?;
        let infos = scanner::scan(&config.wardrobe_root, &config.excluded_categories)?;
        let store = self.load_store()?;

        let mut contributing: Vec<(CategoryRef, Vec<String>)> = Vec::new();
        for info in infos {
            if info.state != CategoryState::HasOutfits {
                continue;
            }
            let files =
                scanner::scan_category_files(&config.wardrobe_root, &info.category.name)?;
            let unworn: Vec<String> = match store.record(&info.category.name) {
                Some(record) => files
                    .into_iter()
                    .filter(|f| !record.worn_outfits.contains(f))
                    .collect(),
                None => files,
            };
            if !unworn.is_empty() {
                contributing.push((info.category, unworn));
            }
        }

        let mut rng = rand::rng();
        let Some((category, unworn)) = contributing.choose(&mut rng) else {
            return Ok(None);
        };
        let chosen = unworn
            .choose(&mut rng)
            .map(|f| OutfitRef::new(f.clone(), category.clone()));
        Ok(chosen)
    }

    // =========================================================================
    // Wearing
    // =========================================================================

    /// Mark an outfit worn in the current rotation cycle.
    ///
    /// Returns whether a persistence write occurred: marking an
    /// already-worn outfit is a no-op and does not write. The outfit must
    /// still exist on disk; otherwise this fails with `NotFound`.
    pub fn mark_worn(&mut self, outfit: &OutfitRef) -> Result<bool> {
        let config = self.load_config()?;
        let files = self.validate_on_disk(&config, outfit)?;

        let store = self.load_store()?;
        let next = match Self::wear_into(&store, outfit, files.len() as u32) {
            Some(next) => next,
            None => return Ok(false),
        };
        self.save_store(&next)?;
        Ok(true)
    }

    /// Mark several outfits worn in one store transaction.
    ///
    /// Every outfit is validated against the live filesystem before any
    /// mutation, so a single missing file means zero writes. All changes are
    /// batched into one save; outfits already worn are skipped. Returns the
    /// number of outfits newly marked.
    pub fn mark_many_worn(&mut self, outfits: &[OutfitRef]) -> Result<usize> {
        let config = self.load_config()?;

        // Fail-fast validation pass, no partial writes.
        let mut file_counts = Vec::with_capacity(outfits.len());
        for outfit in outfits {
            let files = self.validate_on_disk(&config, outfit)?;
            file_counts.push(files.len() as u32);
        }

        let mut store = self.load_store()?;
        let mut newly_worn = 0usize;
        for (outfit, &count) in outfits.iter().zip(&file_counts) {
            if let Some(next) = Self::wear_into(&store, outfit, count) {
                store = next;
                newly_worn += 1;
            }
        }

        if newly_worn > 0 {
            self.save_store(&store)?;
        }
        Ok(newly_worn)
    }

    /// Add one worn outfit to a store value, or `None` if it was already
    /// worn (the caller then skips the write).
    fn wear_into(store: &RotationStore, outfit: &OutfitRef, file_count: u32) -> Option<RotationStore> {
        let mut record = store
            .record(&outfit.category.name)
            .cloned()
            .unwrap_or_else(|| RotationRecord::fresh(file_count));

        if !record.worn_outfits.insert(outfit.file_name.clone()) {
            return None;
        }
        record.last_updated = Utc::now();
        Some(store.updating(&outfit.category.name, record))
    }

    /// Check names and on-disk presence; returns the category's current
    /// qualifying files on success.
    fn validate_on_disk(&self, config: &Config, outfit: &OutfitRef) -> Result<Vec<String>> {
        validate_category_name(&outfit.category.name)?;
        validate_file_name(&outfit.file_name)?;

        let files = scanner::scan_category_files(&config.wardrobe_root, &outfit.category.name)?;
        if !files.contains(&outfit.file_name) {
            return Err(GarbError::NotFound(format!(
                "{}/{}",
                outfit.category.name, outfit.file_name
            )));
        }
        Ok(files)
    }

    // =========================================================================
    // Counts and progress
    // =========================================================================

    /// Outfits available for selection in a category.
    ///
    /// Once a rotation completes, "available" means the about-to-be-fresh
    /// pool — the cached total — not zero. Mid-rotation it is the unworn
    /// remainder.
    pub fn available_count(&mut self, category: &str) -> Result<u32> {
        validate_category_name(category)?;
        let config = self.load_config()?;
        let record = self.effective_record(&config, category)?;
        Ok(Self::available_of(&record))
    }

    /// `(worn, total)` rotation progress for a category.
    ///
    /// Derived as `(total - available, total)` rather than from the worn set
    /// directly, so immediately after a rotation completes the worn count
    /// reads 0 against the fresh pool.
    pub fn rotation_progress(&mut self, category: &str) -> Result<(u32, u32)> {
        validate_category_name(category)?;
        let config = self.load_config()?;
        let record = self.effective_record(&config, category)?;
        let total = record.total_outfits;
        Ok((total - Self::available_of(&record), total))
    }

    fn available_of(record: &RotationRecord) -> u32 {
        if record.is_rotation_complete() {
            record.total_outfits
        } else {
            record.remaining()
        }
    }

    /// The stored record for a category, or a default built from the live
    /// file count when none exists yet.
    fn effective_record(&self, config: &Config, category: &str) -> Result<RotationRecord> {
        let store = self.load_store()?;
        if let Some(record) = store.record(category) {
            return Ok(record.clone());
        }
        let files = scanner::scan_category_files(&config.wardrobe_root, category)?;
        Ok(RotationRecord::fresh(files.len() as u32))
    }

    /// Scanner view of every category joined with rotation progress,
    /// sorted by name.
    pub fn category_statuses(&mut self) -> Result<Vec<CategoryStatus>> {
        let config = self.load_config()?;
        let infos = scanner::scan(&config.wardrobe_root, &config.excluded_categories)?;
        let store = self.load_store()?;

        let statuses = infos
            .into_iter()
            .map(|info| {
                let record = store
                    .record(&info.category.name)
                    .cloned()
                    .unwrap_or_else(|| RotationRecord::fresh(info.item_count as u32));
                let total = record.total_outfits;
                let available = Self::available_of(&record);
                CategoryStatus {
                    info,
                    worn: total - available,
                    total,
                    available,
                }
            })
            .collect();
        Ok(statuses)
    }

    // =========================================================================
    // Existence and search
    // =========================================================================

    /// Whether a specifically named outfit currently exists on disk.
    pub fn outfit_exists(&mut self, category: &str, file_name: &str) -> Result<bool> {
        validate_category_name(category)?;
        validate_file_name(file_name)?;
        let config = self.load_config()?;
        let files = scanner::scan_category_files(&config.wardrobe_root, category)?;
        Ok(files.contains(&file_name.to_string()))
    }

    /// Look up a specifically named outfit; `NotFound` if it does not exist.
    pub fn get_outfit(&mut self, category: &str, file_name: &str) -> Result<OutfitRef> {
        if !self.outfit_exists(category, file_name)? {
            return Err(GarbError::NotFound(format!("{}/{}", category, file_name)));
        }
        let config = self.load_config()?;
        Ok(OutfitRef::new(
            file_name,
            CategoryRef::new(category, config.wardrobe_root.join(category)),
        ))
    }

    /// Case-insensitive substring search over every qualifying filename,
    /// across all non-excluded categories. A blank pattern is invalid input.
    pub fn find_outfits(&mut self, pattern: &str) -> Result<Vec<OutfitRef>> {
        if pattern.trim().is_empty() {
            return Err(GarbError::InvalidInput(
                "search pattern must not be blank".to_string(),
            ));
        }

        let config = self.load_config()?;
        let needle = pattern.to_lowercase();
        let infos = scanner::scan(&config.wardrobe_root, &config.excluded_categories)?;

        let mut matches = Vec::new();
        for info in infos {
            if info.state != CategoryState::HasOutfits {
                continue;
            }
            for file in
                scanner::scan_category_files(&config.wardrobe_root, &info.category.name)?
            {
                if file.to_lowercase().contains(&needle) {
                    matches.push(OutfitRef::new(file, info.category.clone()));
                }
            }
        }
        Ok(matches)
    }
}

/// Build an engine over the file-backed collaborators for a resolved context.
pub fn file_engine(
    ctx: &crate::context::GarbContext,
) -> Engine<crate::config::FileConfigStore, crate::store::JsonFileStore> {
    Engine::new(
        crate::config::FileConfigStore::new(&ctx.config_path),
        crate::store::JsonFileStore::new(&ctx.store_path),
    )
}
