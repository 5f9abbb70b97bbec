//! Change detection and reconciliation for garb.
//!
//! The wardrobe can change outside garb: categories appear or disappear,
//! outfit files are added or removed. This module diffs the scanner's
//! current view against the snapshot recorded in the configuration document
//! and applies the result back: the snapshot is replaced in full, and a
//! deleted category triggers a cascade reset of the whole rotation store.

mod reconcile;

use std::collections::{BTreeMap, BTreeSet};

/// Snapshot type: qualifying filenames per category.
pub type FileSnapshot = BTreeMap<String, BTreeSet<String>>;

/// The diff between the live wardrobe layout and a recorded snapshot.
///
/// Transient: produced and consumed within a single sync call, never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// Categories present now but not in the snapshot.
    pub new_categories: BTreeSet<String>,

    /// Categories in the snapshot but gone now.
    pub deleted_categories: BTreeSet<String>,

    /// Categories present in both whose file sets differ.
    pub changed_categories: BTreeSet<String>,

    /// Files added within changed categories.
    pub added_files: FileSnapshot,

    /// Files removed within changed categories.
    pub deleted_files: FileSnapshot,
}

impl ChangeSet {
    /// Diff the current layout against a recorded snapshot.
    ///
    /// The snapshot comes in two fidelities: the detailed per-file map is
    /// preferred whenever it is non-empty; otherwise detection degrades to
    /// the coarse category-name set (no file-level diffs possible, so only
    /// new/deleted categories can be reported).
    pub fn between(
        current: &FileSnapshot,
        previous_detailed: &FileSnapshot,
        previous_coarse: &BTreeSet<String>,
    ) -> Self {
        static EMPTY: BTreeSet<String> = BTreeSet::new();

        let previous_names: BTreeSet<String> = if previous_detailed.is_empty() {
            previous_coarse.clone()
        } else {
            previous_detailed.keys().cloned().collect()
        };
        let current_names: BTreeSet<String> = current.keys().cloned().collect();

        let mut changes = ChangeSet {
            new_categories: current_names.difference(&previous_names).cloned().collect(),
            deleted_categories: previous_names.difference(&current_names).cloned().collect(),
            ..ChangeSet::default()
        };

        // File-level diffs only make sense for categories present on both
        // sides; new and deleted categories never appear in changed_categories.
        for name in current_names.intersection(&previous_names) {
            let now = &current[name];
            let before = previous_detailed.get(name).unwrap_or(&EMPTY);

            let added: BTreeSet<String> = now.difference(before).cloned().collect();
            let deleted: BTreeSet<String> = before.difference(now).cloned().collect();

            if added.is_empty() && deleted.is_empty() {
                continue;
            }
            changes.changed_categories.insert(name.clone());
            if !added.is_empty() {
                changes.added_files.insert(name.clone(), added);
            }
            if !deleted.is_empty() {
                changes.deleted_files.insert(name.clone(), deleted);
            }
        }

        changes
    }

    /// Whether all five collections are empty.
    pub fn is_empty(&self) -> bool {
        self.new_categories.is_empty()
            && self.deleted_categories.is_empty()
            && self.changed_categories.is_empty()
            && self.added_files.is_empty()
            && self.deleted_files.is_empty()
    }
}
