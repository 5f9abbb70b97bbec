//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Configuration for a garb installation.
///
/// This struct represents the contents of `.garb/config.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Wardrobe layout
    // =========================================================================
    /// Root directory whose immediate subdirectories are the categories.
    pub wardrobe_root: PathBuf,

    /// Category names the scanner must not look inside.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub excluded_categories: BTreeSet<String>,

    // =========================================================================
    // Recorded snapshot (maintained by reconciliation)
    // =========================================================================
    /// Category names seen on the last reconcile (coarse snapshot).
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub known_categories: BTreeSet<String>,

    /// Per-category qualifying filenames seen on the last reconcile
    /// (detailed snapshot). Preferred over `known_categories` by change
    /// detection whenever it is non-empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub known_category_files: BTreeMap<String, BTreeSet<String>>,
}

impl Config {
    /// Build a fresh configuration pointing at a wardrobe root, with no
    /// exclusions and an empty snapshot.
    pub fn for_root<P: Into<PathBuf>>(wardrobe_root: P) -> Self {
        Self {
            wardrobe_root: wardrobe_root.into(),
            ..Self::default()
        }
    }
}
