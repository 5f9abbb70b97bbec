//! Rotation store for garb.
//!
//! The store is the persisted map from category name to worn-tracking state,
//! plus a small header (schema version, creation time). It is one JSON
//! document per installation, loaded and saved wholesale.
//!
//! # Wire Format
//!
//! ```text
//! {
//!   "categories": {
//!     "casual": {
//!       "wornOutfits": ["jeans.png"],
//!       "totalOutfits": 3,
//!       "lastUpdated": "2026-08-30T12:00:00Z"
//!     }
//!   },
//!   "version": 1,
//!   "createdAt": "2026-08-30T11:00:00Z"
//! }
//! ```
//!
//! # Value Semantics
//!
//! The mutation helpers (`updating`, `removing`, `reset_all`) return new
//! store values and never alias the receiver. Engine operations decide
//! whether to persist by comparing intent, not by mutating shared state,
//! which is what makes "no write on no-op" observable.

mod io;
#[cfg(test)]
mod tests;

pub use io::{JsonFileStore, StoreBackend};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Current schema version of the rotation store document.
pub const SCHEMA_VERSION: u32 = 1;

/// Worn-tracking state for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationRecord {
    /// Bare filenames worn in the current rotation cycle.
    #[serde(rename = "wornOutfits")]
    pub worn_outfits: BTreeSet<String>,

    /// Cached count of outfits in the category. Refreshed opportunistically;
    /// may be stale relative to the live filesystem.
    #[serde(rename = "totalOutfits")]
    pub total_outfits: u32,

    /// When this record was last written.
    #[serde(rename = "lastUpdated")]
    pub last_updated: DateTime<Utc>,
}

impl RotationRecord {
    /// A fresh record with nothing worn.
    pub fn fresh(total_outfits: u32) -> Self {
        Self {
            worn_outfits: BTreeSet::new(),
            total_outfits,
            last_updated: Utc::now(),
        }
    }

    /// Whether the current rotation cycle is complete.
    ///
    /// An empty category (`total_outfits == 0`) is defined as complete.
    pub fn is_rotation_complete(&self) -> bool {
        self.worn_outfits.len() as u32 >= self.total_outfits || self.total_outfits == 0
    }

    /// Outfits still unworn in this cycle, per the cached total.
    pub fn remaining(&self) -> u32 {
        self.total_outfits
            .saturating_sub(self.worn_outfits.len() as u32)
    }

    /// Fractional rotation progress.
    ///
    /// Defined (never an error) for every state: `1.0` when the total is
    /// zero, otherwise `worn / total` — deliberately unclamped, so a stale
    /// total smaller than the worn count yields values above 1.0.
    pub fn progress(&self) -> f64 {
        if self.total_outfits == 0 {
            return 1.0;
        }
        self.worn_outfits.len() as f64 / self.total_outfits as f64
    }
}

/// The persisted rotation store: per-category records plus a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationStore {
    /// Worn-tracking records keyed by category name.
    pub categories: BTreeMap<String, RotationRecord>,

    /// Schema version of the document.
    pub version: u32,

    /// When this store was first created.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Default for RotationStore {
    fn default() -> Self {
        Self {
            categories: BTreeMap::new(),
            version: SCHEMA_VERSION,
            created_at: Utc::now(),
        }
    }
}

impl RotationStore {
    /// Record for a category, if one exists yet.
    pub fn record(&self, name: &str) -> Option<&RotationRecord> {
        self.categories.get(name)
    }

    /// A new store with `record` replaced or inserted under `name`.
    /// The receiver is left untouched.
    pub fn updating(&self, name: &str, record: RotationRecord) -> Self {
        let mut next = self.clone();
        next.categories.insert(name.to_string(), record);
        next
    }

    /// A new store with the record for `name` dropped.
    pub fn removing(&self, name: &str) -> Self {
        let mut next = self.clone();
        next.categories.remove(name);
        next
    }

    /// A new store in which every record's worn set is emptied while each
    /// record's cached total is preserved.
    pub fn reset_all(&self) -> Self {
        let mut next = self.clone();
        for record in next.categories.values_mut() {
            record.worn_outfits.clear();
            record.last_updated = Utc::now();
        }
        next
    }

    /// An empty store carrying over this store's header fields.
    /// This is the full-store replacement used by the service-level
    /// reset-everything operation and the deletion cascade.
    pub fn cleared(&self) -> Self {
        Self {
            categories: BTreeMap::new(),
            version: self.version,
            created_at: self.created_at,
        }
    }
}
