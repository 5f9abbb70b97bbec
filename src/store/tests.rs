//! Tests for the rotation store model and its JSON persistence.

use super::*;
use std::collections::BTreeSet;
use tempfile::TempDir;

fn record(worn: &[&str], total: u32) -> RotationRecord {
    RotationRecord {
        worn_outfits: worn.iter().map(|s| s.to_string()).collect(),
        total_outfits: total,
        last_updated: chrono::Utc::now(),
    }
}

// =========================================================================
// RotationRecord invariants
// =========================================================================

#[test]
fn empty_category_counts_as_complete() {
    assert!(record(&[], 0).is_rotation_complete());
}

#[test]
fn completion_requires_all_worn() {
    assert!(!record(&["a.png"], 3).is_rotation_complete());
    assert!(!record(&["a.png", "b.png"], 3).is_rotation_complete());
    assert!(record(&["a.png", "b.png", "c.png"], 3).is_rotation_complete());
}

#[test]
fn stale_total_still_reads_as_complete() {
    // Worn count above the cached total happens when files are removed
    // outside a reset.
    assert!(record(&["a.png", "b.png"], 1).is_rotation_complete());
}

#[test]
fn remaining_saturates_at_zero() {
    assert_eq!(record(&["a.png"], 3).remaining(), 2);
    assert_eq!(record(&["a.png", "b.png"], 1).remaining(), 0);
    assert_eq!(record(&[], 0).remaining(), 0);
}

#[test]
fn progress_is_one_for_zero_total() {
    assert_eq!(record(&[], 0).progress(), 1.0);
    assert_eq!(record(&["a.png"], 0).progress(), 1.0);
}

#[test]
fn progress_is_fraction_mid_rotation() {
    assert_eq!(record(&["a.png", "b.png"], 4).progress(), 0.5);
}

#[test]
fn progress_is_one_when_complete() {
    assert_eq!(record(&["a.png", "b.png"], 2).progress(), 1.0);
}

#[test]
fn progress_above_one_is_not_clamped() {
    // Stale total smaller than the worn set is a defined result, not an
    // error, and must not be clamped.
    assert_eq!(record(&["a.png", "b.png"], 1).progress(), 2.0);
}

// =========================================================================
// Value semantics
// =========================================================================

#[test]
fn updating_leaves_receiver_untouched() {
    let store = RotationStore::default();
    let next = store.updating("casual", record(&["a.png"], 3));

    assert!(store.categories.is_empty());
    assert_eq!(next.categories["casual"].worn_outfits.len(), 1);
}

#[test]
fn removing_leaves_receiver_untouched() {
    let store = RotationStore::default().updating("casual", record(&["a.png"], 3));
    let next = store.removing("casual");

    assert!(store.record("casual").is_some());
    assert!(next.record("casual").is_none());
}

#[test]
fn reset_all_clears_worn_but_keeps_totals() {
    let store = RotationStore::default()
        .updating("casual", record(&["a.png", "b.png"], 3))
        .updating("formal", record(&["x.png"], 5));

    let reset = store.reset_all();

    assert!(reset.categories["casual"].worn_outfits.is_empty());
    assert_eq!(reset.categories["casual"].total_outfits, 3);
    assert!(reset.categories["formal"].worn_outfits.is_empty());
    assert_eq!(reset.categories["formal"].total_outfits, 5);

    // Receiver untouched.
    assert_eq!(store.categories["casual"].worn_outfits.len(), 2);
}

#[test]
fn cleared_discards_records_and_keeps_header() {
    let store = RotationStore::default().updating("casual", record(&["a.png"], 3));
    let cleared = store.cleared();

    assert!(cleared.categories.is_empty());
    assert_eq!(cleared.version, store.version);
    assert_eq!(cleared.created_at, store.created_at);
}

// =========================================================================
// Wire format
// =========================================================================

#[test]
fn serializes_with_wire_field_names() {
    let store = RotationStore::default().updating("casual", record(&["jeans.png"], 3));
    let json = serde_json::to_string(&store).unwrap();

    assert!(json.contains("\"wornOutfits\""));
    assert!(json.contains("\"totalOutfits\""));
    assert!(json.contains("\"lastUpdated\""));
    assert!(json.contains("\"createdAt\""));
    assert!(json.contains("\"version\""));
}

#[test]
fn parses_wire_document() {
    let json = r#"{
        "categories": {
            "casual": {
                "wornOutfits": ["jeans.png", "tee.png"],
                "totalOutfits": 3,
                "lastUpdated": "2026-08-30T12:00:00Z"
            }
        },
        "version": 1,
        "createdAt": "2026-08-30T11:00:00Z"
    }"#;

    let store: RotationStore = serde_json::from_str(json).unwrap();
    let record = store.record("casual").unwrap();
    assert_eq!(record.total_outfits, 3);
    assert_eq!(
        record.worn_outfits,
        BTreeSet::from(["jeans.png".to_string(), "tee.png".to_string()])
    );
}

// =========================================================================
// File backend
// =========================================================================

#[test]
fn missing_file_loads_as_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let backend = JsonFileStore::new(temp_dir.path().join("rotation.json"));

    let store = backend.load().unwrap();
    assert!(store.categories.is_empty());
    assert_eq!(store.version, SCHEMA_VERSION);
}

#[test]
fn save_then_load_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let mut backend = JsonFileStore::new(temp_dir.path().join("rotation.json"));

    let store = RotationStore::default().updating("casual", record(&["jeans.png"], 3));
    backend.save(&store).unwrap();

    let loaded = backend.load().unwrap();
    assert_eq!(loaded, store);
}

#[test]
fn corrupt_file_is_cache_corrupt() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rotation.json");
    std::fs::write(&path, "{not json").unwrap();

    let backend = JsonFileStore::new(&path);
    let err = backend.load().unwrap_err();
    assert!(matches!(err, crate::error::GarbError::CacheCorrupt(_)));
}
