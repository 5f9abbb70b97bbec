//! Implementation of the `garb sync` command.

use crate::cli::SyncArgs;
use crate::context::GarbContext;
use crate::error::Result;
use crate::rotation::file_engine;
use crate::sync::ChangeSet;

/// Execute the `garb sync` command.
pub fn cmd_sync(args: SyncArgs) -> Result<()> {
    let ctx = GarbContext::resolve()?;
    let mut engine = file_engine(&ctx);

    let changes = engine.detect_changes()?;
    print_changes(&changes);

    if args.dry_run {
        return Ok(());
    }

    engine.reconcile(&changes)?;
    if changes.deleted_categories.is_empty() {
        println!("Snapshot updated.");
    } else {
        println!("Snapshot updated; all rotation tracking was reset.");
    }
    Ok(())
}

fn print_changes(changes: &ChangeSet) {
    if changes.is_empty() {
        println!("Wardrobe matches the recorded snapshot.");
        return;
    }

    for name in &changes.new_categories {
        println!("new category:     {}", name);
    }
    for name in &changes.deleted_categories {
        println!("deleted category: {}", name);
    }
    for name in &changes.changed_categories {
        if let Some(files) = changes.added_files.get(name) {
            for file in files {
                println!("added:   {}/{}", name, file);
            }
        }
        if let Some(files) = changes.deleted_files.get(name) {
            for file in files {
                println!("deleted: {}/{}", name, file);
            }
        }
    }
}
