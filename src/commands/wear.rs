//! Implementation of the `garb wear` command.

use crate::cli::WearArgs;
use crate::context::GarbContext;
use crate::error::Result;
use crate::rotation::file_engine;
use crate::scanner::{CategoryRef, OutfitRef};

/// Execute the `garb wear` command.
///
/// One file marks a single outfit worn; several files are validated together
/// and written as one batch, so a single missing file marks nothing.
pub fn cmd_wear(args: WearArgs) -> Result<()> {
    let ctx = GarbContext::resolve()?;
    let mut engine = file_engine(&ctx);
    let config = engine.load_config()?;

    let category = CategoryRef::new(
        args.category.clone(),
        config.wardrobe_root.join(&args.category),
    );
    let outfits: Vec<OutfitRef> = args
        .files
        .iter()
        .map(|f| OutfitRef::new(f.clone(), category.clone()))
        .collect();

    let newly_worn = match outfits.as_slice() {
        [single] => usize::from(engine.mark_worn(single)?),
        many => engine.mark_many_worn(many)?,
    };

    let (worn, total) = engine.rotation_progress(&args.category)?;
    if newly_worn == 0 {
        println!("Already worn. '{}' at {}/{}.", args.category, worn, total);
    } else {
        println!(
            "Marked {} outfit(s) worn. '{}' at {}/{}.",
            newly_worn, args.category, worn, total
        );
    }
    Ok(())
}
