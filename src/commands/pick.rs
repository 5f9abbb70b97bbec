//! Implementation of the `garb pick` command.

use crate::cli::PickArgs;
use crate::context::GarbContext;
use crate::error::Result;
use crate::rotation::file_engine;

/// Execute the `garb pick` command.
///
/// With a category argument this is a single-category pick, which auto-resets
/// the category when its rotation is complete. Without one, the pick runs
/// across all eligible categories and never resets anything.
pub fn cmd_pick(args: PickArgs) -> Result<()> {
    let ctx = GarbContext::resolve()?;
    let mut engine = file_engine(&ctx);

    let picked = match &args.category {
        Some(category) => engine.select_one(category)?,
        None => engine.select_across()?,
    };

    let Some(outfit) = picked else {
        match &args.category {
            Some(category) => println!("No outfits in '{}'.", category),
            None => println!("Every outfit has been worn. Run 'garb reset' to start over."),
        }
        return Ok(());
    };

    if args.wear {
        engine.mark_worn(&outfit)?;
        let (worn, total) = engine.rotation_progress(&outfit.category.name)?;
        println!("{}  (worn, {}/{})", outfit, worn, total);
    } else {
        println!("{}", outfit);
    }

    Ok(())
}
