//! Implementation of the `garb reset` command.

use crate::cli::ResetArgs;
use crate::context::GarbContext;
use crate::error::Result;
use crate::rotation::file_engine;

/// Execute the `garb reset` command.
pub fn cmd_reset(args: ResetArgs) -> Result<()> {
    let ctx = GarbContext::resolve()?;
    let mut engine = file_engine(&ctx);

    match (args.category, args.keep) {
        (Some(category), Some(keep)) => {
            if engine.partial_reset(&category, keep)? {
                println!("Kept {} worn outfit(s) in '{}'.", keep, category);
            } else {
                println!(
                    "Nothing to do: '{}' has at most {} outfit(s).",
                    category, keep
                );
            }
        }
        (Some(category), None) => {
            engine.reset_category(&category)?;
            println!("Reset rotation for '{}'.", category);
        }
        (None, _) => {
            engine.reset_all_categories()?;
            println!("Reset all rotation tracking.");
        }
    }
    Ok(())
}
