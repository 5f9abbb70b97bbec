//! Implementation of the `garb find` command.

use crate::cli::FindArgs;
use crate::context::GarbContext;
use crate::error::Result;
use crate::rotation::file_engine;

/// Execute the `garb find` command.
pub fn cmd_find(args: FindArgs) -> Result<()> {
    let ctx = GarbContext::resolve()?;
    let mut engine = file_engine(&ctx);

    let matches = engine.find_outfits(&args.pattern)?;
    if matches.is_empty() {
        println!("No outfits match '{}'.", args.pattern);
        return Ok(());
    }
    for outfit in matches {
        println!("{}", outfit);
    }
    Ok(())
}
