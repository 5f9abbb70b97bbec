//! Implementation of the `garb status` command.

use crate::context::GarbContext;
use crate::error::Result;
use crate::rotation::file_engine;
use crate::scanner::CategoryState;

/// Execute the `garb status` command.
///
/// Prints every category with its scanner state and rotation progress.
pub fn cmd_status() -> Result<()> {
    let ctx = GarbContext::resolve()?;
    let mut engine = file_engine(&ctx);

    let statuses = engine.category_statuses()?;
    if statuses.is_empty() {
        println!("No categories found in the wardrobe root.");
        return Ok(());
    }

    println!("Wardrobe Status");
    println!("===============");
    for status in &statuses {
        let name = &status.info.category.name;
        match status.info.state {
            CategoryState::HasOutfits => println!(
                "  {:20} {:>3}/{:<3} worn, {} available",
                name, status.worn, status.total, status.available
            ),
            state => println!("  {:20} ({})", name, state),
        }
    }
    Ok(())
}
