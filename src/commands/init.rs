//! Implementation of the `garb init` command.

use crate::cli::InitArgs;
use crate::config::{Config, ConfigStore, FileConfigStore};
use crate::context::GarbContext;
use crate::error::{GarbError, Result};

/// Execute the `garb init` command.
///
/// Creates `.garb/` in the current directory with a configuration document
/// pointing at the wardrobe root. Re-initializing an existing state
/// directory is a user error rather than a silent overwrite.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        GarbError::FileSystem(format!("failed to get current working directory: {}", e))
    })?;
    let ctx = GarbContext::at(&cwd);

    if ctx.is_initialized() {
        return Err(GarbError::InvalidInput(format!(
            "'{}' already exists. Remove it first to re-initialize.",
            ctx.config_path.display()
        )));
    }

    let root = match args.root {
        Some(root) if root.is_absolute() => root,
        Some(root) => cwd.join(root),
        None => cwd.clone(),
    };
    if !root.is_dir() {
        return Err(GarbError::InvalidInput(format!(
            "wardrobe root '{}' is not a directory",
            root.display()
        )));
    }

    let config = Config::for_root(&root);
    FileConfigStore::new(&ctx.config_path).save(&config)?;

    println!("Initialized garb state in {}", ctx.state_dir.display());
    println!("Wardrobe root: {}", root.display());
    Ok(())
}
