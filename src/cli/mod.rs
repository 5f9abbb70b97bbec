//! CLI argument parsing for garb.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// garb: file-based wardrobe rotation tracker.
///
/// A wardrobe is a directory of category subdirectories full of outfit
/// files. garb guarantees that no outfit repeats until every outfit in its
/// category has been worn once, then the category resets automatically.
#[derive(Parser, Debug)]
#[command(name = "garb")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for garb.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize garb state in the current directory.
    ///
    /// Creates `.garb/` with a configuration document pointing at the
    /// wardrobe root.
    Init(InitArgs),

    /// Pick an outfit that has not been worn this rotation.
    ///
    /// With a category, picks from that category (resetting it first if its
    /// rotation is complete). Without one, picks a category at random among
    /// those with unworn outfits, then an outfit within it.
    Pick(PickArgs),

    /// Mark one or more outfits as worn.
    Wear(WearArgs),

    /// Show every category with its rotation progress.
    Status,

    /// Reset rotation state.
    ///
    /// Without arguments, discards all tracking. With a category, resets
    /// just that category. With --keep N, keeps N worn outfits.
    Reset(ResetArgs),

    /// Reconcile the recorded category/file snapshot with the filesystem.
    ///
    /// Detects added/removed categories and files. A removed category
    /// resets all rotation tracking.
    Sync(SyncArgs),

    /// Search outfit filenames across categories.
    Find(FindArgs),
}

#[derive(clap::Args, Debug)]
pub struct InitArgs {
    /// Wardrobe root directory (default: the current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct PickArgs {
    /// Category to pick from; omit to pick across all categories.
    pub category: Option<String>,

    /// Immediately mark the picked outfit as worn.
    #[arg(long)]
    pub wear: bool,
}

#[derive(clap::Args, Debug)]
pub struct WearArgs {
    /// Category the outfits belong to.
    pub category: String,

    /// Outfit filenames to mark worn.
    #[arg(required = true)]
    pub files: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct ResetArgs {
    /// Category to reset; omit to reset everything.
    pub category: Option<String>,

    /// Keep this many worn outfits instead of clearing the category.
    #[arg(long, requires = "category")]
    pub keep: Option<usize>,
}

#[derive(clap::Args, Debug)]
pub struct SyncArgs {
    /// Print detected changes without applying them.
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::Args, Debug)]
pub struct FindArgs {
    /// Substring to look for (case-insensitive).
    pub pattern: String,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
