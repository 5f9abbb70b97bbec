//! Category scanner for garb.
//!
//! A wardrobe is a root directory whose immediate subdirectories are
//! categories; the outfits inside a category are its files with the
//! qualifying extension. The scanner is a pure read of the filesystem: it
//! classifies each category, lists qualifying filenames, and keeps no state
//! of its own. Every public engine operation re-scans rather than trusting
//! cached counts.

use crate::error::{GarbError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension (without dot) that qualifies a file as an outfit.
/// Matched case-insensitively.
pub const OUTFIT_EXTENSION: &str = "png";

/// A category directory, derived from the filesystem on every call and
/// never persisted directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRef {
    /// Last path component of the category directory.
    pub name: String,
    /// Absolute path to the category directory.
    pub path: PathBuf,
}

impl CategoryRef {
    pub fn new<P: Into<PathBuf>>(name: impl Into<String>, path: P) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// One outfit file within a category.
///
/// Equality and hashing consider `(file_name, category.name)` only, so two
/// refs to the same outfit compare equal even if the wardrobe root was given
/// through different paths.
#[derive(Debug, Clone)]
pub struct OutfitRef {
    pub file_name: String,
    pub category: CategoryRef,
}

impl OutfitRef {
    pub fn new(file_name: impl Into<String>, category: CategoryRef) -> Self {
        Self {
            file_name: file_name.into(),
            category,
        }
    }

    /// Full path to the outfit file.
    pub fn file_path(&self) -> PathBuf {
        self.category.path.join(&self.file_name)
    }
}

impl PartialEq for OutfitRef {
    fn eq(&self, other: &Self) -> bool {
        self.file_name == other.file_name && self.category.name == other.category.name
    }
}

impl Eq for OutfitRef {}

impl std::hash::Hash for OutfitRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.file_name.hash(state);
        self.category.name.hash(state);
    }
}

impl std::fmt::Display for OutfitRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.category.name, self.file_name)
    }
}

/// Classification of a category directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryState {
    /// At least one qualifying outfit file.
    HasOutfits,
    /// The directory has zero entries.
    Empty,
    /// The directory has entries, but none qualify.
    NoQualifyingFiles,
    /// The name is in the exclusion set; contents were not inspected.
    UserExcluded,
}

impl std::fmt::Display for CategoryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CategoryState::HasOutfits => "has outfits",
            CategoryState::Empty => "empty",
            CategoryState::NoQualifyingFiles => "no qualifying files",
            CategoryState::UserExcluded => "excluded",
        };
        f.write_str(s)
    }
}

/// Scanner output for one category.
#[derive(Debug, Clone)]
pub struct CategoryInfo {
    pub category: CategoryRef,
    pub state: CategoryState,
    /// Number of qualifying files (0 for excluded categories, whose contents
    /// are not read).
    pub item_count: usize,
}

/// Scan the wardrobe root and classify every immediate subdirectory.
///
/// The result is sorted lexicographically by category name. Non-directory
/// entries at the root are skipped. Any listing error aborts the whole scan;
/// there are no partial results.
pub fn scan(root: &Path, exclusions: &BTreeSet<String>) -> Result<Vec<CategoryInfo>> {
    let entries = read_dir_sorted(root)?;
    let mut categories = Vec::new();

    for path in entries {
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()).map(String::from) else {
            continue;
        };

        let category = CategoryRef::new(name.clone(), path.clone());
        if exclusions.contains(&name) {
            categories.push(CategoryInfo {
                category,
                state: CategoryState::UserExcluded,
                item_count: 0,
            });
            continue;
        }

        let mut total_entries = 0usize;
        let mut qualifying = 0usize;
        for entry in read_dir_sorted(&path)? {
            total_entries += 1;
            if is_qualifying(&entry) {
                qualifying += 1;
            }
        }

        let state = if qualifying > 0 {
            CategoryState::HasOutfits
        } else if total_entries == 0 {
            CategoryState::Empty
        } else {
            CategoryState::NoQualifyingFiles
        };

        categories.push(CategoryInfo {
            category,
            state,
            item_count: qualifying,
        });
    }

    categories.sort_by(|a, b| a.category.name.cmp(&b.category.name));
    Ok(categories)
}

/// List the qualifying outfit filenames of one category, sorted ascending.
///
/// A missing category directory yields an empty list: "category doesn't
/// exist" is not a distinct code path during selection.
pub fn scan_category_files(root: &Path, name: &str) -> Result<Vec<String>> {
    let dir = root.join(name);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files: Vec<String> = read_dir_sorted(&dir)?
        .into_iter()
        .filter(|p| is_qualifying(p))
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
        .collect();
    files.sort();
    Ok(files)
}

/// Current `{category -> set<filename>}` view over every non-excluded
/// category, regardless of state. Used by change detection.
pub fn scan_all_files(
    root: &Path,
    exclusions: &BTreeSet<String>,
) -> Result<std::collections::BTreeMap<String, BTreeSet<String>>> {
    let mut map = std::collections::BTreeMap::new();
    for info in scan(root, exclusions)? {
        if info.state == CategoryState::UserExcluded {
            continue;
        }
        let files = scan_category_files(root, &info.category.name)?;
        map.insert(info.category.name, files.into_iter().collect());
    }
    Ok(map)
}

fn is_qualifying(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(OUTFIT_EXTENSION))
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        GarbError::FileSystem(format!(
            "failed to read directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            GarbError::FileSystem(format!(
                "failed to read entry in '{}': {}",
                dir.display(),
                e
            ))
        })?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}
