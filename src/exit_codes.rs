//! Exit code constants for the garb CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, blank input, invalid state)
//! - 2: Named outfit not found
//! - 3: Filesystem failure
//! - 4: Rotation store corrupt
//! - 5: Configuration failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, blank category/filename/pattern.
pub const USER_ERROR: i32 = 1;

/// A specifically named outfit does not exist.
pub const NOT_FOUND: i32 = 2;

/// Filesystem failure: listing, reading, or writing the wardrobe tree.
pub const FS_FAILURE: i32 = 3;

/// The rotation store file exists but failed to parse.
pub const CACHE_CORRUPT: i32 = 4;

/// Configuration could not be loaded or saved.
pub const CONFIG_FAILURE: i32 = 5;
