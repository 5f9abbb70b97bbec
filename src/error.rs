//! Error types for the garb CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for garb operations.
///
/// Each variant maps to a specific exit code. The taxonomy is deliberately
/// small: everything the engine can fail with is one of these five kinds,
/// and nothing is silently swallowed or retried.
#[derive(Error, Debug)]
pub enum GarbError {
    /// Caller provided invalid input (blank category name, blank filename,
    /// blank search pattern).
    #[error("{0}")]
    InvalidInput(String),

    /// A specifically named outfit no longer exists on disk.
    #[error("not found: {0}")]
    NotFound(String),

    /// Listing, reading, or writing the wardrobe directory tree failed.
    #[error("filesystem error: {0}")]
    FileSystem(String),

    /// The rotation store file exists but could not be parsed.
    #[error("rotation store is corrupt: {0}")]
    CacheCorrupt(String),

    /// The configuration collaborator failed to load or save,
    /// including the "no configuration yet" case.
    #[error("configuration error: {0}")]
    Config(String),
}

impl GarbError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GarbError::InvalidInput(_) => exit_codes::USER_ERROR,
            GarbError::NotFound(_) => exit_codes::NOT_FOUND,
            GarbError::FileSystem(_) => exit_codes::FS_FAILURE,
            GarbError::CacheCorrupt(_) => exit_codes::CACHE_CORRUPT,
            GarbError::Config(_) => exit_codes::CONFIG_FAILURE,
        }
    }
}

/// Result type alias for garb operations.
pub type Result<T> = std::result::Result<T, GarbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_has_user_error_exit_code() {
        let err = GarbError::InvalidInput("category name must not be blank".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn not_found_has_correct_exit_code() {
        let err = GarbError::NotFound("casual/red-dress.png".to_string());
        assert_eq!(err.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn filesystem_error_has_correct_exit_code() {
        let err = GarbError::FileSystem("failed to list wardrobe root".to_string());
        assert_eq!(err.exit_code(), exit_codes::FS_FAILURE);
    }

    #[test]
    fn cache_corrupt_has_correct_exit_code() {
        let err = GarbError::CacheCorrupt("expected object at line 1".to_string());
        assert_eq!(err.exit_code(), exit_codes::CACHE_CORRUPT);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = GarbError::Config("no configuration yet".to_string());
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = GarbError::NotFound("casual/red-dress.png".to_string());
        assert_eq!(err.to_string(), "not found: casual/red-dress.png");

        let err = GarbError::CacheCorrupt("trailing garbage".to_string());
        assert_eq!(
            err.to_string(),
            "rotation store is corrupt: trailing garbage"
        );
    }
}
