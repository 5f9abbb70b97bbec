//! Config loading, validation, and serialization.

use super::model::Config;
use crate::error::{GarbError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// A missing file is the "no configuration yet" case and surfaces as
    /// `GarbError::Config` with a hint to run `garb init`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            GarbError::Config(format!(
                "failed to read config file '{}': {}. Run 'garb init' first.",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| GarbError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| GarbError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `wardrobe_root` must be non-empty
    /// - excluded category names must be non-blank plain names
    ///   (no path separators, no `..`)
    pub fn validate(&self) -> Result<()> {
        if self.wardrobe_root.as_os_str().is_empty() {
            return Err(GarbError::Config(
                "config validation failed: wardrobe_root must be set".to_string(),
            ));
        }

        for name in &self.excluded_categories {
            validate_category_name(name).map_err(|e| {
                GarbError::Config(format!(
                    "config validation failed: excluded category {}",
                    e
                ))
            })?;
        }

        Ok(())
    }
}

/// Validate that a category name is a safe, non-blank directory name.
///
/// Category names are joined onto the wardrobe root, so anything that could
/// escape it is rejected.
pub fn validate_category_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GarbError::InvalidInput(
            "category name must not be blank".to_string(),
        ));
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(GarbError::InvalidInput(format!(
            "category name '{}' contains path traversal characters",
            name
        )));
    }
    Ok(())
}

/// Validate that an outfit filename is safe and non-blank.
pub fn validate_file_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GarbError::InvalidInput(
            "outfit filename must not be blank".to_string(),
        ));
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(GarbError::InvalidInput(format!(
            "outfit filename '{}' contains path traversal characters",
            name
        )));
    }
    Ok(())
}
