//! core::config::schema
//!
//! Configuration schema types.
//!
//! The same schema is used for the global file and the per-repository file.
//! Every field is optional; unset fields fall through to the next scope.
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g., `count` must be at least 1).

use serde::Deserialize;

use super::ConfigError;

/// Contents of an lbranch config file.
///
/// # Example
///
/// ```toml
/// count = 10
/// exclude_current = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Number of branches to show
    pub count: Option<usize>,

    /// Hide the currently checked-out branch
    pub exclude_current: Option<bool>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == Some(0) {
            return Err(ConfigError::InvalidValue(
                "count must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merged_with(&self, other: &FileConfig) -> FileConfig {
        FileConfig {
            count: other.count.or(self.count),
            exclude_current: other.exclude_current.or(self.exclude_current),
        }
    }
}
